//! Reviewlens library crate for the Steam review sentiment dashboard.
//!
//! The library talks to the sentiment-analysis backend over HTTP, renders
//! the responses into escaped HTML fragments, and orchestrates the three
//! dashboard flows (review listing, per-review breakdown, and the
//! playtime-sentiment summary) with a latest-wins request lifecycle.

pub mod backend;
pub mod config;
pub mod render;
pub mod view;

pub use backend::{
    AnalysisGateway, AppId, BackendLocator, FetchError, HttpAnalysisGateway, ReviewId,
};
pub use config::{OperationMode, ReviewlensConfig};
pub use view::{ReviewDetailView, ReviewListView, SummaryView};
