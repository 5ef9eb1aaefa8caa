//! Backend intake for precomputed sentiment-analysis results.
//!
//! This module wraps the analysis backend's JSON API: it validates
//! identifiers, builds endpoint URLs, fetches responses over HTTP, and maps
//! them into typed domain models. Errors are mapped into user-presentable
//! variants so that views can surface precise failures without exposing
//! transport internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::FetchError;
pub use gateway::{AnalysisGateway, HttpAnalysisGateway};
pub use locator::{AppId, BackendLocator, ReviewId};
pub use models::{ReviewEntry, ReviewSummary, ScoredSpan, SentimentDetail, SummaryArtifact};

#[cfg(test)]
pub use gateway::MockAnalysisGateway;
