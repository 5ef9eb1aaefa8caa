//! Request orchestration for the three dashboard views.
//!
//! Each view owns a gateway, a renderer, and its request lifecycle state.
//! A view exposes a `begin` / `apply` pair so that an embedding host can
//! decouple triggering from resolution (and benefit from the latest-wins
//! token guard), plus a convenience method that runs the whole round trip
//! on one task. Every failure mode ends up as rendered region content;
//! only fragment-rendering defects propagate as errors.

pub mod detail;
pub mod list;
pub mod state;
pub mod summary;

pub use detail::ReviewDetailView;
pub use list::ReviewListView;
pub use state::{ApplyOutcome, RequestSequence, RequestToken, ViewPhase};
pub use summary::SummaryView;

/// Status shown when the application identifier is blank.
pub(crate) const MISSING_APP_ID_STATUS: &str = "❌ Please enter a valid App ID!";
/// Interstitial content shown while a request is in flight.
pub(crate) const LOADING_CONTENT: &str = "⏳ Loading...";
