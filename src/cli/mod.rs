//! CLI operation mode handlers.
//!
//! This module contains the implementations for the dashboard's operation
//! modes:
//! - [`review_list`]: Fetch and render the review listing for an application
//! - [`review_detail`]: Fetch and render one review's sentiment breakdown
//! - [`summary`]: Fetch the playtime-sentiment summary chart
//!
//! Output formatting utilities are in [`output`].

use reviewlens::{FetchError, OperationMode, ReviewlensConfig};

pub mod output;
pub mod review_detail;
pub mod review_list;
pub mod summary;

/// Dispatches to the handler for the configured operation mode.
///
/// # Errors
///
/// Propagates the selected handler's errors.
pub async fn dispatch(config: &ReviewlensConfig) -> Result<(), FetchError> {
    match config.operation_mode() {
        OperationMode::ReviewList => review_list::run(config).await,
        OperationMode::ReviewDetail => review_detail::run(config).await,
        OperationMode::Summary => summary::run(config).await,
    }
}
