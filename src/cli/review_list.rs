//! Review listing operation.

use reviewlens::render::{BufferRegion, ListRegions};
use reviewlens::{FetchError, HttpAnalysisGateway, ReviewListView, ReviewlensConfig};

use super::output::{self, PageSection};

/// Fetches the review listing for the configured application and emits it.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] if the application identifier is
/// missing, [`FetchError::InvalidBaseUrl`] if the backend address cannot be
/// parsed, and [`FetchError::Io`] if emitting the document fails. Fetch
/// failures are rendered into the document instead of propagating.
pub async fn run(config: &ReviewlensConfig) -> Result<(), FetchError> {
    let app_id = config.require_app_id()?;
    let gateway = HttpAnalysisGateway::for_base_url(config.backend_url())?;
    let mut view = ReviewListView::new(gateway)?;

    let mut status = BufferRegion::new();
    let mut content = BufferRegion::new();
    let mut regions = ListRegions {
        status: &mut status,
        content: &mut content,
    };
    view.refresh(app_id, &mut regions).await?;

    let sections = [
        PageSection {
            id: "analysis_status",
            body: status.contents(),
        },
        PageSection {
            id: "results",
            body: content.contents(),
        },
    ];
    output::emit(config.out.as_deref(), "Review listing", &sections)
}
