//! Playtime-sentiment summary chart operation.

use reviewlens::render::{BufferRegion, SummaryRegions};
use reviewlens::{FetchError, HttpAnalysisGateway, ReviewlensConfig, SummaryView};

use super::output::{self, PageSection};

/// Fetches the summary chart for the configured application and emits it.
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
    let mut view = SummaryView::new(gateway)?;

    let mut status = BufferRegion::new();
    let mut content = BufferRegion::new();
    let mut image_container = BufferRegion::new();
    let mut regions = SummaryRegions {
        status: &mut status,
        content: &mut content,
        image_container: &mut image_container,
    };
    view.run(app_id, &mut regions).await?;

    let sections = [
        PageSection {
            id: "summary_status",
            body: status.contents(),
        },
        PageSection {
            id: "content",
            body: content.contents(),
        },
        PageSection {
            id: "image_container",
            body: image_container.contents(),
        },
    ];
    output::emit(config.out.as_deref(), "Playtime-sentiment summary", &sections)
}
