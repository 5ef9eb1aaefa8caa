//! Single review sentiment breakdown operation.

use reviewlens::render::{BufferRegion, DetailRegions};
use reviewlens::{FetchError, HttpAnalysisGateway, ReviewDetailView, ReviewlensConfig};

use super::output::{self, PageSection};

/// Fetches the sentiment breakdown for the configured review and emits it.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] if an identifier is missing,
/// [`FetchError::InvalidBaseUrl`] if the backend address cannot be parsed,
/// and [`FetchError::Io`] if emitting the document fails. Fetch failures are
/// rendered into the document instead of propagating.
pub async fn run(config: &ReviewlensConfig) -> Result<(), FetchError> {
    let review_id = config.require_review_id()?;
    let app_id = config.require_app_id()?;
    let gateway = HttpAnalysisGateway::for_base_url(config.backend_url())?;
    let mut view = ReviewDetailView::new(gateway)?;

    let mut raw_text = BufferRegion::new();
    let mut sentence_breakdown = BufferRegion::new();
    let mut most_positive_sentence = BufferRegion::new();
    let mut most_negative_sentence = BufferRegion::new();
    let mut positive_paragraph = BufferRegion::new();
    let mut negative_paragraph = BufferRegion::new();
    let mut regions = DetailRegions {
        raw_text: &mut raw_text,
        sentence_breakdown: &mut sentence_breakdown,
        most_positive_sentence: &mut most_positive_sentence,
        most_negative_sentence: &mut most_negative_sentence,
        positive_paragraph: &mut positive_paragraph,
        negative_paragraph: &mut negative_paragraph,
    };
    view.load(review_id, app_id, &mut regions).await?;

    let sections = [
        PageSection {
            id: "review_text",
            body: raw_text.contents(),
        },
        PageSection {
            id: "sentence_breakdown",
            body: sentence_breakdown.contents(),
        },
        PageSection {
            id: "most_positive_sentence",
            body: most_positive_sentence.contents(),
        },
        PageSection {
            id: "most_negative_sentence",
            body: most_negative_sentence.contents(),
        },
        PageSection {
            id: "positive_paragraph",
            body: positive_paragraph.contents(),
        },
        PageSection {
            id: "negative_paragraph",
            body: negative_paragraph.contents(),
        },
    ];
    output::emit(config.out.as_deref(), "Review sentiment breakdown", &sections)
}
