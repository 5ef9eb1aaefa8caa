//! Summary chart image fragment.

use crate::backend::{FetchError, SummaryArtifact};

use super::FragmentRenderer;

/// Fixed display width for the summary chart.
const IMAGE_WIDTH_PX: u32 = 1000;
/// Fixed alternative text for the summary chart.
const IMAGE_ALT_TEXT: &str = "A summary of the Steam Reviews";

pub(super) const IMAGE_TEMPLATE: &str =
    "<img src=\"{{ src }}\" alt=\"{{ alt }}\" style=\"width: {{ width }}px\">";

impl FragmentRenderer {
    /// Renders the summary chart image element.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when rendering fails.
    pub fn summary_image(&self, artifact: &SummaryArtifact) -> Result<String, FetchError> {
        self.render(
            "summary_image.html",
            minijinja::context! {
                src => &artifact.image_path,
                alt => IMAGE_ALT_TEXT,
                width => IMAGE_WIDTH_PX,
            },
        )
    }
}
