//! HTML fragment rendering for sentiment-analysis results.
//!
//! Fragments are produced with embedded `minijinja` templates. Template
//! names carry an `.html` suffix so the engine's default auto-escaping
//! applies: review text and backend-supplied strings are always escaped
//! before they reach a region. Scores are pre-formatted in Rust so the
//! three-decimal-place contract is independent of template behaviour.

pub mod detail;
pub mod list;
pub mod region;
pub mod score;
pub mod summary;

pub use region::{BufferRegion, DetailRegions, ListRegions, RegionSink, SummaryRegions};
pub use score::{Polarity, format_score, format_signed_score};

use minijinja::Environment;
use serde::Serialize;

use crate::backend::FetchError;

/// Template rendering a backend-reported error into a region.
const ERROR_TEMPLATE: &str = "<p>❌ Error: {{ message }}</p>";

/// Renderer holding the compiled fragment templates.
pub struct FragmentRenderer {
    env: Environment<'static>,
}

impl FragmentRenderer {
    /// Compiles the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when a template fails to compile;
    /// this indicates a packaging defect rather than a runtime condition.
    pub fn new() -> Result<Self, FetchError> {
        let mut env = Environment::new();
        let templates = [
            ("error.html", ERROR_TEMPLATE),
            ("list.html", list::LIST_TEMPLATE),
            ("detail_raw.html", detail::RAW_TEXT_TEMPLATE),
            ("sentences.html", detail::SENTENCES_TEMPLATE),
            ("extreme_sentence.html", detail::EXTREME_SENTENCE_TEMPLATE),
            ("paragraph.html", detail::PARAGRAPH_TEMPLATE),
            ("summary_image.html", summary::IMAGE_TEMPLATE),
        ];
        for (name, source) in templates {
            env.add_template(name, source).map_err(template_error)?;
        }
        Ok(Self { env })
    }

    /// Renders a backend-reported error message, escaped.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when rendering fails.
    pub fn error_fragment(&self, message: &str) -> Result<String, FetchError> {
        self.render("error.html", minijinja::context! { message => message })
    }

    pub(super) fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, FetchError> {
        let template = self.env.get_template(name).map_err(template_error)?;
        template.render(ctx).map_err(template_error)
    }
}

fn template_error(error: minijinja::Error) -> FetchError {
    FetchError::Template {
        message: error.to_string(),
    }
}
