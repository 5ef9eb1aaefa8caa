//! Summary view: fetches the chart artifact and inserts the image once.

use crate::backend::{AnalysisGateway, AppId, FetchError, SummaryArtifact};
use crate::render::{FragmentRenderer, SummaryRegions};

use super::state::{ApplyOutcome, RequestSequence, RequestToken, ViewPhase};
use super::{LOADING_CONTENT, MISSING_APP_ID_STATUS};

const LOADING_STATUS: &str = "⏳ Running summary analysis on server...";
const SUCCESS_STATUS: &str = "✅ Summary complete!";
const FAILURE_STATUS: &str = "❌ Error running summary!";
const FAILURE_CONTENT: &str = "<p>❌ Failed to load summary</p>";

/// Orchestrates the summary chart flow for one application.
pub struct SummaryView<G> {
    gateway: G,
    renderer: FragmentRenderer,
    sequence: RequestSequence,
    phase: ViewPhase,
}

impl<G: AnalysisGateway> SummaryView<G> {
    /// Creates the view around a gateway.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when the fragment templates fail to
    /// compile.
    pub fn new(gateway: G) -> Result<Self, FetchError> {
        Ok(Self {
            gateway,
            renderer: FragmentRenderer::new()?,
            sequence: RequestSequence::default(),
            phase: ViewPhase::default(),
        })
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> ViewPhase {
        self.phase
    }

    /// Validates the identifier and, when valid, enters `Loading`, writing
    /// the loading interstitials.
    ///
    /// Returns `None` when validation fails; the status region then carries
    /// the validation message and no request may be issued.
    pub fn begin(
        &mut self,
        app_id_input: &str,
        regions: &mut SummaryRegions<'_>,
    ) -> Option<(RequestToken, AppId)> {
        let Ok(app_id) = AppId::new(app_id_input) else {
            regions.status.replace(MISSING_APP_ID_STATUS.to_owned());
            return None;
        };

        let token = self.sequence.begin();
        self.phase = ViewPhase::Loading;
        regions.status.replace(LOADING_STATUS.to_owned());
        regions.content.replace(LOADING_CONTENT.to_owned());
        Some((token, app_id))
    }

    /// Applies a resolved artifact to the regions, unless superseded.
    ///
    /// The image is appended only while the container is empty, so repeated
    /// invocations within one page lifetime never insert a second image
    /// node.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when the image fragment fails to
    /// render.
    pub fn apply(
        &mut self,
        token: RequestToken,
        outcome: Result<SummaryArtifact, FetchError>,
        regions: &mut SummaryRegions<'_>,
    ) -> Result<ApplyOutcome, FetchError> {
        if !self.sequence.is_current(token) {
            tracing::debug!("discarding superseded summary response");
            return Ok(ApplyOutcome::Superseded);
        }

        match outcome {
            Ok(artifact) => {
                let fragment = self.renderer.summary_image(&artifact)?;
                self.phase = ViewPhase::Success;
                regions.status.replace(SUCCESS_STATUS.to_owned());
                if regions.image_container.is_empty() {
                    regions.image_container.append(fragment);
                }
                regions.content.replace(String::new());
            }
            Err(FetchError::Backend { message }) => {
                self.phase = ViewPhase::Error;
                regions.status.replace(format!("❌ {message}"));
                regions.content.replace(String::new());
            }
            Err(error) => {
                tracing::warn!(%error, "summary request failed");
                self.phase = ViewPhase::Error;
                regions.status.replace(FAILURE_STATUS.to_owned());
                regions.content.replace(FAILURE_CONTENT.to_owned());
            }
        }
        Ok(ApplyOutcome::Applied)
    }

    /// Runs the whole flow: validate, fetch, and insert the image.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when the image fragment fails to
    /// render; fetch failures are rendered into the status region instead.
    pub async fn run(
        &mut self,
        app_id_input: &str,
        regions: &mut SummaryRegions<'_>,
    ) -> Result<(), FetchError> {
        let Some((token, app_id)) = self.begin(app_id_input, regions) else {
            return Ok(());
        };
        let outcome = self.gateway.summary_artifact(&app_id).await;
        self.apply(token, outcome, regions)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
