//! Review list view: fetches the review summary and renders the listing.

use crate::backend::{AnalysisGateway, AppId, FetchError, ReviewSummary};
use crate::render::{FragmentRenderer, ListRegions};

use super::state::{ApplyOutcome, RequestSequence, RequestToken, ViewPhase};
use super::{LOADING_CONTENT, MISSING_APP_ID_STATUS};

const LOADING_STATUS: &str = "⏳ Running sentiment analysis on server...";
const SUCCESS_STATUS: &str =
    "✅ Analysis complete! Click into each review to analyse the sentiment!";
const FAILURE_STATUS: &str = "❌ Error running analysis!";
const FAILURE_CONTENT: &str = "<p>❌ Failed to load results</p>";

/// Orchestrates the review listing flow for one application.
pub struct ReviewListView<G> {
    gateway: G,
    renderer: FragmentRenderer,
    sequence: RequestSequence,
    phase: ViewPhase,
}

impl<G: AnalysisGateway> ReviewListView<G> {
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
    pub fn begin(&mut self, app_id_input: &str, regions: &mut ListRegions<'_>) -> Option<(RequestToken, AppId)> {
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

    /// Applies a resolved summary to the regions, unless superseded.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when the listing fragment fails to
    /// render.
    pub fn apply(
        &mut self,
        token: RequestToken,
        outcome: Result<ReviewSummary, FetchError>,
        regions: &mut ListRegions<'_>,
    ) -> Result<ApplyOutcome, FetchError> {
        if !self.sequence.is_current(token) {
            tracing::debug!("discarding superseded review list response");
            return Ok(ApplyOutcome::Superseded);
        }

        match outcome {
            Ok(summary) => {
                let fragment = self.renderer.review_list(&summary)?;
                self.phase = ViewPhase::Success;
                regions.status.replace(SUCCESS_STATUS.to_owned());
                regions.content.replace(fragment);
            }
            Err(FetchError::Backend { message }) => {
                self.phase = ViewPhase::Error;
                regions.status.replace(format!("❌ {message}"));
                regions.content.replace(String::new());
            }
            Err(error) => {
                tracing::warn!(%error, "review list request failed");
                self.phase = ViewPhase::Error;
                regions.status.replace(FAILURE_STATUS.to_owned());
                regions.content.replace(FAILURE_CONTENT.to_owned());
            }
        }
        Ok(ApplyOutcome::Applied)
    }

    /// Runs the whole flow: validate, fetch, and render.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when a fragment fails to render;
    /// fetch failures are rendered into the regions instead.
    pub async fn refresh(
        &mut self,
        app_id_input: &str,
        regions: &mut ListRegions<'_>,
    ) -> Result<(), FetchError> {
        let Some((token, app_id)) = self.begin(app_id_input, regions) else {
            return Ok(());
        };
        let outcome = self.gateway.review_summary(&app_id).await;
        self.apply(token, outcome, regions)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
