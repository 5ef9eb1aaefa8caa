//! Review detail view: fetches one review's sentiment breakdown and
//! populates six independent display regions.

use crate::backend::{AnalysisGateway, AppId, FetchError, ReviewId, SentimentDetail};
use crate::render::{DetailRegions, FragmentRenderer};

use super::state::{ApplyOutcome, RequestSequence, RequestToken, ViewPhase};

const FAILURE_CONTENT: &str = "<p>❌ Error loading sentiment analysis</p>";

/// Orchestrates the six-region sentiment breakdown flow for one review.
pub struct ReviewDetailView<G> {
    gateway: G,
    renderer: FragmentRenderer,
    sequence: RequestSequence,
    phase: ViewPhase,
}

impl<G: AnalysisGateway> ReviewDetailView<G> {
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

    /// Validates the identifiers and, when valid, enters `Loading`.
    ///
    /// Returns `None` when validation fails; region 1 then carries the
    /// validation message and no request may be issued.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when the validation fragment fails
    /// to render.
    pub fn begin(
        &mut self,
        review_id_input: &str,
        app_id_input: &str,
        regions: &mut DetailRegions<'_>,
    ) -> Result<Option<(RequestToken, ReviewId, AppId)>, FetchError> {
        let identifiers = ReviewId::new(review_id_input)
            .and_then(|review_id| AppId::new(app_id_input).map(|app_id| (review_id, app_id)));
        let (review_id, app_id) = match identifiers {
            Ok(pair) => pair,
            Err(error) => {
                let fragment = self.renderer.error_fragment(&error.to_string())?;
                regions.raw_text.replace(fragment);
                return Ok(None);
            }
        };

        let token = self.sequence.begin();
        self.phase = ViewPhase::Loading;
        regions.raw_text.replace(super::LOADING_CONTENT.to_owned());
        Ok(Some((token, review_id, app_id)))
    }

    /// Applies a resolved detail to the regions, unless superseded.
    ///
    /// On a backend-reported error only region 1 is written; regions 2–6
    /// are never touched, so a partial breakdown can never appear.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when a fragment fails to render.
    pub fn apply(
        &mut self,
        token: RequestToken,
        outcome: Result<SentimentDetail, FetchError>,
        regions: &mut DetailRegions<'_>,
    ) -> Result<ApplyOutcome, FetchError> {
        if !self.sequence.is_current(token) {
            tracing::debug!("discarding superseded sentiment detail response");
            return Ok(ApplyOutcome::Superseded);
        }

        match outcome {
            Ok(detail) => {
                // Render everything before writing anything so a template
                // failure cannot leave the regions half-populated.
                let raw_text = self.renderer.detail_raw_text(&detail)?;
                let breakdown = self.renderer.sentence_breakdown(&detail)?;
                let most_positive = self.renderer.most_positive_sentence(&detail)?;
                let most_negative = self.renderer.most_negative_sentence(&detail)?;
                let positive_paragraph = self.renderer.positive_paragraph(&detail)?;
                let negative_paragraph = self.renderer.negative_paragraph(&detail)?;

                self.phase = ViewPhase::Success;
                regions.raw_text.replace(raw_text);
                regions.sentence_breakdown.replace(breakdown);
                regions.most_positive_sentence.replace(most_positive);
                regions.most_negative_sentence.replace(most_negative);
                regions.positive_paragraph.replace(positive_paragraph);
                regions.negative_paragraph.replace(negative_paragraph);
            }
            Err(FetchError::Backend { message }) => {
                let fragment = self.renderer.error_fragment(&message)?;
                self.phase = ViewPhase::Error;
                regions.raw_text.replace(fragment);
            }
            Err(error) => {
                tracing::warn!(%error, "sentiment detail request failed");
                self.phase = ViewPhase::Error;
                regions.raw_text.replace(FAILURE_CONTENT.to_owned());
            }
        }
        Ok(ApplyOutcome::Applied)
    }

    /// Runs the whole flow: validate, fetch, and render all six regions.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when a fragment fails to render;
    /// fetch failures are rendered into region 1 instead.
    pub async fn load(
        &mut self,
        review_id_input: &str,
        app_id_input: &str,
        regions: &mut DetailRegions<'_>,
    ) -> Result<(), FetchError> {
        let Some((token, review_id, app_id)) =
            self.begin(review_id_input, app_id_input, regions)?
        else {
            return Ok(());
        };
        let outcome = self.gateway.sentiment_detail(&review_id, &app_id).await;
        self.apply(token, outcome, regions)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
