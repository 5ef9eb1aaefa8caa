//! Data models for backend sentiment-analysis responses.
//!
//! Wire structs mirror the backend JSON exactly (including its tolerance
//! quirks: identifiers that arrive as numbers or strings, optional fields,
//! and drifted field names), while the public domain structs expose the
//! validated shape the renderer consumes.

use serde::Deserialize;

use super::error::FetchError;
use super::locator::{AppId, ReviewId};

/// A span of review text with its sentiment score.
///
/// The sign of `score` determines polarity: positive above zero, negative
/// below, neutral at exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSpan {
    /// The sentence or paragraph text.
    pub text: String,
    /// Signed sentiment score.
    pub score: f64,
}

/// One review entry in the summary listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEntry {
    /// Identifier used to reach the detail view.
    pub review_id: String,
    /// Raw review text shown in the listing.
    pub text: String,
}

/// Review summary for one application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    /// Application identifier as reported by the backend.
    pub app_id: String,
    /// Total number of reviews the backend analysed.
    pub total_reviews: u64,
    /// Analysis timestamp string, passed through verbatim.
    pub timestamp: String,
    /// Review entries in backend response order.
    pub entries: Vec<ReviewEntry>,
}

/// Full sentiment breakdown for a single review.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentDetail {
    /// Review identifier, falling back to the requested one when the
    /// response omits it.
    pub review_id: String,
    /// Full review text when present.
    pub review_text: Option<String>,
    /// Per-sentence scores in original sentence order.
    pub sentence_scores: Vec<ScoredSpan>,
    /// Per-sentence scores sorted by the backend, descending.
    pub sorted_sentence_scores: Vec<ScoredSpan>,
    /// Sliding-window paragraph with the highest score, when found.
    pub most_positive_paragraph: Option<ScoredSpan>,
    /// Sliding-window paragraph with the lowest score, when found.
    pub most_negative_paragraph: Option<ScoredSpan>,
}

/// Reference to the precomputed summary chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryArtifact {
    /// Image location to embed in the summary fragment.
    pub image_path: String,
}

impl SummaryArtifact {
    /// Static path convention used when the backend omits `output_path`.
    pub const DEFAULT_IMAGE_PATH: &'static str = "../static/css/sentiment_playtime_analysis.png";
}

/// Identifier that the backend serialises either as a string or a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(super) enum IdValue {
    /// String form, passed through as-is.
    Text(String),
    /// Numeric form, rendered in decimal.
    Integer(i64),
}

impl IdValue {
    fn into_string(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Integer(value) => value.to_string(),
        }
    }
}

/// `[text, score]` pair as the backend serialises scored sentences.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct WirePair(pub(super) String, pub(super) f64);

impl From<WirePair> for ScoredSpan {
    fn from(value: WirePair) -> Self {
        Self {
            text: value.0,
            score: value.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct WireReviewSummary {
    pub(super) error: Option<String>,
    pub(super) app_id: Option<IdValue>,
    #[serde(default)]
    pub(super) total_reviews: u64,
    #[serde(default)]
    pub(super) timestamp: String,
    #[serde(default)]
    pub(super) reviews: Vec<String>,
    #[serde(default, alias = "review_ids")]
    pub(super) review_id: Vec<IdValue>,
}

impl WireReviewSummary {
    /// Validates the parallel-array invariant and zips the listing.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Decode`] when `reviews` and `review_id` differ
    /// in length; a silent truncation would mislink entries.
    pub(super) fn into_summary(self, requested: &AppId) -> Result<ReviewSummary, FetchError> {
        if self.reviews.len() != self.review_id.len() {
            return Err(FetchError::Decode {
                message: format!(
                    "review listing misaligned: {} reviews but {} identifiers",
                    self.reviews.len(),
                    self.review_id.len()
                ),
            });
        }

        let entries = self
            .reviews
            .into_iter()
            .zip(self.review_id)
            .map(|(text, id)| ReviewEntry {
                review_id: id.into_string(),
                text,
            })
            .collect();

        Ok(ReviewSummary {
            app_id: self
                .app_id
                .map_or_else(|| requested.as_str().to_owned(), IdValue::into_string),
            total_reviews: self.total_reviews,
            timestamp: self.timestamp,
            entries,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct WireSentimentDetail {
    pub(super) error: Option<String>,
    pub(super) review_id: Option<IdValue>,
    pub(super) review_text: Option<String>,
    #[serde(default, alias = "sentence_scores")]
    pub(super) sentence_score: Vec<WirePair>,
    #[serde(default, alias = "sorted_sentence_scores")]
    pub(super) sorted_sentence_score: Vec<WirePair>,
    pub(super) most_positive_paragraph_score: Option<f64>,
    pub(super) most_negative_paragraph_score: Option<f64>,
    pub(super) most_positive_paragraph_text: Option<String>,
    pub(super) most_negative_paragraph_text: Option<String>,
}

impl WireSentimentDetail {
    pub(super) fn into_detail(self, requested: &ReviewId) -> SentimentDetail {
        SentimentDetail {
            review_id: self
                .review_id
                .map_or_else(|| requested.as_str().to_owned(), IdValue::into_string),
            review_text: self.review_text,
            sentence_scores: self.sentence_score.into_iter().map(Into::into).collect(),
            sorted_sentence_scores: self
                .sorted_sentence_score
                .into_iter()
                .map(Into::into)
                .collect(),
            most_positive_paragraph: paragraph(
                self.most_positive_paragraph_text,
                self.most_positive_paragraph_score,
            ),
            most_negative_paragraph: paragraph(
                self.most_negative_paragraph_text,
                self.most_negative_paragraph_score,
            ),
        }
    }
}

/// Builds a paragraph extreme from its independently optional halves.
///
/// The backend may supply a score without text or vice versa; the extreme
/// counts as present when either half arrived. Missing halves default to an
/// empty string and zero, which the renderer maps to placeholders.
fn paragraph(text: Option<String>, score: Option<f64>) -> Option<ScoredSpan> {
    if text.is_none() && score.is_none() {
        return None;
    }
    Some(ScoredSpan {
        text: text.unwrap_or_default(),
        score: score.unwrap_or(0.0),
    })
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct WireSummaryArtifact {
    pub(super) error: Option<String>,
    pub(super) output_path: Option<String>,
}

impl WireSummaryArtifact {
    pub(super) fn into_artifact(self) -> SummaryArtifact {
        SummaryArtifact {
            image_path: self
                .output_path
                .unwrap_or_else(|| SummaryArtifact::DEFAULT_IMAGE_PATH.to_owned()),
        }
    }
}
