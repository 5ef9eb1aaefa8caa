//! The six review-detail fragments.
//!
//! Each render method produces one region's fragment; the detail view
//! decides which regions receive them. Placeholders stand in for every
//! optional field so a sparse backend response can never fail a render.

use serde::Serialize;

use crate::backend::{FetchError, ScoredSpan, SentimentDetail};

use super::score::{Polarity, format_score, format_signed_score};
use super::FragmentRenderer;

/// Placeholder shown when a review has no text.
pub const NO_REVIEW_TEXT: &str = "No review text available";
/// Placeholder shown when a sentence has no text.
pub const NO_SENTENCE_TEXT: &str = "No text available";
/// Placeholder shown when no positive paragraph was found.
pub const NO_POSITIVE_PARAGRAPH: &str = "No positive paragraph found";
/// Placeholder shown when no negative paragraph was found.
pub const NO_NEGATIVE_PARAGRAPH: &str = "No negative paragraph found";

pub(super) const RAW_TEXT_TEMPLATE: &str = "\
<div class=\"analysis-complete-badge\"><strong>✅ Analysis Complete!</strong></div>
<div class=\"review-content-display\">
  <h4 class=\"content-subtitle\">Complete Review Text</h4>
  <div class=\"review-text-container\"><p class=\"review-text\">{{ review_text }}</p></div>
  <div class=\"review-stats\">
    <span class=\"stat-item\"><strong>Sentences Analyzed:</strong> {{ sentence_count }}</span>
    <span class=\"stat-item\"><strong>Review ID:</strong> {{ review_id }}</span>
  </div>
</div>";

pub(super) const SENTENCES_TEMPLATE: &str = "\
<div class=\"sentence-analysis-header\">
  <h4 class=\"content-subtitle\">Individual Sentence Breakdown</h4>
  <p class=\"analysis-description\">Each sentence analyzed for sentiment with numerical scores</p>
</div>
<div class=\"sentence-list\">
{% for row in rows %}  <div class=\"sentence-item {{ row.polarity_class }}\">
    <div class=\"sentence-header\">
      <span class=\"sentence-number\">Sentence {{ loop.index }}</span>
      <span class=\"sentiment-score {{ row.polarity_class }}\">{{ row.icon }} Score: {{ row.score }}</span>
    </div>
    <div class=\"sentence-text\">{{ row.text }}</div>
  </div>
{% endfor %}</div>";

pub(super) const EXTREME_SENTENCE_TEMPLATE: &str = "\
<div class=\"extreme-sentiment-content\">
  <div class=\"sentiment-badge {{ badge_class }}\"><span class=\"badge-text\">{{ badge_label }}</span></div>
  <div class=\"sentiment-details\">
    <div class=\"score-display {{ score_class }}\">{{ score }}</div>
    <div class=\"sentence-content\">\"{{ text }}\"</div>
  </div>
</div>";

pub(super) const PARAGRAPH_TEMPLATE: &str = "\
<div class=\"paragraph-analysis-content\">
  <div class=\"analysis-method-badge\"><span class=\"method-name\">Sliding Window Analysis</span></div>
  <div class=\"paragraph-result {{ result_class }}\">
    <div class=\"paragraph-score-header\">
      <span class=\"context-label\">{{ label }}</span>
      <span class=\"paragraph-score {{ score_class }}\">Score: {{ score }}</span>
    </div>
    <div class=\"paragraph-content\"><p class=\"paragraph-text\">{{ text }}</p></div>
  </div>
</div>";

#[derive(Debug, Serialize)]
struct SentenceRowContext {
    polarity_class: &'static str,
    icon: &'static str,
    score: String,
    text: String,
}

/// Which extreme a sentence or paragraph fragment presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extreme {
    Positive,
    Negative,
}

impl FragmentRenderer {
    /// Renders region 1: the full review text with sentence count and
    /// review identifier. Missing text renders a placeholder, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when rendering fails.
    pub fn detail_raw_text(&self, detail: &SentimentDetail) -> Result<String, FetchError> {
        let review_text = detail
            .review_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_REVIEW_TEXT);

        self.render(
            "detail_raw.html",
            minijinja::context! {
                review_text => review_text,
                sentence_count => detail.sentence_scores.len(),
                review_id => &detail.review_id,
            },
        )
    }

    /// Renders region 2: one row per sentence, in original order, tagged by
    /// sign-only polarity with the score at three decimal places.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when rendering fails.
    pub fn sentence_breakdown(&self, detail: &SentimentDetail) -> Result<String, FetchError> {
        let rows: Vec<SentenceRowContext> = detail
            .sentence_scores
            .iter()
            .map(|span| {
                let polarity = Polarity::of(span.score);
                SentenceRowContext {
                    polarity_class: polarity.css_class(),
                    icon: polarity.icon(),
                    score: format_score(span.score),
                    text: if span.text.is_empty() {
                        NO_SENTENCE_TEXT.to_owned()
                    } else {
                        span.text.clone()
                    },
                }
            })
            .collect();

        self.render("sentences.html", minijinja::context! { rows => rows })
    }

    /// Renders region 3: the first element of the backend-sorted sentence
    /// scores, with an explicit `+` for positive scores.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when rendering fails.
    pub fn most_positive_sentence(&self, detail: &SentimentDetail) -> Result<String, FetchError> {
        self.extreme_sentence(detail.sorted_sentence_scores.first(), Extreme::Positive)
    }

    /// Renders region 4: the last element of the backend-sorted sentence
    /// scores.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when rendering fails.
    pub fn most_negative_sentence(&self, detail: &SentimentDetail) -> Result<String, FetchError> {
        self.extreme_sentence(detail.sorted_sentence_scores.last(), Extreme::Negative)
    }

    /// Renders region 5: the most positive sliding-window paragraph.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when rendering fails.
    pub fn positive_paragraph(&self, detail: &SentimentDetail) -> Result<String, FetchError> {
        self.paragraph(detail.most_positive_paragraph.as_ref(), Extreme::Positive)
    }

    /// Renders region 6: the most negative sliding-window paragraph.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Template`] when rendering fails.
    pub fn negative_paragraph(&self, detail: &SentimentDetail) -> Result<String, FetchError> {
        self.paragraph(detail.most_negative_paragraph.as_ref(), Extreme::Negative)
    }

    fn extreme_sentence(
        &self,
        span: Option<&ScoredSpan>,
        extreme: Extreme,
    ) -> Result<String, FetchError> {
        let (badge_label, badge_class, score_class) = match extreme {
            Extreme::Positive => (
                "Highest Positive Sentence",
                "positive-badge",
                "positive-score",
            ),
            Extreme::Negative => (
                "Highest Negative Sentence",
                "negative-badge",
                "negative-score",
            ),
        };
        let score = match (span, extreme) {
            (Some(span), Extreme::Positive) => format_signed_score(span.score),
            (Some(span), Extreme::Negative) => format_score(span.score),
            (None, _) => format_score(0.0),
        };
        let text = span
            .map(|span| span.text.as_str())
            .filter(|text| !text.is_empty())
            .unwrap_or(NO_SENTENCE_TEXT);

        self.render(
            "extreme_sentence.html",
            minijinja::context! {
                badge_label => badge_label,
                badge_class => badge_class,
                score_class => score_class,
                score => score,
                text => text,
            },
        )
    }

    fn paragraph(
        &self,
        span: Option<&ScoredSpan>,
        extreme: Extreme,
    ) -> Result<String, FetchError> {
        let (label, result_class, score_class, placeholder) = match extreme {
            Extreme::Positive => (
                "Most Positive Paragraph",
                "positive-paragraph",
                "positive-score",
                NO_POSITIVE_PARAGRAPH,
            ),
            Extreme::Negative => (
                "Most Negative Paragraph",
                "negative-paragraph",
                "negative-score",
                NO_NEGATIVE_PARAGRAPH,
            ),
        };
        let score = match (span, extreme) {
            (Some(span), Extreme::Positive) => format_signed_score(span.score),
            (Some(span), Extreme::Negative) => format_score(span.score),
            (None, _) => format_score(0.0),
        };
        let text = span
            .map(|span| span.text.as_str())
            .filter(|text| !text.is_empty())
            .unwrap_or(placeholder);

        self.render(
            "paragraph.html",
            minijinja::context! {
                label => label,
                result_class => result_class,
                score_class => score_class,
                score => score,
                text => text,
            },
        )
    }
}

#[cfg(test)]
#[path = "detail_tests.rs"]
mod tests;
