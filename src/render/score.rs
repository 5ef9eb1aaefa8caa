//! Sign-based polarity classification and score formatting.

/// Sentiment polarity of a score, decided purely by its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Score strictly above zero.
    Positive,
    /// Score strictly below zero.
    Negative,
    /// Score exactly zero; there is no dead zone.
    Neutral,
}

impl Polarity {
    /// Classifies a score by sign.
    #[must_use]
    pub fn of(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// CSS class used by the dashboard styling for sentence rows.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Positive => "positive-sentiment",
            Self::Negative => "negative-sentiment",
            Self::Neutral => "neutral-sentiment",
        }
    }

    /// Mood marker shown next to the score.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Positive => "😊",
            Self::Negative => "😞",
            Self::Neutral => "😐",
        }
    }
}

/// Formats a score with exactly three digits after the decimal point.
#[must_use]
pub fn format_score(score: f64) -> String {
    // -0.0 would otherwise format with a sign.
    let score = if score == 0.0 { 0.0 } else { score };
    format!("{score:.3}")
}

/// Formats a score with an explicit `+` prefix for strictly positive values.
///
/// Negative values carry their own sign and zero stays unsigned.
#[must_use]
pub fn format_signed_score(score: f64) -> String {
    if score > 0.0 {
        format!("+{score:.3}")
    } else {
        format_score(score)
    }
}
