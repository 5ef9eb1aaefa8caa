//! Identifier wrappers and backend URL construction.

use url::Url;

use super::error::FetchError;

/// Application identifier wrapper enforcing presence.
///
/// A blank identifier is a validation error, caught before any request is
/// issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppId(String);

impl AppId {
    /// Validates that the identifier is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingAppId`] when the supplied string is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, FetchError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FetchError::MissingAppId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Review identifier wrapper to prevent parameter mix-ups with [`AppId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewId(String);

impl ReviewId {
    /// Validates that the identifier is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingReviewId`] when the supplied string is
    /// blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, FetchError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FetchError::MissingReviewId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ReviewId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Endpoint serving the review summary for an application.
const REVIEWS_ENDPOINT: &str = "getReviews";
/// Endpoint serving one review's full sentiment breakdown.
const REVIEW_DETAIL_ENDPOINT: &str = "returnReview";
/// Endpoint producing the summary chart artifact.
const SUMMARY_ENDPOINT: &str = "summaryVisualisation";

/// Parsed backend base URL with endpoint construction helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendLocator {
    base: Url,
}

impl BackendLocator {
    /// Parses the backend base URL.
    ///
    /// A trailing slash is appended to the path when missing so that
    /// endpoint joins resolve beneath the base rather than replacing its
    /// final segment.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] when the URL cannot be parsed
    /// or lacks a host.
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let mut base =
            Url::parse(input).map_err(|error| FetchError::InvalidBaseUrl(error.to_string()))?;

        if base.host_str().is_none() {
            return Err(FetchError::InvalidBaseUrl(
                "backend URL must include a host".to_owned(),
            ));
        }

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { base })
    }

    /// URL for the review summary of the given application.
    #[must_use]
    pub fn reviews_url(&self, app_id: &AppId) -> Url {
        let mut url = self.endpoint(REVIEWS_ENDPOINT);
        url.query_pairs_mut().append_pair("app_id", app_id.as_str());
        url
    }

    /// URL for one review's sentiment breakdown.
    #[must_use]
    pub fn review_url(&self, review_id: &ReviewId, app_id: &AppId) -> Url {
        let mut url = self.endpoint(REVIEW_DETAIL_ENDPOINT);
        url.query_pairs_mut()
            .append_pair("review_id", review_id.as_str())
            .append_pair("app_id", app_id.as_str());
        url
    }

    /// URL for the summary chart artifact of the given application.
    #[must_use]
    pub fn summary_url(&self, app_id: &AppId) -> Url {
        let mut url = self.endpoint(SUMMARY_ENDPOINT);
        url.query_pairs_mut().append_pair("app_id", app_id.as_str());
        url
    }

    fn endpoint(&self, name: &str) -> Url {
        // The base path is normalised with a trailing slash in `parse`, so
        // joining a bare endpoint name cannot fail or escape the base.
        self.base.join(name).unwrap_or_else(|_| self.base.clone())
    }
}
