//! Gateways for fetching sentiment-analysis results over HTTP.
//!
//! The trait-based design enables mocking in view tests while the reqwest
//! implementation handles real requests against the backend.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use super::error::FetchError;
use super::locator::{AppId, BackendLocator, ReviewId};
use super::models::{
    ReviewSummary, SentimentDetail, SummaryArtifact, WireReviewSummary, WireSentimentDetail,
    WireSummaryArtifact,
};

/// Gateway that can load precomputed sentiment-analysis results.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Fetch the review summary for an application.
    async fn review_summary(&self, app_id: &AppId) -> Result<ReviewSummary, FetchError>;

    /// Fetch one review's full sentiment breakdown.
    async fn sentiment_detail(
        &self,
        review_id: &ReviewId,
        app_id: &AppId,
    ) -> Result<SentimentDetail, FetchError>;

    /// Fetch the summary chart artifact reference for an application.
    async fn summary_artifact(&self, app_id: &AppId) -> Result<SummaryArtifact, FetchError>;
}

/// Reqwest-backed gateway.
///
/// No client-side timeout is configured; the transport default applies, and
/// stale responses are discarded by the views' request tokens rather than
/// cancelled here.
pub struct HttpAnalysisGateway {
    client: Client,
    locator: BackendLocator,
}

impl HttpAnalysisGateway {
    /// Creates a gateway from an already-parsed locator.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when the HTTP client cannot be
    /// constructed.
    pub fn new(locator: BackendLocator) -> Result<Self, FetchError> {
        let client = Client::builder()
            .build()
            .map_err(|error| FetchError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client, locator })
    }

    /// Builds a gateway for the given backend base URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidBaseUrl`] when the base URL cannot be
    /// parsed, or [`FetchError::Configuration`] when the HTTP client cannot
    /// be constructed.
    pub fn for_base_url(base_url: &str) -> Result<Self, FetchError> {
        let locator = BackendLocator::parse(base_url)?;
        Self::new(locator)
    }

    async fn get_with_status<T: DeserializeOwned>(
        &self,
        operation: &str,
        url: Url,
    ) -> Result<(StatusCode, T), FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| FetchError::Network {
                message: format!("{operation} failed: {error}"),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| FetchError::Network {
                message: format!("{operation} response read failed: {error}"),
            })?;

        decode(operation, status, &body).map(|wire| (status, wire))
    }
}

/// Decodes a wire payload, mapping non-JSON failure bodies to API errors.
///
/// A parseable body is returned regardless of status so that the caller can
/// give a backend-reported `error` field precedence over the status code.
fn decode<T: DeserializeOwned>(
    operation: &str,
    status: StatusCode,
    body: &str,
) -> Result<T, FetchError> {
    match serde_json::from_str(body) {
        Ok(wire) => Ok(wire),
        Err(error) if status.is_success() => Err(FetchError::Decode {
            message: format!("{operation} response is not valid JSON: {error}"),
        }),
        Err(_) => Err(FetchError::Api {
            message: format!("{operation} failed with status {status}"),
        }),
    }
}

/// Rejects responses the backend flagged as logical errors, then responses
/// whose status signals failure without an error field.
fn reject_failures(
    operation: &str,
    status: StatusCode,
    error: Option<String>,
) -> Result<(), FetchError> {
    if let Some(message) = error {
        return Err(FetchError::Backend { message });
    }
    if !status.is_success() {
        return Err(FetchError::Api {
            message: format!("{operation} failed with status {status}"),
        });
    }
    Ok(())
}

#[async_trait]
impl AnalysisGateway for HttpAnalysisGateway {
    async fn review_summary(&self, app_id: &AppId) -> Result<ReviewSummary, FetchError> {
        const OPERATION: &str = "review summary";
        let url = self.locator.reviews_url(app_id);
        let (status, wire) = self.get_with_status::<WireReviewSummary>(OPERATION, url).await?;
        reject_failures(OPERATION, status, wire.error.clone())?;
        wire.into_summary(app_id)
    }

    async fn sentiment_detail(
        &self,
        review_id: &ReviewId,
        app_id: &AppId,
    ) -> Result<SentimentDetail, FetchError> {
        const OPERATION: &str = "sentiment detail";
        let url = self.locator.review_url(review_id, app_id);
        let (status, wire) = self
            .get_with_status::<WireSentimentDetail>(OPERATION, url)
            .await?;
        reject_failures(OPERATION, status, wire.error.clone())?;
        Ok(wire.into_detail(review_id))
    }

    async fn summary_artifact(&self, app_id: &AppId) -> Result<SummaryArtifact, FetchError> {
        const OPERATION: &str = "summary artifact";
        let url = self.locator.summary_url(app_id);
        let (status, wire) = self
            .get_with_status::<WireSummaryArtifact>(OPERATION, url)
            .await?;
        reject_failures(OPERATION, status, wire.error.clone())?;
        Ok(wire.into_artifact())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{AnalysisGateway, AppId, FetchError, HttpAnalysisGateway, ReviewId};
    use crate::backend::models::SummaryArtifact;

    fn app_id() -> AppId {
        AppId::new("315210").expect("identifier should be accepted")
    }

    fn review_id() -> ReviewId {
        ReviewId::new("77").expect("identifier should be accepted")
    }

    async fn gateway_for(server: &MockServer) -> HttpAnalysisGateway {
        HttpAnalysisGateway::for_base_url(&server.uri()).expect("gateway should build")
    }

    #[tokio::test]
    async fn review_summary_maps_listing_fields() {
        let server = MockServer::start().await;
        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "app_id": 315210,
            "total_reviews": 2,
            "timestamp": "2025-08-01 12:00:00",
            "reviews": ["Great game", "Terrible servers"],
            "review_id": [11, 12]
        }));
        Mock::given(method("GET"))
            .and(path("/getReviews"))
            .and(query_param("app_id", "315210"))
            .respond_with(response)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let summary = gateway
            .review_summary(&app_id())
            .await
            .expect("request should succeed");

        assert_eq!(summary.app_id, "315210");
        assert_eq!(summary.total_reviews, 2);
        assert_eq!(summary.entries.len(), 2);
        let first = summary.entries.first().expect("first entry should exist");
        assert_eq!(first.review_id, "11");
        assert_eq!(first.text, "Great game");
    }

    #[tokio::test]
    async fn review_summary_surfaces_backend_error_field() {
        let server = MockServer::start().await;
        let response = ResponseTemplate::new(404)
            .set_body_json(serde_json::json!({"error": "App not found"}));
        Mock::given(method("GET"))
            .and(path("/getReviews"))
            .respond_with(response)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let error = gateway
            .review_summary(&app_id())
            .await
            .expect_err("request should fail");

        assert_eq!(
            error,
            FetchError::Backend {
                message: "App not found".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn review_summary_maps_non_json_failure_to_api_error() {
        let server = MockServer::start().await;
        let response = ResponseTemplate::new(500).set_body_string("<html>boom</html>");
        Mock::given(method("GET"))
            .and(path("/getReviews"))
            .respond_with(response)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let error = gateway
            .review_summary(&app_id())
            .await
            .expect_err("request should fail");

        assert!(
            matches!(error, FetchError::Api { .. }),
            "expected Api error, got {error:?}"
        );
    }

    #[tokio::test]
    async fn review_summary_maps_non_json_success_to_decode_error() {
        let server = MockServer::start().await;
        let response = ResponseTemplate::new(200).set_body_string("not json");
        Mock::given(method("GET"))
            .and(path("/getReviews"))
            .respond_with(response)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let error = gateway
            .review_summary(&app_id())
            .await
            .expect_err("request should fail");

        assert!(
            matches!(error, FetchError::Decode { .. }),
            "expected Decode error, got {error:?}"
        );
    }

    #[tokio::test]
    async fn sentiment_detail_maps_score_pairs() {
        let server = MockServer::start().await;
        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "review_id": 77,
            "review_text": "Good start. Bad ending.",
            "sentence_score": [["Good start", 0.5], ["Bad ending", -0.25]],
            "sorted_sentence_score": [["Good start", 0.5], ["Bad ending", -0.25]],
            "most_positive_paragraph_score": 1.2,
            "most_positive_paragraph_text": "Good start"
        }));
        Mock::given(method("GET"))
            .and(path("/returnReview"))
            .and(query_param("review_id", "77"))
            .and(query_param("app_id", "315210"))
            .respond_with(response)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let detail = gateway
            .sentiment_detail(&review_id(), &app_id())
            .await
            .expect("request should succeed");

        assert_eq!(detail.review_id, "77");
        assert_eq!(detail.sentence_scores.len(), 2);
        assert!(detail.most_positive_paragraph.is_some());
        assert!(detail.most_negative_paragraph.is_none());
    }

    #[tokio::test]
    async fn summary_artifact_defaults_image_path() {
        let server = MockServer::start().await;
        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({}));
        Mock::given(method("GET"))
            .and(path("/summaryVisualisation"))
            .and(query_param("app_id", "315210"))
            .respond_with(response)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let artifact = gateway
            .summary_artifact(&app_id())
            .await
            .expect("request should succeed");

        assert_eq!(artifact.image_path, SummaryArtifact::DEFAULT_IMAGE_PATH);
    }

    #[tokio::test]
    async fn summary_artifact_honours_output_path() {
        let server = MockServer::start().await;
        let response = ResponseTemplate::new(200)
            .set_body_json(serde_json::json!({"output_path": "charts/latest.png"}));
        Mock::given(method("GET"))
            .and(path("/summaryVisualisation"))
            .respond_with(response)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let artifact = gateway
            .summary_artifact(&app_id())
            .await
            .expect("request should succeed");

        assert_eq!(artifact.image_path, "charts/latest.png");
    }
}
