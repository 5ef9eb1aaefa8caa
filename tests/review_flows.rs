//! End-to-end tests driving the views against a mock backend.

use reviewlens::render::{BufferRegion, DetailRegions, ListRegions, RegionSink, SummaryRegions};
use reviewlens::view::ViewPhase;
use reviewlens::{HttpAnalysisGateway, ReviewDetailView, ReviewListView, SummaryView};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn gateway_for(server: &MockServer) -> HttpAnalysisGateway {
    HttpAnalysisGateway::for_base_url(&server.uri()).expect("gateway should build")
}

#[tokio::test]
async fn listing_flow_renders_linked_reviews() {
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

    let mut view = ReviewListView::new(gateway_for(&server).await).expect("view should build");
    let mut status = BufferRegion::new();
    let mut content = BufferRegion::new();
    let mut regions = ListRegions {
        status: &mut status,
        content: &mut content,
    };

    view.refresh("315210", &mut regions)
        .await
        .expect("refresh should not fail");

    assert_eq!(view.phase(), ViewPhase::Success);
    assert!(
        status.contents().contains("✅ Analysis complete!"),
        "missing success status: {}",
        status.contents()
    );
    assert!(
        content.contents().contains("<strong>Total Reviews:</strong> 2"),
        "missing header: {}",
        content.contents()
    );
    assert!(
        content
            .contents()
            .contains("reviewAnalyser?review_id=11&amp;app_id=315210"),
        "missing detail link: {}",
        content.contents()
    );
}

#[tokio::test]
async fn detail_flow_surfaces_backend_error_in_first_region_only() {
    let server = MockServer::start().await;
    let response =
        ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Review not found"}));
    Mock::given(method("GET"))
        .and(path("/returnReview"))
        .respond_with(response)
        .mount(&server)
        .await;

    let mut view = ReviewDetailView::new(gateway_for(&server).await).expect("view should build");
    let mut raw_text = BufferRegion::new();
    let mut sentence_breakdown = BufferRegion::new();
    let mut most_positive_sentence = BufferRegion::new();
    let mut most_negative_sentence = BufferRegion::new();
    let mut positive_paragraph = BufferRegion::new();
    let mut negative_paragraph = BufferRegion::new();
    let mut regions = DetailRegions {
        raw_text: &mut raw_text,
        sentence_breakdown: &mut sentence_breakdown,
        most_positive_sentence: &mut most_positive_sentence,
        most_negative_sentence: &mut most_negative_sentence,
        positive_paragraph: &mut positive_paragraph,
        negative_paragraph: &mut negative_paragraph,
    };

    view.load("404", "315210", &mut regions)
        .await
        .expect("load should not fail");

    assert_eq!(view.phase(), ViewPhase::Error);
    assert!(
        raw_text.contents().contains("Review not found"),
        "missing error message: {}",
        raw_text.contents()
    );
    assert!(sentence_breakdown.is_empty(), "region 2 must stay empty");
    assert!(most_positive_sentence.is_empty(), "region 3 must stay empty");
    assert!(most_negative_sentence.is_empty(), "region 4 must stay empty");
    assert!(positive_paragraph.is_empty(), "region 5 must stay empty");
    assert!(negative_paragraph.is_empty(), "region 6 must stay empty");
}

#[tokio::test]
async fn detail_flow_populates_all_regions_on_success() {
    let server = MockServer::start().await;
    let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "review_id": 77,
        "review_text": "Good start. Bad ending.",
        "sentence_score": [["Good start", 0.5], ["Bad ending", -0.25]],
        "sorted_sentence_score": [["Good start", 0.5], ["Bad ending", -0.25]],
        "most_positive_paragraph_score": 1.2,
        "most_positive_paragraph_text": "Good start",
        "most_negative_paragraph_score": -0.8,
        "most_negative_paragraph_text": "Bad ending"
    }));
    Mock::given(method("GET"))
        .and(path("/returnReview"))
        .and(query_param("review_id", "77"))
        .and(query_param("app_id", "315210"))
        .respond_with(response)
        .mount(&server)
        .await;

    let mut view = ReviewDetailView::new(gateway_for(&server).await).expect("view should build");
    let mut raw_text = BufferRegion::new();
    let mut sentence_breakdown = BufferRegion::new();
    let mut most_positive_sentence = BufferRegion::new();
    let mut most_negative_sentence = BufferRegion::new();
    let mut positive_paragraph = BufferRegion::new();
    let mut negative_paragraph = BufferRegion::new();
    let mut regions = DetailRegions {
        raw_text: &mut raw_text,
        sentence_breakdown: &mut sentence_breakdown,
        most_positive_sentence: &mut most_positive_sentence,
        most_negative_sentence: &mut most_negative_sentence,
        positive_paragraph: &mut positive_paragraph,
        negative_paragraph: &mut negative_paragraph,
    };

    view.load("77", "315210", &mut regions)
        .await
        .expect("load should not fail");

    assert_eq!(view.phase(), ViewPhase::Success);
    assert!(
        raw_text.contents().contains("Good start. Bad ending."),
        "missing review text: {}",
        raw_text.contents()
    );
    assert!(
        sentence_breakdown.contents().contains("Sentence 2"),
        "missing breakdown rows: {}",
        sentence_breakdown.contents()
    );
    assert!(
        most_positive_sentence.contents().contains("+0.500"),
        "missing signed score: {}",
        most_positive_sentence.contents()
    );
    assert!(
        most_negative_sentence.contents().contains("-0.250"),
        "missing score: {}",
        most_negative_sentence.contents()
    );
    assert!(
        positive_paragraph.contents().contains("Score: +1.200"),
        "missing paragraph score: {}",
        positive_paragraph.contents()
    );
    assert!(
        negative_paragraph.contents().contains("Score: -0.800"),
        "missing paragraph score: {}",
        negative_paragraph.contents()
    );
}

#[tokio::test]
async fn summary_flow_inserts_image_once_across_runs() {
    let server = MockServer::start().await;
    let response = ResponseTemplate::new(200)
        .set_body_json(serde_json::json!({"output_path": "charts/latest.png"}));
    Mock::given(method("GET"))
        .and(path("/summaryVisualisation"))
        .and(query_param("app_id", "315210"))
        .respond_with(response)
        .mount(&server)
        .await;

    let mut view = SummaryView::new(gateway_for(&server).await).expect("view should build");
    let mut status = BufferRegion::new();
    let mut content = BufferRegion::new();
    let mut image_container = BufferRegion::new();
    let mut regions = SummaryRegions {
        status: &mut status,
        content: &mut content,
        image_container: &mut image_container,
    };

    view.run("315210", &mut regions)
        .await
        .expect("first run should not fail");
    view.run("315210", &mut regions)
        .await
        .expect("second run should not fail");

    assert_eq!(view.phase(), ViewPhase::Success);
    assert_eq!(status.contents(), "✅ Summary complete!");
    assert_eq!(
        image_container.contents().matches("<img").count(),
        1,
        "image must be inserted exactly once: {}",
        image_container.contents()
    );
    assert!(
        image_container.contents().contains("charts"),
        "missing backend-provided path: {}",
        image_container.contents()
    );
}
