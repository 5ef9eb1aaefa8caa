//! Tests for the review list view orchestration.

use crate::backend::{FetchError, MockAnalysisGateway, ReviewEntry, ReviewSummary};
use crate::render::{BufferRegion, ListRegions, RegionSink};
use crate::view::state::{ApplyOutcome, ViewPhase};

use super::ReviewListView;

fn summary() -> ReviewSummary {
    ReviewSummary {
        app_id: "315210".to_owned(),
        total_reviews: 1,
        timestamp: "2025-08-01 12:00:00".to_owned(),
        entries: vec![ReviewEntry {
            review_id: "11".to_owned(),
            text: "Great game".to_owned(),
        }],
    }
}

#[tokio::test]
async fn blank_app_id_shows_validation_message_and_issues_no_request() {
    // No expectations are set; any gateway call would panic the test.
    let gateway = MockAnalysisGateway::new();
    let mut view = ReviewListView::new(gateway).expect("view should build");
    let mut status = BufferRegion::new();
    let mut content = BufferRegion::new();
    let mut regions = ListRegions {
        status: &mut status,
        content: &mut content,
    };

    view.refresh("", &mut regions)
        .await
        .expect("refresh should not fail");

    assert!(
        status.contents().contains("valid App ID"),
        "missing validation message: {}",
        status.contents()
    );
    assert!(content.is_empty(), "content should stay untouched");
    assert_eq!(view.phase(), ViewPhase::Idle);
}

#[tokio::test]
async fn success_renders_header_and_entries() {
    let mut gateway = MockAnalysisGateway::new();
    gateway
        .expect_review_summary()
        .returning(|_| Ok(summary()));
    let mut view = ReviewListView::new(gateway).expect("view should build");
    let mut status = BufferRegion::new();
    let mut content = BufferRegion::new();
    let mut regions = ListRegions {
        status: &mut status,
        content: &mut content,
    };

    view.refresh("315210", &mut regions)
        .await
        .expect("refresh should not fail");

    assert!(
        status.contents().contains("Analysis complete"),
        "missing success status: {}",
        status.contents()
    );
    assert!(
        content.contents().contains("Great game"),
        "missing entry: {}",
        content.contents()
    );
    assert_eq!(view.phase(), ViewPhase::Success);
}

#[tokio::test]
async fn backend_error_is_shown_verbatim_and_clears_results() {
    let mut gateway = MockAnalysisGateway::new();
    gateway.expect_review_summary().returning(|_| {
        Err(FetchError::Backend {
            message: "App not found".to_owned(),
        })
    });
    let mut view = ReviewListView::new(gateway).expect("view should build");
    let mut status = BufferRegion::new();
    let mut content = BufferRegion::new();
    let mut regions = ListRegions {
        status: &mut status,
        content: &mut content,
    };

    view.refresh("999", &mut regions)
        .await
        .expect("refresh should not fail");

    assert_eq!(status.contents(), "❌ App not found");
    assert!(
        content.is_empty(),
        "results should be cleared: {}",
        content.contents()
    );
    assert_eq!(view.phase(), ViewPhase::Error);
}

#[tokio::test]
async fn transport_failure_shows_generic_message() {
    let mut gateway = MockAnalysisGateway::new();
    gateway.expect_review_summary().returning(|_| {
        Err(FetchError::Network {
            message: "connection refused".to_owned(),
        })
    });
    let mut view = ReviewListView::new(gateway).expect("view should build");
    let mut status = BufferRegion::new();
    let mut content = BufferRegion::new();
    let mut regions = ListRegions {
        status: &mut status,
        content: &mut content,
    };

    view.refresh("315210", &mut regions)
        .await
        .expect("refresh should not fail");

    assert!(
        status.contents().contains("Error running analysis"),
        "missing failure status: {}",
        status.contents()
    );
    assert!(
        content.contents().contains("Failed to load results"),
        "missing failure content: {}",
        content.contents()
    );
}

#[tokio::test]
async fn superseded_response_is_discarded() {
    let gateway = MockAnalysisGateway::new();
    let mut view = ReviewListView::new(gateway).expect("view should build");
    let mut status = BufferRegion::new();
    let mut content = BufferRegion::new();
    let mut regions = ListRegions {
        status: &mut status,
        content: &mut content,
    };

    let (stale, _) = view
        .begin("315210", &mut regions)
        .expect("first action should start");
    let (_latest, _) = view
        .begin("315210", &mut regions)
        .expect("second action should start");

    let outcome = view
        .apply(stale, Ok(summary()), &mut regions)
        .expect("apply should not fail");

    assert_eq!(outcome, ApplyOutcome::Superseded);
    assert_eq!(
        content.contents(),
        "⏳ Loading...",
        "stale response must not overwrite the newer action"
    );
    assert_eq!(view.phase(), ViewPhase::Loading);
}
