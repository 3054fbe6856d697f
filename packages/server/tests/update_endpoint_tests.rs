// HTTP surface tests driven through the router with mock dependencies.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use customsearch_client::SearchItem;
use server_core::domains::jobs::MockJobSearcher;
use server_core::kernel::TestPublisher;
use server_core::server::{build_app, AppState};
use tower::ServiceExt;

fn app_with(searcher: MockJobSearcher, publisher: TestPublisher) -> axum::Router {
    build_app(AppState {
        searcher: Arc::new(searcher),
        publisher: Arc::new(publisher),
    })
}

fn item(n: u32) -> SearchItem {
    SearchItem {
        title: format!("Backend Developer {n} - Acme"),
        html_title: format!("Acme hiring Backend Developer {n} in Dublin | LinkedIn"),
        html_snippet: "3 days ago".to_string(),
        link: format!("https://linkedin.com/jobs/view/{n}"),
    }
}

fn update_request(payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/update")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_answers_ok() {
    let app = app_with(MockJobSearcher::default(), TestPublisher::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn update_reports_published_and_found_counts() {
    let app = app_with(
        MockJobSearcher::with_items(vec![item(1), item(2)]),
        TestPublisher::new(),
    );

    let response = app
        .oneshot(update_request(serde_json::json!({
            "website": "linkedin",
            "type": ["Backend Developer"],
            "location": "Dublin",
            "time": 3
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Published 2 job events");
    assert_eq!(body["total_found"], 2);
}

#[tokio::test]
async fn update_succeeds_even_when_some_publishes_fail() {
    let app = app_with(
        MockJobSearcher::with_items(vec![item(1), item(2), item(3)]),
        TestPublisher::with_failures([1]),
    );

    let response = app
        .oneshot(update_request(serde_json::json!({
            "website": "linkedin",
            "type": ["Backend Developer"],
            "location": "Dublin",
            "time": 3
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Published 2 job events");
    assert_eq!(body["total_found"], 3);
}

#[tokio::test]
async fn search_failures_surface_as_500_with_detail() {
    let app = app_with(
        MockJobSearcher::failing("quota exceeded"),
        TestPublisher::new(),
    );

    let response = app
        .oneshot(update_request(serde_json::json!({
            "website": "linkedin",
            "type": ["Backend Developer"],
            "location": "Dublin",
            "time": 3
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.contains("search stage failed"));
    assert!(detail.contains("quota exceeded"));
}

#[tokio::test]
async fn malformed_requests_are_rejected_before_the_pipeline() {
    let app = app_with(MockJobSearcher::default(), TestPublisher::new());

    let response = app
        .oneshot(update_request(serde_json::json!({
            "website": "linkedin",
            "location": "Dublin",
            "time": 3
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
