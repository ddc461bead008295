//! Router integration tests
//!
//! Built against a lazy pool so no live store is needed: the landing
//! and health pages never touch the store, and the store-backed routes
//! must surface a bare 500 when it cannot be reached.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use tower::ServiceExt;

use estante_server::config::Config;
use estante_server::db;
use estante_server::reviews::ReviewClient;
use estante_server::routes;
use estante_server::state::AppState;

fn test_app() -> axum::Router {
    let config = Config::default();
    let pool = db::create_pool(&config.database);
    let reviews = ReviewClient::new(&config.reviews).unwrap();
    let state = AppState::new(config, pool, reviews);
    routes::app_router().with_state(state)
}

fn test_server() -> TestServer {
    TestServer::new(test_app()).unwrap()
}

#[tokio::test]
async fn test_landing_page_lists_letters() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status(StatusCode::OK);

    let body = response.text();
    assert!(body.contains("/byletter?letter=A"));
    assert!(body.contains("/byletter?letter=Z"));
}

#[tokio::test]
async fn test_health_reports_service() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status(StatusCode::OK);
    assert!(response.text().contains("healthy"));
}

#[tokio::test]
async fn test_listing_with_unreachable_store_is_bare_500() {
    let server = test_server();

    let response = server.get("/byletter").add_query_param("letter", "A").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_detail_with_unreachable_store_is_bare_500() {
    let server = test_server();

    let response = server.get("/book/abc123").await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/no-such-page")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
