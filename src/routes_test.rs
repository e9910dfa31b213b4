use axum::body::Body;
use axum::http::{Request, header};
use axum::response::{IntoResponse, Response};
use tower::ServiceExt;

use super::*;

async fn get(path: &str) -> Response {
    let router = app().expect("leptos app");
    router
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

fn location(response: &Response) -> Option<&str> {
    response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn healthz_reports_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
    assert_eq!(get("/healthz").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn unmatched_paths_redirect_to_landing() {
    let response = redirect_unmatched().await.into_response();
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), Some("/"));
}

#[tokio::test]
async fn every_app_route_is_served() {
    for route in AppRoute::ALL {
        let response = get(route.path()).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", route.path());
        assert_eq!(location(&response), None, "{}", route.path());
    }
}

#[tokio::test]
async fn unknown_paths_redirect_to_landing() {
    for path in ["/does-not-exist", "/verify", "/ngo-dashboard/extra", "/AUTH"] {
        let response = get(path).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&response), Some("/"), "{path}");
    }
}

#[tokio::test]
async fn trailing_slash_is_not_a_route() {
    for route in AppRoute::ALL.into_iter().filter(|r| *r != AppRoute::Landing) {
        let path = format!("{}/", route.path());
        let response = get(&path).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT, "{path}");
        assert_eq!(location(&response), Some("/"), "{path}");
    }
}
