//! Router setup and configuration.

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::page;
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        // Pages may carry a fresh credential
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ));

    Router::new()
        .route("/", get(page::index))
        .route("/generate", post(page::generate))
        .layer(middleware)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;

    fn app() -> Router {
        create_router(AppState::new(&AppConfig::default()))
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_form(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/generate")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_index() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
        assert!(response.headers().contains_key("x-request-id"));
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/html")
        );

        let body = body_text(response).await;
        assert!(body.contains("value=\"16\""));
        assert_eq!(body.matches(" checked>").count(), 4);
    }

    #[tokio::test]
    async fn test_generate() {
        let response = app()
            .oneshot(post_form("length=12&upper=on"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        let start = body.find("<span id=\"password\">").unwrap() + "<span id=\"password\">".len();
        let password = &body[start..start + 12];
        assert!(password.chars().all(|c| c.is_ascii_uppercase()));
        assert_eq!(&body[start + 12..start + 19], "</span>");
        assert!(body.contains("value=\"12\""));
    }

    #[tokio::test]
    async fn test_generate_without_classes() {
        let response = app().oneshot(post_form("length=40")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("Please select at least one character set"));
        assert!(!body.contains("id=\"password\""));
        assert!(body.contains("value=\"40\""));
    }

    #[tokio::test]
    async fn test_generate_with_repeated_fields() {
        let response = app()
            .oneshot(post_form("length=12&lower=on&lower=on&length=40"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        let start = body.find("<span id=\"password\">").unwrap() + "<span id=\"password\">".len();
        assert_eq!(&body[start + 12..start + 19], "</span>");
        assert!(body.contains("value=\"12\""));
    }

    #[tokio::test]
    async fn test_get_generate_not_allowed() {
        let request = Request::builder()
            .uri("/generate")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let request = Request::builder()
            .uri("/api/password")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
