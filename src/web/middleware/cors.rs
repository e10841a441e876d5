//! CORS middleware configuration.

use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

const METHODS: [Method; 3] = [Method::GET, Method::HEAD, Method::OPTIONS];

/// Create a CORS layer from configuration.
///
/// With no usable origin configured, any origin is allowed.
pub fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let parsed_origins: Vec<HeaderValue> =
        origins.iter().filter_map(|o| o.parse().ok()).collect();

    if parsed_origins.is_empty() {
        if !origins.is_empty() {
            tracing::warn!("No valid CORS origin configured, allowing any origin");
        }
        CorsLayer::new()
            .allow_methods(METHODS)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        CorsLayer::new()
            .allow_methods(METHODS)
            .allow_headers([CONTENT_TYPE, ACCEPT])
            .allow_origin(parsed_origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, ORIGIN};
    use axum::http::Request;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn app(origins: &[String]) -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(create_cors_layer(origins))
    }

    async fn allow_origin(origins: &[String], origin: &str) -> Option<String> {
        let request = Request::builder()
            .uri("/")
            .header(ORIGIN, origin)
            .body(Body::empty())
            .unwrap();
        let response = app(origins).oneshot(request).await.unwrap();
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_empty_origins_allow_any() {
        assert_eq!(
            allow_origin(&[], "http://example.com").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_configured_origins() {
        let origins = vec![
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string(),
        ];
        assert_eq!(
            allow_origin(&origins, "http://localhost:5173").await.as_deref(),
            Some("http://localhost:5173")
        );
        assert_eq!(allow_origin(&origins, "http://evil.example").await, None);
    }

    #[tokio::test]
    async fn test_invalid_origins_fall_back_to_any() {
        let origins = vec!["\n".to_string()];
        assert_eq!(
            allow_origin(&origins, "http://example.com").await.as_deref(),
            Some("*")
        );
    }
}
