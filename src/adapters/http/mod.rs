//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`app_router`] assembles them with the cross-cutting middleware.

pub mod topsis;

// Re-export key types for convenience
pub use topsis::TopsisAppState;
pub use topsis::topsis_router;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, ServerConfig};

/// Builds the full application router from configuration.
///
/// Layers, outermost first: request id assignment, request tracing,
/// request id propagation, timeout, CORS.
pub fn app_router(config: &AppConfig) -> Router {
    let state = TopsisAppState::new(config.ranking.clone());

    topsis_router(state)
        .layer(cors_layer(&config.server))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Any origin when none are configured, otherwise only the listed ones.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method("OPTIONS")
            .uri("/topsis")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn permissive_cors_without_configured_origins() {
        let app = app_router(&AppConfig::default());
        let response = app.oneshot(preflight("http://anywhere.test")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn configured_origins_are_echoed() {
        let mut config = AppConfig::default();
        config.server.cors_origins = Some("http://localhost:5173".to_string());

        let app = app_router(&config);
        let response = app.oneshot(preflight("http://localhost:5173")).await.unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let app = app_router(&AppConfig::default());
        let body = r#"{"alternatives":[{"name":"A","criteria":[1]}],"weights":[1],"criteriaType":["cost"]}"#;
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/topsis")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }
}
