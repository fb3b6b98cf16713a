//! Axum router configuration for ranking endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{rank_restock, rank_topsis, TopsisAppState};

/// Create the ranking API router.
///
/// # Routes
///
/// - `POST /topsis` - Rank alternatives against caller-supplied weights and types
/// - `POST /api/restock/rank` - Rank restock candidates with the restock profile
pub fn topsis_routes() -> Router<TopsisAppState> {
    Router::new()
        .route("/topsis", post(rank_topsis))
        .route("/api/restock/rank", post(rank_restock))
}

/// Create the ranking router with its state applied.
pub fn topsis_router(state: TopsisAppState) -> Router {
    topsis_routes().with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn topsis_route_is_mounted() {
        let app = topsis_router(TopsisAppState::default());
        let body = r#"{"alternatives":[{"name":"A","criteria":[1]}],"weights":[1],"criteriaType":["benefit"]}"#;

        let response = app.oneshot(post_json("/topsis", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn get_on_topsis_is_not_allowed() {
        let app = topsis_router(TopsisAppState::default());
        let response = app
            .oneshot(Request::builder().uri("/topsis").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn undecodable_body_returns_json_error() {
        let app = topsis_router(TopsisAppState::default());
        let response = app
            .oneshot(post_json("/topsis", r#"{"alternatives": "nope"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
    }
}
