//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Dropdown enumeration endpoints
    let api = Router::new()
        .route("/states", get(handlers::list_states))
        .route("/districts/{state}", get(handlers::list_districts))
        .route("/blocks/{state}/{district}", get(handlers::list_blocks))
        .route(
            "/villages/{state}/{district}/{block}",
            get(handlers::list_villages),
        );

    Router::new()
        .route("/", get(handlers::liveness))
        .route("/villageinfo", post(handlers::village_info))
        .nest("/api", api)
        // Suggestion endpoints: free-text and structured are distinct routes
        .route("/gemini", post(handlers::suggestions))
        .route("/gemini/structured", post(handlers::structured_suggestions))
        .route("/gemini-score", post(handlers::sector_scores))
        .route("/gemini-progress", post(handlers::progress_trends))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::dataset::DatasetStore;
    use crate::suggest::{GenerativeClient, SuggestResult};

    struct NoopClient;

    #[async_trait]
    impl GenerativeClient for NoopClient {
        async fn generate(&self, _prompt: &str) -> SuggestResult<String> {
            Ok(String::new())
        }
    }

    fn test_router() -> Router {
        let state = AppState::new(
            Arc::new(DatasetStore::new("./village_dataset")),
            Arc::new(NoopClient),
        );
        create_router(state)
    }

    #[test]
    fn test_router_creation() {
        let _router = test_router();
        // If we got here, router was created successfully
    }

    #[tokio::test]
    async fn test_liveness_route() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/nothing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_village_info_empty_body_maps_to_bad_request() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/villageinfo")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
