//! Router assembly

use super::handlers::{
    AppState, health_check, preview_html, render_order, render_stored_order,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Build the application routes
///
/// - GET /health, GET /healthz - Health check
/// - POST /api/preview-html - Echo a generated document as `text/html`
/// - POST /api/render - Render order JSON into a document
/// - GET /api/orders/{order_id}/cards - Load an order from the source and render it
pub fn build_routes(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/api/preview-html", post(preview_html))
        .route("/api/render", post(render_order))
        .route("/api/orders/{order_id}/cards", get(render_stored_order))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DocumentRenderer;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState {
            renderer: Arc::new(DocumentRenderer::default()),
            order_source: None,
        };
        build_routes(state, 1024)
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_preview_route_sets_html_content_type() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/preview-html")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"html": "<p>hi</p>"}"#))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
    }
}
