//! HTTP handlers for previews and document rendering

use crate::core::{CardsError, FetchError, PreviewError, ValidationError};
use crate::intake::{OrderSource, parse_order};
use crate::render::DocumentRenderer;
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<DocumentRenderer>,
    pub order_source: Option<Arc<dyn OrderSource>>,
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub html: Option<String>,
}

/// Wrap a document as a `text/html` response
pub fn html_response(html: String) -> Response {
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response()
}

/// POST /api/preview-html
///
/// Echoes a generated document back so a browser can open and print it.
pub async fn preview_html(body: Bytes) -> Result<Response, CardsError> {
    let request: PreviewRequest =
        serde_json::from_slice(&body).map_err(|e| PreviewError::InvalidPayload {
            message: e.to_string(),
        })?;

    let html = request
        .html
        .filter(|html| !html.is_empty())
        .ok_or(PreviewError::MissingHtml)?;

    tracing::debug!(bytes = html.len(), "serving HTML preview");
    Ok(html_response(html))
}

/// POST /api/render
///
/// Body is order JSON, bare or wrapped in `{"order": ...}`.
pub async fn render_order(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, CardsError> {
    let text = std::str::from_utf8(&body).map_err(|e| ValidationError::InvalidJson {
        message: e.to_string(),
    })?;
    let order = parse_order(text)?;

    tracing::debug!(order = %order.name, units = order.total_units(), "rendering order");
    Ok(html_response(state.renderer.render(&order)))
}

/// GET /api/orders/{order_id}/cards
pub async fn render_stored_order(
    State(state): State<AppState>,
    Path(order_id): Path<u64>,
) -> Result<Response, CardsError> {
    let source = state
        .order_source
        .as_ref()
        .ok_or(FetchError::NotConfigured)?;

    let order = source.fetch(order_id).await.inspect_err(|e| {
        tracing::warn!(source = source.name(), order_id, error = %e, "failed to load order");
    })?;

    Ok(html_response(state.renderer.render(&order)))
}

/// Health check endpoint handler
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "report-cards"
    }))
}
