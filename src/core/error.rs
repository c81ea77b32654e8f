//! Typed error handling for report card generation
//!
//! The rendering engine itself is total and never fails. Errors belong to the
//! collaborators around it: reading an order payload, loading an order from a
//! source, serving a preview, and loading configuration.
//!
//! # Error Categories
//!
//! - [`ValidationError`]: the order payload is malformed or incomplete
//! - [`FetchError`]: an order could not be loaded ("failed to load order")
//! - [`PreviewError`]: a preview could not be served ("failed to generate preview")
//! - [`ConfigError`]: configuration could not be read or is invalid
//!
//! # Example
//!
//! ```rust,ignore
//! match report_cards::intake::parse_order(&text) {
//!     Ok(order) => println!("{}", report_cards::render(&order)),
//!     Err(CardsError::Validation(e)) => eprintln!("Parsing error: {}", e),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the crate
#[derive(Debug)]
pub enum CardsError {
    /// Malformed order payload
    Validation(ValidationError),

    /// Order acquisition failures
    Fetch(FetchError),

    /// Preview serving failures
    Preview(PreviewError),

    /// Configuration errors
    Config(ConfigError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for CardsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardsError::Validation(e) => write!(f, "{}", e),
            CardsError::Fetch(e) => write!(f, "Failed to load order: {}", e),
            CardsError::Preview(e) => write!(f, "Failed to generate preview: {}", e),
            CardsError::Config(e) => write!(f, "{}", e),
            CardsError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CardsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CardsError::Validation(e) => Some(e),
            CardsError::Fetch(e) => Some(e),
            CardsError::Preview(e) => Some(e),
            CardsError::Config(e) => Some(e),
            CardsError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl CardsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CardsError::Validation(_) => StatusCode::BAD_REQUEST,
            CardsError::Fetch(e) => e.status_code(),
            CardsError::Preview(_) => StatusCode::BAD_REQUEST,
            CardsError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CardsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CardsError::Validation(e) => e.error_code(),
            CardsError::Fetch(e) => e.error_code(),
            CardsError::Preview(e) => e.error_code(),
            CardsError::Config(_) => "CONFIG_ERROR",
            CardsError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            CardsError::Validation(
                ValidationError::MissingField { field }
                | ValidationError::InvalidField { field, .. },
            ) => Some(serde_json::json!({ "field": field })),
            CardsError::Fetch(FetchError::NotFound { order_id }) => {
                Some(serde_json::json!({ "order_id": order_id }))
            }
            CardsError::Fetch(FetchError::Upstream { status, .. }) => {
                Some(serde_json::json!({ "upstream_status": status }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for CardsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors raised while reading an order payload
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The payload is not JSON, or does not deserialize into an order
    #[error("Invalid order JSON: {message}")]
    InvalidJson { message: String },

    /// A required field is absent
    #[error("Invalid order format. Must include '{field}' field.")]
    MissingField { field: String },

    /// The order carries no line items
    #[error("Invalid order format. 'line_items' must contain at least one line item.")]
    EmptyLineItems,

    /// A field is present but unusable
    #[error("Invalid value for field '{field}': {message}")]
    InvalidField { field: String, message: String },
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidJson { .. } => "INVALID_ORDER_JSON",
            ValidationError::MissingField { .. } => "MISSING_ORDER_FIELD",
            ValidationError::EmptyLineItems => "EMPTY_LINE_ITEMS",
            ValidationError::InvalidField { .. } => "INVALID_ORDER_FIELD",
        }
    }
}

impl From<ValidationError> for CardsError {
    fn from(err: ValidationError) -> Self {
        CardsError::Validation(err)
    }
}

// =============================================================================
// Fetch Errors
// =============================================================================

/// Errors raised while loading an order from a source
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("order {order_id} not found")]
    NotFound { order_id: u64 },

    /// The upstream API answered with a non-success status
    #[error("upstream responded with status {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The request never completed
    #[error("request failed: {message}")]
    Transport { message: String },

    #[error("no order source is configured")]
    NotConfigured,
}

impl FetchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FetchError::NotFound { .. } => StatusCode::NOT_FOUND,
            FetchError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            FetchError::Transport { .. } => StatusCode::BAD_GATEWAY,
            FetchError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::NotFound { .. } => "ORDER_NOT_FOUND",
            FetchError::Upstream { .. } => "ORDER_UPSTREAM_ERROR",
            FetchError::Transport { .. } => "ORDER_TRANSPORT_ERROR",
            FetchError::NotConfigured => "ORDER_SOURCE_NOT_CONFIGURED",
        }
    }
}

impl From<FetchError> for CardsError {
    fn from(err: FetchError) -> Self {
        CardsError::Fetch(err)
    }
}

// =============================================================================
// Preview Errors
// =============================================================================

/// Errors raised while serving a document preview
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("Missing HTML content")]
    MissingHtml,

    #[error("invalid preview payload: {message}")]
    InvalidPayload { message: String },
}

impl PreviewError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PreviewError::MissingHtml => "MISSING_HTML",
            PreviewError::InvalidPayload { .. } => "INVALID_PREVIEW_PAYLOAD",
        }
    }
}

impl From<PreviewError> for CardsError {
    fn from(err: PreviewError) -> Self {
        CardsError::Preview(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {message}")]
    ParseError { message: String },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    #[error("Missing required field '{field}' in {context}")]
    MissingField { field: String, context: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

impl From<ConfigError> for CardsError {
    fn from(err: ConfigError) -> Self {
        CardsError::Config(err)
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<serde_json::Error> for CardsError {
    fn from(err: serde_json::Error) -> Self {
        CardsError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for CardsError {
    fn from(err: serde_yaml::Error) -> Self {
        CardsError::Config(ConfigError::ParseError {
            message: err.to_string(),
        })
    }
}

impl From<std::io::Error> for CardsError {
    fn from(err: std::io::Error) -> Self {
        CardsError::Config(ConfigError::IoError {
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for CardsError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<CardsError>() {
            Ok(cards_err) => cards_err,
            Err(err) => CardsError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_names_the_field() {
        let err = ValidationError::MissingField {
            field: "id".to_string(),
        };
        assert!(err.to_string().contains("'id'"));
        assert_eq!(err.error_code(), "MISSING_ORDER_FIELD");
    }

    #[test]
    fn test_validation_status_code() {
        let err: CardsError = ValidationError::EmptyLineItems.into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "EMPTY_LINE_ITEMS");
    }

    #[test]
    fn test_fetch_error_is_distinct_condition() {
        let err: CardsError = FetchError::Transport {
            message: "connection refused".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Failed to load order"));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_fetch_status_codes() {
        assert_eq!(
            FetchError::NotFound { order_id: 7 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            FetchError::Upstream {
                status: 401,
                message: "unauthorized".to_string()
            }
            .status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            FetchError::NotConfigured.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_preview_error_message() {
        let err: CardsError = PreviewError::MissingHtml.into();
        assert!(err.to_string().starts_with("Failed to generate preview"));
        assert!(err.to_string().contains("Missing HTML content"));
    }

    #[test]
    fn test_error_response_details() {
        let err = CardsError::Fetch(FetchError::NotFound { order_id: 99 });
        let response = err.to_response();
        assert_eq!(response.code, "ORDER_NOT_FOUND");
        assert_eq!(response.details, Some(serde_json::json!({ "order_id": 99 })));
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: CardsError = json_err.into();
        assert!(matches!(
            err,
            CardsError::Validation(ValidationError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_from_anyhow_preserves_typed_error() {
        let err = anyhow::Error::new(CardsError::Fetch(FetchError::NotConfigured));
        let err: CardsError = err.into();
        assert!(matches!(err, CardsError::Fetch(FetchError::NotConfigured)));

        let err: CardsError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, CardsError::Internal(_)));
    }
}
