//! Order acquisition
//!
//! Orders reach the renderer either as pasted JSON text or from an
//! [`OrderSource`]. Both paths validate that the payload carries an `id` and
//! at least one line item before the renderer ever sees it.

pub mod sample;
#[cfg(feature = "shopify")]
pub mod shopify;
pub mod source;

pub use sample::sample_order;
#[cfg(feature = "shopify")]
pub use shopify::ShopifyOrderSource;
pub use source::{OrderSource, PastedOrderSource, SampleOrderSource};

use crate::core::{CardsError, Order, ValidationError};
use serde_json::Value;

/// Parse order JSON text
///
/// Accepts either a bare order object or the `{"order": {...}}` envelope the
/// Shopify Admin API returns.
pub fn parse_order(text: &str) -> Result<Order, CardsError> {
    let value: Value = serde_json::from_str(text.trim()).map_err(|e| {
        tracing::warn!(error = %e, "rejected order payload: not JSON");
        ValidationError::InvalidJson {
            message: e.to_string(),
        }
    })?;
    parse_order_value(value)
}

/// Validate and deserialize an already-parsed order payload
pub fn parse_order_value(value: Value) -> Result<Order, CardsError> {
    let value = unwrap_envelope(value);
    check_required_fields(&value).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected order payload");
    })?;

    serde_json::from_value(value).map_err(|e| {
        tracing::warn!(error = %e, "order payload does not match the order shape");
        CardsError::Validation(ValidationError::InvalidJson {
            message: e.to_string(),
        })
    })
}

fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.get("order").is_some_and(Value::is_object) => {
            map.remove("order").unwrap_or_default()
        }
        other => other,
    }
}

fn check_required_fields(value: &Value) -> Result<(), ValidationError> {
    let Some(object) = value.as_object() else {
        return Err(ValidationError::InvalidJson {
            message: "expected a JSON object".to_string(),
        });
    };

    match object.get("id") {
        None | Some(Value::Null) => {
            return Err(ValidationError::MissingField {
                field: "id".to_string(),
            });
        }
        Some(id) if id.as_u64().is_none_or(|id| id == 0) => {
            return Err(ValidationError::InvalidField {
                field: "id".to_string(),
                message: format!("expected a positive integer, got {}", id),
            });
        }
        Some(_) => {}
    }

    match object.get("line_items") {
        None | Some(Value::Null) => Err(ValidationError::MissingField {
            field: "line_items".to_string(),
        }),
        Some(Value::Array(items)) if items.is_empty() => Err(ValidationError::EmptyLineItems),
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(ValidationError::InvalidField {
            field: "line_items".to_string(),
            message: "expected an array of line items".to_string(),
        }),
    }
}
