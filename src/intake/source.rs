//! Order sources

use super::{parse_order, sample::sample_order};
use crate::core::{CardsError, FetchError, Order};
use async_trait::async_trait;

/// Somewhere orders can be loaded from
///
/// Implementations report lookups that cannot be satisfied as
/// [`FetchError`]s and payloads that fail validation as
/// [`ValidationError`](crate::core::ValidationError)s.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Load a single order by its upstream id
    async fn fetch(&self, order_id: u64) -> Result<Order, CardsError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Serves the built-in demo order
#[derive(Debug, Clone, Default)]
pub struct SampleOrderSource;

#[async_trait]
impl OrderSource for SampleOrderSource {
    async fn fetch(&self, order_id: u64) -> Result<Order, CardsError> {
        let order = sample_order();
        if order.id == order_id {
            Ok(order)
        } else {
            Err(FetchError::NotFound { order_id }.into())
        }
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}

/// Wraps JSON text pasted by a user
///
/// The text is validated up front so a bad paste is reported before any
/// lookup happens.
#[derive(Debug, Clone)]
pub struct PastedOrderSource {
    order: Order,
}

impl PastedOrderSource {
    pub fn from_json(text: &str) -> Result<Self, CardsError> {
        Ok(Self {
            order: parse_order(text)?,
        })
    }

    pub fn order(&self) -> &Order {
        &self.order
    }
}

#[async_trait]
impl OrderSource for PastedOrderSource {
    async fn fetch(&self, order_id: u64) -> Result<Order, CardsError> {
        if self.order.id == order_id {
            Ok(self.order.clone())
        } else {
            Err(FetchError::NotFound { order_id }.into())
        }
    }

    fn name(&self) -> &'static str {
        "pasted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::sample::SAMPLE_ORDER_ID;

    #[test]
    fn test_sample_source_serves_sample() {
        let order = tokio_test::block_on(SampleOrderSource.fetch(SAMPLE_ORDER_ID)).unwrap();
        assert_eq!(order.name, "#1234");
    }

    #[test]
    fn test_sample_source_unknown_id() {
        let err = tokio_test::block_on(SampleOrderSource.fetch(1)).unwrap_err();
        assert!(matches!(
            err,
            CardsError::Fetch(FetchError::NotFound { order_id: 1 })
        ));
    }

    #[test]
    fn test_pasted_source() {
        let source =
            PastedOrderSource::from_json(r#"{"id": 9, "line_items": [{"quantity": 1}]}"#).unwrap();
        assert_eq!(source.order().id, 9);

        let order = tokio_test::block_on(source.fetch(9)).unwrap();
        assert_eq!(order.id, 9);
        assert!(tokio_test::block_on(source.fetch(10)).is_err());
    }

    #[test]
    fn test_pasted_source_rejects_bad_json() {
        assert!(matches!(
            PastedOrderSource::from_json(r#"{"line_items": []}"#),
            Err(CardsError::Validation(_))
        ));
    }
}
