//! Shopify Admin API order source

use super::{parse_order_value, source::OrderSource};
use crate::config::ShopifyConfig;
use crate::core::{CardsError, FetchError, Order};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Loads orders from `GET /admin/api/{version}/orders/{id}.json`
#[derive(Debug, Clone)]
pub struct ShopifyOrderSource {
    client: reqwest::Client,
    config: ShopifyConfig,
}

impl ShopifyOrderSource {
    pub fn new(config: ShopifyConfig) -> Result<Self, CardsError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CardsError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn order_url(&self, order_id: u64) -> String {
        let domain = self
            .config
            .shop_domain
            .trim()
            .trim_start_matches("https://")
            .trim_end_matches('/');
        format!(
            "https://{}/admin/api/{}/orders/{}.json",
            domain, self.config.api_version, order_id
        )
    }
}

#[async_trait]
impl OrderSource for ShopifyOrderSource {
    async fn fetch(&self, order_id: u64) -> Result<Order, CardsError> {
        let url = self.order_url(order_id);
        tracing::debug!(%url, "fetching order from Shopify");

        let response = self
            .client
            .get(&url)
            .header(ACCESS_TOKEN_HEADER, &self.config.access_token)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                message: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound { order_id }.into());
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Shopify rejected order request");
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let body: serde_json::Value =
            response.json().await.map_err(|e| FetchError::Transport {
                message: e.to_string(),
            })?;

        parse_order_value(body)
    }

    fn name(&self) -> &'static str {
        "shopify"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(domain: &str) -> ShopifyConfig {
        ShopifyConfig {
            shop_domain: domain.to_string(),
            access_token: "shpat_test".to_string(),
            api_version: "2024-01".to_string(),
        }
    }

    #[test]
    fn test_order_url() {
        let source = ShopifyOrderSource::new(config("my-store.myshopify.com")).unwrap();
        assert_eq!(
            source.order_url(42),
            "https://my-store.myshopify.com/admin/api/2024-01/orders/42.json"
        );
    }

    #[test]
    fn test_order_url_normalizes_domain() {
        let source = ShopifyOrderSource::new(config("https://my-store.myshopify.com/")).unwrap();
        assert_eq!(
            source.order_url(42),
            "https://my-store.myshopify.com/admin/api/2024-01/orders/42.json"
        );
    }
}
