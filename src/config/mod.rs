//! Configuration loading and management

use crate::core::ConfigError;
use anyhow::Result;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Options that affect the generated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// chrono strftime pattern for the order date on the summary card
    pub date_format: String,

    /// Offset applied to the order timestamp before formatting
    pub utc_offset_minutes: i32,

    /// Caption of the print buttons
    pub print_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            date_format: "%-m/%-d/%Y".to_string(),
            utc_offset_minutes: 0,
            print_label: "Print Labels".to_string(),
        }
    }
}

/// HTTP server options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,

    /// Request body cap for preview and render requests
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Shopify Admin API credentials for the live order source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopifyConfig {
    /// e.g. `my-store.myshopify.com`
    pub shop_domain: String,

    pub access_token: String,

    #[serde(default = "default_api_version")]
    pub api_version: String,
}

fn default_api_version() -> String {
    "2024-01".to_string()
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardsConfig {
    pub render: RenderConfig,
    pub server: ServerConfig,
    pub shopify: Option<ShopifyConfig>,
}

impl CardsConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if StrftimeItems::new(&self.render.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                field: "render.date_format".to_string(),
                value: self.render.date_format.clone(),
                message: "not a valid strftime pattern".to_string(),
            });
        }

        if self.render.utc_offset_minutes.unsigned_abs() >= 24 * 60 {
            return Err(ConfigError::InvalidValue {
                field: "render.utc_offset_minutes".to_string(),
                value: self.render.utc_offset_minutes.to_string(),
                message: "offset must be within 24 hours".to_string(),
            });
        }

        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "bind_address".to_string(),
                context: "server".to_string(),
            });
        }

        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_body_bytes".to_string(),
                value: "0".to_string(),
                message: "body limit must be positive".to_string(),
            });
        }

        if let Some(shopify) = &self.shopify {
            for (field, value) in [
                ("shop_domain", &shopify.shop_domain),
                ("access_token", &shopify.access_token),
                ("api_version", &shopify.api_version),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigError::MissingField {
                        field: field.to_string(),
                        context: "shopify".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
