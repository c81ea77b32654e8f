//! Report card rendering
//!
//! Turns an [`Order`] into one self-contained HTML document: a summary card
//! followed by one label card per unit ordered. Rendering is a pure function
//! of the order and the [`RenderConfig`]; it never fails on missing optional
//! data.

pub mod document;
pub mod html;
pub mod summary;
pub mod unit;

pub use document::{BRAND_GREEN, STYLESHEET, render_document};
pub use summary::{format_order_date, summary_card};
pub use unit::{UnitCard, unit_cards};

use crate::config::RenderConfig;
use crate::core::order::Order;

/// Renders orders with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    config: RenderConfig,
}

impl DocumentRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn render(&self, order: &Order) -> String {
        render_document(order, &self.config)
    }
}

/// Render an order with the default configuration
pub fn render(order: &Order) -> String {
    render_document(order, &RenderConfig::default())
}
