//! # Report Cards
//!
//! Printable order paperwork generated from e-commerce orders.
//!
//! Every order becomes one HTML document holding a summary card followed by
//! one label card per unit ordered. Cards are sized for 8.5in x 5.5in pages
//! with a page break after each one.
//!
//! ## Features
//!
//! - **Attribute lookup**: case-insensitive, trimmed, first-match property resolution
//! - **Dimension phrasing**: unit suffix stripping and diameter/width/length phrasing
//! - **Quantity expansion**: `1 of q` .. `q of q` label cards per line item
//! - **Print styling**: fixed card size, forced page breaks, brand color kept in print
//! - **Intake**: bare or enveloped order JSON with required-field validation
//! - **Preview server**: axum routes that serve generated documents as `text/html`
//!
//! ## Quick Start
//!
//! ```rust
//! use report_cards::prelude::*;
//!
//! let order = parse_order(r##"{
//!     "id": 1001,
//!     "name": "#1001",
//!     "line_items": [{
//!         "title": "Wool Runner",
//!         "quantity": 2,
//!         "price": "425.00",
//!         "properties": [{ "name": "Width", "value": "2.5 ft" }]
//!     }]
//! }"##).unwrap();
//!
//! let html = render(&order);
//! assert!(html.contains("1 of 2"));
//! assert!(html.contains("Width: 2.5"));
//! ```
//!
//! Runnable programs live under `demos/` and are registered as cargo
//! examples: `cargo run --example render_sample` writes the sample order to
//! disk, `cargo run --example preview_server` serves it over HTTP.

pub mod config;
pub mod core;
pub mod intake;
pub mod render;
pub mod server;

pub use render::render;

/// Re-exports of commonly used types and functions
pub mod prelude {
    // === Model ===
    pub use crate::core::{
        Address, Customer, ItemAttributes, LineItem, LineItemProperty, Order,
        compose_dimension_phrase, resolve, strip_units,
    };

    // === Errors ===
    pub use crate::core::error::{
        CardsError, ConfigError, ErrorResponse, FetchError, PreviewError, ValidationError,
    };

    // === Rendering ===
    pub use crate::render::{DocumentRenderer, render, render_document};

    // === Intake ===
    #[cfg(feature = "shopify")]
    pub use crate::intake::ShopifyOrderSource;
    pub use crate::intake::{
        OrderSource, PastedOrderSource, SampleOrderSource, parse_order, parse_order_value,
        sample_order,
    };

    // === Config ===
    pub use crate::config::{CardsConfig, RenderConfig, ServerConfig, ShopifyConfig};

    // === Server ===
    pub use crate::server::ServerBuilder;
}
