//! Preview server serving the sample order
//!
//! Usage: `cargo run --example preview_server [config.yaml]`
//!
//! Then open http://127.0.0.1:3000/api/orders/5678901234/cards

use anyhow::Result;
use report_cards::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "report_cards=debug,tower_http=info".into()),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => CardsConfig::from_yaml_file(&path)?,
        None => CardsConfig::default(),
    };

    let builder = ServerBuilder::new().with_config(config.clone());

    #[cfg(feature = "shopify")]
    let builder = match config.shopify.clone() {
        Some(shopify) => builder.with_order_source(ShopifyOrderSource::new(shopify)?),
        None => builder.with_order_source(SampleOrderSource),
    };
    #[cfg(not(feature = "shopify"))]
    let builder = builder.with_order_source(SampleOrderSource);

    builder.serve_configured().await
}
