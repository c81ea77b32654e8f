//! Render report cards for an order and write the document to disk
//!
//! Usage: `cargo run --example render_sample [order.json] [out.html]`
//!
//! Without arguments the built-in sample order is rendered to
//! `report-cards.html`.

use anyhow::Result;
use report_cards::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let order = match args.next() {
        Some(path) => parse_order(&std::fs::read_to_string(&path)?)?,
        None => sample_order(),
    };
    let out = args.next().unwrap_or_else(|| "report-cards.html".to_string());

    let html = render(&order);
    std::fs::write(&out, &html)?;

    tracing::info!(
        order = %order.name,
        unit_cards = order.total_units(),
        path = %out,
        "wrote report cards"
    );
    Ok(())
}
