//! Order summary card

use super::html::{detail_row, escape, text_div};
use crate::config::RenderConfig;
use crate::core::order::{Address, Order, present};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::Write;

/// Build the summary card fragment for an order
pub fn summary_card(order: &Order, config: &RenderConfig) -> String {
    let customer_name = order
        .customer
        .as_ref()
        .map(|customer| customer.full_name())
        .unwrap_or_else(|| "N/A".to_string());

    let mut details = vec![
        detail_row("Order:", &order.name),
        detail_row("Order #:", &order.order_number.to_string()),
        detail_row(
            "Date:",
            &format_order_date(&order.created_at, config)
                .unwrap_or_else(|| order.created_at.trim().to_string()),
        ),
        detail_row("Customer:", &customer_name),
    ];
    if let Some(email) = order
        .customer
        .as_ref()
        .and_then(|customer| present(customer.email.as_deref()))
    {
        details.push(detail_row("Email:", email));
    }
    details.push(detail_row("Total:", &format!("${}", order.total_price)));
    details.push(detail_row("Items:", &order.total_units().to_string()));

    let shipping = order
        .shipping_address
        .as_ref()
        .map(address_block)
        .unwrap_or_else(|| "<div>No shipping address</div>".to_string());

    let note = order
        .note_text()
        .map(|note| {
            format!(
                r#"<div class="order-note"><div class="section-title">Order Notes</div><div>{}</div></div>"#,
                escape(note)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="card header-card">
  <div class="header-title">Order Summary</div>
  <div class="header-grid">
    <div class="header-section">
      <div class="section-title">Order Details</div>
      {}
    </div>
    <div class="header-section">
      <div class="section-title">Shipping Address</div>
      {}
    </div>
  </div>
  {}
</div>"#,
        details.join("\n      "),
        shipping,
        note
    )
}

/// Shipping address lines, each only when it has content
fn address_block(address: &Address) -> String {
    let mut lines = Vec::new();

    if let Some(company) = present(address.company.as_deref()) {
        lines.push(format!("<div><strong>{}</strong></div>", escape(company)));
    }

    let name = address.full_name();
    let locality = address.locality_line();
    let plain = [
        Some(name.as_str()),
        address.address1.as_deref(),
        address.address2.as_deref(),
        Some(locality.as_str()),
        address.country.as_deref(),
    ];
    lines.extend(
        plain
            .into_iter()
            .filter_map(present)
            .map(|line| format!("<div>{}</div>", escape(line))),
    );

    if let Some(phone) = present(address.phone.as_deref()) {
        lines.push(text_div("phone", &format!("Phone: {}", phone)));
    }

    lines.join("\n      ")
}

/// Format the order timestamp as a short date in the configured offset
///
/// Accepts RFC 3339 timestamps, offset-less date-times (taken as already in
/// the configured offset) and bare dates. Returns `None` for anything else,
/// and when the offset or `date_format` cannot be applied.
pub fn format_order_date(created_at: &str, config: &RenderConfig) -> Option<String> {
    let raw = created_at.trim();
    let offset = FixedOffset::east_opt(config.utc_offset_minutes.checked_mul(60)?)?;

    let local: Option<DateTime<FixedOffset>> = DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&offset))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .and_then(|naive| offset.from_local_datetime(&naive).single())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .and_then(|naive| offset.from_local_datetime(&naive).single())
        });

    // an invalid pattern surfaces as fmt::Error here rather than at parse time
    let mut formatted = String::new();
    write!(formatted, "{}", local?.format(&config.date_format)).ok()?;
    Some(formatted)
}
