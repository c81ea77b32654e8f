//! Document assembly and the print stylesheet

use super::html::escape;
use super::summary::summary_card;
use super::unit::unit_cards;
use crate::config::RenderConfig;
use crate::core::order::Order;

/// Brand accent that survives print color stripping
pub const BRAND_GREEN: &str = "#059669";

/// Stylesheet embedded in every document
///
/// On screen the cards are centered with shadows and rounded corners. In
/// print each card fills one 8.5in x 5.5in page, the print buttons disappear,
/// text is forced to black and only the brand green is kept.
pub const STYLESHEET: &str = r#"
    * {
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }

    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
      background: #1f2937;
      padding: 20px;
      color: #1f2937;
    }

    .card {
      background: white;
      border-radius: 8px;
      padding: 24px;
      margin: 20px auto;
      max-width: 800px;
      box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    }

    .header-title {
      font-size: 28px;
      font-weight: 700;
      margin-bottom: 24px;
      color: #059669;
      text-align: center;
    }

    .header-grid {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 32px;
      margin-bottom: 20px;
    }

    .header-section {
      display: flex;
      flex-direction: column;
      gap: 8px;
    }

    .section-title {
      font-size: 16px;
      font-weight: 600;
      margin-bottom: 12px;
      color: #374151;
      border-bottom: 2px solid #059669;
      padding-bottom: 4px;
    }

    .detail-row {
      display: flex;
      justify-content: space-between;
      padding: 4px 0;
      font-size: 14px;
    }

    .detail-row .label {
      font-weight: 500;
      color: #6b7280;
    }

    .detail-row .value {
      font-weight: 600;
      color: #1f2937;
    }

    .order-note {
      margin-top: 20px;
      padding-top: 20px;
      border-top: 1px solid #e5e7eb;
    }

    .order-note > div:last-child {
      margin-top: 8px;
      font-size: 14px;
      color: #4b5563;
      font-style: italic;
    }

    .card-header {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-bottom: 16px;
      padding-bottom: 12px;
      border-bottom: 2px solid #059669;
    }

    .order-info {
      font-size: 18px;
      font-weight: 600;
      color: #059669;
    }

    .unit-badge {
      background: #059669;
      color: white;
      padding: 6px 16px;
      border-radius: 20px;
      font-size: 14px;
      font-weight: 600;
    }

    .project-name {
      font-size: 20px;
      font-weight: 700;
      color: #1f2937;
      text-transform: uppercase;
      letter-spacing: 0.5px;
      margin-bottom: 12px;
    }

    .product-title {
      font-size: 24px;
      font-weight: 700;
      color: #1f2937;
      margin-bottom: 8px;
    }

    .variant-title {
      font-size: 16px;
      color: #6b7280;
      margin-bottom: 4px;
    }

    .sku {
      font-size: 14px;
      color: #9ca3af;
      font-family: 'Courier New', monospace;
      margin-bottom: 16px;
    }

    .properties-grid {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 16px;
      margin: 20px 0;
      padding: 16px;
      background: #f9fafb;
      border-radius: 6px;
    }

    .property {
      display: flex;
      flex-direction: column;
      gap: 4px;
    }

    .property-label {
      font-size: 12px;
      font-weight: 600;
      color: #6b7280;
      text-transform: uppercase;
      letter-spacing: 0.5px;
    }

    .property-value {
      font-size: 18px;
      font-weight: 600;
      color: #1f2937;
    }

    .install-location {
      margin: 16px 0;
      padding: 16px;
      background: #ecfdf5;
      border-left: 4px solid #059669;
      border-radius: 4px;
    }

    .install-label {
      font-size: 12px;
      font-weight: 600;
      color: #047857;
      text-transform: uppercase;
      letter-spacing: 0.5px;
      margin-bottom: 6px;
    }

    .install-value {
      font-size: 18px;
      font-weight: 600;
      color: #065f46;
      font-style: italic;
    }

    .custom-notes {
      margin: 16px 0;
      padding: 12px;
      background: #fef3c7;
      border-radius: 4px;
    }

    .notes-label {
      font-size: 12px;
      font-weight: 600;
      color: #92400e;
      text-transform: uppercase;
      margin-bottom: 6px;
    }

    .notes-value {
      font-size: 14px;
      color: #78350f;
    }

    .card-footer {
      margin-top: 20px;
      padding-top: 16px;
      border-top: 1px solid #e5e7eb;
      text-align: right;
    }

    .price {
      font-size: 24px;
      font-weight: 700;
      color: #059669;
    }

    .print-button-container {
      text-align: center;
      margin: 40px 0;
    }

    .print-button {
      background: #059669;
      color: white;
      border: none;
      padding: 16px 48px;
      font-size: 18px;
      font-weight: 600;
      border-radius: 8px;
      cursor: pointer;
      box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
      transition: background 0.2s;
    }

    .print-button:hover {
      background: #047857;
    }

    @page {
      size: 8.5in 5.5in;
      margin: 0;
    }

    @media print {
      body {
        background: white;
        padding: 0;
      }

      .card {
        width: 8.5in;
        height: 5.5in;
        max-width: none;
        margin: 0;
        padding: 0.5in;
        border-radius: 0;
        box-shadow: none;
        page-break-after: always;
        break-after: page;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
      }

      .print-button-container {
        display: none;
      }

      * {
        color: black !important;
        -webkit-print-color-adjust: exact;
        print-color-adjust: exact;
      }

      .header-title {
        color: #059669 !important;
      }

      .section-title,
      .card-header {
        border-color: #059669 !important;
      }

      .order-info,
      .unit-badge {
        color: white !important;
        background: #059669 !important;
      }

      .price {
        color: #059669 !important;
      }
    }
"#;

/// Render the complete HTML document for an order
pub fn render_document(order: &Order, config: &RenderConfig) -> String {
    let print_control = format!(
        r#"<div class="print-button-container">
    <button class="print-button" onclick="window.print()">{}</button>
  </div>"#,
        escape(&config.print_label)
    );

    let cards = unit_cards(order);
    tracing::debug!(
        order = %order.name,
        unit_cards = cards.len(),
        "assembled report card document"
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Report Cards - Order {title}</title>
  <style>{style}</style>
</head>
<body>
  {print}
  {summary}
  {cards}
  {print}
</body>
</html>"#,
        title = escape(&order.name),
        style = STYLESHEET,
        print = print_control,
        summary = summary_card(order, config),
        cards = cards.join("\n  "),
    )
}
