//! Per-unit label cards
//!
//! Each line item expands to `quantity` cards numbered `1 of q` .. `q of q`.
//! Numbering restarts for every item and items keep their input order.

use super::html::{escape, text_div};
use crate::core::order::{LineItem, Order, present};
use crate::core::properties::ItemAttributes;

/// One printable label for a single unit of a line item
#[derive(Debug, Clone, Copy)]
pub struct UnitCard<'a> {
    pub order_name: &'a str,
    pub item: &'a LineItem,
    pub attributes: &'a ItemAttributes,
    /// 1-based position within the item's own run
    pub unit_number: u32,
}

impl UnitCard<'_> {
    pub fn badge(&self) -> String {
        format!("{} of {}", self.unit_number, self.item.quantity)
    }

    pub fn to_html(&self) -> String {
        let attrs = self.attributes;
        let mut parts = vec![format!(
            r#"<div class="card-header">
    <div class="order-info">{}</div>
    <div class="unit-badge">{}</div>
  </div>"#,
            escape(self.order_name),
            self.badge()
        )];

        if !attrs.project_name.is_empty() {
            parts.push(text_div("project-name", &attrs.project_name));
        }

        parts.push(text_div("product-title", self.item.title.trim()));

        if let Some(variant) = present(self.item.variant_title.as_deref()) {
            parts.push(text_div("variant-title", variant));
        }
        if let Some(sku) = present(self.item.sku.as_deref()) {
            parts.push(text_div("sku", &format!("SKU: {}", sku)));
        }

        if attrs.has_property_block() {
            let cells = [("Shape", &attrs.shape), ("Dimensions", &attrs.dimensions)]
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(label, value)| {
                    format!(
                        r#"<div class="property"><div class="property-label">{}</div><div class="property-value">{}</div></div>"#,
                        label,
                        escape(value)
                    )
                })
                .collect::<Vec<_>>();
            parts.push(format!(
                r#"<div class="properties-grid">{}</div>"#,
                cells.join("")
            ));
        }

        if !attrs.install_location.is_empty() {
            parts.push(format!(
                r#"<div class="install-location"><div class="install-label">Install Location:</div>{}</div>"#,
                text_div("install-value", &attrs.install_location)
            ));
        }

        if !attrs.notes.is_empty() {
            parts.push(format!(
                r#"<div class="custom-notes"><div class="notes-label">Notes:</div>{}</div>"#,
                text_div("notes-value", &attrs.notes)
            ));
        }

        parts.push(format!(
            r#"<div class="card-footer">{}</div>"#,
            text_div("price", &format!("${}", self.item.price))
        ));

        format!(
            "<div class=\"card item-card\">\n  {}\n</div>",
            parts.join("\n  ")
        )
    }
}

/// Unit-card fragments for every line item, in order
pub fn unit_cards(order: &Order) -> Vec<String> {
    order
        .line_items
        .iter()
        .flat_map(|item| {
            let attributes = ItemAttributes::from_properties(&item.properties);
            (1..=item.quantity)
                .map(|unit_number| {
                    UnitCard {
                        order_name: &order.name,
                        item,
                        attributes: &attributes,
                        unit_number,
                    }
                    .to_html()
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::LineItemProperty;

    fn item(title: &str, quantity: u32, properties: Vec<LineItemProperty>) -> LineItem {
        LineItem {
            id: 1,
            title: title.to_string(),
            quantity,
            price: "850.00".to_string(),
            sku: None,
            variant_title: None,
            properties,
        }
    }

    fn order(line_items: Vec<LineItem>) -> Order {
        Order {
            id: 1,
            name: "#1234".to_string(),
            order_number: 1234,
            created_at: String::new(),
            total_price: String::new(),
            customer: None,
            shipping_address: None,
            billing_address: None,
            line_items,
            note: None,
        }
    }

    fn badges(cards: &[String]) -> Vec<String> {
        cards
            .iter()
            .map(|card| {
                let start = card.find(r#"<div class="unit-badge">"#).unwrap() + 24;
                let end = start + card[start..].find("</div>").unwrap();
                card[start..end].to_string()
            })
            .collect()
    }

    #[test]
    fn test_numbering_restarts_per_item() {
        let order = order(vec![
            item("Runner", 2, vec![]),
            item("Round", 3, vec![]),
        ]);
        let cards = unit_cards(&order);

        assert_eq!(
            badges(&cards),
            vec!["1 of 2", "2 of 2", "1 of 3", "2 of 3", "3 of 3"]
        );
        assert!(cards[1].contains("Runner"));
        assert!(cards[2].contains("Round"));
    }

    #[test]
    fn test_zero_quantity_yields_no_cards() {
        let order = order(vec![item("Ghost", 0, vec![]), item("Real", 1, vec![])]);
        let cards = unit_cards(&order);

        assert_eq!(cards.len(), 1);
        assert!(cards[0].contains("Real"));
    }

    #[test]
    fn test_empty_properties_omit_optional_blocks() {
        let order = order(vec![item("Plain Rug", 1, vec![])]);
        let card = &unit_cards(&order)[0];

        assert!(card.contains(r#"<div class="product-title">Plain Rug</div>"#));
        assert!(card.contains(r#"<div class="price">$850.00</div>"#));
        assert!(!card.contains("properties-grid"));
        assert!(!card.contains("install-location"));
        assert!(!card.contains("custom-notes"));
        assert!(!card.contains("project-name"));
        assert!(!card.contains("variant-title"));
        assert!(!card.contains("SKU:"));
    }

    #[test]
    fn test_full_card_ordering() {
        let mut rug = item(
            "Custom Area Rug",
            1,
            vec![
                LineItemProperty::new("Project Name", "Living Room"),
                LineItemProperty::new("Choose Rug Shape", "Rectangle"),
                LineItemProperty::new("Width", "8 ft"),
                LineItemProperty::new("Length", "10 ft"),
                LineItemProperty::new("Install Location", "North Wall"),
                LineItemProperty::new("Custom Notes", "Align with sofa"),
            ],
        );
        rug.variant_title = Some("8x10 ft".to_string());
        rug.sku = Some("RUG-GEO-001".to_string());
        let card = &unit_cards(&order(vec![rug]))[0];

        let order_of = |needle: &str| card.find(needle).unwrap();
        let sequence = [
            order_of("order-info"),
            order_of("unit-badge"),
            order_of("project-name"),
            order_of("product-title"),
            order_of("variant-title"),
            order_of("SKU: RUG-GEO-001"),
            order_of("properties-grid"),
            order_of("install-location"),
            order_of("custom-notes"),
            order_of("card-footer"),
        ];
        assert!(sequence.windows(2).all(|pair| pair[0] < pair[1]));

        assert!(card.contains(r#"<div class="project-name">Living Room</div>"#));
        assert!(card.contains(">Rectangle<"));
        assert!(card.contains(">8 × 10<"));
    }

    #[test]
    fn test_property_block_with_only_dimensions() {
        let rug = item("Round", 1, vec![LineItemProperty::new("Diameter", "6 ft")]);
        let card = &unit_cards(&order(vec![rug]))[0];

        assert!(card.contains("properties-grid"));
        assert!(!card.contains(">Shape<"));
        assert!(card.contains(">6 diameter<"));
    }

    #[test]
    fn test_project_name_keeps_original_case() {
        let rug = item("Rug", 1, vec![LineItemProperty::new("Project Name", "Hallway Update")]);
        let card = &unit_cards(&order(vec![rug]))[0];
        assert!(card.contains(">Hallway Update<"));
    }
}
