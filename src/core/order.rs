//! Order model consumed by the card renderer
//!
//! The shapes mirror the order payload returned by the Shopify Admin API.
//! Everything the renderer treats as optional deserializes leniently: absent
//! strings become empty, absent sub-records become `None`, absent property
//! lists become empty. Only `quantity` is strictly required on a line item.

use serde::{Deserialize, Serialize};

/// An e-commerce order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Upstream numeric identifier
    pub id: u64,

    /// Display name, e.g. `#1234`
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub order_number: u64,

    /// ISO-8601 creation timestamp, kept verbatim
    #[serde(default)]
    pub created_at: String,

    /// Decimal string, rendered as-is
    #[serde(default)]
    pub total_price: String,

    #[serde(default)]
    pub customer: Option<Customer>,

    #[serde(default)]
    pub shipping_address: Option<Address>,

    /// Carried for completeness; the cards never show it
    #[serde(default)]
    pub billing_address: Option<Address>,

    pub line_items: Vec<LineItem>,

    #[serde(default)]
    pub note: Option<String>,
}

impl Order {
    /// Number of unit cards this order expands to
    pub fn total_units(&self) -> u64 {
        self.line_items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// The order note, if it carries any text
    pub fn note_text(&self) -> Option<&str> {
        self.note.as_deref().filter(|note| !note.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Customer {
    /// `first last`, trimmed; empty when neither part is present
    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }
}

/// Postal address; every part may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Address {
    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    /// `City, PROVINCE ZIP`, built only from the parts that are present
    pub fn locality_line(&self) -> String {
        let city = present(self.city.as_deref());
        let region = [present(self.province.as_deref()), present(self.zip.as_deref())]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        match (city, region.is_empty()) {
            (Some(city), false) => format!("{}, {}", city, region),
            (Some(city), true) => city.to_string(),
            (None, _) => region,
        }
    }
}

/// One ordered product entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    pub id: u64,

    #[serde(default)]
    pub title: String,

    /// Units ordered; zero expands to no unit cards
    pub quantity: u32,

    /// Unit price as a decimal string
    #[serde(default)]
    pub price: String,

    #[serde(default)]
    pub sku: Option<String>,

    #[serde(default)]
    pub variant_title: Option<String>,

    #[serde(default)]
    pub properties: Vec<LineItemProperty>,
}

/// Free-form customization attached to a line item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItemProperty {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub value: Option<String>,
}

impl LineItemProperty {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }
}

/// Returns the trimmed value when it has content
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn join_name(first: Option<&str>, last: Option<&str>) -> String {
    format!("{} {}", first.unwrap_or_default(), last.unwrap_or_default())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(quantity: u32) -> LineItem {
        LineItem {
            id: 1,
            title: "Rug".to_string(),
            quantity,
            price: "10.00".to_string(),
            sku: None,
            variant_title: None,
            properties: vec![],
        }
    }

    #[test]
    fn test_total_units_sums_quantities() {
        let order = Order {
            id: 1,
            name: "#1".to_string(),
            order_number: 1,
            created_at: String::new(),
            total_price: String::new(),
            customer: None,
            shipping_address: None,
            billing_address: None,
            line_items: vec![item(2), item(0), item(3)],
            note: None,
        };
        assert_eq!(order.total_units(), 5);
    }

    #[test]
    fn test_note_text_ignores_empty() {
        let mut order: Order = serde_json::from_value(json!({
            "id": 1,
            "line_items": [{ "quantity": 1 }],
            "note": ""
        }))
        .unwrap();
        assert_eq!(order.note_text(), None);

        order.note = Some("Rush".to_string());
        assert_eq!(order.note_text(), Some("Rush"));
    }

    #[test]
    fn test_lenient_deserialization() {
        let order: Order = serde_json::from_value(json!({
            "id": 42,
            "line_items": [{
                "quantity": 2,
                "properties": [{ "name": "Width" }]
            }]
        }))
        .unwrap();

        assert_eq!(order.name, "");
        assert!(order.customer.is_none());
        assert_eq!(order.line_items[0].title, "");
        assert_eq!(order.line_items[0].properties[0].value, None);
    }

    #[test]
    fn test_quantity_is_required() {
        let result = serde_json::from_value::<Order>(json!({
            "id": 42,
            "line_items": [{ "title": "Rug" }]
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("quantity"));
    }

    #[test]
    fn test_customer_full_name() {
        let customer = Customer {
            first_name: Some("Sarah".to_string()),
            last_name: None,
            email: None,
        };
        assert_eq!(customer.full_name(), "Sarah");
        assert_eq!(Customer::default().full_name(), "");
    }

    #[test]
    fn test_locality_line() {
        let mut address = Address {
            city: Some("Portland".to_string()),
            province: Some("OR".to_string()),
            zip: Some("97201".to_string()),
            ..Default::default()
        };
        assert_eq!(address.locality_line(), "Portland, OR 97201");

        address.province = None;
        assert_eq!(address.locality_line(), "Portland, 97201");

        address.zip = None;
        assert_eq!(address.locality_line(), "Portland");

        address.city = None;
        address.zip = Some("97201".to_string());
        assert_eq!(address.locality_line(), "97201");

        assert_eq!(Address::default().locality_line(), "");
    }
}
