//! Built-in demo order

use crate::core::order::{Address, Customer, LineItem, LineItemProperty, Order};

pub const SAMPLE_ORDER_ID: u64 = 5678901234;

/// A three-item rug order exercising every card block
pub fn sample_order() -> Order {
    Order {
        id: SAMPLE_ORDER_ID,
        name: "#1234".to_string(),
        order_number: 1234,
        created_at: "2024-01-15T10:30:00Z".to_string(),
        total_price: "2850.00".to_string(),
        customer: Some(Customer {
            first_name: Some("Sarah".to_string()),
            last_name: Some("Johnson".to_string()),
            email: Some("sarah.johnson@example.com".to_string()),
        }),
        shipping_address: Some(Address {
            first_name: Some("Sarah".to_string()),
            last_name: Some("Johnson".to_string()),
            company: Some("Modern Interiors LLC".to_string()),
            address1: Some("456 Oak Avenue".to_string()),
            address2: Some("Suite 200".to_string()),
            city: Some("Portland".to_string()),
            province: Some("OR".to_string()),
            country: Some("United States".to_string()),
            zip: Some("97201".to_string()),
            phone: Some("(503) 555-0123".to_string()),
        }),
        billing_address: Some(Address {
            first_name: Some("Sarah".to_string()),
            last_name: Some("Johnson".to_string()),
            address1: Some("456 Oak Avenue".to_string()),
            city: Some("Portland".to_string()),
            province: Some("OR".to_string()),
            country: Some("United States".to_string()),
            zip: Some("97201".to_string()),
            ..Default::default()
        }),
        line_items: vec![
            LineItem {
                id: 11111,
                title: "Custom Area Rug - Geometric Pattern".to_string(),
                quantity: 2,
                price: "850.00".to_string(),
                sku: Some("RUG-GEO-001".to_string()),
                variant_title: Some("8x10 ft".to_string()),
                properties: vec![
                    LineItemProperty::new("Project Name", "Living Room Renovation"),
                    LineItemProperty::new("Choose Rug Shape", "Rectangle"),
                    LineItemProperty::new("Width", "8 ft"),
                    LineItemProperty::new("Length", "10 ft"),
                    LineItemProperty::new("Install Location", "Main Living Room - North Wall"),
                    LineItemProperty::new(
                        "Custom Notes",
                        "Place under coffee table, align with sofa",
                    ),
                ],
            },
            LineItem {
                id: 22222,
                title: "Hand-Tufted Wool Runner".to_string(),
                quantity: 1,
                price: "425.00".to_string(),
                sku: Some("RUG-RUN-002".to_string()),
                variant_title: Some("2.5x8 ft".to_string()),
                properties: vec![
                    LineItemProperty::new("Project Name", "Hallway Update"),
                    LineItemProperty::new("Choose Rug Shape", "Runner"),
                    LineItemProperty::new("Width", "2.5 ft"),
                    LineItemProperty::new("Length", "8 ft"),
                    LineItemProperty::new("Install Location", "Main Hallway - Entrance"),
                ],
            },
            LineItem {
                id: 33333,
                title: "Round Accent Rug - Medallion".to_string(),
                quantity: 3,
                price: "575.00".to_string(),
                sku: Some("RUG-RND-003".to_string()),
                variant_title: Some("6 ft diameter".to_string()),
                properties: vec![
                    LineItemProperty::new("Project Name", "Bedroom Suite"),
                    LineItemProperty::new("Choose Rug Shape", "Round"),
                    LineItemProperty::new("Diameter", "6 ft"),
                    LineItemProperty::new("Install Location", "Master Bedroom - Center"),
                    LineItemProperty::new("Special Instructions", "Center under bed frame"),
                ],
            },
        ],
        note: Some(
            "Rush order - client wants delivery by end of week for open house event".to_string(),
        ),
    }
}
