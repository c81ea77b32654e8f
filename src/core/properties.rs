//! Named attribute lookup over line-item properties
//!
//! Property names are matched case-insensitively after trimming, the first
//! match in input order wins, and anything missing resolves to an empty
//! string. Lookups never fail.

use super::dimensions::{compose_dimension_phrase, strip_units};
use super::order::LineItemProperty;

pub const PROJECT_NAME: &str = "Project Name";
pub const RUG_SHAPE: &str = "Choose Rug Shape";
pub const WIDTH: &str = "Width";
pub const LENGTH: &str = "Length";
pub const DIAMETER: &str = "Diameter";
pub const INSTALL_LOCATION: &str = "Install Location";
pub const CUSTOM_NOTES: &str = "Custom Notes";
pub const SPECIAL_INSTRUCTIONS: &str = "Special Instructions";

/// Resolve a property value by name
///
/// Returns the trimmed value of the first property whose trimmed name equals
/// `name` ignoring case, or an empty string.
///
/// # Examples
///
/// ```
/// use report_cards::core::order::LineItemProperty;
/// use report_cards::core::properties::resolve;
///
/// let props = vec![LineItemProperty::new("Width", " 8 ft ")];
/// assert_eq!(resolve(&props, "width"), "8 ft");
/// assert_eq!(resolve(&props, " WIDTH "), "8 ft");
/// assert_eq!(resolve(&props, "Length"), "");
/// ```
pub fn resolve(properties: &[LineItemProperty], name: &str) -> String {
    let wanted = name.trim().to_lowercase();

    properties
        .iter()
        .find(|prop| prop.name.trim().to_lowercase() == wanted)
        .and_then(|prop| prop.value.as_deref())
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// Attributes the unit card shows, resolved once per line item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemAttributes {
    pub project_name: String,
    pub shape: String,
    /// Composed dimension phrase, empty when no dimension resolved
    pub dimensions: String,
    pub install_location: String,
    /// Custom Notes, falling back to Special Instructions
    pub notes: String,
}

impl ItemAttributes {
    pub fn from_properties(properties: &[LineItemProperty]) -> Self {
        let width = strip_units(&resolve(properties, WIDTH));
        let length = strip_units(&resolve(properties, LENGTH));
        let diameter = strip_units(&resolve(properties, DIAMETER));

        let notes = match resolve(properties, CUSTOM_NOTES) {
            notes if notes.is_empty() => resolve(properties, SPECIAL_INSTRUCTIONS),
            notes => notes,
        };

        Self {
            project_name: resolve(properties, PROJECT_NAME),
            shape: resolve(properties, RUG_SHAPE),
            dimensions: compose_dimension_phrase(&width, &length, &diameter),
            install_location: resolve(properties, INSTALL_LOCATION),
            notes,
        }
    }

    /// Whether the two-column shape/dimensions block has anything to show
    pub fn has_property_block(&self) -> bool {
        !self.shape.is_empty() || !self.dimensions.is_empty()
    }
}
