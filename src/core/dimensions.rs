//! Dimension value cleanup and phrasing

use regex::Regex;
use std::sync::OnceLock;

/// Remove a trailing unit token from a single dimension value
///
/// Recognised units are `ft`, `in`, `inch`, `inches` and `feet` in any case,
/// optionally preceded by whitespace and followed by a period. Only the end of
/// the string is touched; the result is trimmed.
///
/// # Examples
///
/// ```
/// use report_cards::core::dimensions::strip_units;
///
/// assert_eq!(strip_units("8 ft"), "8");
/// assert_eq!(strip_units("2.5 feet"), "2.5");
/// assert_eq!(strip_units("6 ft diameter"), "6 ft diameter");
/// ```
pub fn strip_units(raw: &str) -> String {
    static UNIT_SUFFIX: OnceLock<Regex> = OnceLock::new();
    let regex = UNIT_SUFFIX
        .get_or_init(|| Regex::new(r"(?i)\s*(ft|in|inch|inches|feet)\.?$").unwrap());

    regex.replace(raw, "").trim().to_string()
}

/// Compose the human-readable dimension phrase from unit-stripped values
///
/// Diameter wins over width and length; a lone width or length is labelled;
/// nothing resolved yields an empty string.
pub fn compose_dimension_phrase(width: &str, length: &str, diameter: &str) -> String {
    match (width.is_empty(), length.is_empty(), diameter.is_empty()) {
        (_, _, false) => format!("{} diameter", diameter),
        (false, false, true) => format!("{} × {}", width, length),
        (false, true, true) => format!("Width: {}", width),
        (true, false, true) => format!("Length: {}", length),
        (true, true, true) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_units_variants() {
        assert_eq!(strip_units("8 ft"), "8");
        assert_eq!(strip_units("8ft"), "8");
        assert_eq!(strip_units("8 FT."), "8");
        assert_eq!(strip_units("2.5 feet"), "2.5");
        assert_eq!(strip_units("30 in"), "30");
        assert_eq!(strip_units("30 inch"), "30");
        assert_eq!(strip_units("30 Inches"), "30");
    }

    #[test]
    fn test_strip_units_only_trailing() {
        assert_eq!(strip_units("6 ft diameter"), "6 ft diameter");
        assert_eq!(strip_units("8 ft x 10"), "8 ft x 10");
    }

    #[test]
    fn test_strip_units_without_unit() {
        assert_eq!(strip_units("8"), "8");
        assert_eq!(strip_units("  8  "), "8");
        assert_eq!(strip_units(""), "");
    }

    #[test]
    fn test_strip_units_removes_single_token() {
        assert_eq!(strip_units("5 ft in"), "5 ft");
    }

    #[test]
    fn test_compose_priority() {
        assert_eq!(compose_dimension_phrase("8", "10", "6"), "6 diameter");
        assert_eq!(compose_dimension_phrase("", "", "6"), "6 diameter");
        assert_eq!(compose_dimension_phrase("8", "10", ""), "8 × 10");
        assert_eq!(compose_dimension_phrase("8", "", ""), "Width: 8");
        assert_eq!(compose_dimension_phrase("", "10", ""), "Length: 10");
        assert_eq!(compose_dimension_phrase("", "", ""), "");
    }

    #[test]
    fn test_compose_uses_multiplication_sign() {
        let phrase = compose_dimension_phrase("8", "10", "");
        assert!(phrase.contains('×'));
        assert!(!phrase.contains(" x "));
    }

    #[test]
    fn test_strip_then_compose() {
        let diameter = strip_units("6 ft");
        assert_eq!(compose_dimension_phrase("", "", &diameter), "6 diameter");
    }
}
