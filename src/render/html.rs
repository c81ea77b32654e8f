//! Small helpers for building HTML fragments

/// Escape order data before it is interpolated into element content
///
/// Only `&`, `<` and `>` are rewritten, so text like `N/A` or `don't`
/// appears in the document exactly as it was given.
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// A `<div>` with escaped text content
pub fn text_div(class: &str, text: &str) -> String {
    format!(r#"<div class="{}">{}</div>"#, class, escape(text))
}

/// Label/value row used on the summary card
pub fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<div class="detail-row"><span class="label">{}</span> <span class="value">{}</span></div>"#,
        label,
        escape(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup() {
        assert_eq!(escape("<b>&"), "&lt;b&gt;&amp;");
        assert_eq!(escape("Living Room"), "Living Room");
    }

    #[test]
    fn test_escape_keeps_slashes_and_quotes() {
        assert_eq!(escape("N/A"), "N/A");
        assert_eq!(escape("Leave at side door / don't ring"), "Leave at side door / don't ring");
        assert_eq!(escape(r#"6" pad"#), r#"6" pad"#);
    }

    #[test]
    fn test_text_div_escapes_content_only() {
        assert_eq!(
            text_div("sku", "A<1>"),
            r#"<div class="sku">A&lt;1&gt;</div>"#
        );
    }

    #[test]
    fn test_detail_row() {
        let row = detail_row("Order:", "#1234");
        assert!(row.contains(r#"<span class="label">Order:</span>"#));
        assert!(row.contains(r#"<span class="value">#1234</span>"#));
    }
}
