//! Exporters for documentation and TypeScript declarations.
//!
//! Exporters are pure string builders; [`PageCompiler`](crate::PageCompiler)
//! decides where their output is written.
//!
//! # Available Exporters
//!
//! - [`docs`]: HTML documentation, as a layout catalog or grouped by tab
//! - [`typescript`]: field interfaces, event handler stubs and the
//!   metadata module read by generated components

pub mod docs;
pub mod typescript;

/// Escape text for HTML element content and attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    crate::template::escape_attr(text).replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>'x' & \"y\"</b>"), "&lt;b&gt;&#39;x&#39; &amp; &quot;y&quot;&lt;/b&gt;");
    }
}
