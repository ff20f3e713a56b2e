//! Target-framework templates.
//!
//! A [`TemplateProvider`] turns per-kind metadata into markup: leaves get a
//! standalone component source, containers wrap already rendered children.
//! Providers change only the markup, never which artifacts are produced.
//!
//! # Available Providers
//!
//! - [`element_plus`]: Vue 3 single-file components using Element Plus

pub mod element_plus;

use serde::Deserialize;

use pagesmith_core::meta::{FieldMeta, TableMeta};

pub use element_plus::ElementPlus;

/// Rendering contract consumed by the artifact projections.
pub trait TemplateProvider {
    /// Display name, shown in generated documentation.
    fn name(&self) -> &str;

    /// Standalone component source for a text input.
    fn input_text(&self, meta: &FieldMeta) -> String;

    /// Standalone component source for a button.
    fn button(&self, meta: &FieldMeta) -> String;

    /// Standalone component source for a table.
    fn table(&self, meta: &TableMeta) -> String;

    fn row(&self, inner: &str) -> String;

    fn col(&self, span: i64, inner: &str) -> String;

    fn tab(&self, inner: &str) -> String;

    fn tab_pane(&self, label: &str, inner: &str) -> String;
}

/// Built-in providers selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    #[default]
    ElementPlus,
}

impl ProviderKind {
    /// Instantiate the provider.
    pub fn provider(self) -> Box<dyn TemplateProvider> {
        match self {
            Self::ElementPlus => Box::new(ElementPlus),
        }
    }
}

/// Escape `&`, `<`, `>` and `"` for use inside markup attributes.
pub(crate) fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_is_element_plus() {
        let provider = ProviderKind::default().provider();
        assert_eq!(provider.name(), "Element Plus");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"a "b" <c> & d"#), "a &quot;b&quot; &lt;c&gt; &amp; d");
        assert_eq!(escape_attr("検索"), "検索");
    }
}
