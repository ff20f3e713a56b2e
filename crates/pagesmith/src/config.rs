//! Configuration types for Pagesmith compilation.
//!
//! This module provides configuration structures that control which template
//! renders components, where artifacts are written and how documentation is
//! laid out. All types implement [`serde::Deserialize`] for loading from
//! external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`TemplateConfig`] - Selects the [`ProviderKind`] used for components.
//! - [`OutputConfig`] - Output sub-directories and the component extension.
//! - [`DocsConfig`] - Selects the documentation [`DocStyle`].
//!
//! # Example
//!
//! ```
//! # use pagesmith::config::{AppConfig, DocStyle};
//! let config = AppConfig::default();
//! assert_eq!(config.output().component_extension(), "vue");
//! assert_eq!(config.docs().style(), DocStyle::Catalog);
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{PagesmithError, sink::ArtifactDir, template::ProviderKind};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Template section.
    #[serde(default)]
    template: TemplateConfig,

    /// Output section.
    #[serde(default)]
    output: OutputConfig,

    /// Documentation section.
    #[serde(default)]
    docs: DocsConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(template: TemplateConfig, output: OutputConfig, docs: DocsConfig) -> Self {
        Self {
            template,
            output,
            docs,
        }
    }

    pub fn template(&self) -> &TemplateConfig {
        &self.template
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    pub fn docs(&self) -> &DocsConfig {
        &self.docs
    }

    /// Check values that would produce unusable file names.
    ///
    /// # Errors
    ///
    /// Returns [`PagesmithError::Config`] if the component extension is
    /// empty or contains a path separator or a leading dot.
    pub fn validate(&self) -> Result<(), PagesmithError> {
        let ext = self.output.component_extension.as_str();
        if ext.is_empty() {
            return Err(PagesmithError::Config(
                "output.component_extension must not be empty".to_string(),
            ));
        }
        if ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(PagesmithError::Config(format!(
                "output.component_extension `{ext}` must be a bare extension such as `vue`"
            )));
        }
        Ok(())
    }
}

/// Template provider selection.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateConfig {
    #[serde(default)]
    provider: ProviderKind,
}

impl TemplateConfig {
    pub fn new(provider: ProviderKind) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> ProviderKind {
        self.provider
    }
}

fn default_components_dir() -> PathBuf {
    PathBuf::from("components")
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_types_dir() -> PathBuf {
    PathBuf::from("types")
}

fn default_component_extension() -> String {
    "vue".to_string()
}

/// Output layout, relative to the sink's root.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Component and page aggregate files.
    #[serde(default = "default_components_dir")]
    components_dir: PathBuf,

    /// `docs.html`.
    #[serde(default = "default_docs_dir")]
    docs_dir: PathBuf,

    /// TypeScript declarations, event stubs and the metadata module.
    #[serde(default = "default_types_dir")]
    types_dir: PathBuf,

    #[serde(default = "default_component_extension")]
    component_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            components_dir: default_components_dir(),
            docs_dir: default_docs_dir(),
            types_dir: default_types_dir(),
            component_extension: default_component_extension(),
        }
    }
}

impl OutputConfig {
    pub fn components_dir(&self) -> &Path {
        &self.components_dir
    }

    pub fn docs_dir(&self) -> &Path {
        &self.docs_dir
    }

    pub fn types_dir(&self) -> &Path {
        &self.types_dir
    }

    pub fn component_extension(&self) -> &str {
        &self.component_extension
    }

    /// Where component and aggregate files go.
    pub fn components(&self) -> ArtifactDir {
        ArtifactDir::new(&self.components_dir, &self.component_extension)
    }

    /// Where TypeScript files go.
    pub fn types(&self) -> ArtifactDir {
        ArtifactDir::new(&self.types_dir, "ts")
    }
}

/// Documentation layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocStyle {
    /// One card per generated layout, listing its field records.
    #[default]
    Catalog,
    /// One section per layout, leaves bucketed by tab and sub-layout.
    Grouped,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    #[serde(default)]
    style: DocStyle,
}

impl DocsConfig {
    pub fn new(style: DocStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> DocStyle {
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.template().provider(), ProviderKind::ElementPlus);
        assert_eq!(config.output().components_dir(), Path::new("components"));
        assert_eq!(config.output().docs_dir(), Path::new("docs"));
        assert_eq!(config.output().types_dir(), Path::new("types"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [output]
            components_dir = "src/components"

            [docs]
            style = "grouped"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.output().components().path_for("OrderNo"),
            Path::new("src/components/OrderNo.vue")
        );
        assert_eq!(config.output().types_dir(), Path::new("types"));
        assert_eq!(config.docs().style(), DocStyle::Grouped);
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[template]\nprovider = \"vuetify\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_extension() {
        for ext in ["", ".vue", "a/b"] {
            let config: AppConfig =
                toml::from_str(&format!("[output]\ncomponent_extension = \"{ext}\"\n")).unwrap();
            assert!(
                matches!(config.validate(), Err(PagesmithError::Config(_))),
                "{ext:?} should be rejected"
            );
        }
    }
}
