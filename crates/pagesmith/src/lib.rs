//! Pagesmith - compile declarative UI page layouts into artifacts.
//!
//! A page is a tree of layout parts (inputs, buttons, tables, rows, columns,
//! tabs and included sub-pages). From one immutable tree Pagesmith writes a
//! component file per distinct field or table, a page aggregate per distinct
//! layout, HTML documentation and TypeScript declarations.

pub mod config;
pub mod export;
pub mod generate;
pub mod project;
pub mod sink;
pub mod template;

mod error;

pub use pagesmith_core::{builder, layout, meta, traverse};
pub use pagesmith_parser::Manifest;

pub use error::PagesmithError;

use std::rc::Rc;

use log::{debug, info, trace};

use config::{AppConfig, DocStyle};
use export::typescript;
use generate::Generator;
use layout::Layout;
use project::docs::DocLayout;
use sink::ArtifactSink;

/// Facade for parsing manifests and compiling layouts.
///
/// # Examples
///
/// ```rust
/// use pagesmith::{PageCompiler, config::AppConfig, sink::MemorySink};
///
/// let source = r#"
///     [fields.OrderNo]
///     label = "受注No"
///
///     [[layouts]]
///     id = "OrderForm"
///     title = "受注画面"
///     parts = [{ input = "OrderNo" }]
/// "#;
///
/// let compiler = PageCompiler::new(AppConfig::default());
/// let manifest = compiler.parse(source).expect("Failed to parse");
///
/// let mut sink = MemorySink::new();
/// compiler
///     .compile(manifest.root(), &mut sink)
///     .expect("Failed to compile");
///
/// assert!(sink.contains("components/OrderNo.vue"));
/// assert!(sink.contains("components/OrderForm.vue"));
/// assert!(sink.contains("docs/docs.html"));
/// ```
#[derive(Debug, Default)]
pub struct PageCompiler {
    config: AppConfig,
}

impl PageCompiler {
    /// Create a new compiler with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse manifest source text.
    ///
    /// # Errors
    ///
    /// Returns [`PagesmithError::Parse`] carrying every diagnostic and the
    /// source text.
    pub fn parse(&self, source: &str) -> Result<Manifest, PagesmithError> {
        info!("Parsing manifest");

        let manifest = pagesmith_parser::parse(source)
            .map_err(|err| PagesmithError::new_parse_error(err, source))?;

        debug!(
            root = manifest.root().id(),
            warnings = manifest.warnings().len();
            "Manifest parsed successfully"
        );
        trace!(manifest:?; "Parsed manifest");

        Ok(manifest)
    }

    /// Write every artifact for `layout` into `sink`.
    ///
    /// Runs a fresh [`Generator`] for components and aggregates, then writes
    /// `docs.html`, the derived interfaces, `eventHandlers.ts` and
    /// `MetaDataField.ts` according to the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PagesmithError::Config`] for unusable configuration values
    /// and [`PagesmithError::Io`] if the sink fails.
    pub fn compile(
        &self,
        layout: &Rc<Layout>,
        sink: &mut dyn ArtifactSink,
    ) -> Result<DocLayout, PagesmithError> {
        self.config.validate()?;
        let output = self.config.output();
        let provider = self.config.template().provider().provider();

        info!(layout_id = layout.id(), provider = provider.name(); "Compiling layout");

        let doc = Generator::new(provider.as_ref(), &mut *sink, output.components())
            .generate(layout)?;

        let docs = match self.config.docs().style() {
            DocStyle::Catalog => export::docs::catalog_html(&doc),
            DocStyle::Grouped => export::docs::grouped_html(std::slice::from_ref(layout)),
        };
        sink.write(&output.docs_dir().join("docs.html"), &docs)?;
        info!(style:? = self.config.docs().style(); "Docs written");

        let types = output.types();
        let declarations = typescript::derived_declarations(layout);
        for declaration in &declarations {
            sink.write(&types.path_for(&declaration.name), &declaration.source)?;
        }
        sink.write(
            &types.path_for(typescript::EVENT_STUBS_FILE),
            &typescript::event_stubs(std::slice::from_ref(layout)),
        )?;
        sink.write(
            &types.path_for(typescript::METADATA_FILE),
            &typescript::metadata_module(layout),
        )?;
        info!(declarations = declarations.len(); "TypeScript written");

        Ok(doc)
    }

    /// Indented outline of `layout`, one part per line.
    pub fn outline(&self, layout: &Layout) -> String {
        layout.to_string()
    }
}
