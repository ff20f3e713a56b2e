//! # Pagesmith Parser
//!
//! Reads a TOML page manifest and turns it into the immutable layout trees
//! of [`pagesmith_core`]. A manifest declares a catalog of fields and
//! tables once, then any number of layouts that reference catalog entries
//! by id and may include each other.
//!
//! ## Usage
//!
//! ```
//! # use pagesmith_parser::{parse, error::ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         [fields.OrderNo]
//!         label = "受注No"
//!
//!         [[layouts]]
//!         id = "Header"
//!         title = "ヘッダー"
//!         parts = [{ row = [{ span = 12, parts = [{ input = "OrderNo" }] }] }]
//!     "#;
//!
//!     let manifest = parse(source)?;
//!     assert_eq!(manifest.root().id(), "Header");
//!     Ok(())
//! }
//! ```

pub mod error;
mod manifest;
#[cfg(test)]
mod parser_tests;
mod resolve;
mod span;

use std::rc::Rc;

use indexmap::IndexMap;
use log::{debug, info};

use pagesmith_core::layout::Layout;

pub use span::Span;

use error::{Diagnostic, ErrorCode, ParseError};
use manifest::ManifestDecl;
use resolve::Resolver;

/// A successfully parsed manifest.
#[derive(Debug)]
pub struct Manifest {
    layouts: IndexMap<String, Rc<Layout>>,
    root: Rc<Layout>,
    warnings: Vec<Diagnostic>,
}

impl Manifest {
    /// The layout to compile. Named by the top-level `root` key, otherwise
    /// the last declared layout.
    pub fn root(&self) -> &Rc<Layout> {
        &self.root
    }

    /// Every declared layout keyed by id, in declaration order.
    pub fn layouts(&self) -> &IndexMap<String, Rc<Layout>> {
        &self.layouts
    }

    pub fn layout(&self, id: &str) -> Option<&Rc<Layout>> {
        self.layouts.get(id)
    }

    /// Warnings found while parsing.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }
}

/// Parse manifest source text.
///
/// The pipeline is:
///
/// 1. **Deserialize** - Read the TOML into declaration types
/// 2. **Resolve** - Build layouts, checking every reference and include
/// 3. **Select root** - Pick the layout to compile
///
/// All resolution problems are collected before returning, so a single
/// [`ParseError`] may carry several diagnostics.
pub fn parse(source: &str) -> Result<Manifest, ParseError> {
    // Step 1: Deserialize
    let decl: ManifestDecl = toml::from_str(source).map_err(|err| {
        let span = err.span().unwrap_or(0..0);
        Diagnostic::error(err.message().trim().to_string())
            .with_code(ErrorCode::E100)
            .with_label(Span::new(span), "invalid manifest")
    })?;
    debug!(
        fields = decl.fields.len(),
        tables = decl.tables.len(),
        layouts = decl.layouts.len();
        "Manifest deserialized"
    );

    if decl.layouts.is_empty() {
        return Err(Diagnostic::error("manifest declares no layouts")
            .with_code(ErrorCode::E206)
            .with_label(Span::new(0..0), "expected at least one [[layouts]] entry")
            .into());
    }

    // Step 2: Resolve
    let (layouts, mut collector) = Resolver::new(&decl).resolve_all();

    // Step 3: Select root
    let root = match &decl.root {
        Some(name) => {
            let root = layouts.get(name.get_ref().as_str()).cloned();
            if root.is_none() {
                collector.emit(
                    Diagnostic::error(format!("unknown root layout `{}`", name.get_ref()))
                        .with_code(ErrorCode::E205)
                        .with_label(Span::from(name.span()), "named as root here")
                        .with_help("root must be the id of a [[layouts]] entry"),
                );
            }
            root
        }
        None => layouts.last().map(|(_, layout)| Rc::clone(layout)),
    };

    let warnings = collector.finish()?;
    let Some(root) = root else {
        return Err(Diagnostic::error("manifest has no root layout")
            .with_code(ErrorCode::E206)
            .into());
    };

    info!(
        root = root.id(),
        layouts = layouts.len(),
        warnings = warnings.len();
        "Manifest parsed"
    );
    Ok(Manifest {
        layouts,
        root,
        warnings,
    })
}
