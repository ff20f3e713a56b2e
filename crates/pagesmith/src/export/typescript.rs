//! TypeScript declarations.
//!
//! - [`interface`] renders an `export interface` from [`FieldShape`]s.
//! - [`derived_declarations`] derives a `{LayoutId}Form` interface from each
//!   layout's inputs and a `{TableId}Row` interface per table.
//! - [`event_stubs`] renders `eventHandlers.ts`, one exported stub per
//!   distinct handler name.
//! - [`metadata_module`] renders `MetaDataField.ts`, the metadata object
//!   generated components import.
//!
//! A layout's own leaves are the ones not reached through a sub-layout; each
//! distinct layout contributes its own leaves once.

use std::{collections::HashSet, fmt, rc::Rc};

use indexmap::IndexSet;

use pagesmith_core::{
    layout::{Layout, LayoutPart},
    meta::{FieldMeta, TableColumnMeta},
    traverse::{self, LeafEntry},
};

const GENERATED_HEADER: &str = "// This file is auto-generated. Do not edit directly.\n";

/// File name of the event stub module.
pub const EVENT_STUBS_FILE: &str = "eventHandlers";

/// File name of the metadata module.
pub const METADATA_FILE: &str = "MetaDataField";

/// TypeScript type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    String,
    Number,
    /// Union of string literals; an empty union is rendered as `string`.
    Union(Vec<String>),
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::String => f.write_str("string"),
            TsType::Number => f.write_str("number"),
            TsType::Union(options) if options.is_empty() => f.write_str("string"),
            TsType::Union(options) => {
                let literals: Vec<String> = options.iter().map(|o| quote(o)).collect();
                f.write_str(&literals.join(" | "))
            }
        }
    }
}

/// One property of a generated interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldShape {
    name: String,
    label: String,
    ty: TsType,
}

impl FieldShape {
    pub fn new(name: impl Into<String>, label: impl Into<String>, ty: TsType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            ty,
        }
    }

    /// Form fields are always strings.
    pub fn from_field(meta: &FieldMeta) -> Self {
        Self::new(meta.id(), meta.label(), TsType::String)
    }

    pub fn from_column(column: &TableColumnMeta) -> Self {
        let ty = match column {
            TableColumnMeta::Text { .. } | TableColumnMeta::Date { .. } => TsType::String,
            TableColumnMeta::Number { .. } => TsType::Number,
            TableColumnMeta::Select { options, .. } => TsType::Union(options.clone()),
        };
        Self::new(column.id(), column.label(), ty)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TsType {
        &self.ty
    }
}

/// A named TypeScript file body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub source: String,
}

/// Single-quoted TypeScript string literal.
fn quote(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n");
    format!("'{escaped}'")
}

/// `export interface {name} { ... }` with one property per shape.
pub fn interface(name: &str, fields: &[FieldShape]) -> String {
    let mut out = String::from(GENERATED_HEADER);
    out.push('\n');
    out.push_str(&format!("export interface {name} {{\n"));
    for field in fields {
        out.push_str(&format!("  /** {} */\n", field.label));
        out.push_str(&format!("  {}: {};\n", field.name, field.ty));
    }
    out.push_str("}\n");
    out
}

/// Distinct layouts reachable from `root`, root first.
fn distinct_layouts(root: &Layout) -> Vec<&Layout> {
    let mut layouts = Vec::new();
    traverse::walk_layouts(root, |layout| layouts.push(layout));
    layouts
}

/// Leaves of `layout` that are not inside one of its sub-layouts.
fn own_leaves(layout: &Layout) -> Vec<LeafEntry<'_>> {
    traverse::flatten_leaves(layout)
        .into_iter()
        .filter(|entry| {
            !entry
                .group()
                .iter()
                .any(|label| label.starts_with("SubLayout: "))
        })
        .collect()
}

/// Form and table-row interfaces for every distinct layout under `root`.
pub fn derived_declarations(root: &Layout) -> Vec<Declaration> {
    let mut out = Vec::new();
    let mut tables = IndexSet::new();

    for layout in distinct_layouts(root) {
        let leaves = own_leaves(layout);

        let inputs: Vec<FieldShape> = leaves
            .iter()
            .filter_map(|entry| match entry.part() {
                LayoutPart::InputText(meta) => Some(FieldShape::from_field(meta)),
                _ => None,
            })
            .collect();
        if !inputs.is_empty() {
            let name = format!("{}Form", layout.id());
            out.push(Declaration {
                source: interface(&name, &inputs),
                name,
            });
        }

        for entry in &leaves {
            let LayoutPart::Table(meta) = entry.part() else {
                continue;
            };
            if !tables.insert(meta.id()) {
                continue;
            }
            let shapes: Vec<FieldShape> =
                meta.columns().iter().map(FieldShape::from_column).collect();
            let name = format!("{}Row", meta.id());
            out.push(Declaration {
                source: interface(&name, &shapes),
                name,
            });
        }
    }
    out
}

/// `eventHandlers.ts`: handlers grouped under the layout that first binds
/// them, each handler exported once.
pub fn event_stubs(layouts: &[Rc<Layout>]) -> String {
    let mut out = String::from(GENERATED_HEADER);
    let mut seen_layouts = HashSet::new();
    let mut seen_handlers = HashSet::new();

    for root in layouts {
        for layout in distinct_layouts(root) {
            if !seen_layouts.insert(layout.id().to_string()) {
                continue;
            }

            let mut section = String::new();
            for entry in own_leaves(layout) {
                let meta = match entry.part() {
                    LayoutPart::InputText(meta) | LayoutPart::Button(meta) => meta,
                    _ => continue,
                };
                for event in meta.events() {
                    if !seen_handlers.insert(event.handler().to_string()) {
                        continue;
                    }
                    section.push('\n');
                    if let Some(description) = event.description() {
                        section.push_str(&format!("/** {description} */\n"));
                    }
                    section.push_str(&format!(
                        "export function {}(): void {{\n  // `{}` on {}\n}}\n",
                        event.handler(),
                        event.trigger(),
                        meta.id()
                    ));
                }
            }

            if !section.is_empty() {
                out.push_str(&format!(
                    "\n// ===== {} ({}) =====\n",
                    layout.title(),
                    layout.id()
                ));
                out.push_str(&section);
            }
        }
    }
    out
}

/// `MetaDataField.ts`: id, label and extras of every field and column under
/// `root`, grouped by layout.
pub fn metadata_module(root: &Layout) -> String {
    let mut entries: Vec<String> = Vec::new();
    let mut seen = HashSet::new();

    for layout in distinct_layouts(root) {
        let mut header = Some(format!("    // ===== {} =====\n", layout.id()));
        for entry in own_leaves(layout) {
            let mut push = |id: &str, props: Vec<String>| {
                if !seen.insert(id.to_string()) {
                    return;
                }
                let mut text = header.take().unwrap_or_default();
                text.push_str(&format!(
                    "    {id}: {{\n        {}\n    }}",
                    props.join(",\n        ")
                ));
                entries.push(text);
            };

            match entry.part() {
                LayoutPart::InputText(meta) | LayoutPart::Button(meta) => {
                    let mut props = vec![
                        format!("id: {}", quote(meta.id())),
                        format!("label: {}", quote(meta.label())),
                    ];
                    if let Some(length) = meta.length() {
                        props.push(format!("length: {length}"));
                    }
                    push(meta.id(), props);
                }
                LayoutPart::Table(meta) => {
                    for column in meta.columns() {
                        push(column.id(), column_props(column));
                    }
                }
                _ => {}
            }
        }
    }

    let mut out = String::from(GENERATED_HEADER);
    out.push_str("\nexport const MetaDataField = {\n");
    out.push_str(&entries.join(",\n"));
    if !entries.is_empty() {
        out.push('\n');
    }
    out.push_str("} as const;\n");
    out
}

fn column_props(column: &TableColumnMeta) -> Vec<String> {
    let mut props = vec![
        format!("id: {}", quote(column.id())),
        format!("label: {}", quote(column.label())),
    ];
    if !column.options().is_empty() {
        let options: Vec<String> = column.options().iter().map(|o| quote(o)).collect();
        props.push(format!("options: [{}]", options.join(", ")));
    }
    if let Some(length) = column.length() {
        props.push(format!("length: {length}"));
    }
    if let Some(format) = column.format() {
        props.push(format!("format: {}", quote(format)));
    }
    props
}
