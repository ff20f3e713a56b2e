//! Reference-set projection.

use indexmap::IndexSet;

use pagesmith_core::layout::{Layout, LayoutPart};

/// Identifiers a page must import to render `part`.
///
/// Leaf ids and sub-layout ids, each once, in first-seen order. A sub-layout
/// is a reference in its own right and is not expanded.
pub fn collect_references(part: &LayoutPart) -> IndexSet<String> {
    let mut out = IndexSet::new();
    collect_into(part, &mut out);
    out
}

/// References of all top-level parts of `layout`.
pub fn layout_references(layout: &Layout) -> IndexSet<String> {
    let mut out = IndexSet::new();
    for part in layout.parts() {
        collect_into(part, &mut out);
    }
    out
}

fn collect_into(part: &LayoutPart, out: &mut IndexSet<String>) {
    match part {
        LayoutPart::InputText(meta) | LayoutPart::Button(meta) => {
            out.insert(meta.id().to_string());
        }
        LayoutPart::Table(meta) => {
            out.insert(meta.id().to_string());
        }
        LayoutPart::SubLayout(layout) => {
            out.insert(layout.id().to_string());
        }
        LayoutPart::Row(_) | LayoutPart::Col(_) | LayoutPart::Tab(_) | LayoutPart::TabPane(_) => {
            for child in part.children() {
                collect_into(child, out);
            }
        }
    }
}
