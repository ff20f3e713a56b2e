//! Depth-first traversals over a layout tree.
//!
//! All walks are pre-order and left-to-right, so their output depends only on
//! the tree's structure. Sub-layouts are expanded in place; a sub-layout whose
//! id is already being expanded higher up on the same path is reported but not
//! descended into, which keeps id-level inclusion cycles finite while still
//! expanding a layout that is legitimately included from two places.
//!
//! - [`visit_layout`] / [`visit_part`]: every part with its nesting depth.
//! - [`flatten_leaves`]: leaf parts with the group path accumulated through
//!   tabs, panes and sub-layouts.
//! - [`nested_layouts`] / [`walk_layouts`]: the distinct layouts reachable
//!   from a root.

use std::{collections::HashSet, rc::Rc};

use log::trace;

use crate::layout::{Layout, LayoutPart};

/// Group label pushed when descending into a tab strip.
pub const TAB_GROUP: &str = "Tab";

/// Visit every part of `layout`, top-level parts at depth 0.
pub fn visit_layout<'a>(layout: &'a Layout, mut visit: impl FnMut(&'a LayoutPart, usize)) {
    let mut path = vec![layout.id()];
    for part in layout.parts() {
        visit_guarded(part, 0, &mut path, &mut visit);
    }
}

/// Visit `part` and all of its descendants, starting at `depth`.
pub fn visit_part<'a>(part: &'a LayoutPart, depth: usize, mut visit: impl FnMut(&'a LayoutPart, usize)) {
    let mut path = Vec::new();
    visit_guarded(part, depth, &mut path, &mut visit);
}

fn visit_guarded<'a>(
    part: &'a LayoutPart,
    depth: usize,
    path: &mut Vec<&'a str>,
    visit: &mut impl FnMut(&'a LayoutPart, usize),
) {
    visit(part, depth);

    let entered = match part {
        LayoutPart::SubLayout(layout) => {
            if path.contains(&layout.id()) {
                trace!(layout_id = layout.id(); "Skipping cyclic sub-layout");
                return;
            }
            path.push(layout.id());
            true
        }
        _ => false,
    };

    for child in part.children() {
        visit_guarded(child, depth + 1, path, visit);
    }

    if entered {
        path.pop();
    }
}

/// A leaf part together with the group path leading to it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafEntry<'a> {
    group: Vec<String>,
    id: &'a str,
    part: &'a LayoutPart,
}

impl<'a> LeafEntry<'a> {
    /// Group labels from the outermost to the innermost.
    pub fn group(&self) -> &[String] {
        &self.group
    }

    /// The leaf's field or table id.
    pub fn id(&self) -> &'a str {
        self.id
    }

    pub fn part(&self) -> &'a LayoutPart {
        self.part
    }
}

/// Flatten `layout` into its leaves, in visit order.
///
/// Tabs push [`TAB_GROUP`], panes push `"Tab: {label}"` and sub-layouts push
/// `"SubLayout: {title}"`. Rows and columns push nothing.
pub fn flatten_leaves(layout: &Layout) -> Vec<LeafEntry<'_>> {
    let mut out = Vec::new();
    let mut path = vec![layout.id()];
    let mut group = Vec::new();
    for part in layout.parts() {
        flatten_into(part, &mut group, &mut path, &HashSet::new(), &mut out);
    }
    out
}

/// Flatten a single part, starting from an empty group path.
pub fn flatten_part(part: &LayoutPart) -> Vec<LeafEntry<'_>> {
    flatten_part_skipping(part, &HashSet::new())
}

/// Flatten a single part without entering any sub-layout whose id is in
/// `skip`.
pub fn flatten_part_skipping<'a>(part: &'a LayoutPart, skip: &HashSet<String>) -> Vec<LeafEntry<'a>> {
    let mut out = Vec::new();
    flatten_into(part, &mut Vec::new(), &mut Vec::new(), skip, &mut out);
    out
}

fn flatten_into<'a>(
    part: &'a LayoutPart,
    group: &mut Vec<String>,
    path: &mut Vec<&'a str>,
    skip: &HashSet<String>,
    out: &mut Vec<LeafEntry<'a>>,
) {
    if let Some(id) = part.leaf_id() {
        out.push(LeafEntry {
            group: group.clone(),
            id,
            part,
        });
        return;
    }

    let pushed = match part {
        LayoutPart::InputText(_)
        | LayoutPart::Button(_)
        | LayoutPart::Table(_)
        | LayoutPart::Row(_)
        | LayoutPart::Col(_) => None,
        LayoutPart::Tab(_) => Some(TAB_GROUP.to_string()),
        LayoutPart::TabPane(pane) => Some(format!("Tab: {}", pane.label())),
        LayoutPart::SubLayout(layout) => {
            if path.contains(&layout.id()) || skip.contains(layout.id()) {
                trace!(layout_id = layout.id(); "Skipping sub-layout");
                return;
            }
            path.push(layout.id());
            Some(format!("SubLayout: {}", layout.title()))
        }
    };

    let has_label = pushed.is_some();
    if let Some(label) = pushed {
        group.push(label);
    }

    for child in part.children() {
        flatten_into(child, group, path, skip, out);
    }

    if has_label {
        group.pop();
    }
    if matches!(part, LayoutPart::SubLayout(_)) {
        path.pop();
    }
}

/// Entries whose group path is exactly `group`.
pub fn entries_in<'e, 'a>(
    entries: &'e [LeafEntry<'a>],
    group: &'e [String],
) -> impl Iterator<Item = &'e LeafEntry<'a>> {
    entries.iter().filter(move |entry| entry.group == group)
}

/// Distinct labels one level below `prefix`, in first-seen order.
pub fn subgroups<'e>(entries: &'e [LeafEntry<'_>], prefix: &[String]) -> Vec<&'e str> {
    let mut seen = Vec::new();
    for entry in entries {
        if entry.group.len() > prefix.len() && entry.group.starts_with(prefix) {
            let label = entry.group[prefix.len()].as_str();
            if !seen.contains(&label) {
                seen.push(label);
            }
        }
    }
    seen
}

/// Sub-layouts referenced from `layout`'s own tree, in visit order.
///
/// Parts of the referenced layouts are not searched; each referenced layout
/// appears once per reference.
pub fn nested_layouts(layout: &Layout) -> Vec<&Rc<Layout>> {
    fn collect<'a>(part: &'a LayoutPart, out: &mut Vec<&'a Rc<Layout>>) {
        if let LayoutPart::SubLayout(layout) = part {
            out.push(layout);
            return;
        }
        for child in part.children() {
            collect(child, out);
        }
    }

    let mut out = Vec::new();
    for part in layout.parts() {
        collect(part, &mut out);
    }
    out
}

/// Call `visit` once for every distinct layout id reachable from `root`,
/// `root` first, then sub-layouts in pre-order.
pub fn walk_layouts<'a>(root: &'a Layout, mut visit: impl FnMut(&'a Layout)) {
    fn walk<'a>(
        layout: &'a Layout,
        seen: &mut HashSet<&'a str>,
        visit: &mut impl FnMut(&'a Layout),
    ) {
        if !seen.insert(layout.id()) {
            return;
        }
        visit(layout);
        for nested in nested_layouts(layout) {
            walk(nested, seen, visit);
        }
    }

    let mut seen = HashSet::new();
    walk(root, &mut seen, &mut visit);
}
