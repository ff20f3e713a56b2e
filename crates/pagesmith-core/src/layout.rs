//! The layout tree.
//!
//! A page is a [`Layout`]: an id, a display title and an ordered list of
//! [`LayoutPart`]s. Parts form a closed set of eight kinds. Leaves carry
//! field or table metadata; containers carry their children in declaration
//! order. A [`LayoutPart::SubLayout`] shares ownership of another layout, so
//! the same layout value can be embedded from several parents.
//!
//! # Structure
//!
//! ```text
//! Layout (OrderForm)
//! └── SubLayout (TabArea)
//!     └── Tab
//!         ├── TabPane "検索"
//!         │   └── Row
//!         │       ├── Col span=8 ── InputText OrderNo
//!         │       └── Col span=4 ── Button Search
//!         └── TabPane "明細"
//!             └── Row
//!                 └── Col span=24 ── Table DetailTable
//! ```

use std::{fmt, rc::Rc};

use crate::meta::{FieldMeta, TableMeta};

/// Discriminant of a [`LayoutPart`], used for labels and documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    InputText,
    Button,
    Table,
    Row,
    Col,
    Tab,
    TabPane,
    SubLayout,
}

impl fmt::Display for PartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PartKind::InputText => "InputText",
            PartKind::Button => "Button",
            PartKind::Table => "Table",
            PartKind::Row => "Row",
            PartKind::Col => "Col",
            PartKind::Tab => "Tab",
            PartKind::TabPane => "TabPane",
            PartKind::SubLayout => "SubLayout",
        };
        f.write_str(name)
    }
}

/// A horizontal row of columns.
///
/// Children are always [`LayoutPart::Col`] values.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cols: Vec<LayoutPart>,
}

impl Row {
    pub fn new(cols: Vec<Col>) -> Self {
        Self {
            cols: cols.into_iter().map(LayoutPart::Col).collect(),
        }
    }

    /// Iterate over the row's columns in order.
    pub fn cols(&self) -> impl Iterator<Item = &Col> {
        self.cols.iter().filter_map(|part| match part {
            LayoutPart::Col(col) => Some(col),
            _ => None,
        })
    }
}

/// A column inside a [`Row`] with a grid span weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Col {
    span: i64,
    parts: Vec<LayoutPart>,
}

impl Col {
    /// The span is stored verbatim, without range checks.
    pub fn new(span: i64, parts: Vec<LayoutPart>) -> Self {
        Self { span, parts }
    }

    pub fn span(&self) -> i64 {
        self.span
    }

    pub fn parts(&self) -> &[LayoutPart] {
        &self.parts
    }
}

/// A tab strip. Children are always [`LayoutPart::TabPane`] values.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    panes: Vec<LayoutPart>,
}

impl Tab {
    pub fn new(panes: Vec<TabPane>) -> Self {
        Self {
            panes: panes.into_iter().map(LayoutPart::TabPane).collect(),
        }
    }

    /// Iterate over the tab's panes in order.
    pub fn panes(&self) -> impl Iterator<Item = &TabPane> {
        self.panes.iter().filter_map(|part| match part {
            LayoutPart::TabPane(pane) => Some(pane),
            _ => None,
        })
    }
}

/// A labelled pane of a [`Tab`].
#[derive(Debug, Clone, PartialEq)]
pub struct TabPane {
    label: String,
    parts: Vec<LayoutPart>,
}

impl TabPane {
    pub fn new(label: impl Into<String>, parts: Vec<LayoutPart>) -> Self {
        Self {
            label: label.into(),
            parts,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parts(&self) -> &[LayoutPart] {
        &self.parts
    }
}

/// A node of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutPart {
    InputText(FieldMeta),
    Button(FieldMeta),
    Table(TableMeta),
    Row(Row),
    Col(Col),
    Tab(Tab),
    TabPane(TabPane),
    /// An embedded layout, shared with any other parent that includes it.
    SubLayout(Rc<Layout>),
}

impl LayoutPart {
    pub fn kind(&self) -> PartKind {
        match self {
            LayoutPart::InputText(_) => PartKind::InputText,
            LayoutPart::Button(_) => PartKind::Button,
            LayoutPart::Table(_) => PartKind::Table,
            LayoutPart::Row(_) => PartKind::Row,
            LayoutPart::Col(_) => PartKind::Col,
            LayoutPart::Tab(_) => PartKind::Tab,
            LayoutPart::TabPane(_) => PartKind::TabPane,
            LayoutPart::SubLayout(_) => PartKind::SubLayout,
        }
    }

    /// Ordered children of this part.
    ///
    /// Leaves return an empty slice. A sub-layout returns the top-level parts
    /// of the layout it references.
    pub fn children(&self) -> &[LayoutPart] {
        match self {
            LayoutPart::InputText(_) | LayoutPart::Button(_) | LayoutPart::Table(_) => &[],
            LayoutPart::Row(row) => &row.cols,
            LayoutPart::Col(col) => &col.parts,
            LayoutPart::Tab(tab) => &tab.panes,
            LayoutPart::TabPane(pane) => &pane.parts,
            LayoutPart::SubLayout(layout) => layout.parts(),
        }
    }

    /// Identifier of a leaf part (field or table id), `None` for containers.
    pub fn leaf_id(&self) -> Option<&str> {
        match self {
            LayoutPart::InputText(meta) | LayoutPart::Button(meta) => Some(meta.id()),
            LayoutPart::Table(meta) => Some(meta.id()),
            LayoutPart::Row(_)
            | LayoutPart::Col(_)
            | LayoutPart::Tab(_)
            | LayoutPart::TabPane(_)
            | LayoutPart::SubLayout(_) => None,
        }
    }

    /// Short single-line label, e.g. `Col(span=8)` or `InputText(OrderNo)`.
    pub fn outline_label(&self) -> String {
        match self {
            LayoutPart::InputText(meta) => format!("InputText({})", meta.id()),
            LayoutPart::Button(meta) => format!("Button({})", meta.id()),
            LayoutPart::Table(meta) => format!("Table({})", meta.id()),
            LayoutPart::Row(_) => "Row".to_string(),
            LayoutPart::Col(col) => format!("Col(span={})", col.span()),
            LayoutPart::Tab(_) => "Tab".to_string(),
            LayoutPart::TabPane(pane) => format!("TabPane({})", pane.label()),
            LayoutPart::SubLayout(layout) => format!("SubLayout({})", layout.id()),
        }
    }
}

/// Root of a page description.
///
/// Two layouts with the same `id` denote the same logical page; generators
/// deduplicate sub-layouts by id, never by pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    id: String,
    title: String,
    parts: Vec<LayoutPart>,
}

impl Layout {
    pub fn new(id: impl Into<String>, title: impl Into<String>, parts: Vec<LayoutPart>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            parts,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Top-level parts in declaration order.
    pub fn parts(&self) -> &[LayoutPart] {
        &self.parts
    }
}

/// Indented outline of the whole tree, one part per line.
///
/// Sub-layouts are expanded unless their id is already being expanded on the
/// current path.
impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.title, self.id)?;
        let mut result = Ok(());
        crate::traverse::visit_layout(self, |part, depth| {
            if result.is_ok() {
                result = writeln!(f, "{}- {}", "  ".repeat(depth), part.outline_label());
            }
        });
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::TableColumnMeta;

    fn input(id: &str) -> LayoutPart {
        LayoutPart::InputText(FieldMeta::new(id, id))
    }

    #[test]
    fn test_leaves_have_no_children() {
        let table = LayoutPart::Table(TableMeta::new(
            "DetailTable",
            "明細",
            vec![TableColumnMeta::text("itemNo", "商品番号")],
        ));

        assert!(input("a").children().is_empty());
        assert!(LayoutPart::Button(FieldMeta::new("b", "b")).children().is_empty());
        assert!(table.children().is_empty());
    }

    #[test]
    fn test_row_children_are_cols() {
        let row = LayoutPart::Row(Row::new(vec![
            Col::new(8, vec![input("a")]),
            Col::new(4, vec![input("b")]),
        ]));

        let children = row.children();
        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| c.kind() == PartKind::Col));

        if let LayoutPart::Row(row) = &row {
            let spans: Vec<i64> = row.cols().map(Col::span).collect();
            assert_eq!(spans, vec![8, 4]);
        }
    }

    #[test]
    fn test_tab_children_are_panes() {
        let tab = LayoutPart::Tab(Tab::new(vec![
            TabPane::new("検索", vec![input("a")]),
            TabPane::new("明細", vec![]),
        ]));

        assert_eq!(tab.children().len(), 2);
        if let LayoutPart::Tab(tab) = &tab {
            let labels: Vec<&str> = tab.panes().map(TabPane::label).collect();
            assert_eq!(labels, vec!["検索", "明細"]);
        }
    }

    #[test]
    fn test_sub_layout_children_are_referenced_parts() {
        let inner = Rc::new(Layout::new("Inner", "inner", vec![input("a"), input("b")]));
        let part = LayoutPart::SubLayout(Rc::clone(&inner));

        assert_eq!(part.children().len(), 2);
        assert_eq!(part.children()[0].leaf_id(), Some("a"));
        assert_eq!(Rc::strong_count(&inner), 2);
    }

    #[test]
    fn test_leaf_id() {
        assert_eq!(input("OrderNo").leaf_id(), Some("OrderNo"));
        assert_eq!(LayoutPart::Row(Row::new(vec![])).leaf_id(), None);
    }

    #[test]
    fn test_display_outline() {
        let layout = Layout::new(
            "Page",
            "My page",
            vec![LayoutPart::Row(Row::new(vec![Col::new(
                12,
                vec![input("OrderNo")],
            )]))],
        );

        let outline = layout.to_string();
        assert_eq!(
            outline,
            "My page (Page)\n- Row\n  - Col(span=12)\n    - InputText(OrderNo)\n"
        );
    }
}
