//! Documentation projection.
//!
//! Leaves become one [`DocField`] each. Rows, columns and sub-layouts are
//! transparent and contribute only their descendants' records. A tab becomes
//! a synthetic record whose children are its panes, and each pane a
//! synthetic `"Tab: {label}"` record holding its descendants.
//!
//! Synthetic records get ids numbered by tab position in visit order,
//! `tab1`, `tab1.1`, `tab1.2`, `tab2` and so on, so the same tree always
//! yields the same records.

use pagesmith_core::{
    layout::{Layout, LayoutPart, PartKind},
    meta::{ColumnKind, EventMeta, TableColumnMeta},
};

/// One event binding of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocEvent {
    pub trigger: String,
    pub handler: String,
    pub description: Option<String>,
}

impl From<&EventMeta> for DocEvent {
    fn from(event: &EventMeta) -> Self {
        Self {
            trigger: event.trigger().to_string(),
            handler: event.handler().to_string(),
            description: event.description().map(str::to_string),
        }
    }
}

/// One column of a documented table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocColumn {
    pub id: String,
    pub label: String,
    pub kind: ColumnKind,
    pub editable: bool,
    pub length: Option<i64>,
    pub format: Option<String>,
    pub options: Vec<String>,
}

impl From<&TableColumnMeta> for DocColumn {
    fn from(column: &TableColumnMeta) -> Self {
        Self {
            id: column.id().to_string(),
            label: column.label().to_string(),
            kind: column.kind(),
            editable: column.editable(),
            length: column.length(),
            format: column.format().map(str::to_string),
            options: column.options().to_vec(),
        }
    }
}

/// Documentation record of one leaf, tab or pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocField {
    pub id: String,
    pub label: String,
    pub kind: PartKind,
    pub columns: Vec<DocColumn>,
    pub events: Vec<DocEvent>,
    pub children: Vec<DocField>,
}

impl DocField {
    fn new(id: impl Into<String>, label: impl Into<String>, kind: PartKind) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            columns: Vec::new(),
            events: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Number of records in this subtree, this one included.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(DocField::count).sum::<usize>()
    }
}

/// Documentation of one generated layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLayout {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub fields: Vec<DocField>,
    pub sub_layouts: Vec<DocLayout>,
    /// Set on the record of a repeat visit, whose content lives elsewhere
    /// in the tree.
    pub placeholder: bool,
}

impl DocLayout {
    /// Record returned for a layout already generated earlier in the run.
    pub fn placeholder(layout: &Layout, provider: &str) -> Self {
        Self {
            id: layout.id().to_string(),
            title: layout.title().to_string(),
            provider: provider.to_string(),
            fields: Vec::new(),
            sub_layouts: Vec::new(),
            placeholder: true,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

/// Records for the top-level parts of `layout`.
pub fn project_layout(layout: &Layout) -> Vec<DocField> {
    let mut projector = Projector {
        tabs: 0,
        path: vec![layout.id().to_string()],
    };
    projector.parts(layout.parts())
}

/// Records for a single part.
pub fn project_part(part: &LayoutPart) -> Vec<DocField> {
    let mut projector = Projector {
        tabs: 0,
        path: Vec::new(),
    };
    projector.part(part)
}

struct Projector {
    tabs: usize,
    /// Ids of the sub-layouts being expanded, outermost first.
    path: Vec<String>,
}

impl Projector {
    fn parts(&mut self, parts: &[LayoutPart]) -> Vec<DocField> {
        parts.iter().flat_map(|part| self.part(part)).collect()
    }

    fn part(&mut self, part: &LayoutPart) -> Vec<DocField> {
        match part {
            LayoutPart::InputText(meta) | LayoutPart::Button(meta) => {
                let mut record = DocField::new(meta.id(), meta.label(), part.kind());
                record.events = meta.events().iter().map(DocEvent::from).collect();
                vec![record]
            }
            LayoutPart::Table(meta) => {
                let mut record = DocField::new(meta.id(), meta.label(), PartKind::Table);
                record.columns = meta.columns().iter().map(DocColumn::from).collect();
                vec![record]
            }
            LayoutPart::Row(_) | LayoutPart::Col(_) => self.parts(part.children()),
            LayoutPart::SubLayout(layout) => {
                if self.path.iter().any(|id| id == layout.id()) {
                    return Vec::new();
                }
                self.path.push(layout.id().to_string());
                let records = self.parts(layout.parts());
                self.path.pop();
                records
            }
            LayoutPart::Tab(tab) => {
                self.tabs += 1;
                let id = format!("tab{}", self.tabs);
                let mut record = DocField::new(&id, "Tab", PartKind::Tab);
                for (index, pane) in tab.panes().enumerate() {
                    let mut pane_record = DocField::new(
                        format!("{id}.{}", index + 1),
                        format!("Tab: {}", pane.label()),
                        PartKind::TabPane,
                    );
                    pane_record.children = self.parts(pane.parts());
                    record.children.push(pane_record);
                }
                vec![record]
            }
            LayoutPart::TabPane(pane) => {
                let mut record = DocField::new(
                    format!("pane:{}", pane.label()),
                    format!("Tab: {}", pane.label()),
                    PartKind::TabPane,
                );
                record.children = self.parts(pane.parts());
                vec![record]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use pagesmith_core::{
        builder::layout,
        layout::{Tab, TabPane},
        meta::{FieldMeta, TableMeta},
    };

    fn field(id: &str) -> FieldMeta {
        FieldMeta::new(id, id)
    }

    #[test]
    fn test_rows_and_cols_are_transparent() {
        let page = layout("P", "p", |s| {
            s.row(|r| {
                r.col(6, |c| {
                    c.input(field("A"));
                    c.row(|r| {
                        r.col_default(|c| {
                            c.button(field("B"));
                        });
                    });
                });
            });
        });

        let records = project_layout(&page);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["A", "B"]);
        assert!(records.iter().all(|r| r.children.is_empty()));
    }

    #[test]
    fn test_tab_record_nests_panes() {
        let page = layout("P", "p", |s| {
            s.tab(|t| {
                t.pane("検索", |p| {
                    p.input(field("OrderNo"));
                });
                t.pane("明細", |p| {
                    p.table(TableMeta::new("DetailTable", "明細", Vec::new()));
                });
            });
            s.tab(|t| {
                t.pane("other", |_| {});
            });
        });

        let records = project_layout(&page);
        assert_eq!(records.len(), 2);

        let tab = &records[0];
        assert_eq!((tab.id.as_str(), tab.label.as_str()), ("tab1", "Tab"));
        assert_eq!(tab.kind, PartKind::Tab);
        let panes: Vec<(&str, &str)> = tab
            .children
            .iter()
            .map(|p| (p.id.as_str(), p.label.as_str()))
            .collect();
        assert_eq!(panes, [("tab1.1", "Tab: 検索"), ("tab1.2", "Tab: 明細")]);
        assert_eq!(tab.children[0].children[0].id, "OrderNo");
        assert_eq!(tab.children[1].children[0].kind, PartKind::Table);

        assert_eq!(records[1].id, "tab2");
        assert_eq!(records[1].children[0].id, "tab2.1");
        assert_eq!(tab.count(), 5);
    }

    #[test]
    fn test_sub_layout_is_transparent() {
        let inner = Rc::new(layout("Inner", "inner", |s| {
            s.input(field("X"));
        }));
        let page = layout("P", "p", |s| {
            s.include(Rc::clone(&inner));
            s.include(inner);
        });

        let ids: Vec<String> = project_layout(&page).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["X", "X"]);
    }

    #[test]
    fn test_id_cycle_terminates() {
        let leaf = Rc::new(layout("A", "a-inner", |s| {
            s.input(field("deep"));
        }));
        let b = Rc::new(layout("B", "b", |s| {
            s.include(leaf);
        }));
        let a = layout("A", "a", |s| {
            s.input(field("top"));
            s.include(b);
        });

        let ids: Vec<String> = project_layout(&a).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["top"]);
    }

    #[test]
    fn test_events_and_columns_are_carried() {
        let search = FieldMeta::new("Search", "検索").with_events(vec![
            EventMeta::new("click", "onSearchClick").with_description("検索"),
        ]);
        let table = TableMeta::new(
            "T",
            "t",
            vec![TableColumnMeta::select("gender", "性別", vec!["男".into(), "女".into()])],
        );

        let button = &project_part(&LayoutPart::Button(search))[0];
        assert_eq!(
            button.events,
            [DocEvent {
                trigger: "click".into(),
                handler: "onSearchClick".into(),
                description: Some("検索".into()),
            }]
        );

        let table = &project_part(&LayoutPart::Table(table))[0];
        assert_eq!(table.columns[0].kind, ColumnKind::Select);
        assert_eq!(table.columns[0].options, ["男", "女"]);
        assert!(table.columns[0].editable);
    }

    #[test]
    fn test_bare_pane_gets_its_own_record() {
        let pane = LayoutPart::TabPane(TabPane::new("solo", vec![LayoutPart::InputText(field("A"))]));
        let records = project_part(&pane);
        assert_eq!(records[0].label, "Tab: solo");
        assert_eq!(records[0].children[0].id, "A");

        let tab = LayoutPart::Tab(Tab::new(Vec::new()));
        assert_eq!(project_part(&tab)[0].children.len(), 0);
    }

    #[test]
    fn test_placeholder_is_empty() {
        let page = layout("P", "p", |s| {
            s.input(field("A"));
        });
        let placeholder = DocLayout::placeholder(&page, "Element Plus");
        assert!(placeholder.is_placeholder());
        assert!(placeholder.fields.is_empty());
        assert_eq!(placeholder.id, "P");
    }
}
