//! Nested-closure builder for layouts.
//!
//! Each container call opens a fresh child scope, runs the supplied closure
//! against it and appends the finished container to the parent, so the
//! resulting order is exactly the call order. The builder never fails and
//! never merges or reorders parts.
//!
//! # Examples
//!
//! ```
//! use pagesmith_core::{
//!     builder::layout,
//!     meta::{FieldMeta, TableColumnMeta, TableMeta},
//! };
//!
//! let page = layout("TabArea", "タブ付き画面", |s| {
//!     s.tab(|t| {
//!         t.pane("検索", |p| {
//!             p.row(|r| {
//!                 r.col(8, |c| {
//!                     c.input(FieldMeta::new("OrderNo", "受注No"));
//!                 });
//!                 r.col(4, |c| {
//!                     c.button(FieldMeta::new("Search", "検索"));
//!                 });
//!             });
//!         });
//!         t.pane("明細", |p| {
//!             p.table(TableMeta::new(
//!                 "DetailTable",
//!                 "明細",
//!                 vec![TableColumnMeta::text("itemNo", "商品番号")],
//!             ));
//!         });
//!     });
//! });
//!
//! assert_eq!(page.parts().len(), 1);
//! ```

use std::rc::Rc;

use crate::{
    layout::{Col, Layout, LayoutPart, Row, Tab, TabPane},
    meta::{FieldMeta, TableMeta},
};

/// Build a [`Layout`] by running `block` against a fresh root scope.
pub fn layout(
    id: impl Into<String>,
    title: impl Into<String>,
    block: impl FnOnce(&mut ScopeBuilder),
) -> Layout {
    let mut scope = ScopeBuilder::default();
    block(&mut scope);
    Layout::new(id, title, scope.finish())
}

/// Part list of a root, column or tab-pane scope.
#[derive(Debug, Default)]
pub struct ScopeBuilder {
    parts: Vec<LayoutPart>,
}

impl ScopeBuilder {
    pub fn input(&mut self, meta: FieldMeta) -> &mut Self {
        self.parts.push(LayoutPart::InputText(meta));
        self
    }

    pub fn button(&mut self, meta: FieldMeta) -> &mut Self {
        self.parts.push(LayoutPart::Button(meta));
        self
    }

    pub fn table(&mut self, meta: TableMeta) -> &mut Self {
        self.parts.push(LayoutPart::Table(meta));
        self
    }

    /// Embed another layout by reference.
    pub fn include(&mut self, layout: Rc<Layout>) -> &mut Self {
        self.parts.push(LayoutPart::SubLayout(layout));
        self
    }

    pub fn row(&mut self, block: impl FnOnce(&mut RowBuilder)) -> &mut Self {
        let mut row = RowBuilder::default();
        block(&mut row);
        self.parts.push(LayoutPart::Row(Row::new(row.cols)));
        self
    }

    pub fn tab(&mut self, block: impl FnOnce(&mut TabBuilder)) -> &mut Self {
        let mut tab = TabBuilder::default();
        block(&mut tab);
        self.parts.push(LayoutPart::Tab(Tab::new(tab.panes)));
        self
    }

    /// Consume the scope, returning its parts in call order.
    pub fn finish(self) -> Vec<LayoutPart> {
        self.parts
    }
}

/// Column list of a row scope.
#[derive(Debug, Default)]
pub struct RowBuilder {
    cols: Vec<Col>,
}

impl RowBuilder {
    /// Add a column with the given span. The span is not range-checked.
    pub fn col(&mut self, span: i64, block: impl FnOnce(&mut ScopeBuilder)) -> &mut Self {
        let mut scope = ScopeBuilder::default();
        block(&mut scope);
        self.cols.push(Col::new(span, scope.finish()));
        self
    }

    /// Add a column with the default span of 1.
    pub fn col_default(&mut self, block: impl FnOnce(&mut ScopeBuilder)) -> &mut Self {
        self.col(1, block)
    }
}

/// Pane list of a tab scope.
#[derive(Debug, Default)]
pub struct TabBuilder {
    panes: Vec<TabPane>,
}

impl TabBuilder {
    pub fn pane(
        &mut self,
        label: impl Into<String>,
        block: impl FnOnce(&mut ScopeBuilder),
    ) -> &mut Self {
        let mut scope = ScopeBuilder::default();
        block(&mut scope);
        self.panes.push(TabPane::new(label, scope.finish()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::PartKind;

    fn field(id: &str) -> FieldMeta {
        FieldMeta::new(id, id)
    }

    #[test]
    fn test_call_order_is_preserved() {
        let page = layout("P", "page", |s| {
            s.button(field("b")).input(field("a")).input(field("c"));
        });

        let ids: Vec<_> = page.parts().iter().filter_map(LayoutPart::leaf_id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let page = layout("P", "page", |s| {
            s.input(field("a")).input(field("a"));
        });

        assert_eq!(page.parts().len(), 2);
    }

    #[test]
    fn test_col_default_span_is_one() {
        let page = layout("P", "page", |s| {
            s.row(|r| {
                r.col_default(|_| {});
                r.col(-5, |_| {});
            });
        });

        let LayoutPart::Row(row) = &page.parts()[0] else {
            panic!("Expected Row");
        };
        let spans: Vec<i64> = row.cols().map(Col::span).collect();
        assert_eq!(spans, vec![1, -5]);
    }

    #[test]
    fn test_nested_containers() {
        let page = layout("P", "page", |s| {
            s.tab(|t| {
                t.pane("one", |p| {
                    p.row(|r| {
                        r.col(6, |c| {
                            c.tab(|t| {
                                t.pane("inner", |p| {
                                    p.input(field("deep"));
                                });
                            });
                        });
                    });
                });
                t.pane("two", |_| {});
            });
        });

        let tab = &page.parts()[0];
        assert_eq!(tab.kind(), PartKind::Tab);
        assert_eq!(tab.children().len(), 2);

        let pane = &tab.children()[0];
        let row = &pane.children()[0];
        let col = &row.children()[0];
        let inner_tab = &col.children()[0];
        assert_eq!(inner_tab.kind(), PartKind::Tab);
        assert_eq!(
            inner_tab.children()[0].children()[0].leaf_id(),
            Some("deep")
        );
    }

    #[test]
    fn test_include_shares_layout() {
        let shared = Rc::new(layout("Shared", "shared", |s| {
            s.input(field("x"));
        }));

        let page = layout("P", "page", |s| {
            s.include(Rc::clone(&shared));
            s.row(|r| {
                r.col(12, |c| {
                    c.include(Rc::clone(&shared));
                });
            });
        });

        assert_eq!(Rc::strong_count(&shared), 3);
        assert_eq!(page.parts()[0].kind(), PartKind::SubLayout);
    }
}
