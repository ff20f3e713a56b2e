//! Serde model of the TOML page manifest.
//!
//! ```toml
//! root = "OrderForm"
//!
//! [fields.OrderNo]
//! label = "受注No"
//! length = 5
//!
//! [fields.Search]
//! label = "検索"
//! events = [{ trigger = "click", handler = "onSearchClick" }]
//!
//! [tables.DetailTable]
//! label = "明細"
//! columns = [
//!   { kind = "text", id = "itemNo", label = "商品番号", editable = false, length = 12 },
//!   { kind = "number", id = "qty", label = "数量", length = 5 },
//! ]
//!
//! [[layouts]]
//! id = "OrderForm"
//! title = "受注画面"
//! parts = [
//!   { row = [{ span = 8, parts = [{ input = "OrderNo" }] },
//!            { span = 4, parts = [{ button = "Search" }] }] },
//!   { tab = [{ label = "明細", parts = [{ table = "DetailTable" }] }] },
//! ]
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use toml::Spanned;

use pagesmith_core::meta::{EventMeta, TableColumnMeta};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ManifestDecl {
    #[serde(default)]
    pub(crate) root: Option<Spanned<String>>,
    #[serde(default)]
    pub(crate) fields: IndexMap<String, Spanned<FieldDecl>>,
    #[serde(default)]
    pub(crate) tables: IndexMap<String, Spanned<TableDecl>>,
    #[serde(default)]
    pub(crate) layouts: Vec<LayoutDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FieldDecl {
    pub(crate) label: String,
    #[serde(default)]
    pub(crate) length: Option<i64>,
    #[serde(default)]
    pub(crate) events: Option<Vec<EventMeta>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TableDecl {
    pub(crate) label: String,
    #[serde(default)]
    pub(crate) columns: Vec<ColumnDecl>,
}

fn editable_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum ColumnDecl {
    Text {
        id: String,
        label: String,
        #[serde(default = "editable_default")]
        editable: bool,
        #[serde(default)]
        length: Option<i64>,
    },
    Number {
        id: String,
        label: String,
        #[serde(default = "editable_default")]
        editable: bool,
        #[serde(default)]
        length: Option<i64>,
    },
    Date {
        id: String,
        label: String,
        #[serde(default = "editable_default")]
        editable: bool,
        #[serde(default)]
        format: Option<String>,
    },
    Select {
        id: String,
        label: String,
        #[serde(default = "editable_default")]
        editable: bool,
        #[serde(default)]
        options: Vec<String>,
    },
}

impl From<&ColumnDecl> for TableColumnMeta {
    fn from(decl: &ColumnDecl) -> Self {
        match decl {
            ColumnDecl::Text {
                id,
                label,
                editable,
                length,
            } => TableColumnMeta::Text {
                id: id.clone(),
                label: label.clone(),
                editable: *editable,
                length: *length,
            },
            ColumnDecl::Number {
                id,
                label,
                editable,
                length,
            } => TableColumnMeta::Number {
                id: id.clone(),
                label: label.clone(),
                editable: *editable,
                length: *length,
            },
            ColumnDecl::Date {
                id,
                label,
                editable,
                format,
            } => TableColumnMeta::Date {
                id: id.clone(),
                label: label.clone(),
                editable: *editable,
                format: format.clone(),
            },
            ColumnDecl::Select {
                id,
                label,
                editable,
                options,
            } => TableColumnMeta::Select {
                id: id.clone(),
                label: label.clone(),
                editable: *editable,
                options: options.clone(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct LayoutDecl {
    pub(crate) id: Spanned<String>,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) parts: Vec<PartDecl>,
}

/// One entry of a `parts` list, written as a single-key inline table.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum PartDecl {
    Input(Spanned<String>),
    Button(Spanned<String>),
    Table(Spanned<String>),
    Include(Spanned<String>),
    Row(Vec<ColDecl>),
    Tab(Vec<PaneDecl>),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ColDecl {
    #[serde(default)]
    pub(crate) span: Option<Spanned<i64>>,
    #[serde(default)]
    pub(crate) parts: Vec<PartDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct PaneDecl {
    pub(crate) label: String,
    #[serde(default)]
    pub(crate) parts: Vec<PartDecl>,
}
