//! Unit tests for manifest parsing and reference resolution.

use std::rc::Rc;

use pagesmith_core::{
    layout::{Layout, LayoutPart, PartKind},
    meta::ColumnKind,
    traverse,
};

use crate::{
    error::{ErrorCode, ParseError, Severity},
    parse,
};

const ORDER_MANIFEST: &str = r#"
root = "OrderForm"

[fields.OrderNo]
label = "受注No"
length = 5

[fields.Search]
label = "検索"
events = [{ trigger = "click", handler = "onSearchClick", description = "検索ボタン押下" }]

[tables.DetailTable]
label = "明細"
columns = [
  { kind = "text", id = "itemNo", label = "商品番号", editable = false, length = 12 },
  { kind = "number", id = "qty", label = "数量", length = 5 },
  { kind = "date", id = "due", label = "納期", format = "yyyy/MM/dd" },
  { kind = "select", id = "unit", label = "単位", options = ["個", "箱"] },
]

[[layouts]]
id = "OrderForm"
title = "受注画面"
parts = [
  { row = [{ span = 8, parts = [{ input = "OrderNo" }] },
           { span = 4, parts = [{ button = "Search" }] }] },
  { tab = [{ label = "明細", parts = [{ table = "DetailTable" }] }] },
]
"#;

fn codes(err: &ParseError) -> Vec<ErrorCode> {
    err.diagnostics().iter().filter_map(|d| d.code()).collect()
}

fn assert_fails_with(source: &str, code: ErrorCode) -> ParseError {
    match parse(source) {
        Ok(manifest) => panic!(
            "expected {code} but parsed layout `{}`",
            manifest.root().id()
        ),
        Err(err) => {
            assert!(
                codes(&err).contains(&code),
                "expected {code}, got {:?}",
                codes(&err)
            );
            err
        }
    }
}

#[test]
fn test_parse_order_manifest() {
    let manifest = parse(ORDER_MANIFEST).unwrap();
    let root = manifest.root();

    assert_eq!(root.id(), "OrderForm");
    assert_eq!(root.title(), "受注画面");
    assert!(manifest.warnings().is_empty());

    let kinds: Vec<PartKind> = root.parts().iter().map(LayoutPart::kind).collect();
    assert_eq!(kinds, [PartKind::Row, PartKind::Tab]);

    let leaves = traverse::flatten_leaves(root);
    let ids: Vec<&str> = leaves.iter().map(|entry| entry.id()).collect();
    assert_eq!(ids, ["OrderNo", "Search", "DetailTable"]);
    assert_eq!(leaves[2].group(), ["Tab", "Tab: 明細"]);
}

#[test]
fn test_catalog_metadata_is_carried() {
    let manifest = parse(ORDER_MANIFEST).unwrap();
    let leaves = traverse::flatten_leaves(manifest.root());

    let LayoutPart::InputText(order_no) = leaves[0].part() else {
        panic!("expected an input");
    };
    assert_eq!(order_no.label(), "受注No");
    assert_eq!(order_no.length(), Some(5));
    assert!(order_no.events().is_empty());

    let LayoutPart::Button(search) = leaves[1].part() else {
        panic!("expected a button");
    };
    assert_eq!(search.events().len(), 1);
    assert_eq!(search.events()[0].handler(), "onSearchClick");
    assert_eq!(search.events()[0].description(), Some("検索ボタン押下"));

    let LayoutPart::Table(table) = leaves[2].part() else {
        panic!("expected a table");
    };
    let kinds: Vec<ColumnKind> = table.columns().iter().map(|c| c.kind()).collect();
    assert_eq!(
        kinds,
        [
            ColumnKind::Text,
            ColumnKind::Number,
            ColumnKind::Date,
            ColumnKind::Select
        ]
    );
    assert!(!table.columns()[0].editable());
    assert!(table.columns()[1].editable());
    assert_eq!(table.columns()[2].format(), Some("yyyy/MM/dd"));
    assert_eq!(table.columns()[3].options(), ["個", "箱"]);
}

#[test]
fn test_root_defaults_to_last_layout() {
    let source = r#"
        [fields.A]
        label = "a"

        [[layouts]]
        id = "Inner"
        title = "inner"
        parts = [{ input = "A" }]

        [[layouts]]
        id = "Outer"
        title = "outer"
        parts = [{ include = "Inner" }]
    "#;

    let manifest = parse(source).unwrap();
    assert_eq!(manifest.root().id(), "Outer");
    assert_eq!(
        manifest.layouts().keys().collect::<Vec<_>>(),
        ["Inner", "Outer"]
    );
}

#[test]
fn test_forward_include_shares_layout() {
    let source = r#"
        [fields.A]
        label = "a"

        [[layouts]]
        id = "Page"
        title = "page"
        parts = [{ include = "Shared" }, { tab = [{ label = "x", parts = [{ include = "Shared" }] }] }]

        [[layouts]]
        id = "Shared"
        title = "shared"
        parts = [{ input = "A" }]
    "#;

    let manifest = parse(source).unwrap();
    let page = manifest.layout("Page").unwrap();
    let shared = manifest.layout("Shared").unwrap();

    let LayoutPart::SubLayout(included) = &page.parts()[0] else {
        panic!("expected a sub layout");
    };
    assert!(std::rc::Rc::ptr_eq(included, shared));
    assert_eq!(traverse::nested_layouts(page).len(), 2);
}

#[test]
fn test_column_span_defaults_to_one() {
    let source = r#"
        [fields.A]
        label = "a"

        [[layouts]]
        id = "Page"
        title = "page"
        parts = [{ row = [{ parts = [{ input = "A" }] }] }]
    "#;

    let manifest = parse(source).unwrap();
    let LayoutPart::Row(row) = &manifest.root().parts()[0] else {
        panic!("expected a row");
    };
    assert_eq!(row.cols().next().unwrap().span(), 1);
}

#[test]
fn test_invalid_toml_is_e100() {
    let err = assert_fails_with("[[layouts]\nid = ", ErrorCode::E100);
    assert_eq!(err.diagnostics().len(), 1);
}

#[test]
fn test_unknown_key_is_e100() {
    let source = r#"
        [[layouts]]
        id = "Page"
        title = "page"
        colour = "red"
    "#;
    assert_fails_with(source, ErrorCode::E100);
}

#[test]
fn test_unknown_field_is_e200() {
    let source = r#"
        [[layouts]]
        id = "Page"
        title = "page"
        parts = [{ input = "Missing" }]
    "#;

    let err = assert_fails_with(source, ErrorCode::E200);
    let diag = &err.diagnostics()[0];
    assert_eq!(diag.message(), "unknown field `Missing`");

    let span = diag.labels()[0].span();
    assert!(source[span.start()..span.end()].contains("Missing"));
}

#[test]
fn test_table_used_as_field_gets_hint() {
    let source = r#"
        [tables.T]
        label = "t"

        [[layouts]]
        id = "Page"
        title = "page"
        parts = [{ input = "T" }]
    "#;

    let err = assert_fails_with(source, ErrorCode::E200);
    let help = err.diagnostics()[0].help().unwrap();
    assert!(help.contains("is a table"), "{help}");
}

#[test]
fn test_unknown_table_is_e201() {
    let source = r#"
        [[layouts]]
        id = "Page"
        title = "page"
        parts = [{ table = "Nope" }]
    "#;
    assert_fails_with(source, ErrorCode::E201);
}

#[test]
fn test_unknown_include_is_e202() {
    let source = r#"
        [[layouts]]
        id = "Page"
        title = "page"
        parts = [{ include = "Ghost" }]
    "#;
    assert_fails_with(source, ErrorCode::E202);
}

fn sub_layout(part: &LayoutPart) -> &Layout {
    match part {
        LayoutPart::SubLayout(layout) => layout,
        other => panic!("expected a sub-layout, got {:?}", other.kind()),
    }
}

#[test]
fn test_include_cycle_is_a_warning() {
    let source = r#"
        [[layouts]]
        id = "A"
        title = "a"
        parts = [{ include = "B" }]

        [[layouts]]
        id = "B"
        title = "b"
        parts = [{ row = [{ parts = [{ include = "A" }] }] }]
    "#;

    let manifest = parse(source).expect("a cycle should not be fatal");
    let warnings = manifest.warnings();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].code(), Some(ErrorCode::W302));
    assert_eq!(warnings[0].severity(), Severity::Warning);
    assert!(
        warnings[0]
            .help()
            .is_some_and(|help| help.starts_with("include chain: A -> B -> A"))
    );

    // A -> B -> (empty reference to A)
    let a = manifest.layout("A").unwrap();
    let b = sub_layout(&a.parts()[0]);
    assert_eq!(b.id(), "B");
    let cut = sub_layout(&b.parts()[0].children()[0].children()[0]);
    assert_eq!((cut.id(), cut.title()), ("A", "a"));
    assert!(cut.parts().is_empty());
}

#[test]
fn test_layout_in_cycle_is_rebuilt_from_its_own_root() {
    let source = r#"
        root = "B"

        [fields.Name]
        label = "名称"

        [[layouts]]
        id = "A"
        title = "a"
        parts = [{ input = "Name" }, { include = "B" }]

        [[layouts]]
        id = "B"
        title = "b"
        parts = [{ include = "A" }]
    "#;

    let manifest = parse(source).unwrap();
    let b = manifest.root();
    assert_eq!(b.id(), "B");

    // B seen from its own root includes the full A, not the cut one.
    let LayoutPart::SubLayout(a) = &b.parts()[0] else {
        panic!("expected B to include A");
    };
    assert_eq!(a.parts().len(), 2);
    assert!(Rc::ptr_eq(a, manifest.layout("A").unwrap()));
    assert_eq!(manifest.warnings().len(), 1);
}

#[test]
fn test_self_include_is_a_warning() {
    let source = r#"
        [[layouts]]
        id = "A"
        title = "a"
        parts = [{ include = "A" }]
    "#;

    let manifest = parse(source).unwrap();
    assert_eq!(manifest.warnings()[0].code(), Some(ErrorCode::W302));
    let cut = sub_layout(&manifest.root().parts()[0]);
    assert_eq!(cut.id(), "A");
    assert!(cut.parts().is_empty());
}

#[test]
fn test_duplicate_layout_is_e204() {
    let source = r#"
        [[layouts]]
        id = "A"
        title = "first"

        [[layouts]]
        id = "A"
        title = "second"
    "#;

    let err = assert_fails_with(source, ErrorCode::E204);
    assert_eq!(err.diagnostics()[0].labels().len(), 2);
}

#[test]
fn test_unknown_root_is_e205() {
    let source = r#"
        root = "Missing"

        [[layouts]]
        id = "A"
        title = "a"
    "#;
    assert_fails_with(source, ErrorCode::E205);
}

#[test]
fn test_no_layouts_is_e206() {
    assert_fails_with("[fields.A]\nlabel = \"a\"\n", ErrorCode::E206);
    assert_fails_with("", ErrorCode::E206);
}

#[test]
fn test_all_resolution_errors_are_collected() {
    let source = r#"
        [[layouts]]
        id = "Page"
        title = "page"
        parts = [{ input = "X" }, { table = "Y" }, { include = "Z" }]
    "#;

    let err = parse(source).unwrap_err();
    assert_eq!(
        codes(&err),
        [ErrorCode::E200, ErrorCode::E201, ErrorCode::E202]
    );
    assert_eq!(err.to_string(), "error[E200]: unknown field `X` (+2 more)");
}

#[test]
fn test_unused_catalog_entries_warn() {
    let source = r#"
        [fields.Used]
        label = "u"

        [fields.Spare]
        label = "s"

        [tables.Idle]
        label = "i"

        [[layouts]]
        id = "Page"
        title = "page"
        parts = [{ input = "Used" }]
    "#;

    let manifest = parse(source).unwrap();
    let warnings = manifest.warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w.severity() == Severity::Warning));
    assert!(warnings.iter().all(|w| w.code() == Some(ErrorCode::W300)));
    assert_eq!(warnings[0].message(), "field `Spare` is never used");
    assert_eq!(warnings[1].message(), "table `Idle` is never used");
}

#[test]
fn test_non_positive_span_warns() {
    let source = r#"
        [fields.A]
        label = "a"

        [[layouts]]
        id = "Page"
        title = "page"
        parts = [{ row = [{ span = 0, parts = [{ input = "A" }] }] }]
    "#;

    let manifest = parse(source).unwrap();
    assert_eq!(manifest.warnings().len(), 1);
    assert_eq!(manifest.warnings()[0].code(), Some(ErrorCode::W301));
}

mod proptest_tests {
    use proptest::prelude::*;

    use crate::parse;

    proptest! {
        #[test]
        fn parse_never_panics(source in "\\PC{0,200}") {
            let _ = parse(&source);
        }

        #[test]
        fn unknown_field_always_reported(name in "[A-Z][a-zA-Z0-9]{0,12}") {
            let source = format!(
                "[[layouts]]\nid = \"Page\"\ntitle = \"p\"\nparts = [{{ input = \"{name}\" }}]\n"
            );
            let err = parse(&source).unwrap_err();
            prop_assert_eq!(err.errors().count(), 1);
            let expected = format!("unknown field `{}`", name);
            prop_assert_eq!(err.diagnostics()[0].message(), expected.as_str());
        }
    }
}
