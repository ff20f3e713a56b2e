//! HTML documentation.
//!
//! Two styles are available:
//!
//! - [`catalog_html`] renders the [`DocLayout`] tree produced by a generation
//!   run: one card per layout with its field records, nested sub-layout
//!   cards inside.
//! - [`grouped_html`] renders layouts directly: one section per layout with
//!   its leaves bucketed by group path (tabs, panes, sub-layouts).
//!
//! Output contains no timestamps, so identical input gives identical bytes.

use std::rc::Rc;

use pagesmith_core::{
    layout::Layout,
    traverse::{self, LeafEntry},
};

use super::escape_html;
use crate::project::docs::{DocColumn, DocEvent, DocField, DocLayout};

const FOOTER: &str = "Generated by pagesmith";

fn page_head(out: &mut String, title: &str, heading: &str, heading_class: &str) {
    out.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8">
  <title>{title}</title>
  <meta name="viewport" content="width=device-width,initial-scale=1">
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-slate-50 text-slate-800">
  <div class="max-w-3xl mx-auto py-10 px-4">
    <h1 class="{heading_class}">{heading}</h1>
"#
    ));
}

fn page_tail(out: &mut String) {
    out.push_str(&format!(
        r#"    <footer class="mt-10 text-right text-xs text-gray-400">{FOOTER}</footer>
  </div>
</body>
</html>
"#
    ));
}

/// Catalog of a generated layout and its sub-layouts.
pub fn catalog_html(root: &DocLayout) -> String {
    let mut out = String::new();
    page_head(
        &mut out,
        "UI Component Documentation",
        "UI Page &amp; Component Catalog",
        "text-3xl font-bold mb-8 text-blue-700",
    );
    write_layout_card(&mut out, root, 0);
    page_tail(&mut out);
    out
}

fn write_layout_card(out: &mut String, layout: &DocLayout, level: usize) {
    let indent = if level == 0 { "" } else { " ml-10" };
    out.push_str(&format!(
        "<div class=\"bg-white rounded-xl shadow p-6 mb-8 border-l-8 border-blue-400{indent}\">\n"
    ));
    out.push_str(&format!(
        "  <div class=\"flex items-center mb-2\">\n    \
         <span class=\"text-xl font-semibold\">{}</span>\n    \
         <span class=\"ml-4 text-gray-500 text-base\">({})</span>\n    \
         <span class=\"ml-3 px-3 py-1 bg-blue-400 text-white rounded-full text-xs\">{}</span>\n  \
         </div>\n",
        escape_html(&layout.title),
        escape_html(&layout.id),
        escape_html(&layout.provider),
    ));

    if layout.fields.is_empty() {
        out.push_str("  <div class=\"text-gray-400 mb-2\">(No fields/components in this layout)</div>\n");
    } else {
        out.push_str(
            "  <table class=\"table-auto w-full bg-slate-50 rounded mb-4 text-sm\">\n    \
             <thead>\n      <tr>\n        \
             <th class=\"text-left py-2 px-3 bg-blue-50\">Type</th>\n        \
             <th class=\"text-left py-2 px-3 bg-blue-50\">ID</th>\n        \
             <th class=\"text-left py-2 px-3 bg-blue-50\">Label</th>\n        \
             <th class=\"text-left py-2 px-3 bg-blue-50\">Columns</th>\n        \
             <th class=\"text-left py-2 px-3 bg-blue-50\">Events</th>\n      \
             </tr>\n    </thead>\n    <tbody>\n",
        );
        for field in &layout.fields {
            write_field_row(out, field, 0);
        }
        out.push_str("    </tbody>\n  </table>\n");
    }

    for sub in &layout.sub_layouts {
        write_layout_card(out, sub, level + 1);
    }
    out.push_str("</div>\n");
}

fn write_field_row(out: &mut String, field: &DocField, depth: usize) {
    out.push_str("      <tr>\n");
    out.push_str(&format!(
        "        <td class='py-1 px-2'><span class='px-2 py-1 rounded bg-indigo-100 text-indigo-700 font-bold text-xs'>{}</span></td>\n",
        field.kind
    ));
    out.push_str(&format!(
        "        <td class='py-1 px-2'>{}</td>\n",
        escape_html(&field.id)
    ));
    out.push_str(&format!(
        "        <td class='py-1 px-2' style='padding-left: {}rem'>{}</td>\n",
        0.5 + depth as f32 * 1.5,
        escape_html(&field.label)
    ));

    if field.columns.is_empty() {
        out.push_str("        <td class='py-1 px-2'>-</td>\n");
    } else {
        write_columns(out, &field.columns);
    }

    if field.events.is_empty() {
        out.push_str("        <td class='py-1 px-2'>-</td>\n");
    } else {
        write_events(out, &field.events);
    }
    out.push_str("      </tr>\n");

    for child in &field.children {
        write_field_row(out, child, depth + 1);
    }
}

fn write_columns(out: &mut String, columns: &[DocColumn]) {
    out.push_str(
        "        <td class='py-1 px-2'>\n          \
         <table class='border border-blue-100 rounded w-full text-xs'>\n            \
         <thead><tr>\
         <th class=\"py-1 px-2 bg-blue-50\">ID</th>\
         <th class=\"py-1 px-2 bg-blue-50\">Label</th>\
         <th class=\"py-1 px-2 bg-blue-50\">Type</th>\
         <th class=\"py-1 px-2 bg-blue-50\">Editable</th>\
         </tr></thead>\n            <tbody>\n",
    );
    for column in columns {
        out.push_str(&format!(
            "              <tr><td class='py-1 px-2'>{}</td><td class='py-1 px-2'>{}</td>\
             <td class='py-1 px-2'>{}</td><td class='py-1 px-2'>{}</td></tr>\n",
            escape_html(&column.id),
            escape_html(&column.label),
            column.kind,
            if column.editable { "✔️" } else { "❌" },
        ));
    }
    out.push_str("            </tbody>\n          </table>\n        </td>\n");
}

fn write_events(out: &mut String, events: &[DocEvent]) {
    out.push_str("        <td class='py-1 px-2'>\n");
    for event in events {
        out.push_str(&format!(
            "          <div class='mb-1'><span class='inline-block bg-blue-100 text-blue-700 rounded px-2 py-0.5 text-xs font-mono' \
             title=\"{}\">@{}</span><span class='ml-1'>{}</span></div>\n",
            escape_html(event.description.as_deref().unwrap_or("")),
            escape_html(&event.trigger),
            escape_html(&event.handler),
        ));
    }
    out.push_str("        </td>\n");
}

/// Layouts with their leaves grouped by tab, pane and sub-layout.
pub fn grouped_html(layouts: &[Rc<Layout>]) -> String {
    let mut out = String::new();
    page_head(
        &mut out,
        "UI構成ドキュメント",
        "UIレイアウト構成ドキュメント",
        "text-2xl font-bold mb-8 text-blue-700",
    );

    for layout in layouts {
        out.push_str(&format!(
            "    <section class=\"mb-12\">\n      \
             <div class=\"mb-4 p-4 bg-blue-100 border-l-8 border-blue-400 shadow rounded-xl\">\n        \
             <h2 class=\"text-xl font-bold text-blue-700 mb-2\">{}</h2>\n        \
             <div class=\"text-gray-400 text-sm mb-2\">{}</div>\n      \
             </div>\n",
            escape_html(layout.title()),
            escape_html(layout.id()),
        ));
        let entries = traverse::flatten_leaves(layout);
        write_group(&mut out, &[], &entries, 0);
        out.push_str("    </section>\n");
    }

    page_tail(&mut out);
    out
}

fn write_group(out: &mut String, path: &[String], entries: &[LeafEntry<'_>], level: usize) {
    if let Some(last) = path.last() {
        let margin = if level <= 1 { "0" } else { "6" };
        out.push_str(&format!(
            "      <div class=\"mt-{margin} mb-2 text-lg font-bold text-blue-700\">{}{}</div>\n",
            "\u{3000}".repeat(level.saturating_sub(1)),
            escape_html(last),
        ));
    }

    let in_group: Vec<&LeafEntry<'_>> = traverse::entries_in(entries, path).collect();
    if !in_group.is_empty() {
        out.push_str(
            "      <table class=\"table-auto w-full mb-4 shadow bg-white rounded-xl\">\n        \
             <thead><tr>\
             <th class=\"bg-blue-50 text-left py-2 px-4 rounded-tl-xl\">構成</th>\
             <th class=\"bg-blue-50 text-left py-2 px-4\">タイプ</th>\
             </tr></thead>\n        <tbody>\n",
        );
        for entry in in_group {
            let kind = entry.part().kind();
            out.push_str(&format!(
                "          <tr><td class=\"py-2 px-4 font-mono text-blue-800\">{kind} \
                 <span class='text-xs text-gray-500'>({})</span></td>\
                 <td class=\"py-2 px-4\">{kind}</td></tr>\n",
                escape_html(entry.id()),
            ));
        }
        out.push_str("        </tbody>\n      </table>\n");
    }

    for label in traverse::subgroups(entries, path) {
        let mut next = path.to_vec();
        next.push(label.to_string());
        write_group(out, &next, entries, level + 1);
    }
}
