//! Turns manifest declarations into immutable layouts.
//!
//! Layouts are built on demand through the core builder, so an `include`
//! may name any layout in the manifest regardless of declaration order.
//!
//! A layout that is still being built when it is included again closes an
//! include cycle. The include is kept as an empty layout with the same id and
//! title, which the generator treats as a repeat visit, and a warning is
//! reported. Layouts built on the way to such a cut depend on where they were
//! entered from, so they are not memoized and get rebuilt when included from
//! elsewhere.

use std::{
    collections::{HashMap, HashSet},
    rc::Rc,
};

use indexmap::IndexMap;
use log::{debug, trace};

use pagesmith_core::{
    builder::{self, ScopeBuilder},
    layout::Layout,
    meta::{FieldMeta, TableMeta},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    manifest::{LayoutDecl, ManifestDecl, PartDecl},
    span::Span,
};

pub(crate) struct Resolver<'d> {
    decl: &'d ManifestDecl,
    index: HashMap<&'d str, &'d LayoutDecl>,
    built: HashMap<&'d str, Rc<Layout>>,
    in_progress: Vec<&'d str>,
    /// Ids of in-progress layouts that were cut off by a cyclic include.
    cuts: Vec<&'d str>,
    used_fields: HashSet<&'d str>,
    used_tables: HashSet<&'d str>,
    collector: DiagnosticCollector,
}

impl<'d> Resolver<'d> {
    pub(crate) fn new(decl: &'d ManifestDecl) -> Self {
        let mut collector = DiagnosticCollector::new();
        let mut index: HashMap<&str, &LayoutDecl> = HashMap::new();
        for layout in &decl.layouts {
            let id = layout.id.get_ref().as_str();
            if let Some(first) = index.get(id) {
                collector.emit(
                    Diagnostic::error(format!("layout `{id}` is declared more than once"))
                        .with_code(ErrorCode::E204)
                        .with_label(Span::from(layout.id.span()), "declared again here")
                        .with_secondary_label(Span::from(first.id.span()), "first declared here"),
                );
                continue;
            }
            index.insert(id, layout);
        }

        Self {
            decl,
            index,
            built: HashMap::new(),
            in_progress: Vec::new(),
            cuts: Vec::new(),
            used_fields: HashSet::new(),
            used_tables: HashSet::new(),
            collector,
        }
    }

    /// Build every declared layout, returning them keyed by id in
    /// declaration order together with the diagnostics found on the way.
    pub(crate) fn resolve_all(mut self) -> (IndexMap<String, Rc<Layout>>, DiagnosticCollector) {
        let manifest = self.decl;
        let mut layouts = IndexMap::new();
        for decl in &manifest.layouts {
            let id = decl.id.get_ref().as_str();
            if layouts.contains_key(id) {
                continue;
            }
            let layout = self.resolve(id);
            layouts.insert(id.to_string(), layout);
        }

        self.report_unused();
        (layouts, self.collector)
    }

    /// Build the layout `id`, or return the already built one.
    fn resolve(&mut self, id: &'d str) -> Rc<Layout> {
        if let Some(layout) = self.built.get(id) {
            return Rc::clone(layout);
        }

        let decl = self.index[id];
        let cuts_before = self.cuts.len();
        self.in_progress.push(id);
        trace!(layout_id = id; "Resolving layout");

        let layout = Rc::new(builder::layout(id, decl.title.as_str(), |scope| {
            self.fill_scope(scope, &decl.parts);
        }));

        self.in_progress.pop();
        let mut outer_cuts = self.cuts.split_off(cuts_before);
        outer_cuts.retain(|cut| *cut != id);
        let memoize = outer_cuts.is_empty();
        self.cuts.extend(outer_cuts);

        debug!(layout_id = id, parts = layout.parts().len(), memoized = memoize; "Layout resolved");
        if memoize {
            self.built.insert(id, Rc::clone(&layout));
        }
        layout
    }

    fn fill_scope(&mut self, scope: &mut ScopeBuilder, parts: &'d [PartDecl]) {
        for part in parts {
            match part {
                PartDecl::Input(id) => {
                    if let Some(meta) = self.field(id, "input") {
                        scope.input(meta);
                    }
                }
                PartDecl::Button(id) => {
                    if let Some(meta) = self.field(id, "button") {
                        scope.button(meta);
                    }
                }
                PartDecl::Table(id) => {
                    if let Some(meta) = self.table(id) {
                        scope.table(meta);
                    }
                }
                PartDecl::Include(id) => {
                    if let Some(layout) = self.include(id) {
                        scope.include(layout);
                    }
                }
                PartDecl::Row(cols) => {
                    scope.row(|row| {
                        for col in cols {
                            let span = match &col.span {
                                Some(span) => {
                                    let value = *span.get_ref();
                                    if value <= 0 {
                                        self.collector.emit(
                                            Diagnostic::warning(format!(
                                                "column span {value} is not positive"
                                            ))
                                            .with_code(ErrorCode::W301)
                                            .with_label(Span::from(span.span()), "span declared here")
                                            .with_help("spans are grid weights, usually 1 to 24"),
                                        );
                                    }
                                    value
                                }
                                None => 1,
                            };
                            row.col(span, |inner| self.fill_scope(inner, &col.parts));
                        }
                    });
                }
                PartDecl::Tab(panes) => {
                    scope.tab(|tab| {
                        for pane in panes {
                            tab.pane(pane.label.as_str(), |inner| {
                                self.fill_scope(inner, &pane.parts)
                            });
                        }
                    });
                }
            }
        }
    }

    fn field(&mut self, id: &'d toml::Spanned<String>, usage: &str) -> Option<FieldMeta> {
        let name = id.get_ref().as_str();
        let Some(decl) = self.decl.fields.get(name) else {
            let mut diag = Diagnostic::error(format!("unknown field `{name}`"))
                .with_code(ErrorCode::E200)
                .with_label(Span::from(id.span()), format!("{usage} refers to an undeclared field"));
            diag = if self.decl.tables.contains_key(name) {
                diag.with_help(format!("`{name}` is a table; use `{{ table = \"{name}\" }}`"))
            } else {
                diag.with_help(format!("declare it under [fields.{name}]"))
            };
            self.collector.emit(diag);
            return None;
        };

        self.used_fields.insert(name);
        let decl = decl.get_ref();
        let mut meta = FieldMeta::new(name, decl.label.as_str());
        if let Some(length) = decl.length {
            meta = meta.with_length(length);
        }
        if let Some(events) = &decl.events {
            meta = meta.with_events(events.clone());
        }
        Some(meta)
    }

    fn table(&mut self, id: &'d toml::Spanned<String>) -> Option<TableMeta> {
        let name = id.get_ref().as_str();
        let Some(decl) = self.decl.tables.get(name) else {
            let mut diag = Diagnostic::error(format!("unknown table `{name}`"))
                .with_code(ErrorCode::E201)
                .with_label(Span::from(id.span()), "table refers to an undeclared table");
            diag = if self.decl.fields.contains_key(name) {
                diag.with_help(format!(
                    "`{name}` is a field; use `{{ input = \"{name}\" }}` or `{{ button = \"{name}\" }}`"
                ))
            } else {
                diag.with_help(format!("declare it under [tables.{name}]"))
            };
            self.collector.emit(diag);
            return None;
        };

        self.used_tables.insert(name);
        let decl = decl.get_ref();
        let columns = decl.columns.iter().map(Into::into).collect();
        Some(TableMeta::new(name, decl.label.as_str(), columns))
    }

    fn include(&mut self, id: &'d toml::Spanned<String>) -> Option<Rc<Layout>> {
        let name = id.get_ref().as_str();
        let Some(&target) = self.index.get(name) else {
            self.collector.emit(
                Diagnostic::error(format!("unknown layout `{name}`"))
                    .with_code(ErrorCode::E202)
                    .with_label(Span::from(id.span()), "included here")
                    .with_help(format!("declare a [[layouts]] entry with id = \"{name}\"")),
            );
            return None;
        };

        if self.in_progress.contains(&name) {
            let chain = self
                .in_progress
                .iter()
                .skip_while(|entry| **entry != name)
                .copied()
                .chain(std::iter::once(name))
                .collect::<Vec<_>>()
                .join(" -> ");
            self.collector.emit(
                Diagnostic::warning(format!("layout `{name}` includes itself"))
                    .with_code(ErrorCode::W302)
                    .with_label(Span::from(id.span()), "cyclic include")
                    .with_secondary_label(Span::from(target.id.span()), "layout declared here")
                    .with_help(format!(
                        "include chain: {chain}; `{name}` is generated once and this include only references it"
                    )),
            );
            self.cuts.push(name);
            return Some(Rc::new(Layout::new(name, target.title.as_str(), Vec::new())));
        }

        Some(self.resolve(name))
    }

    fn report_unused(&mut self) {
        if self.collector.has_errors() {
            return;
        }
        for (name, decl) in &self.decl.fields {
            if !self.used_fields.contains(name.as_str()) {
                self.collector.emit(
                    Diagnostic::warning(format!("field `{name}` is never used"))
                        .with_code(ErrorCode::W300)
                        .with_label(Span::from(decl.span()), "declared here"),
                );
            }
        }
        for (name, decl) in &self.decl.tables {
            if !self.used_tables.contains(name.as_str()) {
                self.collector.emit(
                    Diagnostic::warning(format!("table `{name}` is never used"))
                        .with_code(ErrorCode::W300)
                        .with_label(Span::from(decl.span()), "declared here"),
                );
            }
        }
    }
}
