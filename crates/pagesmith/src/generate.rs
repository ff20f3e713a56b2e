//! Generation orchestrator.
//!
//! A [`Generator`] drives one run: it emits components, writes one aggregate
//! per distinct layout id and assembles the documentation tree. Visited
//! layout ids and emitted component ids are owned by the generator, so a
//! fresh generator always produces the same files for the same tree.

use std::collections::HashSet;

use log::{debug, info};

use pagesmith_core::{layout::Layout, traverse};

use crate::{
    PagesmithError,
    project::{
        docs::{self, DocLayout},
        emit, references, render,
    },
    sink::{ArtifactDir, ArtifactSink},
    template::TemplateProvider,
};

/// One generation run.
pub struct Generator<'a> {
    provider: &'a dyn TemplateProvider,
    sink: &'a mut dyn ArtifactSink,
    target: ArtifactDir,
    visited: HashSet<String>,
    emitted: HashSet<String>,
}

impl<'a> Generator<'a> {
    /// Create a generator writing components and aggregates into `target`.
    pub fn new(
        provider: &'a dyn TemplateProvider,
        sink: &'a mut dyn ArtifactSink,
        target: ArtifactDir,
    ) -> Self {
        Self {
            provider,
            sink,
            target,
            visited: HashSet::new(),
            emitted: HashSet::new(),
        }
    }

    /// Generate `layout` and every sub-layout it reaches.
    ///
    /// The first visit of a layout id writes its components and its
    /// `{id}.{ext}` aggregate and returns its full record. Any later visit
    /// in the same run returns [`DocLayout::placeholder`] without writing or
    /// descending, which also ends inclusion cycles.
    ///
    /// # Errors
    ///
    /// Returns [`PagesmithError::Io`] if the sink fails. The run stops there;
    /// files already written are kept.
    pub fn generate(&mut self, layout: &Layout) -> Result<DocLayout, PagesmithError> {
        if !self.visited.insert(layout.id().to_string()) {
            debug!(layout_id = layout.id(); "Layout already generated, skipping");
            return Ok(DocLayout::placeholder(layout, self.provider.name()));
        }

        let mut components = 0;
        for part in layout.parts() {
            components += emit::emit_components(
                part,
                self.provider,
                &mut *self.sink,
                &self.target,
                &mut self.emitted,
                &self.visited,
            )?;
        }

        let fields = docs::project_layout(layout);

        let mut sub_layouts = Vec::new();
        for nested in traverse::nested_layouts(layout) {
            sub_layouts.push(self.generate(nested)?);
        }

        let imports = references::layout_references(layout);
        let source = render::page_source(layout, self.provider, &imports, self.target.extension());
        let path = self.target.path_for(layout.id());
        self.sink.write(&path, &source)?;

        info!(
            layout_id = layout.id(),
            components = components,
            imports = imports.len(),
            path:? = path;
            "Layout generated"
        );

        Ok(DocLayout {
            id: layout.id().to_string(),
            title: layout.title().to_string(),
            provider: self.provider.name().to_string(),
            fields,
            sub_layouts,
            placeholder: false,
        })
    }

    /// Component ids written so far in this run.
    pub fn emitted(&self) -> &HashSet<String> {
        &self.emitted
    }

    /// Layout ids generated so far in this run.
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }
}
