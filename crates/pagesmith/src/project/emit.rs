//! Component emission.

use std::{collections::HashSet, io};

use log::{debug, trace};

use pagesmith_core::{layout::LayoutPart, traverse};

use crate::{
    project::render::component_source,
    sink::{ArtifactDir, ArtifactSink},
    template::TemplateProvider,
};

/// Write one component per leaf id under `part` that is not yet in
/// `emitted`, descending through every container and every sub-layout whose
/// id is not in `visited`.
///
/// Returns how many files were written. Ids already in `emitted` are skipped
/// silently, wherever they occur.
///
/// # Errors
///
/// Returns the sink's [`io::Error`]; files written before the failure stay
/// written.
pub fn emit_components(
    part: &LayoutPart,
    provider: &dyn TemplateProvider,
    sink: &mut dyn ArtifactSink,
    target: &ArtifactDir,
    emitted: &mut HashSet<String>,
    visited: &HashSet<String>,
) -> io::Result<usize> {
    let mut written = 0;
    for entry in traverse::flatten_part_skipping(part, visited) {
        if emitted.contains(entry.id()) {
            trace!(id = entry.id(); "Component already emitted");
            continue;
        }
        let Some(source) = component_source(entry.part(), provider) else {
            continue;
        };
        let path = target.path_for(entry.id());
        sink.write(&path, &source)?;
        emitted.insert(entry.id().to_string());
        debug!(id = entry.id(), path:? = path; "Component emitted");
        written += 1;
    }
    Ok(written)
}
