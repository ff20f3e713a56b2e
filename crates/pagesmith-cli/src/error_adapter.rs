//! Terminal reports for manifest diagnostics and run failures.
//!
//! Manifest problems carry byte spans into the manifest text, so they are
//! shown as annotated snippets. Configuration and I/O failures have no
//! location and are shown as a coded one-liner, with a hint where one helps.
//! A failed parse yields one report per diagnostic so every unknown
//! reference in a manifest is listed, not just the first.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use pagesmith::PagesmithError;
use pagesmith_parser::{
    Span,
    error::{Diagnostic, Severity},
};

/// One manifest diagnostic paired with the manifest text it points into.
pub struct ManifestReport<'a> {
    diagnostic: &'a Diagnostic,
    manifest: &'a str,
}

impl<'a> ManifestReport<'a> {
    pub fn new(diagnostic: &'a Diagnostic, manifest: &'a str) -> Self {
        Self {
            diagnostic,
            manifest,
        }
    }
}

impl fmt::Debug for ManifestReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.diagnostic, f)
    }
}

impl fmt::Display for ManifestReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.diagnostic.message())
    }
}

impl std::error::Error for ManifestReport<'_> {}

impl MietteDiagnostic for ManifestReport<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = self.diagnostic.code()?;
        Some(Box::new(format!("{code} ({})", code.description())))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.diagnostic.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = self.diagnostic.help()?;
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.manifest as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diagnostic.labels();
        if labels.is_empty() {
            return None;
        }
        Some(Box::new(labels.iter().map(|label| {
            let text = Some(label.message().to_string());
            let at = source_span(label.span());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(text, at)
            } else {
                LabeledSpan::new_with_span(text, at)
            }
        })))
    }
}

/// A failure that happened outside the manifest: configuration or I/O.
pub struct RunFailure<'a>(&'a PagesmithError);

impl fmt::Debug for RunFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.0, f)
    }
}

impl fmt::Display for RunFailure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.0, f)
    }
}

impl std::error::Error for RunFailure<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for RunFailure<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            PagesmithError::Io(_) => Some(Box::new("pagesmith::io")),
            PagesmithError::Config(_) => Some(Box::new("pagesmith::config")),
            PagesmithError::Parse { .. } => None,
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            PagesmithError::Config(_) => Some(Box::new(
                "check the file passed with --config, pagesmith/config.toml or the platform config directory",
            )),
            PagesmithError::Io(_) => Some(Box::new(
                "check that the manifest exists and the output directory is writable",
            )),
            PagesmithError::Parse { .. } => None,
        }
    }
}

/// Split `err` into the reports shown to the user, in manifest order for
/// parse failures.
pub fn reports(err: &PagesmithError) -> Vec<Box<dyn MietteDiagnostic + '_>> {
    match err {
        PagesmithError::Parse { err, src } => err
            .diagnostics()
            .iter()
            .map(|diagnostic| {
                Box::new(ManifestReport::new(diagnostic, src)) as Box<dyn MietteDiagnostic + '_>
            })
            .collect(),
        PagesmithError::Io(_) | PagesmithError::Config(_) => {
            vec![Box::new(RunFailure(err)) as Box<dyn MietteDiagnostic + '_>]
        }
    }
}

/// Render `report` with miette's graphical handler.
pub fn render(report: &dyn MietteDiagnostic) -> String {
    let mut out = String::new();
    if miette::GraphicalReportHandler::new()
        .render_report(&mut out, report)
        .is_err()
    {
        return report.to_string();
    }
    out
}

fn source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}
