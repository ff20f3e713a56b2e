//! The error returned when a manifest cannot be parsed.

use std::fmt;

use crate::error::Diagnostic;

/// One or more diagnostics, at least one of which is an error.
///
/// Warnings found in the same pass are kept so they can be reported next to
/// the errors.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// All diagnostics in the order they were reported.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Only the error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity().is_error())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = self.errors();
        if let Some(first) = errors.next() {
            write!(f, "{first}")?;
            let rest = errors.count();
            if rest > 0 {
                write!(f, " (+{rest} more)")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_display_counts_only_errors() {
        let err = ParseError::new(vec![
            Diagnostic::warning("unused field"),
            Diagnostic::error("unknown table").with_code(ErrorCode::E201),
            Diagnostic::error("unknown layout").with_code(ErrorCode::E202),
        ]);

        assert_eq!(err.to_string(), "error[E201]: unknown table (+1 more)");
        assert_eq!(err.errors().count(), 2);
        assert_eq!(err.diagnostics().len(), 3);
    }

    #[test]
    fn test_from_single_diagnostic() {
        let err: ParseError = Diagnostic::error("bad").into();
        assert_eq!(err.to_string(), "error: bad");
    }
}
