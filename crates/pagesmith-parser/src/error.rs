//! Diagnostics reported while reading a page manifest.
//!
//! A [`Diagnostic`] carries a [`Severity`], an optional [`ErrorCode`], a
//! message, any number of labelled source spans and optional help text.
//! Errors abort parsing and are returned together in a [`ParseError`];
//! warnings are handed back alongside a successfully parsed manifest.
//!
//! # Example
//!
//! ```
//! # use pagesmith_parser::{Span, error::{Diagnostic, ErrorCode}};
//! let diag = Diagnostic::error("unknown field `OrderNo`")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(42..51), "not declared under [fields]")
//!     .with_help("declare it as [fields.OrderNo]");
//!
//! assert_eq!(diag.to_string(), "error[E200]: unknown field `OrderNo`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
