//! Error codes for manifest diagnostics.
//!
//! - `E1xx` - Manifest syntax and schema
//! - `E2xx` - Reference resolution
//! - `W3xx` - Warnings

use std::fmt;

/// Stable code identifying a class of diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax and schema (E1xx)
    // =========================================================================
    /// The source is not valid TOML or does not match the manifest schema.
    E100,

    // =========================================================================
    // Resolution (E2xx)
    // =========================================================================
    /// An `input` or `button` names an id missing from `[fields]`.
    E200,

    /// A `table` names an id missing from `[tables]`.
    E201,

    /// An `include` names a layout that is not declared.
    E202,

    /// Two `[[layouts]]` entries share an id.
    E204,

    /// The `root` key names a layout that is not declared.
    E205,

    /// The manifest declares no layouts.
    E206,

    // =========================================================================
    // Warnings (W3xx)
    // =========================================================================
    /// A catalog entry is never referenced by any layout.
    W300,

    /// A column span is zero or negative.
    W301,

    /// A layout includes itself, directly or through other layouts.
    W302,
}

impl ErrorCode {
    /// One-line description used in help output.
    pub fn description(&self) -> &'static str {
        match self {
            Self::E100 => "invalid manifest",
            Self::E200 => "unknown field",
            Self::E201 => "unknown table",
            Self::E202 => "unknown layout",
            Self::E204 => "duplicate layout id",
            Self::E205 => "unknown root layout",
            Self::E206 => "no layouts declared",
            Self::W300 => "unused catalog entry",
            Self::W301 => "non-positive column span",
            Self::W302 => "include cycle",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_variant_name() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::W301.to_string(), "W301");
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(ErrorCode::W302.description(), "include cycle");
        assert_eq!(ErrorCode::W300.description(), "unused catalog entry");
    }
}
