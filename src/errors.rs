//! Error types with rich diagnostics using miette
//!
//! These errors carry source spans for beautiful error messages.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source (filename or "<attrs>")
    pub name: String,
    /// The full source text
    pub source: String,
}

impl SourceContext {
    /// Create a new source context
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }
}

/// Errors from strict style-attribute parsing.
///
/// The lenient layer ([`crate::style::CalloutStyle::from_attrs`]) never
/// produces these; it falls back to defaults instead.
#[derive(Error, Diagnostic, Debug)]
pub enum StyleError {
    #[error("invalid length: {message}")]
    #[diagnostic(
        code(callout::style::invalid_length),
        help("lengths are plain decimals in style units, e.g. `arrowSize = 16`")
    )]
    InvalidLength {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a valid length")]
        span: SourceSpan,
    },

    #[error("negative length")]
    #[diagnostic(
        code(callout::style::negative_length),
        help("sizes and radii must be zero or positive")
    )]
    NegativeLength {
        #[source_code]
        src: NamedSource<String>,
        #[label("negative value")]
        span: SourceSpan,
    },

    #[error("invalid color: {message}")]
    #[diagnostic(
        code(callout::style::invalid_color),
        help("use `#RRGGBB`, `#AARRGGBB` or a CSS color name")
    )]
    InvalidColor {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a valid color")]
        span: SourceSpan,
    },

    #[error("unknown attribute: {name}")]
    #[diagnostic(code(callout::style::unknown_attribute))]
    UnknownAttribute {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a callout attribute")]
        span: SourceSpan,
        #[help]
        suggestion: Option<String>,
    },

    #[error("malformed attribute entry")]
    #[diagnostic(
        code(callout::style::malformed_entry),
        help("expected `name = value`, one per line; `#` starts a comment")
    )]
    MalformedEntry {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `name = value`")]
        span: SourceSpan,
    },
}
