//! Error types with diagnostics using miette
//!
//! Every error here is fatal to a generation run: they describe a bad
//! configuration or a writer used out of order, never a transient condition.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Range Errors
// ============================================================================

/// Errors raised when a sampling interval cannot be used
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("invalid range for {field}: [{low}, {high}]")]
    #[diagnostic(
        code(artgen::range::invalid_range),
        help("both bounds must be finite, low must not exceed high, and a real range must be narrow enough to sample")
    )]
    InvalidRange {
        field: &'static str,
        low: String,
        high: String,
    },
}

// ============================================================================
// Shape Errors
// ============================================================================

/// Errors raised while turning a sampled configuration into a shape
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("unknown shape variant: discriminator {discriminator}")]
    #[diagnostic(
        code(artgen::shape::unknown_variant),
        help("only 0 (circle), 1 (rect) and 2 (ellipse) are dispatched; narrow the discriminator range")
    )]
    UnknownShapeVariant { discriminator: i32 },

    #[error("discriminator mismatch: {expected} shape built from a config with discriminator {found}")]
    #[diagnostic(code(artgen::shape::discriminator_mismatch))]
    DiscriminatorMismatch { expected: &'static str, found: i32 },
}

// ============================================================================
// Writer Errors
// ============================================================================

/// Errors raised by the document writers
#[derive(Error, Diagnostic, Debug)]
pub enum WriterError {
    #[error("indent underflow: outdent called at depth 0")]
    #[diagnostic(
        code(artgen::writer::indent_underflow),
        help("every outdent must be paired with an earlier indent")
    )]
    IndentUnderflow,

    #[error("writer is closed")]
    #[diagnostic(code(artgen::writer::closed))]
    WriterClosed,

    #[error("unbalanced indentation: expected depth {expected} when closing, found {found}")]
    #[diagnostic(code(artgen::writer::unbalanced_indent))]
    UnbalancedIndent { expected: usize, found: usize },

    #[error("no open element to close")]
    #[diagnostic(
        code(artgen::writer::no_open_element),
        help("every close_element must be paired with an earlier open_element")
    )]
    NoOpenElement,

    #[error("document output is not valid UTF-8")]
    #[diagnostic(code(artgen::writer::not_utf8))]
    NotUtf8(#[from] std::string::FromUtf8Error),

    #[error("failed to write document")]
    #[diagnostic(code(artgen::writer::io))]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Top-level Error
// ============================================================================

/// Any error a generation run can end with
#[derive(Error, Diagnostic, Debug)]
pub enum ArtError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Writer(#[from] WriterError),
}
