// The #[error] attribute from thiserror uses struct fields via string interpolation,
// but Rust's unused_assignments lint doesn't recognize this.
#![allow(unused_assignments)]

//! Pathsort Error Types with Error Codes
//!
//! Error code ranges:
//! - PATH-001-009: Path structure errors (raised by `sort`)
//! - PATH-010-019: Edge document errors
//! - PATH-020-029: Config errors
//! - PATH-030-039: IO/output errors

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PathsortError>;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// All error variants are part of the public API.
///
/// Implements both `thiserror::Error` for std error compatibility
/// and `miette::Diagnostic` for fancy terminal error display.
#[derive(Error, Debug, Diagnostic)]
pub enum PathsortError {
    // ═══════════════════════════════════════════
    // PATH STRUCTURE ERRORS (001-009)
    // ═══════════════════════════════════════════
    /// Two edges share the same case-folded origin label
    #[error("[PATH-001] Found duplicated edge that starts from: {label}")]
    #[diagnostic(
        code(pathsort::duplicate_origin),
        help("Each node may start at most one edge; remove or merge the duplicate")
    )]
    DuplicateOrigin { label: String },

    #[error(
        "[PATH-002] The given edges form a cycle, no starting point can be automatically selected"
    )]
    #[diagnostic(
        code(pathsort::cycle),
        help("Break the cycle so exactly one edge has no incoming reference")
    )]
    Cycle,

    #[error("[PATH-003] There are more than one possible starting points")]
    #[diagnostic(
        code(pathsort::multiple_starts),
        help("Connect the disjoint chains so only one edge has no incoming reference")
    )]
    MultipleStarts,

    // ═══════════════════════════════════════════
    // EDGE DOCUMENT ERRORS (010-019)
    // ═══════════════════════════════════════════
    #[error("[PATH-010] Failed to parse edge document: {details}")]
    #[diagnostic(
        code(pathsort::parse_error),
        help("Check YAML syntax: indentation and quoting")
    )]
    ParseError { details: String },

    #[error("[PATH-011] Invalid schema version: expected '{expected}', got '{actual}'")]
    #[diagnostic(code(pathsort::invalid_schema))]
    InvalidSchema { expected: String, actual: String },

    #[error("[PATH-012] Edge #{index} has an empty '{field}' label")]
    #[diagnostic(code(pathsort::empty_label))]
    EmptyLabel { index: usize, field: &'static str },

    // ═══════════════════════════════════════════
    // CONFIG ERRORS (020-029)
    // ═══════════════════════════════════════════
    #[error("[PATH-020] Configuration error: {reason}")]
    #[diagnostic(code(pathsort::config_error))]
    ConfigError { reason: String },

    // ═══════════════════════════════════════════
    // IO/OUTPUT ERRORS (030-039)
    // ═══════════════════════════════════════════
    #[error("[PATH-030] IO error: {0}")]
    #[diagnostic(code(pathsort::io_error))]
    Io(#[from] std::io::Error),

    #[error("[PATH-031] Failed to render output: {details}")]
    #[diagnostic(code(pathsort::serialize_error))]
    Serialize { details: String },
}

impl PathsortError {
    /// Get the error code (e.g., "PATH-001")
    pub fn code(&self) -> &'static str {
        match self {
            // Path structure errors
            Self::DuplicateOrigin { .. } => "PATH-001",
            Self::Cycle => "PATH-002",
            Self::MultipleStarts => "PATH-003",
            // Document errors
            Self::ParseError { .. } => "PATH-010",
            Self::InvalidSchema { .. } => "PATH-011",
            Self::EmptyLabel { .. } => "PATH-012",
            // Config errors
            Self::ConfigError { .. } => "PATH-020",
            // IO/output errors
            Self::Io(_) => "PATH-030",
            Self::Serialize { .. } => "PATH-031",
        }
    }

    /// True for the three validation failures raised by `sort` itself.
    ///
    /// These describe bad input data, never a transient condition.
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateOrigin { .. } | Self::Cycle | Self::MultipleStarts
        )
    }
}

impl FixSuggestion for PathsortError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            PathsortError::DuplicateOrigin { .. } => {
                Some("Labels are compared case-insensitively: 'Rome' and 'rome' are the same node")
            }
            PathsortError::Cycle => Some("Remove the edge that leads back into the path"),
            PathsortError::MultipleStarts => {
                Some("Add the missing edge joining the chains, or sort each chain separately")
            }
            PathsortError::ParseError { .. } => Some("Check YAML syntax: indentation and quoting"),
            PathsortError::InvalidSchema { .. } => {
                Some("Use 'pathsort/edges@0.1' as the schema version, or omit the field")
            }
            PathsortError::EmptyLabel { .. } => Some("Give every edge a non-blank 'from' and 'to'"),
            PathsortError::ConfigError { .. } => {
                Some("Check ~/.config/pathsort/config.toml syntax")
            }
            PathsortError::Io(_) => Some("Check file path and permissions"),
            PathsortError::Serialize { .. } => None,
        }
    }
}

impl From<serde_yaml::Error> for PathsortError {
    fn from(err: serde_yaml::Error) -> Self {
        PathsortError::ParseError {
            details: err.to_string(),
        }
    }
}
