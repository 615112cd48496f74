//! CLI support for csquery
//!
//! Provides programmatic access to the csquery CLI functionality so other
//! tools can render JSON query documents without shelling out.

mod convert;
mod docs;
mod render;

pub use convert::{json_to_args, json_to_expression, json_to_value};
pub use docs::get_operators_overview;
pub use render::{RenderOptions, RenderResult, execute_render};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Query tree could not be built
    Build(crate::BuildError),
    /// JSON parsing error
    Json(serde_json::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// JSON is valid but does not describe a query
    InvalidDocument(String),
    /// `options` given for an operator that has its own whitelist
    UnexpectedOptions(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Build(e) => write!(f, "Build error: {}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(
                f,
                "No input provided. Pass a query document, use --input, or pipe JSON to stdin."
            ),
            CliError::InvalidDocument(msg) => write!(f, "Invalid query document: {}", msg),
            CliError::UnexpectedOptions(op) => write!(
                f,
                "Operator '{}' takes its options from kwargs; \
                 'options' is only for custom operators.\n\
                 Run 'csquery operators' to see the whitelists.",
                op
            ),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Build(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::BuildError> for CliError {
    fn from(e: crate::BuildError) -> Self {
        CliError::Build(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
