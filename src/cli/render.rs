//! Render JSON query documents to query strings

use super::{CliError, json_to_expression};

/// Options for the render command
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// JSON query document
    pub input: Option<String>,
    /// Only validate the document, don't print the query
    pub check_only: bool,
}

/// Result of a render operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult {
    /// Document describes a valid query tree
    Valid,
    /// Rendered query string
    Query(String),
}

/// Execute a csquery render operation
pub fn execute_render(options: &RenderOptions) -> Result<RenderResult, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;

    let doc: serde_json::Value = serde_json::from_str(json_str).map_err(CliError::Json)?;
    let expr = json_to_expression(&doc)?;

    if options.check_only {
        return Ok(RenderResult::Valid);
    }

    let query = expr.query();
    tracing::debug!(operator = expr.operator(), len = query.len(), "rendered query");
    Ok(RenderResult::Query(query))
}
