/// Errors raised while building a query tree.
///
/// Rendering itself never fails; only ambiguous input shapes are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A `{name: value}` field mapping had no entries
    EmptyFieldMapping,

    /// A `{name: value}` field mapping had more than one entry
    AmbiguousFieldMapping(Vec<String>),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::EmptyFieldMapping => {
                write!(f, "Empty field mapping: expected exactly one name/value entry")
            }
            BuildError::AmbiguousFieldMapping(names) => write!(
                f,
                "Ambiguous field mapping: expected exactly one entry, got {} ({})",
                names.len(),
                names.join(", ")
            ),
        }
    }
}

impl std::error::Error for BuildError {}
