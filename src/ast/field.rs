use std::fmt;

use crate::error::BuildError;
use crate::output::format_value;
use crate::value::Value;

/// A single `name:value` or bare `value` token.
///
/// The value is formatted once, at construction, so a `FieldValue` always
/// holds a complete token (quoted literal, number, range or sub-expression).
///
/// # Example
/// ```text
/// title:'star'
/// year:{,2000]
/// 'teenage vampire'
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FieldValue {
    name: Option<String>,
    value: String,
}

impl FieldValue {
    /// Creates a field token from a value and an optional field name.
    pub fn new(value: impl Into<Value>, name: Option<&str>) -> Self {
        FieldValue {
            name: name.map(str::to_string),
            value: format_value(&value.into()),
        }
    }

    /// Creates a field token qualified by `name`.
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        FieldValue {
            name: Some(name.into()),
            value: format_value(&value.into()),
        }
    }

    /// Creates a field token from a single-entry `{name: value}` mapping.
    ///
    /// Any other number of entries is rejected, since there would be either
    /// no name to use or several to choose from.
    ///
    /// ```
    /// use csquery::{BuildError, FieldValue, Value};
    ///
    /// let field = FieldValue::from_mapping([("title", Value::from("star"))]).unwrap();
    /// assert_eq!(field.to_value(), "title:'star'");
    ///
    /// let err = FieldValue::from_mapping([("a", Value::from(1)), ("b", Value::from(2))]);
    /// assert!(matches!(err, Err(BuildError::AmbiguousFieldMapping(_))));
    /// ```
    pub fn from_mapping<K, V, I>(mapping: I) -> Result<Self, BuildError>
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut entries: Vec<(String, Value)> = mapping
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        match entries.len() {
            0 => Err(BuildError::EmptyFieldMapping),
            1 => {
                let (name, value) = entries.remove(0);
                Ok(Self::named(name, value))
            }
            _ => Err(BuildError::AmbiguousFieldMapping(
                entries.into_iter().map(|(name, _)| name).collect(),
            )),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The formatted value token, without the field name.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Renders the token: `name:value`, or the bare value when unnamed.
    /// An empty name counts as unnamed.
    pub fn to_value(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => format!("{}:{}", name, self.value),
            _ => self.value.clone(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<FieldValue: {}>", self.to_value())
    }
}

/// Builds one field token from a value and an optional name.
///
/// ```
/// use csquery::field;
///
/// assert_eq!(field("Alec Guinness", Some("actors")).to_value(), "actors:'Alec Guinness'");
/// assert_eq!(field("value", None).to_value(), "'value'");
/// ```
pub fn field(value: impl Into<Value>, name: Option<&str>) -> FieldValue {
    FieldValue::new(value, name)
}
