use std::collections::BTreeMap;

use crate::ast::{FieldValue, Options};
use crate::error::BuildError;
use crate::value::Value;

/// Arguments collected for an operator constructor.
///
/// Positional arguments keep call order. Named arguments are keyed by name;
/// setting the same name twice keeps the last value. When the expression is
/// built, named arguments on the operator's option whitelist become options
/// and the rest become `name:value` fields in sorted-name order.
///
/// # Example
///
/// ```
/// use csquery::{near, Args};
///
/// let args = Args::with("teenage vampire")
///     .kw("boost", 2)
///     .kw("field", "plot")
///     .kw("distance", 2);
/// assert_eq!(
///     near(args).query(),
///     "(near field=plot distance=2 boost=2 'teenage vampire')"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Args {
    positional: Vec<FieldValue>,
    named: BTreeMap<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts an argument list with one positional value.
    pub fn with(value: impl Into<Value>) -> Self {
        Self::new().arg(value)
    }

    /// Appends a bare positional value.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(FieldValue::new(value, None));
        self
    }

    /// Appends a positional `name:value` field.
    ///
    /// Unlike [`kw`](Self::kw), the field stays in call order and a name may
    /// repeat: `(and title:'star' title:'star2')`.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.positional.push(FieldValue::named(name, value));
        self
    }

    /// Appends a positional field from a single-entry `{name: value}` mapping.
    pub fn mapping<K, V, I>(mut self, mapping: I) -> Result<Self, BuildError>
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.positional.push(FieldValue::from_mapping(mapping)?);
        Ok(self)
    }

    /// Sets a named argument (an option if whitelisted, otherwise a field).
    pub fn kw(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Moves the whitelisted named arguments into options, in `keys` order.
    pub(crate) fn take_options(&mut self, keys: &[&str]) -> Options {
        keys.iter()
            .filter_map(|key| self.named.remove(*key).map(|value| (*key, value)))
            .collect()
    }

    /// Positional fields followed by named fields, sorted by name.
    pub(crate) fn into_fields(self) -> Vec<FieldValue> {
        let mut fields = self.positional;
        fields.extend(
            self.named
                .into_iter()
                .map(|(name, value)| FieldValue::named(name, value)),
        );
        fields
    }
}
