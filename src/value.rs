use rust_decimal::Decimal;

use crate::ast::{Expression, FieldValue};
use crate::output::{format_float, format_range_values};

/// An input value accepted anywhere the query builder takes a field value.
///
/// This is a closed set of shapes: every variant has exactly one textual
/// rendering, produced by [`format_value`](crate::output::format_value).
///
/// # Rendering
///
/// - Text is quoted and escaped, unless it already looks like a range
///   literal or a parenthesized expression
/// - Numbers render without quotes
/// - Ranges render in bracket/brace notation
/// - Nested expressions and field tokens render verbatim
///
/// # Examples
///
/// ```
/// use csquery::Value;
/// use csquery::output::format_value;
///
/// assert_eq!(format_value(&Value::from("star")), "'star'");
/// assert_eq!(format_value(&Value::from(2000)), "2000");
/// assert_eq!(format_value(&Value::from((1900, 2000))), "[1900,2000]");
/// assert_eq!(format_value(&Value::from("{,2000]")), "{,2000]");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// UTF-8 text, quoted on output unless it is a pre-formatted range
    Text(String),

    /// Integer literal
    Integer(i64),

    /// Floating-point literal
    Float(f64),

    /// Exact decimal literal (scale is kept, `2.50` stays `2.50`)
    Decimal(Decimal),

    /// Byte-encoded text, decoded as UTF-8 when formatted
    Bytes(Vec<u8>),

    /// Interval with optional ends
    Range(Bound, Bound),

    /// Already-built field token, e.g. `field("star", "title")`
    Field(FieldValue),

    /// Nested operator expression
    Expression(Expression),
}

impl Value {
    /// Renders the value without quoting or escaping.
    ///
    /// Used for option values such as `boost=2` or `field=title`, which are
    /// raw modifiers rather than literals.
    pub fn to_raw_string(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) => format_float(*n),
            Value::Decimal(d) => d.to_string(),
            Value::Bytes(b) => String::from_utf8_lossy(b).into_owned(),
            Value::Range(start, end) => format_range_values(start, end),
            Value::Field(field) => field.to_value(),
            Value::Expression(expr) => expr.query(),
        }
    }
}

/// One end of a range.
///
/// `Absent` and the empty string both mean "open"; zero is a real bound.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Bound {
    #[default]
    Absent,
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
    Text(String),
}

impl Bound {
    /// Returns the bound's text, or `None` if the bound is open.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Bound::Absent => None,
            Bound::Text(s) if s.is_empty() => None,
            Bound::Text(s) => Some(s.clone()),
            Bound::Integer(n) => Some(n.to_string()),
            Bound::Float(n) => Some(format_float(*n)),
            Bound::Decimal(d) => Some(d.to_string()),
        }
    }

    pub fn is_absent(&self) -> bool {
        self.as_text().is_none()
    }
}

impl From<i32> for Bound {
    fn from(n: i32) -> Self {
        Bound::Integer(n.into())
    }
}

impl From<i64> for Bound {
    fn from(n: i64) -> Self {
        Bound::Integer(n)
    }
}

impl From<u32> for Bound {
    fn from(n: u32) -> Self {
        Bound::Integer(n.into())
    }
}

impl From<f64> for Bound {
    fn from(n: f64) -> Self {
        Bound::Float(n)
    }
}

impl From<Decimal> for Bound {
    fn from(d: Decimal) -> Self {
        Bound::Decimal(d)
    }
}

impl From<&str> for Bound {
    fn from(s: &str) -> Self {
        Bound::Text(s.to_string())
    }
}

impl From<String> for Bound {
    fn from(s: String) -> Self {
        Bound::Text(s)
    }
}

impl<T: Into<Bound>> From<Option<T>> for Bound {
    fn from(bound: Option<T>) -> Self {
        bound.map_or(Bound::Absent, Into::into)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Value::Decimal(d)
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Value::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Value::Bytes(bytes.to_vec())
    }
}

impl<S: Into<Bound>, E: Into<Bound>> From<(S, E)> for Value {
    fn from((start, end): (S, E)) -> Self {
        Value::Range(start.into(), end.into())
    }
}

impl<S: Into<Bound>> From<(S,)> for Value {
    fn from((start,): (S,)) -> Self {
        Value::Range(start.into(), Bound::Absent)
    }
}

impl From<FieldValue> for Value {
    fn from(field: FieldValue) -> Self {
        Value::Field(field)
    }
}

impl From<Expression> for Value {
    fn from(expr: Expression) -> Self {
        Value::Expression(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_bound_is_absent() {
        assert!(Bound::from("").is_absent());
        assert!(Bound::from(None::<i64>).is_absent());
        assert!(!Bound::from(0).is_absent());
    }

    #[test]
    fn raw_string_does_not_quote() {
        assert_eq!(Value::from("title").to_raw_string(), "title");
        assert_eq!(Value::from(2).to_raw_string(), "2");
        assert_eq!(Value::from(2.0).to_raw_string(), "2.0");
    }
}
