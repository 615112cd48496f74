//! Text serialization for structured query values.
//!
//! This module holds the leaf rules every rendered query is built from:
//!
//! - **Escaping** via [`escape()`] - backslashes and single quotes in literals
//! - **Values** via [`format_value()`] - quoting, numbers, ranges, nested expressions
//! - **Ranges** via [`format_range_values()`] - `[start,end]` with `{`/`}` for open ends
//! - **Options** via [`format_options()`] - ` key=value` modifier suffixes
//!
//! # Examples
//!
//! ```
//! use csquery::Value;
//! use csquery::output::{escape, format_value};
//!
//! assert_eq!(escape("st'ar"), r"st\'ar");
//! assert_eq!(format_value(&Value::from("st'ar")), r"'st\'ar'");
//! ```

use crate::ast::Options;
use crate::value::{Bound, Value};

/// Escapes a literal for use between single quotes.
///
/// Backslashes are doubled first, then single quotes are prefixed with a
/// backslash, so the backslash added for a quote is never doubled.
pub fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Converts a value into its query token.
///
/// Text that already looks like a range literal (see [`is_range_literal`])
/// is passed through untouched; any other text is escaped and quoted.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Range(start, end) => format_range_values(start, end),
        Value::Expression(expr) => expr.query(),
        Value::Field(field) => field.to_value(),
        Value::Integer(n) => n.to_string(),
        Value::Float(n) => format_float(*n),
        Value::Decimal(d) => d.to_string(),
        Value::Bytes(bytes) => format_text(&decode_utf8(bytes)),
        Value::Text(s) => format_text(s),
    }
}

fn format_text(text: &str) -> String {
    if is_range_literal(text) {
        text.to_string()
    } else {
        format!("'{}'", escape(text))
    }
}

fn decode_utf8(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(e) => {
            tracing::warn!(
                valid_up_to = e.valid_up_to(),
                "invalid UTF-8 in byte value, replacing malformed sequences"
            );
            String::from_utf8_lossy(bytes).into_owned()
        }
    }
}

/// Returns true if `text` is already a complete range or sub-expression token.
///
/// Exactly four shapes are recognized: `(...)`, `{...]`, `[...}` and `[...]`.
/// A `{...}` string is not one of them and gets quoted.
pub fn is_range_literal(text: &str) -> bool {
    let first = text.chars().next();
    let last = text.chars().last();
    matches!(
        (first, last),
        (Some('('), Some(')'))
            | (Some('{'), Some(']'))
            | (Some('['), Some('}'))
            | (Some('['), Some(']'))
    )
}

/// Formats a range in bracket notation.
///
/// An absent start opens with `{`, an absent end closes with `}`. Bounds are
/// written as-is, without escaping.
///
/// ```
/// use csquery::Bound;
/// use csquery::output::format_range_values;
///
/// assert_eq!(format_range_values(&1900.into(), &2000.into()), "[1900,2000]");
/// assert_eq!(format_range_values(&Bound::Absent, &2000.into()), "{,2000]");
/// assert_eq!(format_range_values(&1900.into(), &"".into()), "[1900,}");
/// ```
pub fn format_range_values(start: &Bound, end: &Bound) -> String {
    let start = start.as_text();
    let end = end.as_text();
    format!(
        "{}{},{}{}",
        if start.is_some() { '[' } else { '{' },
        start.as_deref().unwrap_or(""),
        end.as_deref().unwrap_or(""),
        if end.is_some() { ']' } else { '}' },
    )
}

/// Formats option modifiers as a ` key=value` suffix.
///
/// Empty options produce an empty string. Pairs keep insertion order and
/// their values are written raw.
pub fn format_options(options: &Options) -> String {
    if options.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = options
        .iter()
        .map(|(key, value)| format!("{}={}", key, value.to_raw_string()))
        .collect();
    format!(" {}", pairs.join(" "))
}

/// Writes a float in the shortest round-trip form the query syntax expects.
///
/// Decimal exponents in `-4..16` are written positionally, with a trailing
/// `.0` for whole numbers. Others use `1.5e+16` / `1e-05` notation, with a
/// signed exponent of at least two digits. Non-finite values are `nan`,
/// `inf` and `-inf`.
pub(crate) fn format_float(n: f64) -> String {
    if n.is_nan() {
        return "nan".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if n == 0.0 {
        return format!("{:.1}", n);
    }

    let sci = format!("{:e}", n);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        let s = n.to_string();
        if s.contains('.') {
            s
        } else {
            format!("{}.0", s)
        }
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exp.abs())
    }
}
