//! JSON query document -> query tree conversion
//!
//! A document is an expression object:
//!
//! ```text
//! {"op": "and",
//!  "args": [{"op": "not", "args": ["drama"], "kwargs": {"field": "genres"}},
//!           {"title": "star"}],
//!  "kwargs": {"year": [null, 2000], "boost": 2}}
//! ```

use rust_decimal::Decimal;
use serde_json::{Map, Value as Json};

use super::CliError;
use crate::{Args, Bound, Expression, Operator, Options, Value};

/// Convert an expression document (`{"op": ..., "args": [...], "kwargs": {...}}`)
pub fn json_to_expression(doc: &Json) -> Result<Expression, CliError> {
    let obj = doc.as_object().ok_or_else(|| {
        invalid(format!("expected an expression object, got {}", kind(doc)))
    })?;
    let op = match obj.get("op") {
        Some(Json::String(op)) => op.as_str(),
        Some(other) => {
            return Err(invalid(format!("'op' must be a string, got {}", kind(other))));
        }
        None => return Err(invalid("expression object is missing 'op'")),
    };

    let args = json_to_args(obj.get("args"), obj.get("kwargs"))?;

    match Operator::from_name(op) {
        Some(operator) => {
            if obj.contains_key("options") {
                return Err(CliError::UnexpectedOptions(op.to_string()));
            }
            Ok(operator.build(args))
        }
        None => {
            let options = match obj.get("options") {
                Some(Json::Object(map)) => map
                    .iter()
                    .map(|(k, v)| Ok((k.as_str(), json_to_value(v)?)))
                    .collect::<Result<Options, CliError>>()?,
                Some(other) => {
                    return Err(invalid(format!(
                        "'options' must be an object, got {}",
                        kind(other)
                    )));
                }
                None => Options::new(),
            };
            tracing::debug!(operator = op, "custom operator");
            Ok(Expression::new(op, options, args))
        }
    }
}

/// Convert the `args` array and `kwargs` object of an expression document
pub fn json_to_args(args: Option<&Json>, kwargs: Option<&Json>) -> Result<Args, CliError> {
    let mut out = Args::new();

    match args {
        Some(Json::Array(items)) => {
            for item in items {
                out = match item {
                    Json::Object(map) if !is_expression(map) => out.mapping(
                        map.iter()
                            .map(|(k, v)| Ok((k.clone(), json_to_value(v)?)))
                            .collect::<Result<Vec<(String, Value)>, CliError>>()?,
                    )?,
                    other => out.arg(json_to_value(other)?),
                };
            }
        }
        Some(other) => {
            return Err(invalid(format!("'args' must be an array, got {}", kind(other))));
        }
        None => {}
    }

    match kwargs {
        Some(Json::Object(map)) => {
            for (name, value) in map {
                if is_mapping(value) {
                    return Err(invalid(format!(
                        "kwarg '{}': field mappings are only allowed in 'args'",
                        name
                    )));
                }
                out = out.kw(name.clone(), json_to_value(value)?);
            }
        }
        Some(other) => {
            return Err(invalid(format!("'kwargs' must be an object, got {}", kind(other))));
        }
        None => {}
    }

    Ok(out)
}

/// Convert a JSON value to a field value
pub fn json_to_value(v: &Json) -> Result<Value, CliError> {
    match v {
        Json::String(s) => Ok(Value::Text(s.clone())),
        Json::Number(n) => Ok(match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Value::Integer(i),
            (None, Some(u)) => Value::Decimal(Decimal::from(u)),
            _ => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Json::Array(items) => match items.as_slice() {
            [start] => Ok(Value::Range(json_to_bound(start)?, Bound::Absent)),
            [start, end] => Ok(Value::Range(json_to_bound(start)?, json_to_bound(end)?)),
            _ => Err(invalid(format!("a range needs 1 or 2 bounds, got {}", items.len()))),
        },
        Json::Object(map) if is_expression(map) => {
            Ok(Value::Expression(json_to_expression(v)?))
        }
        other => Err(invalid(format!("unsupported value: {}", kind(other)))),
    }
}

fn json_to_bound(v: &Json) -> Result<Bound, CliError> {
    match v {
        Json::Null => Ok(Bound::Absent),
        Json::String(s) => Ok(Bound::Text(s.clone())),
        Json::Number(n) => Ok(match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Bound::Integer(i),
            (None, Some(u)) => Bound::Decimal(Decimal::from(u)),
            _ => Bound::Float(n.as_f64().unwrap_or(f64::NAN)),
        }),
        other => Err(invalid(format!("unsupported range bound: {}", kind(other)))),
    }
}

fn is_mapping(v: &Json) -> bool {
    matches!(v, Json::Object(map) if !is_expression(map))
}

fn invalid(msg: impl Into<String>) -> CliError {
    CliError::InvalidDocument(msg.into())
}

fn kind(v: &Json) -> &'static str {
    match v {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(map) if is_expression(map) => "expression",
        Json::Object(_) => "object",
    }
}

fn is_expression(map: &Map<String, Json>) -> bool {
    map.contains_key("op")
}
