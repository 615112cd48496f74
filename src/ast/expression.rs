use std::fmt;

use crate::ast::{Args, FieldValue, Options};
use crate::output::format_options;

/// One operator node of a structured query.
///
/// Renders as `(operator options fields...)`. Built-in operators are usually
/// created through the constructors in [`operators`](crate::ast::operators);
/// [`Expression::new`] accepts any operator string and any options.
///
/// # Example
/// ```
/// use csquery::{Args, Expression, Options};
///
/// let expr = Expression::new(
///     "and",
///     Options::new().with("boost", 3),
///     Args::new().field("actor", "test").kw("title", "test"),
/// );
/// assert_eq!(expr.query(), "(and boost=3 actor:'test' title:'test')");
/// ```
#[derive(Clone, PartialEq)]
pub struct Expression {
    operator: String,
    options: Options,
    fields: Vec<FieldValue>,
}

impl Expression {
    /// Creates an expression without filtering options: every named
    /// argument in `args` becomes a field.
    pub fn new(operator: impl Into<String>, options: Options, args: Args) -> Self {
        let operator = operator.into();
        let fields = args.into_fields();
        tracing::trace!(
            operator = %operator,
            options = options.len(),
            fields = fields.len(),
            "built expression"
        );
        Expression {
            operator,
            options,
            fields,
        }
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    /// Renders the expression to its query string.
    ///
    /// The string is recomputed on every call.
    pub fn query(&self) -> String {
        let mut out = format!("({}{}", self.operator, format_options(&self.options));
        if !self.fields.is_empty() {
            let tokens: Vec<String> = self.fields.iter().map(FieldValue::to_value).collect();
            out.push(' ');
            out.push_str(&tokens.join(" "));
        }
        out.push(')');
        out
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query())
    }
}

impl fmt::Debug for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Expression: {}>", self.query())
    }
}
