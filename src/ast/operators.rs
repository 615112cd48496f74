use std::fmt;

use crate::ast::{Args, Expression};

/// Built-in query operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// All sub-expressions must match (`and`)
    And,
    /// Any sub-expression matches (`or`)
    Or,
    /// Excludes matches (`not`)
    Not,
    /// Single term match (`term`)
    Term,
    /// Terms within a distance of each other (`near`)
    Near,
    /// Exact phrase (`phrase`)
    Phrase,
    /// Term prefix (`prefix`)
    Prefix,
    /// Value range (`range`)
    Range,
}

struct OperatorSpec {
    name: &'static str,
    options: &'static [&'static str],
}

/// Operator table, indexed by `Operator` discriminant.
static OPERATORS: [OperatorSpec; 8] = [
    OperatorSpec {
        name: "and",
        options: &["boost"],
    },
    OperatorSpec {
        name: "or",
        options: &["boost"],
    },
    OperatorSpec {
        name: "not",
        options: &["field", "boost"],
    },
    OperatorSpec {
        name: "term",
        options: &["field", "boost"],
    },
    OperatorSpec {
        name: "near",
        options: &["field", "distance", "boost"],
    },
    OperatorSpec {
        name: "phrase",
        options: &["field", "boost"],
    },
    OperatorSpec {
        name: "prefix",
        options: &["field", "boost"],
    },
    OperatorSpec {
        name: "range",
        options: &["field", "boost"],
    },
];

impl Operator {
    pub const ALL: [Operator; 8] = [
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Term,
        Operator::Near,
        Operator::Phrase,
        Operator::Prefix,
        Operator::Range,
    ];

    /// The operator token written into the query.
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Option keys this operator accepts, in rendering order.
    pub fn allowed_options(self) -> &'static [&'static str] {
        self.spec().options
    }

    fn spec(self) -> &'static OperatorSpec {
        &OPERATORS[self as usize]
    }

    /// Looks up a built-in operator by its query token.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Builds an expression, pulling whitelisted named arguments out as
    /// options. Everything else becomes a field.
    pub fn build(self, mut args: Args) -> Expression {
        let options = args.take_options(self.allowed_options());
        Expression::new(self.name(), options, args)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `(and ...)`, accepts `boost`.
pub fn and(args: Args) -> Expression {
    Operator::And.build(args)
}

/// `(or ...)`, accepts `boost`.
pub fn or(args: Args) -> Expression {
    Operator::Or.build(args)
}

/// `(not ...)`, accepts `field` and `boost`.
pub fn not(args: Args) -> Expression {
    Operator::Not.build(args)
}

/// `(term ...)`, accepts `field` and `boost`.
pub fn term(args: Args) -> Expression {
    Operator::Term.build(args)
}

/// `(near ...)`, accepts `field`, `distance` and `boost`.
pub fn near(args: Args) -> Expression {
    Operator::Near.build(args)
}

/// `(phrase ...)`, accepts `field` and `boost`.
pub fn phrase(args: Args) -> Expression {
    Operator::Phrase.build(args)
}

/// `(prefix ...)`, accepts `field` and `boost`.
pub fn prefix(args: Args) -> Expression {
    Operator::Prefix.build(args)
}

/// `(range ...)`, accepts `field` and `boost`.
pub fn range(args: Args) -> Expression {
    Operator::Range.build(args)
}
