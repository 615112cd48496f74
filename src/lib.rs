//! Query builder for structured search expressions.
//!
//! Builds strings such as
//! `(and title:'star' (not field=genres 'drama') year:{,2000])` from a tree
//! of operator nodes, handling quoting, escaping and range notation.
//!
//! ```
//! use csquery::{and, range, Args};
//!
//! let query = and(
//!     Args::new()
//!         .kw("title", "star")
//!         .kw("actors", "Harrison Ford")
//!         .kw("year", ("", 2000)),
//! );
//! assert_eq!(query.query(), "(and actors:'Harrison Ford' title:'star' year:{,2000])");
//!
//! let dates = range(Args::with((1990, 2000)).kw("field", "date").kw("boost", 2));
//! assert_eq!(dates.to_string(), "(range field=date boost=2 [1990,2000])");
//! ```
pub mod ast;
pub mod cli;
pub mod error;
pub mod output;
pub mod value;

pub use ast::operators::{and, near, not, or, phrase, prefix, range, term};
pub use ast::{Args, Expression, FieldValue, Operator, Options, field};
pub use error::BuildError;
pub use output::{escape, format_options, format_range_values, format_value};
pub use value::{Bound, Value};
