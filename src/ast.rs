//! # csquery - Expression Tree
//!
//! This module defines the tree a structured query is built from before it
//! is rendered to text.
//!
//! ## Architecture Overview
//!
//! - **[field]** - `name:value` tokens (leaves)
//! - **[expression]** - operator nodes with options and fields
//! - **[options]** - ordered option modifiers (`boost=2`, `field=title`)
//! - **[args]** - positional and named arguments collected for a constructor
//! - **[operators]** - the operator table and its option whitelists
//!
//! ## Rendering
//!
//! Every node renders itself recursively:
//!
//! ```text
//! (and (not field=genres 'drama') (or (term field=title 'star') year:{,2000]))
//! ```
//!
//! Positional arguments come first, in call order. Named arguments follow,
//! sorted by name, so the same tree always produces the same string.
//!
//! ## Examples
//!
//! ```
//! use csquery::{and, not, term, Args};
//!
//! let query = and(
//!     Args::with(not(Args::with("drama").kw("field", "genres")))
//!         .arg(term(Args::with("star").kw("field", "title").kw("boost", 2))),
//! );
//! assert_eq!(
//!     query.query(),
//!     "(and (not field=genres 'drama') (term field=title boost=2 'star'))"
//! );
//! ```
pub mod args;
pub mod expression;
pub mod field;
pub mod operators;
pub mod options;

pub use args::Args;
pub use expression::Expression;
pub use field::{FieldValue, field};
pub use operators::Operator;
pub use options::Options;
