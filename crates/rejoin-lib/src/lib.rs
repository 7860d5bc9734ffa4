//! Rejoin: assemble many regular expressions into one compact union pattern.
//!
//! Folding a list of patterns into `p1|p2|…|pn` is correct but wasteful:
//! shared prefixes, shared suffixes, and overlapping single-rune choices
//! all survive as separate alternatives. Rejoin merges each new pattern
//! into an accumulator instead, collapsing those redundancies as they
//! appear:
//!
//! - `parse`: lowers a pattern through `regex-syntax` into a small AST
//! - `merge`: the incremental union engine (prefix factoring, quantifier
//!   absorption, character-class coalescing)
//! - `suffix`: a final pass that factors common suffixes out of the
//!   top-level alternatives
//! - `emit`: renders the result back to pattern text
//!
//! # Example
//!
//! ```
//! let pattern = rejoin_lib::join(["abcd", "abcf", "abc", "abce"]).unwrap();
//! assert_eq!(pattern, "abc[d-f]?");
//! ```
//!
//! The assembled pattern matches exactly the union of the inputs; only the
//! surface form changes. Anchors, capture groups, and counted repetitions
//! are carried through untouched and only ever merge with an identical
//! counterpart.

pub mod ast;
pub mod classes;

mod emit;
mod joiner;
mod merge;
mod parse;
mod suffix;

#[cfg(test)]
mod joiner_tests;
#[cfg(test)]
mod suffix_tests;

pub use ast::Ast;
pub use classes::ClassRanges;
pub use emit::emit;
pub use joiner::{join, Joiner};
pub use parse::parse;

/// Errors produced while assembling patterns.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// An input pattern is not a valid regular expression. The assembly
    /// aborts on the first failure; no partial result is produced.
    #[error("invalid pattern `{pattern}`: {source}")]
    Parse {
        pattern: String,
        source: Box<regex_syntax::Error>,
    },
}

/// Result type for assembly operations.
pub type Result<T> = std::result::Result<T, Error>;
