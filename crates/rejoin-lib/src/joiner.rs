//! The driver: fold parsed patterns into a top-level alternative list.
//!
//! Each new pattern is offered to the existing alternatives in order; the
//! first one that merges keeps it, otherwise it becomes a new alternative.
//! An empty pattern folds into the first alternative via `add_empty`.
//! Suffix factoring runs once over the finished list at render time.

use std::mem;

use crate::ast::{alternate, Ast};
use crate::emit::emit;
use crate::merge::{merge, Outcome};
use crate::parse::parse;
use crate::suffix::factor_suffixes;

/// Streaming accumulator for building a union pattern one input at a time.
///
/// ```
/// use rejoin_lib::Joiner;
///
/// let mut joiner = Joiner::new();
/// joiner.add("abcd")?;
/// joiner.add("abcf")?;
/// assert_eq!(joiner.into_pattern(), "abc[df]");
/// # Ok::<(), rejoin_lib::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Joiner {
    alts: Vec<Ast>,
}

impl Joiner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any pattern has been added yet.
    pub fn is_empty(&self) -> bool {
        self.alts.is_empty()
    }

    /// Parse one pattern and fold it into the accumulated union.
    ///
    /// A parse failure leaves the accumulator unchanged.
    pub fn add(&mut self, pattern: &str) -> crate::Result<()> {
        let ast = parse(pattern)?;
        self.insert(ast);
        Ok(())
    }

    fn insert(&mut self, ast: Ast) {
        let mut current = ast;
        for slot in self.alts.iter_mut() {
            match merge(mem::replace(slot, Ast::Empty), current) {
                Outcome::Merged(merged) => {
                    *slot = merged;
                    return;
                }
                Outcome::Separate(kept, returned) => {
                    *slot = kept;
                    current = returned;
                }
            }
        }
        self.alts.push(current);
    }

    /// The assembled union as a single tree, suffix-factored.
    ///
    /// An accumulator that never saw a pattern yields `Empty`.
    pub fn into_ast(self) -> Ast {
        alternate(factor_suffixes(self.alts))
    }

    /// Render the assembled union.
    ///
    /// Returns the empty string when no patterns were added; a lone empty
    /// pattern renders as `(?:)`.
    pub fn into_pattern(self) -> String {
        if self.alts.is_empty() {
            return String::new();
        }
        emit(&self.into_ast())
    }
}

/// Assemble `patterns` into one pattern matching their union.
///
/// The first invalid pattern aborts the whole call; no partial result is
/// produced.
pub fn join<I>(patterns: I) -> crate::Result<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joiner = Joiner::new();
    for pattern in patterns {
        joiner.add(pattern.as_ref())?;
    }
    Ok(joiner.into_pattern())
}
