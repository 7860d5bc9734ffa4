//! Regular-expression AST with owned children and canonicalising
//! constructors.
//!
//! The node set mirrors the shapes the merge engine dispatches on:
//! literals, character classes, concatenation, alternation, and the three
//! bare quantifiers. Anchors, capture groups, and counted repetitions pass
//! through merging untouched and only combine with an equal counterpart.
//!
//! Trees are kept canonical by the constructors below rather than by a
//! separate normalisation pass: concatenations stay flat with adjacent
//! literal runs fused, alternations stay flat and duplicate-free, and
//! quantifiers never nest within their own family. Code that builds nodes
//! by hand is expected to go through these constructors.

use regex_syntax::hir::Look;

use crate::classes::ClassRanges;

/// A regular-expression syntax tree.
///
/// Every node exclusively owns its children. Merging consumes its inputs
/// and produces freshly built trees; nothing is shared and nothing is
/// mutated behind the caller's back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Ast {
    /// Matches exactly the empty string.
    Empty,
    /// A non-empty rune sequence. The empty sequence is `Empty`.
    Literal(Vec<char>),
    /// A set of rune ranges, `[…]`.
    Class(ClassRanges),
    /// `.`, matching any rune except `\n`.
    AnyChar,
    /// Zero-width assertion such as `^`, `$`, or `\b`.
    Assert(Look),
    /// Capture group. Opaque to merging.
    Group {
        index: u32,
        name: Option<String>,
        node: Box<Ast>,
    },
    /// Two or more children in sequence; no child is itself a `Concat`,
    /// an `Empty`, or a `Literal` adjacent to another `Literal`.
    Concat(Vec<Ast>),
    /// Two or more alternatives; no child is itself an `Alternate` and no
    /// two children are equal.
    Alternate(Vec<Ast>),
    Quest(Box<Ast>),
    Star(Box<Ast>),
    Plus(Box<Ast>),
    /// Counted or non-greedy repetition. Opaque to merging.
    Repeat {
        min: u32,
        max: Option<u32>,
        greedy: bool,
        node: Box<Ast>,
    },
}

impl Ast {
    /// Whether the node's language contains the empty string.
    pub fn is_nullable(&self) -> bool {
        match self {
            Ast::Empty | Ast::Quest(_) | Ast::Star(_) | Ast::Assert(_) => true,
            Ast::Literal(_) | Ast::Class(_) | Ast::AnyChar => false,
            Ast::Group { node, .. } => node.is_nullable(),
            Ast::Concat(children) => children.iter().all(Ast::is_nullable),
            Ast::Alternate(children) => children.iter().any(Ast::is_nullable),
            Ast::Plus(node) => node.is_nullable(),
            Ast::Repeat { min, node, .. } => *min == 0 || node.is_nullable(),
        }
    }
}

/// A literal node, or `Empty` for no runes.
pub fn literal(runes: Vec<char>) -> Ast {
    if runes.is_empty() {
        Ast::Empty
    } else {
        Ast::Literal(runes)
    }
}

/// Flatten children into a canonical concatenation.
///
/// Nested concatenations are spliced, `Empty` children dropped, and
/// adjacent literals fused. Zero children degenerate to `Empty`, one child
/// to that child.
pub fn concat(nodes: Vec<Ast>) -> Ast {
    let mut out: Vec<Ast> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Ast::Empty => {}
            Ast::Concat(children) => {
                for child in children {
                    push_fused(&mut out, child);
                }
            }
            other => push_fused(&mut out, other),
        }
    }
    match out.len() {
        0 => Ast::Empty,
        1 => out.remove(0),
        _ => Ast::Concat(out),
    }
}

fn push_fused(out: &mut Vec<Ast>, node: Ast) {
    if let (Some(Ast::Literal(prev)), Ast::Literal(runes)) = (out.last_mut(), &node) {
        prev.extend_from_slice(runes);
        return;
    }
    out.push(node);
}

/// Flatten children into a canonical alternation.
///
/// Nested alternations are spliced and duplicates removed, keeping the
/// first occurrence so alternative order stays stable. Zero children
/// degenerate to `Empty`, one child to that child.
pub fn alternate(nodes: Vec<Ast>) -> Ast {
    let mut out: Vec<Ast> = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Ast::Alternate(children) => {
                for child in children {
                    if !out.contains(&child) {
                        out.push(child);
                    }
                }
            }
            other => {
                if !out.contains(&other) {
                    out.push(other);
                }
            }
        }
    }
    match out.len() {
        0 => Ast::Empty,
        1 => out.remove(0),
        _ => Ast::Alternate(out),
    }
}

/// `node?`, collapsing redundant nesting: an already-nullable quantifier
/// is returned unchanged and `(c+)?` becomes `c*`.
pub fn quest(node: Ast) -> Ast {
    match node {
        Ast::Empty => Ast::Empty,
        Ast::Quest(_) | Ast::Star(_) => node,
        Ast::Plus(child) => Ast::Star(child),
        other => Ast::Quest(Box::new(other)),
    }
}

/// `node*`, collapsing `(c?)*` and `(c+)*` to `c*`.
pub fn star(node: Ast) -> Ast {
    match node {
        Ast::Empty => Ast::Empty,
        Ast::Star(_) => node,
        Ast::Quest(child) | Ast::Plus(child) => Ast::Star(child),
        other => Ast::Star(Box::new(other)),
    }
}

/// `node+`, collapsing `(c*)+` to `c*` and `(c?)+` to `c*`.
pub fn plus(node: Ast) -> Ast {
    match node {
        Ast::Empty => Ast::Empty,
        Ast::Plus(_) | Ast::Star(_) => node,
        Ast::Quest(child) => Ast::Star(child),
        other => Ast::Plus(Box::new(other)),
    }
}
