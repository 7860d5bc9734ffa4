//! The incremental union engine.
//!
//! `merge(acc, new)` returns a tree whose language is `L(acc) ∪ L(new)`,
//! or hands both operands back when keeping them as distinct alternatives
//! is the only language-preserving option. Dispatch is on the outermost
//! variants: a new literal drives prefix factoring and class coalescing,
//! anything else factors structurally equal leading children.
//!
//! Merging is deliberately conservative around quantifiers: `x*`/`x+`
//! absorb exactly one repetition of `x` and nothing else, because peeling
//! a partial prefix out of a repetition changes the language. `x?` is the
//! exception: adding any alternative under it keeps the union intact.

use std::mem;

use crate::ast::{alternate, concat, literal, quest, Ast};
use crate::classes::ClassRanges;

/// Result of merging two alternatives.
pub(crate) enum Outcome {
    /// A single tree covering both operands.
    Merged(Ast),
    /// No profitable merge; the operands are returned unchanged.
    Separate(Ast, Ast),
}

/// Merge `new` into `acc`, preserving the union language.
pub(crate) fn merge(acc: Ast, new: Ast) -> Outcome {
    match new {
        Ast::Empty => Outcome::Merged(add_empty(acc)),
        Ast::Literal(runes) => match merge_literal(acc, runes) {
            Ok(merged) => Outcome::Merged(merged),
            Err((acc, runes)) => Outcome::Separate(acc, Ast::Literal(runes)),
        },
        new => {
            if acc == new {
                return Outcome::Merged(acc);
            }
            merge_complex(acc, new)
        }
    }
}

/// Extend `node`'s language with the empty string.
///
/// Already-nullable quantifiers pass through and `x+` demotes to `x*`;
/// everything else is wrapped in `?`, which keeps the factored shape of
/// the wrapped node visible in the output.
pub(crate) fn add_empty(node: Ast) -> Ast {
    match node {
        Ast::Empty | Ast::Quest(_) | Ast::Star(_) => node,
        Ast::Plus(child) => Ast::Star(child),
        Ast::Alternate(children) => {
            if children.iter().any(Ast::is_nullable) {
                Ast::Alternate(children)
            } else {
                quest(Ast::Alternate(children))
            }
        }
        other => quest(other),
    }
}

fn merge_complex(acc: Ast, new: Ast) -> Outcome {
    // Quantifier absorption: one side is a quantifier over the other.
    match (&acc, &new) {
        (Ast::Quest(child) | Ast::Star(child) | Ast::Plus(child), other)
            if child.as_ref() == other =>
        {
            return Outcome::Merged(acc);
        }
        (other, Ast::Quest(child) | Ast::Star(child) | Ast::Plus(child))
            if child.as_ref() == other =>
        {
            return Outcome::Merged(new);
        }
        _ => {}
    }
    let (acc, new) = match (acc, new) {
        // Different quantifiers over the same body collapse to `*`, the
        // weakest one covering both.
        (
            Ast::Quest(a) | Ast::Star(a) | Ast::Plus(a),
            Ast::Quest(b) | Ast::Star(b) | Ast::Plus(b),
        ) if a == b => return Outcome::Merged(Ast::Star(a)),
        // `x?` absorbs anything that merges with its body.
        (Ast::Quest(child), new) => match merge(*child, new) {
            Outcome::Merged(merged) => return Outcome::Merged(quest(merged)),
            Outcome::Separate(child, new) => (quest(child), new),
        },
        other => other,
    };
    match (acc, new) {
        // An empty alternative stays a visible alternative.
        (Ast::Empty, new) => Outcome::Separate(Ast::Empty, new),
        (Ast::Class(mut acc), Ast::Class(new)) => {
            acc.union(&new);
            Outcome::Merged(Ast::Class(acc))
        }
        (Ast::Literal(runes), Ast::Class(mut ranges)) if runes.len() == 1 => {
            ranges.insert(runes[0]);
            Outcome::Merged(Ast::Class(ranges))
        }
        (Ast::AnyChar, Ast::Class(ranges)) | (Ast::Class(ranges), Ast::AnyChar) => {
            let mut union = ClassRanges::dot();
            union.union(&ranges);
            Outcome::Merged(if union.is_dot() {
                Ast::AnyChar
            } else {
                Ast::Class(union)
            })
        }
        (Ast::Alternate(children), new) => Outcome::Merged(merge_into_alternate(children, new)),
        (acc, new) => merge_heads(acc, new),
    }
}

/// Factor structurally equal leading children out of two sequences.
///
/// Partial literal overlap between two concatenations is intentionally not
/// factored here; that transformation is only safe (and only wanted) when
/// the incoming pattern is a bare literal.
fn merge_heads(acc: Ast, new: Ast) -> Outcome {
    let mut left = match acc {
        Ast::Concat(children) => children,
        other => vec![other],
    };
    let mut right = match new {
        Ast::Concat(children) => children,
        other => vec![other],
    };
    let mut shared = 0;
    while shared < left.len() && shared < right.len() && left[shared] == right[shared] {
        shared += 1;
    }
    if shared == 0 {
        return Outcome::Separate(concat(left), concat(right));
    }
    let left_rest = concat(left.split_off(shared));
    let right_rest = concat(right.split_off(shared));
    let rest = match (left_rest, right_rest) {
        (Ast::Empty, other) | (other, Ast::Empty) => add_empty(other),
        (left_rest, right_rest) => match merge(left_rest, right_rest) {
            Outcome::Merged(merged) => merged,
            Outcome::Separate(left_rest, right_rest) => alternate(vec![left_rest, right_rest]),
        },
    };
    left.push(rest);
    Outcome::Merged(concat(left))
}

/// Merge into the first alternative that accepts; append otherwise.
fn merge_into_alternate(mut children: Vec<Ast>, mut new: Ast) -> Ast {
    for i in 0..children.len() {
        let child = mem::replace(&mut children[i], Ast::Empty);
        match merge(child, new) {
            Outcome::Merged(merged) => {
                children[i] = merged;
                return alternate(children);
            }
            Outcome::Separate(child, returned) => {
                children[i] = child;
                new = returned;
            }
        }
    }
    children.push(new);
    alternate(children)
}

fn merge_literal(acc: Ast, runes: Vec<char>) -> Result<Ast, (Ast, Vec<char>)> {
    debug_assert!(!runes.is_empty());
    match acc {
        Ast::Literal(other) => merge_two_literals(other, runes),
        Ast::Concat(children) => merge_literal_into_concat(children, runes),
        Ast::Class(ranges) => merge_literal_into_class(ranges, runes),
        Ast::AnyChar => {
            if runes.len() == 1 && runes[0] != '\n' {
                Ok(Ast::AnyChar)
            } else {
                Err((Ast::AnyChar, runes))
            }
        }
        // `x?` absorbs anything: `x? ∪ y = (x ∪ y)?`.
        Ast::Quest(child) => match merge_literal(*child, runes) {
            Ok(merged) => Ok(quest(merged)),
            Err((child, runes)) => Ok(quest(alternate(vec![child, Ast::Literal(runes)]))),
        },
        Ast::Star(child) => {
            if literal_matches(&child, &runes) {
                Ok(Ast::Star(child))
            } else {
                Err((Ast::Star(child), runes))
            }
        }
        Ast::Plus(child) => {
            if literal_matches(&child, &runes) {
                Ok(Ast::Plus(child))
            } else {
                Err((Ast::Plus(child), runes))
            }
        }
        Ast::Alternate(children) => Ok(merge_literal_into_alternate(children, runes)),
        acc => Err((acc, runes)),
    }
}

fn merge_two_literals(acc: Vec<char>, new: Vec<char>) -> Result<Ast, (Ast, Vec<char>)> {
    let k = common_prefix_len(&acc, &new);
    if k == 0 {
        if acc.len() == 1 && new.len() == 1 {
            let mut ranges = ClassRanges::new();
            ranges.insert(acc[0]);
            ranges.insert(new[0]);
            return Ok(Ast::Class(ranges));
        }
        return Err((Ast::Literal(acc), new));
    }
    if k == acc.len() && k == new.len() {
        return Ok(Ast::Literal(acc));
    }
    if k == acc.len() {
        let tail = literal(new[k..].to_vec());
        return Ok(concat(vec![Ast::Literal(acc), quest(tail)]));
    }
    if k == new.len() {
        let tail = literal(acc[k..].to_vec());
        return Ok(concat(vec![Ast::Literal(new), quest(tail)]));
    }
    let prefix = Ast::Literal(acc[..k].to_vec());
    let tail = match merge_two_literals(acc[k..].to_vec(), new[k..].to_vec()) {
        Ok(merged) => merged,
        Err((acc_tail, new_tail)) => alternate(vec![acc_tail, Ast::Literal(new_tail)]),
    };
    Ok(concat(vec![prefix, tail]))
}

/// Split a concatenation's leading literal on its common prefix with `new`.
fn merge_literal_into_concat(
    mut children: Vec<Ast>,
    new: Vec<char>,
) -> Result<Ast, (Ast, Vec<char>)> {
    let head = match children.first() {
        Some(Ast::Literal(head)) => head.clone(),
        _ => return Err((Ast::Concat(children), new)),
    };
    let k = common_prefix_len(&head, &new);
    if k == 0 {
        return Err((Ast::Concat(children), new));
    }
    children.remove(0);
    let mut rest_children = Vec::with_capacity(children.len() + 1);
    if k < head.len() {
        rest_children.push(Ast::Literal(head[k..].to_vec()));
    }
    rest_children.extend(children);
    let acc_rest = concat(rest_children);
    let prefix = Ast::Literal(head[..k].to_vec());
    if k == new.len() {
        return Ok(concat(vec![prefix, add_empty(acc_rest)]));
    }
    let tail = match merge_literal(acc_rest, new[k..].to_vec()) {
        Ok(merged) => merged,
        Err((acc_rest, new_rest)) => alternate(vec![acc_rest, Ast::Literal(new_rest)]),
    };
    Ok(concat(vec![prefix, tail]))
}

/// A single rune joins the class; a longer literal can only pull a rune
/// the class holds in isolation back out as a literal alternative.
fn merge_literal_into_class(
    mut ranges: ClassRanges,
    runes: Vec<char>,
) -> Result<Ast, (Ast, Vec<char>)> {
    if runes.len() == 1 {
        ranges.insert(runes[0]);
        return Ok(Ast::Class(ranges));
    }
    let position = match ranges.singleton_position(runes[0]) {
        Some(position) => position,
        None => return Err((Ast::Class(ranges), runes)),
    };
    ranges.remove(position);
    let head = Ast::Literal(vec![runes[0]]);
    let tail = quest(Ast::Literal(runes[1..].to_vec()));
    let merged = concat(vec![head, tail]);
    if ranges.is_empty() {
        Ok(merged)
    } else {
        Ok(alternate(vec![merged, Ast::Class(ranges)]))
    }
}

fn merge_literal_into_alternate(mut children: Vec<Ast>, mut runes: Vec<char>) -> Ast {
    for i in 0..children.len() {
        let child = mem::replace(&mut children[i], Ast::Empty);
        match merge_literal(child, runes) {
            Ok(merged) => {
                children[i] = merged;
                return alternate(children);
            }
            Err((child, returned)) => {
                children[i] = child;
                runes = returned;
            }
        }
    }
    children.push(Ast::Literal(runes));
    alternate(children)
}

fn literal_matches(node: &Ast, runes: &[char]) -> bool {
    matches!(node, Ast::Literal(other) if other.as_slice() == runes)
}

fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
