//! Suffix factoring over the final alternative list.
//!
//! Prefix factoring happens while patterns are added; common suffixes only
//! become visible once the whole list exists, so they are factored in one
//! pass at emission time. Each alternative tries to fold into the first
//! earlier result that shares a trailing literal run or a structurally
//! equal trailing child. The split-off prefixes recurse through the same
//! fold, which is what turns `abc+ | bc+` into `(?:a?b)?c+` rather than
//! `(?:ab|b)c+`. Nothing ever descends into unrelated children: a fully
//! recursive suffix search would combine explosively with the prefix
//! factoring already applied.

use std::mem;

use crate::ast::{alternate, concat, literal, Ast};
use crate::merge::add_empty;

/// Fold each alternative into the first earlier one sharing a suffix.
pub(crate) fn factor_suffixes(alts: Vec<Ast>) -> Vec<Ast> {
    let mut out: Vec<Ast> = Vec::with_capacity(alts.len());
    'alts: for alt in alts {
        let mut current = alt;
        for slot in out.iter_mut() {
            match merge_suffix(mem::replace(slot, Ast::Empty), current) {
                Ok(merged) => {
                    *slot = merged;
                    continue 'alts;
                }
                Err((kept, returned)) => {
                    *slot = kept;
                    current = returned;
                }
            }
        }
        out.push(current);
    }
    out
}

/// Merge two alternatives on a shared trailing literal run or a shared
/// trailing child; hand both back untouched otherwise.
fn merge_suffix(a: Ast, b: Ast) -> Result<Ast, (Ast, Ast)> {
    if let (Some(lit_a), Some(lit_b)) = (trailing_literal(&a), trailing_literal(&b)) {
        let n = common_suffix_len(lit_a, lit_b);
        if n == 0 {
            return Err((a, b));
        }
        let suffix = lit_a[lit_a.len() - n..].to_vec();
        let prefix_a = strip_trailing(a, n);
        let prefix_b = strip_trailing(b, n);
        return Ok(concat(vec![
            combine(prefix_a, prefix_b),
            Ast::Literal(suffix),
        ]));
    }
    if last(&a) != last(&b) {
        return Err((a, b));
    }
    let (prefix_a, tail) = split_last(a);
    let (prefix_b, _) = split_last(b);
    Ok(concat(vec![combine(prefix_a, prefix_b), tail]))
}

/// Join the prefixes left over after a suffix was factored out.
fn combine(a: Ast, b: Ast) -> Ast {
    if a == Ast::Empty {
        return add_empty(b);
    }
    if b == Ast::Empty {
        return add_empty(a);
    }
    if a == b {
        return a;
    }
    match merge_suffix(a, b) {
        Ok(merged) => merged,
        Err((a, b)) => alternate(vec![a, b]),
    }
}

/// The trailing literal run of a node, if it ends in one.
fn trailing_literal(node: &Ast) -> Option<&[char]> {
    match node {
        Ast::Literal(runes) => Some(runes),
        Ast::Concat(children) => match children.last() {
            Some(Ast::Literal(runes)) => Some(runes),
            _ => None,
        },
        _ => None,
    }
}

/// Drop the last `n` runes of the trailing literal run.
fn strip_trailing(node: Ast, n: usize) -> Ast {
    match node {
        Ast::Literal(mut runes) => {
            runes.truncate(runes.len() - n);
            literal(runes)
        }
        Ast::Concat(mut children) => {
            if let Some(Ast::Literal(runes)) = children.last_mut() {
                let keep = runes.len() - n;
                if keep == 0 {
                    children.pop();
                } else {
                    runes.truncate(keep);
                }
            }
            concat(children)
        }
        other => other,
    }
}

/// The trailing child of a concatenation, or the node itself.
fn last(node: &Ast) -> &Ast {
    match node {
        Ast::Concat(children) => children.last().unwrap_or(node),
        other => other,
    }
}

/// Split off the trailing child; the whole node counts as its own tail.
fn split_last(node: Ast) -> (Ast, Ast) {
    match node {
        Ast::Concat(mut children) => {
            let tail = children.pop().unwrap_or(Ast::Empty);
            (concat(children), tail)
        }
        other => (Ast::Empty, other),
    }
}

fn common_suffix_len(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}
