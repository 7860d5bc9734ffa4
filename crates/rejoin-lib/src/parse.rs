//! Lowering from `regex-syntax` into the merge AST.
//!
//! Parsing proper is entirely the library's job; this module only maps the
//! translated HIR onto the node set the merge engine dispatches on. The
//! library's canonical simplification has already run by then: literal
//! runs arrive fused, single-rune classes arrive as literals, and nested
//! concatenations never appear.

use regex_syntax::hir::{Class, Hir, HirKind};

use crate::ast::{alternate, concat, literal, plus, quest, star, Ast};
use crate::classes::ClassRanges;
use crate::Error;

/// Parse one pattern into an AST, in the library's default Perl-like,
/// Unicode-aware mode.
pub fn parse(pattern: &str) -> crate::Result<Ast> {
    let hir = regex_syntax::Parser::new()
        .parse(pattern)
        .map_err(|source| Error::Parse {
            pattern: pattern.to_string(),
            source: Box::new(source),
        })?;
    Ok(lower(hir))
}

fn lower(hir: Hir) -> Ast {
    match hir.into_kind() {
        HirKind::Empty => Ast::Empty,
        HirKind::Literal(lit) => {
            // Translated literals are valid UTF-8 in Unicode mode.
            let text = String::from_utf8_lossy(&lit.0);
            literal(text.chars().collect())
        }
        HirKind::Class(class) => lower_class(class),
        HirKind::Look(look) => Ast::Assert(look),
        HirKind::Repetition(rep) => {
            let node = lower(*rep.sub);
            match (rep.min, rep.max, rep.greedy) {
                (0, Some(1), true) => quest(node),
                (0, None, true) => star(node),
                (1, None, true) => plus(node),
                (min, max, greedy) => Ast::Repeat {
                    min,
                    max,
                    greedy,
                    node: Box::new(node),
                },
            }
        }
        HirKind::Capture(cap) => Ast::Group {
            index: cap.index,
            name: cap.name.map(String::from),
            node: Box::new(lower(*cap.sub)),
        },
        HirKind::Concat(subs) => concat(subs.into_iter().map(lower).collect()),
        HirKind::Alternation(subs) => alternate(subs.into_iter().map(lower).collect()),
    }
}

fn lower_class(class: Class) -> Ast {
    let ranges = match class {
        Class::Unicode(class) => {
            ClassRanges::from_ranges(class.ranges().iter().map(|r| (r.start(), r.end())))
        }
        Class::Bytes(class) => ClassRanges::from_ranges(
            class
                .ranges()
                .iter()
                .map(|r| (char::from(r.start()), char::from(r.end()))),
        ),
    };
    if ranges.is_dot() {
        return Ast::AnyChar;
    }
    match ranges.single_rune() {
        Some(c) => Ast::Literal(vec![c]),
        None => Ast::Class(ranges),
    }
}
