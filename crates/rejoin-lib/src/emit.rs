//! Canonical surface rendering.
//!
//! Grouping uses `(?:…)` only where required: alternations inside a
//! concatenation, and quantified subexpressions that are not a single
//! atom. Class ranges render with a hyphen only for runs of three or more
//! runes, so `[ab]` stays two characters while `a`–`c` becomes `[a-c]`.

use std::fmt::Write;

use regex_syntax::hir::Look;

use crate::ast::Ast;
use crate::classes::{rune_succ, ClassRanges};

/// Render a tree back to pattern text.
pub fn emit(ast: &Ast) -> String {
    let mut out = String::new();
    write_node(&mut out, ast);
    out
}

fn write_node(out: &mut String, ast: &Ast) {
    match ast {
        Ast::Empty => out.push_str("(?:)"),
        Ast::Literal(runes) => {
            for &c in runes {
                write_literal_rune(out, c);
            }
        }
        Ast::Class(ranges) => write_class(out, ranges),
        Ast::AnyChar => out.push('.'),
        Ast::Assert(look) => write_assert(out, *look),
        Ast::Group { name, node, .. } => {
            match name {
                Some(name) => {
                    out.push_str("(?P<");
                    out.push_str(name);
                    out.push('>');
                }
                None => out.push('('),
            }
            write_node(out, node);
            out.push(')');
        }
        Ast::Concat(children) => {
            for child in children {
                if matches!(child, Ast::Alternate(_)) {
                    write_group(out, child);
                } else {
                    write_node(out, child);
                }
            }
        }
        Ast::Alternate(children) => {
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push('|');
                }
                write_node(out, child);
            }
        }
        Ast::Quest(child) => write_quantified(out, child, "?"),
        Ast::Star(child) => write_quantified(out, child, "*"),
        Ast::Plus(child) => write_quantified(out, child, "+"),
        Ast::Repeat {
            min,
            max,
            greedy,
            node,
        } => {
            let mut op = match (*min, *max) {
                (0, Some(1)) => "?".to_string(),
                (0, None) => "*".to_string(),
                (1, None) => "+".to_string(),
                (min, Some(max)) if min == max => format!("{{{min}}}"),
                (min, None) => format!("{{{min},}}"),
                (min, Some(max)) => format!("{{{min},{max}}}"),
            };
            if !*greedy {
                op.push('?');
            }
            write_quantified(out, node, &op);
        }
    }
}

fn write_quantified(out: &mut String, node: &Ast, op: &str) {
    if needs_group(node) {
        write_group(out, node);
    } else {
        write_node(out, node);
    }
    out.push_str(op);
}

fn write_group(out: &mut String, node: &Ast) {
    out.push_str("(?:");
    write_node(out, node);
    out.push(')');
}

/// Whether a quantifier needs to wrap `node` to bind to all of it.
fn needs_group(node: &Ast) -> bool {
    match node {
        Ast::Literal(runes) => runes.len() > 1,
        Ast::Class(_) | Ast::AnyChar | Ast::Group { .. } => false,
        _ => true,
    }
}

fn write_class(out: &mut String, ranges: &ClassRanges) {
    if ranges.is_full() {
        out.push_str("(?s:.)");
        return;
    }
    out.push('[');
    if ranges.spans_extremes() {
        out.push('^');
        for (lo, hi) in ranges.gaps() {
            write_class_range(out, lo, hi);
        }
    } else {
        for (lo, hi) in ranges.iter() {
            write_class_range(out, lo, hi);
        }
    }
    out.push(']');
}

fn write_class_range(out: &mut String, lo: char, hi: char) {
    write_class_rune(out, lo);
    if lo == hi {
        return;
    }
    if rune_succ(lo) != Some(hi) {
        out.push('-');
    }
    write_class_rune(out, hi);
}

fn write_class_rune(out: &mut String, c: char) {
    if matches!(c, '\\' | ']' | '^' | '-' | '[') {
        out.push('\\');
        out.push(c);
    } else {
        write_rune(out, c);
    }
}

fn write_literal_rune(out: &mut String, c: char) {
    if r"\.+*?()|[]{}^$".contains(c) {
        out.push('\\');
        out.push(c);
    } else {
        write_rune(out, c);
    }
}

fn write_rune(out: &mut String, c: char) {
    match c {
        '\n' => out.push_str(r"\n"),
        '\r' => out.push_str(r"\r"),
        '\t' => out.push_str(r"\t"),
        c if c.is_control() => {
            let _ = write!(out, "\\x{{{:x}}}", c as u32);
        }
        c => out.push(c),
    }
}

fn write_assert(out: &mut String, look: Look) {
    let text = match look {
        Look::Start => r"\A",
        Look::End => r"\z",
        Look::StartLF => "(?m:^)",
        Look::EndLF => "(?m:$)",
        Look::StartCRLF => "(?mR:^)",
        Look::EndCRLF => "(?mR:$)",
        Look::WordAscii => r"(?-u:\b)",
        Look::WordAsciiNegate => r"(?-u:\B)",
        Look::WordUnicode => r"\b",
        Look::WordUnicodeNegate => r"\B",
        Look::WordStartAscii => r"(?-u:\b{start})",
        Look::WordEndAscii => r"(?-u:\b{end})",
        Look::WordStartUnicode => r"\b{start}",
        Look::WordEndUnicode => r"\b{end}",
        Look::WordStartHalfAscii => r"(?-u:\b{start-half})",
        Look::WordEndHalfAscii => r"(?-u:\b{end-half})",
        Look::WordStartHalfUnicode => r"\b{start-half}",
        Look::WordEndHalfUnicode => r"\b{end-half}",
    };
    out.push_str(text);
}
