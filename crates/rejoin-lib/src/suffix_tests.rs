use crate::ast::{alternate, Ast};
use crate::emit::emit;
use crate::parse::parse;
use crate::suffix::factor_suffixes;

fn factored(patterns: &[&str]) -> String {
    let alts: Vec<Ast> = patterns.iter().map(|p| parse(p).unwrap()).collect();
    emit(&alternate(factor_suffixes(alts)))
}

#[test]
fn literal_suffix_is_factored_out() {
    assert_eq!(factored(&["abcde", "cde"]), "(?:ab)?cde");
    assert_eq!(factored(&["abcde", "xde"]), "(?:abc|x)de");
}

#[test]
fn factoring_recurses_through_the_prefixes() {
    assert_eq!(factored(&["abcde", "bcde", "cde"]), "(?:a?b)?cde");
}

#[test]
fn equal_trailing_children_are_factored_out() {
    assert_eq!(factored(&["abc+", "bc+"]), "a?bc+");
    assert_eq!(factored(&["abc+", "bc+", "c+"]), "(?:a?b)?c+");
    assert_eq!(factored(&["bcd?", "d?"]), "(?:bc)?d?");
}

#[test]
fn unrelated_alternatives_stay_in_place() {
    assert_eq!(factored(&["abc", "xyz"]), "abc|xyz");
    assert_eq!(factored(&["ab*", "cd"]), "ab*|cd");
}

#[test]
fn identical_alternatives_collapse() {
    assert_eq!(factored(&["ab*c", "ab*c"]), "ab*c");
}

#[test]
fn later_alternatives_join_an_earlier_group() {
    assert_eq!(factored(&["ab*cde", "bcde", "a*de"]), "(?:(?:ab*|b)c|a*)de");
}
