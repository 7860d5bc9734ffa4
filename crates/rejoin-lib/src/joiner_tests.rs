use regex_automata::meta::Regex;

use crate::{join, Joiner};

fn joined(patterns: &[&str]) -> String {
    join(patterns).expect("every pattern in the list is valid")
}

/// Every pattern list exercised below, for the language-level checks.
const CASES: &[&[&str]] = &[
    &[""],
    &["", ""],
    &["abc"],
    &["abc", "def", "ghi"],
    &["abc", "def", "abc", "def"],
    &["abcd", "abcf", "abc", "abce", "abcgh", "abdc"],
    &["abcde", "abcfg", "abcgh"],
    &["a", "ab", "abc", "abcd"],
    &["abcd", "abc", "ab", "a"],
    &["abc", "ab", "abcd", "a", "bcd", "bcdef", "cdef", "cdeh"],
    &["abc(?:def)?", "abc"],
    &["abc(?:def)*", "abc"],
    &["abc(?:def)+", "abc"],
    &["abc(?:de|f)", "abc"],
    &["abca*b*", "abc"],
    &["abca*b*", "abcde"],
    &["abc(?:de|fh)?", "abcff", "abcf", "abchh"],
    &["abc(?:def)?ghi", "abcd"],
    &["abcfd|def", "abcdef", "abcfe"],
    &["abc|def", "ghi"],
    &["a", "1", "z", "2"],
    &["aa", "ab"],
    &["a", "c", "e", "ab", "cd", "ef"],
    &["aa", "ab", "ac"],
    &["ac", "aa", "ae", "ab", "ad"],
    &["1", "9", "2", "6", "3"],
    &["1", "9", "2", "6", "3", "7", "10", "8", "0", "5", "4"],
    &["a2", "a1", "a0", "a8", "a3", "a5", "a6", "a4", "a7", "a2", "a9", "a0", "a10"],
    &["abc", "", ""],
    &["(?:abc)+", "", ""],
    &["[135]", "", "7"],
    &["", "abc", ""],
    &["abcde", "cde", "bde"],
    &["e", "de", "cde", "bcde", "abcde"],
    &["abcde", "bcde", "cde", "de", "e"],
    &["a?", "a?b*c+"],
    &["a?b+cd", "a?b+c*", "a?b*c+"],
    &["a?b+c*", "a?b+c*d*", "a?b+", "a?"],
    &["ab*c", "aab?c", "a+c", "abc+", "bc+", "ab*c", "c+", "d?", "bcd?"],
    &["ab*cde", "bcde", "a*de", "cde"],
];

/// Lists whose assembled surface form is stable under re-adding the same
/// inputs; lists with quantified or alternated inputs may pick up extra
/// (language-equivalent) alternatives on the second pass.
const SURFACE_STABLE: &[&[&str]] = &[
    &["abc", "def", "abc", "def"],
    &["abcd", "abcf", "abc", "abce", "abcgh", "abdc"],
    &["abcde", "abcfg", "abcgh"],
    &["a", "ab", "abc", "abcd"],
    &["abc", "ab", "abcd", "a", "bcd", "bcdef", "cdef", "cdeh"],
    &["a", "1", "z", "2"],
    &["a", "c", "e", "ab", "cd", "ef"],
    &["ac", "aa", "ae", "ab", "ad"],
    &["1", "9", "2", "6", "3", "7", "10", "8", "0", "5", "4"],
    &["a2", "a1", "a0", "a8", "a3", "a5", "a6", "a4", "a7", "a2", "a9", "a0", "a10"],
    &["abcde", "cde", "bde"],
    &["e", "de", "cde", "bcde", "abcde"],
    &["abcde", "bcde", "cde", "de", "e"],
];

// ---------------------------------------------------------------------
// Empties
// ---------------------------------------------------------------------

#[test]
fn nothing_to_join() {
    assert_eq!(joined(&[]), "");
}

#[test]
fn empty_pattern() {
    assert_eq!(joined(&[""]), "(?:)");
    assert_eq!(joined(&["", ""]), "(?:)");
}

#[test]
fn empty_joins_literal() {
    assert_eq!(joined(&["abc", "", ""]), "(?:abc)?");
}

#[test]
fn empty_demotes_plus_to_star() {
    assert_eq!(joined(&["(?:abc)+", "", ""]), "(?:abc)*");
}

#[test]
fn empty_joins_class() {
    assert_eq!(joined(&["[135]", "", "7"]), "[1357]?");
}

#[test]
fn empty_stays_a_visible_alternative() {
    assert_eq!(joined(&["", "abc", ""]), "(?:)|abc");
}

// ---------------------------------------------------------------------
// Literals and shared prefixes
// ---------------------------------------------------------------------

#[test]
fn single_literal() {
    assert_eq!(joined(&["abc"]), "abc");
}

#[test]
fn unrelated_literals() {
    assert_eq!(joined(&["abc", "def", "ghi"]), "abc|def|ghi");
}

#[test]
fn duplicate_literals() {
    assert_eq!(joined(&["abc", "def", "abc", "def"]), "abc|def");
}

#[test]
fn shared_prefixes_of_varying_length() {
    assert_eq!(
        joined(&["abcd", "abcf", "abc", "abce", "abcgh", "abdc"]),
        "ab(?:c(?:[d-f]|gh)?|dc)"
    );
}

#[test]
fn shared_prefixes_of_equal_length() {
    assert_eq!(joined(&["abcde", "abcfg", "abcgh"]), "abc(?:de|fg|gh)");
}

#[test]
fn prefixes_in_increasing_length_order() {
    assert_eq!(joined(&["a", "ab", "abc", "abcd"]), "a(?:b(?:cd?)?)?");
}

#[test]
fn prefixes_in_decreasing_length_order() {
    assert_eq!(joined(&["abcd", "abc", "ab", "a"]), "a(?:b(?:cd?)?)?");
}

#[test]
fn multiple_prefix_groups() {
    assert_eq!(
        joined(&["abc", "ab", "abcd", "a", "bcd", "bcdef", "cdef", "cdeh"]),
        "a(?:b(?:cd?)?)?|bcd(?:ef)?|cde[fh]"
    );
}

// ---------------------------------------------------------------------
// Literals folding into structured accumulators
// ---------------------------------------------------------------------

#[test]
fn literal_into_quest() {
    assert_eq!(joined(&["abc(?:def)?", "abc"]), "abc(?:def)?");
}

#[test]
fn literal_into_star() {
    assert_eq!(joined(&["abc(?:def)*", "abc"]), "abc(?:def)*");
}

#[test]
fn literal_into_plus() {
    assert_eq!(joined(&["abc(?:def)+", "abc"]), "abc(?:def)*");
}

#[test]
fn literal_into_alternation() {
    assert_eq!(joined(&["abc(?:de|f)", "abc"]), "abc(?:de|f)?");
}

#[test]
fn literal_into_concat() {
    assert_eq!(joined(&["abca*b*", "abc"]), "abc(?:a*b*)?");
    assert_eq!(joined(&["abca*b*", "abcde"]), "abc(?:a*b*|de)");
}

#[test]
fn literal_into_quested_alternation() {
    assert_eq!(
        joined(&["abc(?:de|fh)?", "abcff", "abcf", "abchh"]),
        "abc(?:de|f[fh]?|hh)?"
    );
}

#[test]
fn literal_into_quest_with_suffix() {
    assert_eq!(joined(&["abc(?:def)?ghi", "abcd"]), "abc(?:(?:def)?ghi|d)");
}

#[test]
fn literal_into_alternation_with_shared_prefix() {
    assert_eq!(
        joined(&["abcfd|def", "abcdef", "abcfe"]),
        "abc(?:f[de]|def)|def"
    );
}

#[test]
fn literal_into_alternation_with_no_shared_prefix() {
    assert_eq!(joined(&["abc|def", "ghi"]), "abc|def|ghi");
}

// ---------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------

#[test]
fn single_runes_coalesce() {
    assert_eq!(joined(&["a", "1", "z", "2"]), "[12az]");
}

#[test]
fn class_behind_shared_prefix() {
    assert_eq!(joined(&["aa", "ab"]), "a[ab]");
}

#[test]
fn class_releases_rune_for_longer_literal() {
    assert_eq!(joined(&["a", "c", "e", "ab", "cd", "ef"]), "ab?|cd?|ef?");
}

#[test]
fn three_adjacent_runes_fold_to_a_range() {
    assert_eq!(joined(&["aa", "ab", "ac"]), "a[a-c]");
}

#[test]
fn range_from_unordered_runes() {
    assert_eq!(joined(&["ac", "aa", "ae", "ab", "ad"]), "a[a-e]");
}

#[test]
fn digits() {
    assert_eq!(joined(&["1", "9", "2", "6", "3"]), "[1-369]");
}

#[test]
fn digits_with_a_two_rune_number() {
    assert_eq!(
        joined(&["1", "9", "2", "6", "3", "7", "10", "8", "0", "5", "4"]),
        "[0-9]|10"
    );
}

#[test]
fn digits_behind_a_prefix() {
    assert_eq!(
        joined(&[
            "a2", "a1", "a0", "a8", "a3", "a5", "a6", "a4", "a7", "a2", "a9", "a0", "a10"
        ]),
        "a(?:[0-9]|10)"
    );
}

// ---------------------------------------------------------------------
// Shared suffixes
// ---------------------------------------------------------------------

#[test]
fn shared_suffix() {
    assert_eq!(joined(&["abcde", "cde", "bde"]), "(?:(?:ab)?c|b)de");
}

#[test]
fn shared_suffix_in_increasing_length_order() {
    assert_eq!(
        joined(&["e", "de", "cde", "bcde", "abcde"]),
        "(?:d?|cd|bcd|abcd)e"
    );
}

#[test]
fn shared_suffix_in_decreasing_length_order() {
    assert_eq!(
        joined(&["abcde", "bcde", "cde", "de", "e"]),
        "(?:(?:(?:a?b)?c)?d)?e"
    );
}

#[test]
fn shared_quantified_suffixes() {
    assert_eq!(
        joined(&["ab*c", "aab?c", "a+c", "abc+", "bc+", "ab*c", "c+", "d?", "bcd?"]),
        "(?:ab*|aab?|a+)c|(?:a?b)?c+|(?:bc)?d?"
    );
}

#[test]
fn shared_literal_suffix_behind_quantifiers() {
    assert_eq!(
        joined(&["ab*cde", "bcde", "a*de", "cde"]),
        "(?:(?:ab*|b)c|a*|c)de"
    );
}

// ---------------------------------------------------------------------
// Quantified heads
// ---------------------------------------------------------------------

#[test]
fn pattern_extending_a_quantified_head() {
    assert_eq!(joined(&["a?", "a?b*c+"]), "a?(?:b*c+)?");
}

#[test]
fn shared_quantified_prefix() {
    assert_eq!(
        joined(&["a?b+cd", "a?b+c*", "a?b*c+"]),
        "a?(?:b+(?:cd|c*)|b*c+)"
    );
}

#[test]
fn nested_quantified_prefixes() {
    assert_eq!(
        joined(&["a?b+c*", "a?b+c*d*", "a?b+", "a?"]),
        "a?(?:b+(?:c*d*)?)?"
    );
}

// ---------------------------------------------------------------------
// Errors and the streaming entry
// ---------------------------------------------------------------------

#[test]
fn invalid_pattern_is_reported() {
    let err = join(["*"]).unwrap_err();
    assert!(err.to_string().contains('*'), "unexpected message: {err}");
}

#[test]
fn first_invalid_pattern_aborts() {
    assert!(join(["abc", "(", "def"]).is_err());
}

#[test]
fn streaming_joiner_matches_join() {
    let mut joiner = Joiner::new();
    assert!(joiner.is_empty());
    for pattern in ["abcd", "abcf", "abc", "abce"] {
        joiner.add(pattern).unwrap();
    }
    assert!(!joiner.is_empty());
    assert_eq!(joiner.into_pattern(), joined(&["abcd", "abcf", "abc", "abce"]));
}

#[test]
fn failed_add_leaves_accumulator_usable() {
    let mut joiner = Joiner::new();
    joiner.add("abc").unwrap();
    assert!(joiner.add("*").is_err());
    joiner.add("abd").unwrap();
    assert_eq!(joiner.into_pattern(), "ab[cd]");
}

// ---------------------------------------------------------------------
// Language-level properties
// ---------------------------------------------------------------------

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{pattern})$")).expect("pattern compiles")
}

/// All strings over the case's alphabet up to a small length, plus a rune
/// that appears in no pattern.
fn sample_inputs(patterns: &[&str]) -> Vec<String> {
    let mut alphabet: Vec<char> = patterns
        .iter()
        .flat_map(|p| p.chars())
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    alphabet.sort_unstable();
    alphabet.dedup();
    alphabet.push('~');
    let max_len = if alphabet.len() > 6 { 3 } else { 4 };

    let mut out = vec![String::new()];
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(layer.len() * alphabet.len());
        for prefix in &layer {
            for &c in &alphabet {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        out.extend(next.iter().cloned());
        layer = next;
    }
    out
}

#[test]
fn union_language_is_preserved() {
    for patterns in CASES {
        let assembled = anchored(&joined(patterns));
        let naive = anchored(&patterns.join("|"));
        for input in sample_inputs(patterns) {
            assert_eq!(
                assembled.is_match(&input),
                naive.is_match(&input),
                "assembly of {patterns:?} changed the language on {input:?}"
            );
        }
    }
}

#[test]
fn doubled_inputs_preserve_the_language() {
    for patterns in CASES {
        let doubled: Vec<&str> = patterns.iter().chain(patterns.iter()).copied().collect();
        let once = anchored(&joined(patterns));
        let twice = anchored(&joined(&doubled));
        for input in sample_inputs(patterns) {
            assert_eq!(
                once.is_match(&input),
                twice.is_match(&input),
                "doubling {patterns:?} changed the language on {input:?}"
            );
        }
    }
}

#[test]
fn doubled_inputs_keep_the_surface_form() {
    for patterns in SURFACE_STABLE {
        let doubled: Vec<&str> = patterns.iter().chain(patterns.iter()).copied().collect();
        assert_eq!(joined(&doubled), joined(patterns), "for {patterns:?}");
    }
}

#[test]
fn join_is_deterministic() {
    for patterns in CASES {
        assert_eq!(joined(patterns), joined(patterns));
    }
}
