use std::path::PathBuf;

use rejoin_lib::Joiner;

use super::pattern_input::load_patterns;

pub struct JoinArgs {
    pub patterns: Vec<String>,
    pub file: Option<PathBuf>,
    pub check: bool,
}

pub fn run(args: JoinArgs) {
    let patterns = load_patterns(args.patterns, args.file.as_deref()).unwrap_or_else(|msg| {
        eprintln!("error: {msg}");
        std::process::exit(1);
    });

    let mut joiner = Joiner::new();
    for pattern in &patterns {
        if let Err(e) = joiner.add(pattern) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
    let pattern = joiner.into_pattern();

    if args.check {
        if let Err(e) = regex_automata::meta::Regex::new(&pattern) {
            eprintln!("error: assembled pattern failed to recompile: {e}");
            eprintln!("pattern: {pattern}");
            std::process::exit(1);
        }
    }

    println!("{pattern}");
}
