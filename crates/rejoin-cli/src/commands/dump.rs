use std::path::PathBuf;

use rejoin_lib::Joiner;

use super::pattern_input::load_patterns;

pub struct DumpArgs {
    pub patterns: Vec<String>,
    pub file: Option<PathBuf>,
}

pub fn run(args: DumpArgs) {
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

    println!("{:#?}", joiner.into_ast());
}
