use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rejoin", bin_name = "rejoin")]
#[command(about = "Assemble many regular expressions into one compact union pattern")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Join patterns into a single union pattern
    #[command(
        override_usage = "\
  rejoin join <PATTERN>...
  rejoin join -f <FILE>",
        after_help = r#"EXAMPLES:
  rejoin join abcd abcf abc abce       # abc[d-f]?
  rejoin join -f patterns.txt          # one pattern per line
  cat patterns.txt | rejoin join -f -  # read from stdin"#
    )]
    Join {
        /// Patterns to assemble
        #[arg(value_name = "PATTERN")]
        patterns: Vec<String>,

        /// Read patterns from a file, one per line ("-" for stdin)
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        file: Option<PathBuf>,

        /// Recompile the assembled pattern and fail if it is rejected
        #[arg(long)]
        check: bool,
    },

    /// Show the assembled syntax tree instead of pattern text
    #[command(after_help = r#"EXAMPLES:
  rejoin dump abcd abcf                # tree behind abc[df]
  rejoin dump -f patterns.txt"#)]
    Dump {
        /// Patterns to assemble
        #[arg(value_name = "PATTERN")]
        patterns: Vec<String>,

        /// Read patterns from a file, one per line ("-" for stdin)
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        file: Option<PathBuf>,
    },
}
