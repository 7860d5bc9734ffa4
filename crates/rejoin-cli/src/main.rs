mod cli;
mod commands;

use cli::{Cli, Command};
use commands::dump::DumpArgs;
use commands::join::JoinArgs;

fn main() {
    let cli = <Cli as clap::Parser>::parse();

    match cli.command {
        Command::Join {
            patterns,
            file,
            check,
        } => {
            commands::join::run(JoinArgs {
                patterns,
                file,
                check,
            });
        }
        Command::Dump { patterns, file } => {
            commands::dump::run(DumpArgs { patterns, file });
        }
    }
}
