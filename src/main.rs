mod blame;
mod chart;
mod git_commands;
mod grouping;
mod msg;
mod repo;
mod report;
mod tally;

#[cfg(test)]
mod test_helpers;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use colored::control;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "git-tally",
    about = "Tally line ownership per author or author group"
)]
struct Cli {
    /// Path to the Git repository to analyze
    repo_path: PathBuf,

    /// Grouping file mapping author aliases to group names
    /// (defaults to grouping.txt next to the executable)
    #[arg(long = "grouping-file", value_name = "PATH")]
    grouping_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color
        || std::env::var_os("NO_COLOR").is_some()
        || std::env::var_os("TERM").is_some_and(|v| v == "dumb")
        || !std::io::stdout().is_terminal()
    {
        control::set_override(false);
    }

    if let Err(e) = git_commands::check_git_available() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }

    if let Err(e) = tally::run(&cli.repo_path, cli.grouping_file.as_deref()) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
