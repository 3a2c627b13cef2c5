mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{entries, init, lines, map, EntriesArgs, InitArgs, LinesArgs, MapArgs};
use tracing::Level;

/// Apparatus CLI - line numbers and lemma references for typeset editions
#[derive(Parser, Debug)]
#[command(name = "apparatus")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug information to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an apparatus.config.json and an example token file
    Init(InitArgs),

    /// Assign line numbers and occurrence counts to measured tokens
    Map(MapArgs),

    /// List the margin line-number labels for measured tokens
    Lines(LinesArgs),

    /// Format apparatus entries against measured tokens
    Entries(EntriesArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Map(args) => map(args, &cwd),
        Command::Lines(args) => lines(args, &cwd),
        Command::Entries(args) => entries(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
