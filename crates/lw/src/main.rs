//! lorewright CLI - tabletop content to Markdown vault converter.
//!
//! Provides commands for:
//! - `convert`: Convert source JSON files into vault documents
//! - `schema`: Show the effective frontmatter field order

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{ConvertArgs, SchemaArgs};
use output::Output;

/// lorewright - tabletop content to Markdown vault converter.
#[derive(Parser)]
#[command(name = "lw", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert source JSON files into documents.
    Convert(ConvertArgs),
    /// Print the frontmatter fields emitted for a content kind.
    Schema(SchemaArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = matches!(&cli.command, Commands::Convert(args) if args.verbose);

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Schema(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
