use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod rewrite;

#[derive(Parser)]
#[command(name = "uifix")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Batch codemods for the app's UI component files",
    long_about = "One-shot rewrite passes over the UI component tree - swaps the \
                  electric/cyan accent gradient for the darker blue palette and \
                  strips leftover required-field markup from the forms."
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, text, markdown)
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Markdown,
}

#[derive(Subcommand)]
enum Commands {
    /// Swap the electric/cyan accent gradient for the darker blue palette
    Recolor {
        /// Directory to rewrite (defaults to app/)
        path: Option<PathBuf>,
    },

    /// Strip required attributes and label asterisks from form markup
    RemoveRequired {
        /// Directory to rewrite (defaults to app/)
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("uifix=debug")
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("uifix=info")
            .init();
    }

    // Execute command
    match cli.command {
        Commands::Recolor { path } => commands::recolor::run(path, &cli.format)?,
        Commands::RemoveRequired { path } => commands::remove_required::run(path, &cli.format)?,
    }

    Ok(())
}
