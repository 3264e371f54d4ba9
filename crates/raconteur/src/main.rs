//! Raconteur CLI - turn an image URL into a short narrated story.
//!
//! Raconteur captions the image behind a URL, spins the caption into a short
//! story via hosted text-generation models (with automatic fallback between
//! candidates), and synthesizes speech audio from the story.
//!
//! # Usage
//!
//! ```bash
//! # Narrate an image
//! raconteur tell https://example.com/cat.jpg
//!
//! # Choose where the audio lands, keep a JSON record of the run
//! raconteur tell https://example.com/cat.jpg --audio-out out/cat.flac --record run.json
//!
//! # View configuration
//! raconteur config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Raconteur - turn an image URL into a short narrated story.
#[derive(Parser, Debug)]
#[command(name = "raconteur")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Caption an image URL, generate a story, and narrate it
    Tell(cli::tell::TellArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The inference token may live in a local .env rather than the shell
    let _ = dotenvy::dotenv();

    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match raconteur_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `raconteur config path`."
            );
            raconteur_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Raconteur v{}", raconteur_core::VERSION);

    match cli.command {
        Commands::Tell(args) => cli::tell::execute(args).await,
        Commands::Config(args) => cli::config::execute(args).await,
    }
}
