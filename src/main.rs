/// Main entry point for the animal registry
///
/// This file sets up logging, parses command line arguments, and starts the
/// interactive menu on stdin/stdout.

use clap::Parser;
use tracing::info;

use animal_registry::{AnimalRegistryApp, AnswerMode, AppConfig};

/// Command line arguments for the animal registry
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Start with an empty registry instead of the sample animals
    #[arg(long)]
    no_samples: bool,

    /// Read "no" answers as true, matching the program this replaces
    #[arg(long)]
    legacy_yes_no: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> AppConfig {
        AppConfig {
            seed_samples: !self.no_samples,
            answer_mode: if self.legacy_yes_no {
                AnswerMode::Legacy
            } else {
                AnswerMode::Strict
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("animal_registry={}", log_level))
        .with_writer(std::io::stderr) // Keep stdout for the menu
        .init();

    info!("Starting animal registry");

    let mut app = AnimalRegistryApp::new(args.config())?;
    app.run().await?;

    info!("Animal registry shutdown complete");
    Ok(())
}
