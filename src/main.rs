use clap::Parser;

use crate::cli::{Cli, Commands};

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG controls verbosity, e.g. RUST_LOG=crt_filter=debug for per-pass timings
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, output, config, time, nearest } => {
            cli::render(&input, &output, config.as_deref(), time, nearest)?
        }
        Commands::Preview { input, config, nearest } => cli::preview(&input, config.as_deref(), nearest)?,
        Commands::Defaults => cli::print_defaults()?,
    }

    Ok(())
}
