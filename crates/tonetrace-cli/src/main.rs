//! Tonetrace CLI - Command-line interface for radio-tone envelope extraction.

mod commands;
mod plot;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tonetrace")]
#[command(author, version, about = "Radio-tone envelope extraction CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the smoothed power envelope of a recording
    Trace(commands::trace::TraceArgs),

    /// Show the band-limited spectrum and its confirmed peaks
    Spectrum(commands::spectrum::SpectrumArgs),

    /// Display WAV file metadata
    Info(commands::info::InfoArgs),

    /// Generate test signals
    Generate(commands::generate::GenerateArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Trace(args) => commands::trace::run(args),
        Commands::Spectrum(args) => commands::spectrum::run(args),
        Commands::Info(args) => commands::info::run(args),
        Commands::Generate(args) => commands::generate::run(args),
    }
}
