mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "realcheck", about = "Check whether an image is camera-captured or AI-generated")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an image to the classification service and show the verdict
    Detect(commands::detect::DetectArgs),
    /// Interpret a raw service response without contacting the service
    Interpret(commands::interpret::InterpretArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Detect(args) => commands::detect::run(args),
        Commands::Interpret(args) => commands::interpret::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
