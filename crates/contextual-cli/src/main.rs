use clap::{Parser, Subcommand};

mod commands;
mod venues;

#[derive(Parser)]
#[command(name = "contextual-cli", version, about = "Contextual CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the moment catalog at a location
    Evaluate(commands::evaluate::EvaluateArgs),
    /// Fire a moment by its manual trigger id
    Trigger(commands::trigger::TriggerArgs),
    /// Build a user-facing plan (local or remote)
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Memory store management
    Memory {
        #[command(subcommand)]
        action: commands::memory::MemoryAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// List known demo venues
    Venues,
}

fn init_tracing() {
    let filter = contextual_core::Config::load()
        .map(|c| c.log_filter)
        .unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Evaluate(args) => commands::evaluate::run(args),
        Commands::Trigger(args) => commands::trigger::run(args),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Memory { action } => commands::memory::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Venues => commands::venues_list(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
