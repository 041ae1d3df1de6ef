use clap::{Parser, Subcommand};
use dayfeed_core::Config;

mod commands;
mod logging;
mod render;

#[derive(Parser)]
#[command(name = "dayfeed", version, about = "Day tracker and RSS reader")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sunrise, sunset and daylight for a place
    Day {
        #[command(subcommand)]
        action: commands::day::DayAction,
    },
    /// RSS feed reader
    Feed {
        #[command(subcommand)]
        action: commands::feed::FeedAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    if let Err(e) = logging::init_tracing(&config.logging) {
        eprintln!("warning: {e}");
    }

    let result = match cli.command {
        Commands::Day { action } => commands::day::run(action, &config).await,
        Commands::Feed { action } => commands::feed::run(action, &config).await,
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
