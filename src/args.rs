use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Clone)]
#[command(
    display_name = "hof Processor",
    author = "hall of fame",
    long_about = "Builds match histories and the cross-tournament leaderboard for the guessing-game tournament series"
)]
pub struct Args {
    /// Path to the dataset JSON document: tournament records plus scoring
    /// rules, honors, aliases and avatar configuration
    #[arg(short, long, env = "DATASET_PATH", help = "Path to the dataset JSON document")]
    pub dataset: PathBuf,

    /// Emit only the leaderboard instead of the full processing result
    #[arg(short, long, action = clap::ArgAction::SetTrue)]
    pub leaderboard_only: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
