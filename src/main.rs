use clap::Parser;
use hof_processor::{args::Args, data::Dataset, model::process_dataset};
use tracing::error;

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&args.log_level))
        .init();

    let dataset = match Dataset::from_file(&args.dataset) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("Failed to load dataset from {}: {}", args.dataset.display(), e);
            std::process::exit(1);
        }
    };

    let result = process_dataset(&dataset);

    let output = if args.leaderboard_only {
        serde_json::to_string_pretty(&result.leaderboard)
    } else {
        serde_json::to_string_pretty(&result)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize processing result: {}", e);
            std::process::exit(1);
        }
    }
}
