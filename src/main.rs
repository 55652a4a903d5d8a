use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use recipebox::{Settings, ThemeChoice};

#[derive(Parser)]
#[command(name = "recipebox")]
#[command(about = "Keep a small box of recipes")]
struct Cli {
    /// JSON file with the recipes to start with (read only)
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Colour theme of the window
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let mut settings = Settings {
        theme: args.theme,
        ..Settings::default()
    };
    if let Some(seed) = args.seed {
        info!("Loading seed recipes from {:?}", seed);
        settings = settings.with_seed_file(seed)?;
    }

    recipebox::gui::run(settings)
}
