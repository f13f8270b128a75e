use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use yadt::config::Config;
use yadt::{dataset, TranslatorEngine};

#[derive(Parser)]
#[command(name = "yadt")]
#[command(version, about = "Translate JSON datasets with smart language detection")]
#[command(
    long_about = "Batch-translate text fields in a JSON array of objects, skipping fields already in the target language, preserving originals, and marking translated records."
)]
struct Cli {
    /// Input JSON file (array of objects)
    #[arg(short, long, default_value = "data/input.sample.json")]
    input: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = "data/output.example.json")]
    output: PathBuf,

    /// Config TOML file (defaults to ~/.config/yadt/config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target language code (e.g. en, de, fr); overrides config
    #[arg(short, long)]
    target_language: Option<String>,

    /// Use the deterministic mock backend instead of the real API
    #[arg(long)]
    mock: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => Config::load().context("Failed to load configuration")?,
    };

    if let Some(lang) = cli.target_language {
        config.target_language = lang;
    }
    if cli.mock {
        config.mock_mode = true;
    }

    config.validate().context("Configuration validation failed")?;

    info!("Loading input dataset from {}", cli.input.display());
    let items = dataset::load_items(&cli.input).context("Failed to load input dataset")?;

    let engine = TranslatorEngine::from_config(&config).with_progress(!cli.verbose);
    info!(
        "Translating {} items to '{}' (backend: {})",
        items.len(),
        config.target_language,
        engine.backend_name()
    );

    let translated = engine.translate_dataset(&items).await;

    info!("Writing translated items to {}", cli.output.display());
    dataset::write_items(&cli.output, &translated).context("Failed to write output dataset")?;

    info!("Done. Translated items written to {}", cli.output.display());
    Ok(())
}
