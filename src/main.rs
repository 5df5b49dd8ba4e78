mod cli;
mod render;

use clap::Parser;
use cli::{Cli, Commands};
use std::process::ExitCode;
use verdict::config::Config;
use verdict::observability;
use verdict::pipeline::{Classifier, FileInput};

type AnyError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<ExitCode, AnyError> {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url)?;
    }

    observability::init(&config.logging);
    tracing::debug!(base_url = %config.service.base_url, "Configuration loaded");

    let classifier = Classifier::new(&config.service)?;

    let result = match cli.command {
        Commands::News(args) => classifier.submit_text(args.text).await,
        Commands::Image(args) => classifier.submit_image(read_files(args.path).await?).await,
        Commands::Video(args) => classifier.submit_video(read_files(args.path).await?).await,
    };

    let (text, is_error) = render::render(&result);
    if is_error {
        eprint!("{}", text);
        return Ok(ExitCode::FAILURE);
    }

    print!("{}", text);
    Ok(ExitCode::SUCCESS)
}

async fn read_files(path: Option<std::path::PathBuf>) -> Result<Vec<FileInput>, AnyError> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let file = FileInput::from_path(&path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    Ok(vec![file])
}
