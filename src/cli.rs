use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "verdict")]
#[command(about = "Classify news text, images and videos as real or fake", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to $VERDICT_CONFIG or config/verdict.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the classification service base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a news headline or article
    News(NewsArgs),
    /// Check an image for manipulation
    Image(FileArgs),
    /// Check a video for manipulation
    Video(FileArgs),
}

#[derive(clap::Args, Debug)]
pub struct NewsArgs {
    /// Text to classify
    pub text: String,
}

#[derive(clap::Args, Debug)]
pub struct FileArgs {
    /// File to upload
    pub path: Option<PathBuf>,
}
