use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "promptgauge",
    version,
    about = "Prompt quality scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Score(ScoreCommand),
    Check(CheckCommand),
    Catalog(CatalogCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Bar,
    Md,
    Json,
}

#[derive(Clone, ValueEnum)]
pub enum CatalogFormat {
    Md,
    Json,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Prompt text; reads --file or stdin when omitted
    pub text: Vec<String>,

    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "bar")]
    pub format: ReportFormat,

    /// Template catalog file (defaults to ./promptgauge.toml when present)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Prompt text; reads --file or stdin when omitted
    pub text: Vec<String>,

    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Minimum acceptable score
    #[arg(long, default_value_t = 50)]
    pub min_score: u8,

    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct CatalogCommand {
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: CatalogFormat,
}
