mod analyze;
mod cli;
mod config;
mod error;
mod keywords;
mod report;
mod types;

use crate::error::{GaugeError, Result};
use crate::keywords::KeywordSets;
use clap::Parser;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_MIN: i32 = 1;
    pub const DEGENERATE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let sets = load_keyword_sets(cmd.catalog.as_deref())?;
            let text = read_input(&cmd.text, cmd.file.as_deref())?;
            let evaluation = analyze::evaluate(&text, &sets);
            let score_report = types::report::ScoreReport::new(&evaluation);

            let output_format = match cmd.format {
                cli::ReportFormat::Bar => report::OutputFormat::Bar,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Json => report::OutputFormat::Json,
            };
            let rendered = report::render(&score_report, output_format)?;
            println!("{rendered}");

            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let sets = load_keyword_sets(cmd.catalog.as_deref())?;
            let text = read_input(&cmd.text, cmd.file.as_deref())?;
            let evaluation = analyze::evaluate(&text, &sets);

            println!(
                "score: {}/100 (minimum {})",
                evaluation.score, cmd.min_score
            );

            if let Some(reason) = evaluation.degeneracy {
                eprintln!("degenerate input: {reason}");
                Ok(exit_code::DEGENERATE)
            } else if evaluation.score < cmd.min_score {
                Ok(exit_code::BELOW_MIN)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Catalog(cmd) => {
            let sets = load_keyword_sets(cmd.catalog.as_deref())?;

            match cmd.format {
                cli::CatalogFormat::Md => {
                    println!("action keywords ({}):", keywords::ACTION_KEYWORDS.len());
                    for keyword in keywords::ACTION_KEYWORDS {
                        println!("- {keyword}");
                    }
                    let terms = sets.tech_terms_sorted();
                    println!();
                    println!("technology terms ({}):", terms.len());
                    for term in terms {
                        println!("- {term}");
                    }
                }
                cli::CatalogFormat::Json => {
                    let listing = serde_json::json!({
                        "action_keywords": keywords::ACTION_KEYWORDS,
                        "technology_terms": sets.tech_terms_sorted(),
                    });
                    println!("{}", serde_json::to_string_pretty(&listing)?);
                }
            }

            Ok(exit_code::SUCCESS)
        }
    }
}

fn load_keyword_sets(catalog_path: Option<&Path>) -> Result<KeywordSets> {
    let catalog = config::load_catalog(Path::new("."), catalog_path)?;
    let templates = config::resolve_templates(catalog.as_ref());
    KeywordSets::build(&templates)
}

fn read_input(text: &[String], file: Option<&Path>) -> Result<String> {
    if !text.is_empty() {
        return Ok(text.join(" "));
    }
    if let Some(path) = file {
        if !path.exists() {
            return Err(GaugeError::PathNotFound(path.display().to_string()));
        }
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
