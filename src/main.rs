use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use gallery_scrapping::{extract_gallery, load_config, AppConfig};

/// Extract the artwork gallery of a saved search-results page into a JSON file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Saved HTML page (defaults to `file.input_path` of the settings)
    input: Option<String>,

    /// JSON file to write (defaults to `file.output_path` of the settings)
    output: Option<String>,

    /// TOML settings file; `Settings.toml` is used when present
    #[arg(short, long)]
    config: Option<String>,

    /// Abort on the first artwork that cannot be parsed
    #[arg(long)]
    strict: bool,

    /// Log every skipped artwork
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", format!("{:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = settings(cli)?;
    let input_path = config.file.input_path;
    let output_path = config.file.output_path;

    let written = extract_gallery(&input_path, &output_path, &config.gallery)?;
    if written {
        println!("{}", format!("Artworks written to {}", output_path).green());
    } else {
        println!("{}", format!("No output written for {}", input_path).yellow());
    }

    Ok(written)
}

/// Loads the settings file and applies the command-line overrides.
fn settings(cli: Cli) -> Result<AppConfig> {
    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.strict {
        config.gallery.skip_on_error = false;
    }
    if let Some(input) = cli.input {
        config.file.input_path = input;
    }
    if let Some(output) = cli.output {
        config.file.output_path = output;
    }

    Ok(config)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(default_level))
        .with_writer(std::io::stderr)
        .init();
}
