//! Cuke Report CLI
//!
//! Turns a Cucumber JSON result document into statistics,
//! an HTML report and a spreadsheet.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use cuke_report::commands::{
    display_version, execute_generate, validate_args, validate_results_file, GenerateArgs,
};

/// Cuke Report - reports from Cucumber JSON results
#[derive(Parser, Debug)]
#[command(name = "cuke-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate a result document and write the requested reports
    Generate {
        /// Config file (TOML, or JSON with a .json extension)
        #[arg(short, long, env = "CUKE_REPORT_CONFIG")]
        config: Option<PathBuf>,

        /// Cucumber JSON result document
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Report format to produce (html, xlsx, json); repeatable
        #[arg(short, long = "format")]
        formats: Vec<String>,

        /// Directory for rendered reports
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Directory for decoded screenshots
        #[arg(long)]
        screenshots_dir: Option<PathBuf>,

        /// Spreadsheet header prefix
        #[arg(long)]
        title: Option<String>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a result document and print its statistics
    Validate {
        /// Path to Cucumber JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Generate {
            config,
            input,
            formats,
            output_dir,
            screenshots_dir,
            title,
            summary,
        } => {
            let args = GenerateArgs {
                config_file: config,
                input,
                formats,
                output_dir,
                screenshots_dir,
                title,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_generate(args)?;
        }

        Commands::Validate { file } => {
            validate_results_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
