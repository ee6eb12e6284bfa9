//! CLI interface for the resume screener

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-screener")]
#[command(about = "Screen resumes for employers on a fake-company blacklist")]
#[command(long_about = "Extract text from PDF, DOCX, TXT and Markdown resumes, flag any that mention a blacklisted company, and record every verdict to CSV")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Screen resumes against the blacklist
    Screen {
        /// Resume files or directories of resumes (PDF, DOCX, DOC, TXT, MD)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Blacklist file, overriding the configured one (CSV or one name per line)
        #[arg(short, long)]
        blacklist: Option<PathBuf>,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,

        /// Save the rendered output to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Do not append verdicts to the results ledgers
        #[arg(long)]
        no_record: bool,

        /// Show extraction details for every resume
        #[arg(short, long)]
        detailed: bool,
    },

    /// Show the normalized blacklist
    Blacklist {
        /// Blacklist file, overriding the configured one
        #[arg(short, long)]
        blacklist: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "results.output_dir")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}
