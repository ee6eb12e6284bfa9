//! Configuration management for the resume screener

use crate::error::{Result, ResumeScreenerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub screening: ScreeningConfig,
    pub results: ResultsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    /// CSV (first column, header row) or plain list of fake company names
    pub blacklist_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsConfig {
    pub output_dir: PathBuf,
    pub fake_file: String,
    pub genuine_file: String,
    pub unscreened_file: String,
    /// Append every verdict to the CSV ledgers
    pub record: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = Self::data_dir();

        Self {
            screening: ScreeningConfig {
                blacklist_path: data_dir.join("fake_companies.csv"),
            },
            results: ResultsConfig {
                output_dir: data_dir.join("results"),
                fake_file: "Fake_Results.csv".to_string(),
                genuine_file: "Genuine_Results.csv".to_string(),
                unscreened_file: "Unscreened_Results.csv".to_string(),
                record: true,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from `config_path`, writing defaults there on first run
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeScreenerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeScreenerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-screener")
            .join("config.toml")
    }

    fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".resume-screener")
    }

    /// Update one setting by its dotted key, e.g. `results.output_dir`
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "screening.blacklist_path" => self.screening.blacklist_path = PathBuf::from(value),
            "results.output_dir" => self.results.output_dir = PathBuf::from(value),
            "results.fake_file" => self.results.fake_file = value.to_string(),
            "results.genuine_file" => self.results.genuine_file = value.to_string(),
            "results.unscreened_file" => self.results.unscreened_file = value.to_string(),
            "results.record" => self.results.record = parse_bool(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(ResumeScreenerError::Configuration)?
            }
            "output.detailed" => self.output.detailed = parse_bool(key, value)?,
            "output.color_output" => self.output.color_output = parse_bool(key, value)?,
            _ => {
                return Err(ResumeScreenerError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ResumeScreenerError::Configuration(format!(
            "Expected a boolean for {}, got '{}'",
            key, value
        ))),
    }
}
