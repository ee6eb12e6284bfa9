//! Resume screener: flag resumes that mention blacklisted employers

use clap::Parser;
use log::{error, info, warn};
use resume_screener::cli::{self, Cli, Commands, ConfigAction};
use resume_screener::config::{Config, OutputFormat};
use resume_screener::error::{Result, ResumeScreenerError};
use resume_screener::input::manager::{discover_resumes, validate_file_extension};
use resume_screener::output::formatter::{save_report_to_file, ReportGenerator};
use resume_screener::output::ledger::ResultsLedger;
use resume_screener::screening::blacklist::Blacklist;
use resume_screener::screening::screener::Screener;
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    // Load configuration
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, config_path: &Path) -> Result<()> {
    match command {
        Commands::Screen {
            paths,
            blacklist,
            output,
            save,
            no_record,
            detailed,
        } => {
            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(ResumeScreenerError::InvalidInput)?,
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            let record = config.results.record && !no_record;
            let console = output_format == OutputFormat::Console && save.is_none();

            for path in paths.iter().filter(|p| p.is_file()) {
                validate_file_extension(path).map_err(ResumeScreenerError::InvalidInput)?;
            }

            let blacklist_path = blacklist.unwrap_or_else(|| config.screening.blacklist_path.clone());
            let blacklist = Blacklist::load(&blacklist_path).await?;

            let resumes = discover_resumes(&paths).await?;
            if resumes.is_empty() {
                return Err(ResumeScreenerError::InvalidInput(
                    "No resumes found in the given paths".to_string(),
                ));
            }

            if console {
                println!("🚀 Resume screening");
                println!("🏢 Blacklist: {} ({} companies)", blacklist_path.display(), blacklist.len());
                println!("📂 Resumes to screen: {}", resumes.len());
            }
            info!("Screening {} resumes", resumes.len());

            let screener = Screener::new(blacklist);
            let ledger = ResultsLedger::from_config(&config.results);
            let mut reports = Vec::with_capacity(resumes.len());

            for resume in &resumes {
                reports.push(screener.screen_file(resume).await);
            }

            let unrecorded = if record { ledger.record_batch(&reports) } else { 0 };

            let generator = ReportGenerator::with_options(config.output.color_output && save.is_none(), detailed, true);
            let rendered = generator.generate_report(&reports, &output_format)?;

            match save {
                Some(save_path) => {
                    save_report_to_file(&rendered, &save_path)?;
                    println!("💾 Results saved to {}", save_path.display());
                }
                None => println!("{}", rendered),
            }

            if unrecorded > 0 {
                warn!(
                    "{} of {} verdicts could not be recorded under {}",
                    unrecorded,
                    reports.len(),
                    config.results.output_dir.display()
                );
            } else if record && console {
                println!("🗂️  Verdicts recorded under {}", config.results.output_dir.display());
            }
        }

        Commands::Blacklist { blacklist } => {
            let blacklist_path = blacklist.unwrap_or_else(|| config.screening.blacklist_path.clone());
            let blacklist = Blacklist::load(&blacklist_path).await?;

            println!("🏢 Blacklist: {}\n", blacklist_path.display());
            for (i, term) in blacklist.terms().iter().enumerate() {
                println!("  {}. {}", i + 1, term);
            }
            println!("\n{} companies", blacklist.len());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Blacklist: {}", config.screening.blacklist_path.display());
                println!("Results Directory: {}", config.results.output_dir.display());
                println!("  Fake: {}", config.results.fake_file);
                println!("  Genuine: {}", config.results.genuine_file);
                println!("  Unscreened: {}", config.results.unscreened_file);
                println!("  Recording: {}", if config.results.record { "on" } else { "off" });
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set(&key, &value)?;
                config.save_to(config_path)?;
                println!("🔧 Set {} = {}", key, value);
                if key == "screening.blacklist_path" && !PathBuf::from(&value).exists() {
                    warn!("Blacklist file does not exist yet: {}", value);
                }
            }
        },
    }

    Ok(())
}
