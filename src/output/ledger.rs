//! Append-only CSV ledgers of screening verdicts, one file per verdict

use crate::config::ResultsConfig;
use crate::error::Result;
use crate::output::report::{ScreeningReport, Verdict};
use log::{debug, warn};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

const FAKE_HEADER: &[&str] = &["Resume", "Matched Fake Company", "Line", "Result", "Screened At"];
const GENUINE_HEADER: &[&str] = &["Resume", "Result", "Screened At"];
const UNSCREENED_HEADER: &[&str] = &["Resume", "Result", "Reason", "Screened At"];

#[derive(Debug, Clone)]
pub struct ResultsLedger {
    fake_path: PathBuf,
    genuine_path: PathBuf,
    unscreened_path: PathBuf,
}

impl ResultsLedger {
    pub fn new(output_dir: &Path, fake_file: &str, genuine_file: &str, unscreened_file: &str) -> Self {
        Self {
            fake_path: output_dir.join(fake_file),
            genuine_path: output_dir.join(genuine_file),
            unscreened_path: output_dir.join(unscreened_file),
        }
    }

    pub fn from_config(config: &ResultsConfig) -> Self {
        Self::new(
            &config.output_dir,
            &config.fake_file,
            &config.genuine_file,
            &config.unscreened_file,
        )
    }

    pub fn path_for(&self, verdict: Verdict) -> &Path {
        match verdict {
            Verdict::Fake => &self.fake_path,
            Verdict::Genuine => &self.genuine_path,
            Verdict::Unscreened => &self.unscreened_path,
        }
    }

    /// Append one row for the report and return the ledger it went to
    pub fn record(&self, report: &ScreeningReport) -> Result<PathBuf> {
        let path = self.path_for(report.verdict);
        let verdict = report.verdict.to_string();
        let screened_at = report.screened_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();

        let (header, row): (&[&str], Vec<&str>) = match report.verdict {
            Verdict::Fake => (
                FAKE_HEADER,
                vec![
                    report.resume.as_str(),
                    report.matched_term().unwrap_or_default(),
                    report.source_line().unwrap_or_default(),
                    verdict.as_str(),
                    screened_at.as_str(),
                ],
            ),
            Verdict::Genuine => (
                GENUINE_HEADER,
                vec![report.resume.as_str(), verdict.as_str(), screened_at.as_str()],
            ),
            Verdict::Unscreened => (
                UNSCREENED_HEADER,
                vec![
                    report.resume.as_str(),
                    verdict.as_str(),
                    report.note.as_deref().unwrap_or_default(),
                    screened_at.as_str(),
                ],
            ),
        };

        append_row(path, header, &row)?;
        debug!("Recorded {} as {} in {}", report.resume, verdict, path.display());
        Ok(path.to_path_buf())
    }

    /// Record every report, logging rows that cannot be written and moving
    /// on. Returns the number of reports left unrecorded.
    pub fn record_batch(&self, reports: &[ScreeningReport]) -> usize {
        let mut failed = 0;
        for report in reports {
            if let Err(e) = self.record(report) {
                warn!("Could not record {} in {}: {}", report.resume, self.path_for(report.verdict).display(), e);
                failed += 1;
            }
        }
        failed
    }
}

fn append_row(path: &Path, header: &[&str], row: &[&str]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let needs_header = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    if needs_header {
        writer.write_record(header)?;
    }
    writer.write_record(row)?;
    writer.flush()?;
    Ok(())
}
