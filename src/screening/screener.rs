//! Screening service: extraction, matching and verdicts

use crate::input::manager::InputManager;
use crate::output::report::{ScreeningReport, Verdict};
use crate::screening::blacklist::Blacklist;
use crate::screening::matcher::{is_fake_resume, MatchResult};
use chrono::Utc;
use log::{debug, info, warn};
use std::path::Path;

pub struct Screener {
    blacklist: Blacklist,
    input_manager: InputManager,
}

impl Screener {
    pub fn new(blacklist: Blacklist) -> Self {
        Self {
            blacklist,
            input_manager: InputManager::new(),
        }
    }

    /// Screen one file. Extraction failures become an unscreened report
    /// instead of an error so the rest of a batch still runs.
    pub async fn screen_file(&self, path: &Path) -> ScreeningReport {
        let resume = display_name(path);
        let path_str = path.to_string_lossy().to_string();

        match self.input_manager.extract_text(path).await {
            Ok(text) => self.screen_text(&resume, &path_str, &text),
            Err(e) => {
                warn!("Could not extract text from {}: {}", path.display(), e);
                Self::unscreened(resume, path_str, 0, e.to_string())
            }
        }
    }

    /// Screen an in-memory upload
    pub fn screen_bytes(&self, file_name: &str, bytes: &[u8]) -> ScreeningReport {
        match self.input_manager.extract_bytes(file_name, bytes) {
            Ok(text) => self.screen_text(file_name, file_name, &text),
            Err(e) => {
                warn!("Could not extract text from upload {}: {}", file_name, e);
                Self::unscreened(file_name.to_string(), file_name.to_string(), 0, e.to_string())
            }
        }
    }

    pub fn screen_text(&self, resume: &str, path: &str, text: &str) -> ScreeningReport {
        let characters_extracted = text.chars().count();

        if text.trim().is_empty() {
            warn!("No readable text in {}, leaving it unscreened", resume);
            return Self::unscreened(
                resume.to_string(),
                path.to_string(),
                characters_extracted,
                "no readable text extracted".to_string(),
            );
        }

        let result = is_fake_resume(text, self.blacklist.terms());
        let verdict = match &result {
            MatchResult::Match { matched_term, .. } => {
                info!("{} mentions blacklisted company '{}'", resume, matched_term);
                Verdict::Fake
            }
            MatchResult::NoMatch => {
                debug!("{} has no blacklisted employers", resume);
                Verdict::Genuine
            }
        };

        ScreeningReport {
            resume: resume.to_string(),
            path: path.to_string(),
            verdict,
            result,
            characters_extracted,
            note: None,
            screened_at: Utc::now(),
        }
    }

    fn unscreened(resume: String, path: String, characters: usize, note: String) -> ScreeningReport {
        ScreeningReport {
            resume,
            path,
            verdict: Verdict::Unscreened,
            result: MatchResult::NoMatch,
            characters_extracted: characters,
            note: Some(note),
            screened_at: Utc::now(),
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
