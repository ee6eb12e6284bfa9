//! Screening report structures

use crate::screening::matcher::MatchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final classification of one resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    /// Mentions a blacklisted employer
    Fake,
    /// Text was read and nothing matched
    Genuine,
    /// No usable text could be extracted, so the resume was never checked
    Unscreened,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Fake => "FAKE",
            Verdict::Genuine => "GENUINE",
            Verdict::Unscreened => "UNSCREENED",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    /// File name shown to reviewers and written to the results ledger
    pub resume: String,
    pub path: String,
    pub verdict: Verdict,
    pub result: MatchResult,
    pub characters_extracted: usize,
    /// Why the resume is unscreened, when it is
    pub note: Option<String>,
    pub screened_at: DateTime<Utc>,
}

impl ScreeningReport {
    pub fn matched_term(&self) -> Option<&str> {
        self.result.matched_term()
    }

    pub fn source_line(&self) -> Option<&str> {
        self.result.source_line()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub fake: usize,
    pub genuine: usize,
    pub unscreened: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[ScreeningReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            summary.total += 1;
            match report.verdict {
                Verdict::Fake => summary.fake += 1,
                Verdict::Genuine => summary.genuine += 1,
                Verdict::Unscreened => summary.unscreened += 1,
            }
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(verdict: Verdict) -> ScreeningReport {
        ScreeningReport {
            resume: "cv.pdf".to_string(),
            path: "cv.pdf".to_string(),
            verdict,
            result: MatchResult::NoMatch,
            characters_extracted: 0,
            note: None,
            screened_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_counts_each_verdict() {
        let reports = vec![
            report(Verdict::Fake),
            report(Verdict::Genuine),
            report(Verdict::Genuine),
            report(Verdict::Unscreened),
        ];

        let summary = BatchSummary::from_reports(&reports);
        assert_eq!(
            summary,
            BatchSummary { total: 4, fake: 1, genuine: 2, unscreened: 1 }
        );
    }

    #[test]
    fn test_verdict_labels() {
        assert_eq!(Verdict::Fake.to_string(), "FAKE");
        assert_eq!(serde_json::to_string(&Verdict::Unscreened).unwrap(), "\"UNSCREENED\"");
    }
}
