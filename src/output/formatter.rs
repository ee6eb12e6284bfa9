//! Rendering screening results for the console or as JSON

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{BatchSummary, ScreeningReport, Verdict};
use colored::{Color, Colorize};
use serde::Serialize;
use std::path::Path;

const MAX_LINE_DISPLAY: usize = 160;

pub trait OutputFormatter {
    fn format_reports(&self, reports: &[ScreeningReport]) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

#[derive(Serialize)]
struct JsonBatch<'a> {
    summary: BatchSummary,
    reports: &'a [ScreeningReport],
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "█".color(Color::Blue).bold(), title.color(Color::Blue).bold())
        } else {
            format!("\n█ {}\n", title)
        }
    }

    fn format_verdict_badge(&self, verdict: Verdict) -> String {
        let (icon, text_icon, color) = match verdict {
            Verdict::Fake => ("❌", "[!]", Color::Red),
            Verdict::Genuine => ("✅", "[+]", Color::Green),
            Verdict::Unscreened => ("⚠️ ", "[?]", Color::Yellow),
        };

        if self.use_colors {
            format!("{} {}", icon, verdict.to_string().color(color).bold())
        } else {
            format!("{} {}", text_icon, verdict)
        }
    }

    fn format_report(&self, report: &ScreeningReport) -> String {
        let mut output = format!("{} {}\n", self.format_verdict_badge(report.verdict), report.resume);

        match report.verdict {
            Verdict::Fake => {
                if let Some(term) = report.matched_term() {
                    output.push_str(&format!("    Found: '{}'\n", self.colorize(term, Color::Red)));
                }
                if let Some(line) = report.source_line() {
                    output.push_str(&format!("    Line:  {}\n", truncate_text(line, MAX_LINE_DISPLAY)));
                }
            }
            Verdict::Unscreened => {
                if let Some(note) = &report.note {
                    output.push_str(&format!("    Reason: {}\n", note));
                }
                output.push_str("    Review this resume manually\n");
            }
            Verdict::Genuine => {}
        }

        if self.detailed {
            output.push_str(&format!(
                "    Path: {} | Characters extracted: {} | Screened: {}\n",
                report.path,
                report.characters_extracted,
                report.screened_at.format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_reports(&self, reports: &[ScreeningReport]) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📄 RESUME SCREENING RESULTS"));
        for report in reports {
            output.push_str(&self.format_report(report));
        }

        let summary = BatchSummary::from_reports(reports);
        output.push_str(&self.format_header("Summary"));
        output.push_str(&format!(
            "Screened: {} | {}: {} | {}: {} | {}: {}\n",
            summary.total,
            self.colorize("Fake", Color::Red),
            summary.fake,
            self.colorize("Genuine", Color::Green),
            summary.genuine,
            self.colorize("Unscreened", Color::Yellow),
            summary.unscreened
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_reports(&self, reports: &[ScreeningReport]) -> Result<String> {
        let batch = JsonBatch {
            summary: BatchSummary::from_reports(reports),
            reports,
        };

        if self.pretty {
            Ok(serde_json::to_string_pretty(&batch)?)
        } else {
            Ok(serde_json::to_string(&batch)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
        }
    }

    pub fn generate_report(&self, reports: &[ScreeningReport], format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_reports(reports),
            OutputFormat::Json => self.json_formatter.format_reports(reports),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => {
            let truncated = &text[..cut];
            // Back up to the last word boundary to avoid cutting words
            let end = truncated.rfind(' ').unwrap_or(cut);
            format!("{}...", &text[..end])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::matcher::MatchResult;
    use chrono::Utc;

    fn sample_reports() -> Vec<ScreeningReport> {
        vec![
            ScreeningReport {
                resume: "jane.pdf".to_string(),
                path: "inbox/jane.pdf".to_string(),
                verdict: Verdict::Fake,
                result: MatchResult::Match {
                    matched_term: "acme corp".to_string(),
                    source_line: "Engineer at Acme Corp".to_string(),
                },
                characters_extracted: 1200,
                note: None,
                screened_at: Utc::now(),
            },
            ScreeningReport {
                resume: "old.doc".to_string(),
                path: "inbox/old.doc".to_string(),
                verdict: Verdict::Unscreened,
                result: MatchResult::NoMatch,
                characters_extracted: 0,
                note: Some("legacy .doc files cannot be read".to_string()),
                screened_at: Utc::now(),
            },
        ]
    }

    #[test]
    fn test_console_output_without_colors() {
        let formatter = ConsoleFormatter::new(false, true);
        assert_eq!(formatter.supports_format(), OutputFormat::Console);
        let output = formatter.format_reports(&sample_reports()).unwrap();

        assert!(output.contains("[!] FAKE jane.pdf"));
        assert!(output.contains("Found: 'acme corp'"));
        assert!(output.contains("Line:  Engineer at Acme Corp"));
        assert!(output.contains("[?] UNSCREENED old.doc"));
        assert!(output.contains("Reason: legacy .doc files cannot be read"));
        assert!(output.contains("Characters extracted: 1200"));
        assert!(output.contains("Screened: 2"));
    }

    #[test]
    fn test_json_output_has_summary_and_reports() {
        let generator = ReportGenerator::with_options(false, false, false);
        let output = generator
            .generate_report(&sample_reports(), &OutputFormat::Json)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["summary"]["total"], 2);
        assert_eq!(value["summary"]["fake"], 1);
        assert_eq!(value["reports"][0]["verdict"], "FAKE");
        assert_eq!(value["reports"][0]["result"]["status"], "match");
        assert_eq!(value["reports"][0]["result"]["matched_term"], "acme corp");
        assert_eq!(value["reports"][1]["result"]["status"], "no_match");
    }

    #[test]
    fn test_truncate_text_respects_char_boundaries() {
        assert_eq!(truncate_text("short line", 50), "short line");
        assert_eq!(truncate_text("Ingénieur chez Acme Corp", 12), "Ingénieur...");
        assert_eq!(truncate_text("ééééé", 3), "ééé...");
    }
}
