//! Loading the fake-company blacklist from CSV or plain-text lists

use crate::error::{Result, ResumeScreenerError};
use crate::screening::matcher::normalize;
use log::{debug, info};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Normalized, de-duplicated list of blacklisted company names.
///
/// Order follows the source file and decides which term is reported when
/// several could match the same entity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blacklist {
    terms: Vec<String>,
    source: Option<PathBuf>,
}

impl Blacklist {
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(|term| normalize(term.as_ref()))
            .filter(|term| !term.is_empty())
            .filter(|term| seen.insert(term.clone()))
            .collect();

        Self { terms, source: None }
    }

    /// Load a blacklist file. `.csv` files use the first column under a
    /// header row; anything else is read as one name per line.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).await.map_err(|e| {
            ResumeScreenerError::Blacklist(format!(
                "Failed to read blacklist '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

        let raw_terms = if is_csv {
            Self::parse_csv(&content)?
        } else {
            Self::parse_lines(&content)
        };
        debug!("Read {} raw blacklist entries from {}", raw_terms.len(), path.display());

        let mut blacklist = Self::from_terms(raw_terms);
        if blacklist.is_empty() {
            return Err(ResumeScreenerError::Blacklist(format!(
                "No company names found in {}",
                path.display()
            )));
        }
        blacklist.source = Some(path.to_path_buf());

        info!(
            "Loaded {} blacklisted companies from {}",
            blacklist.len(),
            path.display()
        );
        Ok(blacklist)
    }

    /// First column of every record below the header row; blank cells are skipped.
    pub fn parse_csv(content: &str) -> Result<Vec<String>> {
        let content = content.trim_start_matches('\u{feff}');
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut names = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let Some(name) = record.get(0).map(str::trim).filter(|name| !name.is_empty()) {
                names.push(name.to_string());
            }
        }

        Ok(names)
    }

    pub fn parse_lines(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
