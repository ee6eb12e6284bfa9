//! Fake-employer matching over extracted resume text

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Literal tokens that separate organization mentions within a line.
///
/// Applied in order; an earlier token consumes text that a later token would
/// also have matched.
pub const ENTITY_DELIMITERS: &[&str] = &[
    ",",
    ";",
    " at ",
    " with ",
    " in ",
    "|",
    "joined",
    "organization",
    "experience",
    "worked",
    "working",
    "currently",
    "employer",
    "company",
    "firm",
    "served",
    "project",
];

/// Outcome of scanning one resume against the blacklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    NoMatch,
    Match {
        matched_term: String,
        source_line: String,
    },
}

impl MatchResult {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Match { .. })
    }

    pub fn matched_term(&self) -> Option<&str> {
        match self {
            MatchResult::Match { matched_term, .. } => Some(matched_term),
            MatchResult::NoMatch => None,
        }
    }

    pub fn source_line(&self) -> Option<&str> {
        match self {
            MatchResult::Match { source_line, .. } => Some(source_line),
            MatchResult::NoMatch => None,
        }
    }
}

fn punctuation_regex() -> &'static Regex {
    static PUNCTUATION: OnceLock<Regex> = OnceLock::new();
    PUNCTUATION.get_or_init(|| Regex::new(r"[^\w\s]").expect("Invalid punctuation regex"))
}

/// Lowercase, strip everything outside the word and space classes, then trim.
///
/// Internal whitespace is left as-is, so `"Acme , Corp"` becomes `"acme  corp"`.
pub fn normalize(s: &str) -> String {
    let lowered = s.to_lowercase();
    punctuation_regex()
        .replace_all(&lowered, "")
        .trim()
        .to_string()
}

/// Split a line into candidate organization mentions.
///
/// Delimiters are applied in order, each one splitting the fragments left by
/// the previous ones, so an earlier delimiter wins where two overlap. Only the
/// given delimiters split the line.
pub fn split_entities(line: &str, delimiters: &[&str]) -> Vec<String> {
    let mut fragments = vec![line.to_string()];
    for delimiter in delimiters.iter().filter(|d| !d.is_empty()) {
        fragments = fragments
            .iter()
            .flat_map(|fragment| fragment.split(delimiter))
            .map(str::to_string)
            .collect();
    }

    fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scan resume text for the first mention of a blacklisted employer.
///
/// Lines are scanned top to bottom and entities left to right; within an
/// entity, blacklist terms are tried in order. After its entities, each line
/// is also tried whole so names containing a delimiter (`"ACME, CORP."`)
/// still match when they lead the line.
pub fn is_fake_resume<S: AsRef<str>>(text: &str, blacklist: &[S]) -> MatchResult {
    let terms: Vec<String> = blacklist
        .iter()
        .map(|term| normalize(term.as_ref()))
        .filter(|term| !term.is_empty())
        .collect();

    if terms.is_empty() {
        return MatchResult::NoMatch;
    }

    for line in text.lines() {
        let whole_line = line.trim();
        if whole_line.is_empty() {
            continue;
        }

        let entities = split_entities(line, ENTITY_DELIMITERS);
        let candidates = entities.iter().map(String::as_str).chain(std::iter::once(whole_line));

        for candidate in candidates {
            if let Some(term) = matching_term(&normalize(candidate), &terms) {
                return MatchResult::Match {
                    matched_term: term.to_string(),
                    source_line: whole_line.to_string(),
                };
            }
        }
    }

    MatchResult::NoMatch
}

/// First term equal to the entity, or followed in it by a space.
fn matching_term<'a>(entity: &str, terms: &'a [String]) -> Option<&'a str> {
    if entity.is_empty() {
        return None;
    }

    terms
        .iter()
        .find(|term| {
            entity == term.as_str()
                || entity
                    .strip_prefix(term.as_str())
                    .is_some_and(|rest| rest.starts_with(' '))
        })
        .map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(term: &str, line: &str) -> MatchResult {
        MatchResult::Match {
            matched_term: term.to_string(),
            source_line: line.to_string(),
        }
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Acme, Inc."), "acme inc");
        assert_eq!(normalize("  Smith & Jones (UK) Ltd.  "), "smith  jones uk ltd");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "Acme, Inc.",
            "  ÉCOLE Polytechnique—Paris ",
            "foo_bar\tbaz",
            "İstanbul Holding A.Ş.",
            "",
            "   ...   ",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_split_entities_on_delimiters() {
        let entities = split_entities("I worked at Acme Corp Ltd for 3 years", ENTITY_DELIMITERS);
        assert_eq!(entities, vec!["I", "Acme Corp Ltd for 3 years"]);

        let entities = split_entities("Globex; Initech | Hooli", ENTITY_DELIMITERS);
        assert_eq!(entities, vec!["Globex", "Initech", "Hooli"]);
    }

    #[test]
    fn test_split_entities_drops_empty_fragments() {
        assert!(split_entities("", ENTITY_DELIMITERS).is_empty());
        assert!(split_entities(" , ; | ", ENTITY_DELIMITERS).is_empty());
    }

    #[test]
    fn test_split_entities_earlier_delimiter_wins_overlap() {
        // " with " is listed before " in " and consumes the shared space.
        let entities = split_entities("a in with b", ENTITY_DELIMITERS);
        assert_eq!(entities, vec!["a in", "b"]);
    }

    #[test]
    fn test_split_entities_only_on_given_delimiters() {
        let entities = split_entities("Acme|Corp, Globex", &[","]);
        assert_eq!(entities, vec!["Acme|Corp", "Globex"]);

        let entities = split_entities("Acme\0Corp; Globex", &[";"]);
        assert_eq!(entities, vec!["Acme\0Corp", "Globex"]);

        assert_eq!(split_entities(" Acme | Corp ", &[]), vec!["Acme | Corp"]);
        assert_eq!(split_entities("Acme, Corp", &["", ","]), vec!["Acme", "Corp"]);
    }

    #[test]
    fn test_split_entities_is_case_sensitive() {
        let entities = split_entities("Worked AT Acme", ENTITY_DELIMITERS);
        assert_eq!(entities, vec!["Worked AT Acme"]);
    }

    #[test]
    fn test_prefix_match_with_trailing_qualifier() {
        let text = "I worked at Acme Corp Ltd for 3 years";
        let result = is_fake_resume(text, &["acme corp"]);
        assert_eq!(result, matched("acme corp", "I worked at Acme Corp Ltd for 3 years"));
    }

    #[test]
    fn test_no_match() {
        let result = is_fake_resume("I worked at Globex Corporation", &["acme corp"]);
        assert_eq!(result, MatchResult::NoMatch);
        assert!(!result.is_match());
        assert_eq!(result.matched_term(), None);
    }

    #[test]
    fn test_empty_text_never_matches() {
        assert_eq!(is_fake_resume("", &["acme corp"]), MatchResult::NoMatch);
        assert_eq!(is_fake_resume("\n\n  \n", &["acme corp"]), MatchResult::NoMatch);
    }

    #[test]
    fn test_empty_blacklist_never_matches() {
        let empty: [&str; 0] = [];
        assert_eq!(is_fake_resume("Acme Corp", &empty), MatchResult::NoMatch);
        assert_eq!(is_fake_resume("Acme Corp", &["", " ... "]), MatchResult::NoMatch);
    }

    #[test]
    fn test_first_matching_line_wins() {
        let text = "Summary\nSenior engineer with Initech Systems\nPreviously with Acme Corp";
        let result = is_fake_resume(text, &["acme corp", "initech systems"]);
        assert_eq!(result, matched("initech systems", "Senior engineer with Initech Systems"));
    }

    #[test]
    fn test_blacklist_order_breaks_ties_within_entity() {
        let result = is_fake_resume("Acme Corp Holdings", &["acme", "acme corp"]);
        assert_eq!(result.matched_term(), Some("acme"));

        let result = is_fake_resume("Acme Corp Holdings", &["acme corp", "acme"]);
        assert_eq!(result.matched_term(), Some("acme corp"));
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        let result = is_fake_resume("ACME, CORP.", &["acme corp"]);
        assert_eq!(result, matched("acme corp", "ACME, CORP."));

        let result = is_fake_resume("Senior Analyst | ACME CORP.", &["Acme Corp"]);
        assert_eq!(result, matched("acme corp", "Senior Analyst | ACME CORP."));
    }

    #[test]
    fn test_prefix_requires_word_boundary() {
        assert_eq!(is_fake_resume("Acmecorp", &["acme"]), MatchResult::NoMatch);
        assert_eq!(is_fake_resume("acme corp", &["acme"]), matched("acme", "acme corp"));
    }

    #[test]
    fn test_source_line_is_trimmed_original() {
        let text = "Education\n   Engineer, Hooli Inc.   \n";
        let result = is_fake_resume(text, &["hooli inc"]);
        assert_eq!(result.source_line(), Some("Engineer, Hooli Inc."));
    }

    #[test]
    fn test_short_term_prefix_false_positive_is_kept() {
        let result = is_fake_resume("Research intern, Bell Laboratories", &["bell"]);
        assert_eq!(result.matched_term(), Some("bell"));
    }
}
