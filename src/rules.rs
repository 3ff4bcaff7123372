//! The lint rule table and its matchers.
//!
//! Every check speclint performs is declared here as data: a name, a
//! severity, and a matcher. Adding a rule is a change to [`rule_set`], not
//! new control flow.

use regex::Regex;
use serde::Serialize;

/// Section headings every spec document must carry.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "Problem Statement",
    "Success Metrics",
    "Technical Architecture",
    "Out-of-Scope",
    "Timeline & Resources",
];

/// Regex pattern for spec identifiers: SPEC-<CATEGORY>-<NNN>, e.g. SPEC-UI-001.
/// Unanchored, so both a `## SPEC-UI-001:` heading and an inline mention match.
pub const SPEC_ID_PATTERN: &str = r"SPEC-[A-Z]+-\d{3}";

/// Phrases indicating the document states what it will and will not touch.
pub const SCOPE_PHRASES: &[&str] = &[
    "Only modifies",
    "Changes limited to",
    "Affects only",
    "Targets specifically",
];

/// Phrases indicating a human sign-off step is described.
pub const APPROVAL_PHRASES: &[&str] = &[
    "Approve?",
    "Reply 'GO!'",
    "Confirm Y/N",
    "User approval required",
];

/// Path-shaped patterns indicating the spec targets concrete files.
pub const FILE_TARGET_PATTERNS: &[&str] = &[
    r"`[\w\-./]+\.(js|jsx|ts|tsx|css|html)`",
    r"src/[\w\-./]+",
    r"components/[\w\-./]+",
];

/// Severity of a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Failure flips the overall verdict to fail.
    Blocking,
    /// Failure is reported as a warning and never affects the verdict.
    Advisory,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blocking => write!(f, "ERROR"),
            Self::Advisory => write!(f, "WARN"),
        }
    }
}

/// How a rule decides whether a document satisfies it.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Case-insensitive substring containment anywhere in the text.
    Substring(&'static str),
    /// At least one literal phrase from a fixed set, case-sensitive.
    AnyPhrase(&'static [&'static str]),
    /// A regular expression; the matched text is recorded as evidence.
    Pattern(&'static str),
    /// At least one match across a fixed set of regular expressions.
    AnyPattern(&'static [&'static str]),
}

impl Matcher {
    /// Evaluate against document text.
    ///
    /// Returns the evidence that satisfied the matcher (the needle, the
    /// first matching phrase, or the matched regex text), or `None` when
    /// the document does not satisfy it.
    pub fn find(&self, document: &str) -> Option<String> {
        match self {
            Matcher::Substring(needle) => {
                if document.to_lowercase().contains(&needle.to_lowercase()) {
                    Some((*needle).to_string())
                } else {
                    None
                }
            }
            Matcher::AnyPhrase(phrases) => phrases
                .iter()
                .copied()
                .find(|phrase| document.contains(phrase))
                .map(|phrase| phrase.to_string()),
            Matcher::Pattern(pattern) => find_pattern(document, pattern),
            Matcher::AnyPattern(patterns) => patterns
                .iter()
                .find_map(|pattern| find_pattern(document, pattern)),
        }
    }
}

/// Find the first regex match in the document, returning the matched text.
fn find_pattern(document: &str, pattern: &str) -> Option<String> {
    let re = match Regex::new(pattern) {
        Ok(re) => re,
        Err(_) => return None,
    };
    re.find(document).map(|m| m.as_str().to_string())
}

/// A single named lint rule.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Stable rule name used in reports.
    pub name: String,
    pub severity: Severity,
    /// Message reported when the rule is not satisfied.
    pub missing: String,
    pub matcher: Matcher,
}

/// The fixed rule table evaluated against every document.
///
/// One rule per required section, then the identifier, scope, approval, and
/// file-target rules. Section names match case-insensitively anywhere in
/// the text; the identifier may appear anywhere, not only in a heading.
pub fn rule_set() -> Vec<Rule> {
    let mut rules = Vec::with_capacity(REQUIRED_SECTIONS.len() + 4);

    for section in REQUIRED_SECTIONS {
        rules.push(Rule {
            name: format!("Required section: {}", section),
            severity: Severity::Blocking,
            missing: format!("Missing required section: {}", section),
            matcher: Matcher::Substring(section),
        });
    }

    rules.push(Rule {
        name: "Spec identifier".to_string(),
        severity: Severity::Blocking,
        missing: "Missing or invalid SPEC-ID format (e.g., SPEC-UI-001)".to_string(),
        matcher: Matcher::Pattern(SPEC_ID_PATTERN),
    });

    rules.push(Rule {
        name: "Scope boundaries".to_string(),
        severity: Severity::Advisory,
        missing: "Scope boundaries not clearly defined".to_string(),
        matcher: Matcher::AnyPhrase(SCOPE_PHRASES),
    });

    rules.push(Rule {
        name: "Approval workflow".to_string(),
        severity: Severity::Blocking,
        missing: "Missing approval workflow".to_string(),
        matcher: Matcher::AnyPhrase(APPROVAL_PHRASES),
    });

    rules.push(Rule {
        name: "File targets".to_string(),
        severity: Severity::Advisory,
        missing: "No specific files targeted - may lead to overreach".to_string(),
        matcher: Matcher::AnyPattern(FILE_TARGET_PATTERNS),
    });

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_matcher_case_insensitive() {
        let matcher = Matcher::Substring("Problem Statement");
        assert_eq!(
            matcher.find("### problem statement"),
            Some("Problem Statement".to_string())
        );
        assert_eq!(
            matcher.find("### PROBLEM STATEMENT"),
            Some("Problem Statement".to_string())
        );
        assert_eq!(matcher.find("### Goals"), None);
    }

    #[test]
    fn test_any_phrase_matcher_returns_first_match() {
        let matcher = Matcher::AnyPhrase(APPROVAL_PHRASES);
        assert_eq!(
            matcher.find("When done, Reply 'GO!' to continue"),
            Some("Reply 'GO!'".to_string())
        );
        assert_eq!(matcher.find("no sign-off described"), None);
    }

    #[test]
    fn test_any_phrase_matcher_case_sensitive() {
        let matcher = Matcher::AnyPhrase(SCOPE_PHRASES);
        assert!(matcher.find("Only modifies the header").is_some());
        assert!(matcher.find("only modifies the header").is_none());
    }

    #[test]
    fn test_pattern_matcher_records_matched_text() {
        let matcher = Matcher::Pattern(SPEC_ID_PATTERN);
        assert_eq!(
            matcher.find("## SPEC-UI-001: Add login"),
            Some("SPEC-UI-001".to_string())
        );
    }

    #[test]
    fn test_pattern_matcher_rejects_wrong_shapes() {
        let matcher = Matcher::Pattern(SPEC_ID_PATTERN);
        // Lowercase category
        assert_eq!(matcher.find("SPEC-ui-001"), None);
        // Two-digit number
        assert_eq!(matcher.find("SPEC-UI-01"), None);
        // Missing category
        assert_eq!(matcher.find("SPEC--001"), None);
    }

    #[test]
    fn test_any_pattern_matcher_file_targets() {
        let matcher = Matcher::AnyPattern(FILE_TARGET_PATTERNS);
        assert_eq!(
            matcher.find("Update `app/login.tsx` first"),
            Some("`app/login.tsx`".to_string())
        );
        assert_eq!(
            matcher.find("touch src/components/Button only"),
            Some("src/components/Button".to_string())
        );
        assert_eq!(matcher.find("no files named here"), None);
    }

    #[test]
    fn test_backtick_filename_requires_known_extension() {
        let matcher = Matcher::AnyPattern(&[r"`[\w\-./]+\.(js|jsx|ts|tsx|css|html)`"]);
        assert!(matcher.find("edit `main.rs`").is_none());
        assert!(matcher.find("edit `main.css`").is_some());
    }

    #[test]
    fn test_rule_set_shape() {
        let rules = rule_set();
        // Five section rules plus identifier, scope, approval, file targets
        assert_eq!(rules.len(), REQUIRED_SECTIONS.len() + 4);

        let blocking = rules
            .iter()
            .filter(|r| r.severity == Severity::Blocking)
            .count();
        let advisory = rules
            .iter()
            .filter(|r| r.severity == Severity::Advisory)
            .count();
        assert_eq!(blocking, REQUIRED_SECTIONS.len() + 2);
        assert_eq!(advisory, 2);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Blocking.to_string(), "ERROR");
        assert_eq!(Severity::Advisory.to_string(), "WARN");
    }
}
