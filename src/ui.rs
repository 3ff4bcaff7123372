//! Centralized console formatting and color utilities.

use colored::{ColoredString, Colorize};

use crate::report::Finding;
use crate::rules::Severity;

/// Check if quiet mode is enabled via environment variable.
/// Quiet mode suppresses satisfied-rule lines, keeping misses and the verdict.
pub fn is_quiet() -> bool {
    std::env::var("SPECLINT_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns the colored icon for a finding.
///
/// Icons:
/// - satisfied: ✓ (green)
/// - blocking miss: ✗ (red)
/// - advisory miss: ⚠ (yellow)
pub fn finding_icon(finding: &Finding) -> ColoredString {
    if finding.satisfied {
        "✓".green()
    } else {
        match finding.severity {
            Severity::Blocking => "✗".red(),
            Severity::Advisory => "⚠".yellow(),
        }
    }
}

/// Color scheme for verdict and summary output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for a passing verdict
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for warnings
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for errors and a failing verdict
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}
