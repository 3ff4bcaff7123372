//! Lint report types produced by the validator.

use serde::Serialize;

use crate::rules::Severity;

/// Outcome of a single rule evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    /// Rule name as listed in the rule table.
    pub rule: String,
    pub severity: Severity,
    /// Whether the document satisfied the rule.
    pub satisfied: bool,
    /// Text that satisfied the rule, when the matcher captures one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<String>,
    /// Message describing the miss, present only when unsatisfied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of linting one document: one finding per rule, in rule-table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintReport {
    pub findings: Vec<Finding>,
}

impl LintReport {
    pub fn new(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// Unsatisfied blocking findings.
    pub fn errors(&self) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| !f.satisfied && f.severity == Severity::Blocking)
            .collect()
    }

    /// Unsatisfied advisory findings.
    pub fn warnings(&self) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| !f.satisfied && f.severity == Severity::Advisory)
            .collect()
    }

    /// Overall verdict: pass when every blocking rule is satisfied.
    /// Advisory findings never affect the verdict.
    pub fn passed(&self) -> bool {
        self.errors().is_empty()
    }
}
