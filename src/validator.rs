//! Pure validation of spec document text against the rule table.

use crate::report::{Finding, LintReport};
use crate::rules::{rule_set, Rule};

/// Run every rule in the table against the document and collect findings.
///
/// Rules are independent: evaluation never short-circuits, and the verdict
/// does not depend on evaluation order. No I/O, no retained state.
pub fn validate(document: &str) -> LintReport {
    let findings = rule_set()
        .iter()
        .map(|rule| evaluate(rule, document))
        .collect();

    LintReport::new(findings)
}

fn evaluate(rule: &Rule, document: &str) -> Finding {
    match rule.matcher.find(document) {
        Some(matched) => Finding {
            rule: rule.name.clone(),
            severity: rule.severity,
            satisfied: true,
            matched: Some(matched),
            message: None,
        },
        None => Finding {
            rule: rule.name.clone(),
            severity: rule.severity,
            satisfied: false,
            matched: None,
            message: Some(rule.missing.clone()),
        },
    }
}
