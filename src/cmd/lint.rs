//! The lint command: read a spec document, run the rule table, report.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::path::Path;

use speclint::report::LintReport;
use speclint::ui;
use speclint::validator;

/// Exit code when one or more blocking rules are unsatisfied.
const EXIT_LINT_FAILED: i32 = 1;
/// Exit code when the spec document cannot be read at all.
const EXIT_NO_INPUT: i32 = 2;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Itemized findings with a terminal verdict line
    Text,
    /// Machine-readable JSON report
    Json,
}

/// Read a spec document from disk and validate it.
pub fn lint_file(path: &Path) -> Result<LintReport> {
    let document = fs::read_to_string(path)
        .with_context(|| format!("Failed to read spec file: {}", path.display()))?;

    Ok(validator::validate(&document))
}

/// Lint a spec document and exit non-zero on failure.
///
/// Exit codes: 0 when every blocking rule is satisfied, 1 on lint failure,
/// 2 when the document cannot be read.
pub fn cmd_lint(path: &Path, format: OutputFormat) -> Result<()> {
    let report = match lint_file(path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {:#}", ui::colors::error("✗"), e);
            std::process::exit(EXIT_NO_INPUT);
        }
    };

    match format {
        OutputFormat::Text => print_text(path, &report),
        OutputFormat::Json => print_json(&report)?,
    }

    if !report.passed() {
        std::process::exit(EXIT_LINT_FAILED);
    }
    Ok(())
}

fn print_text(path: &Path, report: &LintReport) {
    println!("Linting {}...", path.display());

    for finding in &report.findings {
        if finding.satisfied {
            if !ui::is_quiet() {
                println!("  {} {}", ui::finding_icon(finding), finding.rule);
            }
        } else {
            let message = finding.message.as_deref().unwrap_or(&finding.rule);
            println!("  {} {}", ui::finding_icon(finding), message);
        }
    }

    let errors = report.errors();
    let warnings = report.warnings();

    if !errors.is_empty() {
        println!(
            "\n{} {} {} found.",
            ui::colors::error("Spec validation failed:"),
            errors.len(),
            if errors.len() == 1 { "error" } else { "errors" }
        );
    } else if !warnings.is_empty() {
        println!(
            "\n{} with {} {}.",
            ui::colors::success("Spec validation passed"),
            warnings.len(),
            if warnings.len() == 1 {
                "warning"
            } else {
                "warnings"
            }
        );
    } else {
        println!("\n{}", ui::colors::success("Spec validation passed."));
    }
}

fn print_json(report: &LintReport) -> Result<()> {
    let payload = serde_json::json!({
        "passed": report.passed(),
        "errors": report.errors().len(),
        "warnings": report.warnings().len(),
        "findings": report.findings,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
