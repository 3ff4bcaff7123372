//! # Speclint - Spec Document Linting
//!
//! Speclint checks a markdown spec document against a fixed set of
//! formatting rules: required section headings, a `SPEC-<CODE>-<NUMBER>`
//! identifier, scope and approval wording, and concrete file targets.
//!
//! ## Core Concepts
//!
//! - **Rules**: a fixed table of named checks, each blocking or advisory.
//!   Blocking rules decide the verdict; advisory rules only warn.
//! - **Report**: one finding per rule plus an overall pass/fail verdict.
//!
//! Documents are treated as opaque text. Rules match by substring or regex
//! search; no markdown structure is ever parsed.
//!
//! ## Modules
//!
//! - [`rules`] - the rule table and its matchers
//! - [`report`] - findings and the lint report
//! - [`validator`] - pure document validation
//! - [`ui`] - console color and icon helpers
//!
//! ## Example
//!
//! ```
//! use speclint::validator;
//!
//! let report = validator::validate("## SPEC-UI-001: Add login button");
//! // Identifier found, but required sections are missing.
//! assert!(!report.passed());
//! ```

pub mod report;
pub mod rules;
pub mod ui;
pub mod validator;

/// Default spec document path when none is given on the command line.
pub const DEFAULT_SPEC_PATH: &str = "spec.md";
