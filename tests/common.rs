//! Common test fixtures for integration tests

/// A spec document satisfying every blocking and advisory rule.
pub fn complete_spec() -> String {
    r#"## SPEC-UI-001: Add login button

### Problem Statement
Users have no way to log in from the landing page.

### Success Metrics
Login success rate above 95%.

### Technical Architecture
A new `LoginButton.tsx` component wired into the header.

### Out-of-Scope
Password reset and account creation.

### Timeline & Resources
Two days, one engineer.

Only modifies `src/components/LoginButton.tsx`.

Approve? Reply 'GO!' to begin.
"#
    .to_string()
}

/// A spec document satisfying the blocking rules only.
pub fn minimal_passing_spec() -> String {
    let mut doc = complete_spec();
    doc = doc.replace("Only modifies `src/components/LoginButton.tsx`.\n\n", "");
    doc = doc.replace("`LoginButton.tsx` component", "component");
    doc
}
