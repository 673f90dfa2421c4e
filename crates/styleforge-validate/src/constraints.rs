//! The constraint engine: conditional forbid/require checks.

use styleforge_core::{
    is_present, ComponentSchema, Constraint, IssueCode, PropertyUsage, ValidationIssue,
};
use tracing::debug;

use crate::condition::evaluate;

/// Check every constraint of a schema against a usage.
///
/// Constraints are visited in schema order; a constraint whose condition does
/// not hold contributes nothing. All violations across all constraints are
/// accumulated - no short-circuiting. Deterministic for a fixed
/// `(schema, usage)` pair, and a schema with zero constraints always yields
/// an empty list.
pub fn check_constraints(schema: &ComponentSchema, usage: &PropertyUsage) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for constraint in &schema.constraints {
        if !evaluate(&constraint.when, &usage.props) {
            continue;
        }
        check_forbid(constraint, usage, &mut issues);
        check_require(constraint, usage, &mut issues);
    }
    if !issues.is_empty() {
        debug!(
            component = %schema.name,
            path = %usage.path(),
            violations = issues.len(),
            "constraint check failed"
        );
    }
    issues
}

fn check_forbid(constraint: &Constraint, usage: &PropertyUsage, issues: &mut Vec<ValidationIssue>) {
    for name in &constraint.forbid {
        if !is_present(usage.get(name)) {
            continue;
        }
        let message = constraint.message.clone().unwrap_or_else(|| {
            format!("`{name}` is not allowed when {when}", when = constraint.when)
        });
        issues.push(
            ValidationIssue::error(IssueCode::ConstraintForbiddenProp, message, usage.path())
                .with_suggestion(format!(
                    "Remove `{name}` or change {when}",
                    when = constraint.when
                )),
        );
    }
}

fn check_require(
    constraint: &Constraint,
    usage: &PropertyUsage,
    issues: &mut Vec<ValidationIssue>,
) {
    for (name, allowed) in &constraint.require {
        let first = allowed.first().map(String::as_str).unwrap_or_default();
        match usage.get(name).filter(|v| !v.is_null()) {
            None => {
                let message = constraint.message.clone().unwrap_or_else(|| {
                    format!("`{name}` is required when {when}", when = constraint.when)
                });
                issues.push(
                    ValidationIssue::error(
                        IssueCode::ConstraintMissingRequired,
                        message,
                        usage.path(),
                    )
                    .with_suggestion(format!("Add {name}=\"{first}\"")),
                );
            }
            Some(value) => {
                let coerced = styleforge_core::coerce(value);
                if allowed.iter().any(|v| *v == coerced) {
                    continue;
                }
                let message = constraint.message.clone().unwrap_or_else(|| {
                    format!(
                        "`{name}` must be one of [{allowed}] when {when}, got `{coerced}`",
                        allowed = allowed.join(", "),
                        when = constraint.when
                    )
                });
                issues.push(
                    ValidationIssue::error(IssueCode::ConstraintInvalidValue, message, usage.path())
                        .with_suggestion(format!("Change `{name}` to \"{first}\"")),
                );
            }
        }
    }
}
