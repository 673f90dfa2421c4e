//! Schema-level and usage-level validation.
//!
//! These checks are independent of the constraint engine but composable with
//! it: a full usage check for a real call site is
//! [`validate_usage`] plus [`check_constraints`](crate::check_constraints),
//! which is exactly what [`validate_usage_full`] does.

use styleforge_core::{
    coerce, is_present, ComponentSchema, DesignSystemConfig, IssueCode, PropKind, PropertyUsage,
    ValidationIssue, ValidationResult,
};
use tracing::debug;

use crate::constraints::check_constraints;

/// Validate the structure of an entire design-system config.
///
/// Per component: every enum property must declare at least one value, every
/// default must be valid under its own property, and every property name a
/// constraint references must exist. Design-system-wide, token names should
/// be kebab-case (advisory).
pub fn validate_schema(config: &DesignSystemConfig) -> ValidationResult {
    let mut issues = Vec::new();

    for (name, component) in &config.components {
        check_properties(name, component, &mut issues);
        check_constraint_references(name, component, &mut issues);
    }

    for token in config.tokens.keys() {
        if !is_kebab_case(token) {
            issues.push(
                ValidationIssue::warning(
                    IssueCode::InvalidTokenName,
                    format!("token `{token}` is not kebab-case"),
                    format!("tokens.{token}"),
                )
                .with_suggestion(format!("Rename to `{}`", to_kebab_case(token))),
            );
        }
    }

    debug!(
        design_system = %config.name,
        issues = issues.len(),
        "schema validation complete"
    );
    ValidationResult::from_issues(issues)
}

fn check_properties(name: &str, component: &ComponentSchema, issues: &mut Vec<ValidationIssue>) {
    for prop in &component.properties {
        if prop.kind == PropKind::Enum && prop.values.is_empty() {
            issues.push(ValidationIssue::error(
                IssueCode::EmptyEnum,
                format!("enum property `{}` declares no values", prop.name),
                format!("{name}.{}", prop.name),
            ));
        }
        if let Some(default) = &prop.default {
            if !prop.accepts(default) {
                issues.push(ValidationIssue::error(
                    IssueCode::InvalidEnumValue,
                    format!(
                        "default `{}` is not a valid {} value for `{}`",
                        coerce(default),
                        prop.kind.label(),
                        prop.name
                    ),
                    format!("{name}.{}", prop.name),
                ));
            }
        }
    }
}

fn check_constraint_references(
    name: &str,
    component: &ComponentSchema,
    issues: &mut Vec<ValidationIssue>,
) {
    for constraint in &component.constraints {
        for referenced in constraint.referenced_properties() {
            if !component.has_property(referenced) {
                issues.push(ValidationIssue::error(
                    IssueCode::UnknownConstraintProperty,
                    format!("constraint references unknown property `{referenced}`"),
                    name.to_string(),
                ));
            }
        }
    }
}

/// Validate one usage against a component schema.
///
/// Checks, in order: required properties present (a declared default
/// satisfies required-ness - `required` means "must resolve to a concrete
/// value" and a default resolves it), supplied enum values legal, supplied
/// property names known. A property that fails the required check is not
/// also checked for enum membership; other properties still are.
pub fn validate_usage(schema: &ComponentSchema, usage: &PropertyUsage) -> ValidationResult {
    let mut issues = Vec::new();

    for prop in &schema.properties {
        let supplied = usage.get(&prop.name);
        if !is_present(supplied) {
            if prop.required && prop.default.is_none() {
                issues.push(
                    ValidationIssue::error(
                        IssueCode::MissingRequiredProp,
                        format!("missing required property `{}`", prop.name),
                        usage.path(),
                    )
                    .with_suggestion(required_suggestion(prop)),
                );
            }
            continue;
        }
        if prop.kind == PropKind::Enum {
            let value = coerce(supplied.unwrap_or(&serde_json::Value::Null));
            if !prop.values.iter().any(|v| *v == value) {
                issues.push(
                    ValidationIssue::error(
                        IssueCode::InvalidEnumValue,
                        format!(
                            "`{value}` is not a valid value for `{}` (allowed: {})",
                            prop.name,
                            prop.values.join(", ")
                        ),
                        usage.path(),
                    )
                    .with_suggestion(format!(
                        "Use one of: {}",
                        prop.values.join(", ")
                    )),
                );
            }
        }
    }

    for supplied in usage.props.keys() {
        if !schema.has_property(supplied) {
            issues.push(ValidationIssue::error(
                IssueCode::UnknownProperty,
                format!(
                    "`{}` does not declare a property `{supplied}`",
                    schema.name
                ),
                usage.path(),
            ));
        }
    }

    ValidationResult::from_issues(issues)
}

/// Full usage check: structural usage issues plus constraint violations.
pub fn validate_usage_full(schema: &ComponentSchema, usage: &PropertyUsage) -> ValidationResult {
    let mut result = validate_usage(schema, usage);
    result.merge(ValidationResult::from_issues(check_constraints(
        schema, usage,
    )));
    result
}

fn required_suggestion(prop: &styleforge_core::PropertyDef) -> String {
    match prop.values.first() {
        Some(first) => format!("Add {}=\"{first}\"", prop.name),
        None => format!("Add a `{}` value", prop.name),
    }
}

/// Kebab-case: lowercase alphanumeric segments joined by single hyphens,
/// starting with a letter.
fn is_kebab_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }
    !name.ends_with('-')
        && !name.contains("--")
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_was_sep = true;
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if !prev_was_sep {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_was_sep = false;
        } else if c == '_' || c == ' ' || c == '-' {
            if !prev_was_sep {
                out.push('-');
            }
            prev_was_sep = true;
        } else {
            out.push(c);
            prev_was_sep = false;
        }
    }
    out.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> DesignSystemConfig {
        DesignSystemConfig::from_json(
            r##"{
                "name": "acme",
                "tokens": {
                    "color-primary": "#4338ca",
                    "spacingLarge": "24px"
                },
                "components": {
                    "badge": {
                        "properties": [
                            {"name": "tone", "kind": "enum", "values": ["neutral", "positive"], "required": true, "default": "neutral"},
                            {"name": "size", "kind": "enum", "values": ["sm", "md"], "required": true},
                            {"name": "count", "kind": "number", "min": 0, "max": 99}
                        ],
                        "constraints": [
                            {"when": {"tone": "neutral"}, "forbid": ["count"]}
                        ]
                    }
                }
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_valid_schema_passes_with_token_warning() {
        let result = validate_schema(&config());
        // `spacingLarge` draws a warning; warnings do not block validity.
        assert!(result.valid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].code, IssueCode::InvalidTokenName);
        assert_eq!(
            result.issues[0].suggestion.as_deref(),
            Some("Rename to `spacing-large`")
        );
    }

    #[test]
    fn test_empty_enum_is_an_error() {
        let mut config = config();
        config
            .components
            .get_mut("badge")
            .unwrap()
            .properties
            .push(styleforge_core::PropertyDef {
                name: "shape".to_string(),
                kind: PropKind::Enum,
                values: Vec::new(),
                min: None,
                max: None,
                required: false,
                default: None,
                description: None,
            });
        let result = validate_schema(&config);
        assert!(!result.valid);
        assert!(result
            .issues
            .iter()
            .any(|i| i.code == IssueCode::EmptyEnum && i.path == "badge.shape"));
    }

    #[test]
    fn test_dangling_constraint_reference() {
        let mut config = config();
        let badge = config.components.get_mut("badge").unwrap();
        badge.constraints.push(styleforge_core::Constraint {
            forbid: vec!["elevation".to_string()],
            ..Default::default()
        });
        let result = validate_schema(&config);
        assert!(!result.valid);
        assert!(result
            .issues
            .iter()
            .any(|i| i.code == IssueCode::UnknownConstraintProperty
                && i.message.contains("`elevation`")));
    }

    #[test]
    fn test_invalid_default_is_an_error() {
        let mut config = config();
        let badge = config.components.get_mut("badge").unwrap();
        badge.properties[0].default = Some(json!("sparkly"));
        let result = validate_schema(&config);
        assert!(!result.valid);
        assert!(result
            .issues
            .iter()
            .any(|i| i.code == IssueCode::InvalidEnumValue && i.path == "badge.tone"));
    }

    #[test]
    fn test_usage_missing_required() {
        let config = config();
        let badge = config.component("badge").unwrap();
        let usage = PropertyUsage::new("badge").with_prop("tone", json!("positive"));
        let result = validate_usage(badge, &usage);
        assert!(!result.valid);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].code, IssueCode::MissingRequiredProp);
        assert!(result.issues[0].message.contains("`size`"));
    }

    #[test]
    fn test_default_satisfies_required() {
        let config = config();
        let badge = config.component("badge").unwrap();
        // `tone` is required but carries a default; omitting it is fine.
        let usage = PropertyUsage::new("badge").with_prop("size", json!("sm"));
        let result = validate_usage(badge, &usage);
        assert!(result.valid, "issues: {:?}", result.issues);
    }

    #[test]
    fn test_usage_invalid_enum_value() {
        let config = config();
        let badge = config.component("badge").unwrap();
        let usage = PropertyUsage::new("badge")
            .with_prop("tone", json!("angry"))
            .with_prop("size", json!("sm"));
        let result = validate_usage(badge, &usage);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].code, IssueCode::InvalidEnumValue);
        assert_eq!(
            result.issues[0].suggestion.as_deref(),
            Some("Use one of: neutral, positive")
        );
    }

    #[test]
    fn test_usage_unknown_property() {
        let config = config();
        let badge = config.component("badge").unwrap();
        let usage = PropertyUsage::new("badge")
            .with_prop("size", json!("sm"))
            .with_prop("colour", json!("red"));
        let result = validate_usage(badge, &usage);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].code, IssueCode::UnknownProperty);
    }

    #[test]
    fn test_full_usage_check_includes_constraints() {
        let config = config();
        let badge = config.component("badge").unwrap();
        let usage = PropertyUsage::new("badge")
            .with_prop("tone", json!("neutral"))
            .with_prop("size", json!("sm"))
            .with_prop("count", json!(5));
        let result = validate_usage_full(badge, &usage);
        assert!(!result.valid);
        assert!(result
            .issues
            .iter()
            .any(|i| i.code == IssueCode::ConstraintForbiddenProp));
    }

    #[test]
    fn test_kebab_case_predicate() {
        assert!(is_kebab_case("color-primary"));
        assert!(is_kebab_case("spacing-2"));
        assert!(!is_kebab_case("spacingLarge"));
        assert!(!is_kebab_case("-leading"));
        assert!(!is_kebab_case("trailing-"));
        assert!(!is_kebab_case("double--hyphen"));
        assert!(!is_kebab_case("2fast"));
    }
}
