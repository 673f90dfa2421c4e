//! Validation issue value objects.
//!
//! Issues are pure data: a validation call returns zero or more of them and
//! never throws for ordinary invalid input. Downstream tooling
//! pattern-matches on [`IssueCode`], so the code vocabulary is a stable
//! contract and must not be renamed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How severe a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks a build; the schema or usage is not legal.
    Error,
    /// Advisory; does not affect validity.
    Warning,
    /// Informational only.
    Info,
}

impl Severity {
    /// Display label used in CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// Machine-readable issue codes (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    /// Schema defines an enum property with zero allowed values.
    EmptyEnum,
    /// A constraint references a property not in the schema.
    UnknownConstraintProperty,
    /// Non-conforming token naming (advisory only).
    InvalidTokenName,
    /// Usage omits a required property with no default.
    MissingRequiredProp,
    /// Usage supplies a value outside the declared enum.
    InvalidEnumValue,
    /// Usage supplies a property the schema does not declare.
    UnknownProperty,
    /// A conditional constraint forbids a supplied property.
    ConstraintForbiddenProp,
    /// A conditional constraint requires a property that is absent.
    ConstraintMissingRequired,
    /// A conditional constraint rejects the supplied value.
    ConstraintInvalidValue,
    /// A custom validator hook failed; wrapped instead of propagated.
    ValidatorError,
}

impl IssueCode {
    /// The wire-format string for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::EmptyEnum => "EMPTY_ENUM",
            IssueCode::UnknownConstraintProperty => "UNKNOWN_CONSTRAINT_PROPERTY",
            IssueCode::InvalidTokenName => "INVALID_TOKEN_NAME",
            IssueCode::MissingRequiredProp => "MISSING_REQUIRED_PROP",
            IssueCode::InvalidEnumValue => "INVALID_ENUM_VALUE",
            IssueCode::UnknownProperty => "UNKNOWN_PROPERTY",
            IssueCode::ConstraintForbiddenProp => "CONSTRAINT_FORBIDDEN_PROP",
            IssueCode::ConstraintMissingRequired => "CONSTRAINT_MISSING_REQUIRED",
            IssueCode::ConstraintInvalidValue => "CONSTRAINT_INVALID_VALUE",
            IssueCode::ValidatorError => "VALIDATOR_ERROR",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One validation finding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity of the finding.
    pub severity: Severity,
    /// Machine-readable code.
    pub code: IssueCode,
    /// Human-readable description.
    pub message: String,
    /// Where the finding applies: a component name, `component.property`,
    /// or `file:line:column` when usage-site context is available.
    pub path: String,
    /// Optional actionable fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    /// Create an error-severity issue.
    pub fn error(code: IssueCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            path: path.into(),
            suggestion: None,
        }
    }

    /// Create a warning-severity issue.
    pub fn warning(code: IssueCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            path: path.into(),
            suggestion: None,
        }
    }

    /// Attach a suggestion (builder pattern).
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Whether this finding blocks validity.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity.label(),
            self.code,
            self.path,
            self.message
        )
    }
}

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff no issue has error severity; warnings do not block validity.
    pub valid: bool,
    /// Every finding, in the order it was produced.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Build a result from accumulated issues, deriving `valid`.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let valid = !issues.iter().any(ValidationIssue::is_error);
        Self { valid, issues }
    }

    /// An empty, valid result.
    pub fn ok() -> Self {
        Self {
            valid: true,
            issues: Vec::new(),
        }
    }

    /// Merge another result into this one, recomputing validity.
    pub fn merge(&mut self, other: ValidationResult) {
        self.issues.extend(other.issues);
        self.valid = !self.issues.iter().any(ValidationIssue::is_error);
    }
}
