//! Pluggable usage validators with per-hook fault isolation.
//!
//! A [`ValidatorSet`] is an explicitly constructed registry passed by
//! reference to whoever needs it; there is no process-wide state. A hook
//! that fails is wrapped into a `VALIDATOR_ERROR` issue so one broken
//! validator cannot abort a whole validation pass.

use anyhow::Result;
use styleforge_core::{ComponentSchema, IssueCode, PropertyUsage, ValidationIssue};
use tracing::warn;

/// A custom validation hook applied to every usage.
pub trait UsageValidator: Send + Sync {
    /// Name reported in wrapped failure issues.
    fn name(&self) -> &str;

    /// Inspect a usage and return any findings. Returning `Err` marks the
    /// hook as failed for this usage without aborting the pass.
    fn validate(&self, schema: &ComponentSchema, usage: &PropertyUsage)
        -> Result<Vec<ValidationIssue>>;
}

/// Aggregates custom validators and applies them to usages.
#[derive(Default)]
pub struct ValidatorSet {
    hooks: Vec<Box<dyn UsageValidator>>,
}

impl ValidatorSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Attach a hook (builder pattern).
    pub fn with_hook(mut self, hook: Box<dyn UsageValidator>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Register a hook.
    pub fn register(&mut self, hook: Box<dyn UsageValidator>) {
        self.hooks.push(hook);
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the set has no hooks.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run every hook against a usage, collecting findings in registration
    /// order. A hook error becomes a `VALIDATOR_ERROR` issue and the
    /// remaining hooks still run.
    pub fn run(&self, schema: &ComponentSchema, usage: &PropertyUsage) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        for hook in &self.hooks {
            match hook.validate(schema, usage) {
                Ok(found) => issues.extend(found),
                Err(err) => {
                    warn!(hook = hook.name(), error = %err, "custom validator failed");
                    issues.push(ValidationIssue::error(
                        IssueCode::ValidatorError,
                        format!("custom validator `{}` failed: {err}", hook.name()),
                        usage.path(),
                    ));
                }
            }
        }
        issues
    }
}
