//! Core domain types shared across the entire Styleforge workspace.
//!
//! A design system is described declaratively (JSON or TOML) as a set of
//! component schemas: configurable properties, conditional constraints that
//! restrict which property combinations are legal, and visual mappings from
//! property assignments to CSS declarations. This crate owns those types plus
//! the value objects produced by validation. It performs no validation logic
//! itself beyond structural parsing.

pub mod error;
pub mod issue;
pub mod schema;
pub mod usage;

pub use error::{ConfigError, ConfigResult};
pub use issue::{IssueCode, Severity, ValidationIssue, ValidationResult};
pub use schema::{
    variant_pairs, CompareOp, ComponentSchema, Condition, ConditionTest, Constraint,
    DesignSystemConfig, PropKind, PropertyDef,
};
pub use usage::{coerce, coerce_opt, is_present, PropertyUsage, SourceLocation};
