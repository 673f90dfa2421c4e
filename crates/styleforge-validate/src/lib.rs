//! Constraint evaluation and validation for Styleforge design systems.
//!
//! Three layers, all pure functions over borrowed schemas:
//!
//! 1. [`condition::evaluate`] - does a single constraint condition hold for
//!    a set of supplied property values?
//! 2. [`constraints::check_constraints`] - which conditional constraints
//!    does a usage violate?
//! 3. [`validator`] - structural schema checks and usage-level checks,
//!    composable with the constraint engine; plus the pluggable
//!    [`hooks::UsageValidator`] registry with per-hook fault isolation.

pub mod condition;
pub mod constraints;
pub mod hooks;
pub mod validator;

pub use condition::evaluate;
pub use constraints::check_constraints;
pub use hooks::{UsageValidator, ValidatorSet};
pub use validator::{validate_schema, validate_usage, validate_usage_full};
