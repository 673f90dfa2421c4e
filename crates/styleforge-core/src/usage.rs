//! Concrete property usages and value coercion.
//!
//! A usage is a component name plus the property values supplied at one call
//! site. Values arrive as [`serde_json::Value`] because the declarative
//! surface is JSON-shaped; comparisons against schema values go through the
//! loose string coercion defined here.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// File position of a component call site, when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Path of the file containing the usage.
    pub file: String,
    /// 1-based line.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A concrete set of property values supplied for one component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyUsage {
    /// Name of the component being used.
    pub component: String,
    /// Supplied property values, possibly partial.
    #[serde(default)]
    pub props: BTreeMap<String, Value>,
    /// Call-site position, when usage extraction provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl PropertyUsage {
    /// Create an empty usage for a component.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            props: BTreeMap::new(),
            location: None,
        }
    }

    /// Set a property value (builder pattern).
    pub fn with_prop(mut self, name: impl Into<String>, value: Value) -> Self {
        self.props.insert(name.into(), value);
        self
    }

    /// Attach a call-site location (builder pattern).
    pub fn at(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Issue path for this usage: `file:line:column` when a location is
    /// known, otherwise the component name.
    pub fn path(&self) -> String {
        match &self.location {
            Some(location) => location.to_string(),
            None => self.component.clone(),
        }
    }

    /// Get a supplied value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.props.get(name)
    }

    /// A copy of this usage with schema defaults filled in for absent
    /// properties. Required-ness is always checked against the as-supplied
    /// set, so callers resolve defaults only after that check.
    pub fn resolved(&self, schema: &crate::schema::ComponentSchema) -> Self {
        let mut out = self.clone();
        for prop in &schema.properties {
            if let Some(default) = &prop.default {
                if !is_present(out.props.get(&prop.name)) {
                    out.props.insert(prop.name.clone(), default.clone());
                }
            }
        }
        out
    }
}

/// Whether a supplied value counts as present.
///
/// JSON has no `undefined`; a supplied `null` stands in for it and counts as
/// absent.
pub fn is_present(value: Option<&Value>) -> bool {
    matches!(value, Some(v) if !v.is_null())
}

/// Loose string coercion, mirroring JavaScript `String(x)`.
///
/// This looseness is deliberate and schemas rely on it: a boolean `true`
/// matches a constraint value `"true"`. Do not replace with typed equality.
pub fn coerce(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Composite values are rare in practice; compact JSON keeps the
        // comparison deterministic.
        other => other.to_string(),
    }
}

/// Coerce an optional value; absent becomes the string `"undefined"`, which
/// almost always fails equality unless a constraint checks for it explicitly.
pub fn coerce_opt(value: Option<&Value>) -> String {
    match value {
        Some(v) => coerce(v),
        None => "undefined".to_string(),
    }
}
