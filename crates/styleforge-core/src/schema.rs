//! Declarative design-system schema: properties, constraints, mappings.
//!
//! A config is constructed once at load time (JSON or TOML) and treated as
//! immutable thereafter. The config resolution order for components:
//!
//! 1. Explicit `name` on the component schema
//! 2. The key it sits under in the `components` map

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::usage::coerce;

// =============================================================================
// Properties
// =============================================================================

/// The kind of a configurable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    /// Closed set of string values.
    Enum,
    /// True/false toggle.
    Boolean,
    /// Free-form string.
    String,
    /// Number, optionally bounded.
    Number,
}

impl PropKind {
    /// Display label for messages.
    pub fn label(&self) -> &'static str {
        match self {
            PropKind::Enum => "enum",
            PropKind::Boolean => "boolean",
            PropKind::String => "string",
            PropKind::Number => "number",
        }
    }
}

/// Describes one configurable aspect of a component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyDef {
    /// Property name, unique within its component.
    pub name: String,
    /// Value kind.
    pub kind: PropKind,
    /// Allowed values for `enum` properties, in declared order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
    /// Inclusive lower bound for `number` properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Inclusive upper bound for `number` properties.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Whether omission is illegal for a usage.
    #[serde(default)]
    pub required: bool,
    /// Value substituted when omitted and not required. Must be valid under
    /// the property's own kind and range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertyDef {
    /// Whether this property participates in combination expansion.
    pub fn is_enum(&self) -> bool {
        self.kind == PropKind::Enum
    }

    /// Whether a concrete value is valid under this property's kind/range.
    pub fn accepts(&self, value: &Value) -> bool {
        match self.kind {
            PropKind::Enum => self.values.iter().any(|v| *v == coerce(value)),
            PropKind::Boolean => value.is_boolean(),
            PropKind::String => value.is_string(),
            PropKind::Number => match value.as_f64() {
                Some(n) => {
                    self.min.is_none_or(|min| n >= min) && self.max.is_none_or(|max| n <= max)
                }
                None => false,
            },
        }
    }
}

// =============================================================================
// Conditions and constraints
// =============================================================================

/// Comparison operators usable in a condition test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareOp {
    /// Coerced string equality.
    Eq,
    /// Coerced string inequality.
    Neq,
    /// Membership of the coerced value in a list.
    In,
    /// Non-membership of the coerced value in a list.
    Nin,
    /// Numeric greater-than.
    Gt,
    /// Numeric less-than.
    Lt,
    /// Numeric greater-or-equal.
    Gte,
    /// Numeric less-or-equal.
    Lte,
}

impl CompareOp {
    /// The operator token as written in the declarative format.
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Neq => "neq",
            CompareOp::In => "in",
            CompareOp::Nin => "nin",
            CompareOp::Gt => "gt",
            CompareOp::Lt => "lt",
            CompareOp::Gte => "gte",
            CompareOp::Lte => "lte",
        }
    }
}

/// One test applied to a single property inside a condition.
///
/// In the declarative format the shape of the value picks the variant: a
/// list of strings, an `{op, value}` object, or a bare scalar. Unknown
/// operators are unrepresentable here and the untagged fallback lands them
/// on [`ConditionTest::Equals`], where the coerced comparison fails closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConditionTest {
    /// Pass iff the coerced actual value is a member of the list.
    OneOf(Vec<String>),
    /// Pass iff `actual <op> value` holds.
    Compare {
        /// Operator to dispatch on.
        op: CompareOp,
        /// Right-hand operand.
        value: Value,
    },
    /// Pass iff the coerced actual value equals the coerced expected value.
    Equals(Value),
}

impl fmt::Display for ConditionTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionTest::OneOf(values) => f.write_str(&values.join("|")),
            ConditionTest::Compare { op, value } => write!(f, "{} {}", op.as_str(), coerce(value)),
            ConditionTest::Equals(value) => f.write_str(&coerce(value)),
        }
    }
}

/// A conjunction of per-property tests; empty conditions hold trivially.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(pub BTreeMap<String, ConditionTest>);

impl Condition {
    /// Whether the condition has no tests (vacuously true).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(property, test)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConditionTest)> {
        self.0.iter()
    }

    /// Property names referenced by this condition.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, test) in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            match test {
                ConditionTest::Compare { .. } => write!(f, "{key} {test}")?,
                _ => write!(f, "{key}={test}")?,
            }
        }
        Ok(())
    }
}

/// A conditional rule restricting which property combinations are legal.
///
/// Constraints are unordered with respect to each other; every applicable
/// constraint is checked and every violation reported.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Constraint {
    /// Condition gating the actions below.
    #[serde(default)]
    pub when: Condition,
    /// Properties that must not be present while the condition holds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forbid: Vec<String>,
    /// Property → allowed values it must take while the condition holds.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub require: BTreeMap<String, Vec<String>>,
    /// Custom message overriding the templated one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Constraint {
    /// Every property name this constraint references.
    pub fn referenced_properties(&self) -> impl Iterator<Item = &str> {
        self.when
            .property_names()
            .chain(self.forbid.iter().map(String::as_str))
            .chain(self.require.keys().map(String::as_str))
    }
}

// =============================================================================
// Component schemas
// =============================================================================

/// Declarative description of one component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentSchema {
    /// Component name, unique within a design system.
    #[serde(default)]
    pub name: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Configurable properties, in declared order. Order is significant:
    /// combination expansion follows it.
    #[serde(default)]
    pub properties: Vec<PropertyDef>,
    /// Conditional constraints, in declared order.
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    /// Base styles applied unconditionally (CSS property → value).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub base: BTreeMap<String, String>,
    /// Visual mappings keyed by condition-key string (`"size=lg"` or a
    /// comma-joined AND of `key=value` pairs); each maps CSS property →
    /// token reference (`$token-name`) or literal value.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub variants: BTreeMap<String, BTreeMap<String, String>>,
}

impl ComponentSchema {
    /// Look up a property definition by name.
    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Whether the schema declares a property with this name.
    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// Enum-typed properties in declaration order.
    pub fn enum_properties(&self) -> impl Iterator<Item = &PropertyDef> {
        self.properties.iter().filter(|p| p.is_enum())
    }
}

/// Parse a variant condition-key string into `(property, value)` pairs.
///
/// `"size=lg"` yields one pair; `"size=lg,tone=primary"` yields two.
/// Malformed segments (no `=`) are dropped.
pub fn variant_pairs(key: &str) -> Vec<(String, String)> {
    key.split(',')
        .filter_map(|segment| {
            let (name, value) = segment.split_once('=')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

// =============================================================================
// Design-system config
// =============================================================================

/// Top-level declarative input: tokens plus component schemas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignSystemConfig {
    /// Design-system name.
    #[serde(default)]
    pub name: String,
    /// Optional version string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Token registry: kebab-case name → literal value.
    #[serde(default)]
    pub tokens: BTreeMap<String, String>,
    /// Component schemas keyed by name.
    #[serde(default)]
    pub components: BTreeMap<String, ComponentSchema>,
}

impl DesignSystemConfig {
    /// Parse a config from a JSON document.
    pub fn from_json(input: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.finalize()
    }

    /// Parse a config from a TOML document.
    pub fn from_toml_str(input: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(input)?;
        config.finalize()
    }

    /// Load a config file, picking the format from the extension.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&raw)?,
            Some("toml") => Self::from_toml_str(&raw)?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        info!(
            design_system = %config.name,
            components = config.components.len(),
            tokens = config.tokens.len(),
            "loaded design system config"
        );
        Ok(config)
    }

    /// Structural checks and name back-filling after parsing.
    fn finalize(mut self) -> ConfigResult<Self> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::MissingName);
        }
        for (key, component) in &mut self.components {
            if component.name.is_empty() {
                component.name.clone_from(key);
            }
            debug!(
                component = %component.name,
                properties = component.properties.len(),
                constraints = component.constraints.len(),
                "registered component schema"
            );
        }
        Ok(self)
    }

    /// Look up a component schema by name.
    pub fn component(&self, name: &str) -> Option<&ComponentSchema> {
        self.components.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_condition_test_shapes_from_json() {
        let scalar: ConditionTest = serde_json::from_value(json!("ghost")).unwrap();
        assert_eq!(scalar, ConditionTest::Equals(json!("ghost")));

        let list: ConditionTest = serde_json::from_value(json!(["md", "lg"])).unwrap();
        assert_eq!(
            list,
            ConditionTest::OneOf(vec!["md".to_string(), "lg".to_string()])
        );

        let op: ConditionTest = serde_json::from_value(json!({"op": "gt", "value": 3})).unwrap();
        assert_eq!(
            op,
            ConditionTest::Compare {
                op: CompareOp::Gt,
                value: json!(3),
            }
        );
    }

    #[test]
    fn test_unknown_operator_falls_back_to_scalar() {
        // An object with an unrecognized op is not a Compare; it lands on
        // Equals, where the coerced comparison fails closed.
        let test: ConditionTest =
            serde_json::from_value(json!({"op": "matches", "value": "x"})).unwrap();
        assert!(matches!(test, ConditionTest::Equals(_)));
    }

    #[test]
    fn test_condition_display() {
        let condition: Condition =
            serde_json::from_value(json!({"importance": "ghost", "size": ["md", "lg"]})).unwrap();
        assert_eq!(condition.to_string(), "importance=ghost, size=md|lg");
    }

    #[test]
    fn test_variant_pairs() {
        assert_eq!(
            variant_pairs("size=lg"),
            vec![("size".to_string(), "lg".to_string())]
        );
        assert_eq!(
            variant_pairs("size=lg, tone=primary"),
            vec![
                ("size".to_string(), "lg".to_string()),
                ("tone".to_string(), "primary".to_string()),
            ]
        );
        assert!(variant_pairs("nonsense").is_empty());
    }

    #[test]
    fn test_property_accepts() {
        let size = PropertyDef {
            name: "size".to_string(),
            kind: PropKind::Enum,
            values: vec!["sm".to_string(), "md".to_string()],
            min: None,
            max: None,
            required: false,
            default: None,
            description: None,
        };
        assert!(size.accepts(&json!("sm")));
        assert!(!size.accepts(&json!("xl")));

        let columns = PropertyDef {
            name: "columns".to_string(),
            kind: PropKind::Number,
            values: Vec::new(),
            min: Some(1.0),
            max: Some(12.0),
            required: false,
            default: None,
            description: None,
        };
        assert!(columns.accepts(&json!(6)));
        assert!(!columns.accepts(&json!(0)));
        assert!(!columns.accepts(&json!("6")));
    }

    #[test]
    fn test_from_json_backfills_component_names() {
        let config = DesignSystemConfig::from_json(
            r#"{
                "name": "acme",
                "components": {
                    "button": {
                        "properties": [
                            {"name": "size", "kind": "enum", "values": ["sm", "md"]}
                        ]
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.component("button").unwrap().name, "button");
    }

    #[test]
    fn test_missing_name_is_a_hard_error() {
        let result = DesignSystemConfig::from_json(r#"{"components": {}}"#);
        assert!(matches!(result, Err(ConfigError::MissingName)));
    }

    #[test]
    fn test_malformed_json_is_a_hard_error() {
        let result = DesignSystemConfig::from_json("not json");
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_from_toml() {
        let config = DesignSystemConfig::from_toml_str(
            r##"
                name = "acme"

                [tokens]
                color-primary = "#4338ca"

                [components.badge]
                description = "Small status indicator"

                [[components.badge.properties]]
                name = "tone"
                kind = "enum"
                values = ["neutral", "positive"]

                [[components.badge.constraints]]
                forbid = ["tone"]

                [components.badge.constraints.when]
                tone = "neutral"
            "##,
        )
        .unwrap();
        let badge = config.component("badge").unwrap();
        assert_eq!(badge.properties.len(), 1);
        assert_eq!(badge.constraints.len(), 1);
        assert_eq!(badge.constraints[0].forbid, vec!["tone".to_string()]);
        assert_eq!(
            config.tokens.get("color-primary"),
            Some(&"#4338ca".to_string())
        );
    }
}
