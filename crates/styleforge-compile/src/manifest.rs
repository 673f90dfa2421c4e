//! Machine-readable manifest emission.
//!
//! The manifest is the JSON contract downstream tooling (documentation
//! sites, linters, editor plugins) consumes: per component, the property
//! definitions, the constraint-valid combinations, and the variant keys.

use std::collections::BTreeMap;

use serde::Serialize;
use styleforge_core::{DesignSystemConfig, PropertyDef};

use crate::combinations::{valid_combinations, Combination};

/// Top-level manifest document.
#[derive(Debug, Clone, Serialize)]
pub struct Manifest {
    /// Design-system name.
    pub name: String,
    /// Design-system version, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Token registry, verbatim.
    pub tokens: BTreeMap<String, String>,
    /// Per-component entries.
    pub components: BTreeMap<String, ComponentManifest>,
}

/// Manifest entry for one component.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentManifest {
    /// Human-readable description.
    pub description: String,
    /// Property definitions, in declaration order.
    pub properties: Vec<PropertyDef>,
    /// Every constraint-valid enum combination, in generator order.
    pub valid_combinations: Vec<Combination>,
    /// Variant condition-keys with visual mappings.
    pub variants: Vec<String>,
}

/// Build the manifest for a design system.
pub fn build_manifest(config: &DesignSystemConfig) -> Manifest {
    let components = config
        .components
        .iter()
        .map(|(name, schema)| {
            (
                name.clone(),
                ComponentManifest {
                    description: schema.description.clone(),
                    properties: schema.properties.clone(),
                    valid_combinations: valid_combinations(schema),
                    variants: schema.variants.keys().cloned().collect(),
                },
            )
        })
        .collect();
    Manifest {
        name: config.name.clone(),
        version: config.version.clone(),
        tokens: config.tokens.clone(),
        components,
    }
}

impl Manifest {
    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleforge_core::DesignSystemConfig;

    #[test]
    fn test_manifest_carries_combinations_and_variants() {
        let config = DesignSystemConfig::from_json(
            r##"{
                "name": "acme",
                "version": "2.1.0",
                "tokens": {"color-primary": "#4338ca"},
                "components": {
                    "badge": {
                        "description": "Small status indicator",
                        "properties": [
                            {"name": "tone", "kind": "enum", "values": ["neutral", "positive"]}
                        ],
                        "variants": {
                            "tone=positive": {"background": "$color-primary"}
                        }
                    }
                }
            }"##,
        )
        .unwrap();

        let manifest = build_manifest(&config);
        assert_eq!(manifest.name, "acme");
        assert_eq!(manifest.version.as_deref(), Some("2.1.0"));

        let badge = &manifest.components["badge"];
        assert_eq!(badge.valid_combinations.len(), 2);
        assert_eq!(badge.variants, vec!["tone=positive".to_string()]);

        let json = manifest.to_json_pretty().unwrap();
        assert!(json.contains("\"valid_combinations\""));
        assert!(json.contains("\"tone\": \"positive\""));
    }
}
