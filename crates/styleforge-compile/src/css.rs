//! CSS emission: tokens, base rules, and one rule block per valid
//! combination.
//!
//! Tokens become CSS custom properties on `:root`; `$token` references in
//! visual mappings resolve to `var(--token)`. Combination selectors use
//! `data-*` attributes so the runtime bindings only need to set attributes.

use std::collections::BTreeMap;

use styleforge_core::{variant_pairs, ComponentSchema, DesignSystemConfig};
use tracing::warn;

use crate::combinations::{valid_combinations, Combination};

/// Emit the full stylesheet for a design system.
///
/// Deterministic: tokens and components are iterated in sorted order, and
/// combination rules follow generator order.
pub fn emit_stylesheet(config: &DesignSystemConfig) -> String {
    let mut css = String::new();
    css.push_str(&format!("/* Generated by styleforge - {} */\n", config.name));

    if !config.tokens.is_empty() {
        css.push_str("\n:root {\n");
        for (name, value) in &config.tokens {
            css.push_str(&format!("  --{name}: {value};\n"));
        }
        css.push_str("}\n");
    }

    for schema in config.components.values() {
        css.push_str(&component_rules(schema, &config.tokens));
    }
    css
}

/// Emit the base rule and per-combination rules for one component.
pub fn component_rules(schema: &ComponentSchema, tokens: &BTreeMap<String, String>) -> String {
    let mut css = String::new();

    if !schema.base.is_empty() {
        css.push_str(&format!("\n.{} {{\n", schema.name));
        for (prop, value) in &schema.base {
            css.push_str(&format!("  {prop}: {};\n", resolve(schema, value, tokens)));
        }
        css.push_str("}\n");
    }

    for combination in valid_combinations(schema) {
        let declarations = merged_declarations(schema, &combination);
        if declarations.is_empty() {
            continue;
        }
        css.push_str(&format!("\n{} {{\n", selector(schema, &combination)));
        for (prop, value) in &declarations {
            css.push_str(&format!("  {prop}: {};\n", resolve(schema, value, tokens)));
        }
        css.push_str("}\n");
    }
    css
}

/// Attribute selector for one combination, e.g.
/// `.button[data-importance="primary"][data-size="lg"]`.
fn selector(schema: &ComponentSchema, combination: &Combination) -> String {
    let mut out = format!(".{}", schema.name);
    for (name, value) in combination {
        out.push_str(&format!("[data-{name}=\"{value}\"]"));
    }
    out
}

/// Merge every variant mapping whose condition-key pairs are a subset of the
/// combination. Variants are visited in key order, so later keys override
/// earlier ones on conflicting CSS properties.
fn merged_declarations(
    schema: &ComponentSchema,
    combination: &Combination,
) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();
    for (key, mapping) in &schema.variants {
        let pairs = variant_pairs(key);
        if pairs.is_empty() {
            continue;
        }
        let applies = pairs
            .iter()
            .all(|(name, value)| combination.get(name) == Some(value));
        if applies {
            for (prop, value) in mapping {
                merged.insert(prop.clone(), value.clone());
            }
        }
    }
    merged
}

/// Resolve `$token` references to `var(--token)`; literals pass through.
fn resolve(schema: &ComponentSchema, value: &str, tokens: &BTreeMap<String, String>) -> String {
    match value.strip_prefix('$') {
        Some(token) => {
            if !tokens.contains_key(token) {
                warn!(
                    component = %schema.name,
                    token,
                    "style value references an unknown token"
                );
            }
            format!("var(--{token})")
        }
        None => value.to_string(),
    }
}
