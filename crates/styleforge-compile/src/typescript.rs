//! TypeScript definition emission.
//!
//! Each component gets a props interface. When the valid-combination list is
//! small enough, a narrow literal-combination union type is emitted on top,
//! giving compile-time rejection of constraint-invalid prop combinations;
//! larger sets fall back to the general interface to avoid unreadable types.

use styleforge_core::{ComponentSchema, DesignSystemConfig, PropKind, PropertyDef};

use crate::combinations::valid_combinations;

/// Combination-union types are only emitted up to this many combinations.
pub const MAX_UNION_COMBINATIONS: usize = 20;

/// Emit a `.d.ts` document for a design system.
pub fn emit_definitions(config: &DesignSystemConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("// Generated by styleforge - {}\n", config.name));
    for schema in config.components.values() {
        out.push('\n');
        out.push_str(&component_definitions(schema));
    }
    out
}

/// Emit the interface (and, when reachable, the variant union) for one
/// component.
pub fn component_definitions(schema: &ComponentSchema) -> String {
    let type_name = pascal_case(&schema.name);
    let mut out = String::new();

    if !schema.description.is_empty() {
        out.push_str(&format!("/** {} */\n", schema.description));
    }
    out.push_str(&format!("export interface {type_name}Props {{\n"));
    for prop in &schema.properties {
        let optional = if prop.required && prop.default.is_none() {
            ""
        } else {
            "?"
        };
        out.push_str(&format!(
            "  {}{optional}: {};\n",
            prop.name,
            ts_type(prop)
        ));
    }
    out.push_str("}\n");

    let combos = valid_combinations(schema);
    let has_enum_keys = combos.first().is_some_and(|c| !c.is_empty());
    if has_enum_keys && combos.len() <= MAX_UNION_COMBINATIONS {
        out.push_str(&format!("\nexport type {type_name}Variant =\n"));
        for (index, combo) in combos.iter().enumerate() {
            let fields: Vec<String> = combo
                .iter()
                .map(|(name, value)| format!("{name}: \"{value}\""))
                .collect();
            let terminator = if index + 1 == combos.len() { ";" } else { "" };
            out.push_str(&format!("  | {{ {} }}{terminator}\n", fields.join("; ")));
        }
    }
    out
}

fn ts_type(prop: &PropertyDef) -> String {
    match prop.kind {
        PropKind::Enum => {
            if prop.values.is_empty() {
                "string".to_string()
            } else {
                prop.values
                    .iter()
                    .map(|v| format!("\"{v}\""))
                    .collect::<Vec<_>>()
                    .join(" | ")
            }
        }
        PropKind::Boolean => "boolean".to_string(),
        PropKind::String => "string".to_string(),
        PropKind::Number => "number".to_string(),
    }
}

fn pascal_case(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use styleforge_core::DesignSystemConfig;

    fn config(components: &str) -> DesignSystemConfig {
        DesignSystemConfig::from_json(&format!(
            r#"{{"name": "acme", "components": {components}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_interface_shape() {
        let config = config(
            r#"{
                "icon-button": {
                    "description": "Button with only an icon",
                    "properties": [
                        {"name": "size", "kind": "enum", "values": ["sm", "md"], "required": true},
                        {"name": "tone", "kind": "enum", "values": ["neutral"], "default": "neutral"},
                        {"name": "disabled", "kind": "boolean"},
                        {"name": "label", "kind": "string", "required": true},
                        {"name": "badge", "kind": "number"}
                    ]
                }
            }"#,
        );
        let ts = emit_definitions(&config);
        assert!(ts.contains("/** Button with only an icon */"));
        assert!(ts.contains("export interface IconButtonProps {"));
        assert!(ts.contains("  size: \"sm\" | \"md\";"));
        // Defaulted properties are optional even if required.
        assert!(ts.contains("  tone?: \"neutral\";"));
        assert!(ts.contains("  disabled?: boolean;"));
        assert!(ts.contains("  label: string;"));
        assert!(ts.contains("  badge?: number;"));
    }

    #[test]
    fn test_variant_union_for_small_sets() {
        let config = config(
            r#"{
                "chip": {
                    "properties": [
                        {"name": "a", "kind": "enum", "values": ["1", "2"]},
                        {"name": "b", "kind": "enum", "values": ["x", "y"]}
                    ]
                }
            }"#,
        );
        let ts = emit_definitions(&config);
        assert!(ts.contains("export type ChipVariant ="));
        assert!(ts.contains("  | { a: \"1\"; b: \"x\" }\n"));
        assert!(ts.contains("  | { a: \"2\"; b: \"y\" };\n"));
    }

    #[test]
    fn test_large_sets_skip_the_union() {
        // 3 * 7 = 21 combinations, one over the limit.
        let config = config(
            r#"{
                "grid": {
                    "properties": [
                        {"name": "a", "kind": "enum", "values": ["1", "2", "3"]},
                        {"name": "b", "kind": "enum", "values": ["q", "r", "s", "t", "u", "v", "w"]}
                    ]
                }
            }"#,
        );
        let ts = emit_definitions(&config);
        assert!(ts.contains("export interface GridProps"));
        assert!(!ts.contains("GridVariant"));
    }

    #[test]
    fn test_no_enum_properties_means_no_union() {
        let config = config(
            r#"{
                "divider": {
                    "properties": [
                        {"name": "inset", "kind": "boolean"}
                    ]
                }
            }"#,
        );
        let ts = emit_definitions(&config);
        assert!(!ts.contains("DividerVariant"));
    }
}
