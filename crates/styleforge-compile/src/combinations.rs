//! Expansion of schemas into all constraint-valid enum combinations.

use std::collections::BTreeMap;

use serde_json::Value;
use styleforge_core::{ComponentSchema, PropertyDef, PropertyUsage};
use styleforge_validate::check_constraints;
use tracing::debug;

/// A full assignment of values to all enum properties of a schema.
pub type Combination = BTreeMap<String, String>;

/// Enumerate every constraint-valid combination of a schema's enum values.
///
/// Depth-first Cartesian-product expansion over the enum-typed properties in
/// declaration order, values in declared order; each full assignment is kept
/// only if the constraint engine reports zero issues for it. Non-enum
/// properties do not participate. Result order follows the DFS traversal and
/// is stable for a fixed schema.
///
/// Exponential in the number of enum properties times their arities; schemas
/// in practice have few enum properties, and this runs at build time only.
pub fn valid_combinations(schema: &ComponentSchema) -> Vec<Combination> {
    let enums: Vec<&PropertyDef> = schema.enum_properties().collect();
    let mut out = Vec::new();
    let mut current = Combination::new();
    expand(schema, &enums, 0, &mut current, &mut out);
    debug!(
        component = %schema.name,
        enum_properties = enums.len(),
        valid = out.len(),
        "expanded valid combinations"
    );
    out
}

fn expand(
    schema: &ComponentSchema,
    enums: &[&PropertyDef],
    depth: usize,
    current: &mut Combination,
    out: &mut Vec<Combination>,
) {
    if depth == enums.len() {
        if check_constraints(schema, &usage_for(schema, current)).is_empty() {
            out.push(current.clone());
        }
        return;
    }
    let prop = enums[depth];
    for value in &prop.values {
        current.insert(prop.name.clone(), value.clone());
        expand(schema, enums, depth + 1, current, out);
    }
    current.remove(&prop.name);
}

/// Mock usage carrying one full enum assignment.
fn usage_for(schema: &ComponentSchema, combination: &Combination) -> PropertyUsage {
    let mut usage = PropertyUsage::new(schema.name.clone());
    for (name, value) in combination {
        usage
            .props
            .insert(name.clone(), Value::String(value.clone()));
    }
    usage
}
