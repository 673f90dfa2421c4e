//! Condition evaluation against concrete property values.
//!
//! All comparisons except the numeric operators go through the loose string
//! coercion in `styleforge_core::usage`; numeric operators require both
//! operands to be numbers and fail closed otherwise.

use std::collections::BTreeMap;

use serde_json::Value;
use styleforge_core::{coerce, coerce_opt, CompareOp, Condition, ConditionTest};

/// Evaluate a condition against supplied property values.
///
/// Every `(property, test)` pair must pass (logical AND); an empty condition
/// holds trivially. Absent properties coerce to the string `"undefined"` for
/// comparison purposes.
pub fn evaluate(condition: &Condition, props: &BTreeMap<String, Value>) -> bool {
    condition.iter().all(|(key, test)| {
        let actual = props.get(key);
        match test {
            ConditionTest::OneOf(values) => {
                let coerced = coerce_opt(actual);
                values.iter().any(|v| *v == coerced)
            }
            ConditionTest::Compare { op, value } => compare(*op, actual, value),
            ConditionTest::Equals(expected) => coerce_opt(actual) == coerce(expected),
        }
    })
}

fn compare(op: CompareOp, actual: Option<&Value>, expected: &Value) -> bool {
    match op {
        CompareOp::Eq => coerce_opt(actual) == coerce(expected),
        CompareOp::Neq => coerce_opt(actual) != coerce(expected),
        CompareOp::In => member_of(actual, expected),
        // A non-list operand fails closed rather than negating to true.
        CompareOp::Nin => expected.is_array() && !member_of(actual, expected),
        CompareOp::Gt => numeric(actual, expected, |a, b| a > b),
        CompareOp::Lt => numeric(actual, expected, |a, b| a < b),
        CompareOp::Gte => numeric(actual, expected, |a, b| a >= b),
        CompareOp::Lte => numeric(actual, expected, |a, b| a <= b),
    }
}

/// Membership test on the string-coerced actual value. Fails closed when the
/// operand is not a list.
fn member_of(actual: Option<&Value>, expected: &Value) -> bool {
    let coerced = coerce_opt(actual);
    expected
        .as_array()
        .is_some_and(|list| list.iter().any(|v| coerce(v) == coerced))
}

/// Numeric comparison; fails closed unless both operands are numbers.
fn numeric(actual: Option<&Value>, expected: &Value, cmp: impl Fn(f64, f64) -> bool) -> bool {
    match (actual.and_then(Value::as_f64), expected.as_f64()) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}
