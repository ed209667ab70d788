//! Shallow structural schema matching.
//!
//! This is not JSON Schema. A schema template is compared to the body one
//! key at a time: the leaf strings `"string"`, `"number"` and `"boolean"`
//! are type tags ("this field must be a string"), never literal expected
//! values; an array node only requires the actual value to be an array
//! (element shapes are not inspected); a nested object recurses. Every key
//! the schema names must exist in the body, while body keys the schema does
//! not mention are ignored.

use serde_json::Value;

/// Check whether `data` satisfies the shallow schema template.
pub fn matches_schema(data: &Value, schema: &Value) -> bool {
    let Value::Object(fields) = schema else {
        return match schema {
            Value::Array(_) => data.is_array(),
            other => type_name(data) == type_name(other),
        };
    };

    for (key, expected) in fields {
        let Some(actual) = data.get(key.as_str()) else {
            return false;
        };
        let ok = match expected {
            Value::String(tag) => match tag.as_str() {
                "string" => actual.is_string(),
                "number" => actual.is_number(),
                "boolean" => actual.is_boolean(),
                // Any other string leaf is not a tag and constrains nothing.
                _ => true,
            },
            Value::Object(_) | Value::Array(_) => matches_schema(actual, expected),
            other => type_name(actual) == type_name(other),
        };
        if !ok {
            return false;
        }
    }
    true
}

/// Type buckets for non-tag leaves. Null, arrays and objects share one
/// bucket, mirroring dynamic `typeof` semantics.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    }
}
