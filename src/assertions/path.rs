//! Dotted-path lookup into JSON bodies.

use serde_json::Value;

/// Look up a dotted path (e.g. `user.email`) in a JSON value.
///
/// Lookup is lenient: a missing key, an out-of-range index, or a segment
/// applied to a non-container all yield `None` rather than an error. Numeric
/// segments index into arrays.
pub fn lookup_path<'a>(body: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(body, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

/// String form of a looked-up value.
///
/// Follows JavaScript `String()` rules, which suite authors rely on when
/// writing contains/regex patterns: strings are used as-is (no quotes),
/// arrays join element strings with `,`, objects collapse to
/// `[object Object]`, and a missing value reads as `undefined`.
pub(crate) fn coerce_to_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| coerce_to_string(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}
