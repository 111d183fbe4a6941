use serde_json::Value;

/// Looks up a dotted key path inside nested JSON.
///
/// Objects are traversed by key and arrays by a segment that parses as an
/// index. Any other value, `null` included, ends the walk with `None`.
///
/// ```
/// use serde_json::json;
/// use sheetpress_jpath::resolve_path;
///
/// let data = json!({ "a": { "b": { "c": 5 } } });
/// assert_eq!(resolve_path(&data, "a.b.c"), Some(&json!(5)));
/// assert_eq!(resolve_path(&data, "a.x.c"), None);
/// ```
pub fn resolve_path<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(data, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
