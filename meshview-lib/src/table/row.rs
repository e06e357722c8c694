//! TableRow trait for records shown by the table engine.

use serde_json::Value;

/// Trait for records that can be displayed as table rows.
///
/// The engine never looks inside a row except through column callbacks and
/// [`field`](TableRow::field), which backs columns without a renderer.
///
/// # Example
///
/// ```
/// use meshview_lib::table::TableRow;
/// use serde_json::{json, Value};
///
/// #[derive(Clone)]
/// struct Pod {
///     name: String,
///     restarts: u32,
/// }
///
/// impl TableRow for Pod {
///     fn key(&self) -> String {
///         self.name.clone()
///     }
///
///     fn field(&self, path: &str) -> Option<Value> {
///         match path {
///             "name" => Some(json!(self.name)),
///             "restarts" => Some(json!(self.restarts)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait TableRow {
    /// Stable identity of the row across renders.
    fn key(&self) -> String;

    /// Raw value at a dotted path (`"tcp.openConnections"`), if present.
    fn field(&self, path: &str) -> Option<Value>;

    /// Optional tooltip shown for the whole row.
    fn tooltip(&self) -> Option<String> {
        None
    }
}

/// Text shown for a raw field value. Null renders as nothing.
pub fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Walks a dotted path through nested JSON objects.
///
/// Array elements can be addressed by index (`"items.0.name"`).
pub fn value_at_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}
