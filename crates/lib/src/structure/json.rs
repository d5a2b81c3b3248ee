//! Interop with `serde_json`.
//!
//! Callers that parse JSON text with `serde_json` convert the result into a
//! [`Value`] with `From`. Going the other way follows JSON-stringify rules,
//! which is also what [`json_clone`] uses to reproduce a serialization
//! round-trip copy.

use serde_json::{Number, Value as Json};

use super::{Map, Value, value::is_serializable_entry};

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => number_to_value(&n),
            Json::String(s) => Value::Text(s),
            Json::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
            Json::Object(entries) => Value::Map(
                entries
                    .into_iter()
                    .map(|(key, item)| (key, Value::from(item)))
                    .collect::<Map>(),
            ),
        }
    }
}

fn number_to_value(n: &Number) -> Value {
    match n.as_i64() {
        Some(i) => Value::Int(i),
        // u64 beyond i64::MAX and all non-integers
        None => n.as_f64().map_or(Value::Null, Value::Float),
    }
}

/// Converts a value to JSON.
///
/// Undefined values and functions are omitted from maps and written as
/// `null` elsewhere; non-finite floats become `null`.
pub fn to_json(value: &Value) -> Json {
    match value {
        Value::Undefined | Value::Null | Value::Function(_) => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(n) => Json::Number((*n).into()),
        Value::Float(n) => Number::from_f64(*n).map_or(Json::Null, Json::Number),
        Value::Text(s) => Json::String(s.clone()),
        Value::List(list) => Json::Array(list.iter().map(to_json).collect()),
        Value::Map(map) => Json::Object(
            map.iter()
                .filter(|(_, item)| is_serializable_entry(item))
                .map(|(key, item)| (key.clone(), to_json(item)))
                .collect(),
        ),
    }
}

impl From<&Value> for Json {
    fn from(value: &Value) -> Self {
        to_json(value)
    }
}

/// Copies a value through a JSON round-trip.
///
/// Lossier than [`super::deep_clone`]: undefined entries disappear from maps,
/// undefined list slots and functions become null, and so do NaN and
/// infinities.
///
/// ```
/// # use polyfold::structure::{json_clone, Value};
/// let original = Value::List(vec![Value::Int(1), Value::Undefined, Value::Float(f64::NAN)]);
/// assert_eq!(
///     json_clone(&original),
///     Value::List(vec![Value::Int(1), Value::Null, Value::Null])
/// );
/// ```
pub fn json_clone(value: &Value) -> Value {
    Value::from(to_json(value))
}
