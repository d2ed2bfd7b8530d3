use chrono::DateTime;
use serde::Serialize;
use serde_json::{Map, Value};
use std::cmp::Ordering;

use crate::server::error::query::QueryError;

/// A record rendered as a JSON object. Populated listings are built from
/// these so joined rows need no dedicated Rust type.
pub type Document = Map<String, Value>;

/// Serializes a DTO into a document.
pub fn to_document<T: Serialize>(
    collection: &'static str,
    value: &T,
) -> Result<Document, QueryError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(QueryError::Document {
            collection,
            reason: format!("expected an object, got {}", type_name(&other)),
        }),
        Err(e) => Err(QueryError::Document {
            collection,
            reason: e.to_string(),
        }),
    }
}

/// Looks up a dotted path such as `StationsEmbedded.name`.
pub fn get_path<'a>(document: &'a Document, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = document.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Total order over JSON values used by the document sort.
///
/// Missing values sort first, then null, booleans, numbers, strings, arrays
/// and objects. Two strings that both parse as RFC 3339 timestamps compare
/// chronologically, since serialized fractional seconds vary in length.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            (Value::Number(x), Value::Number(y)) => {
                let x = x.as_f64().unwrap_or(f64::NAN);
                let y = y.as_f64().unwrap_or(f64::NAN);
                x.total_cmp(&y)
            }
            (Value::String(x), Value::String(y)) => {
                match (DateTime::parse_from_rfc3339(x), DateTime::parse_from_rfc3339(y)) {
                    (Ok(x), Ok(y)) => x.cmp(&y),
                    _ => x.cmp(y),
                }
            }
            (Value::Array(x), Value::Array(y)) => x.len().cmp(&y.len()),
            (x, y) => rank(x).cmp(&rank(y)),
        },
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
