use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{EntityTrait, Value};
use uuid::Uuid;

/// Type of a filterable field; decides how raw filter text is coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Boolean,
    DateTime,
    Id,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::DateTime => "datetime",
            FieldKind::Id => "id",
        }
    }

    /// Coerces raw filter text into a value of this kind.
    ///
    /// Dates accept RFC 3339 timestamps or a bare `YYYY-MM-DD` (midnight UTC),
    /// booleans accept `true` / `false` in any case, ids must be UUIDs.
    pub fn coerce(&self, raw: &str) -> Option<FieldValue> {
        match self {
            FieldKind::Text => Some(FieldValue::Text(raw.to_string())),
            FieldKind::Number => raw
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(FieldValue::Number),
            FieldKind::Boolean => match raw.to_ascii_lowercase().as_str() {
                "true" => Some(FieldValue::Boolean(true)),
                "false" => Some(FieldValue::Boolean(false)),
                _ => None,
            },
            FieldKind::DateTime => parse_datetime(raw).map(FieldValue::DateTime),
            FieldKind::Id => Uuid::parse_str(raw)
                .ok()
                .map(|id| FieldValue::Id(id.hyphenated().to_string())),
        }
    }
}

fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// A typed scalar read from a record or coerced from a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Text(String),
    Number(f64),
    Boolean(bool),
    DateTime(DateTime<Utc>),
    Id(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Orders two values of the same kind. Mismatched kinds and nulls are
    /// incomparable, mirroring SQL where any comparison with NULL is unknown.
    #[cfg(test)]
    pub fn compare(&self, other: &FieldValue) -> Option<std::cmp::Ordering> {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) | (FieldValue::Id(a), FieldValue::Id(b)) => {
                Some(a.cmp(b))
            }
            (FieldValue::Number(a), FieldValue::Number(b)) => a.partial_cmp(b),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Some(a.cmp(b)),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Text)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Null => Option::<String>::None.into(),
            FieldValue::Text(text) | FieldValue::Id(text) => text.into(),
            FieldValue::Number(number) => number.into(),
            FieldValue::Boolean(flag) => flag.into(),
            FieldValue::DateTime(at) => at.into(),
        }
    }
}

/// One entry of a collection's field registry.
///
/// Binds the name clients filter by to the store column, the document key
/// used in relation maps and sorting, and a typed accessor for in-process
/// evaluation.
pub struct Field<E: EntityTrait> {
    /// PascalCase name accepted in filter tokens, e.g. `FirstName`.
    pub name: &'static str,
    /// camelCase key in the rendered document, e.g. `firstName`.
    pub key: &'static str,
    pub column: E::Column,
    pub kind: FieldKind,
    pub read: fn(&E::Model) -> FieldValue,
}

impl<E: EntityTrait> Field<E> {
    /// Reads this field from a record.
    pub fn value_of(&self, model: &E::Model) -> FieldValue {
        (self.read)(model)
    }

    /// Coerces filter text into this field's kind.
    pub fn coerce(&self, raw: &str) -> Option<FieldValue> {
        self.kind.coerce(raw)
    }
}

impl<E: EntityTrait> std::fmt::Debug for Field<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("key", &self.key)
            .field("kind", &self.kind)
            .finish()
    }
}
