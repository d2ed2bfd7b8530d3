use sea_orm::{ColumnTrait, Condition, EntityTrait, Value};

use crate::server::{
    error::query::QueryError,
    query::{
        collection::Collection,
        field::{Field, FieldValue},
        operator::{classify, Operator},
    },
};

/// A single `field <op> value` test with the value already coerced into the
/// field's kind.
pub struct Comparison<E: EntityTrait> {
    pub field: &'static Field<E>,
    pub operation: Operator,
    pub value: FieldValue,
}

impl<E: EntityTrait> Clone for Comparison<E> {
    fn clone(&self) -> Self {
        Self {
            field: self.field,
            operation: self.operation,
            value: self.value.clone(),
        }
    }
}

impl<E: EntityTrait> std::fmt::Debug for Comparison<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {:?}", self.field.name, self.operation, self.value)
    }
}

/// Compiled boolean predicate over one collection.
///
/// The same tree is pushed down to the database as a SeaORM [`Condition`] and
/// evaluated in-process by [`Predicate::matches`]; both agree on every record.
pub enum Predicate<E: EntityTrait> {
    /// Matches every record.
    Always,
    Compare(Comparison<E>),
    /// Conjunction, evaluated left to right.
    And(Vec<Predicate<E>>),
}

impl<E: EntityTrait> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        match self {
            Predicate::Always => Predicate::Always,
            Predicate::Compare(comparison) => Predicate::Compare(comparison.clone()),
            Predicate::And(parts) => Predicate::And(parts.clone()),
        }
    }
}

impl<E: EntityTrait> std::fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::Always => f.write_str("Always"),
            Predicate::Compare(comparison) => comparison.fmt(f),
            Predicate::And(parts) => f.debug_tuple("And").field(parts).finish(),
        }
    }
}

impl<E: Collection> Predicate<E> {
    /// Builds a comparison from a field name and raw text, coercing the text
    /// into the field's kind.
    ///
    /// # Returns
    /// - `Ok(Predicate::Compare)` - Field exists and the value fits its kind
    /// - `Err(QueryError::UnknownField)` - No field with that exact name
    /// - `Err(QueryError::InvalidFilterValue)` - Value cannot be coerced
    pub fn compare(name: &str, operation: Operator, raw: &str) -> Result<Self, QueryError> {
        let field = E::field(name)?;
        let value = field
            .coerce(raw)
            .ok_or_else(|| QueryError::InvalidFilterValue {
                field: field.name.to_string(),
                kind: field.kind.as_str(),
                value: raw.to_string(),
            })?;

        Ok(Predicate::Compare(Comparison {
            field,
            operation,
            value,
        }))
    }

    /// Shorthand for an equality comparison.
    pub fn eq(name: &str, raw: &str) -> Result<Self, QueryError> {
        Self::compare(name, Operator::Equal, raw)
    }

    /// Comparison against an already typed value, for server-side filters
    /// such as token pruning cut-offs.
    pub fn compare_value(
        name: &str,
        operation: Operator,
        value: impl Into<FieldValue>,
    ) -> Result<Self, QueryError> {
        Ok(Predicate::Compare(Comparison {
            field: E::field(name)?,
            operation,
            value: value.into(),
        }))
    }

    /// Evaluates the predicate against a record in-process. Tests use it as
    /// the reference the SQL pushdown is checked against.
    #[cfg(test)]
    pub fn matches(&self, model: &E::Model) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Compare(comparison) => {
                let actual = comparison.field.value_of(model);
                comparison
                    .operation
                    .holds(actual.compare(&comparison.value))
            }
            Predicate::And(parts) => parts.iter().all(|part| part.matches(model)),
        }
    }
}

impl<E: EntityTrait> Predicate<E> {
    pub fn always() -> Self {
        Predicate::Always
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Predicate::Always)
    }

    /// Conjoins two predicates, flattening nested conjunctions and dropping
    /// `Always` operands.
    pub fn and(self, other: Predicate<E>) -> Self {
        match (self, other) {
            (Predicate::Always, other) => other,
            (this, Predicate::Always) => this,
            (Predicate::And(mut left), Predicate::And(right)) => {
                left.extend(right);
                Predicate::And(left)
            }
            (Predicate::And(mut left), other) => {
                left.push(other);
                Predicate::And(left)
            }
            (this, other) => Predicate::And(vec![this, other]),
        }
    }

    /// Lowers the predicate into a SeaORM condition for pushdown.
    ///
    /// `!=` also matches NULL columns so pushdown agrees with in-process
    /// evaluation, where a missing value is never equal to anything.
    pub fn to_condition(&self) -> Condition {
        match self {
            Predicate::Always => Condition::all(),
            Predicate::Compare(comparison) => comparison_condition(comparison),
            Predicate::And(parts) => parts
                .iter()
                .fold(Condition::all(), |condition, part| {
                    condition.add(part.to_condition())
                }),
        }
    }
}

fn comparison_condition<E: EntityTrait>(comparison: &Comparison<E>) -> Condition {
    let column = comparison.field.column;
    let value: Value = comparison.value.clone().into();

    match comparison.operation {
        Operator::Equal => Condition::all().add(column.eq(value)),
        Operator::NotEqual => Condition::any()
            .add(column.ne(value))
            .add(column.is_null()),
        Operator::Greater => Condition::all().add(column.gt(value)),
        Operator::GreaterOrEqual => Condition::all().add(column.gte(value)),
        Operator::Less => Condition::all().add(column.lt(value)),
        Operator::LessOrEqual => Condition::all().add(column.lte(value)),
    }
}

/// Compiles a client filter string into a predicate for collection `E`.
///
/// An absent or blank filter compiles to [`Predicate::Always`]. Every
/// comma-separated token is classified and resolved against the field
/// registry, so a malformed token or unknown field anywhere in the string is
/// rejected. Only the first non-empty token becomes the predicate: later
/// tokens are validated and then ignored, which means `Price>=20,Price<30`
/// filters on `Price>=20` alone. Callers that need a conjunction build it
/// with [`Predicate::and`].
pub fn compile<E: Collection>(filter: Option<&str>) -> Result<Predicate<E>, QueryError> {
    let Some(filter) = filter else {
        return Ok(Predicate::Always);
    };

    let mut predicate = Predicate::Always;
    for token in filter.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let classified = classify(token)?;
        let comparison = Predicate::compare(
            &classified.key,
            classified.operation,
            &classified.value,
        )?;
        if predicate.is_always() {
            predicate = comparison;
        }
    }

    Ok(predicate)
}
