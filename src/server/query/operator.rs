use regex::Regex;
use std::{fmt, sync::LazyLock};

use crate::server::error::query::QueryError;

/// Comparison operator of a filter token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
}

impl Operator {
    #[cfg(test)]
    pub const ALL: [Operator; 6] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::Greater,
        Operator::GreaterOrEqual,
        Operator::Less,
        Operator::LessOrEqual,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::Greater => ">",
            Operator::GreaterOrEqual => ">=",
            Operator::Less => "<",
            Operator::LessOrEqual => "<=",
        }
    }

    /// Whether `record <op> value` holds given `record.compare(value)`.
    ///
    /// An incomparable pair (null record field) only satisfies `!=`.
    #[cfg(test)]
    pub fn holds(&self, ordering: Option<std::cmp::Ordering>) -> bool {
        use std::cmp::Ordering;

        match self {
            Operator::Equal => ordering == Some(Ordering::Equal),
            Operator::NotEqual => ordering != Some(Ordering::Equal),
            Operator::Greater => ordering == Some(Ordering::Greater),
            Operator::GreaterOrEqual => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            }
            Operator::Less => ordering == Some(Ordering::Less),
            Operator::LessOrEqual => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One filter token split into its parts. `key` and `value` are trimmed but
/// otherwise unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedOperator {
    pub key: String,
    pub operation: Operator,
    pub value: String,
}

/// Operator patterns in match order. Two-character operators come before the
/// single characters they contain so `Age>=18` never splits on `>` or `=`.
static PATTERNS: LazyLock<Vec<(Operator, Regex)>> = LazyLock::new(|| {
    [
        (Operator::NotEqual, r"\s*!=\s*"),
        (Operator::GreaterOrEqual, r"\s*>=\s*"),
        (Operator::LessOrEqual, r"\s*<=\s*"),
        (Operator::Equal, r"\s*=\s*"),
        (Operator::Greater, r"\s*>\s*"),
        (Operator::Less, r"\s*<\s*"),
    ]
    .into_iter()
    .map(|(operation, pattern)| {
        (
            operation,
            Regex::new(pattern).expect("operator pattern is a valid regex"),
        )
    })
    .collect()
});

/// Classifies a single `Field<op>Value` token.
///
/// The first pattern that matches anywhere in the token wins and the token is
/// split on that first occurrence, so the value may itself contain operator
/// characters (`Email=a=b` has value `a=b`).
///
/// # Returns
/// - `Ok(ClassifiedOperator)` - The key, operator and value of the token
/// - `Err(QueryError::MalformedFilter)` - No operator present in the token
pub fn classify(token: &str) -> Result<ClassifiedOperator, QueryError> {
    for (operation, pattern) in PATTERNS.iter() {
        if let Some(found) = pattern.find(token) {
            return Ok(ClassifiedOperator {
                key: token[..found.start()].trim().to_string(),
                operation: *operation,
                value: token[found.end()..].trim().to_string(),
            });
        }
    }

    Err(QueryError::MalformedFilter(token.to_string()))
}
