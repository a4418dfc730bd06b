use serde_json::{Map, Value};
use thiserror::Error;

use crate::input::coerce::coerce_cell;
use crate::model::construct::{CONSTRUCTS, Construct, N_CONSTRUCTS};

/// The user's own record. `age` and `iq` are truncated to integers on decode.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub age: i64,
    pub iq: i64,
    pub scores: [f64; N_CONSTRUCTS],
}

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("missing field: {0}")]
    MissingField(String),
    #[error("invalid field {field}: {reason}")]
    InvalidField { field: String, reason: String },
    #[error("query must be a JSON object")]
    NotAnObject,
}

impl QueryError {
    pub fn field(&self) -> Option<&str> {
        match self {
            QueryError::MissingField(f) => Some(f),
            QueryError::InvalidField { field, .. } => Some(field),
            QueryError::NotAnObject => None,
        }
    }
}

impl Query {
    pub fn score(&self, construct: Construct) -> f64 {
        self.scores[construct.index()]
    }

    pub fn from_json_str(text: &str) -> Result<Self, QueryError> {
        let value: Value = serde_json::from_str(text).map_err(|e| QueryError::InvalidField {
            field: "<document>".to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&value)
    }

    pub fn from_json(value: &Value) -> Result<Self, QueryError> {
        let obj = value.as_object().ok_or(QueryError::NotAnObject)?;

        let age = required_integer(obj, &["age"])?;
        let iq = required_integer(obj, &["IQ", "iq"])?;

        let mut scores = [0.0f64; N_CONSTRUCTS];
        for construct in CONSTRUCTS {
            scores[construct.index()] = required_number(obj, &[construct.name()])?;
        }

        Ok(Query { age, iq, scores })
    }
}

/// Largest magnitude an `f64` holds as an exact integer (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Truncates toward zero; values beyond the exact-integer range are rejected rather than saturated.
fn required_integer(obj: &Map<String, Value>, keys: &[&str]) -> Result<i64, QueryError> {
    let value = required_number(obj, keys)?.trunc();
    if value.abs() > MAX_EXACT_INTEGER {
        return Err(QueryError::InvalidField {
            field: keys[0].to_string(),
            reason: format!("{value} is out of range"),
        });
    }
    Ok(value as i64)
}

/// First key in `keys` is the canonical name reported on failure; the rest are aliases.
fn required_number(obj: &Map<String, Value>, keys: &[&str]) -> Result<f64, QueryError> {
    let canonical = keys[0];
    let Some(value) = keys.iter().find_map(|k| obj.get(*k)) else {
        return Err(QueryError::MissingField(canonical.to_string()));
    };
    let parsed = match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => coerce_cell(s),
        Value::Null => return Err(QueryError::MissingField(canonical.to_string())),
        _ => None,
    };
    parsed.ok_or_else(|| QueryError::InvalidField {
        field: canonical.to_string(),
        reason: format!("expected a number, got {value}"),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/query.rs"]
mod tests;
