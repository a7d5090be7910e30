//! Argument and return values passed across the callable surface.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::error::{CallError, Result};

/// The kind of a parameter or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Int,
    Float,
    Text,
    FloatList,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Text => "str",
            Kind::FloatList => "list[float]",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    FloatList(Vec<f64>),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Int(_) => Kind::Int,
            Value::Float(_) => Kind::Float,
            Value::Text(_) => Kind::Text,
            Value::FloatList(_) => Kind::FloatList,
        }
    }

    /// Convert into `target`, promoting `Int` to `Float` where a float is
    /// expected. Returns `None` for any other mismatch.
    pub fn coerce(self, target: Kind) -> Option<Value> {
        match (self, target) {
            (Value::Int(i), Kind::Float) => {
                trace!(value = i, "promoting int to float");
                Some(Value::Float(i as f64))
            }
            (value, target) if value.kind() == target => Some(value),
            _ => None,
        }
    }

    /// Build a value from a JSON literal. Arrays must hold only numbers.
    pub fn from_json(json: serde_json::Value) -> Result<Value> {
        use serde_json::Value as Json;

        match json {
            Json::Number(n) => match n.as_i64() {
                Some(i) => Ok(Value::from(i)),
                None => n
                    .as_f64()
                    .map(Value::from)
                    .ok_or_else(|| CallError::InvalidLiteral(n.to_string())),
            },
            Json::String(s) => Ok(Value::from(s)),
            Json::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Json::Number(n) => n
                        .as_f64()
                        .ok_or_else(|| CallError::InvalidLiteral(n.to_string())),
                    other => Err(CallError::InvalidLiteral(other.to_string())),
                })
                .collect::<Result<Vec<_>>>()
                .map(Value::from),
            other => Err(CallError::InvalidLiteral(other.to_string())),
        }
    }

    /// Parse a command-line argument for a parameter of kind `expected`.
    ///
    /// Text parameters take the argument verbatim. Everything else is read
    /// as a JSON literal, falling back to text when it is not valid JSON so
    /// the dispatcher can report the mismatch.
    pub fn parse_arg(raw: &str, expected: Option<Kind>) -> Result<Value> {
        if expected == Some(Kind::Text) {
            return Ok(Value::from(raw.to_string()));
        }
        match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(json) => Value::from_json(json),
            Err(_) => Ok(Value::from(raw.to_string())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => f.write_str(s),
            Value::FloatList(xs) => write!(f, "{xs:?}"),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<f64>> for Value {
    fn from(xs: Vec<f64>) -> Self {
        Value::FloatList(xs)
    }
}
