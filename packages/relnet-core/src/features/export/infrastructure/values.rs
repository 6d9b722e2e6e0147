//! Attribute value ↔ text for the XML formats

use serde_json::Value;

use crate::shared::models::Attributes;

/// Typed column for one attribute key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum AttrType {
    Long,
    Double,
    Boolean,
    String,
}

impl AttrType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::String => "string",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "long" | "integer" | "int" => Self::Long,
            "double" | "float" => Self::Double,
            "boolean" => Self::Boolean,
            _ => Self::String,
        }
    }

    /// Narrowest type that fits every value
    pub fn infer<'a>(values: impl Iterator<Item = &'a Value>) -> Self {
        let mut current: Option<Self> = None;
        for value in values {
            let this = match value {
                Value::Number(n) if n.is_i64() || n.is_u64() => Self::Long,
                Value::Number(_) => Self::Double,
                Value::Bool(_) => Self::Boolean,
                _ => Self::String,
            };
            current = Some(match (current, this) {
                (None, t) => t,
                (Some(a), b) if a == b => a,
                (Some(Self::Long), Self::Double) | (Some(Self::Double), Self::Long) => Self::Double,
                _ => Self::String,
            });
        }
        current.unwrap_or(Self::String)
    }

    /// Decode text written by [`to_text`]; unparsable text stays a string
    ///
    /// A `double` column can hold integers when ints and floats were mixed
    /// under one key. Floats are always written with a fraction or exponent
    /// (`1.0`, `1e-7`), so integer literals in such a column decode as ints.
    pub fn decode(&self, text: &str) -> Value {
        match self {
            Self::Long => text
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::String(text.to_string())),
            Self::Double => match text.parse::<i64>() {
                Ok(int) => Value::from(int),
                Err(_) => text
                    .parse::<f64>()
                    .ok()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or_else(|| Value::String(text.to_string())),
            },
            Self::Boolean => match text {
                "true" => Value::Bool(true),
                "false" => Value::Bool(false),
                other => Value::String(other.to_string()),
            },
            Self::String => Value::String(text.to_string()),
        }
    }
}

/// Scalars as plain text, arrays and objects as JSON
pub(super) fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Attribute keys in first-seen order with their inferred types
pub(super) fn columns(maps: &[&Attributes]) -> Vec<(String, AttrType)> {
    let mut keys: Vec<&String> = Vec::new();
    for map in maps {
        for key in map.keys() {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
    }
    keys.into_iter()
        .map(|key| {
            let ty = AttrType::infer(maps.iter().filter_map(|m| m.get(key)));
            (key.clone(), ty)
        })
        .collect()
}
