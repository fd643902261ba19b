//! Field kinds, resolved values, and string coercion.

use std::fmt;

/// The declared semantic type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Int,
    Bool,
    Float,
}

impl FieldKind {
    /// Look up a kind by its declared name. Returns `None` for unsupported kinds.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" | "str" => Some(FieldKind::String),
            "int" | "integer" | "i64" => Some(FieldKind::Int),
            "bool" | "boolean" => Some(FieldKind::Bool),
            "float" | "f64" => Some(FieldKind::Float),
            _ => None,
        }
    }

    /// Parse `raw` as a value of this kind.
    ///
    /// Strings never fail. Other kinds return `None` when `raw` is not a valid
    /// literal, letting the caller fall through to a lower-precedence source.
    pub fn coerce(self, raw: &str) -> Option<Value> {
        match self {
            FieldKind::String => Some(Value::String(raw.to_string())),
            FieldKind::Int => raw.parse::<i64>().ok().map(Value::Int),
            FieldKind::Bool => parse_bool(raw).map(Value::Bool),
            FieldKind::Float => raw.parse::<f64>().ok().map(Value::Float),
        }
    }

    /// The value a field takes when no source yields anything usable.
    pub fn zero(self) -> Value {
        match self {
            FieldKind::String => Value::String(String::new()),
            FieldKind::Int => Value::Int(0),
            FieldKind::Bool => Value::Bool(false),
            FieldKind::Float => Value::Float(0.0),
        }
    }

    /// Placeholder shown for the flag's value in help output.
    pub fn placeholder(self) -> &'static str {
        match self {
            FieldKind::String => "STRING",
            FieldKind::Int => "INT",
            FieldKind::Bool => "BOOL",
            FieldKind::Float => "FLOAT",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::String => "string",
            FieldKind::Int => "int",
            FieldKind::Bool => "bool",
            FieldKind::Float => "float",
        };
        f.write_str(name)
    }
}

/// Accepted boolean spellings.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// A resolved field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Bool(bool),
    Float(f64),
}

impl Value {
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::String(_) => FieldKind::String,
            Value::Int(_) => FieldKind::Int,
            Value::Bool(_) => FieldKind::Bool,
            Value::Float(_) => FieldKind::Float,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// Renders the literal form, which coerces back to the same value.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Int(i) => write!(f, "{i}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<Value> for toml::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => toml::Value::String(s),
            Value::Int(i) => toml::Value::Integer(i),
            Value::Bool(b) => toml::Value::Boolean(b),
            Value::Float(v) => toml::Value::Float(v),
        }
    }
}
