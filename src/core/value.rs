use chrono::{DateTime, NaiveDateTime, Utc};

use crate::core::{ConfigNode, DateLiteral, Formatter, LiteralValue, ScriptObject};

/// Closed set of values a configuration field can hold.
///
/// The encoder dispatches on this tag: date/time values and literals are
/// emitted unquoted, nodes recursively, everything else as plain JSON.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionValue {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<OptionValue>),
    Node(ConfigNode),
    Literal(LiteralValue),
    DateTime(DateTime<Utc>),
}

impl OptionValue {
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Node(_) => "node",
            Self::Literal(literal) => literal.kind_name(),
            Self::DateTime(_) => "datetime",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(number) => Some(*number),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(number) => Some(*number as f64),
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_node(&self) -> Option<&ConfigNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_node_mut(&mut self) -> Option<&mut ConfigNode> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_literal(&self) -> Option<&LiteralValue> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Short human-readable rendering used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Null => "null".to_owned(),
            Self::Bool(flag) => flag.to_string(),
            Self::Integer(number) => number.to_string(),
            Self::Float(number) => number.to_string(),
            Self::String(text) => format!("{text:?}"),
            Self::DateTime(time) => time.to_rfc3339(),
            other => format!("<{}>", other.type_name()),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<ConfigNode> for OptionValue {
    fn from(value: ConfigNode) -> Self {
        Self::Node(value)
    }
}

impl From<LiteralValue> for OptionValue {
    fn from(value: LiteralValue) -> Self {
        Self::Literal(value)
    }
}

impl From<Formatter> for OptionValue {
    fn from(value: Formatter) -> Self {
        Self::Literal(LiteralValue::Formatter(value))
    }
}

impl From<DateLiteral> for OptionValue {
    fn from(value: DateLiteral) -> Self {
        Self::Literal(LiteralValue::Date(value))
    }
}

impl From<ScriptObject> for OptionValue {
    fn from(value: ScriptObject) -> Self {
        Self::Literal(LiteralValue::Object(value))
    }
}

impl From<DateTime<Utc>> for OptionValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDateTime> for OptionValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(value.and_utc())
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<OptionValue>> From<Option<T>> for OptionValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(value: serde_json::Value) -> Self {
        from_json_named("", value)
    }
}

pub(crate) fn from_json_named(name: &str, value: serde_json::Value) -> OptionValue {
    match value {
        serde_json::Value::Null => OptionValue::Null,
        serde_json::Value::Bool(flag) => OptionValue::Bool(flag),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(integer) => OptionValue::Integer(integer),
            None => number.as_f64().map_or(OptionValue::Null, OptionValue::Float),
        },
        serde_json::Value::String(text) => OptionValue::String(text),
        serde_json::Value::Array(items) => OptionValue::Array(
            items
                .into_iter()
                .map(|item| from_json_named(name, item))
                .collect(),
        ),
        serde_json::Value::Object(map) => {
            let mut node = ConfigNode::new(name);
            for (key, item) in map {
                let item = from_json_named(&key, item);
                node.set(key, item);
            }
            OptionValue::Node(node)
        }
    }
}
