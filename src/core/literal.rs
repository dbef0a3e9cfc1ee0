use std::fmt;

use chrono::{DateTime, Datelike, Timelike, Utc};
use indexmap::IndexMap;

use crate::core::{NodeLayout, OptionValue};
use crate::error::{ChartError, ChartResult};

/// Script constructor emitted for every date literal.
pub const DATE_CONSTRUCTOR: &str = "Date.UTC";

/// Calendar fields of a UTC date rendered as a constructor call.
///
/// `month` is zero-based because the runtime's date constructor is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateLiteral {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: Option<u32>,
}

impl DateLiteral {
    /// Second-precision literal, as produced by the start-date setter.
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Self {
            year: time.year(),
            month: time.month0(),
            day: time.day(),
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            millisecond: None,
        }
    }

    /// Millisecond-precision literal, as produced by the encoder for date values.
    #[must_use]
    pub fn from_datetime_with_millis(time: DateTime<Utc>) -> Self {
        Self {
            millisecond: Some(time.timestamp_subsec_millis().min(999)),
            ..Self::from_datetime(time)
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value, max_inclusive) in [
            ("month", self.month, 11),
            ("hour", self.hour, 23),
            ("minute", self.minute, 59),
            ("second", self.second, 60),
        ] {
            if value > max_inclusive {
                return Err(ChartError::MalformedLiteral(format!(
                    "date literal `{name}` must be <= {max_inclusive}, got {value}"
                )));
            }
        }
        if !(1..=31).contains(&self.day) {
            return Err(ChartError::MalformedLiteral(format!(
                "date literal `day` must be within 1..=31, got {}",
                self.day
            )));
        }
        if let Some(millisecond) = self.millisecond {
            if millisecond > 999 {
                return Err(ChartError::MalformedLiteral(format!(
                    "date literal `millisecond` must be <= 999, got {millisecond}"
                )));
            }
        }
        Ok(self)
    }
}

impl fmt::Display for DateLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{DATE_CONSTRUCTOR}({}, {}, {}, {}, {}, {}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if let Some(millisecond) = self.millisecond {
            write!(f, ", {millisecond}")?;
        }
        f.write_str(")")
    }
}

/// Label/tooltip formatter rendered as a script function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formatter {
    /// Series name, formatted point date and value.
    Date,
    /// Point value with optional fixed decimals and surrounding text.
    Value {
        prefix: String,
        suffix: String,
        decimals: Option<u8>,
    },
    /// Point category followed by its value.
    Category,
    /// Point name followed by its percentage share.
    Percentage { decimals: u8 },
    /// Caller-provided function body.
    Custom(String),
}

impl Formatter {
    #[must_use]
    pub fn value(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::Value {
            prefix: prefix.into(),
            suffix: suffix.into(),
            decimals: None,
        }
    }

    #[must_use]
    pub fn custom(body: impl Into<String>) -> Self {
        Self::Custom(body.into())
    }

    pub fn to_script(&self) -> ChartResult<String> {
        let body = match self {
            Self::Date => "return '<b>' + this.series.name + '</b><br/>' + \
                 Highcharts.dateFormat('%Y-%m-%d %H:%M:%S', this.x) + ': ' + this.y;"
                .to_owned(),
            Self::Value {
                prefix,
                suffix,
                decimals,
            } => {
                let value = match decimals {
                    Some(decimals) => format!("Highcharts.numberFormat(this.y, {decimals})"),
                    None => "this.y".to_owned(),
                };
                format!(
                    "return {} + {value} + {};",
                    script_string(prefix)?,
                    script_string(suffix)?
                )
            }
            Self::Category => "return '<b>' + this.x + '</b>: ' + this.y;".to_owned(),
            Self::Percentage { decimals } => format!(
                "return '<b>' + this.point.name + '</b>: ' + \
                 Highcharts.numberFormat(this.percentage, {decimals}) + ' %';"
            ),
            Self::Custom(body) => {
                if body.trim().is_empty() {
                    return Err(ChartError::MalformedLiteral(
                        "custom formatter body must not be empty".to_owned(),
                    ));
                }
                body.trim().to_owned()
            }
        };
        Ok(format!("function() {{ {body} }}"))
    }
}

/// Object literal whose keys are bare script identifiers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScriptObject {
    entries: IndexMap<String, OptionValue>,
}

impl ScriptObject {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an object from CSS declarations, camel-casing kebab-case names.
    #[must_use]
    pub fn css<K, V>(declarations: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<OptionValue>,
    {
        let mut object = Self::new();
        for (property, value) in declarations {
            object.insert(camel_case_property(property.as_ref()), value);
        }
        object
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.entries.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_script(&self) -> ChartResult<String> {
        let mut parts = Vec::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            if !is_script_identifier(key) {
                return Err(ChartError::MalformedLiteral(format!(
                    "script object key `{key}` is not a plain identifier"
                )));
            }
            parts.push(format!("{key}: {}", script_value(value)?));
        }
        Ok(format!("{{{}}}", parts.join(", ")))
    }
}

/// A value emitted unquoted in the serialized document.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Code(String),
    Formatter(Formatter),
    Date(DateLiteral),
    Object(ScriptObject),
}

impl LiteralValue {
    #[must_use]
    pub fn code(text: impl Into<String>) -> Self {
        Self::Code(text.into())
    }

    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Code(_) => "code",
            Self::Formatter(_) => "formatter",
            Self::Date(_) => "date",
            Self::Object(_) => "object",
        }
    }

    /// Raw script text substituted into the document.
    pub fn to_script(&self) -> ChartResult<String> {
        match self {
            Self::Code(text) => {
                if text.trim().is_empty() {
                    return Err(ChartError::MalformedLiteral(
                        "code fragment must not be empty".to_owned(),
                    ));
                }
                Ok(text.clone())
            }
            Self::Formatter(formatter) => formatter.to_script(),
            Self::Date(date) => Ok(date.validate()?.to_string()),
            Self::Object(object) => object.to_script(),
        }
    }
}

impl From<Formatter> for LiteralValue {
    fn from(value: Formatter) -> Self {
        Self::Formatter(value)
    }
}

impl From<DateLiteral> for LiteralValue {
    fn from(value: DateLiteral) -> Self {
        Self::Date(value)
    }
}

impl From<ScriptObject> for LiteralValue {
    fn from(value: ScriptObject) -> Self {
        Self::Object(value)
    }
}

fn script_value(value: &OptionValue) -> ChartResult<String> {
    match value {
        OptionValue::Null => Ok("null".to_owned()),
        OptionValue::Bool(flag) => Ok(flag.to_string()),
        OptionValue::Integer(number) => Ok(number.to_string()),
        OptionValue::Float(number) => Ok(serde_json::Value::from(*number).to_string()),
        OptionValue::String(text) => script_string(text),
        OptionValue::Array(items) => {
            let items = items
                .iter()
                .map(script_value)
                .collect::<ChartResult<Vec<_>>>()?;
            Ok(format!("[{}]", items.join(", ")))
        }
        OptionValue::Node(node) => match node.layout() {
            NodeLayout::Sequence => {
                let items = node
                    .values()
                    .map(script_value)
                    .collect::<ChartResult<Vec<_>>>()?;
                Ok(format!("[{}]", items.join(", ")))
            }
            NodeLayout::Fields => {
                let mut object = ScriptObject::new();
                for (key, value) in node.iter() {
                    object.insert(key, value.clone());
                }
                object.to_script()
            }
        },
        OptionValue::Literal(literal) => literal.to_script(),
        OptionValue::DateTime(time) => Ok(DateLiteral::from_datetime_with_millis(*time).to_string()),
    }
}

fn script_string(text: &str) -> ChartResult<String> {
    serde_json::to_string(text)
        .map_err(|e| ChartError::MalformedLiteral(format!("failed to quote script string: {e}")))
}

fn is_script_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

fn camel_case_property(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper_next = false;
    for c in property.trim().chars() {
        if c == '-' {
            upper_next = !out.is_empty();
            continue;
        }
        if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
