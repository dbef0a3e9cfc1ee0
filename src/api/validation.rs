use chrono::DateTime;

use crate::core::{DateLiteral, LiteralValue, OptionFields, OptionValue, SeriesTemplate};
use crate::error::{ChartError, ChartResult};

/// Returns the first key the template does not accept.
pub(super) fn first_unknown_key<'a>(
    template: &SeriesTemplate,
    fields: &'a OptionFields,
) -> Option<&'a str> {
    fields
        .keys()
        .map(String::as_str)
        .find(|key| !template.accepts(key))
}

pub(super) fn interval_from_value(value: &OptionValue) -> ChartResult<i64> {
    value
        .as_i64()
        .ok_or_else(|| ChartError::InvalidIntervalType(value.describe()))
}

/// Converts a start-date argument to a second-precision UTC date literal.
///
/// Numbers are Unix timestamps in seconds.
pub(super) fn start_date_literal(value: &OptionValue) -> ChartResult<DateLiteral> {
    match value {
        OptionValue::DateTime(time) => Ok(DateLiteral::from_datetime(*time)),
        OptionValue::Literal(LiteralValue::Date(literal)) => literal
            .validate()
            .map_err(|_| ChartError::UnsupportedDateFormat(value.describe())),
        OptionValue::Integer(seconds) => DateTime::from_timestamp(*seconds, 0)
            .map(DateLiteral::from_datetime)
            .ok_or_else(|| ChartError::UnsupportedDateFormat(value.describe())),
        OptionValue::Float(seconds) if seconds.is_finite() => {
            let whole = seconds.floor();
            let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
            DateTime::from_timestamp(whole as i64, nanos)
                .map(DateLiteral::from_datetime)
                .ok_or_else(|| ChartError::UnsupportedDateFormat(value.describe()))
        }
        other => Err(ChartError::UnsupportedDateFormat(other.describe())),
    }
}

/// Series fields the encoder writes from the descriptor itself.
const RESERVED_SERIES_KEYS: [&str; 2] = ["type", "data"];

/// Rejects extra series options that would shadow the descriptor's own
/// fields or carry a non-string name.
pub(super) fn check_series_extras(extra_options: &OptionFields) -> ChartResult<()> {
    if let Some(key) = extra_options
        .keys()
        .find(|key| RESERVED_SERIES_KEYS.contains(&key.as_str()))
    {
        return Err(ChartError::InvalidData(format!(
            "series option `{key}` is reserved; pass it through `add_data_set` arguments"
        )));
    }
    match extra_options.get("name") {
        None | Some(OptionValue::String(_)) => Ok(()),
        Some(other) => Err(ChartError::InvalidData(format!(
            "series name must be a string, got {}",
            other.type_name()
        ))),
    }
}

/// Converts a JSON object of section overrides into option fields.
pub(super) fn section_fields(section: &str, value: serde_json::Value) -> ChartResult<OptionFields> {
    match OptionValue::from(value) {
        OptionValue::Node(node) => Ok(node.into_fields()),
        other => Err(ChartError::InvalidData(format!(
            "options for section `{section}` must be an object, got {}",
            other.type_name()
        ))),
    }
}
