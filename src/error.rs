use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unknown option key `{key}` for series type `{series_type}`")]
    UnknownOptionKey { key: String, series_type: String },

    #[error("interval value must be an integer, got {0}")]
    InvalidIntervalType(String),

    #[error("start date format currently not supported: {0}")]
    UnsupportedDateFormat(String),

    #[error("placeholder `{placeholder}` collides with document text")]
    PlaceholderCollision { placeholder: String },

    #[error("unknown configuration section `{0}`")]
    UnknownSection(String),

    #[error("unknown series type `{0}`")]
    UnknownSeriesType(String),

    #[error("malformed literal: {0}")]
    MalformedLiteral(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Non-fatal outcome reported by an operation that still completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartWarning {
    /// A point interval was configured before any start date.
    MissingStartDate,
}

impl ChartWarning {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingStartDate => "set the start date with `set_start_date` before the interval",
        }
    }
}
