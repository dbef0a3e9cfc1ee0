use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Chart construction configuration.
///
/// This type is serializable so host applications and command-line front
/// ends can load chart setup from JSON instead of calling setters one by one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_render_to")]
    pub render_to: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub suppress_errors: bool,
    #[serde(default)]
    pub width: Option<serde_json::Value>,
    #[serde(default)]
    pub height: Option<serde_json::Value>,
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub margin_top: Option<f64>,
    #[serde(default)]
    pub margin_right: Option<f64>,
    #[serde(default)]
    pub margin_bottom: Option<f64>,
    #[serde(default)]
    pub margin_left: Option<f64>,
    /// Script text for `chart.events`, emitted unquoted.
    #[serde(default)]
    pub events: Option<String>,
    /// Initial overrides keyed by section name, merged after the defaults.
    #[serde(default)]
    pub options: IndexMap<String, serde_json::Value>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            render_to: default_render_to(),
            style: String::new(),
            suppress_errors: false,
            width: None,
            height: None,
            background_color: None,
            margin_top: None,
            margin_right: None,
            margin_bottom: None,
            margin_left: None,
            events: None,
            options: IndexMap::new(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the container element id.
    #[must_use]
    pub fn with_render_to(mut self, render_to: impl Into<String>) -> Self {
        self.render_to = render_to.into();
        self
    }

    /// Sets the inline container style prefix.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Sets the chart-wide default for series key validation.
    #[must_use]
    pub fn with_suppress_errors(mut self, suppress_errors: bool) -> Self {
        self.suppress_errors = suppress_errors;
        self
    }

    /// Sets chart size; numbers are pixels, strings may carry a `%` suffix.
    #[must_use]
    pub fn with_size(
        mut self,
        width: impl Into<serde_json::Value>,
        height: impl Into<serde_json::Value>,
    ) -> Self {
        self.width = Some(width.into());
        self.height = Some(height.into());
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_margins(mut self, top: f64, right: f64, bottom: f64, left: f64) -> Self {
        self.margin_top = Some(top);
        self.margin_right = Some(right);
        self.margin_bottom = Some(bottom);
        self.margin_left = Some(left);
        self
    }

    #[must_use]
    pub fn with_events(mut self, events: impl Into<String>) -> Self {
        self.events = Some(events.into());
        self
    }

    /// Queues initial overrides for one section.
    #[must_use]
    pub fn with_section_options(
        mut self,
        section: impl Into<String>,
        fields: serde_json::Value,
    ) -> Self {
        self.options.insert(section.into(), fields);
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_render_to() -> String {
    "container".to_owned()
}
