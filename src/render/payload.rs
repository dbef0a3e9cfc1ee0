use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Script URLs every chart page loads, in load order.
pub const DEFAULT_JS_SOURCES: &[&str] = &[
    "https://ajax.googleapis.com/ajax/libs/jquery/1.7.2/jquery.min.js",
    "https://code.highcharts.com/highcharts.js",
    "https://code.highcharts.com/highcharts-more.js",
    "https://code.highcharts.com/modules/exporting.js",
];

/// Stylesheet URLs every chart page loads.
pub const DEFAULT_CSS_SOURCES: &[&str] = &["https://www.highcharts.com/highslide/highslide.css"];

/// Everything the page-assembly collaborator needs for one chart.
///
/// The three document fields hold serialized option text in which literal
/// values already appear unquoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPayload {
    pub options: String,
    pub global_options: String,
    pub data: String,
    pub container_id: String,
    pub container_style: String,
    pub js_sources: Vec<String>,
    pub css_sources: Vec<String>,
}

impl ChartPayload {
    pub fn validate(&self) -> ChartResult<()> {
        if self.container_id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "container id must not be empty".to_owned(),
            ));
        }
        if self
            .container_id
            .chars()
            .any(|c| c.is_whitespace() || c == '"' || c == '\'')
        {
            return Err(ChartError::InvalidData(format!(
                "container id `{}` must not contain whitespace or quotes",
                self.container_id
            )));
        }
        for (name, document) in [
            ("options", &self.options),
            ("global_options", &self.global_options),
            ("data", &self.data),
        ] {
            if document.is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "payload `{name}` document must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Serializes the payload itself, for handing to out-of-process renderers.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize payload: {e}")))
    }
}
