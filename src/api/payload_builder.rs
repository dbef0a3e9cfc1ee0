use tracing::debug;

use crate::core::{OptionValue, Section};
use crate::error::ChartResult;
use crate::render::{AugmentedEncoder, ChartPayload, EncodeNode, PageRenderer};

use super::Chart;

impl Chart {
    /// Serialized option tree.
    pub fn options_json(&self) -> ChartResult<String> {
        AugmentedEncoder::serialize(EncodeNode::Tree(&self.options))
    }

    /// Serialized global settings tree.
    pub fn global_options_json(&self) -> ChartResult<String> {
        AugmentedEncoder::serialize(EncodeNode::Globals(&self.globals))
    }

    /// Serialized series list.
    pub fn series_json(&self) -> ChartResult<String> {
        AugmentedEncoder::serialize(EncodeNode::SeriesList(&self.series))
    }

    /// Inline container style: the configured style followed by the chart's
    /// width and height, in pixels unless given as a percentage.
    #[must_use]
    pub fn container_style(&self) -> String {
        let mut style = self.container_style.clone();
        let chart = self.options.section(Section::Chart);
        for dimension in ["width", "height"] {
            if let Some(value) = chart.get(dimension).and_then(css_length) {
                style.push_str(&format!("{dimension}:{value};"));
            }
        }
        style
    }

    /// Serializes everything the page-assembly collaborator needs.
    ///
    /// Each document goes through its own encoder call, so no placeholder is
    /// shared between them.
    pub fn build_payload(&self) -> ChartResult<ChartPayload> {
        let payload = ChartPayload {
            options: self.options_json()?,
            global_options: self.global_options_json()?,
            data: self.series_json()?,
            container_id: self.container_id.clone(),
            container_style: self.container_style(),
            js_sources: self.js_sources.clone(),
            css_sources: self.css_sources.clone(),
        };
        debug!(
            container = %payload.container_id,
            series = self.series.len(),
            options_len = payload.options.len(),
            data_len = payload.data.len(),
            "built chart payload"
        );
        Ok(payload)
    }

    /// Builds the payload and hands it to `renderer`, returning its markup.
    pub fn render_with<R: PageRenderer>(&self, renderer: &mut R) -> ChartResult<String> {
        let payload = self.build_payload()?;
        renderer.render(&payload)
    }
}

fn css_length(value: &OptionValue) -> Option<String> {
    match value {
        OptionValue::Integer(number) => Some(format!("{number}px")),
        OptionValue::Float(number) if number.is_finite() => Some(format!("{number}px")),
        OptionValue::String(text) if text.trim().is_empty() => None,
        OptionValue::String(text) if text.ends_with('%') => Some(text.clone()),
        OptionValue::String(text) => Some(format!("{text}px")),
        _ => None,
    }
}
