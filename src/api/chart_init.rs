use tracing::debug;

use crate::core::{
    GlobalSection, LiteralValue, MergeEngine, MergeMode, OptionFields, OptionValue, Section,
};
use crate::error::{ChartError, ChartResult};

use super::validation::section_fields;
use super::{Chart, ChartConfig};

impl Chart {
    /// Creates a chart with built-in defaults, then applies `config`.
    ///
    /// Chart keywords (size, margins, background, events) are merged into the
    /// `chart` section; every entry of `config.options` is merged into the
    /// section it names. Global section names (`global`, `lang`) are accepted
    /// there too.
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        if config.render_to.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "render target must not be empty".to_owned(),
            ));
        }

        let mut chart = Self::with_defaults();
        chart.container_id = config.render_to.clone();
        chart.container_style = config.style.clone();
        chart.suppress_errors = config.suppress_errors;

        let keywords = chart_keywords(&config);
        MergeEngine::update_section(
            &mut chart.options,
            Section::Chart,
            keywords,
            MergeMode::Merge,
        )?;

        let section_count = config.options.len();
        for (name, value) in config.options {
            let fields = section_fields(&name, value)?;
            match name.parse::<Section>() {
                Ok(section) => {
                    MergeEngine::update_section(
                        &mut chart.options,
                        section,
                        fields,
                        MergeMode::Merge,
                    )?;
                }
                Err(err) => {
                    let Ok(section) = name.parse::<GlobalSection>() else {
                        return Err(err);
                    };
                    MergeEngine::update_section(
                        &mut chart.globals,
                        section,
                        fields,
                        MergeMode::Merge,
                    )?;
                }
            }
        }

        debug!(
            render_to = %chart.container_id,
            suppress_errors = chart.suppress_errors,
            section_count,
            "chart created from config"
        );
        Ok(chart)
    }
}

fn chart_keywords(config: &ChartConfig) -> OptionFields {
    let mut keywords = OptionFields::new();
    keywords.insert("renderTo".to_owned(), OptionValue::from(config.render_to.as_str()));
    if let Some(width) = &config.width {
        keywords.insert("width".to_owned(), OptionValue::from(width.clone()));
    }
    if let Some(height) = &config.height {
        keywords.insert("height".to_owned(), OptionValue::from(height.clone()));
    }
    if let Some(color) = &config.background_color {
        keywords.insert("backgroundColor".to_owned(), OptionValue::from(color.as_str()));
    }
    if let Some(events) = &config.events {
        keywords.insert(
            "events".to_owned(),
            OptionValue::Literal(LiteralValue::code(events.as_str())),
        );
    }
    for (key, margin) in [
        ("marginTop", config.margin_top),
        ("marginRight", config.margin_right),
        ("marginBottom", config.margin_bottom),
        ("marginLeft", config.margin_left),
    ] {
        if let Some(margin) = margin {
            keywords.insert(key.to_owned(), OptionValue::Float(margin));
        }
    }
    keywords
}
