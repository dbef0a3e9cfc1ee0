use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    ConfigNode, GlobalSection, MergeEngine, MergeMode, OptionFields, OptionValue, Section,
    SectionKind,
};

use crate::error::ChartResult;

use super::Chart;

impl Chart {
    /// Applies `fields` to one section in merge or force mode.
    pub fn set_options(
        &mut self,
        section: Section,
        fields: OptionFields,
        mode: MergeMode,
    ) -> ChartResult<()> {
        MergeEngine::update_section(&mut self.options, section, fields, mode)
    }

    /// Applies several sections' updates in the order given, stopping at the
    /// first section that rejects its update.
    pub fn set_options_batch(
        &mut self,
        updates: IndexMap<Section, OptionFields>,
        mode: MergeMode,
    ) -> ChartResult<()> {
        for (section, fields) in updates {
            self.set_options(section, fields, mode)?;
        }
        Ok(())
    }

    /// Replaces a section with a caller-built node.
    pub fn replace_section(&mut self, section: Section, node: ConfigNode) {
        MergeEngine::replace_section(&mut self.options, section, node);
    }

    pub fn set_global_options(
        &mut self,
        section: GlobalSection,
        fields: OptionFields,
    ) -> ChartResult<()> {
        MergeEngine::update_section(&mut self.globals, section, fields, MergeMode::Merge)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.options
            .section(Section::Title)
            .get("text")
            .and_then(OptionValue::as_str)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.options
            .section_mut(Section::Title)
            .set("text", title.into());
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.options
            .section_mut(Section::Subtitle)
            .set("text", subtitle.into());
    }

    #[must_use]
    pub fn colors(&self) -> Vec<&str> {
        self.options
            .section(Section::Colors)
            .values()
            .filter_map(OptionValue::as_str)
            .collect()
    }

    /// Replaces the color palette; the section exports as an array.
    pub fn set_colors<S: Into<String>>(&mut self, colors: impl IntoIterator<Item = S>) {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        debug!(count = colors.len(), "set color palette");
        self.options.replace_section(
            Section::Colors,
            ConfigNode::sequence(Section::Colors.as_str(), colors),
        );
    }

    #[must_use]
    pub fn chart_background(&self) -> Option<&str> {
        self.options
            .section(Section::Chart)
            .get("backgroundColor")
            .and_then(OptionValue::as_str)
    }

    pub fn set_chart_background(&mut self, background: impl Into<String>) {
        self.options
            .section_mut(Section::Chart)
            .set("backgroundColor", background.into());
    }

    pub fn set_x_axis(&mut self, fields: OptionFields) -> ChartResult<()> {
        self.set_options(Section::XAxis, fields, MergeMode::Merge)
    }

    /// Merges into the y axis; after [`Chart::set_y_axes`] every axis gets
    /// the fields.
    pub fn set_y_axis(&mut self, fields: OptionFields) -> ChartResult<()> {
        self.set_options(Section::YAxis, fields, MergeMode::Merge)
    }

    /// Replaces the y-axis section with several axes, exported as an array.
    pub fn set_y_axes(&mut self, axes: Vec<OptionFields>) {
        debug!(count = axes.len(), "set multiple y axes");
        let axes = axes
            .into_iter()
            .enumerate()
            .map(|(index, fields)| {
                ConfigNode::from_fields(format!("{}{index}", Section::YAxis.as_str()), fields)
            });
        self.options.replace_section(
            Section::YAxis,
            ConfigNode::sequence(Section::YAxis.as_str(), axes),
        );
    }
}
