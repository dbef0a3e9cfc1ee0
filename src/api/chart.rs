use crate::core::{
    ConfigNode, ConfigTree, GlobalSection, GlobalTree, Section, SeriesDescriptor,
};
use crate::render::{DEFAULT_CSS_SOURCES, DEFAULT_JS_SOURCES};

use super::PendingTemporalState;

/// Main facade for building one chart's option document.
///
/// `Chart` owns its option tree, global settings, series list and pending
/// temporal state exclusively; nothing is shared between instances.
#[derive(Debug, Clone)]
pub struct Chart {
    pub(super) options: ConfigTree,
    pub(super) globals: GlobalTree,
    pub(super) series: Vec<SeriesDescriptor>,
    pub(super) temporal: PendingTemporalState,
    pub(super) data_set_count: usize,
    pub(super) suppress_errors: bool,
    pub(super) container_id: String,
    pub(super) container_style: String,
    pub(super) js_sources: Vec<String>,
    pub(super) css_sources: Vec<String>,
}

impl Chart {
    /// Creates a chart carrying only the built-in defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut chart = Self {
            options: ConfigTree::new(),
            globals: GlobalTree::new(),
            series: Vec::new(),
            temporal: PendingTemporalState::default(),
            data_set_count: 0,
            suppress_errors: false,
            container_id: "container".to_owned(),
            container_style: String::new(),
            js_sources: DEFAULT_JS_SOURCES.iter().map(|&src| src.to_owned()).collect(),
            css_sources: DEFAULT_CSS_SOURCES.iter().map(|&src| src.to_owned()).collect(),
        };
        chart.load_defaults();
        chart
    }

    fn load_defaults(&mut self) {
        self.options
            .section_mut(Section::Chart)
            .set("renderTo", self.container_id.clone());
        self.options
            .section_mut(Section::Title)
            .set("text", "A New Highchart");
        self.options
            .section_mut(Section::Credits)
            .set("enabled", false);
    }

    #[must_use]
    pub fn section(&self, section: Section) -> &ConfigNode {
        self.options.section(section)
    }

    #[must_use]
    pub fn global(&self, section: GlobalSection) -> &ConfigNode {
        self.globals.section(section)
    }

    #[must_use]
    pub fn option_tree(&self) -> &ConfigTree {
        &self.options
    }

    #[must_use]
    pub fn global_tree(&self) -> &GlobalTree {
        &self.globals
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesDescriptor] {
        &self.series
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn suppress_errors(&self) -> bool {
        self.suppress_errors
    }

    pub fn set_suppress_errors(&mut self, suppress_errors: bool) {
        self.suppress_errors = suppress_errors;
    }

    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    #[must_use]
    pub fn js_sources(&self) -> &[String] {
        &self.js_sources
    }

    #[must_use]
    pub fn css_sources(&self) -> &[String] {
        &self.css_sources
    }

    pub fn add_js_source(&mut self, source: impl Into<String>) {
        self.js_sources.push(source.into());
    }

    pub fn add_js_sources<S: Into<String>>(&mut self, sources: impl IntoIterator<Item = S>) {
        self.js_sources.extend(sources.into_iter().map(Into::into));
    }

    pub fn add_css_source(&mut self, source: impl Into<String>) {
        self.css_sources.push(source.into());
    }

    pub fn add_css_sources<S: Into<String>>(&mut self, sources: impl IntoIterator<Item = S>) {
        self.css_sources.extend(sources.into_iter().map(Into::into));
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::with_defaults()
    }
}
