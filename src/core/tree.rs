use std::fmt;
use std::str::FromStr;

use crate::core::{ConfigNode, NodeLayout};
use crate::error::ChartError;

/// A fixed enumeration of top-level sections.
pub trait SectionKind: Copy + fmt::Debug + 'static {
    /// Every section, in document order.
    const ALL: &'static [Self];

    /// Key emitted in the serialized document.
    fn as_str(self) -> &'static str;

    fn index(self) -> usize;

    fn layout(self) -> NodeLayout {
        NodeLayout::Fields
    }
}

/// Per-chart configuration sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Chart,
    Colors,
    Credits,
    Drilldown,
    Exporting,
    Labels,
    Legend,
    Loading,
    Navigation,
    Pane,
    PlotOptions,
    Series,
    Subtitle,
    Title,
    Tooltip,
    XAxis,
    YAxis,
}

impl SectionKind for Section {
    const ALL: &'static [Self] = &[
        Self::Chart,
        Self::Colors,
        Self::Credits,
        Self::Drilldown,
        Self::Exporting,
        Self::Labels,
        Self::Legend,
        Self::Loading,
        Self::Navigation,
        Self::Pane,
        Self::PlotOptions,
        Self::Series,
        Self::Subtitle,
        Self::Title,
        Self::Tooltip,
        Self::XAxis,
        Self::YAxis,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Colors => "colors",
            Self::Credits => "credits",
            Self::Drilldown => "drilldown",
            Self::Exporting => "exporting",
            Self::Labels => "labels",
            Self::Legend => "legend",
            Self::Loading => "loading",
            Self::Navigation => "navigation",
            Self::Pane => "pane",
            Self::PlotOptions => "plotOptions",
            Self::Series => "series",
            Self::Subtitle => "subtitle",
            Self::Title => "title",
            Self::Tooltip => "tooltip",
            Self::XAxis => "xAxis",
            Self::YAxis => "yAxis",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn layout(self) -> NodeLayout {
        match self {
            Self::Colors => NodeLayout::Sequence,
            _ => NodeLayout::Fields,
        }
    }
}

/// Process-wide settings applied before any chart is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalSection {
    Global,
    Lang,
}

impl SectionKind for GlobalSection {
    const ALL: &'static [Self] = &[Self::Global, Self::Lang];

    fn as_str(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Lang => "lang",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

fn parse_section<S: SectionKind>(name: &str) -> Result<S, ChartError> {
    S::ALL
        .iter()
        .copied()
        .find(|section| section.as_str() == name)
        .ok_or_else(|| ChartError::UnknownSection(name.to_owned()))
}

impl FromStr for Section {
    type Err = ChartError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        parse_section(name)
    }
}

impl FromStr for GlobalSection {
    type Err = ChartError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        parse_section(name)
    }
}

/// One node per section, always present, in enumeration order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTree<S: SectionKind> {
    sections: Vec<(S, ConfigNode)>,
}

pub type ConfigTree = SectionTree<Section>;
pub type GlobalTree = SectionTree<GlobalSection>;

impl<S: SectionKind> SectionTree<S> {
    #[must_use]
    pub fn new() -> Self {
        let sections = S::ALL
            .iter()
            .map(|&section| {
                let node = match section.layout() {
                    NodeLayout::Fields => ConfigNode::new(section.as_str()),
                    NodeLayout::Sequence => {
                        ConfigNode::sequence::<&str>(section.as_str(), [])
                    }
                };
                (section, node)
            })
            .collect();
        Self { sections }
    }

    #[must_use]
    pub fn section(&self, section: S) -> &ConfigNode {
        &self.sections[section.index()].1
    }

    pub fn section_mut(&mut self, section: S) -> &mut ConfigNode {
        &mut self.sections[section.index()].1
    }

    pub fn replace_section(&mut self, section: S, node: ConfigNode) {
        self.sections[section.index()].1 = node;
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, &ConfigNode)> {
        self.sections.iter().map(|(section, node)| (*section, node))
    }
}

impl<S: SectionKind> Default for SectionTree<S> {
    fn default() -> Self {
        Self::new()
    }
}
