use std::fmt;
use std::str::FromStr;

use crate::core::{ConfigNode, OptionValue};
use crate::error::ChartError;

/// Fields every series type accepts.
const COMMON_FIELDS: &[&str] = &[
    "allowPointSelect",
    "animation",
    "color",
    "cursor",
    "dataLabels",
    "enableMouseTracking",
    "events",
    "id",
    "index",
    "legendIndex",
    "point",
    "selected",
    "shadow",
    "showCheckbox",
    "showInLegend",
    "states",
    "stickyTracking",
    "tooltip",
    "turboThreshold",
    "visible",
    "zIndex",
];

/// Fields tying a series to cartesian axes and a temporal origin.
const AXIS_FIELDS: &[&str] = &[
    "connectEnds",
    "connectNulls",
    "cropThreshold",
    "dashStyle",
    "lineWidth",
    "linkedTo",
    "marker",
    "negativeColor",
    "pointInterval",
    "pointPlacement",
    "pointStart",
    "stacking",
    "threshold",
    "xAxis",
    "yAxis",
    "zoneAxis",
    "zones",
];

const LINE_FIELDS: &[&str] = &["step"];

const AREA_FIELDS: &[&str] = &["fillColor", "fillOpacity", "lineColor", "trackByArea"];

const COLUMN_FIELDS: &[&str] = &[
    "borderColor",
    "borderRadius",
    "borderWidth",
    "colorByPoint",
    "colors",
    "groupPadding",
    "grouping",
    "minPointLength",
    "pointPadding",
    "pointRange",
    "pointWidth",
];

const WATERFALL_FIELDS: &[&str] = &[
    "borderColor",
    "borderRadius",
    "borderWidth",
    "colorByPoint",
    "colors",
    "groupPadding",
    "lineColor",
    "minPointLength",
    "pointPadding",
    "pointWidth",
    "upColor",
];

const BUBBLE_FIELDS: &[&str] = &[
    "displayNegative",
    "maxSize",
    "minSize",
    "sizeBy",
    "zMax",
    "zMin",
    "zThreshold",
];

const BOXPLOT_FIELDS: &[&str] = &[
    "fillColor",
    "groupPadding",
    "medianColor",
    "medianWidth",
    "pointPadding",
    "pointWidth",
    "stemColor",
    "stemDashStyle",
    "stemWidth",
    "whiskerColor",
    "whiskerLength",
    "whiskerWidth",
];

const ERRORBAR_FIELDS: &[&str] = &[
    "stemColor",
    "stemDashStyle",
    "stemWidth",
    "whiskerColor",
    "whiskerLength",
    "whiskerWidth",
];

const GAUGE_FIELDS: &[&str] = &["dial", "overshoot", "pivot", "wrap", "yAxis"];

const PIE_FIELDS: &[&str] = &[
    "borderColor",
    "borderWidth",
    "center",
    "colors",
    "depth",
    "endAngle",
    "ignoreHiddenPoint",
    "innerSize",
    "minSize",
    "size",
    "slicedOffset",
    "startAngle",
];

const FUNNEL_FIELDS: &[&str] = &[
    "borderColor",
    "borderWidth",
    "center",
    "colors",
    "height",
    "ignoreHiddenPoint",
    "neckHeight",
    "neckWidth",
    "reversed",
    "slicedOffset",
    "width",
];

/// Static option schema for one series type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesTemplate {
    /// Whether the type links to cartesian axes (and so to a point origin).
    pub axis_linked: bool,
    pub extra_fields: &'static [&'static str],
}

impl SeriesTemplate {
    const fn new(axis_linked: bool, extra_fields: &'static [&'static str]) -> Self {
        Self {
            axis_linked,
            extra_fields,
        }
    }

    /// Exact field-name lookup against the template's field set.
    #[must_use]
    pub fn has_field(&self, key: &str) -> bool {
        COMMON_FIELDS.contains(&key)
            || (self.axis_linked && AXIS_FIELDS.contains(&key))
            || self.extra_fields.contains(&key)
    }

    /// Accepts a key from the field set, or a flattened key whose prefix
    /// before the first underscore is in it (e.g. `marker_enabled`).
    #[must_use]
    pub fn accepts(&self, key: &str) -> bool {
        if self.has_field(key) {
            return true;
        }
        key.split_once('_')
            .is_some_and(|(prefix, _)| self.has_field(prefix))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        let axis: &'static [&'static str] = if self.axis_linked { AXIS_FIELDS } else { &[] };
        COMMON_FIELDS
            .iter()
            .chain(axis)
            .chain(self.extra_fields)
            .copied()
    }
}

static LINE_TEMPLATE: SeriesTemplate = SeriesTemplate::new(true, LINE_FIELDS);
static AREA_TEMPLATE: SeriesTemplate = SeriesTemplate::new(true, AREA_FIELDS);
static COLUMN_TEMPLATE: SeriesTemplate = SeriesTemplate::new(true, COLUMN_FIELDS);
static WATERFALL_TEMPLATE: SeriesTemplate = SeriesTemplate::new(true, WATERFALL_FIELDS);
static SCATTER_TEMPLATE: SeriesTemplate = SeriesTemplate::new(true, &[]);
static BUBBLE_TEMPLATE: SeriesTemplate = SeriesTemplate::new(true, BUBBLE_FIELDS);
static BOXPLOT_TEMPLATE: SeriesTemplate = SeriesTemplate::new(true, BOXPLOT_FIELDS);
static ERRORBAR_TEMPLATE: SeriesTemplate = SeriesTemplate::new(true, ERRORBAR_FIELDS);
static GAUGE_TEMPLATE: SeriesTemplate = SeriesTemplate::new(false, GAUGE_FIELDS);
static PIE_TEMPLATE: SeriesTemplate = SeriesTemplate::new(false, PIE_FIELDS);
static FUNNEL_TEMPLATE: SeriesTemplate = SeriesTemplate::new(false, FUNNEL_FIELDS);

/// Series category tag; determines the default option schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeriesType {
    #[default]
    Line,
    Spline,
    Area,
    AreaSpline,
    AreaRange,
    AreaSplineRange,
    Column,
    ColumnRange,
    Bar,
    Scatter,
    Bubble,
    BoxPlot,
    ErrorBar,
    Gauge,
    Pie,
    Funnel,
    Pyramid,
    Waterfall,
    Polygon,
}

impl SeriesType {
    pub const ALL: [Self; 19] = [
        Self::Line,
        Self::Spline,
        Self::Area,
        Self::AreaSpline,
        Self::AreaRange,
        Self::AreaSplineRange,
        Self::Column,
        Self::ColumnRange,
        Self::Bar,
        Self::Scatter,
        Self::Bubble,
        Self::BoxPlot,
        Self::ErrorBar,
        Self::Gauge,
        Self::Pie,
        Self::Funnel,
        Self::Pyramid,
        Self::Waterfall,
        Self::Polygon,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Spline => "spline",
            Self::Area => "area",
            Self::AreaSpline => "areaspline",
            Self::AreaRange => "arearange",
            Self::AreaSplineRange => "areasplinerange",
            Self::Column => "column",
            Self::ColumnRange => "columnrange",
            Self::Bar => "bar",
            Self::Scatter => "scatter",
            Self::Bubble => "bubble",
            Self::BoxPlot => "boxplot",
            Self::ErrorBar => "errorbar",
            Self::Gauge => "gauge",
            Self::Pie => "pie",
            Self::Funnel => "funnel",
            Self::Pyramid => "pyramid",
            Self::Waterfall => "waterfall",
            Self::Polygon => "polygon",
        }
    }

    /// Read-only template shared by every chart instance.
    #[must_use]
    pub fn template(self) -> &'static SeriesTemplate {
        match self {
            Self::Line | Self::Spline | Self::Polygon => &LINE_TEMPLATE,
            Self::Area | Self::AreaSpline | Self::AreaRange | Self::AreaSplineRange => {
                &AREA_TEMPLATE
            }
            Self::Column | Self::ColumnRange | Self::Bar => &COLUMN_TEMPLATE,
            Self::Waterfall => &WATERFALL_TEMPLATE,
            Self::Scatter => &SCATTER_TEMPLATE,
            Self::Bubble => &BUBBLE_TEMPLATE,
            Self::BoxPlot => &BOXPLOT_TEMPLATE,
            Self::ErrorBar => &ERRORBAR_TEMPLATE,
            Self::Gauge => &GAUGE_TEMPLATE,
            Self::Pie => &PIE_TEMPLATE,
            Self::Funnel | Self::Pyramid => &FUNNEL_TEMPLATE,
        }
    }
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesType {
    type Err = ChartError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|series_type| series_type.as_str() == name)
            .ok_or_else(|| ChartError::UnknownSeriesType(name.to_owned()))
    }
}

/// One data point of a series.
#[derive(Debug, Clone, PartialEq)]
pub enum DataPoint {
    Value(OptionValue),
    Pair(OptionValue, OptionValue),
    Point(ConfigNode),
}

impl From<f64> for DataPoint {
    fn from(value: f64) -> Self {
        Self::Value(OptionValue::Float(value))
    }
}

impl From<i64> for DataPoint {
    fn from(value: i64) -> Self {
        Self::Value(OptionValue::Integer(value))
    }
}

impl From<i32> for DataPoint {
    fn from(value: i32) -> Self {
        Self::Value(OptionValue::from(value))
    }
}

impl From<OptionValue> for DataPoint {
    fn from(value: OptionValue) -> Self {
        Self::Value(value)
    }
}

impl<X: Into<OptionValue>, Y: Into<OptionValue>> From<(X, Y)> for DataPoint {
    fn from((x, y): (X, Y)) -> Self {
        Self::Pair(x.into(), y.into())
    }
}

impl From<ConfigNode> for DataPoint {
    fn from(value: ConfigNode) -> Self {
        Self::Point(value)
    }
}

/// One data series as appended to a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDescriptor {
    pub series_type: SeriesType,
    pub name: String,
    pub data: Vec<DataPoint>,
    pub options: ConfigNode,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(series_type: SeriesType, name: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            series_type,
            name: name.into(),
            data,
            options: ConfigNode::new(series_type.as_str()),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ConfigNode) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pie_template_has_no_axis_fields() {
        let pie = SeriesType::Pie.template();
        assert!(!pie.has_field("xAxis"));
        assert!(!pie.has_field("pointStart"));
        assert!(pie.has_field("innerSize"));
        assert!(SeriesType::Line.template().has_field("pointStart"));
    }

    #[test]
    fn flattened_keys_are_accepted_by_prefix() {
        let line = SeriesType::Line.template();
        assert!(line.accepts("marker_enabled"));
        assert!(!line.accepts("bogus_enabled"));
        assert!(!line.accepts("bogus"));
    }

    #[test]
    fn series_type_names_round_trip() {
        for series_type in SeriesType::ALL {
            assert_eq!(series_type.as_str().parse::<SeriesType>().ok(), Some(series_type));
        }
    }
}
