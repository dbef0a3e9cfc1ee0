use tracing::{debug, warn};

use crate::core::{
    ConfigNode, DataPoint, DateLiteral, Formatter, MergeEngine, MergeMode, OptionFields,
    OptionValue, Section, SeriesDescriptor, SeriesType, option_fields,
};
use crate::error::{ChartResult, ChartWarning};

use super::Chart;
use super::series_registry::apply_series_overrides;
use super::validation::{check_series_extras, interval_from_value, start_date_literal};

/// Default sampling period: one day in milliseconds.
pub const DEFAULT_POINT_INTERVAL_MS: i64 = 86_400_000;

/// Temporal values queued for the next added series.
///
/// `point_start` and `point_interval` are consumed independently by the
/// next `add_data_set` call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PendingTemporalState {
    pub point_start: Option<DateLiteral>,
    pub point_interval: Option<i64>,
    pub start_date_set: bool,
}

impl PendingTemporalState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.point_start.is_none() && self.point_interval.is_none()
    }
}

impl Chart {
    #[must_use]
    pub fn pending_temporal_state(&self) -> &PendingTemporalState {
        &self.temporal
    }

    /// `true` once any series type has a `plotOptions` entry.
    fn has_series_type_entries(&self) -> bool {
        self.options
            .section(Section::PlotOptions)
            .values()
            .any(|value| value.as_node().is_some())
    }

    /// Sets the point origin of time-series data.
    ///
    /// Accepts a date/time value, a date literal, or a Unix timestamp in
    /// seconds. Existing `plotOptions` entries get `pointStart` plus the
    /// default interval where they have none; the start (with the default
    /// interval) is also queued for the next added series. The tooltip gets a
    /// date formatter and the x axis becomes a datetime axis.
    pub fn set_start_date(&mut self, date: impl Into<OptionValue>) -> ChartResult<DateLiteral> {
        let literal = start_date_literal(&date.into())?;

        self.temporal.point_start = Some(literal);
        self.temporal.point_interval = Some(DEFAULT_POINT_INTERVAL_MS);
        debug!(
            point_start = %literal,
            point_interval = DEFAULT_POINT_INTERVAL_MS,
            "queued pending point start"
        );

        let plot_options = self.options.section_mut(Section::PlotOptions);
        let mut backfilled = 0usize;
        for (series_type, node) in plot_options.child_nodes_mut() {
            let mut fields = option_fields([("pointStart", OptionValue::from(literal))]);
            if !node.contains("pointInterval") {
                fields.insert(
                    "pointInterval".to_owned(),
                    OptionValue::Integer(DEFAULT_POINT_INTERVAL_MS),
                );
            }
            apply_series_overrides(node, series_type, fields, true)?;
            backfilled += 1;
        }
        if backfilled > 0 {
            debug!(backfilled, "applied point start to existing plot options");
        }

        MergeEngine::update_section(
            &mut self.options,
            Section::Tooltip,
            option_fields([("formatter", Formatter::Date)]),
            MergeMode::Merge,
        )?;
        MergeEngine::update_section(
            &mut self.options,
            Section::XAxis,
            option_fields([("type", "datetime")]),
            MergeMode::Merge,
        )?;
        self.temporal.start_date_set = true;
        Ok(literal)
    }

    /// Sets the sampling interval (milliseconds) of time-series data.
    ///
    /// The value must be an integer. Any queued interval is dropped first, so
    /// an explicit call always wins over the default queued by
    /// [`Chart::set_start_date`]. Before any series exists, or while a start
    /// date is still pending, the interval is queued; existing `plotOptions`
    /// entries get it immediately.
    ///
    /// Returns [`ChartWarning::MissingStartDate`] when no start date was set;
    /// the interval is applied anyway.
    pub fn set_interval(
        &mut self,
        interval: impl Into<OptionValue>,
    ) -> ChartResult<Option<ChartWarning>> {
        let interval = interval_from_value(&interval.into())?;
        self.temporal.point_interval = None;

        let has_entries = self.has_series_type_entries();
        if !has_entries || self.temporal.point_start.is_some() {
            self.temporal.point_interval = Some(interval);
            debug!(point_interval = interval, "queued pending point interval");
        }
        if has_entries {
            let plot_options = self.options.section_mut(Section::PlotOptions);
            for (series_type, node) in plot_options.child_nodes_mut() {
                apply_series_overrides(
                    node,
                    series_type,
                    option_fields([("pointInterval", interval)]),
                    true,
                )?;
            }
        }

        if self.temporal.start_date_set {
            return Ok(None);
        }
        let warning = ChartWarning::MissingStartDate;
        warn!(point_interval = interval, "{}", warning.message());
        Ok(Some(warning))
    }

    /// Appends a data series.
    ///
    /// Unnamed series are called `Series {n}` with `n` the 1-based count of
    /// series added so far. Pending temporal values are folded into the
    /// series options (explicit `extra_options` take precedence) and cleared.
    /// The first series of a type seeds that type's `plotOptions` entry with
    /// its options; later ones leave the entry as it is.
    ///
    /// `extra_options` may not set `type` or `data`, and a `name` given there
    /// must be a string; either mistake fails with
    /// [`ChartError::InvalidData`](crate::ChartError::InvalidData) before
    /// anything changes.
    pub fn add_data_set<P: Into<DataPoint>>(
        &mut self,
        data: impl IntoIterator<Item = P>,
        series_type: SeriesType,
        name: Option<&str>,
        mut extra_options: OptionFields,
    ) -> ChartResult<&SeriesDescriptor> {
        check_series_extras(&extra_options)?;
        self.data_set_count += 1;
        let option_name = extra_options.shift_remove("name");
        let name = match (name, option_name) {
            (Some(name), _) => name.to_owned(),
            (None, Some(OptionValue::String(name))) => name,
            _ => format!("Series {}", self.data_set_count),
        };

        let mut fields = OptionFields::new();
        if let Some(point_start) = self.temporal.point_start.take() {
            debug!(point_start = %point_start, series = %name, "consumed pending point start");
            fields.insert("pointStart".to_owned(), OptionValue::from(point_start));
        }
        if let Some(point_interval) = self.temporal.point_interval.take() {
            debug!(point_interval, series = %name, "consumed pending point interval");
            fields.insert("pointInterval".to_owned(), OptionValue::Integer(point_interval));
        }
        fields.extend(extra_options);

        let seed = if self.has_plot_options(series_type) {
            OptionFields::new()
        } else {
            fields.clone()
        };
        self.ensure_series_defaults(series_type, seed, true)?;

        let mut options = ConfigNode::new(series_type.as_str());
        MergeEngine::update(&mut options, fields, MergeMode::Merge)?;
        let data: Vec<DataPoint> = data.into_iter().map(Into::into).collect();
        debug!(
            series_type = %series_type,
            series = %name,
            points = data.len(),
            "added data set"
        );

        let index = self.series.len();
        self.series
            .push(SeriesDescriptor::new(series_type, name, data).with_options(options));
        Ok(&self.series[index])
    }
}
