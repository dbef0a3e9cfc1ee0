use tracing::debug;

use crate::core::{
    ConfigNode, MergeEngine, MergeMode, OptionFields, Section, SeriesTemplate, SeriesType,
};
use crate::error::{ChartError, ChartResult};

use super::Chart;
use super::validation::first_unknown_key;

impl Chart {
    /// Materializes the `plotOptions` entry for `series_type` and merges
    /// `overrides` into it.
    ///
    /// With `suppress_errors` off, any key outside the type's field set fails
    /// the whole call with [`ChartError::UnknownOptionKey`] and nothing is
    /// applied. With it on, unknown keys are stored as-is.
    pub fn ensure_series_defaults(
        &mut self,
        series_type: SeriesType,
        overrides: OptionFields,
        suppress_errors: bool,
    ) -> ChartResult<&ConfigNode> {
        check_series_keys(
            series_type.as_str(),
            Some(series_type.template()),
            &overrides,
            suppress_errors,
        )?;
        let plot_options = self.options.section_mut(Section::PlotOptions);
        let created = !plot_options.contains(series_type.as_str());
        let node = plot_options.ensure_child(series_type.as_str())?;
        if created {
            debug!(series_type = %series_type, "materialized plot options entry");
        }
        MergeEngine::update(node, overrides, MergeMode::Merge)?;
        Ok(&*node)
    }

    /// Same as [`Chart::ensure_series_defaults`] using the chart-wide
    /// suppression flag.
    pub fn set_plot_options(
        &mut self,
        series_type: SeriesType,
        overrides: OptionFields,
    ) -> ChartResult<&ConfigNode> {
        let suppress_errors = self.suppress_errors;
        self.ensure_series_defaults(series_type, overrides, suppress_errors)
    }

    #[must_use]
    pub fn plot_options(&self, series_type: SeriesType) -> Option<&ConfigNode> {
        self.options
            .section(Section::PlotOptions)
            .child(series_type.as_str())
    }

    #[must_use]
    pub fn has_plot_options(&self, series_type: SeriesType) -> bool {
        self.plot_options(series_type).is_some()
    }
}

/// Checks `overrides` against a series-type field set. `template` is `None`
/// for sub-nodes whose key is not a known series type; every key counts as
/// unknown there.
pub(super) fn check_series_keys(
    series_type: &str,
    template: Option<&SeriesTemplate>,
    overrides: &OptionFields,
    suppress_errors: bool,
) -> ChartResult<()> {
    let unknown = match template {
        Some(template) => first_unknown_key(template, overrides),
        None => overrides.keys().next().map(String::as_str),
    };
    if let Some(key) = unknown {
        if !suppress_errors {
            return Err(ChartError::UnknownOptionKey {
                key: key.to_owned(),
                series_type: series_type.to_owned(),
            });
        }
        debug!(key, series_type, "passing through unknown series option");
    }
    Ok(())
}

/// Validates (unless suppressed) and merges `overrides` into an existing
/// series-type sub-node.
pub(super) fn apply_series_overrides(
    node: &mut ConfigNode,
    series_type: &str,
    overrides: OptionFields,
    suppress_errors: bool,
) -> ChartResult<()> {
    let template = series_type.parse::<SeriesType>().ok().map(SeriesType::template);
    check_series_keys(series_type, template, &overrides, suppress_errors)?;
    MergeEngine::update(node, overrides, MergeMode::Merge)
}
