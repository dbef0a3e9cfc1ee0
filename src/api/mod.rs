mod chart;
mod chart_config;
mod chart_init;
mod options_controller;
mod payload_builder;
mod series_registry;
mod temporal_controller;
mod validation;

pub use chart::Chart;
pub use chart_config::ChartConfig;
pub use temporal_controller::{DEFAULT_POINT_INTERVAL_MS, PendingTemporalState};
