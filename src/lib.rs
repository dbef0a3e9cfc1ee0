//! chart-config-rs: chart option documents for a script-side charting runtime.
//!
//! A [`Chart`] owns a fixed tree of option sections, a global settings tree
//! and an ordered series list. Setters and the merge engine mutate the tree;
//! the temporal protocol threads a queued start date and interval into
//! series added later; the augmented encoder serializes everything to
//! JSON-shaped text in which code, formatters and dates appear unquoted.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig};
pub use error::{ChartError, ChartResult, ChartWarning};
