//! chart-viewport: viewport and scale engine for time-series line charts.
//!
//! The crate turns columnar series data and range-selector windows into
//! plain-data outputs (sample ranges, value-axis scales, view transforms,
//! label carousel states) that an external rendering layer applies.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
