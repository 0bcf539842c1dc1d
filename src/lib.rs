//! chartjs-rs: strongly-typed Chart.js configuration.
//!
//! Configuration records reduce themselves to a [`core::Value`] tree, which
//! [`core::JsEncoder`] renders as deterministic JavaScript object-literal
//! text. The [`api`] layer wraps that text in a bootstrap script and the
//! canvas markup that hosts it.

pub mod api;
pub mod core;
pub mod datasets;
pub mod error;
pub mod options;
pub mod plugins;
pub mod scales;
pub mod telemetry;

mod macros;

pub use api::{Chart, ChartConfiguration, ChartConfigurationBuilder, ChartId, ChartScript};
pub use error::{ChartError, ChartResult};
