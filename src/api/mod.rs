mod chart;
mod chart_id;
mod configuration;
mod html;
mod loader;
mod script;

pub use chart::{Chart, ResponsiveChart};
pub use chart_id::ChartId;
pub use configuration::{ChartConfiguration, ChartConfigurationBuilder};
pub use loader::{CdnPlugin, ChartCdn, ChartEsm, ChartLoader, ChartNpm, LoadingStrategy};
pub use script::{ChartScript, ScriptConfig};
