use std::sync::Arc;

use tracing::debug;

use crate::core::{ChartType, JsEncoder, ToValue, Value};
use crate::datasets::ChartData;
use crate::error::{ChartError, ChartResult};
use crate::options::ChartOptions;
use crate::plugins::ChartPlugin;

/// Root of a chart description: `{ type, data, options, plugins? }`.
///
/// A configuration is immutable once built; every `with_*` call returns a new
/// value. Rendering is a pure function of the configuration, so repeated
/// calls yield byte-identical text.
#[derive(Debug, Clone)]
pub struct ChartConfiguration {
    chart_type: ChartType,
    data: ChartData,
    options: Option<ChartOptions>,
    plugins: Vec<Arc<dyn ChartPlugin>>,
}

impl ChartConfiguration {
    #[must_use]
    pub fn new(chart_type: ChartType, data: ChartData) -> Self {
        Self {
            chart_type,
            data,
            options: None,
            plugins: Vec::new(),
        }
    }

    #[must_use]
    pub fn builder(chart_type: ChartType) -> ChartConfigurationBuilder {
        ChartConfigurationBuilder::new(chart_type)
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn with_plugin(mut self, plugin: impl ChartPlugin + 'static) -> Self {
        self.plugins.push(Arc::new(plugin));
        self
    }

    #[must_use]
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    #[must_use]
    pub fn data(&self) -> &ChartData {
        &self.data
    }

    #[must_use]
    pub fn options(&self) -> Option<&ChartOptions> {
        self.options.as_ref()
    }

    #[must_use]
    pub fn plugins(&self) -> &[Arc<dyn ChartPlugin>] {
        &self.plugins
    }

    /// Replaces the options with `f(current)`, starting from the defaults when unset.
    pub(crate) fn map_options(mut self, f: impl FnOnce(ChartOptions) -> ChartOptions) -> Self {
        let options = self.options.take().unwrap_or_default();
        self.options = Some(f(options));
        self
    }

    /// Renders the configuration with the default two-space encoder.
    #[must_use]
    pub fn to_javascript(&self) -> String {
        self.to_javascript_with(JsEncoder::default(), 0)
    }

    /// Renders the configuration as if nested `depth` object levels deep, so
    /// it can be embedded into surrounding source.
    #[must_use]
    pub fn to_javascript_with(&self, encoder: JsEncoder, depth: usize) -> String {
        let text = encoder.encode_at(&self.to_value(), depth);
        debug!(
            chart_type = %self.chart_type,
            datasets = self.data.dataset_count(),
            plugins = self.plugins.len(),
            bytes = text.len(),
            "rendered chart configuration"
        );
        text
    }
}

impl ToValue for ChartConfiguration {
    fn to_value(&self) -> Value {
        let options = self
            .options
            .as_ref()
            .map_or_else(|| Value::object().build(), ToValue::to_value);
        let plugins: Vec<Value> = self
            .plugins
            .iter()
            .filter(|plugin| plugin.enabled())
            .map(|plugin| ChartPlugin::to_value(plugin.as_ref()))
            .collect();

        let root = Value::object()
            .field("type", &self.chart_type)
            .field("data", &self.data)
            .value("options", options);
        if plugins.is_empty() {
            root.build()
        } else {
            root.value("plugins", Value::Array(plugins)).build()
        }
    }
}

/// Step-by-step construction of a [`ChartConfiguration`].
#[derive(Debug, Clone)]
pub struct ChartConfigurationBuilder {
    chart_type: ChartType,
    data: Option<ChartData>,
    options: Option<ChartOptions>,
    plugins: Vec<Arc<dyn ChartPlugin>>,
}

impl ChartConfigurationBuilder {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            data: None,
            options: None,
            plugins: Vec::new(),
        }
    }

    #[must_use]
    pub fn data(mut self, data: ChartData) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn options(mut self, options: ChartOptions) -> Self {
        self.options = Some(options);
        self
    }

    #[must_use]
    pub fn add_plugin(mut self, plugin: impl ChartPlugin + 'static) -> Self {
        self.plugins.push(Arc::new(plugin));
        self
    }

    /// Fails with [`ChartError::MissingData`] when no data was supplied.
    pub fn build(self) -> ChartResult<ChartConfiguration> {
        let data = self.data.ok_or(ChartError::MissingData)?;
        Ok(ChartConfiguration {
            chart_type: self.chart_type,
            data,
            options: self.options,
            plugins: self.plugins,
        })
    }
}
