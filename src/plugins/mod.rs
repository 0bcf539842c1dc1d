//! Built-in plugin option groups (`options.plugins`) and inline plugins
//! (the root `plugins` array).

mod legend;
mod title;
mod tooltip;

pub use legend::{LegendAlign, LegendLabelOptions, LegendOptions, LegendPosition, LegendTitle};
pub use title::{SubtitleOptions, TitleOptions, TitlePosition, TitleText};
pub use tooltip::{TooltipCallbacks, TooltipOptions, TooltipPosition, TooltipYAlign};

use std::fmt;

use indexmap::IndexMap;

use crate::core::{JsCode, ToValue, Value};
use crate::macros::js_enum;

/// `options.plugins`: configuration of the built-in plugins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginOptions {
    pub legend: Option<LegendOptions>,
    pub tooltip: Option<TooltipOptions>,
    pub title: Option<TitleOptions>,
    pub subtitle: Option<SubtitleOptions>,
    pub filler: Option<FillerOptions>,
    pub decimation: Option<DecimationOptions>,
}

impl PluginOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipOptions) -> Self {
        self.tooltip = Some(tooltip);
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: TitleOptions) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: SubtitleOptions) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    #[must_use]
    pub fn with_filler(mut self, filler: FillerOptions) -> Self {
        self.filler = Some(filler);
        self
    }

    #[must_use]
    pub fn with_decimation(mut self, decimation: DecimationOptions) -> Self {
        self.decimation = Some(decimation);
        self
    }
}

impl ToValue for PluginOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("legend", self.legend.as_ref())
            .optional("tooltip", self.tooltip.as_ref())
            .optional("title", self.title.as_ref())
            .optional("subtitle", self.subtitle.as_ref())
            .optional("filler", self.filler.as_ref())
            .optional("decimation", self.decimation.as_ref())
            .build()
    }
}

js_enum! {
    pub enum DrawTime {
        BeforeDraw => "beforeDraw",
        BeforeDatasetDraw => "beforeDatasetDraw",
        BeforeDatasetsDraw => "beforeDatasetsDraw",
        AfterDatasetsDraw => "afterDatasetsDraw",
        AfterDatasetDraw => "afterDatasetDraw",
        AfterDraw => "afterDraw",
    }
}

/// `options.plugins.filler`.
#[derive(Debug, Clone, PartialEq)]
pub struct FillerOptions {
    pub propagate: Option<bool>,
    pub draw_time: Option<DrawTime>,
}

impl Default for FillerOptions {
    fn default() -> Self {
        Self {
            propagate: Some(true),
            draw_time: Some(DrawTime::BeforeDatasetsDraw),
        }
    }
}

impl ToValue for FillerOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("propagate", self.propagate.as_ref())
            .optional("drawTime", self.draw_time.as_ref())
            .build()
    }
}

js_enum! {
    pub enum DecimationAlgorithm {
        MinMax => "min-max",
        Lttb => "lttb",
    }
}

/// `options.plugins.decimation`. Only applies to line datasets on linear or
/// time x axes.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimationOptions {
    pub enabled: Option<bool>,
    pub algorithm: Option<DecimationAlgorithm>,
    /// Target sample count for `lttb`.
    pub samples: Option<u32>,
    pub threshold: Option<u32>,
}

impl Default for DecimationOptions {
    fn default() -> Self {
        Self {
            enabled: Some(false),
            algorithm: Some(DecimationAlgorithm::MinMax),
            samples: None,
            threshold: None,
        }
    }
}

impl DecimationOptions {
    #[must_use]
    pub fn lttb(samples: u32) -> Self {
        Self {
            enabled: Some(true),
            algorithm: Some(DecimationAlgorithm::Lttb),
            samples: Some(samples),
            threshold: None,
        }
    }
}

impl ToValue for DecimationOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("enabled", self.enabled.as_ref())
            .optional("algorithm", self.algorithm.as_ref())
            .optional("samples", self.samples.as_ref())
            .optional("threshold", self.threshold.as_ref())
            .build()
    }
}

/// A plugin registered inline on one chart (the root `plugins` array).
///
/// Implementations must be immutable after construction; rendering only
/// borrows them.
pub trait ChartPlugin: fmt::Debug + Send + Sync {
    fn id(&self) -> &str;

    /// Disabled plugins are left out of the rendered configuration.
    fn enabled(&self) -> bool {
        true
    }

    fn to_value(&self) -> Value {
        Value::object().field("id", self.id()).build()
    }
}

/// Plugin defined by an id and a set of lifecycle hooks such as
/// `beforeDraw` or `afterDatasetsDraw`.
///
/// Hooks render in the order they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct InlinePlugin {
    id: String,
    enabled: bool,
    hooks: IndexMap<String, JsCode>,
}

impl InlinePlugin {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            enabled: true,
            hooks: IndexMap::new(),
        }
    }

    /// Adds or replaces the hook called `name`.
    #[must_use]
    pub fn hook(mut self, name: impl Into<String>, code: impl Into<JsCode>) -> Self {
        self.hooks.insert(name.into(), code.into());
        self
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn hooks(&self) -> &IndexMap<String, JsCode> {
        &self.hooks
    }
}

impl ChartPlugin for InlinePlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn to_value(&self) -> Value {
        self.hooks
            .iter()
            .fold(Value::object().field("id", self.id.as_str()), |object, (name, code)| {
                object.field(name, code)
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_plugin_renders_id_then_hooks_in_order() {
        let plugin = InlinePlugin::new("background")
            .hook("beforeDraw", "(chart) => {}")
            .hook("afterDraw", "function(chart) {}");
        let value = ChartPlugin::to_value(&plugin);
        let keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["id", "beforeDraw", "afterDraw"]);
        assert_eq!(value.get("beforeDraw"), Some(&Value::raw("(chart) => {}")));
    }

    #[test]
    fn decimation_algorithm_uses_hyphenated_name() {
        let text = DecimationOptions::default().to_value().to_js();
        assert!(text.contains("algorithm: 'min-max'"));
    }

    #[test]
    fn empty_plugin_options_render_empty_object() {
        assert_eq!(PluginOptions::new().to_value().to_js(), "{}");
    }
}
