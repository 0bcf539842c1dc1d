use std::fmt;

use crate::core::ChartType;
use crate::core::encoder::percent_text;
use crate::datasets::ChartData;
use crate::error::{ChartError, ChartResult};
use crate::options::{ChartOptions, IndexAxis};

use super::html::push_attribute;
use super::{ChartConfiguration, ChartId, ChartScript, ScriptConfig};

const DEFAULT_CONTAINER_WIDTH: &str = "100%";
const DEFAULT_CONTAINER_HEIGHT: &str = "400px";

/// Markup component: a container `<div>` holding the `<canvas>` and the
/// bootstrap `<script>`.
///
/// The id is fixed at construction (generated when not supplied), so every
/// render of the same `Chart` produces identical markup.
#[derive(Debug, Clone)]
pub struct Chart {
    id: ChartId,
    configuration: ChartConfiguration,
    width: Option<u32>,
    height: Option<u32>,
    container_class: Option<String>,
    responsive: bool,
    script_config: ScriptConfig,
}

impl Chart {
    #[must_use]
    pub fn new(configuration: ChartConfiguration) -> Self {
        Self {
            id: ChartId::generate(),
            configuration,
            width: None,
            height: None,
            container_class: None,
            responsive: true,
            script_config: ScriptConfig::default(),
        }
    }

    #[must_use]
    pub fn line(data: ChartData, options: Option<ChartOptions>) -> Self {
        Self::of_type(ChartType::Line, data, options)
    }

    /// Bar chart; `horizontal` switches the index axis to `y`.
    #[must_use]
    pub fn bar(data: ChartData, options: Option<ChartOptions>, horizontal: bool) -> Self {
        let configuration = configuration(ChartType::Bar, data, options);
        let configuration = if horizontal {
            configuration.map_options(|options| options.with_index_axis(IndexAxis::Y))
        } else {
            configuration
        };
        Self::new(configuration)
    }

    #[must_use]
    pub fn pie(data: ChartData, options: Option<ChartOptions>) -> Self {
        Self::of_type(ChartType::Pie, data, options)
    }

    #[must_use]
    pub fn doughnut(data: ChartData, options: Option<ChartOptions>) -> Self {
        Self::of_type(ChartType::Doughnut, data, options)
    }

    #[must_use]
    pub fn radar(data: ChartData, options: Option<ChartOptions>) -> Self {
        Self::of_type(ChartType::Radar, data, options)
    }

    #[must_use]
    pub fn polar_area(data: ChartData, options: Option<ChartOptions>) -> Self {
        Self::of_type(ChartType::PolarArea, data, options)
    }

    #[must_use]
    pub fn bubble(data: ChartData, options: Option<ChartOptions>) -> Self {
        Self::of_type(ChartType::Bubble, data, options)
    }

    #[must_use]
    pub fn scatter(data: ChartData, options: Option<ChartOptions>) -> Self {
        Self::of_type(ChartType::Scatter, data, options)
    }

    fn of_type(chart_type: ChartType, data: ChartData, options: Option<ChartOptions>) -> Self {
        Self::new(configuration(chart_type, data, options))
    }

    #[must_use]
    pub fn with_id(mut self, id: ChartId) -> Self {
        self.id = id;
        self
    }

    /// Canvas `width` / `height` attributes in pixels.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = Some(class.into());
        self
    }

    /// A non-responsive chart gets a fixed-size container (`100%` x `400px`
    /// unless a size was given).
    #[must_use]
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    #[must_use]
    pub fn with_store_globally(mut self, store_globally: bool) -> Self {
        self.script_config.store_globally = store_globally;
        self
    }

    #[must_use]
    pub fn with_script_config(mut self, script_config: ScriptConfig) -> Self {
        self.script_config = script_config;
        self
    }

    #[must_use]
    pub fn id(&self) -> &ChartId {
        &self.id
    }

    #[must_use]
    pub fn configuration(&self) -> &ChartConfiguration {
        &self.configuration
    }

    #[must_use]
    pub fn script(&self) -> ChartScript<'_> {
        ChartScript::new(&self.id, &self.configuration, &self.script_config)
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("<div");
        if let Some(class) = &self.container_class {
            push_attribute(&mut out, "class", class);
        }
        if !self.responsive {
            let width = self
                .width
                .map_or_else(|| DEFAULT_CONTAINER_WIDTH.to_owned(), |w| format!("{w}px"));
            let height = self
                .height
                .map_or_else(|| DEFAULT_CONTAINER_HEIGHT.to_owned(), |h| format!("{h}px"));
            push_attribute(&mut out, "style", &format!("width: {width}; height: {height}"));
        }
        out.push_str("><canvas");
        push_attribute(&mut out, "id", self.id.as_str());
        if let Some(width) = self.width {
            push_attribute(&mut out, "width", &width.to_string());
        }
        if let Some(height) = self.height {
            push_attribute(&mut out, "height", &height.to_string());
        }
        out.push_str("></canvas>");
        out.push_str(&self.script().to_html());
        out.push_str("</div>");
        out
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn configuration(
    chart_type: ChartType,
    data: ChartData,
    options: Option<ChartOptions>,
) -> ChartConfiguration {
    let configuration = ChartConfiguration::new(chart_type, data);
    match options {
        Some(options) => configuration.with_options(options),
        None => configuration,
    }
}

/// Wrapper keeping a chart at a fixed aspect ratio through the
/// `padding-bottom` technique.
#[derive(Debug, Clone)]
pub struct ResponsiveChart {
    chart: Chart,
    aspect_ratio: f64,
    max_width: Option<String>,
    container_class: Option<String>,
}

impl ResponsiveChart {
    pub const DEFAULT_ASPECT_RATIO: f64 = 2.0;

    /// Wraps `chart`, forcing it responsive.
    #[must_use]
    pub fn new(chart: Chart) -> Self {
        Self {
            chart: chart.with_responsive(true),
            aspect_ratio: Self::DEFAULT_ASPECT_RATIO,
            max_width: None,
            container_class: None,
        }
    }

    #[must_use]
    pub fn from_configuration(configuration: ChartConfiguration) -> Self {
        Self::new(Chart::new(configuration))
    }

    /// Width divided by height; must be finite and positive.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> ChartResult<Self> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "aspect ratio must be finite and positive, got {aspect_ratio}"
            )));
        }
        self.aspect_ratio = aspect_ratio;
        Ok(self)
    }

    /// CSS length such as `800px` or `60rem`.
    #[must_use]
    pub fn with_max_width(mut self, max_width: impl Into<String>) -> Self {
        self.max_width = Some(max_width.into());
        self
    }

    #[must_use]
    pub fn with_container_class(mut self, class: impl Into<String>) -> Self {
        self.container_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut style = format!(
            "position: relative; width: 100%; padding-bottom: {}",
            percent_text(100.0 / self.aspect_ratio)
        );
        if let Some(max_width) = &self.max_width {
            style.push_str("; max-width: ");
            style.push_str(max_width);
        }

        let mut out = String::from("<div");
        if let Some(class) = &self.container_class {
            push_attribute(&mut out, "class", class);
        }
        push_attribute(&mut out, "style", &style);
        out.push_str(
            "><div style=\"position: absolute; top: 0; left: 0; width: 100%; height: 100%\">",
        );
        out.push_str(&self.chart.render());
        out.push_str("</div></div>");
        out
    }
}

impl fmt::Display for ResponsiveChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
