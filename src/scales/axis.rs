use crate::core::{ChartColor, JsCode, ToValue, Value};
use crate::macros::js_enum;
use crate::options::{FontOptions, PaddingValue, TitleAlign};

/// Axis title (`scales.<id>.title`).
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTitle {
    pub display: Option<bool>,
    pub text: Option<String>,
    pub color: Option<ChartColor>,
    pub font: Option<FontOptions>,
    pub padding: Option<PaddingValue>,
    pub align: Option<TitleAlign>,
}

impl Default for ScaleTitle {
    fn default() -> Self {
        Self {
            display: Some(true),
            text: None,
            color: None,
            font: None,
            padding: None,
            align: Some(TitleAlign::Center),
        }
    }
}

impl ScaleTitle {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

impl ToValue for ScaleTitle {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("display", self.display.as_ref())
            .optional("text", self.text.as_ref())
            .optional("color", self.color.as_ref())
            .optional("font", self.font.as_ref())
            .optional("padding", self.padding.as_ref())
            .optional("align", self.align.as_ref())
            .build()
    }
}

js_enum! {
    pub enum TickAlign {
        Start => "start",
        Center => "center",
        End => "end",
        Inner => "inner",
    }
}

js_enum! {
    pub enum CrossAlign {
        Near => "near",
        Center => "center",
        Far => "far",
    }
}

js_enum! {
    /// Where tick values are generated from.
    pub enum TickSource {
        Auto => "auto",
        Data => "data",
        Labels => "labels",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MajorTickOptions {
    pub enabled: Option<bool>,
}

impl Default for MajorTickOptions {
    fn default() -> Self {
        Self {
            enabled: Some(false),
        }
    }
}

impl ToValue for MajorTickOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("enabled", self.enabled.as_ref())
            .build()
    }
}

/// Tick configuration (`scales.<id>.ticks`).
#[derive(Debug, Clone, PartialEq)]
pub struct TickOptions {
    pub display: Option<bool>,
    pub color: Option<ChartColor>,
    pub font: Option<FontOptions>,
    pub padding: Option<f64>,
    pub text_stroke_color: Option<ChartColor>,
    pub text_stroke_width: Option<f64>,
    pub z: Option<i32>,
    pub major: Option<MajorTickOptions>,
    pub max_rotation: Option<f64>,
    pub min_rotation: Option<f64>,
    pub mirror: Option<bool>,
    pub auto_skip: Option<bool>,
    pub auto_skip_padding: Option<f64>,
    pub label_offset: Option<f64>,
    pub max_ticks_limit: Option<u32>,
    pub step_size: Option<f64>,
    pub count: Option<u32>,
    pub precision: Option<u32>,
    /// Label formatter, e.g. `function(value) { return '$' + value; }`.
    pub callback: Option<JsCode>,
    /// `Intl.NumberFormat` options passed through as-is.
    pub format: Option<Value>,
    pub show_label_backdrop: Option<bool>,
    pub backdrop_color: Option<ChartColor>,
    pub backdrop_padding: Option<PaddingValue>,
    pub align: Option<TickAlign>,
    pub cross_align: Option<CrossAlign>,
    pub sample_size: Option<u32>,
    pub include_bounds: Option<bool>,
    pub source: Option<TickSource>,
}

impl Default for TickOptions {
    fn default() -> Self {
        Self {
            display: Some(true),
            color: None,
            font: None,
            padding: Some(3.0),
            text_stroke_color: None,
            text_stroke_width: None,
            z: None,
            major: None,
            max_rotation: Some(50.0),
            min_rotation: Some(0.0),
            mirror: Some(false),
            auto_skip: Some(true),
            auto_skip_padding: Some(3.0),
            label_offset: Some(0.0),
            max_ticks_limit: None,
            step_size: None,
            count: None,
            precision: None,
            callback: None,
            format: None,
            show_label_backdrop: Some(false),
            backdrop_color: None,
            backdrop_padding: None,
            align: Some(TickAlign::Center),
            cross_align: Some(CrossAlign::Near),
            sample_size: None,
            include_bounds: Some(true),
            source: None,
        }
    }
}

impl TickOptions {
    #[must_use]
    pub fn with_callback(mut self, callback: impl Into<JsCode>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    #[must_use]
    pub fn with_step_size(mut self, step_size: f64) -> Self {
        self.step_size = Some(step_size);
        self
    }
}

impl ToValue for TickOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("display", self.display.as_ref())
            .optional("color", self.color.as_ref())
            .optional("font", self.font.as_ref())
            .optional("padding", self.padding.as_ref())
            .optional("textStrokeColor", self.text_stroke_color.as_ref())
            .optional("textStrokeWidth", self.text_stroke_width.as_ref())
            .optional("z", self.z.as_ref())
            .optional("major", self.major.as_ref())
            .optional("maxRotation", self.max_rotation.as_ref())
            .optional("minRotation", self.min_rotation.as_ref())
            .optional("mirror", self.mirror.as_ref())
            .optional("autoSkip", self.auto_skip.as_ref())
            .optional("autoSkipPadding", self.auto_skip_padding.as_ref())
            .optional("labelOffset", self.label_offset.as_ref())
            .optional("maxTicksLimit", self.max_ticks_limit.as_ref())
            .optional("stepSize", self.step_size.as_ref())
            .optional("count", self.count.as_ref())
            .optional("precision", self.precision.as_ref())
            .optional("callback", self.callback.as_ref())
            .optional("format", self.format.as_ref())
            .optional("showLabelBackdrop", self.show_label_backdrop.as_ref())
            .optional("backdropColor", self.backdrop_color.as_ref())
            .optional("backdropPadding", self.backdrop_padding.as_ref())
            .optional("align", self.align.as_ref())
            .optional("crossAlign", self.cross_align.as_ref())
            .optional("sampleSize", self.sample_size.as_ref())
            .optional("includeBounds", self.include_bounds.as_ref())
            .optional("source", self.source.as_ref())
            .build()
    }
}

/// Grid line configuration (`scales.<id>.grid`).
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    pub display: Option<bool>,
    pub circular: Option<bool>,
    pub color: Option<ChartColor>,
    pub line_width: Option<f64>,
    pub draw_on_chart_area: Option<bool>,
    pub draw_ticks: Option<bool>,
    pub tick_length: Option<f64>,
    pub offset: Option<bool>,
    pub z: Option<i32>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            display: Some(true),
            circular: Some(false),
            color: None,
            line_width: Some(1.0),
            draw_on_chart_area: Some(true),
            draw_ticks: Some(true),
            tick_length: Some(8.0),
            offset: Some(false),
            z: None,
        }
    }
}

impl GridOptions {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            display: Some(false),
            ..Self::default()
        }
    }
}

impl ToValue for GridOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("display", self.display.as_ref())
            .optional("circular", self.circular.as_ref())
            .optional("color", self.color.as_ref())
            .optional("lineWidth", self.line_width.as_ref())
            .optional("drawOnChartArea", self.draw_on_chart_area.as_ref())
            .optional("drawTicks", self.draw_ticks.as_ref())
            .optional("tickLength", self.tick_length.as_ref())
            .optional("offset", self.offset.as_ref())
            .optional("z", self.z.as_ref())
            .build()
    }
}

/// Axis border line (`scales.<id>.border`).
#[derive(Debug, Clone, PartialEq)]
pub struct BorderOptions {
    pub display: Option<bool>,
    pub color: Option<ChartColor>,
    pub width: Option<f64>,
    pub dash: Option<Vec<f64>>,
    pub dash_offset: Option<f64>,
    pub z: Option<i32>,
}

impl Default for BorderOptions {
    fn default() -> Self {
        Self {
            display: Some(true),
            color: None,
            width: Some(1.0),
            dash: None,
            dash_offset: Some(0.0),
            z: None,
        }
    }
}

impl ToValue for BorderOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("display", self.display.as_ref())
            .optional("color", self.color.as_ref())
            .optional("width", self.width.as_ref())
            .optional("dash", self.dash.as_ref())
            .optional("dashOffset", self.dash_offset.as_ref())
            .optional("z", self.z.as_ref())
            .build()
    }
}
