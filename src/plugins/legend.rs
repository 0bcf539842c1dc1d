use crate::core::{ChartColor, JsCode, ToValue, Value};
use crate::datasets::PointStyle;
use crate::macros::js_enum;
use crate::options::{FontOptions, PaddingValue, TextAlign, TextDirection};

js_enum! {
    pub enum LegendPosition {
        Top => "top",
        Left => "left",
        Bottom => "bottom",
        Right => "right",
        ChartArea => "chartArea",
    }
}

js_enum! {
    pub enum LegendAlign {
        Start => "start",
        Center => "center",
        End => "end",
    }
}

/// `options.plugins.legend`.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendOptions {
    pub display: Option<bool>,
    pub position: Option<LegendPosition>,
    pub align: Option<LegendAlign>,
    pub max_height: Option<f64>,
    pub max_width: Option<f64>,
    pub full_size: Option<bool>,
    pub reverse: Option<bool>,
    pub on_click: Option<JsCode>,
    pub on_hover: Option<JsCode>,
    pub on_leave: Option<JsCode>,
    pub labels: Option<LegendLabelOptions>,
    pub title: Option<LegendTitle>,
    pub rtl: Option<bool>,
    pub text_direction: Option<TextDirection>,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            display: Some(true),
            position: Some(LegendPosition::Top),
            align: Some(LegendAlign::Center),
            max_height: None,
            max_width: None,
            full_size: Some(true),
            reverse: Some(false),
            on_click: None,
            on_hover: None,
            on_leave: None,
            labels: None,
            title: None,
            rtl: Some(false),
            text_direction: Some(TextDirection::Ltr),
        }
    }
}

impl LegendOptions {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            display: Some(false),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: LegendPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: LegendLabelOptions) -> Self {
        self.labels = Some(labels);
        self
    }

    #[must_use]
    pub fn with_on_click(mut self, callback: impl Into<JsCode>) -> Self {
        self.on_click = Some(callback.into());
        self
    }
}

impl ToValue for LegendOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("display", self.display.as_ref())
            .optional("position", self.position.as_ref())
            .optional("align", self.align.as_ref())
            .optional("maxHeight", self.max_height.as_ref())
            .optional("maxWidth", self.max_width.as_ref())
            .optional("fullSize", self.full_size.as_ref())
            .optional("reverse", self.reverse.as_ref())
            .optional("onClick", self.on_click.as_ref())
            .optional("onHover", self.on_hover.as_ref())
            .optional("onLeave", self.on_leave.as_ref())
            .optional("labels", self.labels.as_ref())
            .optional("title", self.title.as_ref())
            .optional("rtl", self.rtl.as_ref())
            .optional("textDirection", self.text_direction.as_ref())
            .build()
    }
}

/// `options.plugins.legend.labels`.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLabelOptions {
    pub box_width: Option<f64>,
    pub box_height: Option<f64>,
    pub color: Option<ChartColor>,
    pub font: Option<FontOptions>,
    pub padding: Option<f64>,
    pub generate_labels: Option<JsCode>,
    pub filter: Option<JsCode>,
    pub sort: Option<JsCode>,
    pub point_style: Option<PointStyle>,
    pub text_align: Option<TextAlign>,
    pub use_point_style: Option<bool>,
    pub point_style_width: Option<f64>,
    pub use_border_radius: Option<bool>,
    pub border_radius: Option<f64>,
}

impl Default for LegendLabelOptions {
    fn default() -> Self {
        Self {
            box_width: Some(40.0),
            box_height: None,
            color: None,
            font: None,
            padding: Some(10.0),
            generate_labels: None,
            filter: None,
            sort: None,
            point_style: None,
            text_align: None,
            use_point_style: Some(false),
            point_style_width: None,
            use_border_radius: Some(false),
            border_radius: None,
        }
    }
}

impl ToValue for LegendLabelOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("boxWidth", self.box_width.as_ref())
            .optional("boxHeight", self.box_height.as_ref())
            .optional("color", self.color.as_ref())
            .optional("font", self.font.as_ref())
            .optional("padding", self.padding.as_ref())
            .optional("generateLabels", self.generate_labels.as_ref())
            .optional("filter", self.filter.as_ref())
            .optional("sort", self.sort.as_ref())
            .optional("pointStyle", self.point_style.as_ref())
            .optional("textAlign", self.text_align.as_ref())
            .optional("usePointStyle", self.use_point_style.as_ref())
            .optional("pointStyleWidth", self.point_style_width.as_ref())
            .optional("useBorderRadius", self.use_border_radius.as_ref())
            .optional("borderRadius", self.border_radius.as_ref())
            .build()
    }
}

/// `options.plugins.legend.title`.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendTitle {
    pub display: Option<bool>,
    pub text: Option<String>,
    pub color: Option<ChartColor>,
    pub font: Option<FontOptions>,
    pub padding: Option<PaddingValue>,
}

impl Default for LegendTitle {
    fn default() -> Self {
        Self {
            display: Some(false),
            text: None,
            color: None,
            font: None,
            padding: None,
        }
    }
}

impl ToValue for LegendTitle {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("display", self.display.as_ref())
            .optional("text", self.text.as_ref())
            .optional("color", self.color.as_ref())
            .optional("font", self.font.as_ref())
            .optional("padding", self.padding.as_ref())
            .build()
    }
}
