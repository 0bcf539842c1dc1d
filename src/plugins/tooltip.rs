use crate::core::{ChartColor, JsCode, ToValue, Value};
use crate::macros::js_enum;
use crate::options::{
    FontOptions, InteractionAxis, InteractionMode, PaddingValue, TextAlign, TextDirection,
};

js_enum! {
    /// Built-in tooltip positioners.
    pub enum TooltipPosition {
        Average => "average",
        Nearest => "nearest",
    }
}

js_enum! {
    pub enum TooltipYAlign {
        Top => "top",
        Center => "center",
        Bottom => "bottom",
    }
}

/// `options.plugins.tooltip`.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipOptions {
    pub enabled: Option<bool>,
    /// Custom HTML tooltip renderer.
    pub external: Option<JsCode>,
    pub mode: Option<InteractionMode>,
    pub intersect: Option<bool>,
    pub position: Option<TooltipPosition>,
    pub callbacks: Option<TooltipCallbacks>,
    pub item_sort: Option<JsCode>,
    pub filter: Option<JsCode>,
    pub background_color: Option<ChartColor>,
    pub title_color: Option<ChartColor>,
    pub title_font: Option<FontOptions>,
    pub title_align: Option<TextAlign>,
    pub title_spacing: Option<f64>,
    pub title_margin_bottom: Option<f64>,
    pub body_color: Option<ChartColor>,
    pub body_font: Option<FontOptions>,
    pub body_align: Option<TextAlign>,
    pub body_spacing: Option<f64>,
    pub footer_color: Option<ChartColor>,
    pub footer_font: Option<FontOptions>,
    pub footer_align: Option<TextAlign>,
    pub footer_spacing: Option<f64>,
    pub footer_margin_top: Option<f64>,
    pub padding: Option<PaddingValue>,
    pub caret_padding: Option<f64>,
    pub caret_size: Option<f64>,
    pub corner_radius: Option<f64>,
    pub multi_key_background: Option<ChartColor>,
    pub display_colors: Option<bool>,
    pub box_width: Option<f64>,
    pub box_height: Option<f64>,
    pub box_padding: Option<f64>,
    pub use_point_style: Option<bool>,
    pub border_color: Option<ChartColor>,
    pub border_width: Option<f64>,
    pub rtl: Option<bool>,
    pub text_direction: Option<TextDirection>,
    pub x_align: Option<TextAlign>,
    pub y_align: Option<TooltipYAlign>,
    pub axis: Option<InteractionAxis>,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            enabled: Some(true),
            external: None,
            mode: None,
            intersect: None,
            position: Some(TooltipPosition::Average),
            callbacks: None,
            item_sort: None,
            filter: None,
            background_color: Some(ChartColor::rgba(0, 0, 0, 0.8)),
            title_color: Some(ChartColor::white()),
            title_font: None,
            title_align: Some(TextAlign::Left),
            title_spacing: Some(2.0),
            title_margin_bottom: Some(6.0),
            body_color: Some(ChartColor::white()),
            body_font: None,
            body_align: Some(TextAlign::Left),
            body_spacing: Some(2.0),
            footer_color: Some(ChartColor::white()),
            footer_font: None,
            footer_align: Some(TextAlign::Left),
            footer_spacing: Some(2.0),
            footer_margin_top: Some(6.0),
            padding: Some(PaddingValue::Uniform(6.0)),
            caret_padding: Some(2.0),
            caret_size: Some(5.0),
            corner_radius: Some(6.0),
            multi_key_background: Some(ChartColor::white()),
            display_colors: Some(true),
            box_width: None,
            box_height: None,
            box_padding: Some(1.0),
            use_point_style: Some(false),
            border_color: Some(ChartColor::rgba(0, 0, 0, 0.0)),
            border_width: Some(0.0),
            rtl: Some(false),
            text_direction: Some(TextDirection::Ltr),
            x_align: None,
            y_align: None,
            axis: None,
        }
    }
}

impl TooltipOptions {
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: Some(false),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_callbacks(mut self, callbacks: TooltipCallbacks) -> Self {
        self.callbacks = Some(callbacks);
        self
    }

    #[must_use]
    pub fn with_external(mut self, handler: impl Into<JsCode>) -> Self {
        self.external = Some(handler.into());
        self
    }
}

impl ToValue for TooltipOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("enabled", self.enabled.as_ref())
            .optional("external", self.external.as_ref())
            .optional("mode", self.mode.as_ref())
            .optional("intersect", self.intersect.as_ref())
            .optional("position", self.position.as_ref())
            .optional("callbacks", self.callbacks.as_ref())
            .optional("itemSort", self.item_sort.as_ref())
            .optional("filter", self.filter.as_ref())
            .optional("backgroundColor", self.background_color.as_ref())
            .optional("titleColor", self.title_color.as_ref())
            .optional("titleFont", self.title_font.as_ref())
            .optional("titleAlign", self.title_align.as_ref())
            .optional("titleSpacing", self.title_spacing.as_ref())
            .optional("titleMarginBottom", self.title_margin_bottom.as_ref())
            .optional("bodyColor", self.body_color.as_ref())
            .optional("bodyFont", self.body_font.as_ref())
            .optional("bodyAlign", self.body_align.as_ref())
            .optional("bodySpacing", self.body_spacing.as_ref())
            .optional("footerColor", self.footer_color.as_ref())
            .optional("footerFont", self.footer_font.as_ref())
            .optional("footerAlign", self.footer_align.as_ref())
            .optional("footerSpacing", self.footer_spacing.as_ref())
            .optional("footerMarginTop", self.footer_margin_top.as_ref())
            .optional("padding", self.padding.as_ref())
            .optional("caretPadding", self.caret_padding.as_ref())
            .optional("caretSize", self.caret_size.as_ref())
            .optional("cornerRadius", self.corner_radius.as_ref())
            .optional("multiKeyBackground", self.multi_key_background.as_ref())
            .optional("displayColors", self.display_colors.as_ref())
            .optional("boxWidth", self.box_width.as_ref())
            .optional("boxHeight", self.box_height.as_ref())
            .optional("boxPadding", self.box_padding.as_ref())
            .optional("usePointStyle", self.use_point_style.as_ref())
            .optional("borderColor", self.border_color.as_ref())
            .optional("borderWidth", self.border_width.as_ref())
            .optional("rtl", self.rtl.as_ref())
            .optional("textDirection", self.text_direction.as_ref())
            .optional("xAlign", self.x_align.as_ref())
            .optional("yAlign", self.y_align.as_ref())
            .optional("axis", self.axis.as_ref())
            .build()
    }
}

/// `options.plugins.tooltip.callbacks`. Every hook is raw JavaScript.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipCallbacks {
    pub before_title: Option<JsCode>,
    pub title: Option<JsCode>,
    pub after_title: Option<JsCode>,
    pub before_body: Option<JsCode>,
    pub before_label: Option<JsCode>,
    pub label: Option<JsCode>,
    pub label_color: Option<JsCode>,
    pub label_text_color: Option<JsCode>,
    pub label_point_style: Option<JsCode>,
    pub after_label: Option<JsCode>,
    pub after_body: Option<JsCode>,
    pub before_footer: Option<JsCode>,
    pub footer: Option<JsCode>,
    pub after_footer: Option<JsCode>,
}

impl TooltipCallbacks {
    #[must_use]
    pub fn with_title(mut self, code: impl Into<JsCode>) -> Self {
        self.title = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, code: impl Into<JsCode>) -> Self {
        self.label = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_footer(mut self, code: impl Into<JsCode>) -> Self {
        self.footer = Some(code.into());
        self
    }
}

impl ToValue for TooltipCallbacks {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("beforeTitle", self.before_title.as_ref())
            .optional("title", self.title.as_ref())
            .optional("afterTitle", self.after_title.as_ref())
            .optional("beforeBody", self.before_body.as_ref())
            .optional("beforeLabel", self.before_label.as_ref())
            .optional("label", self.label.as_ref())
            .optional("labelColor", self.label_color.as_ref())
            .optional("labelTextColor", self.label_text_color.as_ref())
            .optional("labelPointStyle", self.label_point_style.as_ref())
            .optional("afterLabel", self.after_label.as_ref())
            .optional("afterBody", self.after_body.as_ref())
            .optional("beforeFooter", self.before_footer.as_ref())
            .optional("footer", self.footer.as_ref())
            .optional("afterFooter", self.after_footer.as_ref())
            .build()
    }
}
