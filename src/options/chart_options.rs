use crate::core::{ChartColor, JsCode, ToValue, Value};
use crate::macros::js_enum;
use crate::plugins::PluginOptions;
use crate::scales::ScaleOptions;

use super::{AnimationOptions, InteractionOptions, LayoutOptions};

js_enum! {
    /// Base axis for bar and line charts; `Y` produces horizontal bars.
    pub enum IndexAxis {
        X => "x",
        Y => "y",
    }
}

js_enum! {
    pub enum FontStyle {
        Normal => "normal",
        Italic => "italic",
        Oblique => "oblique",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
    Bolder,
    Lighter,
    Numeric(u16),
}

impl ToValue for FontWeight {
    fn to_value(&self) -> Value {
        match self {
            Self::Normal => "normal".to_value(),
            Self::Bold => "bold".to_value(),
            Self::Bolder => "bolder".to_value(),
            Self::Lighter => "lighter".to_value(),
            Self::Numeric(weight) => Value::from(*weight),
        }
    }
}

/// Font settings shared by every text-bearing option group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FontOptions {
    pub family: Option<String>,
    pub size: Option<f64>,
    pub style: Option<FontStyle>,
    pub weight: Option<FontWeight>,
    pub line_height: Option<f64>,
}

impl FontOptions {
    #[must_use]
    pub fn sized(size: f64) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }
}

impl ToValue for FontOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("family", self.family.as_ref())
            .optional("size", self.size.as_ref())
            .optional("style", self.style.as_ref())
            .optional("weight", self.weight.as_ref())
            .optional("lineHeight", self.line_height.as_ref())
            .build()
    }
}

/// Dataset clipping relative to the chart area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipValue {
    Auto,
    Pixels(f64),
    Disabled,
}

impl ToValue for ClipValue {
    fn to_value(&self) -> Value {
        match self {
            Self::Auto => "auto".to_value(),
            Self::Pixels(pixels) => Value::Number(*pixels),
            Self::Disabled => Value::Bool(false),
        }
    }
}

/// The `options` member of a chart configuration.
///
/// Members are emitted in declaration order; unset members are omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub responsive: Option<bool>,
    pub maintain_aspect_ratio: Option<bool>,
    pub aspect_ratio: Option<f64>,
    /// Milliseconds.
    pub resize_delay: Option<u32>,
    pub device_pixel_ratio: Option<f64>,
    pub locale: Option<String>,
    pub interaction: Option<InteractionOptions>,
    pub animation: Option<AnimationOptions>,
    pub layout: Option<LayoutOptions>,
    pub plugins: Option<PluginOptions>,
    pub scales: Option<ScaleOptions>,
    pub index_axis: Option<IndexAxis>,
    pub clip: Option<ClipValue>,
    pub color: Option<ChartColor>,
    pub background_color: Option<ChartColor>,
    pub border_color: Option<ChartColor>,
    pub font: Option<FontOptions>,
    pub on_hover: Option<JsCode>,
    pub on_click: Option<JsCode>,
    pub on_resize: Option<JsCode>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: Some(true),
            maintain_aspect_ratio: Some(true),
            aspect_ratio: Some(2.0),
            resize_delay: Some(0),
            device_pixel_ratio: None,
            locale: None,
            interaction: None,
            animation: None,
            layout: None,
            plugins: None,
            scales: None,
            index_axis: None,
            clip: None,
            color: None,
            background_color: None,
            border_color: None,
            font: None,
            on_hover: None,
            on_click: None,
            on_resize: None,
        }
    }
}

impl ChartOptions {
    /// Options with no members at all; renders as `{}`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            responsive: None,
            maintain_aspect_ratio: None,
            aspect_ratio: None,
            resize_delay: None,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = Some(responsive);
        self
    }

    #[must_use]
    pub fn with_maintain_aspect_ratio(mut self, maintain: bool) -> Self {
        self.maintain_aspect_ratio = Some(maintain);
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionOptions) -> Self {
        self.interaction = Some(interaction);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationOptions) -> Self {
        self.animation = Some(animation);
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = Some(layout);
        self
    }

    #[must_use]
    pub fn with_plugins(mut self, plugins: PluginOptions) -> Self {
        self.plugins = Some(plugins);
        self
    }

    #[must_use]
    pub fn with_scales(mut self, scales: ScaleOptions) -> Self {
        self.scales = Some(scales);
        self
    }

    #[must_use]
    pub fn with_index_axis(mut self, axis: IndexAxis) -> Self {
        self.index_axis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_on_click(mut self, callback: impl Into<JsCode>) -> Self {
        self.on_click = Some(callback.into());
        self
    }

    #[must_use]
    pub fn with_on_hover(mut self, callback: impl Into<JsCode>) -> Self {
        self.on_hover = Some(callback.into());
        self
    }
}

impl ToValue for ChartOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("responsive", self.responsive.as_ref())
            .optional("maintainAspectRatio", self.maintain_aspect_ratio.as_ref())
            .optional("aspectRatio", self.aspect_ratio.as_ref())
            .optional("resizeDelay", self.resize_delay.as_ref())
            .optional("devicePixelRatio", self.device_pixel_ratio.as_ref())
            .optional("locale", self.locale.as_ref())
            .optional("interaction", self.interaction.as_ref())
            .optional("animation", self.animation.as_ref())
            .optional("layout", self.layout.as_ref())
            .optional("plugins", self.plugins.as_ref())
            .optional("scales", self.scales.as_ref())
            .optional("indexAxis", self.index_axis.as_ref())
            .optional("clip", self.clip.as_ref())
            .optional("color", self.color.as_ref())
            .optional("backgroundColor", self.background_color.as_ref())
            .optional("borderColor", self.border_color.as_ref())
            .optional("font", self.font.as_ref())
            .optional("onHover", self.on_hover.as_ref())
            .optional("onClick", self.on_click.as_ref())
            .optional("onResize", self.on_resize.as_ref())
            .build()
    }
}
