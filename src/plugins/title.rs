use crate::core::{ChartColor, ToValue, Value};
use crate::macros::js_enum;
use crate::options::{FontOptions, PaddingValue, TitleAlign};

js_enum! {
    pub enum TitlePosition {
        Top => "top",
        Left => "left",
        Bottom => "bottom",
        Right => "right",
    }
}

/// Title text; multiple lines render as an array.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleText {
    Single(String),
    Multi(Vec<String>),
}

impl ToValue for TitleText {
    fn to_value(&self) -> Value {
        match self {
            Self::Single(line) => line.to_value(),
            Self::Multi(lines) => lines.to_value(),
        }
    }
}

impl From<&str> for TitleText {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for TitleText {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for TitleText {
    fn from(value: Vec<String>) -> Self {
        Self::Multi(value)
    }
}

/// `options.plugins.title`.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleOptions {
    pub display: Option<bool>,
    pub text: Option<TitleText>,
    pub color: Option<ChartColor>,
    pub font: Option<FontOptions>,
    pub position: Option<TitlePosition>,
    pub padding: Option<PaddingValue>,
    pub full_size: Option<bool>,
    pub align: Option<TitleAlign>,
}

impl Default for TitleOptions {
    fn default() -> Self {
        Self {
            display: Some(false),
            text: None,
            color: None,
            font: None,
            position: Some(TitlePosition::Top),
            padding: Some(PaddingValue::Uniform(10.0)),
            full_size: Some(true),
            align: Some(TitleAlign::Center),
        }
    }
}

impl TitleOptions {
    /// Displayed single-line title.
    #[must_use]
    pub fn new(text: impl Into<TitleText>) -> Self {
        Self {
            display: Some(true),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_font(mut self, font: FontOptions) -> Self {
        self.font = Some(font);
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: TitlePosition) -> Self {
        self.position = Some(position);
        self
    }
}

impl ToValue for TitleOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("display", self.display.as_ref())
            .optional("text", self.text.as_ref())
            .optional("color", self.color.as_ref())
            .optional("font", self.font.as_ref())
            .optional("position", self.position.as_ref())
            .optional("padding", self.padding.as_ref())
            .optional("fullSize", self.full_size.as_ref())
            .optional("align", self.align.as_ref())
            .build()
    }
}

/// `options.plugins.subtitle`; hidden unless `display` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleOptions {
    pub display: Option<bool>,
    pub text: Option<String>,
    pub color: Option<ChartColor>,
    pub font: Option<FontOptions>,
    pub position: Option<TitlePosition>,
    pub padding: Option<PaddingValue>,
    pub full_size: Option<bool>,
    pub align: Option<TitleAlign>,
}

impl Default for SubtitleOptions {
    fn default() -> Self {
        Self {
            display: Some(false),
            text: None,
            color: None,
            font: None,
            position: Some(TitlePosition::Top),
            padding: None,
            full_size: Some(true),
            align: Some(TitleAlign::Center),
        }
    }
}

impl SubtitleOptions {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            display: Some(true),
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

impl ToValue for SubtitleOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("display", self.display.as_ref())
            .optional("text", self.text.as_ref())
            .optional("color", self.color.as_ref())
            .optional("font", self.font.as_ref())
            .optional("position", self.position.as_ref())
            .optional("padding", self.padding.as_ref())
            .optional("fullSize", self.full_size.as_ref())
            .optional("align", self.align.as_ref())
            .build()
    }
}
