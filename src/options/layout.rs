use crate::core::{ToValue, Value};

/// Padding that is either uniform or specified per side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddingValue {
    Uniform(f64),
    Sides {
        top: f64,
        right: f64,
        bottom: f64,
        left: f64,
    },
    Symmetric {
        vertical: f64,
        horizontal: f64,
    },
}

impl ToValue for PaddingValue {
    fn to_value(&self) -> Value {
        let (top, right, bottom, left) = match *self {
            Self::Uniform(value) => return Value::Number(value),
            Self::Sides {
                top,
                right,
                bottom,
                left,
            } => (top, right, bottom, left),
            Self::Symmetric {
                vertical,
                horizontal,
            } => (vertical, horizontal, vertical, horizontal),
        };
        Value::object()
            .field("top", &top)
            .field("right", &right)
            .field("bottom", &bottom)
            .field("left", &left)
            .build()
    }
}

/// `options.layout`.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub padding: Option<PaddingValue>,
    pub auto_padding: Option<bool>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            padding: None,
            auto_padding: Some(true),
        }
    }
}

impl LayoutOptions {
    #[must_use]
    pub fn with_padding(mut self, padding: PaddingValue) -> Self {
        self.padding = Some(padding);
        self
    }
}

impl ToValue for LayoutOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("padding", self.padding.as_ref())
            .optional("autoPadding", self.auto_padding.as_ref())
            .build()
    }
}
