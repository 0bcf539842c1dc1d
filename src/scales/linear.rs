use crate::core::encoder::percent_text;
use crate::core::{ToValue, Value};

use super::common::scale_common_setters;
use super::{ScaleCommon, ScaleType};

/// Extra space added around the data range of a linear scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grace {
    Pixels(f64),
    /// Rendered as a `'<n>%'` string.
    Percentage(f64),
}

impl ToValue for Grace {
    fn to_value(&self) -> Value {
        match self {
            Self::Pixels(pixels) => Value::Number(*pixels),
            Self::Percentage(percent) => Value::String(percent_text(*percent)),
        }
    }
}

/// Numeric axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    pub common: ScaleCommon,
    pub begin_at_zero: Option<bool>,
    pub grace: Option<Grace>,
}

impl Default for LinearScale {
    fn default() -> Self {
        Self {
            common: ScaleCommon::default(),
            begin_at_zero: Some(false),
            grace: None,
        }
    }
}

impl LinearScale {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_begin_at_zero(mut self, begin_at_zero: bool) -> Self {
        self.begin_at_zero = Some(begin_at_zero);
        self
    }

    #[must_use]
    pub fn with_grace(mut self, grace: Grace) -> Self {
        self.grace = Some(grace);
        self
    }
}

scale_common_setters!(LinearScale);

impl ToValue for LinearScale {
    fn to_value(&self) -> Value {
        self.common
            .object(ScaleType::Linear)
            .optional("beginAtZero", self.begin_at_zero.as_ref())
            .optional("grace", self.grace.as_ref())
            .build()
    }
}
