use crate::core::{ToValue, Value};
use crate::macros::js_enum;

js_enum! {
    /// Which elements an interaction (hover, tooltip) selects.
    pub enum InteractionMode {
        Point => "point",
        Nearest => "nearest",
        Index => "index",
        Dataset => "dataset",
        X => "x",
        Y => "y",
    }
}

js_enum! {
    /// Axes considered when computing interaction distance.
    pub enum InteractionAxis {
        X => "x",
        Y => "y",
        Xy => "xy",
        R => "r",
    }
}

/// `options.interaction`.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionOptions {
    pub mode: Option<InteractionMode>,
    pub intersect: Option<bool>,
    pub axis: Option<InteractionAxis>,
    pub include_invisible: Option<bool>,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            mode: Some(InteractionMode::Nearest),
            intersect: Some(true),
            axis: None,
            include_invisible: Some(false),
        }
    }
}

impl InteractionOptions {
    #[must_use]
    pub fn with_mode(mut self, mode: InteractionMode) -> Self {
        self.mode = Some(mode);
        self
    }

    #[must_use]
    pub fn with_intersect(mut self, intersect: bool) -> Self {
        self.intersect = Some(intersect);
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: InteractionAxis) -> Self {
        self.axis = Some(axis);
        self
    }
}

impl ToValue for InteractionOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("mode", self.mode.as_ref())
            .optional("intersect", self.intersect.as_ref())
            .optional("axis", self.axis.as_ref())
            .optional("includeInvisible", self.include_invisible.as_ref())
            .build()
    }
}
