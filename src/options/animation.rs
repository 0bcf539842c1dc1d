use crate::core::{JsCode, ToValue, Value};
use crate::macros::js_enum;

js_enum! {
    /// Easing curves provided by the Chart.js animation engine.
    pub enum AnimationEasing {
        Linear => "linear",
        EaseInQuad => "easeInQuad",
        EaseOutQuad => "easeOutQuad",
        EaseInOutQuad => "easeInOutQuad",
        EaseInCubic => "easeInCubic",
        EaseOutCubic => "easeOutCubic",
        EaseInOutCubic => "easeInOutCubic",
        EaseInQuart => "easeInQuart",
        EaseOutQuart => "easeOutQuart",
        EaseInOutQuart => "easeInOutQuart",
        EaseInQuint => "easeInQuint",
        EaseOutQuint => "easeOutQuint",
        EaseInOutQuint => "easeInOutQuint",
        EaseInSine => "easeInSine",
        EaseOutSine => "easeOutSine",
        EaseInOutSine => "easeInOutSine",
        EaseInExpo => "easeInExpo",
        EaseOutExpo => "easeOutExpo",
        EaseInOutExpo => "easeInOutExpo",
        EaseInCirc => "easeInCirc",
        EaseOutCirc => "easeOutCirc",
        EaseInOutCirc => "easeInOutCirc",
        EaseInElastic => "easeInElastic",
        EaseOutElastic => "easeOutElastic",
        EaseInOutElastic => "easeInOutElastic",
        EaseInBack => "easeInBack",
        EaseOutBack => "easeOutBack",
        EaseInOutBack => "easeInOutBack",
        EaseInBounce => "easeInBounce",
        EaseOutBounce => "easeOutBounce",
        EaseInOutBounce => "easeInOutBounce",
    }
}

/// `options.animation`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationOptions {
    /// Milliseconds.
    pub duration: Option<u32>,
    pub easing: Option<AnimationEasing>,
    pub delay: Option<u32>,
    pub r#loop: Option<bool>,
    pub animate_rotate: Option<bool>,
    pub animate_scale: Option<bool>,
    pub on_progress: Option<JsCode>,
    pub on_complete: Option<JsCode>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration: Some(1000),
            easing: Some(AnimationEasing::EaseOutQuart),
            delay: Some(0),
            r#loop: Some(false),
            animate_rotate: Some(true),
            animate_scale: Some(true),
            on_progress: None,
            on_complete: None,
        }
    }
}

impl AnimationOptions {
    /// Disables animation by setting a zero duration.
    #[must_use]
    pub fn none() -> Self {
        Self::default().with_duration(0)
    }

    #[must_use]
    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn with_easing(mut self, easing: AnimationEasing) -> Self {
        self.easing = Some(easing);
        self
    }

    #[must_use]
    pub fn with_on_complete(mut self, callback: impl Into<JsCode>) -> Self {
        self.on_complete = Some(callback.into());
        self
    }

    #[must_use]
    pub fn with_on_progress(mut self, callback: impl Into<JsCode>) -> Self {
        self.on_progress = Some(callback.into());
        self
    }
}

impl ToValue for AnimationOptions {
    fn to_value(&self) -> Value {
        Value::object()
            .optional("duration", self.duration.as_ref())
            .optional("easing", self.easing.as_ref())
            .optional("delay", self.delay.as_ref())
            .optional("loop", self.r#loop.as_ref())
            .optional("animateRotate", self.animate_rotate.as_ref())
            .optional("animateScale", self.animate_scale.as_ref())
            .optional("onProgress", self.on_progress.as_ref())
            .optional("onComplete", self.on_complete.as_ref())
            .build()
    }
}
