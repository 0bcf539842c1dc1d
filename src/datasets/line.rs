use crate::core::{ChartColor, ChartValue, ToValue, Value, numbers};
use crate::macros::js_enum;

use super::{BaseDataset, ChartDataset};

/// Area fill mode of a line dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFill {
    /// Renders as `false`.
    None,
    Origin,
    Start,
    End,
    Stack,
    Shape,
    /// Offset from this dataset's index, rendered `'+n'` / `'-n'`.
    Relative(i32),
    /// Dataset index.
    Absolute(i32),
    /// `{ target: n }`.
    Dataset(i32),
}

impl ToValue for ChartFill {
    fn to_value(&self) -> Value {
        match self {
            Self::None => Value::Bool(false),
            Self::Origin => "origin".to_value(),
            Self::Start => "start".to_value(),
            Self::End => "end".to_value(),
            Self::Stack => "stack".to_value(),
            Self::Shape => "shape".to_value(),
            Self::Relative(offset) if *offset > 0 => Value::String(format!("+{offset}")),
            Self::Relative(offset) => Value::String(offset.to_string()),
            Self::Absolute(index) => Value::from(*index),
            Self::Dataset(index) => Value::object().value("target", *index).build(),
        }
    }
}

impl From<bool> for ChartFill {
    fn from(fill: bool) -> Self {
        if fill { Self::Origin } else { Self::None }
    }
}

js_enum! {
    pub enum PointStyle {
        Circle => "circle",
        Cross => "cross",
        CrossRot => "crossRot",
        Dash => "dash",
        Line => "line",
        Rect => "rect",
        RectRounded => "rectRounded",
        RectRot => "rectRot",
        Star => "star",
        Triangle => "triangle",
    }
}

js_enum! {
    pub enum CubicInterpolationMode {
        Default => "default",
        Monotone => "monotone",
    }
}

/// Line chart dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct LineDataset {
    pub base: BaseDataset,
    pub tension: Option<f64>,
    pub fill: Option<ChartFill>,
    pub stepped: Option<bool>,
    pub point_radius: Option<f64>,
    pub point_hover_radius: Option<f64>,
    pub point_background_color: Option<ChartColor>,
    pub point_border_color: Option<ChartColor>,
    pub point_border_width: Option<f64>,
    pub point_style: Option<PointStyle>,
    pub show_line: Option<bool>,
    pub span_gaps: Option<bool>,
    pub cubic_interpolation_mode: Option<CubicInterpolationMode>,
}

impl LineDataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<ChartValue>) -> Self {
        let mut base = BaseDataset::new(label, data);
        base.border_width = Some(2.0);
        Self {
            base,
            tension: Some(0.0),
            fill: None,
            stepped: None,
            point_radius: Some(3.0),
            point_hover_radius: Some(4.0),
            point_background_color: None,
            point_border_color: None,
            point_border_width: Some(1.0),
            point_style: Some(PointStyle::Circle),
            show_line: Some(true),
            span_gaps: None,
            cubic_interpolation_mode: None,
        }
    }

    /// Numeric series drawn in `color`.
    ///
    /// With `fill` set the area below the line is filled to the origin using
    /// `color` at 20% opacity; otherwise `fill: false` is emitted.
    #[must_use]
    pub fn series(
        label: impl Into<String>,
        data: &[f64],
        color: ChartColor,
        tension: f64,
        fill: bool,
    ) -> Self {
        let mut dataset = Self::new(label, numbers(data));
        if fill {
            dataset.base.background_color = Some(color.with_alpha(0.2));
        }
        dataset.base.border_color = Some(color);
        dataset.tension = Some(tension);
        dataset.fill = Some(ChartFill::from(fill));
        dataset
    }

    #[must_use]
    pub fn with_tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<ChartFill>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_stepped(mut self, stepped: bool) -> Self {
        self.stepped = Some(stepped);
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_point_style(mut self, style: PointStyle) -> Self {
        self.point_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_span_gaps(mut self, span_gaps: bool) -> Self {
        self.span_gaps = Some(span_gaps);
        self
    }

    #[must_use]
    pub fn with_cubic_interpolation_mode(mut self, mode: CubicInterpolationMode) -> Self {
        self.cubic_interpolation_mode = Some(mode);
        self
    }
}

dataset_setters!(LineDataset, base);

impl ChartDataset for LineDataset {
    fn label(&self) -> &str {
        &self.base.label
    }

    fn data(&self) -> &[ChartValue] {
        &self.base.data
    }

    fn to_value(&self) -> Value {
        self.base
            .object()
            .optional("tension", self.tension.as_ref())
            .optional("fill", self.fill.as_ref())
            .optional("stepped", self.stepped.as_ref())
            .optional("pointRadius", self.point_radius.as_ref())
            .optional("pointHoverRadius", self.point_hover_radius.as_ref())
            .optional("pointBackgroundColor", self.point_background_color.as_ref())
            .optional("pointBorderColor", self.point_border_color.as_ref())
            .optional("pointBorderWidth", self.point_border_width.as_ref())
            .optional("pointStyle", self.point_style.as_ref())
            .optional("showLine", self.show_line.as_ref())
            .optional("spanGaps", self.span_gaps.as_ref())
            .optional("cubicInterpolationMode", self.cubic_interpolation_mode.as_ref())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_variants_render_expected_values() {
        assert_eq!(ChartFill::None.to_value(), Value::Bool(false));
        assert_eq!(ChartFill::Relative(1).to_value(), Value::from("+1"));
        assert_eq!(ChartFill::Relative(-2).to_value(), Value::from("-2"));
        assert_eq!(ChartFill::Absolute(0).to_value(), Value::Number(0.0));
        assert_eq!(ChartFill::Dataset(1).to_value().to_js(), "{\n  target: 1\n}");
    }

    #[test]
    fn unfilled_series_emits_false_and_no_background() {
        let dataset = LineDataset::series("a", &[1.0], ChartColor::red(), 0.0, false);
        let value = ChartDataset::to_value(&dataset);
        assert_eq!(value.get("fill"), Some(&Value::Bool(false)));
        assert!(value.get("backgroundColor").is_none());
    }
}
