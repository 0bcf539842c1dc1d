use crate::core::{ChartColor, ChartValue, ToValue, Value, numbers};

use super::{BaseDataset, ChartDataset};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BorderRadius {
    Uniform(f64),
    TopBottom {
        top: f64,
        bottom: f64,
    },
    Corners {
        top_left: f64,
        top_right: f64,
        bottom_left: f64,
        bottom_right: f64,
    },
}

impl ToValue for BorderRadius {
    fn to_value(&self) -> Value {
        match *self {
            Self::Uniform(radius) => Value::Number(radius),
            Self::TopBottom { top, bottom } => {
                Value::object().value("top", top).value("bottom", bottom).build()
            }
            Self::Corners {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            } => Value::object()
                .value("topLeft", top_left)
                .value("topRight", top_right)
                .value("bottomLeft", bottom_left)
                .value("bottomRight", bottom_right)
                .build(),
        }
    }
}

/// Edge of the bar left without a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSkipped {
    Start,
    End,
    Middle,
    Bottom,
    Left,
    Top,
    Right,
    /// Draw every edge; renders as `false`.
    None,
}

impl ToValue for BorderSkipped {
    fn to_value(&self) -> Value {
        let edge = match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Top => "top",
            Self::Right => "right",
            Self::None => return Value::Bool(false),
        };
        edge.to_value()
    }
}

/// Bar chart dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct BarDataset {
    pub base: BaseDataset,
    pub bar_percentage: Option<f64>,
    pub category_percentage: Option<f64>,
    pub bar_thickness: Option<f64>,
    pub max_bar_thickness: Option<f64>,
    pub min_bar_length: Option<f64>,
    pub border_radius: Option<BorderRadius>,
    pub border_skipped: Option<BorderSkipped>,
    pub inflate_amount: Option<f64>,
    pub grouped: Option<bool>,
    /// Bars sharing a stack id are stacked together.
    pub stack: Option<String>,
    pub base_value: Option<f64>,
}

impl BarDataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<ChartValue>) -> Self {
        let mut base = BaseDataset::new(label, data);
        base.border_width = Some(0.0);
        Self {
            base,
            bar_percentage: Some(0.9),
            category_percentage: Some(0.8),
            bar_thickness: None,
            max_bar_thickness: None,
            min_bar_length: None,
            border_radius: None,
            border_skipped: Some(BorderSkipped::Start),
            inflate_amount: None,
            grouped: Some(true),
            stack: None,
            base_value: None,
        }
    }

    /// Numeric bars filled and outlined in `color`.
    #[must_use]
    pub fn series(label: impl Into<String>, data: &[f64], color: ChartColor) -> Self {
        let mut dataset = Self::new(label, numbers(data));
        dataset.base.background_color = Some(color.clone());
        dataset.base.border_color = Some(color);
        dataset
    }

    #[must_use]
    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    #[must_use]
    pub fn with_border_radius(mut self, radius: BorderRadius) -> Self {
        self.border_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn with_border_skipped(mut self, skipped: BorderSkipped) -> Self {
        self.border_skipped = Some(skipped);
        self
    }

    #[must_use]
    pub fn with_bar_thickness(mut self, thickness: f64) -> Self {
        self.bar_thickness = Some(thickness);
        self
    }

    #[must_use]
    pub fn with_percentages(mut self, bar: f64, category: f64) -> Self {
        self.bar_percentage = Some(bar);
        self.category_percentage = Some(category);
        self
    }
}

dataset_setters!(BarDataset, base);

impl ChartDataset for BarDataset {
    fn label(&self) -> &str {
        &self.base.label
    }

    fn data(&self) -> &[ChartValue] {
        &self.base.data
    }

    fn to_value(&self) -> Value {
        self.base
            .object()
            .optional("barPercentage", self.bar_percentage.as_ref())
            .optional("categoryPercentage", self.category_percentage.as_ref())
            .optional("barThickness", self.bar_thickness.as_ref())
            .optional("maxBarThickness", self.max_bar_thickness.as_ref())
            .optional("minBarLength", self.min_bar_length.as_ref())
            .optional("borderRadius", self.border_radius.as_ref())
            .optional("borderSkipped", self.border_skipped.as_ref())
            .optional("inflateAmount", self.inflate_amount.as_ref())
            .optional("grouped", self.grouped.as_ref())
            .optional("stack", self.stack.as_ref())
            .optional("base", self.base_value.as_ref())
            .build()
    }
}
