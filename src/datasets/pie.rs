use crate::core::encoder::percent_text;
use crate::core::{ChartColor, ChartValue, ToValue, Value, numbers};
use crate::macros::js_enum;

use super::{BaseDataset, ChartDataset};

js_enum! {
    pub enum BorderAlign {
        Center => "center",
        Inner => "inner",
    }
}

/// Inner radius of a doughnut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutoutValue {
    Pixels(f64),
    /// Rendered as a `'<n>%'` string.
    Percentage(f64),
}

impl ToValue for CutoutValue {
    fn to_value(&self) -> Value {
        match self {
            Self::Pixels(pixels) => Value::Number(*pixels),
            Self::Percentage(percent) => Value::String(percent_text(*percent)),
        }
    }
}

/// Pie chart dataset.
///
/// Per-segment colour lists take precedence over the single colours of the
/// base record when non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PieDataset {
    pub base: BaseDataset,
    pub rotation: Option<f64>,
    pub circumference: Option<f64>,
    pub border_align: Option<BorderAlign>,
    pub border_radius: Option<f64>,
    pub hover_offset: Option<f64>,
    pub offset: Option<f64>,
    pub spacing: Option<f64>,
    pub weight: Option<f64>,
    pub background_colors: Option<Vec<ChartColor>>,
    pub border_colors: Option<Vec<ChartColor>>,
    pub hover_background_colors: Option<Vec<ChartColor>>,
    pub hover_border_colors: Option<Vec<ChartColor>>,
}

impl PieDataset {
    pub const DEFAULT_LABEL: &'static str = "Pie Data";

    #[must_use]
    pub fn new(data: Vec<ChartValue>) -> Self {
        Self::labeled(Self::DEFAULT_LABEL, data)
    }

    #[must_use]
    pub fn labeled(label: impl Into<String>, data: Vec<ChartValue>) -> Self {
        let mut base = BaseDataset::new(label, data);
        base.border_width = Some(1.0);
        Self {
            base,
            rotation: None,
            circumference: Some(360.0),
            border_align: Some(BorderAlign::Center),
            border_radius: Some(0.0),
            hover_offset: Some(4.0),
            offset: Some(0.0),
            spacing: Some(0.0),
            weight: Some(1.0),
            background_colors: None,
            border_colors: None,
            hover_background_colors: None,
            hover_border_colors: None,
        }
    }

    /// Numeric segments coloured from the start of
    /// [`ChartColor::default_palette`]. Segments beyond the palette length
    /// get no colour of their own.
    #[must_use]
    pub fn with_palette(data: &[f64]) -> Self {
        let mut dataset = Self::new(numbers(data));
        dataset.background_colors = Some(
            ChartColor::default_palette()
                .into_iter()
                .take(data.len())
                .collect(),
        );
        dataset
    }

    #[must_use]
    pub fn with_background_colors(mut self, colors: Vec<ChartColor>) -> Self {
        self.background_colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_border_colors(mut self, colors: Vec<ChartColor>) -> Self {
        self.border_colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_hover_background_colors(mut self, colors: Vec<ChartColor>) -> Self {
        self.hover_background_colors = Some(colors);
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_circumference(mut self, degrees: f64) -> Self {
        self.circumference = Some(degrees);
        self
    }

    #[must_use]
    pub fn with_hover_offset(mut self, offset: f64) -> Self {
        self.hover_offset = Some(offset);
        self
    }
}

dataset_setters!(PieDataset, base);

fn colors_or_single(
    colors: Option<&Vec<ChartColor>>,
    single: Option<&ChartColor>,
) -> Option<Value> {
    match colors {
        Some(colors) if !colors.is_empty() => Some(colors.to_value()),
        _ => single.map(ToValue::to_value),
    }
}

impl ChartDataset for PieDataset {
    fn label(&self) -> &str {
        &self.base.label
    }

    fn data(&self) -> &[ChartValue] {
        &self.base.data
    }

    fn to_value(&self) -> Value {
        let background = colors_or_single(
            self.background_colors.as_ref(),
            self.base.background_color.as_ref(),
        );
        let border = colors_or_single(self.border_colors.as_ref(), self.base.border_color.as_ref());
        self.base
            .head()
            .optional("backgroundColor", background.as_ref())
            .optional("borderColor", border.as_ref())
            .optional("borderWidth", self.base.border_width.as_ref())
            .optional("order", self.base.order.as_ref())
            .optional("rotation", self.rotation.as_ref())
            .optional("circumference", self.circumference.as_ref())
            .optional("borderAlign", self.border_align.as_ref())
            .optional("borderRadius", self.border_radius.as_ref())
            .optional("hoverOffset", self.hover_offset.as_ref())
            .optional("offset", self.offset.as_ref())
            .optional("spacing", self.spacing.as_ref())
            .optional("weight", self.weight.as_ref())
            .non_empty("hoverBackgroundColor", self.hover_background_colors.as_ref())
            .non_empty("hoverBorderColor", self.hover_border_colors.as_ref())
            .build()
    }
}

/// Doughnut dataset: a [`PieDataset`] plus `cutout`.
#[derive(Debug, Clone, PartialEq)]
pub struct DoughnutDataset {
    pub pie: PieDataset,
    pub cutout: Option<CutoutValue>,
}

impl DoughnutDataset {
    pub const DEFAULT_LABEL: &'static str = "Doughnut Data";

    #[must_use]
    pub fn new(data: Vec<ChartValue>) -> Self {
        Self::from_pie(PieDataset::labeled(Self::DEFAULT_LABEL, data))
    }

    /// Wraps `pie` with the default 50% cutout.
    #[must_use]
    pub fn from_pie(pie: PieDataset) -> Self {
        Self {
            pie,
            cutout: Some(CutoutValue::Percentage(50.0)),
        }
    }

    #[must_use]
    pub fn with_palette(data: &[f64]) -> Self {
        let mut pie = PieDataset::with_palette(data);
        pie.base.label = Self::DEFAULT_LABEL.to_owned();
        Self::from_pie(pie)
    }

    #[must_use]
    pub fn with_cutout(mut self, cutout: CutoutValue) -> Self {
        self.cutout = Some(cutout);
        self
    }

    #[must_use]
    pub fn with_background_colors(mut self, colors: Vec<ChartColor>) -> Self {
        self.pie.background_colors = Some(colors);
        self
    }
}

dataset_setters!(DoughnutDataset, pie.base);

impl ChartDataset for DoughnutDataset {
    fn label(&self) -> &str {
        self.pie.label()
    }

    fn data(&self) -> &[ChartValue] {
        self.pie.data()
    }

    fn to_value(&self) -> Value {
        let mut map = match self.pie.to_value() {
            Value::Object(map) => map,
            _ => return Value::Null,
        };
        if let Some(cutout) = &self.cutout {
            map.insert("cutout".to_owned(), cutout.to_value());
        }
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colour_list_overrides_single_colour() {
        let dataset = PieDataset::new(numbers(&[1.0, 2.0]))
            .with_background_color(ChartColor::red())
            .with_background_colors(vec![ChartColor::blue(), ChartColor::green()]);
        let value = ChartDataset::to_value(&dataset);
        assert_eq!(
            value.get("backgroundColor").and_then(Value::as_array).map(<[Value]>::len),
            Some(2)
        );
    }

    #[test]
    fn doughnut_appends_cutout_last() {
        let dataset = DoughnutDataset::new(numbers(&[1.0]));
        let value = ChartDataset::to_value(&dataset);
        let map = value.as_object().expect("object");
        assert_eq!(map.get_index(map.len() - 1).map(|(key, _)| key.as_str()), Some("cutout"));
        assert_eq!(map.get("cutout"), Some(&Value::from("50%")));
        assert_eq!(map.get("label"), Some(&Value::from("Doughnut Data")));
    }
}
