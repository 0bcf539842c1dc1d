//! Dataset records: each reduces itself to one object in `data.datasets`.

/// `with_*` setters for the [`BaseDataset`] fields of a dataset type,
/// reached through the given field path (empty for `BaseDataset` itself).
macro_rules! dataset_setters {
    ($name:ident) => {
        dataset_setters!(@impl $name, []);
    };
    ($name:ident, $($base:ident).+) => {
        dataset_setters!(@impl $name, [$(.$base)+]);
    };
    (@impl $name:ident, [$($path:tt)*]) => {
        impl $name {
            #[must_use]
            pub fn with_background_color(mut self, color: $crate::core::ChartColor) -> Self {
                self$($path)*.background_color = Some(color);
                self
            }

            #[must_use]
            pub fn with_border_color(mut self, color: $crate::core::ChartColor) -> Self {
                self$($path)*.border_color = Some(color);
                self
            }

            #[must_use]
            pub fn with_border_width(mut self, width: f64) -> Self {
                self$($path)*.border_width = Some(width);
                self
            }

            #[must_use]
            pub fn with_hidden(mut self, hidden: bool) -> Self {
                self$($path)*.hidden = hidden;
                self
            }

            #[must_use]
            pub fn with_order(mut self, order: i32) -> Self {
                self$($path)*.order = Some(order);
                self
            }
        }
    };
}

mod bar;
mod line;
mod pie;

pub use bar::{BarDataset, BorderRadius, BorderSkipped};
pub use line::{ChartFill, CubicInterpolationMode, LineDataset, PointStyle};
pub use pie::{BorderAlign, CutoutValue, DoughnutDataset, PieDataset};

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::core::{ChartColor, ChartValue, ObjectBuilder, ToValue, Value, numbers};

/// Producer of one `data.datasets` entry.
///
/// Datasets are shared read-only between configurations, hence the
/// `Send + Sync` bound.
pub trait ChartDataset: fmt::Debug + Send + Sync {
    fn label(&self) -> &str;

    fn data(&self) -> &[ChartValue];

    fn to_value(&self) -> Value;
}

/// Members every dataset carries, emitted in this order: `label`, `data`,
/// `hidden`, then `backgroundColor`, `borderColor`, `borderWidth` and `order`
/// when set.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseDataset {
    pub label: String,
    pub data: Vec<ChartValue>,
    pub background_color: Option<ChartColor>,
    pub border_color: Option<ChartColor>,
    pub border_width: Option<f64>,
    pub hidden: bool,
    pub order: Option<i32>,
}

impl BaseDataset {
    #[must_use]
    pub fn new(label: impl Into<String>, data: Vec<ChartValue>) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: None,
            border_color: None,
            border_width: None,
            hidden: false,
            order: None,
        }
    }

    #[must_use]
    pub fn from_numbers(label: impl Into<String>, data: &[f64]) -> Self {
        Self::new(label, numbers(data))
    }

    pub(crate) fn object(&self) -> ObjectBuilder {
        self.head()
            .optional("backgroundColor", self.background_color.as_ref())
            .optional("borderColor", self.border_color.as_ref())
            .optional("borderWidth", self.border_width.as_ref())
            .optional("order", self.order.as_ref())
    }

    /// `label`, `data` and `hidden` only; callers that render colours
    /// themselves continue from here.
    pub(crate) fn head(&self) -> ObjectBuilder {
        ObjectBuilder::new()
            .field("label", self.label.as_str())
            .field("data", &self.data)
            .field("hidden", &self.hidden)
    }
}

dataset_setters!(BaseDataset);

impl ChartDataset for BaseDataset {
    fn label(&self) -> &str {
        &self.label
    }

    fn data(&self) -> &[ChartValue] {
        &self.data
    }

    fn to_value(&self) -> Value {
        self.object().build()
    }
}

/// The `data` member: optional category labels plus ordered datasets.
#[derive(Debug, Clone, Default)]
pub struct ChartData {
    pub labels: Option<Vec<String>>,
    pub datasets: Vec<Arc<dyn ChartDataset>>,
}

impl ChartData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: impl ChartDataset + 'static) -> Self {
        self.datasets.push(Arc::new(dataset));
        self
    }

    /// Appends an already shared dataset.
    #[must_use]
    pub fn with_shared_dataset(mut self, dataset: Arc<dyn ChartDataset>) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Single-dataset shorthand.
    #[must_use]
    pub fn single(labels: Option<Vec<String>>, dataset: impl ChartDataset + 'static) -> Self {
        Self {
            labels,
            datasets: vec![Arc::new(dataset)],
        }
    }

    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }
}

impl ToValue for ChartData {
    fn to_value(&self) -> Value {
        let datasets: Vec<Value> = self
            .datasets
            .iter()
            .enumerate()
            .map(|(index, dataset)| {
                trace!(index, label = dataset.label(), "converting dataset");
                ChartDataset::to_value(dataset.as_ref())
            })
            .collect();
        Value::object()
            .optional("labels", self.labels.as_ref())
            .value("datasets", Value::Array(datasets))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_dataset_key_order() {
        let dataset = BaseDataset::from_numbers("Visitors", &[1.0, 2.0])
            .with_order(2)
            .with_border_width(1.0);
        let value = dataset.to_value();
        let keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["label", "data", "hidden", "borderWidth", "order"]);
    }

    #[test]
    fn base_dataset_setters_fill_every_member() {
        let dataset = BaseDataset::from_numbers("Visitors", &[1.0])
            .with_background_color(ChartColor::red())
            .with_border_color(ChartColor::blue())
            .with_hidden(true);
        let value = dataset.to_value();
        assert_eq!(value.get("backgroundColor"), Some(&Value::from("rgb(255, 99, 132)")));
        assert_eq!(value.get("borderColor"), Some(&Value::from("rgb(54, 162, 235)")));
        assert_eq!(value.get("hidden"), Some(&Value::Bool(true)));
    }

    #[test]
    fn labels_are_omitted_when_absent() {
        let data = ChartData::new().with_dataset(BaseDataset::from_numbers("a", &[1.0]));
        let value = data.to_value();
        assert!(value.get("labels").is_none());
        assert_eq!(value.get("datasets").and_then(Value::as_array).map(<[Value]>::len), Some(1));
    }
}
