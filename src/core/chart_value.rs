use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::core::primitives::{datetime_to_iso8601, decimal_to_f64};
use crate::core::value::{ToValue, Value};
use crate::error::ChartResult;

/// One entry of a dataset's `data` array.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartValue {
    Number(f64),
    Text(String),
    /// Rendered as an ISO-8601 string for time scales.
    Date(DateTime<Utc>),
    /// `{x, y, r?}` object used by scatter and bubble charts.
    Point(Box<ChartPoint>),
    /// Gap in the series.
    Null,
}

impl ChartValue {
    pub fn from_decimal(value: Decimal) -> ChartResult<Self> {
        Ok(Self::Number(decimal_to_f64(value, "data value")?))
    }
}

impl ToValue for ChartValue {
    fn to_value(&self) -> Value {
        match self {
            Self::Number(number) => Value::Number(*number),
            Self::Text(text) => Value::String(text.clone()),
            Self::Date(time) => Value::String(datetime_to_iso8601(*time)),
            Self::Point(point) => point.to_value(),
            Self::Null => Value::Null,
        }
    }
}

macro_rules! impl_chart_value_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ChartValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_chart_value_number!(f64, f32, i32, i64, u32, u64, usize);

impl From<&str> for ChartValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ChartValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for ChartValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl From<ChartPoint> for ChartValue {
    fn from(value: ChartPoint) -> Self {
        Self::Point(Box::new(value))
    }
}

impl<T: Into<ChartValue>> From<Option<T>> for ChartValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Data point with explicit coordinates; `r` is the bubble radius.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: ChartValue,
    pub y: ChartValue,
    pub r: Option<f64>,
}

impl ChartPoint {
    #[must_use]
    pub fn new(x: impl Into<ChartValue>, y: impl Into<ChartValue>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            r: None,
        }
    }

    #[must_use]
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }

    #[must_use]
    pub fn bubble(x: f64, y: f64, r: f64) -> Self {
        Self::new(x, y).with_radius(r)
    }

    #[must_use]
    pub fn at_time(time: DateTime<Utc>, value: f64) -> Self {
        Self::new(time, value)
    }

    #[must_use]
    pub fn category(category: impl Into<String>, value: f64) -> Self {
        let category: String = category.into();
        Self::new(category, value)
    }

    #[must_use]
    pub fn with_radius(mut self, r: f64) -> Self {
        self.r = Some(r);
        self
    }
}

impl ToValue for ChartPoint {
    fn to_value(&self) -> Value {
        Value::object()
            .field("x", &self.x)
            .field("y", &self.y)
            .optional("r", self.r.as_ref())
            .build()
    }
}

/// Converts a numeric slice into dataset values.
#[must_use]
pub fn numbers<T: Copy + Into<ChartValue>>(values: &[T]) -> Vec<ChartValue> {
    values.iter().map(|&v| v.into()).collect()
}
