mod axis;
mod category;
mod common;
mod linear;

pub use axis::{
    BorderOptions, CrossAlign, GridOptions, MajorTickOptions, ScaleTitle, TickAlign,
    TickOptions, TickSource,
};
pub use category::CategoryScale;
pub use common::{ScaleCommon, ScalePosition, ScaleType};
pub use linear::{Grace, LinearScale};

use indexmap::IndexMap;

use crate::core::{ToValue, Value};

/// One entry of `options.scales`.
///
/// `Custom` carries a pre-built value tree for scale types without a typed
/// record (time, logarithmic, radial).
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    Linear(LinearScale),
    Category(CategoryScale),
    Custom(Value),
}

impl From<LinearScale> for Scale {
    fn from(scale: LinearScale) -> Self {
        Self::Linear(scale)
    }
}

impl From<CategoryScale> for Scale {
    fn from(scale: CategoryScale) -> Self {
        Self::Category(scale)
    }
}

impl From<Value> for Scale {
    fn from(value: Value) -> Self {
        Self::Custom(value)
    }
}

impl ToValue for Scale {
    fn to_value(&self) -> Value {
        match self {
            Self::Linear(scale) => scale.to_value(),
            Self::Category(scale) => scale.to_value(),
            Self::Custom(value) => value.clone(),
        }
    }
}

/// `options.scales`: scales keyed by axis id, rendered in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleOptions {
    scales: IndexMap<String, Scale>,
}

impl ScaleOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Common cartesian pair; either axis may be omitted.
    #[must_use]
    pub fn xy(x: Option<Scale>, y: Option<Scale>) -> Self {
        let mut scales = IndexMap::new();
        if let Some(x) = x {
            scales.insert("x".to_owned(), x);
        }
        if let Some(y) = y {
            scales.insert("y".to_owned(), y);
        }
        Self { scales }
    }

    /// Returns a copy with `scale` registered under `id`.
    #[must_use]
    pub fn adding(&self, id: impl Into<String>, scale: impl Into<Scale>) -> Self {
        let mut scales = self.scales.clone();
        scales.insert(id.into(), scale.into());
        Self { scales }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Scale> {
        self.scales.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scales.keys().map(String::as_str)
    }
}

impl ToValue for ScaleOptions {
    fn to_value(&self) -> Value {
        Value::Object(
            self.scales
                .iter()
                .map(|(id, scale)| (id.clone(), scale.to_value()))
                .collect(),
        )
    }
}

/// Fluent construction of [`ScaleOptions`].
#[derive(Debug, Clone, Default)]
pub struct ScaleBuilder {
    scales: IndexMap<String, Scale>,
}

impl ScaleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn x(self, scale: impl Into<Scale>) -> Self {
        self.custom("x", scale)
    }

    #[must_use]
    pub fn y(self, scale: impl Into<Scale>) -> Self {
        self.custom("y", scale)
    }

    #[must_use]
    pub fn r(self, scale: impl Into<Scale>) -> Self {
        self.custom("r", scale)
    }

    #[must_use]
    pub fn custom(mut self, id: impl Into<String>, scale: impl Into<Scale>) -> Self {
        self.scales.insert(id.into(), scale.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ScaleOptions {
        ScaleOptions {
            scales: self.scales,
        }
    }
}
