use crate::core::{ToValue, Value};

use super::common::scale_common_setters;
use super::{ScaleCommon, ScaleType};

/// Axis of discrete string labels.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScale {
    pub common: ScaleCommon,
    /// Overrides `data.labels` for this axis.
    pub labels: Option<Vec<String>>,
}

impl Default for CategoryScale {
    fn default() -> Self {
        Self {
            common: ScaleCommon {
                offset: Some(true),
                ..ScaleCommon::default()
            },
            labels: None,
        }
    }
}

impl CategoryScale {
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
}

scale_common_setters!(CategoryScale);

impl ToValue for CategoryScale {
    fn to_value(&self) -> Value {
        self.common
            .object(ScaleType::Category)
            .optional("labels", self.labels.as_ref())
            .build()
    }
}
