use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::value::{ToValue, Value};

/// Chart kinds understood by the Chart.js runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Line,
    Bar,
    Radar,
    Doughnut,
    Pie,
    PolarArea,
    Bubble,
    Scatter,
}

impl ChartType {
    pub const ALL: [ChartType; 8] = [
        Self::Line,
        Self::Bar,
        Self::Radar,
        Self::Doughnut,
        Self::Pie,
        Self::PolarArea,
        Self::Bubble,
        Self::Scatter,
    ];

    /// Identifier used in the `type` key of a chart configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Radar => "radar",
            Self::Doughnut => "doughnut",
            Self::Pie => "pie",
            Self::PolarArea => "polarArea",
            Self::Bubble => "bubble",
            Self::Scatter => "scatter",
        }
    }

    #[must_use]
    pub fn supports_stacking(self) -> bool {
        matches!(self, Self::Line | Self::Bar)
    }

    #[must_use]
    pub fn is_radial(self) -> bool {
        matches!(self, Self::Radar | Self::PolarArea)
    }

    #[must_use]
    pub fn is_circular(self) -> bool {
        matches!(self, Self::Doughnut | Self::Pie | Self::PolarArea)
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToValue for ChartType {
    fn to_value(&self) -> Value {
        Value::String(self.as_str().to_owned())
    }
}
