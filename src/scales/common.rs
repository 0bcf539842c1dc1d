use crate::core::ObjectBuilder;
use crate::macros::js_enum;

use super::{BorderOptions, GridOptions, ScaleTitle, TickOptions};

js_enum! {
    /// Scale implementations registered by the Chart.js runtime.
    pub enum ScaleType {
        Linear => "linear",
        Logarithmic => "logarithmic",
        Category => "category",
        Time => "time",
        Timeseries => "timeseries",
        RadialLinear => "radialLinear",
    }
}

js_enum! {
    pub enum ScalePosition {
        Top => "top",
        Left => "left",
        Bottom => "bottom",
        Right => "right",
        Center => "center",
        ChartArea => "chartArea",
    }
}

/// Members shared by every cartesian scale.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleCommon {
    pub display: Option<bool>,
    pub position: Option<ScalePosition>,
    pub offset: Option<bool>,
    pub title: Option<ScaleTitle>,
    pub ticks: Option<TickOptions>,
    pub grid: Option<GridOptions>,
    pub border: Option<BorderOptions>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub suggested_min: Option<f64>,
    pub suggested_max: Option<f64>,
    pub reverse: Option<bool>,
    pub stacked: Option<bool>,
    pub weight: Option<f64>,
    pub id: Option<String>,
    pub clip: Option<bool>,
}

impl Default for ScaleCommon {
    fn default() -> Self {
        Self {
            display: Some(true),
            position: None,
            offset: None,
            title: None,
            ticks: None,
            grid: None,
            border: None,
            min: None,
            max: None,
            suggested_min: None,
            suggested_max: None,
            reverse: Some(false),
            stacked: Some(false),
            weight: None,
            id: None,
            clip: None,
        }
    }
}

impl ScaleCommon {
    /// Starts a scale object with `type` followed by the shared members.
    pub(crate) fn object(&self, scale_type: ScaleType) -> ObjectBuilder {
        ObjectBuilder::new()
            .field("type", &scale_type)
            .optional("display", self.display.as_ref())
            .optional("position", self.position.as_ref())
            .optional("offset", self.offset.as_ref())
            .optional("title", self.title.as_ref())
            .optional("ticks", self.ticks.as_ref())
            .optional("grid", self.grid.as_ref())
            .optional("border", self.border.as_ref())
            .optional("min", self.min.as_ref())
            .optional("max", self.max.as_ref())
            .optional("suggestedMin", self.suggested_min.as_ref())
            .optional("suggestedMax", self.suggested_max.as_ref())
            .optional("reverse", self.reverse.as_ref())
            .optional("stacked", self.stacked.as_ref())
            .optional("weight", self.weight.as_ref())
            .optional("id", self.id.as_ref())
            .optional("clip", self.clip.as_ref())
    }
}

/// `with_*` setters for the shared members, generated for each scale type.
macro_rules! scale_common_setters {
    ($name:ident) => {
        impl $name {
            #[must_use]
            pub fn with_title(mut self, title: $crate::scales::ScaleTitle) -> Self {
                self.common.title = Some(title);
                self
            }

            #[must_use]
            pub fn with_ticks(mut self, ticks: $crate::scales::TickOptions) -> Self {
                self.common.ticks = Some(ticks);
                self
            }

            #[must_use]
            pub fn with_grid(mut self, grid: $crate::scales::GridOptions) -> Self {
                self.common.grid = Some(grid);
                self
            }

            #[must_use]
            pub fn with_position(mut self, position: $crate::scales::ScalePosition) -> Self {
                self.common.position = Some(position);
                self
            }

            #[must_use]
            pub fn with_range(mut self, min: f64, max: f64) -> Self {
                self.common.min = Some(min);
                self.common.max = Some(max);
                self
            }

            #[must_use]
            pub fn with_stacked(mut self, stacked: bool) -> Self {
                self.common.stacked = Some(stacked);
                self
            }

            #[must_use]
            pub fn with_display(mut self, display: bool) -> Self {
                self.common.display = Some(display);
                self
            }
        }
    };
}

pub(crate) use scale_common_setters;
