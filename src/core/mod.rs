pub mod chart_type;
pub mod chart_value;
pub mod color;
pub mod encoder;
pub mod primitives;
pub mod value;

pub use chart_type::ChartType;
pub use chart_value::{ChartPoint, ChartValue, numbers};
pub use color::ChartColor;
pub use encoder::{JsEncoder, to_js_literal};
pub use value::{JsCode, ObjectBuilder, ToValue, Value, ValueMap};
