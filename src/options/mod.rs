mod animation;
mod chart_options;
mod interaction;
mod layout;
mod text;

pub use animation::{AnimationEasing, AnimationOptions};
pub use chart_options::{
    ChartOptions, ClipValue, FontOptions, FontStyle, FontWeight, IndexAxis,
};
pub use interaction::{InteractionAxis, InteractionMode, InteractionOptions};
pub use layout::{LayoutOptions, PaddingValue};
pub use text::{TextAlign, TextDirection, TitleAlign};
