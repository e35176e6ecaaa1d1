pub mod animation;
pub mod config;
pub mod error;
pub mod indicator;
pub mod layout;
pub mod style;

pub use animation::{Animator, Easing, Mode};
pub use config::{AppConfig, IndicatorConfig, UiConfig};
pub use error::{Error, Result};
pub use indicator::state::{Indicator, Insets, Orientation, Rgb};
pub use indicator::{coords, PageIndicator};
pub use layout::{Point, Size};
pub use style::{AnimationKind, Dot, Frame, Marker};
