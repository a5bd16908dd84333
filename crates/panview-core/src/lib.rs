pub mod compositor;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod input;
pub mod io;
pub mod resample;
pub mod source;
pub mod surface;
pub mod view;

pub use config::{ResampleQuality, ViewerConfig};
pub use engine::{Viewer, ViewerStatus};
pub use error::{Result, ViewerError};
pub use input::WheelDirection;
pub use source::SourceImage;
pub use surface::{OffscreenSurface, Surface};
pub use view::Point;
