/// Default multiplicative step applied per wheel notch.
pub const DEFAULT_ZOOM_SCALE: f64 = 1.2;

/// Default lower zoom bound.
pub const DEFAULT_MIN_LEVEL: f64 = 0.1;

/// Default upper zoom bound.
pub const DEFAULT_MAX_LEVEL: f64 = 3.0;

/// Largest accepted `max_level`. Bounds the resampled bitmap to a sane
/// multiple of the source.
pub const MAX_ZOOM_LEVEL: f64 = 32.0;

/// Default surface fill behind the image.
pub const DEFAULT_BACKGROUND: &str = "#999999";

/// Width (in pixels) of the hysteresis band around the margins. A drag that
/// keeps the scroll origin outside this band only scrolls the existing frame.
pub const BORDER_CONTACT_BAND: i32 = 15;

/// Minimum number of bitmap pixels that stay visible on each axis while
/// dragging.
pub const MIN_VISIBLE_PX: i32 = 32;

/// A wheel nudge scrolls by this fraction of the surface dimension.
pub const SCROLL_UNIT_DIVISOR: u32 = 10;

/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Support radius of the Hamming-windowed sinc kernel.
pub const HAMMING_SUPPORT: f64 = 1.0;
