use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("No image loaded")]
    NoImageLoaded,

    #[error("Crop region is empty for the current pan offset")]
    DegenerateCropRegion,

    #[error("Invalid scale bounds: min {min}, max {max} (need 0 < min < max <= 32)")]
    InvalidScaleBounds { min: f64, max: f64 },

    #[error("Invalid zoom step {0} (must be finite and > 1.0)")]
    InvalidZoomScale(f64),

    #[error("Resample quality level {0} out of range (0-4)")]
    InvalidQuality(u8),

    #[error("Invalid background color: {0}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
