use std::fmt;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BACKGROUND, DEFAULT_MAX_LEVEL, DEFAULT_MIN_LEVEL, DEFAULT_ZOOM_SCALE, MAX_ZOOM_LEVEL,
};
use crate::error::{Result, ViewerError};

/// Resize filter, ordered from weakest (fastest) to strongest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResampleQuality {
    #[default]
    Nearest,
    Bilinear,
    Hamming,
    Bicubic,
    Lanczos,
}

impl ResampleQuality {
    pub const ALL: &[Self] = &[
        Self::Nearest,
        Self::Bilinear,
        Self::Hamming,
        Self::Bicubic,
        Self::Lanczos,
    ];

    /// Map a numeric quality level (0-4) to a filter.
    pub fn from_level(level: u8) -> Result<Self> {
        Self::ALL
            .get(level as usize)
            .copied()
            .ok_or(ViewerError::InvalidQuality(level))
    }

    pub fn level(self) -> u8 {
        match self {
            Self::Nearest => 0,
            Self::Bilinear => 1,
            Self::Hamming => 2,
            Self::Bicubic => 3,
            Self::Lanczos => 4,
        }
    }

    /// The equivalent `image` crate filter. `Hamming` has none and is
    /// resampled by hand.
    pub fn filter_type(self) -> Option<FilterType> {
        match self {
            Self::Nearest => Some(FilterType::Nearest),
            Self::Bilinear => Some(FilterType::Triangle),
            Self::Hamming => None,
            Self::Bicubic => Some(FilterType::CatmullRom),
            Self::Lanczos => Some(FilterType::Lanczos3),
        }
    }
}

impl fmt::Display for ResampleQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "Nearest"),
            Self::Bilinear => write!(f, "Bilinear"),
            Self::Hamming => write!(f, "Hamming"),
            Self::Bicubic => write!(f, "Bicubic"),
            Self::Lanczos => write!(f, "Lanczos"),
        }
    }
}

/// Construction-time settings for a [`Viewer`](crate::Viewer).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Factor applied per wheel notch.
    pub zoom_scale: f64,
    pub min_level: f64,
    pub max_level: f64,
    pub quality: ResampleQuality,
    /// Surface fill colour as `#rrggbb`.
    pub background: String,
    /// Keep the image point under the pointer fixed while zooming.
    pub zoom_to_cursor: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom_scale: DEFAULT_ZOOM_SCALE,
            min_level: DEFAULT_MIN_LEVEL,
            max_level: DEFAULT_MAX_LEVEL,
            quality: ResampleQuality::default(),
            background: DEFAULT_BACKGROUND.to_string(),
            zoom_to_cursor: false,
        }
    }
}

impl ViewerConfig {
    /// Check zoom bounds, zoom step and background colour.
    pub fn validate(&self) -> Result<()> {
        check_zoom(self.zoom_scale, self.min_level, self.max_level)?;
        self.background_rgb()?;
        Ok(())
    }

    /// Parse `background` into RGB bytes.
    pub fn background_rgb(&self) -> Result<[u8; 3]> {
        parse_hex_color(&self.background)
    }
}

pub(crate) fn check_zoom(zoom_scale: f64, min: f64, max: f64) -> Result<()> {
    let bounds_ok = min.is_finite()
        && max.is_finite()
        && min > 0.0
        && min < max
        && max <= MAX_ZOOM_LEVEL;
    if !bounds_ok {
        return Err(ViewerError::InvalidScaleBounds { min, max });
    }
    if !zoom_scale.is_finite() || zoom_scale <= 1.0 {
        return Err(ViewerError::InvalidZoomScale(zoom_scale));
    }
    Ok(())
}

fn parse_hex_color(s: &str) -> Result<[u8; 3]> {
    let invalid = || ViewerError::InvalidColor(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}
