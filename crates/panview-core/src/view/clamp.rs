//! Visible-window arithmetic.
//!
//! Scroll coordinates place the resampled bitmap's left edge at `margin.x`
//! when the surface is unpanned, so a bitmap smaller than the surface sits
//! centered and a larger one overhangs on both sides (negative margin).

use crate::consts::{BORDER_CONTACT_BAND, MIN_VISIBLE_PX, SCROLL_UNIT_DIVISOR};
use crate::error::{Result, ViewerError};

use super::{Point, ViewState};

/// Offset of the resampled bitmap's top-left corner from the unpanned
/// surface origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margins {
    pub x: i32,
    pub y: i32,
}

impl Margins {
    pub fn compute(state: &ViewState, resampled: (u32, u32)) -> Self {
        Self {
            x: centering_margin(state.surface_width, resampled.0),
            y: centering_margin(state.surface_height, resampled.1),
        }
    }
}

fn centering_margin(surface: u32, resampled: u32) -> i32 {
    ((surface as i64 - resampled as i64).div_euclid(2)) as i32
}

/// Crop rectangle in resampled-bitmap pixels. `right`/`bottom` are exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// The part of the resampled bitmap that lands on the surface, and where.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewWindow {
    pub crop: CropRect,
    /// Centre of the crop in scroll coordinates.
    pub center_x: f64,
    pub center_y: f64,
}

/// Compute the crop rectangle and its drawn centre for the current origin.
///
/// Fails with `DegenerateCropRegion` when the bitmap lies entirely outside the
/// visible window on either axis.
pub fn visible_window(state: &ViewState, resampled: (u32, u32)) -> Result<ViewWindow> {
    let margins = Margins::compute(state, resampled);
    let (left, right) = crop_axis(state.pan_x, margins.x, state.surface_width, resampled.0);
    let (top, bottom) = crop_axis(state.pan_y, margins.y, state.surface_height, resampled.1);

    if right - left <= 0 || bottom - top <= 0 {
        return Err(ViewerError::DegenerateCropRegion);
    }

    let center_x =
        state.surface_width as f64 / 2.0 + (left + right - resampled.0 as i64) as f64 / 2.0;
    let center_y =
        state.surface_height as f64 / 2.0 + (top + bottom - resampled.1 as i64) as f64 / 2.0;

    Ok(ViewWindow {
        crop: CropRect {
            left: left as u32,
            top: top as u32,
            right: right as u32,
            bottom: bottom as u32,
        },
        center_x,
        center_y,
    })
}

fn crop_axis(origin: i32, margin: i32, surface: u32, resampled: u32) -> (i64, i64) {
    let near_visible = origin as i64 - margin as i64;
    let near = near_visible.max(0);
    // Far visible edge in bitmap pixels; the bitmap's own edge when it ends
    // inside the surface.
    let far = (near_visible + surface as i64).min(resampled as i64);
    (near, far)
}

/// Whether the origin is within the hysteresis band of a margin boundary on
/// either axis.
pub fn border_contact(state: &ViewState, resampled: (u32, u32)) -> bool {
    let margins = Margins::compute(state, resampled);
    axis_contact(state.pan_x, margins.x, state.surface_width, resampled.0)
        || axis_contact(state.pan_y, margins.y, state.surface_height, resampled.1)
}

fn axis_contact(origin: i32, margin: i32, surface: u32, resampled: u32) -> bool {
    let (origin, margin) = (origin as i64, margin as i64);
    let band = BORDER_CONTACT_BAND as i64;
    origin + band > margin || resampled as i64 + margin - (origin - band) > surface as i64
}

/// `target` pulled back so at least a sliver of the bitmap stays on screen.
pub fn clamp_origin(state: &ViewState, target: Point, resampled: (u32, u32)) -> Point {
    let margins = Margins::compute(state, resampled);
    Point::new(
        clamp_axis(target.x, margins.x, state.surface_width, resampled.0),
        clamp_axis(target.y, margins.y, state.surface_height, resampled.1),
    )
}

fn clamp_axis(origin: i32, margin: i32, surface: u32, resampled: u32) -> i32 {
    let keep = (MIN_VISIBLE_PX as i64).min(resampled as i64).min(surface as i64);
    let lo = margin as i64 + keep - surface as i64;
    let hi = margin as i64 + resampled as i64 - keep;
    (origin as i64).clamp(lo, hi) as i32
}

/// Distance covered by one scroll "unit" along an axis.
pub fn scroll_unit(surface: u32) -> i32 {
    (surface / SCROLL_UNIT_DIVISOR).max(1) as i32
}

/// Delta that steps the origin one scroll unit back toward the unpanned
/// position on every axis where it has drifted.
pub fn nudge_delta(state: &ViewState) -> (i32, i32) {
    (
        nudge_axis(state.pan_x, scroll_unit(state.surface_width)),
        nudge_axis(state.pan_y, scroll_unit(state.surface_height)),
    )
}

fn nudge_axis(origin: i32, unit: i32) -> i32 {
    if origin < 0 {
        unit.min(-origin)
    } else if origin > 0 {
        -unit.min(origin)
    } else {
        0
    }
}

/// Scroll origin that keeps the bitmap point under `pointer` in place when
/// the bitmap is resized from `before` to `after`.
pub fn anchored_origin(
    state: &ViewState,
    pointer: Point,
    before: (u32, u32),
    after: (u32, u32),
) -> Point {
    let old = Margins::compute(state, before);
    let new = Margins::compute(state, after);
    let axis = |origin: i32, pointer: i32, old_margin: i32, new_margin: i32, b: u32, a: u32| {
        let fraction = (origin + pointer - old_margin) as f64 / b as f64;
        (new_margin as f64 + fraction * a as f64 - pointer as f64).round() as i32
    };
    Point::new(
        axis(state.pan_x, pointer.x, old.x, new.x, before.0, after.0),
        axis(state.pan_y, pointer.y, old.y, new.y, before.1, after.1),
    )
}
