//! Zoom level bookkeeping.
//!
//! Every function takes the `ViewState` explicitly and reports whether the
//! scale changed; a change always sets `scale_dirty`.

use tracing::debug;

use crate::config::{check_zoom, ViewerConfig};
use crate::error::Result;

use super::ViewState;

/// Validated zoom step and bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    zoom_scale: f64,
    min_level: f64,
    max_level: f64,
}

impl ZoomLimits {
    pub fn new(zoom_scale: f64, min_level: f64, max_level: f64) -> Result<Self> {
        check_zoom(zoom_scale, min_level, max_level)?;
        Ok(Self {
            zoom_scale,
            min_level,
            max_level,
        })
    }

    pub fn from_config(config: &ViewerConfig) -> Result<Self> {
        Self::new(config.zoom_scale, config.min_level, config.max_level)
    }

    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    pub fn min_level(&self) -> f64 {
        self.min_level
    }

    pub fn max_level(&self) -> f64 {
        self.max_level
    }

    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_level, self.max_level)
    }
}

/// Multiply the scale by the zoom step, snapping to `max_level` when the step
/// would reach or cross it.
pub fn zoom_in(state: &mut ViewState, limits: &ZoomLimits) -> bool {
    let next = state.scale * limits.zoom_scale;
    if next < limits.max_level {
        set_scale(state, next)
    } else if state.scale < limits.max_level {
        set_scale(state, limits.max_level)
    } else {
        false
    }
}

/// Divide the scale by the zoom step, snapping to `min_level` when the step
/// would reach or cross it.
pub fn zoom_out(state: &mut ViewState, limits: &ZoomLimits) -> bool {
    let next = state.scale / limits.zoom_scale;
    if next > limits.min_level {
        set_scale(state, next)
    } else if state.scale > limits.min_level {
        set_scale(state, limits.min_level)
    } else {
        false
    }
}

/// Back to 1:1, unconditionally. The limits still apply, so a configuration
/// whose range excludes 1.0 lands on the nearest bound.
pub fn reset_to_identity(state: &mut ViewState, limits: &ZoomLimits) {
    state.scale = limits.clamp(1.0);
    state.scale_dirty = true;
}

/// Scale the image so its dominant axis exactly fills the surface.
///
/// The axis whose image/surface ratio is larger wins, so the other axis never
/// overflows. Returns `false` for a zero-sized surface or image.
pub fn fit_to_surface(state: &mut ViewState, limits: &ZoomLimits, image: (u32, u32)) -> bool {
    let (img_w, img_h) = (image.0 as f64, image.1 as f64);
    let (surf_w, surf_h) = (state.surface_width as f64, state.surface_height as f64);
    if img_w == 0.0 || img_h == 0.0 || surf_w == 0.0 || surf_h == 0.0 {
        return false;
    }

    let fit = if img_h / surf_h > img_w / surf_w {
        surf_h / img_h
    } else {
        surf_w / img_w
    };
    state.scale = limits.clamp(fit);
    state.scale_dirty = true;
    debug!(scale = state.scale, "Fit to surface");
    true
}

fn set_scale(state: &mut ViewState, scale: f64) -> bool {
    state.scale = scale;
    state.scale_dirty = true;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ZoomLimits {
        ZoomLimits::new(1.2, 0.1, 3.0).unwrap()
    }

    #[test]
    fn zoom_in_multiplies_inside_bounds() {
        let mut state = ViewState::new(100, 100);
        state.scale_dirty = false;
        assert!(zoom_in(&mut state, &limits()));
        assert!((state.scale - 1.2).abs() < 1e-12);
        assert!(state.scale_dirty);
    }

    #[test]
    fn zoom_out_snaps_to_min() {
        let mut state = ViewState::new(100, 100);
        state.scale = 0.11;
        assert!(zoom_out(&mut state, &limits()));
        assert_eq!(state.scale, 0.1);
        state.scale_dirty = false;
        assert!(!zoom_out(&mut state, &limits()));
        assert_eq!(state.scale, 0.1);
        assert!(!state.scale_dirty);
    }

    #[test]
    fn fit_prefers_larger_ratio() {
        let mut state = ViewState::new(400, 300);
        assert!(fit_to_surface(&mut state, &limits(), (300, 600)));
        assert_eq!(state.scale, 0.5);
    }

    #[test]
    fn fit_ignores_empty_surface() {
        let mut state = ViewState::new(0, 300);
        state.scale_dirty = false;
        assert!(!fit_to_surface(&mut state, &limits(), (300, 600)));
        assert_eq!(state.scale, 1.0);
        assert!(!state.scale_dirty);
    }
}
