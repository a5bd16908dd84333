use std::fmt;

use tracing::{debug, info, trace};

use crate::compositor::{compose, CompositedFrame};
use crate::config::{ResampleQuality, ViewerConfig};
use crate::error::{Result, ViewerError};
use crate::input::{DragState, WheelDirection};
use crate::resample::Resampler;
use crate::source::SourceImage;
use crate::surface::Surface;
use crate::view::clamp::{
    anchored_origin, border_contact, clamp_origin, nudge_delta, visible_window,
};
use crate::view::scale::{fit_to_surface, reset_to_identity, zoom_in, zoom_out};
use crate::view::{resampled_size, CropRect, Point, ViewState, ZoomLimits};

/// Pan/zoom image viewer bound to a host drawing surface.
///
/// All methods run synchronously on the caller's thread. Input handlers never
/// fail: with no image loaded they do nothing, and a frame whose crop would be
/// empty is simply not drawn.
pub struct Viewer<S: Surface> {
    surface: S,
    image: Option<SourceImage>,
    config: ViewerConfig,
    limits: ZoomLimits,
    state: ViewState,
    resampler: Resampler,
    drag: DragState,
    frame: Option<CompositedFrame>,
}

impl<S: Surface> Viewer<S> {
    /// Bind a viewer to `surface`. Fails if the configured zoom bounds, zoom
    /// step or background colour are invalid.
    pub fn new(surface: S, image: Option<SourceImage>, config: ViewerConfig) -> Result<Self> {
        config.validate()?;
        let limits = ZoomLimits::from_config(&config)?;
        let (width, height) = surface.size();
        let mut viewer = Self {
            surface,
            image,
            limits,
            state: ViewState::new(width, height),
            resampler: Resampler::new(config.quality),
            config,
            drag: DragState::Idle,
            frame: None,
        };
        viewer.state.scale = viewer.limits.clamp(1.0);
        viewer.render();
        Ok(viewer)
    }

    /// Load a new image, or clear the viewer with `None`.
    ///
    /// A new image drops every derived bitmap and is fitted to the surface.
    pub fn set_image(&mut self, image: Option<SourceImage>) {
        self.resampler.invalidate();
        self.drag = DragState::Idle;
        self.state.scale_dirty = true;
        self.image = image;

        match &self.image {
            Some(img) => {
                info!(width = img.width(), height = img.height(), "Image set");
                self.reset_to_fit();
            }
            None => {
                info!("Image cleared");
                self.remove_frame();
            }
        }
    }

    /// Fit the image to the surface and scroll back to the unpanned origin.
    pub fn reset_to_fit(&mut self) {
        let Some(image) = &self.image else {
            return;
        };
        fit_to_surface(&mut self.state, &self.limits, image.size());
        let (dx, dy) = (-self.state.pan_x, -self.state.pan_y);
        self.scroll(dx, dy);
        info!(scale = self.state.scale, "Reset preview");
        self.render();
    }

    /// Return to 1:1 scale, keeping the current scroll origin.
    pub fn reset_zoom(&mut self) {
        if self.image.is_none() {
            return;
        }
        reset_to_identity(&mut self.state, &self.limits);
        self.render();
    }

    /// One wheel notch. `pointer` is the cursor position in surface pixels,
    /// used only when `zoom_to_cursor` is enabled.
    pub fn on_wheel(&mut self, direction: WheelDirection, pointer: Option<Point>) {
        let Some(image) = &self.image else {
            return;
        };
        let before = resampled_size(image.size(), self.state.scale);
        let changed = match direction {
            WheelDirection::In => zoom_in(&mut self.state, &self.limits),
            WheelDirection::Out => zoom_out(&mut self.state, &self.limits),
        };
        let after = resampled_size(image.size(), self.state.scale);
        trace!(?direction, scale = self.state.scale, changed, "Wheel");

        let (dx, dy) = match pointer {
            Some(pointer) if self.config.zoom_to_cursor => {
                let anchored = anchored_origin(&self.state, pointer, before, after);
                let target = clamp_origin(&self.state, anchored, after);
                (target.x - self.state.pan_x, target.y - self.state.pan_y)
            }
            _ => nudge_delta(&self.state),
        };
        self.scroll(dx, dy);
        self.render();
    }

    pub fn on_drag_start(&mut self, pos: Point) {
        if self.image.is_none() {
            return;
        }
        self.drag = DragState::Dragging {
            anchor: pos,
            origin: self.state.origin(),
        };
    }

    /// Scroll so the anchored point follows the pointer. Recomposites when
    /// the origin nears a margin boundary, or when the frame on screen is a
    /// partial crop that may no longer cover the visible bitmap.
    pub fn on_drag_move(&mut self, pos: Point) {
        let (Some(image), Some(target)) = (&self.image, self.drag.drag_target(pos)) else {
            return;
        };
        let resampled = resampled_size(image.size(), self.state.scale);
        let next = clamp_origin(&self.state, target, resampled);
        self.scroll(next.x - self.state.pan_x, next.y - self.state.pan_y);

        let full = CropRect {
            left: 0,
            top: 0,
            right: resampled.0,
            bottom: resampled.1,
        };
        let partial = self.crop_window() != Some(full);
        if partial || border_contact(&self.state, resampled) {
            self.render();
        }
    }

    pub fn on_drag_release(&mut self) {
        self.drag = DragState::Idle;
    }

    /// The host surface changed size. Margins depend on it, so always redraw.
    pub fn on_surface_resize(&mut self, width: u32, height: u32) {
        self.state.surface_width = width;
        self.state.surface_height = height;
        debug!(width, height, "Surface resized");
        self.render();
    }

    /// Change the resize filter and redraw with it.
    pub fn set_resample_quality(&mut self, quality: ResampleQuality) {
        self.resampler.set_quality(quality, &mut self.state);
        self.config.quality = quality;
        self.render();
    }

    /// Recomposite: drop the current frame, resample if stale, crop to the
    /// visible window and hand the result to the surface.
    pub fn render(&mut self) {
        self.remove_frame();
        let Some(image) = &self.image else {
            return;
        };

        self.resampler.ensure_current(image, &mut self.state);
        let Some(bitmap) = self.resampler.bitmap() else {
            return;
        };

        match visible_window(&self.state, bitmap.dimensions()) {
            Ok(window) => {
                let frame = compose(bitmap, &window);
                self.surface.draw(&frame);
                self.frame = Some(frame);
            }
            Err(ViewerError::DegenerateCropRegion) => {
                trace!(
                    pan_x = self.state.pan_x,
                    pan_y = self.state.pan_y,
                    "Nothing visible, frame skipped"
                );
            }
            Err(e) => debug!(%e, "Frame skipped"),
        }
    }

    fn remove_frame(&mut self) {
        if self.frame.take().is_some() {
            self.surface.clear();
        }
    }

    fn scroll(&mut self, dx: i32, dy: i32) {
        if dx == 0 && dy == 0 {
            return;
        }
        self.state.pan_x += dx;
        self.state.pan_y += dy;
        self.surface.scroll_by(dx, dy);
    }

    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Size of the image at the current scale, if one is loaded.
    pub fn resampled_size(&self) -> Option<(u32, u32)> {
        self.image
            .as_ref()
            .map(|img| resampled_size(img.size(), self.state.scale))
    }

    pub fn image_loaded(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    pub fn source_size(&self) -> Option<(u32, u32)> {
        self.image.as_ref().map(SourceImage::size)
    }

    pub fn view_state(&self) -> &ViewState {
        &self.state
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn frame(&self) -> Option<&CompositedFrame> {
        self.frame.as_ref()
    }

    /// The frame on screen, or why there is none.
    pub fn current_frame(&self) -> Result<&CompositedFrame> {
        match (&self.frame, &self.image) {
            (Some(frame), _) => Ok(frame),
            (None, None) => Err(ViewerError::NoImageLoaded),
            (None, Some(_)) => Err(ViewerError::DegenerateCropRegion),
        }
    }

    /// Crop rectangle of the frame currently on screen.
    pub fn crop_window(&self) -> Option<CropRect> {
        self.frame.as_ref().map(CompositedFrame::crop)
    }

    pub fn quality(&self) -> ResampleQuality {
        self.resampler.quality()
    }

    /// Number of times the source has been resampled.
    pub fn resample_count(&self) -> u64 {
        self.resampler.generation()
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Snapshot for the host's status label.
    pub fn status(&self) -> ViewerStatus {
        ViewerStatus {
            scale: self.state.scale,
            source: self.source_size(),
            resampled: self.resampled_size(),
            quality: self.quality(),
        }
    }
}

/// Values shown next to the viewer by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerStatus {
    pub scale: f64,
    pub source: Option<(u32, u32)>,
    pub resampled: Option<(u32, u32)>,
    pub quality: ResampleQuality,
}

impl fmt::Display for ViewerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scale:         x{:.2}", self.scale)?;
        match (self.source, self.resampled) {
            (Some((w, h)), Some((rw, rh))) => {
                writeln!(f, "Width:         {w}")?;
                writeln!(f, "Height:        {h}")?;
                writeln!(f, "Scale width:   {rw}")?;
                writeln!(f, "Scale height:  {rh}")?;
            }
            _ => writeln!(f, "No image loaded")?,
        }
        write!(f, "Filter:        {}", self.quality)
    }
}
