//! Platform-neutral pointer input.

use crate::view::Point;

/// One notch of the scroll wheel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDirection {
    In,
    Out,
}

impl WheelDirection {
    /// From a signed scroll delta (Windows `WheelEvent.delta`, egui scroll
    /// delta). Non-negative deltas zoom in; `None` for NaN.
    pub fn from_delta(delta: f32) -> Option<Self> {
        if delta.is_nan() {
            None
        } else if delta >= 0.0 {
            Some(Self::In)
        } else {
            Some(Self::Out)
        }
    }

    /// From an X11 pointer button number (4 = up, 5 = down).
    pub fn from_button(button: u8) -> Option<Self> {
        match button {
            4 => Some(Self::In),
            5 => Some(Self::Out),
            _ => None,
        }
    }
}

/// Pointer interaction state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Pointer position at drag start.
        anchor: Point,
        /// Scroll origin at drag start.
        origin: Point,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Scroll origin that keeps the anchored image point under `pos`.
    pub fn drag_target(&self, pos: Point) -> Option<Point> {
        match *self {
            Self::Idle => None,
            Self::Dragging { anchor, origin } => Some(Point::new(
                origin.x - (pos.x - anchor.x),
                origin.y - (pos.y - anchor.y),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_normalisation() {
        assert_eq!(WheelDirection::from_delta(120.0), Some(WheelDirection::In));
        assert_eq!(WheelDirection::from_delta(0.0), Some(WheelDirection::In));
        assert_eq!(WheelDirection::from_delta(-3.5), Some(WheelDirection::Out));
        assert_eq!(WheelDirection::from_delta(f32::NAN), None);
        assert_eq!(WheelDirection::from_button(4), Some(WheelDirection::In));
        assert_eq!(WheelDirection::from_button(5), Some(WheelDirection::Out));
        assert_eq!(WheelDirection::from_button(1), None);
    }

    #[test]
    fn drag_target_follows_pointer() {
        let drag = DragState::Dragging {
            anchor: Point::new(100, 100),
            origin: Point::new(10, -5),
        };
        assert_eq!(drag.drag_target(Point::new(130, 90)), Some(Point::new(-20, 5)));
        assert_eq!(DragState::Idle.drag_target(Point::new(1, 1)), None);
    }
}
