//! Boundary-crossing correction: the silent jump that makes the loop seam
//! invisible.
//!
//! The clone ranges are pixel-identical copies of the adjacent real
//! segment, so shifting the offset by exactly one real-segment width lands
//! the viewport on indistinguishable content. Correction therefore never
//! animates; it happens between two painted frames.

use crate::geometry::RailGeometry;

/// Offset the rail should jump to, or `None` when `scroll_x` is already
/// inside the real window.
pub fn correction_target(scroll_x: f32, geo: &RailGeometry) -> Option<f32> {
    if geo.real_segment_width <= 0.0 {
        return None;
    }

    if scroll_x < geo.left_boundary {
        Some(scroll_x + geo.real_segment_width)
    } else if scroll_x >= geo.right_boundary {
        Some(scroll_x - geo.real_segment_width)
    } else {
        None
    }
}
