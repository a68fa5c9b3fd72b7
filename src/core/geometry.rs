//! # Arc Layout
//!
//! Resting positions of the quick-action buttons around the FAB, and how a
//! button looks at a given animation progress.
//!
//! Angles are in degrees, screen convention: 0° points right, -90° points up
//! (y grows downward). The fan spans 144° centered on straight up:
//!
//! ```text
//!   angle(i) = -90° - 72° + 144° · i / (n - 1)
//!   distance(i) = base + step · i
//! ```
//!
//! Distances grow with the index so neighbouring buttons don't overlap as
//! they fan out.

use serde::Serialize;

pub const ARC_SPAN_DEGREES: f32 = 144.0;
pub const DEFAULT_BASE_DISTANCE: f32 = 120.0;
pub const DEFAULT_DISTANCE_STEP: f32 = 20.0;

/// Scale of a button at progress 0.
pub const COLLAPSED_SCALE: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLayout {
    pub base_distance: f32,
    pub distance_step: f32,
}

impl Default for ArcLayout {
    fn default() -> Self {
        Self {
            base_distance: DEFAULT_BASE_DISTANCE,
            distance_step: DEFAULT_DISTANCE_STEP,
        }
    }
}

/// What the view needs to draw one action button.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ButtonFrame {
    pub opacity: f32,
    pub scale: f32,
    /// Offset from the FAB center, in layout points.
    pub dx: f32,
    pub dy: f32,
}

impl ButtonFrame {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

impl ArcLayout {
    /// Resting angle of button `index` out of `count`.
    pub fn angle_degrees(&self, index: usize, count: usize) -> f32 {
        let start = -90.0 - ARC_SPAN_DEGREES / 2.0;
        if count < 2 {
            return -90.0;
        }
        start + ARC_SPAN_DEGREES * index as f32 / (count - 1) as f32
    }

    pub fn distance(&self, index: usize) -> f32 {
        self.base_distance + self.distance_step * index as f32
    }

    /// Fully-open offset of button `index` from the FAB center.
    pub fn resting_offset(&self, index: usize, count: usize) -> (f32, f32) {
        let angle = self.angle_degrees(index, count).to_radians();
        let distance = self.distance(index);
        (distance * angle.cos(), distance * angle.sin())
    }

    /// Interpolated frame at `progress` (0 = tucked into the FAB, 1 = resting).
    ///
    /// Opacity is clamped to `0..=1`; scale and offset follow the progress
    /// past 1.0 so an overshooting ease reads as a pop.
    pub fn frame(&self, index: usize, count: usize, progress: f32) -> ButtonFrame {
        let (x, y) = self.resting_offset(index, count);
        ButtonFrame {
            opacity: progress.clamp(0.0, 1.0),
            scale: COLLAPSED_SCALE + (1.0 - COLLAPSED_SCALE) * progress,
            dx: x * progress,
            dy: y * progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_four_button_angles() {
        let layout = ArcLayout::default();
        let expected = [-162.0, -114.0, -66.0, -18.0];
        for (i, want) in expected.into_iter().enumerate() {
            let got = layout.angle_degrees(i, 4);
            assert!(approx(got, want), "button {i}: {got} != {want}");
            assert!(approx(got, -90.0 - 72.0 + 144.0 * i as f32 / 3.0));
        }
    }

    #[test]
    fn test_distances_grow_by_twenty() {
        let layout = ArcLayout::default();
        let distances: Vec<f32> = (0..4).map(|i| layout.distance(i)).collect();
        assert_eq!(distances, vec![120.0, 140.0, 160.0, 180.0]);
    }

    #[test]
    fn test_fan_opens_upward() {
        let layout = ArcLayout::default();
        for i in 0..4 {
            let (_, dy) = layout.resting_offset(i, 4);
            assert!(dy < 0.0, "button {i} should sit above the FAB");
        }
        let (left, _) = layout.resting_offset(0, 4);
        let (right, _) = layout.resting_offset(3, 4);
        assert!(left < 0.0 && right > 0.0);
    }

    #[test]
    fn test_single_button_points_straight_up() {
        let layout = ArcLayout::default();
        assert_eq!(layout.angle_degrees(0, 1), -90.0);
        let (dx, dy) = layout.resting_offset(0, 1);
        assert!(approx(dx, 0.0));
        assert!(approx(dy, -120.0));
    }

    #[test]
    fn test_frame_at_zero_is_hidden_at_origin() {
        let frame = ArcLayout::default().frame(2, 4, 0.0);
        assert_eq!(frame.opacity, 0.0);
        assert_eq!(frame.scale, 0.5);
        assert!(approx(frame.dx, 0.0) && approx(frame.dy, 0.0));
        assert!(!frame.is_visible());
    }

    #[test]
    fn test_frame_at_one_is_resting() {
        let layout = ArcLayout::default();
        let frame = layout.frame(1, 4, 1.0);
        let (x, y) = layout.resting_offset(1, 4);
        assert_eq!(frame.opacity, 1.0);
        assert_eq!(frame.scale, 1.0);
        assert!(approx(frame.dx, x) && approx(frame.dy, y));
    }

    #[test]
    fn test_overshoot_clamps_opacity_only() {
        let frame = ArcLayout::default().frame(0, 4, 1.1);
        assert_eq!(frame.opacity, 1.0);
        assert!(frame.scale > 1.0);
    }
}
