mod spring;

pub use spring::{Spring, SpringConfig, DEFAULT_BOUNCINESS, MAX_SPEED};

use crate::percentage::MAX_PERCENTAGE;

/// Tick period of the animation timer, roughly one frame at 60 Hz.
pub const FRAME_INTERVAL_MS: u32 = 16;

pub const MAX_ROTATION_DEGREES: f64 = 180.0;

/// Maps an animated percentage onto the sweep of the filled half-disc.
///
/// Linear over 0..=100 and extended past both ends, so spring overshoot shows
/// up as a slight over-rotation.
pub fn rotation_degrees(value: f64) -> f64 {
    value / MAX_PERCENTAGE * MAX_ROTATION_DEGREES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_is_linear_over_the_half_turn() {
        assert_eq!(rotation_degrees(0.0), 0.0);
        assert_eq!(rotation_degrees(50.0), 90.0);
        assert_eq!(rotation_degrees(100.0), 180.0);
        assert_eq!(rotation_degrees(75.0), 135.0);
        assert_eq!(rotation_degrees(30.0), 54.0);
    }

    #[test]
    fn rotation_extends_past_the_range() {
        assert!((rotation_degrees(110.0) - 198.0).abs() < 1e-9);
        assert_eq!(rotation_degrees(-10.0), -18.0);
    }
}
