//! Horizontal scroll offset following the ball

use serde::{Deserialize, Serialize};

use crate::consts::SCREEN_WIDTH;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// World x shown at the left edge of the screen
    pub x: f32,
}

impl Camera {
    /// Centre on `ball_x`, clamped so the view never leaves the map.
    /// Maps narrower than the screen pin the camera at 0.
    pub fn follow(&mut self, ball_x: f32, map_width_px: f32) {
        let max_x = (map_width_px - SCREEN_WIDTH).max(0.0);
        self.x = (ball_x - SCREEN_WIDTH / 2.0).clamp(0.0, max_x);
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centres_on_ball() {
        let mut camera = Camera::default();
        camera.follow(1500.0, 5000.0);
        assert_eq!(camera.x, 1000.0);
    }

    #[test]
    fn test_clamps_at_left_edge() {
        let mut camera = Camera::default();
        camera.follow(100.0, 5000.0);
        assert_eq!(camera.x, 0.0);
    }

    #[test]
    fn test_clamps_at_right_edge() {
        let mut camera = Camera::default();
        camera.follow(4900.0, 5000.0);
        assert_eq!(camera.x, 4000.0);
    }

    #[test]
    fn test_narrow_map_stays_at_zero() {
        let mut camera = Camera::default();
        camera.follow(900.0, 250.0);
        assert_eq!(camera.x, 0.0);
    }
}
