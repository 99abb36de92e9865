//! Follow camera with world-bound clamping
//!
//! The offset is the translation applied to world coordinates when drawing,
//! so it is non-positive once clamped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub offset: Vec2,
}

impl Camera {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            offset: Vec2::new(x, y),
        }
    }

    /// Center the viewport on `target`
    pub fn follow_target(&mut self, target: Vec2, viewport: Vec2) {
        self.offset = -target + viewport / 2.0;
    }

    /// Keep the viewport inside `[0, world]`
    ///
    /// When the world is smaller than the viewport the far edge wins.
    pub fn constrain(&mut self, world: Vec2, viewport: Vec2) {
        self.offset = self.offset.min(Vec2::ZERO).max(viewport - world);
    }

    /// Convert a screen-space point into world space
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.offset
    }

    /// Convert a world-space point into screen space
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world + self.offset
    }
}
