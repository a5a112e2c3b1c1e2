//! Axis-aligned collision between the player and obstacles
//!
//! Boxes use the same anchor as the sprites: `x` is the horizontal center,
//! `y` is the bottom edge and the height extends upward (screen y grows down).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box anchored at its bottom center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub anchor: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Aabb {
    pub fn new(anchor: Vec2, width: f32, height: f32) -> Self {
        Self {
            anchor,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.anchor.x - self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.anchor.x + self.width / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.anchor.y - self.height
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.anchor.y
    }

    /// Strict overlap test; boxes that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        intersects(self, other)
    }
}

/// Check whether two boxes overlap
pub fn intersects(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}
