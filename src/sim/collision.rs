//! Axis-aligned collision detection
//!
//! The player's hit box is smaller than its visual sprite (the art has
//! transparent margins), so overlaps that merely look close on screen do
//! not register as hits.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle. Origin is the top-left corner; y grows
/// downward, matching playfield coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Shrink the rectangle by the given margins on each side
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        Self {
            pos: self.pos + Vec2::new(dx, dy),
            size: self.size - 2.0 * Vec2::new(dx, dy),
        }
    }
}

/// Strict AABB overlap test
///
/// Rectangles must overlap on both axes; touching at an edge (zero-width
/// overlap) does not count as a collision.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}
