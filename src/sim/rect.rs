//! Axis-aligned rectangle geometry
//!
//! Everything in the field is a rectangle: the catcher, every raindrop.
//! Positions are bottom-left anchored, y-up, in field units.

use glam::Vec2;

/// An axis-aligned rectangle, anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Bottom-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// x of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// y of the top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Center of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// AABB overlap test: true iff both the x-ranges and the y-ranges
    /// intersect with nonzero measure. Touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.top()
            && self.top() > other.pos.y
    }
}
