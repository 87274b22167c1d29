//! Fixed orthographic view of the play field
//!
//! The field is always 800x480 logical units regardless of surface size.
//! The view hands the renderer a projection matrix and maps pointer
//! positions (pixels, y-down) back into field coordinates (y-up).

use glam::{Mat4, Vec2};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Orthographic view of the field
#[derive(Debug, Clone, Copy)]
pub struct View {
    /// Field extent in logical units
    field: Vec2,
    /// Output surface extent in pixels
    surface: Vec2,
}

impl Default for View {
    fn default() -> Self {
        Self::new(FIELD_WIDTH, FIELD_HEIGHT)
    }
}

impl View {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            field: Vec2::new(field_width, field_height),
            surface: Vec2::new(field_width, field_height),
        }
    }

    /// Update the surface size (pixels). Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.surface = Vec2::new(width as f32, height as f32);
        }
    }

    /// Projection matrix mapping field coordinates to clip space,
    /// bottom-left origin
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.field.x, 0.0, self.field.y, -1.0, 1.0)
    }

    /// Map a surface position (pixels, y-down) to field coordinates (y-up)
    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x / self.surface.x * self.field.x,
            (1.0 - screen.y / self.surface.y) * self.field.y,
        )
    }
}
