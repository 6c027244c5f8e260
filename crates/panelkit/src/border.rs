//! Border adornments drawn around an element's bounds.
//!
//! A border knows how much room it needs ([`Border::thickness`]); the element
//! subtracts that from its content area. Borders are painted last so padding
//! backgrounds never cover them.

use std::fmt;

use crate::color::Color;
use crate::layout::Padding;
use crate::primitives::Rect;
use crate::surface::Surface;

/// Decoration painted around an element
pub trait Border: fmt::Debug {
    /// Space the border occupies on each edge
    fn thickness(&self) -> Padding;

    /// Advance any animation state
    fn update(&mut self, _dt: f32) {}

    /// Paint the border inside `bounds` (screen space)
    fn draw(&self, surface: &mut dyn Surface, bounds: Rect);
}

/// Uniform single-colour outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidBorder {
    pub color: Color,
    pub thickness: i32,
}

impl SolidBorder {
    pub const fn new(color: Color, thickness: i32) -> Self {
        Self { color, thickness }
    }
}

impl Border for SolidBorder {
    fn thickness(&self) -> Padding {
        Padding::all(self.thickness.max(0))
    }

    fn draw(&self, surface: &mut dyn Surface, bounds: Rect) {
        if bounds.is_empty() || self.thickness <= 0 {
            return;
        }
        surface.draw_rectangle_outline(bounds, self.color, self.thickness, true);
    }
}

/// Bevelled edge: one-pixel rings fading from `light` on the outside to `dark` on the inside
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BevelBorder {
    pub light: Color,
    pub dark: Color,
    pub thickness: i32,
}

impl BevelBorder {
    pub const fn new(light: Color, dark: Color, thickness: i32) -> Self {
        Self {
            light,
            dark,
            thickness,
        }
    }
}

impl Border for BevelBorder {
    fn thickness(&self) -> Padding {
        Padding::all(self.thickness.max(0))
    }

    fn draw(&self, surface: &mut dyn Surface, bounds: Rect) {
        draw_rings(surface, bounds, self.thickness, |t| self.light.lerp(self.dark, t));
    }
}

/// Raised edge: rings go dark, light in the middle, dark again
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaisedBorder {
    pub light: Color,
    pub dark: Color,
    pub thickness: i32,
}

impl RaisedBorder {
    pub const fn new(light: Color, dark: Color, thickness: i32) -> Self {
        Self {
            light,
            dark,
            thickness,
        }
    }
}

impl Border for RaisedBorder {
    fn thickness(&self) -> Padding {
        Padding::all(self.thickness.max(0))
    }

    fn draw(&self, surface: &mut dyn Surface, bounds: Rect) {
        draw_rings(surface, bounds, self.thickness, |t| {
            let peak = 1.0 - (2.0 * t - 1.0).abs();
            self.dark.lerp(self.light, peak)
        });
    }
}

/// Draw `count` concentric one-pixel outlines, shrinking by one pixel per ring
///
/// `color_at` receives the ring position in `[0, 1]` (outermost = 0).
fn draw_rings(
    surface: &mut dyn Surface,
    bounds: Rect,
    count: i32,
    color_at: impl Fn(f32) -> Color,
) {
    let mut ring = bounds;
    for i in 0..count.max(0) {
        if ring.is_empty() {
            break;
        }
        let t = if count > 1 {
            i as f32 / (count - 1) as f32
        } else {
            0.0
        };
        surface.draw_rectangle_outline(ring, color_at(t), 1, true);
        ring = ring.shrink_all(1);
    }
}
