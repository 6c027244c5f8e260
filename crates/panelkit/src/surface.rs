//! Backend-agnostic drawing surface.
//!
//! The element tree never touches a graphics API directly. Everything it paints
//! goes through [`Surface`], which a backend (sprite batch, software canvas, the
//! [`DrawList`](crate::DrawList) recorder) implements. Fonts and textures are
//! owned by the backend and referenced here by opaque ids.

use std::ops::{Deref, DerefMut};

use glam::{IVec2, Vec2};

use crate::color::Color;
use crate::primitives::{Point, Rect};

/// Backend-defined handle to a loaded font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontId(pub u32);

/// Backend-defined handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

/// Text placement parameters beyond position and colour
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextTransform {
    /// Rotation in radians around `origin`
    pub rotation: f32,
    /// Origin relative to the text's top-left corner
    pub origin: Vec2,
    pub scale: Vec2,
}

impl TextTransform {
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        origin: Vec2::ZERO,
        scale: Vec2::ONE,
    };
}

impl Default for TextTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Drawing operations the element tree needs from a backend
pub trait Surface {
    /// Whether the surface can accept drawing right now (e.g. not disposed, not mid device-reset)
    fn is_usable(&self) -> bool {
        true
    }

    fn fill_rectangle(&mut self, rect: Rect, color: Color);

    /// Outline `rect` with a stroke of `thickness` pixels
    ///
    /// With `inset` the stroke lies entirely inside `rect`, otherwise it straddles the edge.
    fn draw_rectangle_outline(&mut self, rect: Rect, color: Color, thickness: i32, inset: bool);

    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: i32);

    /// Size in pixels that `text` occupies when drawn with `font`
    fn measure_text(&self, font: FontId, text: &str) -> IVec2;

    fn draw_text(
        &mut self,
        font: FontId,
        text: &str,
        position: Point,
        color: Color,
        transform: TextTransform,
    );

    fn draw_texture(&mut self, texture: TextureId, dest: Rect, tint: Color);

    /// Current scissor rectangle in screen space
    fn clip_rect(&self) -> Rect;

    fn set_clip_rect(&mut self, clip: Rect);
}

/// Scoped scissor region
///
/// Replaces the surface clip on creation and restores the previous one when
/// dropped, so nested elements compose even if a paint hook returns early.
pub struct ClipGuard<'a> {
    surface: &'a mut dyn Surface,
    previous: Rect,
}

impl<'a> ClipGuard<'a> {
    /// Clip to `clip` intersected with whatever the caller already clipped to
    pub fn push(surface: &'a mut dyn Surface, clip: Rect) -> Self {
        let previous = surface.clip_rect();
        surface.set_clip_rect(previous.intersection(&clip));
        Self { surface, previous }
    }

    /// The clip rectangle this guard installed
    pub fn clip(&self) -> Rect {
        self.surface.clip_rect()
    }

    /// Narrow the clip further for the rest of this guard's lifetime
    pub fn narrow(&mut self, clip: Rect) {
        let current = self.surface.clip_rect();
        self.surface.set_clip_rect(current.intersection(&clip));
    }

    /// Reset the clip to `clip` intersected with the caller's clip
    pub fn reset(&mut self, clip: Rect) {
        self.surface.set_clip_rect(self.previous.intersection(&clip));
    }
}

impl<'a> Deref for ClipGuard<'a> {
    type Target = dyn Surface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl DerefMut for ClipGuard<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for ClipGuard<'_> {
    fn drop(&mut self) {
        self.surface.set_clip_rect(self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::DrawList;

    #[test]
    fn test_clip_guard_restores_on_drop() {
        let mut list = DrawList::new(IVec2::new(800, 600));
        let screen = list.clip_rect();
        {
            let guard = ClipGuard::push(&mut list, Rect::new(10, 10, 100, 100));
            assert_eq!(guard.clip(), Rect::new(10, 10, 100, 100));
        }
        assert_eq!(list.clip_rect(), screen);
    }

    #[test]
    fn test_nested_clip_guards_intersect() {
        let mut list = DrawList::new(IVec2::new(800, 600));
        let mut outer = ClipGuard::push(&mut list, Rect::new(0, 0, 100, 100));
        {
            let inner = ClipGuard::push(&mut *outer, Rect::new(50, 50, 100, 100));
            assert_eq!(inner.clip(), Rect::new(50, 50, 50, 50));
        }
        assert_eq!(outer.clip(), Rect::new(0, 0, 100, 100));
    }
}
