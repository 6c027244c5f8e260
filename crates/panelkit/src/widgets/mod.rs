//! Leaf widgets and the trait they implement.
//!
//! A widget is the paint/update behaviour of a leaf element. The element owns
//! geometry (bounds, margin, border, padding); the widget only sees the screen
//! space content rectangle it is asked to paint into.
//!
//! # Example
//!
//! ```
//! use std::any::Any;
//! use panelkit::{Color, Rect, Surface, Widget};
//!
//! struct Swatch(Color);
//!
//! impl Widget for Swatch {
//!     fn paint(&self, surface: &mut dyn Surface, content: Rect) {
//!         surface.fill_rectangle(content, self.0);
//!     }
//!
//!     fn as_any(&self) -> &dyn Any {
//!         self
//!     }
//!
//!     fn as_any_mut(&mut self) -> &mut dyn Any {
//!         self
//!     }
//! }
//! ```

mod label;
mod list_box;
mod picture_box;

pub use label::*;
pub use list_box::*;
pub use picture_box::*;

use std::any::Any;

use crate::primitives::Rect;
use crate::surface::Surface;

/// Behaviour of a leaf element
pub trait Widget: Any {
    /// Advance per-frame state
    fn update(&mut self, _dt: f32) {}

    /// Paint into `content`, the element's content area in screen space
    ///
    /// Only called when `content` is non-empty; the surface is already clipped to it.
    fn paint(&self, surface: &mut dyn Surface, content: Rect);

    /// The owning element's bounds changed from `old` to `new`
    fn bounds_changed(&mut self, _old: Rect, _new: Rect) {}

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
