//! # panelkit
//!
//! Retained-mode panel layout for games.
//!
//! This crate provides the element tree, rectangle geometry and layout
//! containers with no dependency on any specific graphics API. Drawing goes
//! through the [`Surface`] trait; [`DrawList`] is a recording implementation.
//!
//! ## Core Types
//!
//! - [`Gui`] - Owns the element tree and drives layout, hit testing and drawing
//! - [`Element`] - A node: bounds, margin, border, padding and a body
//! - [`Widget`] - Trait for leaf content ([`Label`], [`PictureBox`], [`ListBox`])
//!
//! ## Geometry
//!
//! - [`Rect`] - Integer rectangle with slicing and inflate/shrink helpers
//! - [`Padding`] - Per-edge insets used for margin and padding
//! - [`ContentAlignment`] - Nine-way placement of content inside a rectangle
//!
//! ## Containers
//!
//! - Plain panels keep child bounds as assigned
//! - Anchored panels move children by [`AnchorStyle`]
//! - Table panels resolve [`TrackStyle`] columns and rows into cells
//!
//! ## Rendering
//!
//! - [`Surface`] - Abstract drawing target with a scissor clip
//! - [`ClipGuard`] - Scoped clip that restores on drop
//! - [`Border`] - Adornments drawn around an element
//! - [`DebugOptions`] - Layout visualization overlays

mod border;
mod color;
mod debug;
mod element;
mod error;
mod gui;
mod layout;
mod output;
mod primitives;
mod surface;
pub mod table;
pub mod widgets;

// Core types
pub use element::*;
pub use error::*;
pub use gui::*;
pub use widgets::*;

// Geometry & layout
pub use layout::*;
pub use primitives::*;
pub use table::{CellPosition, TableLayout, TrackStyle};

// Rendering
pub use border::*;
pub use color::*;
pub use debug::DebugOptions;
pub use output::*;
pub use surface::*;
