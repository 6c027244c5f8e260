use std::any::Any;
use std::cell::Cell;

use glam::IVec2;

use crate::color::Color;
use crate::layout::{align_inside, ContentAlignment};
use crate::primitives::Rect;
use crate::surface::{FontId, Surface, TextTransform};
use crate::widgets::Widget;

/// A single run of text aligned inside the content area
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    font: FontId,
    color: Color,
    alignment: ContentAlignment,
    /// Measured text size, cleared whenever text or font change
    measured: Cell<Option<IVec2>>,
}

impl Label {
    pub fn new(text: impl Into<String>, font: FontId) -> Self {
        Self {
            text: text.into(),
            font,
            color: Color::rgb(1.0, 1.0, 1.0),
            alignment: ContentAlignment::TopLeft,
            measured: Cell::new(None),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: ContentAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.text {
            self.text = text;
            self.measured.set(None);
        }
    }

    pub fn font(&self) -> FontId {
        self.font
    }

    pub fn set_font(&mut self, font: FontId) {
        if font != self.font {
            self.font = font;
            self.measured.set(None);
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn alignment(&self) -> ContentAlignment {
        self.alignment
    }

    pub fn set_alignment(&mut self, alignment: ContentAlignment) {
        self.alignment = alignment;
    }

    /// Text size, measured through `surface` on first use after a change
    pub fn text_size(&self, surface: &dyn Surface) -> IVec2 {
        if let Some(size) = self.measured.get() {
            return size;
        }
        let size = surface.measure_text(self.font, &self.text);
        self.measured.set(Some(size));
        size
    }
}

impl Widget for Label {
    fn paint(&self, surface: &mut dyn Surface, content: Rect) {
        if self.text.is_empty() {
            return;
        }
        let size = self.text_size(surface);
        let placed = align_inside(size, content, self.alignment);
        surface.draw_text(
            self.font,
            &self.text,
            placed.location(),
            self.color,
            TextTransform::IDENTITY,
        );
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
