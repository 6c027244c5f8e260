use glam::IVec2;

use crate::color::Color;
use crate::primitives::{Point, Rect};
use crate::surface::{FontId, Surface, TextTransform, TextureId};

/// A single recorded drawing operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Fill {
        rect: Rect,
        color: Color,
    },
    Outline {
        rect: Rect,
        color: Color,
        thickness: i32,
        inset: bool,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        thickness: i32,
    },
    Text {
        font: FontId,
        text: String,
        position: Point,
        color: Color,
        transform: TextTransform,
    },
    Texture {
        texture: TextureId,
        dest: Rect,
        tint: Color,
    },
}

/// A draw command with the clip rect that was active when it was issued
#[derive(Clone, Debug, PartialEq)]
pub struct ClippedCommand {
    pub clip_rect: Rect,
    pub command: DrawCommand,
}

/// A [`Surface`] that records commands instead of rasterizing them
///
/// Text is measured with fixed per-glyph metrics, which makes layout of labels
/// and list boxes deterministic. Backends can replay the list; tests assert on it.
#[derive(Clone, Debug)]
pub struct DrawList {
    commands: Vec<ClippedCommand>,
    screen: Rect,
    clip: Rect,
    glyph_size: IVec2,
    usable: bool,
}

impl DrawList {
    /// Create a list covering a `size` screen with 8x16 glyph metrics
    pub fn new(size: IVec2) -> Self {
        let screen = Rect::from_location_size(IVec2::ZERO, size);
        Self {
            commands: Vec::new(),
            screen,
            clip: screen,
            glyph_size: IVec2::new(8, 16),
            usable: true,
        }
    }

    /// Use `glyph_size` (width per character, line height) for text measurement
    pub fn with_glyph_size(mut self, glyph_size: IVec2) -> Self {
        self.glyph_size = glyph_size;
        self
    }

    /// Simulate a lost or disposed device
    pub fn set_usable(&mut self, usable: bool) {
        self.usable = usable;
    }

    pub fn commands(&self) -> &[ClippedCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop recorded commands and reset the clip to the full screen
    pub fn clear(&mut self) {
        self.commands.clear();
        self.clip = self.screen;
    }

    /// Every filled rectangle, in draw order
    pub fn fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.commands.iter().filter_map(|c| match c.command {
            DrawCommand::Fill { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    /// Every drawn string with its position, in draw order
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.commands.iter().filter_map(|c| match &c.command {
            DrawCommand::Text { text, position, .. } => Some((text.as_str(), *position)),
            _ => None,
        })
    }

    fn push(&mut self, command: DrawCommand) {
        if self.clip.is_empty() {
            return;
        }
        self.commands.push(ClippedCommand {
            clip_rect: self.clip,
            command,
        });
    }
}

impl Surface for DrawList {
    fn is_usable(&self) -> bool {
        self.usable
    }

    fn fill_rectangle(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.push(DrawCommand::Fill { rect, color });
    }

    fn draw_rectangle_outline(&mut self, rect: Rect, color: Color, thickness: i32, inset: bool) {
        if rect.is_empty() || thickness <= 0 {
            return;
        }
        self.push(DrawCommand::Outline {
            rect,
            color,
            thickness,
            inset,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, thickness: i32) {
        if thickness <= 0 {
            return;
        }
        self.push(DrawCommand::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    fn measure_text(&self, _font: FontId, text: &str) -> IVec2 {
        if text.is_empty() {
            return IVec2::ZERO;
        }
        let lines = text.lines().count().max(1) as i32;
        let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
        IVec2::new(widest * self.glyph_size.x, lines * self.glyph_size.y)
    }

    fn draw_text(
        &mut self,
        font: FontId,
        text: &str,
        position: Point,
        color: Color,
        transform: TextTransform,
    ) {
        self.push(DrawCommand::Text {
            font,
            text: text.to_string(),
            position,
            color,
            transform,
        });
    }

    fn draw_texture(&mut self, texture: TextureId, dest: Rect, tint: Color) {
        if dest.is_empty() {
            return;
        }
        self.push(DrawCommand::Texture {
            texture,
            dest,
            tint,
        });
    }

    fn clip_rect(&self) -> Rect {
        self.clip
    }

    fn set_clip_rect(&mut self, clip: Rect) {
        self.clip = clip;
    }
}
