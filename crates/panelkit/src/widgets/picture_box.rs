use std::any::Any;

use glam::IVec2;

use crate::color::Color;
use crate::layout::{align_inside, ContentAlignment};
use crate::primitives::Rect;
use crate::surface::{Surface, TextureId};
use crate::widgets::Widget;

/// How a picture box fits its texture into the content area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SizeMode {
    /// Native size at the top-left corner, clipped
    #[default]
    Normal,
    /// Native size, centred
    Center,
    /// Fill the content area, ignoring aspect ratio
    Stretch,
    /// Largest size that fits while keeping aspect ratio, centred
    Zoom,
}

/// Displays a backend texture
#[derive(Debug, Clone, PartialEq)]
pub struct PictureBox {
    texture: Option<TextureId>,
    texture_size: IVec2,
    size_mode: SizeMode,
    tint: Color,
}

impl PictureBox {
    pub fn new(texture: TextureId, texture_size: IVec2) -> Self {
        Self {
            texture: Some(texture),
            texture_size,
            size_mode: SizeMode::Normal,
            tint: Color::rgb(1.0, 1.0, 1.0),
        }
    }

    pub fn empty() -> Self {
        Self {
            texture: None,
            texture_size: IVec2::ZERO,
            size_mode: SizeMode::Normal,
            tint: Color::rgb(1.0, 1.0, 1.0),
        }
    }

    pub fn with_size_mode(mut self, size_mode: SizeMode) -> Self {
        self.size_mode = size_mode;
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn texture(&self) -> Option<TextureId> {
        self.texture
    }

    pub fn set_texture(&mut self, texture: Option<TextureId>, texture_size: IVec2) {
        self.texture = texture;
        self.texture_size = texture_size;
    }

    pub fn size_mode(&self) -> SizeMode {
        self.size_mode
    }

    pub fn set_size_mode(&mut self, size_mode: SizeMode) {
        self.size_mode = size_mode;
    }

    /// Where the texture lands for a given content area
    pub fn image_rect(&self, content: Rect) -> Rect {
        let size = self.texture_size;
        match self.size_mode {
            SizeMode::Normal => Rect::from_location_size(content.location(), size),
            SizeMode::Center => align_inside(size, content, ContentAlignment::MiddleCenter),
            SizeMode::Stretch => content,
            SizeMode::Zoom => {
                if size.x <= 0 || size.y <= 0 {
                    return Rect::EMPTY;
                }
                let scale = (content.width as f32 / size.x as f32)
                    .min(content.height as f32 / size.y as f32);
                let fitted = IVec2::new(
                    (size.x as f32 * scale).floor() as i32,
                    (size.y as f32 * scale).floor() as i32,
                );
                align_inside(fitted, content, ContentAlignment::MiddleCenter)
            }
        }
    }
}

impl Widget for PictureBox {
    fn paint(&self, surface: &mut dyn Surface, content: Rect) {
        let Some(texture) = self.texture else {
            return;
        };
        let dest = self.image_rect(content);
        if dest.is_empty() {
            return;
        }
        surface.draw_texture(texture, dest, self.tint);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{DrawCommand, DrawList};

    fn picture(mode: SizeMode) -> PictureBox {
        PictureBox::new(TextureId(3), IVec2::new(40, 20)).with_size_mode(mode)
    }

    #[test]
    fn test_size_modes() {
        let content = Rect::new(10, 10, 100, 100);
        assert_eq!(
            picture(SizeMode::Normal).image_rect(content),
            Rect::new(10, 10, 40, 20)
        );
        assert_eq!(
            picture(SizeMode::Center).image_rect(content),
            Rect::new(40, 50, 40, 20)
        );
        assert_eq!(picture(SizeMode::Stretch).image_rect(content), content);
        assert_eq!(
            picture(SizeMode::Zoom).image_rect(content),
            Rect::new(10, 35, 100, 50)
        );
    }

    #[test]
    fn test_paints_texture() {
        let mut list = DrawList::new(IVec2::new(200, 200));
        picture(SizeMode::Stretch).paint(&mut list, Rect::new(0, 0, 50, 50));
        assert!(matches!(
            list.commands()[0].command,
            DrawCommand::Texture {
                texture: TextureId(3),
                dest: Rect {
                    width: 50,
                    height: 50,
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn test_empty_picture_draws_nothing() {
        let mut list = DrawList::new(IVec2::new(200, 200));
        PictureBox::empty().paint(&mut list, Rect::new(0, 0, 50, 50));
        assert!(list.is_empty());
    }
}
