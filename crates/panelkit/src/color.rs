/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// The sentinel that element backgrounds treat as "paint nothing"
    pub const fn transparent() -> Self {
        Self::rgba(0.0, 0.0, 0.0, 0.0)
    }

    /// Fully transparent colours are skipped by the draw pass
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Convert sRGB color (0-255) to linear space
    /// Uses proper sRGB gamma correction (ITU-R BT.709)
    #[inline]
    pub const fn srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            // Standard sRGB to linear conversion (ITU-R BT.709)
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial approximation of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::rgba(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// with alpha builder method taking u8
    pub fn with_alpha_u8(mut self, alpha: u8) -> Self {
        self.a = alpha as f32 / 255.0;
        self
    }

    /// with alpha builder method taking f32
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linearly interpolate every channel toward `other`
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Scale the RGB channels toward black, keeping alpha
    pub fn darken(self, amount: f32) -> Color {
        let keep = 1.0 - amount.clamp(0.0, 1.0);
        Color::rgba(self.r * keep, self.g * keep, self.b * keep, self.a)
    }

    /// Scale the RGB channels toward white, keeping alpha
    pub fn lighten(self, amount: f32) -> Color {
        let white = Color::rgba(1.0, 1.0, 1.0, self.a);
        self.lerp(white, amount)
    }
}

/// CSS color constants
pub mod css {
    use super::Color;

    pub const AQUA: Color = Color::srgba(0, 255, 255, 255);
    pub const BLACK: Color = Color::srgba(0, 0, 0, 255);
    pub const BLUE: Color = Color::srgba(0, 0, 255, 255);
    pub const FUCHSIA: Color = Color::srgba(255, 0, 255, 255);
    pub const GRAY: Color = Color::srgba(128, 128, 128, 255);
    pub const GREEN: Color = Color::srgba(0, 128, 0, 255);
    pub const LIME: Color = Color::srgba(0, 255, 0, 255);
    pub const MAROON: Color = Color::srgba(128, 0, 0, 255);
    pub const NAVY: Color = Color::srgba(0, 0, 128, 255);
    pub const OLIVE: Color = Color::srgba(128, 128, 0, 255);
    pub const PURPLE: Color = Color::srgba(128, 0, 128, 255);
    pub const RED: Color = Color::srgba(255, 0, 0, 255);
    pub const SILVER: Color = Color::srgba(192, 192, 192, 255);
    pub const TEAL: Color = Color::srgba(0, 128, 128, 255);
    pub const WHITE: Color = Color::srgba(255, 255, 255, 255);
    pub const YELLOW: Color = Color::srgba(255, 255, 0, 255);
}
