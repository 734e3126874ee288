/// An RGBA color with floating-point components (0.0–255.0 range).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255.0, 255.0, 255.0);
    /// Fully transparent black. A container with this background draws nothing.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 255.0 }
    }
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Allows using hex values to build colors
    /// ```
    /// use ply_overlay::color::Color;
    /// assert_eq!(Color::rgb(255.0, 255.0, 255.0), Color::u_rgb(0xFF, 0xFF, 0xFF));
    /// ```
    pub const fn u_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32, g as f32, b as f32)
    }
    /// Allows using hex values to build colors
    /// ```
    /// use ply_overlay::color::Color;
    /// assert_eq!(Color::rgba(0.0, 0.0, 0.0, 128.0), Color::u_rgba(0, 0, 0, 0x80));
    /// ```
    pub const fn u_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(r as f32, g as f32, b as f32, a as f32)
    }

    /// Whether anything would be drawn with this color.
    pub fn is_visible(&self) -> bool {
        self.a != 0.0
    }

    /// Components scaled to 0.0–1.0, as vertex tints expect.
    pub fn to_normalized(&self) -> [f32; 4] {
        [self.r / 255.0, self.g / 255.0, self.b / 255.0, self.a / 255.0]
    }
}

impl From<(f32, f32, f32)> for Color {
    fn from(value: (f32, f32, f32)) -> Self {
        Self::rgb(value.0, value.1, value.2)
    }
}
impl From<(f32, f32, f32, f32)> for Color {
    fn from(value: (f32, f32, f32, f32)) -> Self {
        Self::rgba(value.0, value.1, value.2, value.3)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::u_rgb(value.0, value.1, value.2)
    }
}
impl From<(u8, u8, u8, u8)> for Color {
    fn from(value: (u8, u8, u8, u8)) -> Self {
        Self::u_rgba(value.0, value.1, value.2, value.3)
    }
}

/// Packed `0xAARRGGBB`, the layout chat and HUD colors are usually written in.
/// A zero alpha byte is read as opaque so `0xRRGGBB` literals work too.
impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        let a = (hex >> 24) & 0xFF;
        let r = ((hex >> 16) & 0xFF) as f32;
        let g = ((hex >> 8) & 0xFF) as f32;
        let b = (hex & 0xFF) as f32;
        let a = if a == 0 { 255.0 } else { a as f32 };
        Color::rgba(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_without_alpha_is_opaque() {
        assert_eq!(Color::from(0xFF5555u32), Color::rgb(255.0, 85.0, 85.0));
        assert_eq!(Color::from(0x80000000u32), Color::rgba(0.0, 0.0, 0.0, 128.0));
    }

    #[test]
    fn visibility_tracks_alpha() {
        assert!(!Color::TRANSPARENT.is_visible());
        assert!(Color::rgba(0.0, 0.0, 0.0, 1.0).is_visible());
        assert_eq!(Color::WHITE.to_normalized(), [1.0, 1.0, 1.0, 1.0]);
    }
}
