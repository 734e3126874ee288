use crate::math::Vec2i;

/// The GUI textures sprites are cut from. Each one is a layer of the GUI array texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GuiTextureSlot {
    Widgets,
    Icons,
    Bars,
    Inventory,
}

impl GuiTextureSlot {
    /// Layer index inside the GUI array texture.
    pub fn layer(self) -> u32 {
        self as u32
    }
}

/// A rectangle of a GUI texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteDescriptor {
    pub slot: GuiTextureSlot,
    /// Top left corner of the sprite in texture pixels.
    pub position: Vec2i,
    /// Size of the sprite in texture pixels, also its layout size.
    pub size: Vec2i,
}

impl SpriteDescriptor {
    pub const fn new(slot: GuiTextureSlot, position: Vec2i, size: Vec2i) -> Self {
        Self {
            slot,
            position,
            size,
        }
    }
}

/// Sprites the HUD uses by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Crosshair,
    Hotbar,
    SelectedHotbarSlot,
    HeartOutline,
    FullHeart,
    HalfHeart,
    FoodOutline,
    FullFood,
    HalfFood,
    ArmorOutline,
    FullArmor,
    HalfArmor,
    XpBarBackground,
    XpBarForeground,
}

impl Sprite {
    pub fn descriptor(self) -> SpriteDescriptor {
        use GuiTextureSlot::*;

        let (slot, x, y, width, height) = match self {
            Sprite::Crosshair => (Icons, 0, 0, 15, 15),
            Sprite::Hotbar => (Widgets, 0, 0, 182, 22),
            Sprite::SelectedHotbarSlot => (Widgets, 0, 22, 24, 24),
            Sprite::HeartOutline => (Icons, 16, 0, 9, 9),
            Sprite::FullHeart => (Icons, 52, 0, 9, 9),
            Sprite::HalfHeart => (Icons, 61, 0, 9, 9),
            Sprite::FoodOutline => (Icons, 16, 27, 9, 9),
            Sprite::FullFood => (Icons, 52, 27, 9, 9),
            Sprite::HalfFood => (Icons, 61, 27, 9, 9),
            Sprite::ArmorOutline => (Icons, 16, 9, 9, 9),
            Sprite::FullArmor => (Icons, 34, 9, 9, 9),
            Sprite::HalfArmor => (Icons, 25, 9, 9, 9),
            Sprite::XpBarBackground => (Icons, 0, 64, 182, 5),
            Sprite::XpBarForeground => (Icons, 0, 69, 182, 5),
        };
        SpriteDescriptor::new(slot, Vec2i::new(x, y), Vec2i::new(width, height))
    }
}

impl From<Sprite> for SpriteDescriptor {
    fn from(sprite: Sprite) -> Self {
        sprite.descriptor()
    }
}
