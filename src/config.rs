//! Overlay and layout tuning.

/// Constants the layout resolver works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Hanging indent of wrapped text, in pixels.
    pub text_wrap_indent: i32,
    /// Gap between lines of text.
    pub line_spacing: i32,
    /// Side length of an item slot.
    pub item_size: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            text_wrap_indent: 4,
            line_spacing: 1,
            item_size: 16,
        }
    }
}

impl LayoutConfig {
    pub fn text_wrap_indent(&mut self, indent: i32) -> &mut Self {
        self.text_wrap_indent = indent;
        self
    }

    pub fn line_spacing(&mut self, spacing: i32) -> &mut Self {
        self.line_spacing = spacing;
        self
    }

    pub fn item_size(&mut self, size: i32) -> &mut Self {
        self.item_size = size;
        self
    }
}

/// Settings for an [`Overlay`](crate::renderer::Overlay).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayConfig {
    /// User-chosen GUI scale, multiplied with the display's scale factor.
    pub gui_scale: f32,
    pub layout: LayoutConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            gui_scale: 2.0,
            layout: LayoutConfig::default(),
        }
    }
}

impl OverlayConfig {
    pub fn gui_scale(&mut self, scale: f32) -> &mut Self {
        self.gui_scale = scale;
        self
    }

    pub fn layout(&mut self, layout: LayoutConfig) -> &mut Self {
        self.layout = layout;
        self
    }

    /// Parses a config from JSON. Missing fields keep their defaults.
    #[cfg(feature = "config-json")]
    pub fn from_json(json: &str) -> crate::errors::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
