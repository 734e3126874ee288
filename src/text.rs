//! Text measurement and wrapping.

use macroquad::prelude::warn;
use rustc_hash::FxHashMap;

/// Height of a line of text in the default HUD font.
pub const DEFAULT_CHARACTER_HEIGHT: i32 = 8;
/// Glyph drawn in place of characters the font doesn't cover.
pub const PLACEHOLDER_CHARACTER: char = '\u{FFFD}';

/// Glyph metrics of a font. Rasterization happens elsewhere; layout only needs widths.
pub trait FontMetrics {
    /// Rendered width of `character` in pixels, or `None` if the font has no glyph for it.
    fn glyph_width(&self, character: char) -> Option<i32>;

    /// Height of a single line of text.
    fn line_height(&self) -> i32 {
        DEFAULT_CHARACTER_HEIGHT
    }
}

/// A font described by a table of glyph widths.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    widths: FxHashMap<char, i32>,
    line_height: Option<i32>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every printable ASCII character plus the placeholder glyph at one fixed width.
    pub fn monospace(width: i32) -> Self {
        let mut table = Self::new();
        for character in ' '..='~' {
            table.glyph(character, width);
        }
        table.glyph(PLACEHOLDER_CHARACTER, width);
        table
    }

    /// Sets the width of a single glyph.
    #[inline]
    pub fn glyph(&mut self, character: char, width: i32) -> &mut Self {
        self.widths.insert(character, width);
        self
    }

    /// Removes a glyph so lookups for it fail.
    #[inline]
    pub fn without(&mut self, character: char) -> &mut Self {
        self.widths.remove(&character);
        self
    }

    /// Overrides the line height reported to layout.
    #[inline]
    pub fn set_line_height(&mut self, height: i32) -> &mut Self {
        self.line_height = Some(height);
        self
    }
}

impl FontMetrics for GlyphTable {
    fn glyph_width(&self, character: char) -> Option<i32> {
        self.widths.get(&character).copied()
    }

    fn line_height(&self) -> i32 {
        self.line_height.unwrap_or(DEFAULT_CHARACTER_HEIGHT)
    }
}

/// One line of wrapped text together with its rendered width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedLine {
    pub line: String,
    pub width: i32,
}

impl WrappedLine {
    fn new(line: &str, width: i32) -> Self {
        Self {
            line: line.to_owned(),
            width,
        }
    }
}

/// Width of `character`, falling back to the placeholder glyph. Characters that neither the
/// font nor its placeholder cover are skipped.
pub fn rendered_width(character: char, font: &dyn FontMetrics) -> Option<i32> {
    if let Some(width) = font.glyph_width(character) {
        return Some(width);
    }
    if let Some(width) = font.glyph_width(PLACEHOLDER_CHARACTER) {
        return Some(width);
    }
    warn!(
        "Failed to replace invalid character '{}' with placeholder '{}'",
        character, PLACEHOLDER_CHARACTER
    );
    None
}

/// Rendered width of a whole string on a single line, including the one pixel of spacing
/// between characters.
pub fn measure(text: &str, font: &dyn FontMetrics) -> i32 {
    let mut width = 0;
    for (index, character) in text.chars().enumerate() {
        if let Some(glyph) = rendered_width(character, font) {
            width += glyph;
            if index != 0 {
                width += 1;
            }
        }
    }
    width
}

/// Wraps `text` into lines no wider than `maximum_width`.
///
/// Lines break at the last space that fits, or before the first character that doesn't
/// when the line has no space. Continuation lines get `indent` fewer pixels so the caller
/// can draw them with a hanging indent.
///
/// # Panics
///
/// If `indent >= maximum_width`, or if a single glyph is at least `maximum_width` wide.
/// Both mean the element tree was built wrong.
pub fn wrap(text: &str, maximum_width: i32, indent: i32, font: &dyn FontMetrics) -> Vec<WrappedLine> {
    assert!(
        indent < maximum_width,
        "indent ({indent}) must be smaller than maximum_width ({maximum_width})"
    );

    let mut lines = Vec::new();
    let mut rest = text;
    let mut maximum_width = maximum_width;
    let mut indent = indent;
    loop {
        let (line, remainder) = wrap_line(rest, maximum_width, font);
        lines.push(line);

        let Some(remainder) = remainder else {
            break;
        };
        rest = remainder.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }
        maximum_width -= indent;
        indent = 0;
    }
    lines
}

/// Fits as much of `text` as possible on one line. Returns the line and, if it had to break,
/// the text starting at the break point.
fn wrap_line<'a>(
    text: &'a str,
    maximum_width: i32,
    font: &dyn FontMetrics,
) -> (WrappedLine, Option<&'a str>) {
    let mut width = 0;
    // Byte index of the latest space and the line width in front of it.
    let mut latest_space: Option<(usize, i32)> = None;

    for (position, (index, character)) in text.char_indices().enumerate() {
        let Some(glyph) = rendered_width(character, font) else {
            continue;
        };
        assert!(
            glyph < maximum_width,
            "maximum_width ({maximum_width}) must be greater than every character ('{character}' is {glyph} wide)"
        );

        let mut next_width = width + glyph;
        if position != 0 {
            next_width += 1;
        }

        if character == ' ' && index != 0 {
            latest_space = Some((index, width));
        }

        // Never break before the first character, otherwise nothing would ever be consumed.
        if next_width > maximum_width && position != 0 {
            return match latest_space {
                Some((space, width)) => (WrappedLine::new(&text[..space], width), Some(&text[space..])),
                None => (WrappedLine::new(&text[..index], width), Some(&text[index..])),
            };
        }
        width = next_width;
    }

    (WrappedLine::new(text, width), None)
}
