use crate::{
    color::Color,
    math::{BoundingBox, Vec2i},
    renderable::{Content, Renderable},
    sprites::SpriteDescriptor,
    text::WrappedLine,
};

/// A solid fill behind an element.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    /// The fill color.
    pub color: Color,
}

/// Wrapped text with styling attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The lines of text, top to bottom.
    pub lines: Vec<WrappedLine>,
    /// Horizontal offset of every line after the first.
    pub hanging_indent: i32,
    /// The color of the text.
    pub color: Color,
}

/// An item slot, drawn by whoever knows what item `id` looks like.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommandConfig {
    Background(Background),
    Text(Text),
    Sprite(SpriteDescriptor),
    Item(Item),
}

impl RenderCommandConfig {
    /// The draw configuration for a node's content. Clickable regions draw nothing.
    fn from_content(content: &Content) -> Option<Self> {
        match content {
            Content::Text {
                wrapped_lines,
                hanging_indent,
                color,
            } => Some(Self::Text(Text {
                lines: wrapped_lines.clone(),
                hanging_indent: *hanging_indent,
                color: *color,
            })),
            Content::Background(color) => Some(Self::Background(Background { color: *color })),
            Content::Sprite(descriptor) => Some(Self::Sprite(*descriptor)),
            Content::Item(id) => Some(Self::Item(Item { id: *id })),
            Content::Clickable(_) => None,
        }
    }
}

/// Represents a render command for drawing an element on the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCommand {
    /// The area occupied by the element, in absolute layout coordinates.
    pub bounding_box: BoundingBox,
    /// The specific configuration for rendering this command.
    pub config: RenderCommandConfig,
    /// Position of the command in paint order.
    pub id: u32,
}

impl Renderable {
    /// Flattens the tree into draw commands in paint order: a node's own content first, then
    /// its children in order, so later siblings are drawn on top.
    pub fn render_commands(&self) -> Vec<RenderCommand> {
        let mut commands = Vec::new();
        self.collect_render_commands(Vec2i::ZERO, &mut commands);
        commands
    }

    fn collect_render_commands(&self, parent_origin: Vec2i, commands: &mut Vec<RenderCommand>) {
        let origin = parent_origin + self.relative_position;
        if let Some(config) = self.content.as_ref().and_then(RenderCommandConfig::from_content) {
            commands.push(RenderCommand {
                bounding_box: BoundingBox::from_position_size(origin, self.size),
                config,
                id: commands.len() as u32,
            });
        }
        for child in &self.children {
            child.collect_render_commands(origin, commands);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Element;
    use crate::layout::LayoutDirection;
    use crate::message::TranslationTable;
    use crate::text::GlyphTable;

    #[test]
    fn commands_are_absolute_and_in_paint_order() {
        let element = Element::list(
            LayoutDirection::LeftToRight,
            2,
            [Element::item(1), Element::item(2).padding(3).background(0x404040u32)],
        )
        .on_click("inventory")
        .position_in_parent(10, 20);
        let tree = element.resolve(
            Vec2i::new(200, 200),
            &GlyphTable::monospace(5),
            &TranslationTable::new(),
        );

        let commands = tree.render_commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0].bounding_box, BoundingBox::new(10, 20, 16, 16));
        assert_eq!(commands[0].config, RenderCommandConfig::Item(Item { id: 1 }));
        assert_eq!(commands[1].bounding_box, BoundingBox::new(28, 20, 22, 22));
        assert!(matches!(commands[1].config, RenderCommandConfig::Background(_)));
        assert_eq!(commands[2].bounding_box, BoundingBox::new(31, 23, 16, 16));
        assert_eq!(commands[2].config, RenderCommandConfig::Item(Item { id: 2 }));
        assert!(commands.iter().enumerate().all(|(index, command)| command.id == index as u32));
    }
}
