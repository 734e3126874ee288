//! Layout resolution: turns an [`Element`] tree into a positioned [`Renderable`] tree.
//!
//! Resolution is a single recursive pass. Every element is resolved against the size its
//! parent offers, reports its own size back, and is positioned relative to that parent.
//! The pass is pure: the same element, size, font and locale always give the same tree.

use crate::color::Color;
use crate::config::LayoutConfig;
use crate::elements::Element;
use crate::layout::LayoutDirection;
use crate::math::Vec2i;
use crate::message::Locale;
use crate::renderable::{Content, Renderable};
use crate::text::{self, FontMetrics};

impl Element {
    /// Resolves the element against `available` using the default layout constants.
    pub fn resolve(&self, available: Vec2i, font: &dyn FontMetrics, locale: &dyn Locale) -> Renderable {
        self.resolve_with(available, font, locale, &LayoutConfig::default())
    }

    pub fn resolve_with(
        &self,
        available: Vec2i,
        font: &dyn FontMetrics,
        locale: &dyn Locale,
        config: &LayoutConfig,
    ) -> Renderable {
        Resolver {
            font,
            locale,
            config,
        }
        .resolve(self, available)
    }
}

struct Resolver<'a> {
    font: &'a dyn FontMetrics,
    locale: &'a dyn Locale,
    config: &'a LayoutConfig,
}

impl Resolver<'_> {
    fn resolve(&self, element: &Element, available: Vec2i) -> Renderable {
        match element {
            Element::Text {
                content,
                wrap,
                color,
            } => self.text(content, *wrap, *color, available),
            Element::Message { message, wrap } => {
                let text = message.to_text(self.locale);
                self.text(&text, *wrap, Color::WHITE, available)
            }
            Element::Clickable { element, action } => {
                let child = self.resolve(element, available);
                Renderable::new(child.size, Some(Content::Clickable(*action)), vec![child])
            }
            Element::Sprite(sprite) => {
                let descriptor = sprite.descriptor();
                Renderable::new(descriptor.size, Some(Content::Sprite(descriptor)), Vec::new())
            }
            Element::CustomSprite(descriptor) => {
                Renderable::new(descriptor.size, Some(Content::Sprite(*descriptor)), Vec::new())
            }
            Element::List {
                direction,
                spacing,
                elements,
            } => self.list(*direction, *spacing, elements, available),
            Element::Stack { elements } => {
                let children: Vec<Renderable> = elements
                    .iter()
                    .map(|element| self.resolve(element, available))
                    .collect();
                let size = children
                    .iter()
                    .fold(Vec2i::ZERO, |size, child| size.max(child.relative_position + child.size));
                Renderable::new(size, None, children)
            }
            Element::Positioned {
                element,
                constraints,
            } => {
                let child = self.resolve(element, available);
                let position = constraints.solve(child.size, available);
                Renderable::new(child.size, None, vec![child]).at(position)
            }
            Element::Sized {
                element,
                width,
                height,
            } => {
                let overridden = Vec2i::new(width.unwrap_or(available.x), height.unwrap_or(available.y));
                let child = self.resolve(element, overridden);
                let size = Vec2i::new(width.unwrap_or(child.size.x), height.unwrap_or(child.size.y));
                Renderable::new(size, None, vec![child])
            }
            Element::Spacer { width, height } => Renderable::leaf(Vec2i::new(*width, *height)),
            Element::Container {
                background,
                padding,
                element,
                expand,
            } => {
                let totals = padding.axis_totals();
                let child = self
                    .resolve(element, available - totals)
                    .offset(padding.origin());
                let natural = (child.size + totals).min(available);
                let size = Vec2i::new(
                    if expand.horizontal { available.x } else { natural.x },
                    if expand.vertical { available.y } else { natural.y },
                )
                .max(Vec2i::ZERO);
                let content = background
                    .is_visible()
                    .then_some(Content::Background(*background));
                Renderable::new(size, content, vec![child])
            }
            Element::Floating { element } => {
                let child = self.resolve(element, available);
                Renderable::new(Vec2i::ZERO, None, vec![child])
            }
            Element::Item { id } => {
                let side = self.config.item_size;
                Renderable::new(Vec2i::new(side, side), Some(Content::Item(*id)), Vec::new())
            }
        }
    }

    fn text(&self, content: &str, wrap: bool, color: Color, available: Vec2i) -> Renderable {
        // Unwrapped text is still run through the wrapper to measure it.
        let maximum_width = if wrap { available.x } else { i32::MAX };
        let indent = self.config.text_wrap_indent;
        let lines = text::wrap(content, maximum_width, indent, self.font);

        let count = lines.len() as i32;
        let width = lines.iter().map(|line| line.width).max().unwrap_or(0);
        let height = count * self.font.line_height() + (count - 1) * self.config.line_spacing;
        Renderable::new(
            Vec2i::new(width, height),
            Some(Content::Text {
                wrapped_lines: lines,
                hanging_indent: indent,
                color,
            }),
            Vec::new(),
        )
    }

    fn list(
        &self,
        direction: LayoutDirection,
        spacing: i32,
        elements: &[Element],
        available: Vec2i,
    ) -> Renderable {
        let axis = direction.axis();
        let mut remaining = available;
        let mut offset = 0;
        let mut cross = 0;
        let mut children = Vec::with_capacity(elements.len());

        for element in elements {
            let mut child = self.resolve(element, remaining);
            child.relative_position[axis] += offset;

            let advance = child.size[axis] + spacing;
            offset += advance;
            remaining[axis] -= advance;

            cross = cross.max(child.size[axis.cross()]);
            children.push(child);
        }

        let along = if elements.is_empty() { 0 } else { offset - spacing };
        let size = match direction {
            LayoutDirection::LeftToRight => Vec2i::new(along, cross),
            LayoutDirection::TopToBottom => Vec2i::new(cross, along),
        };
        Renderable::new(size, None, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{AlignX, AlignY};
    use crate::id::ActionId;
    use crate::layout::Expand;
    use crate::message::{Message, TranslationTable};
    use crate::sprites::Sprite;
    use crate::text::GlyphTable;

    fn resolve(element: &Element, available: Vec2i) -> Renderable {
        element.resolve(available, &GlyphTable::monospace(5), &TranslationTable::new())
    }

    #[test]
    fn horizontal_list_accumulates_offsets() {
        let list = Element::list(
            LayoutDirection::LeftToRight,
            4,
            [Element::spacer(10, 6), Element::spacer(20, 9)],
        );
        let resolved = resolve(&list, Vec2i::new(200, 100));
        assert_eq!(resolved.children[0].relative_position.x, 0);
        assert_eq!(resolved.children[1].relative_position.x, 14);
        assert_eq!(resolved.size, Vec2i::new(34, 9));
    }

    #[test]
    fn list_shrinks_the_budget_for_later_children() {
        let list = Element::list(
            LayoutDirection::TopToBottom,
            2,
            [
                Element::spacer(5, 30),
                Element::spacer(5, 5).expand(Expand::VERTICAL),
            ],
        );
        let resolved = resolve(&list, Vec2i::new(50, 100));
        assert_eq!(resolved.children[1].relative_position, Vec2i::new(0, 32));
        assert_eq!(resolved.children[1].size, Vec2i::new(5, 68));
        assert_eq!(resolved.size, Vec2i::new(5, 100));
    }

    #[test]
    fn empty_list_has_no_size() {
        let list = Element::list(LayoutDirection::LeftToRight, 4, []);
        assert_eq!(resolve(&list, Vec2i::new(50, 50)).size, Vec2i::ZERO);
    }

    #[test]
    fn list_children_keep_their_own_position() {
        let list = Element::list(
            LayoutDirection::TopToBottom,
            0,
            [
                Element::spacer(4, 4),
                Element::spacer(4, 4).position_in_parent(3, 1),
            ],
        );
        let resolved = resolve(&list, Vec2i::new(50, 50));
        assert_eq!(resolved.children[1].relative_position, Vec2i::new(3, 5));
    }

    #[test]
    fn padded_container() {
        let container = Element::spacer(10, 10).padding(2);
        let resolved = resolve(&container, Vec2i::new(100, 100));
        assert_eq!(resolved.size, Vec2i::new(14, 14));
        assert_eq!(resolved.children[0].relative_position, Vec2i::new(2, 2));
        assert_eq!(resolved.content, None);
    }

    #[test]
    fn container_background_and_expansion() {
        let container = Element::spacer(10, 10)
            .padding(2)
            .background(Color::rgb(10.0, 10.0, 10.0))
            .expand(Expand::HORIZONTAL);
        let resolved = resolve(&container, Vec2i::new(100, 100));
        assert_eq!(resolved.size, Vec2i::new(100, 14));
        assert_eq!(
            resolved.children[0].content,
            Some(Content::Background(Color::rgb(10.0, 10.0, 10.0)))
        );
    }

    #[test]
    fn container_size_is_clamped() {
        let container = Element::spacer(10, 10).padding(2);
        assert_eq!(resolve(&container, Vec2i::new(12, 8)).size, Vec2i::new(12, 8));
        assert_eq!(resolve(&container, Vec2i::new(-3, 8)).size, Vec2i::new(0, 8));
    }

    #[test]
    fn floating_reports_zero_size() {
        let list = Element::list(
            LayoutDirection::LeftToRight,
            0,
            [Element::spacer(10, 10).float(), Element::spacer(5, 5)],
        );
        let resolved = resolve(&list, Vec2i::new(100, 100));
        assert_eq!(resolved.children[0].size, Vec2i::ZERO);
        assert_eq!(resolved.children[0].children[0].size, Vec2i::new(10, 10));
        assert_eq!(resolved.children[1].relative_position, Vec2i::ZERO);
        assert_eq!(resolved.size, Vec2i::new(5, 5));
    }

    #[test]
    fn stack_covers_positioned_children() {
        let stack = Element::stack([
            Element::spacer(10, 10),
            Element::spacer(4, 4).align(AlignY::Bottom(0), AlignX::Right(0)),
        ]);
        let resolved = resolve(&stack, Vec2i::new(30, 20));
        assert_eq!(resolved.children[1].relative_position, Vec2i::new(26, 16));
        assert_eq!(resolved.size, Vec2i::new(30, 20));
    }

    #[test]
    fn centered_child() {
        let resolved = resolve(&Element::spacer(10, 4).center(), Vec2i::new(30, 20));
        assert_eq!(resolved.relative_position, Vec2i::new(10, 8));
        assert_eq!(resolved.size, Vec2i::new(10, 4));
    }

    #[test]
    fn sized_overrides_one_axis() {
        let sized = Element::spacer(5, 5).expand(Expand::BOTH).size(Some(40), None);
        let resolved = resolve(&sized, Vec2i::new(100, 60));
        assert_eq!(resolved.size, Vec2i::new(40, 60));
        assert_eq!(resolved.children[0].size, Vec2i::new(40, 60));
    }

    #[test]
    fn text_height_counts_line_spacing() {
        // Two lines: 2 * 8 + 1.
        let resolved = resolve(&Element::wrapped_text("hello world"), Vec2i::new(40, 100));
        assert_eq!(resolved.size, Vec2i::new(29, 17));
        match resolved.content {
            Some(Content::Text {
                wrapped_lines,
                hanging_indent,
                ..
            }) => {
                assert_eq!(wrapped_lines.len(), 2);
                assert_eq!(hanging_indent, 4);
            }
            _ => panic!("Expected text content"),
        }

        let resolved = resolve(&Element::text("hello world"), Vec2i::new(40, 100));
        assert_eq!(resolved.size, Vec2i::new(65, 8));
    }

    #[test]
    fn messages_are_localized_white_text() {
        let locale: TranslationTable = [("chat.joined", "%s joined the game")].into_iter().collect();
        let element = Element::message(Message::translate("chat.joined", vec![Message::literal("Al")]));
        let resolved = element.resolve(Vec2i::new(500, 50), &GlyphTable::monospace(5), &locale);
        match resolved.content {
            Some(Content::Text {
                wrapped_lines,
                color,
                ..
            }) => {
                assert_eq!(wrapped_lines[0].line, "Al joined the game");
                assert_eq!(color, Color::WHITE);
            }
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn leaves_use_intrinsic_sizes() {
        let resolved = resolve(&Element::sprite(Sprite::Hotbar), Vec2i::new(10, 10));
        assert_eq!(resolved.size, Vec2i::new(182, 22));

        let resolved = resolve(&Element::item(3), Vec2i::new(10, 10));
        assert_eq!(resolved.size, Vec2i::new(16, 16));
        assert_eq!(resolved.content, Some(Content::Item(3)));

        let mut config = LayoutConfig::default();
        config.item_size(18);
        let resolved = Element::item(3).resolve_with(
            Vec2i::new(10, 10),
            &GlyphTable::monospace(5),
            &TranslationTable::new(),
            &config,
        );
        assert_eq!(resolved.size, Vec2i::new(18, 18));
    }

    #[test]
    fn clickable_wraps_its_child() {
        let resolved = resolve(&Element::spacer(6, 7).on_click("respawn"), Vec2i::new(50, 50));
        assert_eq!(resolved.size, Vec2i::new(6, 7));
        assert_eq!(resolved.content, Some(Content::Clickable(ActionId::new("respawn"))));
        assert_eq!(resolved.children.len(), 1);
    }

    #[test]
    fn resolution_is_pure() {
        let element = Element::list(
            LayoutDirection::TopToBottom,
            1,
            [
                Element::wrapped_text("the quick brown fox jumps over the lazy dog"),
                Element::sprite(Sprite::Crosshair).center(),
                Element::item(1).padding(1).background(0x80000000u32),
            ],
        );
        let first = resolve(&element, Vec2i::new(60, 200));
        let second = resolve(&element, Vec2i::new(60, 200));
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "indent")]
    fn wrapped_text_needs_room_beyond_the_indent() {
        // A 16 pixel item and 1 pixel of spacing leave 3 pixels, less than the indent of 4.
        let element = Element::list(
            LayoutDirection::LeftToRight,
            1,
            [Element::item(1), Element::wrapped_text("a b")],
        );
        resolve(&element, Vec2i::new(20, 20));
    }
}
