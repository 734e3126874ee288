//! The resolved layout tree and hit testing against it.

use crate::actions::ClickHandler;
use crate::color::Color;
use crate::id::ActionId;
use crate::math::{BoundingBox, Vec2i};
use crate::sprites::SpriteDescriptor;
use crate::text::WrappedLine;

/// What a resolved node draws or does, besides holding its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text {
        wrapped_lines: Vec<WrappedLine>,
        /// Horizontal offset of every line after the first.
        hanging_indent: i32,
        color: Color,
    },
    Clickable(ActionId),
    Sprite(SpriteDescriptor),
    Background(Color),
    Item(i32),
}

/// A node of the resolved layout tree.
///
/// Positions are relative to the parent node; sizes are never negative.
#[derive(Debug, Clone, PartialEq)]
pub struct Renderable {
    pub relative_position: Vec2i,
    pub size: Vec2i,
    pub content: Option<Content>,
    pub children: Vec<Renderable>,
}

impl Renderable {
    pub fn new(size: Vec2i, content: Option<Content>, children: Vec<Renderable>) -> Self {
        Self {
            relative_position: Vec2i::ZERO,
            size,
            content,
            children,
        }
    }

    /// A node without content or children.
    pub fn leaf(size: Vec2i) -> Self {
        Self::new(size, None, Vec::new())
    }

    /// Moves the node to `position` in its parent's space.
    pub fn at(mut self, position: Vec2i) -> Self {
        self.relative_position = position;
        self
    }

    /// Shifts the node by `offset`, keeping whatever position it already had.
    pub fn offset(mut self, offset: Vec2i) -> Self {
        self.relative_position += offset;
        self
    }

    /// The node's box in its parent's space.
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_position_size(self.relative_position, self.size)
    }

    /// Delivers a click at `point` (in the parent's space) to the topmost clickable node
    /// under it. Points on an edge are outside. Returns whether the click was consumed.
    ///
    /// Floating nodes have no size, so nothing inside them can be clicked.
    pub fn hit_test(&self, point: Vec2i, handler: &mut dyn ClickHandler) -> bool {
        if !self.bounding_box().contains_exclusive(point) {
            return false;
        }

        let local = point - self.relative_position;
        if self
            .children
            .iter()
            .rev()
            .any(|child| child.hit_test(local, &mut *handler))
        {
            return true;
        }

        if let Some(Content::Clickable(action)) = &self.content {
            handler.on_click(*action);
            return true;
        }
        false
    }
}
