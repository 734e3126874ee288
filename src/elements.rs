//! The declarative element tree and the combinators that build it.

use crate::align::{AlignX, AlignY, Constraints};
use crate::color::Color;
use crate::id::ActionId;
use crate::layout::{EdgeSet, Expand, LayoutDirection, Padding};
use crate::message::Message;
use crate::sprites::{Sprite, SpriteDescriptor};

/// Unresolved UI intent. Each element exclusively owns its children; trees are built fresh
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        content: String,
        wrap: bool,
        color: Color,
    },
    /// A chat message, localized during layout.
    Message {
        message: Message,
        wrap: bool,
    },
    Clickable {
        element: Box<Element>,
        action: ActionId,
    },
    Sprite(Sprite),
    CustomSprite(SpriteDescriptor),
    /// Lays elements out one after another. Aligns them to the top left.
    List {
        direction: LayoutDirection,
        spacing: i32,
        elements: Vec<Element>,
    },
    /// Piles elements on top of each other; later elements are drawn on top.
    Stack {
        elements: Vec<Element>,
    },
    Positioned {
        element: Box<Element>,
        constraints: Constraints,
    },
    /// `None` keeps the child's natural width or height.
    Sized {
        element: Box<Element>,
        width: Option<i32>,
        height: Option<i32>,
    },
    Spacer {
        width: i32,
        height: i32,
    },
    /// Wraps an element with padding and an optional background.
    Container {
        background: Color,
        padding: Padding,
        element: Box<Element>,
        expand: Expand,
    },
    /// Rendered where it would normally go but reports a zero size to its parent.
    Floating {
        element: Box<Element>,
    },
    Item {
        id: i32,
    },
}

impl Element {
    /// Non-wrapping white text.
    pub fn text(content: impl Into<String>) -> Element {
        Element::Text {
            content: content.into(),
            wrap: false,
            color: Color::WHITE,
        }
    }

    /// White text that wraps to the available width.
    ///
    /// The width left for the text must stay above the hanging indent
    /// (`LayoutConfig::text_wrap_indent`, 4 by default), or resolving panics. Watch out for
    /// lists that run out of room.
    pub fn wrapped_text(content: impl Into<String>) -> Element {
        Element::Text {
            content: content.into(),
            wrap: true,
            color: Color::WHITE,
        }
    }

    /// A chat message. Messages wrap unless told otherwise, so the same width limit as
    /// [`Element::wrapped_text`] applies.
    pub fn message(message: Message) -> Element {
        Element::Message {
            message,
            wrap: true,
        }
    }

    pub fn sprite(sprite: Sprite) -> Element {
        Element::Sprite(sprite)
    }

    pub fn custom_sprite(descriptor: SpriteDescriptor) -> Element {
        Element::CustomSprite(descriptor)
    }

    pub fn spacer(width: i32, height: i32) -> Element {
        Element::Spacer { width, height }
    }

    pub fn item(id: i32) -> Element {
        Element::Item { id }
    }

    pub fn list(
        direction: LayoutDirection,
        spacing: i32,
        elements: impl IntoIterator<Item = Element>,
    ) -> Element {
        Element::List {
            direction,
            spacing,
            elements: elements.into_iter().collect(),
        }
    }

    /// A list with one element per value.
    pub fn for_each<T>(
        values: impl IntoIterator<Item = T>,
        direction: LayoutDirection,
        spacing: i32,
        element: impl FnMut(T) -> Element,
    ) -> Element {
        Element::list(direction, spacing, values.into_iter().map(element))
    }

    pub fn stack(elements: impl IntoIterator<Item = Element>) -> Element {
        Element::Stack {
            elements: elements.into_iter().collect(),
        }
    }

    /// Changes the text color. Leaves other elements untouched.
    pub fn color(self, color: impl Into<Color>) -> Element {
        match self {
            Element::Text { content, wrap, .. } => Element::Text {
                content,
                wrap,
                color: color.into(),
            },
            other => other,
        }
    }

    /// Turns wrapping off for text and messages.
    pub fn no_wrap(self) -> Element {
        match self {
            Element::Text { content, color, .. } => Element::Text {
                content,
                wrap: false,
                color,
            },
            Element::Message { message, .. } => Element::Message {
                message,
                wrap: false,
            },
            other => other,
        }
    }

    pub fn center(self) -> Element {
        self.constraints(Constraints::CENTER)
    }

    pub fn position_in_parent(self, x: i32, y: i32) -> Element {
        self.constraints(Constraints::position(x, y))
    }

    pub fn align(self, vertical: AlignY, horizontal: AlignX) -> Element {
        self.constraints(Constraints::new(vertical, horizontal))
    }

    pub fn constraints(self, constraints: Constraints) -> Element {
        Element::Positioned {
            element: Box::new(self),
            constraints,
        }
    }

    /// `None` keeps the natural width/height.
    pub fn size(self, width: Option<i32>, height: Option<i32>) -> Element {
        Element::Sized {
            element: Box::new(self),
            width,
            height,
        }
    }

    pub fn padding(self, amount: i32) -> Element {
        self.padding_edges(EdgeSet::ALL, amount)
    }

    pub fn padding_edges(self, edges: impl Into<EdgeSet>, amount: i32) -> Element {
        Element::Container {
            background: Color::TRANSPARENT,
            padding: Padding::edges(edges, amount),
            element: Box::new(self),
            expand: Expand::NEITHER,
        }
    }

    /// Puts a background behind the element. A container without a background yet is reused
    /// instead of adding another layer.
    pub fn background(self, color: impl Into<Color>) -> Element {
        let color = color.into();
        match self {
            Element::Container {
                background,
                padding,
                element,
                expand,
            } if background == Color::TRANSPARENT => Element::Container {
                background: color,
                padding,
                element,
                expand,
            },
            other => Element::Container {
                background: color,
                padding: Padding::ZERO,
                element: Box::new(other),
                expand: Expand::NEITHER,
            },
        }
    }

    /// Makes the element fill all available space along `directions`.
    pub fn expand(self, directions: Expand) -> Element {
        Element::Container {
            background: Color::TRANSPARENT,
            padding: Padding::ZERO,
            element: Box::new(self),
            expand: directions,
        }
    }

    pub fn on_click(self, action: impl Into<ActionId>) -> Element {
        Element::Clickable {
            element: Box::new(self),
            action: action.into(),
        }
    }

    /// Takes the element out of layout flow. It is still drawn exactly where it would
    /// otherwise go, but siblings are placed as if it had no size.
    ///
    /// Anything applied to the element after floating it (centering, padding, ...) also sees
    /// a zero sized element.
    pub fn float(self) -> Element {
        Element::Floating {
            element: Box::new(self),
        }
    }

    /// The direct children of this element in declaration order.
    pub fn children(&self) -> Vec<&Element> {
        match self {
            Element::List { elements, .. } | Element::Stack { elements } => elements.iter().collect(),
            Element::Clickable { element, .. }
            | Element::Positioned { element, .. }
            | Element::Sized { element, .. }
            | Element::Container { element, .. }
            | Element::Floating { element } => vec![element.as_ref()],
            Element::Text { .. }
            | Element::Message { .. }
            | Element::Sprite(_)
            | Element::CustomSprite(_)
            | Element::Spacer { .. }
            | Element::Item { .. } => Vec::new(),
        }
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::text(text)
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::text(text)
    }
}
