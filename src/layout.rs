use crate::math::Vec2i;

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Defines the layout direction for arranging the children of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum LayoutDirection {
    /// Arranges elements from left to right.
    LeftToRight,
    /// Arranges elements from top to bottom.
    #[default]
    TopToBottom,
}

impl LayoutDirection {
    /// The axis children are accumulated along.
    pub fn axis(self) -> Axis {
        match self {
            LayoutDirection::LeftToRight => Axis::Horizontal,
            LayoutDirection::TopToBottom => Axis::Vertical,
        }
    }
}

/// One edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// A set of box edges, used to pad only some sides of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeSet {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl EdgeSet {
    pub const TOP: Self = Self::new(true, false, false, false);
    pub const BOTTOM: Self = Self::new(false, true, false, false);
    pub const LEFT: Self = Self::new(false, false, true, false);
    pub const RIGHT: Self = Self::new(false, false, false, true);
    pub const VERTICAL: Self = Self::new(true, true, false, false);
    pub const HORIZONTAL: Self = Self::new(false, false, true, true);
    pub const ALL: Self = Self::new(true, true, true, true);

    pub const fn new(top: bool, bottom: bool, left: bool, right: bool) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn contains(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }
}

impl<const N: usize> From<[Edge; N]> for EdgeSet {
    fn from(edges: [Edge; N]) -> Self {
        let mut set = Self::default();
        for edge in edges {
            match edge {
                Edge::Top => set.top = true,
                Edge::Bottom => set.bottom = true,
                Edge::Left => set.left = true,
                Edge::Right => set.right = true,
            }
        }
        set
    }
}

/// Which axes a container fills completely instead of shrinking to its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Expand {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Expand {
    pub const NEITHER: Self = Self::new(false, false);
    pub const HORIZONTAL: Self = Self::new(true, false);
    pub const VERTICAL: Self = Self::new(false, true);
    pub const BOTH: Self = Self::new(true, true);

    pub const fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Represents padding values for each side of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Padding on the left side.
    pub left: i32,
    /// Padding on the right side.
    pub right: i32,
    /// Padding on the top side.
    pub top: i32,
    /// Padding on the bottom side.
    pub bottom: i32,
}

impl Padding {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a new `Padding` with individual values for each side.
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Sets the same padding value for all sides.
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Pads only the given edges by `amount`.
    pub fn edges(edges: impl Into<EdgeSet>, amount: i32) -> Self {
        let edges = edges.into();
        let pick = |on: bool| if on { amount } else { 0 };
        Self::new(
            pick(edges.left),
            pick(edges.right),
            pick(edges.top),
            pick(edges.bottom),
        )
    }

    /// The total padding along each axis.
    pub fn axis_totals(&self) -> Vec2i {
        Vec2i::new(self.left + self.right, self.top + self.bottom)
    }

    /// Offset applied to the padded child.
    pub fn origin(&self) -> Vec2i {
        Vec2i::new(self.left, self.top)
    }
}

impl From<i32> for Padding {
    /// Creates padding with the same value for all sides.
    fn from(value: i32) -> Self {
        Self::all(value)
    }
}

impl From<(i32, i32, i32, i32)> for Padding {
    /// Creates padding from a tuple in CSS order: (top, right, bottom, left).
    fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}
