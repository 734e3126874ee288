use crate::math::Vec2i;

/// Horizontal placement of an element inside the space its parent offers.
/// Each variant carries a pixel offset measured away from the anchored edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignX {
    Left(i32),
    /// Centered, then shifted right by the offset.
    CenterX(i32),
    Right(i32),
}

impl Default for AlignX {
    fn default() -> Self {
        AlignX::Left(0)
    }
}

impl AlignX {
    fn solve(self, inner: i32, outer: i32) -> i32 {
        match self {
            AlignX::Left(offset) => offset,
            AlignX::CenterX(offset) => (outer - inner) / 2 + offset,
            AlignX::Right(offset) => outer - inner - offset,
        }
    }
}

/// Vertical placement of an element inside the space its parent offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignY {
    Top(i32),
    /// Centered, then shifted down by the offset.
    CenterY(i32),
    Bottom(i32),
}

impl Default for AlignY {
    fn default() -> Self {
        AlignY::Top(0)
    }
}

impl AlignY {
    fn solve(self, inner: i32, outer: i32) -> i32 {
        match self {
            AlignY::Top(offset) => offset,
            AlignY::CenterY(offset) => (outer - inner) / 2 + offset,
            AlignY::Bottom(offset) => outer - inner - offset,
        }
    }
}

/// A pair of alignment constraints for a positioned element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    pub vertical: AlignY,
    pub horizontal: AlignX,
}

impl Constraints {
    pub const CENTER: Self = Self::new(AlignY::CenterY(0), AlignX::CenterX(0));

    pub const fn new(vertical: AlignY, horizontal: AlignX) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// An explicit offset from the top left corner.
    pub const fn position(x: i32, y: i32) -> Self {
        Self::new(AlignY::Top(y), AlignX::Left(x))
    }

    /// Computes the relative position of an `inner` sized box placed in `outer`.
    pub fn solve(&self, inner: Vec2i, outer: Vec2i) -> Vec2i {
        Vec2i::new(
            self.horizontal.solve(inner.x, outer.x),
            self.vertical.solve(inner.y, outer.y),
        )
    }
}
