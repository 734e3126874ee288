use core::ops::{Add, AddAssign, Index, IndexMut, Sub, SubAssign};

use crate::layout::Axis;

/// An integer pixel-space vector. Layout positions and sizes are always whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }
}

impl From<(i32, i32)> for Vec2i {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Add for Vec2i {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2i {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2i {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2i {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Index<Axis> for Vec2i {
    type Output = i32;

    fn index(&self, axis: Axis) -> &i32 {
        match axis {
            Axis::Horizontal => &self.x,
            Axis::Vertical => &self.y,
        }
    }
}

impl IndexMut<Axis> for Vec2i {
    fn index_mut(&mut self, axis: Axis) -> &mut i32 {
        match axis {
            Axis::Horizontal => &mut self.x,
            Axis::Vertical => &mut self.y,
        }
    }
}

/// An axis-aligned box in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_position_size(position: Vec2i, size: Vec2i) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> Vec2i {
        Vec2i::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2i {
        Vec2i::new(self.width, self.height)
    }

    /// Strict containment: points on any edge are outside.
    pub fn contains_exclusive(&self, point: Vec2i) -> bool {
        point.x > self.x
            && point.x < self.x + self.width
            && point.y > self.y
            && point.y < self.y + self.height
    }

    /// Axis-aligned overlap test. Boxes that only touch along an edge do not overlap.
    ///
    /// Compares doubled centers against the summed extents so odd sizes don't shift a
    /// center by half a pixel.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        let overlaps_x = ((2 * self.x + self.width) - (2 * other.x + other.width)).abs()
            < self.width + other.width;
        let overlaps_y = ((2 * self.y + self.height) - (2 * other.y + other.height)).abs()
            < self.height + other.height;
        overlaps_x && overlaps_y
    }
}
