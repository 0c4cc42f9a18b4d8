//! Geometry and color value types.

use bytemuck::{Pod, Zeroable};

/// A 2D vector.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A rectangle in screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The largest rect representable in command coordinates.
    pub const UNBOUNDED: Self = Self::new(0.0, 0.0, u16::MAX as f32, u16::MAX as f32);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Returns the bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Returns true if the point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Returns true if two rectangles overlap.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Returns the overlapping area, or a zero-sized rect at the clamped
    /// position when the rectangles do not overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self::new(x, y, (right - x).max(0.0), (bottom - y).max(0.0))
    }

    /// Shrinks the rectangle by `padding` on each side, never below zero size.
    #[must_use]
    pub fn pad(&self, padding: Vec2) -> Self {
        Self::new(
            self.x + padding.x,
            self.y + padding.y,
            (self.w - 2.0 * padding.x).max(0.0),
            (self.h - 2.0 * padding.y).max(0.0),
        )
    }
}

/// RGBA color with byte components.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component.
    pub a: u8,
}

impl Color {
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Solid black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Solid white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates a color from RGBA bytes.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color from `0xRRGGBBAA`.
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        Self::rgba(
            ((hex >> 24) & 0xFF) as u8,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from(value: [u8; 4]) -> Self {
        Self::rgba(value[0], value[1], value[2], value[3])
    }
}

/// Direction a triangle glyph points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    /// Pointing up.
    Up,
    /// Pointing right.
    Right,
    /// Pointing down.
    Down,
    /// Pointing left.
    Left,
}

impl Heading {
    /// Computes the three corners of a triangle pointing in this direction,
    /// inscribed in `rect`.
    #[must_use]
    pub fn triangle(self, rect: Rect) -> [Vec2; 3] {
        let (x, y, w, h) = (rect.x, rect.y, rect.w, rect.h);
        match self {
            Self::Up => [
                Vec2::new(x + w * 0.5, y),
                Vec2::new(x + w, y + h),
                Vec2::new(x, y + h),
            ],
            Self::Right => [
                Vec2::new(x, y),
                Vec2::new(x + w, y + h * 0.5),
                Vec2::new(x, y + h),
            ],
            Self::Down => [
                Vec2::new(x, y),
                Vec2::new(x + w, y),
                Vec2::new(x + w * 0.5, y + h),
            ],
            Self::Left => [
                Vec2::new(x + w, y),
                Vec2::new(x + w, y + h),
                Vec2::new(x, y + h * 0.5),
            ],
        }
    }
}
