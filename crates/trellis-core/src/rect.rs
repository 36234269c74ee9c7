//! Axis-aligned rectangle with inclusive right/bottom edges.
//!
//! A rectangle is stored as its four edges. The right and bottom edges are
//! part of the rectangle, so a one-pixel rectangle has `left == right` and
//! `width() == 1`.

/// An axis-aligned rectangle with inclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl Rect {
    /// The rectangle with all edges at zero (one pixel at the origin).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The zero-sized rectangle at the origin, as `from_xywh(0, 0, 0, 0)`.
    pub const EMPTY: Self = Self::new(0.0, 0.0, -1.0, -1.0);

    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        let mut rect = Self::ZERO;
        rect.set_position_and_size(x, y, width, height);
        rect
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.left
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.right
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    /// Alias for [`left`](Self::left).
    #[inline]
    pub fn x(&self) -> f32 {
        self.left
    }

    /// Alias for [`top`](Self::top).
    #[inline]
    pub fn y(&self) -> f32 {
        self.top
    }

    pub fn set_left(&mut self, left: f32) {
        self.left = left;
    }

    pub fn set_top(&mut self, top: f32) {
        self.top = top;
    }

    pub fn set_right(&mut self, right: f32) {
        self.right = right;
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.bottom = bottom;
    }

    /// Returns `right - left + 1`.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left + 1.0
    }

    /// Returns `bottom - top + 1`.
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top + 1.0
    }

    /// Moves the right edge so the rectangle has the given width.
    pub fn set_width(&mut self, width: f32) {
        self.right = self.left + width - 1.0;
    }

    /// Moves the bottom edge so the rectangle has the given height.
    pub fn set_height(&mut self, height: f32) {
        self.bottom = self.top + height - 1.0;
    }

    /// Sets all four edges at once.
    pub fn set(&mut self, left: f32, top: f32, right: f32, bottom: f32) {
        *self = Self::new(left, top, right, bottom);
    }

    /// Sets the top-left corner and the size.
    pub fn set_position_and_size(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.left = x;
        self.top = y;
        self.right = x + width - 1.0;
        self.bottom = y + height - 1.0;
    }

    /// Moves the left edge to `x`, keeping the width.
    pub fn set_x(&mut self, x: f32) {
        self.right = x + self.width() - 1.0;
        self.left = x;
    }

    /// Moves the top edge to `y`, keeping the height.
    pub fn set_y(&mut self, y: f32) {
        self.bottom = y + self.height() - 1.0;
        self.top = y;
    }

    /// Returns a copy moved by the given offsets.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Tests whether the point lies inside the rectangle, edges included.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Tests whether two rectangles overlap.
    pub fn intersects(&self, other: &Self) -> bool {
        other.left <= self.right
            && other.right >= self.left
            && other.top <= self.bottom
            && other.bottom >= self.top
    }
}
