use glam::IVec2;

use crate::layout::Padding;

/// An integer point in either local or screen space
pub type Point = IVec2;

/// Axis-aligned integer rectangle defined by its origin and size
///
/// A rectangle with a non-positive width or height is *empty*. Empty rectangles
/// never contain anything, are never drawn, and slice into nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// The canonical empty rectangle
    pub const EMPTY: Self = Self::new(0, 0, 0, 0);

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_location_size(location: Point, size: IVec2) -> Self {
        Self::new(location.x, location.y, size.x, size.y)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn location(&self) -> Point {
        IVec2::new(self.x, self.y)
    }

    pub const fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Center point, truncated toward the origin
    pub const fn center(&self) -> Point {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub const fn with_location(mut self, location: Point) -> Self {
        self.x = location.x;
        self.y = location.y;
        self
    }

    pub const fn with_size(mut self, size: IVec2) -> Self {
        self.width = size.x;
        self.height = size.y;
        self
    }

    /// Translate the rectangle by `by`
    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y, self.width, self.height)
    }

    /// Check if a point is inside this rectangle (right and bottom edges exclusive)
    pub fn contains_point(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x < self.right()
            && point.y >= self.y
            && point.y < self.bottom()
    }

    /// Check if `other` lies entirely within this rectangle
    pub fn contains_rect(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.intersection(other).is_empty()
    }

    /// Overlapping area of both rectangles, or [`Rect::EMPTY`] if they do not overlap
    pub fn intersection(&self, other: &Rect) -> Rect {
        if self.is_empty() || other.is_empty() {
            return Rect::EMPTY;
        }

        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right > left && bottom > top {
            Rect::new(left, top, right - left, bottom - top)
        } else {
            Rect::EMPTY
        }
    }

    /// Move each edge outward by its own amount
    ///
    /// Left and top move the origin and grow the size; right and bottom only grow
    /// the size. Negative amounts shrink.
    pub fn inflate(self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        let mut rect = self;
        if left != 0 {
            rect.x -= left;
            rect.width += left;
        }
        if top != 0 {
            rect.y -= top;
            rect.height += top;
        }
        if right != 0 {
            rect.width += right;
        }
        if bottom != 0 {
            rect.height += bottom;
        }
        rect
    }

    pub fn inflate_all(self, amount: i32) -> Self {
        self.inflate(amount, amount, amount, amount)
    }

    pub fn inflate_padding(self, padding: Padding) -> Self {
        self.inflate(padding.left, padding.top, padding.right, padding.bottom)
    }

    /// Move each edge inward by its own amount
    pub fn shrink(self, left: i32, top: i32, right: i32, bottom: i32) -> Self {
        self.inflate(-left, -top, -right, -bottom)
    }

    pub fn shrink_all(self, amount: i32) -> Self {
        self.inflate_all(-amount)
    }

    pub fn shrink_padding(self, padding: Padding) -> Self {
        self.shrink(padding.left, padding.top, padding.right, padding.bottom)
    }

    /// Cut `amount` pixels off the left edge, returning `(slice, remainder)`
    ///
    /// An empty source or a negative amount yields two empty rectangles. An amount
    /// covering the full width yields the whole source and an empty remainder.
    pub fn slice_left(self, amount: i32) -> (Rect, Rect) {
        if self.is_empty() || amount < 0 {
            return (Rect::EMPTY, Rect::EMPTY);
        }
        if amount >= self.width {
            return (self, Rect::EMPTY);
        }

        (
            Rect::new(self.x, self.y, amount, self.height),
            Rect::new(self.x + amount, self.y, self.width - amount, self.height),
        )
    }

    /// Cut `amount` pixels off the right edge, returning `(slice, remainder)`
    pub fn slice_right(self, amount: i32) -> (Rect, Rect) {
        if self.is_empty() || amount < 0 {
            return (Rect::EMPTY, Rect::EMPTY);
        }
        if amount >= self.width {
            return (self, Rect::EMPTY);
        }

        (
            Rect::new(self.right() - amount, self.y, amount, self.height),
            Rect::new(self.x, self.y, self.width - amount, self.height),
        )
    }

    /// Cut `amount` pixels off the top edge, returning `(slice, remainder)`
    pub fn slice_top(self, amount: i32) -> (Rect, Rect) {
        if self.is_empty() || amount < 0 {
            return (Rect::EMPTY, Rect::EMPTY);
        }
        if amount >= self.height {
            return (self, Rect::EMPTY);
        }

        (
            Rect::new(self.x, self.y, self.width, amount),
            Rect::new(self.x, self.y + amount, self.width, self.height - amount),
        )
    }

    /// Cut `amount` pixels off the bottom edge, returning `(slice, remainder)`
    pub fn slice_bottom(self, amount: i32) -> (Rect, Rect) {
        if self.is_empty() || amount < 0 {
            return (Rect::EMPTY, Rect::EMPTY);
        }
        if amount >= self.height {
            return (self, Rect::EMPTY);
        }

        (
            Rect::new(self.x, self.bottom() - amount, self.width, amount),
            Rect::new(self.x, self.y, self.width, self.height - amount),
        )
    }

    pub fn slice_left_percent(self, percent: f32) -> (Rect, Rect) {
        self.slice_left(percent_of(self.width, percent))
    }

    pub fn slice_right_percent(self, percent: f32) -> (Rect, Rect) {
        self.slice_right(percent_of(self.width, percent))
    }

    pub fn slice_top_percent(self, percent: f32) -> (Rect, Rect) {
        self.slice_top(percent_of(self.height, percent))
    }

    pub fn slice_bottom_percent(self, percent: f32) -> (Rect, Rect) {
        self.slice_bottom(percent_of(self.height, percent))
    }
}

fn percent_of(dimension: i32, percent: f32) -> i32 {
    (dimension as f32 * percent).floor() as i32
}
