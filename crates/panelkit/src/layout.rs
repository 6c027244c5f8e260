use glam::IVec2;

use crate::primitives::Rect;

/// Inset from each edge of a rectangle, used for margins, padding and border thickness
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    pub const ZERO: Self = Self::all(0);

    /// Create padding from individual left, top, right, bottom values
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create padding with all sides equal
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create padding with symmetric horizontal and vertical values
    ///
    /// ```
    /// # use panelkit::Padding;
    /// let padding = Padding::symmetric(10, 20);
    /// assert_eq!(padding.left, 10);
    /// assert_eq!(padding.right, 10);
    /// assert_eq!(padding.top, 20);
    /// assert_eq!(padding.bottom, 20);
    /// ```
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Left plus right
    pub const fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Top plus bottom
    pub const fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}

/// Horizontal placement within a rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement within a rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// One of nine anchor points inside a rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentAlignment {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ContentAlignment {
    pub const fn horizontal(self) -> HorizontalAlign {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => HorizontalAlign::Left,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => HorizontalAlign::Center,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => HorizontalAlign::Right,
        }
    }

    pub const fn vertical(self) -> VerticalAlign {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalAlign::Top,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => VerticalAlign::Middle,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalAlign::Bottom,
        }
    }

    pub const fn from_parts(h: HorizontalAlign, v: VerticalAlign) -> Self {
        match (v, h) {
            (VerticalAlign::Top, HorizontalAlign::Left) => Self::TopLeft,
            (VerticalAlign::Top, HorizontalAlign::Center) => Self::TopCenter,
            (VerticalAlign::Top, HorizontalAlign::Right) => Self::TopRight,
            (VerticalAlign::Middle, HorizontalAlign::Left) => Self::MiddleLeft,
            (VerticalAlign::Middle, HorizontalAlign::Center) => Self::MiddleCenter,
            (VerticalAlign::Middle, HorizontalAlign::Right) => Self::MiddleRight,
            (VerticalAlign::Bottom, HorizontalAlign::Left) => Self::BottomLeft,
            (VerticalAlign::Bottom, HorizontalAlign::Center) => Self::BottomCenter,
            (VerticalAlign::Bottom, HorizontalAlign::Right) => Self::BottomRight,
        }
    }
}

/// Place a rectangle of `inner` size inside `outer` at `alignment`
///
/// Centering truncates toward zero, so odd leftovers favour the start edge.
pub fn align_inside(inner: IVec2, outer: Rect, alignment: ContentAlignment) -> Rect {
    let x = match alignment.horizontal() {
        HorizontalAlign::Left => outer.x,
        HorizontalAlign::Center => outer.x + (outer.width - inner.x) / 2,
        HorizontalAlign::Right => outer.right() - inner.x,
    };
    let y = match alignment.vertical() {
        VerticalAlign::Top => outer.y,
        VerticalAlign::Middle => outer.y + (outer.height - inner.y) / 2,
        VerticalAlign::Bottom => outer.bottom() - inner.y,
    };
    Rect::new(x, y, inner.x, inner.y)
}

/// Which container edges a child tracks when the container is resized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorStyle {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl AnchorStyle {
    pub const NONE: Self = Self::new(false, false, false, false);
    pub const TOP_LEFT: Self = Self::new(true, true, false, false);
    pub const TOP_RIGHT: Self = Self::new(false, true, true, false);
    pub const BOTTOM_LEFT: Self = Self::new(true, false, false, true);
    pub const BOTTOM_RIGHT: Self = Self::new(false, false, true, true);
    pub const ALL: Self = Self::new(true, true, true, true);

    pub const fn new(left: bool, top: bool, right: bool, bottom: bool) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn with_left(mut self, left: bool) -> Self {
        self.left = left;
        self
    }

    pub const fn with_top(mut self, top: bool) -> Self {
        self.top = top;
        self
    }

    pub const fn with_right(mut self, right: bool) -> Self {
        self.right = right;
        self
    }

    pub const fn with_bottom(mut self, bottom: bool) -> Self {
        self.bottom = bottom;
        self
    }

    /// Apply a container resize from `old` to `new` to a child's bounds
    ///
    /// Left+Right stretches the child, Left alone follows the container origin,
    /// Right alone follows the total width change. The vertical axis mirrors this.
    pub fn resize(&self, child: Rect, old: Rect, new: Rect) -> Rect {
        let dx = new.x - old.x;
        let dy = new.y - old.y;
        let dw = new.width - old.width;
        let dh = new.height - old.height;

        let (x, width) = resize_axis(child.x, child.width, dx, dw, self.left, self.right);
        let (y, height) = resize_axis(child.y, child.height, dy, dh, self.top, self.bottom);
        Rect::new(x, y, width, height)
    }
}

impl Default for AnchorStyle {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

fn resize_axis(
    start: i32,
    size: i32,
    delta_pos: i32,
    delta_size: i32,
    near: bool,
    far: bool,
) -> (i32, i32) {
    match (near, far) {
        (true, true) => (start + delta_pos, size + delta_size - delta_pos),
        (true, false) => (start + delta_pos, size),
        (false, true) => (start + delta_size, size),
        (false, false) => (start, size),
    }
}
