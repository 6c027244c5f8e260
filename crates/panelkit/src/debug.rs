use crate::color::Color;
use crate::layout::Padding;
use crate::primitives::Rect;
use crate::surface::Surface;

/// Configuration for debug visualization
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DebugOptions {
    /// Show margin areas (red overlay)
    pub show_margins: bool,
    /// Show padding areas (blue overlay)
    pub show_padding: bool,
    /// Show element bounds (green outline)
    pub show_bounds: bool,
    /// Show content areas (yellow outline)
    pub show_content_area: bool,
    /// Show the clip rect each element drew under (red outline)
    pub show_clip_rects: bool,
}

impl DebugOptions {
    /// Create debug options with nothing enabled
    pub const fn none() -> Self {
        Self {
            show_margins: false,
            show_padding: false,
            show_bounds: false,
            show_content_area: false,
            show_clip_rects: false,
        }
    }

    /// Create debug options with all visualizations enabled
    pub const fn all() -> Self {
        Self {
            show_margins: true,
            show_padding: true,
            show_bounds: true,
            show_content_area: true,
            show_clip_rects: true,
        }
    }

    pub const fn with_margins(mut self, enabled: bool) -> Self {
        self.show_margins = enabled;
        self
    }

    pub const fn with_padding(mut self, enabled: bool) -> Self {
        self.show_padding = enabled;
        self
    }

    pub const fn with_bounds(mut self, enabled: bool) -> Self {
        self.show_bounds = enabled;
        self
    }

    pub const fn with_content_area(mut self, enabled: bool) -> Self {
        self.show_content_area = enabled;
        self
    }

    pub const fn with_clip_rects(mut self, enabled: bool) -> Self {
        self.show_clip_rects = enabled;
        self
    }

    /// Check if any debug visualization is enabled
    pub const fn is_enabled(&self) -> bool {
        self.show_margins
            || self.show_padding
            || self.show_bounds
            || self.show_content_area
            || self.show_clip_rects
    }
}

const MARGIN_COLOR: Color = Color::rgba(1.0, 0.0, 0.0, 0.2);
const PADDING_COLOR: Color = Color::rgba(0.0, 0.0, 1.0, 0.2);
const BOUNDS_COLOR: Color = Color::rgba(0.0, 1.0, 0.0, 0.5);
const CONTENT_COLOR: Color = Color::rgba(1.0, 1.0, 0.0, 0.5);
const CLIP_COLOR: Color = Color::rgba(1.0, 0.0, 0.0, 0.5);

/// Screen-space geometry of one element, as needed by the overlay
pub(crate) struct DebugGeometry {
    pub bounds: Rect,
    pub margin: Padding,
    pub border: Padding,
    pub padding: Padding,
    pub content: Rect,
    pub clip: Rect,
}

pub(crate) fn draw_overlay(options: &DebugOptions, geometry: &DebugGeometry, surface: &mut dyn Surface) {
    if options.show_margins {
        fill_ring(surface, geometry.bounds, geometry.margin, MARGIN_COLOR);
    }

    if options.show_padding {
        let inside_border = geometry
            .bounds
            .shrink_padding(geometry.margin)
            .shrink_padding(geometry.border);
        fill_ring(surface, inside_border, geometry.padding, PADDING_COLOR);
    }

    if options.show_bounds {
        surface.draw_rectangle_outline(geometry.bounds, BOUNDS_COLOR, 1, true);
    }

    if options.show_content_area && !geometry.content.is_empty() {
        surface.draw_rectangle_outline(geometry.content, CONTENT_COLOR, 1, true);
    }

    if options.show_clip_rects {
        surface.draw_rectangle_outline(geometry.clip, CLIP_COLOR, 1, true);
    }
}

/// Fill the band between `outer` and `outer` shrunk by `inset`
fn fill_ring(surface: &mut dyn Surface, outer: Rect, inset: Padding, color: Color) {
    let (top, rest) = outer.slice_top(inset.top);
    let (bottom, rest) = rest.slice_bottom(inset.bottom);
    let (left, rest) = rest.slice_left(inset.left);
    let (right, _) = rest.slice_right(inset.right);

    for (edge, amount) in [
        (top, inset.top),
        (bottom, inset.bottom),
        (left, inset.left),
        (right, inset.right),
    ] {
        if amount > 0 && !edge.is_empty() {
            surface.fill_rectangle(edge, color);
        }
    }
}
