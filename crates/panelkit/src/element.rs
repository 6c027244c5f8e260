use glam::IVec2;

use crate::border::Border;
use crate::color::Color;
use crate::layout::{AnchorStyle, Padding};
use crate::primitives::Rect;
use crate::table::{CellPosition, TableLayout, TrackStyle};
use crate::widgets::Widget;

slotmap::new_key_type! {
    /// Handle to an element stored in a [`Gui`](crate::Gui)
    pub struct ElementId;
}

/// Layout metadata a container keeps for one child
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Placement {
    /// The container never moves this child
    #[default]
    Free,
    /// Track the given container edges on resize
    Anchored(AnchorStyle),
    /// Occupy a table cell (or span of cells)
    Cell(CellPosition),
}

/// A child handle together with its placement in the container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChildSlot {
    pub id: ElementId,
    pub placement: Placement,
}

/// How a container positions its children
#[derive(Debug, Clone, PartialEq)]
pub enum ContainerKind {
    /// Children keep whatever bounds they were given
    Panel,
    /// Children follow the container edges named by their anchor style
    Anchored,
    /// Children are placed into resolved table cells
    Table(TableLayout),
}

/// An ordered list of children; later children draw on top and hit-test first
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub(crate) kind: ContainerKind,
    pub(crate) children: Vec<ChildSlot>,
}

impl Container {
    pub fn kind(&self) -> &ContainerKind {
        &self.kind
    }

    pub fn children(&self) -> &[ChildSlot] {
        &self.children
    }

    pub fn table(&self) -> Option<&TableLayout> {
        match &self.kind {
            ContainerKind::Table(table) => Some(table),
            _ => None,
        }
    }

    pub(crate) fn slot_mut(&mut self, child: ElementId) -> Option<&mut ChildSlot> {
        self.children.iter_mut().find(|slot| slot.id == child)
    }
}

pub(crate) enum Body {
    Widget(Box<dyn Widget>),
    Container(Container),
}

/// A node in the UI tree
///
/// Bounds are relative to the parent's content origin. Everything screen-space
/// is derived by the owning [`Gui`](crate::Gui), which also owns the parent link.
pub struct Element {
    pub(crate) name: String,
    pub(crate) bounds: Rect,
    pub(crate) back_colour: Color,
    pub(crate) margin: Padding,
    pub(crate) padding: Padding,
    pub(crate) border: Option<Box<dyn Border>>,
    pub(crate) parent: Option<ElementId>,
    pub(crate) body: Body,
}

impl Element {
    fn with_body(body: Body) -> Self {
        Self {
            name: String::new(),
            bounds: Rect::EMPTY,
            back_colour: Color::transparent(),
            margin: Padding::ZERO,
            padding: Padding::ZERO,
            border: None,
            parent: None,
            body,
        }
    }

    /// A plain container; children keep their assigned bounds
    pub fn panel() -> Self {
        Self::with_body(Body::Container(Container {
            kind: ContainerKind::Panel,
            children: Vec::new(),
        }))
    }

    /// A container that moves and stretches anchored children on resize
    pub fn anchored_panel() -> Self {
        Self::with_body(Body::Container(Container {
            kind: ContainerKind::Anchored,
            children: Vec::new(),
        }))
    }

    /// A grid container with the given column and row styles
    pub fn table(columns: Vec<TrackStyle>, rows: Vec<TrackStyle>) -> Self {
        Self::with_body(Body::Container(Container {
            kind: ContainerKind::Table(TableLayout::new(columns, rows)),
            children: Vec::new(),
        }))
    }

    /// A leaf element painted by `widget`
    pub fn widget(widget: impl Widget) -> Self {
        Self::with_body(Body::Widget(Box::new(widget)))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the bounds; a non-positive width or height snaps to zero
    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = normalize(bounds);
        self
    }

    pub fn with_back_colour(mut self, colour: Color) -> Self {
        self.back_colour = colour;
        self
    }

    pub fn with_margin(mut self, margin: Padding) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_border(mut self, border: impl Border + 'static) -> Self {
        self.border = Some(Box::new(border));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn back_colour(&self) -> Color {
        self.back_colour
    }

    pub fn margin(&self) -> Padding {
        self.margin
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn border(&self) -> Option<&dyn Border> {
        self.border.as_deref()
    }

    /// The containing element, if attached
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn container(&self) -> Option<&Container> {
        match &self.body {
            Body::Container(container) => Some(container),
            Body::Widget(_) => None,
        }
    }

    pub(crate) fn container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.body {
            Body::Container(container) => Some(container),
            Body::Widget(_) => None,
        }
    }

    pub fn widget_ref(&self) -> Option<&dyn Widget> {
        match &self.body {
            Body::Widget(widget) => Some(widget.as_ref()),
            Body::Container(_) => None,
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self.body, Body::Container(_))
    }

    /// Space consumed by the border on each edge
    pub fn border_thickness(&self) -> Padding {
        self.border
            .as_ref()
            .map(|border| border.thickness())
            .unwrap_or_default()
    }

    /// Bounds minus margin, border and padding, in the same space as `bounds`
    ///
    /// Empty as soon as any of the three insets exhausts the area.
    pub fn content_bounds(&self) -> Rect {
        let mut rect = self.bounds;
        for inset in [self.margin, self.border_thickness(), self.padding] {
            rect = rect.shrink_padding(inset);
            if rect.is_empty() {
                return Rect::EMPTY;
            }
        }
        rect
    }
}

impl std::fmt::Debug for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("bounds", &self.bounds)
            .field("margin", &self.margin)
            .field("padding", &self.padding)
            .field("border", &self.border)
            .field("parent", &self.parent)
            .field("container", &self.container())
            .finish()
    }
}

/// Snap a non-positive size to zero
pub(crate) fn normalize(bounds: Rect) -> Rect {
    bounds.with_size(bounds.size().max(IVec2::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::border::SolidBorder;
    use crate::color::css;

    #[test]
    fn test_negative_size_snaps_to_zero() {
        let element = Element::panel().with_bounds(Rect::new(5, 5, -10, 20));
        assert_eq!(element.bounds(), Rect::new(5, 5, 0, 20));
    }

    #[test]
    fn test_content_bounds_subtracts_margin_border_padding() {
        let element = Element::panel()
            .with_bounds(Rect::new(10, 10, 100, 80))
            .with_margin(Padding::all(2))
            .with_border(SolidBorder::new(css::WHITE, 3))
            .with_padding(Padding::new(1, 2, 3, 4));

        assert_eq!(element.content_bounds(), Rect::new(16, 17, 86, 64));
    }

    #[test]
    fn test_content_bounds_empty_when_exhausted() {
        let element = Element::panel()
            .with_bounds(Rect::new(0, 0, 10, 10))
            .with_margin(Padding::all(3))
            .with_padding(Padding::all(2));
        assert_eq!(element.content_bounds(), Rect::EMPTY);
    }

    #[test]
    fn test_body_kinds() {
        assert!(Element::panel().is_container());
        assert!(Element::table(vec![], vec![]).container().and_then(Container::table).is_some());
        assert!(Element::widget(crate::widgets::Label::new("x", Default::default()))
            .widget_ref()
            .is_some());
    }
}
