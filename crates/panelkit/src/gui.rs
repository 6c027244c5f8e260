//! The element tree.
//!
//! [`Gui`] owns every element in an arena and is the only place parent links
//! are written. Containers own their children positionally (a list of
//! [`ChildSlot`]s); children only hold the parent's id. Screen-space geometry
//! is derived on demand by walking parent links.
//!
//! Layout is container driven: changing a container's bounds re-lays-out its
//! children (anchor deltas or table cells), and that recurses as each child's
//! bounds change. A child changing its own bounds never pushes back upward.

use glam::IVec2;
use slotmap::SlotMap;

use crate::border::Border;
use crate::color::Color;
use crate::debug::{draw_overlay, DebugGeometry, DebugOptions};
use crate::element::{normalize, Body, ChildSlot, ContainerKind, Element, ElementId, Placement};
use crate::error::TreeError;
use crate::layout::{AnchorStyle, Padding};
use crate::primitives::{Point, Rect};
use crate::surface::{ClipGuard, Surface};
use crate::table::{CellPosition, TableLayout, TrackStyle};
use crate::widgets::Widget;

/// Retained UI tree rooted at a plain panel
pub struct Gui {
    elements: SlotMap<ElementId, Element>,
    root: ElementId,
    debug_options: DebugOptions,
}

impl Gui {
    /// Create a tree whose root panel covers `bounds`
    pub fn new(bounds: Rect) -> Self {
        let mut elements = SlotMap::with_key();
        let root = elements.insert(Element::panel().with_name("root").with_bounds(bounds));
        Self {
            elements,
            root,
            debug_options: DebugOptions::none(),
        }
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn debug_options(&self) -> DebugOptions {
        self.debug_options
    }

    pub fn set_debug_options(&mut self, options: DebugOptions) {
        self.debug_options = options;
    }

    /// Resize the root panel to cover a new screen size
    pub fn resize(&mut self, size: IVec2) -> bool {
        let bounds = self.bounds(self.root).with_size(size);
        self.set_bounds(self.root, bounds)
    }

    // ---------------------------------------------------------------------
    // Tree structure
    // ---------------------------------------------------------------------

    /// Store a detached element; attach it with one of the `add_*` methods
    ///
    /// Tables resolve their tracks here, so widths are available before any
    /// child is placed.
    pub fn insert(&mut self, element: Element) -> ElementId {
        let id = self.elements.insert(element);
        self.layout_table(id, false);
        id
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.elements.get(id).and_then(|e| e.parent)
    }

    /// Children of `id` in z-order (bottom first); empty for leaves and unknown ids
    pub fn children(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.slots(id).iter().map(|slot| slot.id)
    }

    fn slots(&self, id: ElementId) -> &[ChildSlot] {
        self.elements
            .get(id)
            .and_then(Element::container)
            .map(|c| c.children())
            .unwrap_or(&[])
    }

    /// Placement metadata `parent` keeps for `child`
    pub fn placement(&self, parent: ElementId, child: ElementId) -> Option<Placement> {
        self.slots(parent)
            .iter()
            .find(|slot| slot.id == child)
            .map(|slot| slot.placement)
    }

    /// Append `child` on top of `parent`'s children without layout metadata
    pub fn add_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), TreeError> {
        self.attach(parent, child, Placement::Free)
    }

    /// Append `child` to an anchored panel, tracking the edges in `anchor`
    pub fn add_anchored(
        &mut self,
        parent: ElementId,
        child: ElementId,
        anchor: AnchorStyle,
    ) -> Result<(), TreeError> {
        self.attach(parent, child, Placement::Anchored(anchor))
    }

    /// Append `child` to a table panel and place it into `cell`
    pub fn add_to_cell(
        &mut self,
        parent: ElementId,
        child: ElementId,
        cell: CellPosition,
    ) -> Result<(), TreeError> {
        self.attach(parent, child, Placement::Cell(cell))
    }

    /// Insert `element` and attach it to `parent` in one step
    pub fn add(
        &mut self,
        parent: ElementId,
        element: Element,
        placement: Placement,
    ) -> Result<ElementId, TreeError> {
        let id = self.insert(element);
        if let Err(err) = self.attach(parent, id, placement) {
            self.elements.remove(id);
            return Err(err);
        }
        Ok(id)
    }

    fn attach(
        &mut self,
        parent: ElementId,
        child: ElementId,
        placement: Placement,
    ) -> Result<(), TreeError> {
        if child == self.root {
            return Err(TreeError::RootRemoval);
        }
        let Some(child_element) = self.elements.get(child) else {
            return Err(TreeError::UnknownElement(child));
        };
        if child_element.parent.is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        let Some(parent_element) = self.elements.get(parent) else {
            return Err(TreeError::UnknownElement(parent));
        };
        if !parent_element.is_container() {
            log::warn!("cannot add {child:?} to leaf element {parent:?}");
            return Err(TreeError::NotAContainer(parent));
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(TreeError::WouldCycle);
        }

        if let Some(container) = self.elements[parent].container_mut() {
            let honoured = matches!(
                (&container.kind, placement),
                (_, Placement::Free)
                    | (ContainerKind::Anchored, Placement::Anchored(_))
                    | (ContainerKind::Table(_), Placement::Cell(_))
            );
            if !honoured {
                log::warn!("{placement:?} has no effect in a {:?} container", container.kind);
            }
            container.children.push(ChildSlot {
                id: child,
                placement,
            });
        }
        self.elements[child].parent = Some(parent);
        log::debug!("attached {child:?} to {parent:?} as {placement:?}");

        if let Placement::Cell(cell) = placement {
            self.place_in_cell(parent, child, cell);
        }
        Ok(())
    }

    /// Detach `child` from `parent`, dropping its slot metadata
    ///
    /// The child stays alive in the arena and can be attached elsewhere.
    pub fn remove_child(&mut self, parent: ElementId, child: ElementId) -> Result<(), TreeError> {
        let container = self
            .elements
            .get_mut(parent)
            .ok_or(TreeError::UnknownElement(parent))?
            .container_mut()
            .ok_or(TreeError::NotAContainer(parent))?;
        let index = container
            .children
            .iter()
            .position(|slot| slot.id == child)
            .ok_or(TreeError::NotAChild { parent, child })?;
        container.children.remove(index);

        if let Some(element) = self.elements.get_mut(child) {
            element.parent = None;
        }
        log::debug!("detached {child:?} from {parent:?}");
        Ok(())
    }

    /// Detach `id` from its parent and drop it together with its whole subtree
    pub fn remove(&mut self, id: ElementId) -> Result<(), TreeError> {
        if id == self.root {
            return Err(TreeError::RootRemoval);
        }
        if !self.elements.contains_key(id) {
            return Err(TreeError::UnknownElement(id));
        }
        if let Some(parent) = self.parent(id) {
            self.remove_child(parent, id)?;
        }

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(element) = self.elements.remove(next) {
                if let Some(container) = element.container() {
                    pending.extend(container.children().iter().map(|slot| slot.id));
                }
            }
        }
        Ok(())
    }

    fn is_ancestor_or_self(&self, candidate: ElementId, of: ElementId) -> bool {
        let mut current = Some(of);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Change the anchor style `parent` applies to `child`
    pub fn set_anchor(
        &mut self,
        parent: ElementId,
        child: ElementId,
        anchor: AnchorStyle,
    ) -> Result<(), TreeError> {
        self.slot_mut(parent, child)?.placement = Placement::Anchored(anchor);
        Ok(())
    }

    /// Move `child` to another cell of its table and re-place it
    pub fn set_cell(
        &mut self,
        parent: ElementId,
        child: ElementId,
        cell: CellPosition,
    ) -> Result<(), TreeError> {
        self.slot_mut(parent, child)?.placement = Placement::Cell(cell);
        self.place_in_cell(parent, child, cell);
        Ok(())
    }

    fn slot_mut(&mut self, parent: ElementId, child: ElementId) -> Result<&mut ChildSlot, TreeError> {
        self.elements
            .get_mut(parent)
            .ok_or(TreeError::UnknownElement(parent))?
            .container_mut()
            .ok_or(TreeError::NotAContainer(parent))?
            .slot_mut(child)
            .ok_or(TreeError::NotAChild { parent, child })
    }

    // ---------------------------------------------------------------------
    // Lookup
    // ---------------------------------------------------------------------

    /// First element named `name`, depth first from the root
    pub fn find(&self, name: &str) -> Option<ElementId> {
        self.find_in(self.root, name)
    }

    /// First element named `name` in the subtree rooted at `id` (including `id`)
    pub fn find_in(&self, id: ElementId, name: &str) -> Option<ElementId> {
        let element = self.elements.get(id)?;
        if element.name == name {
            return Some(id);
        }
        self.slots(id)
            .iter()
            .find_map(|slot| self.find_in(slot.id, name))
    }

    /// Typed access to the widget behind a leaf element
    pub fn widget<W: Widget>(&self, id: ElementId) -> Option<&W> {
        match &self.elements.get(id)?.body {
            Body::Widget(widget) => widget.as_any().downcast_ref::<W>(),
            Body::Container(_) => None,
        }
    }

    pub fn widget_mut<W: Widget>(&mut self, id: ElementId) -> Option<&mut W> {
        match &mut self.elements.get_mut(id)?.body {
            Body::Widget(widget) => widget.as_any_mut().downcast_mut::<W>(),
            Body::Container(_) => None,
        }
    }

    pub fn table(&self, id: ElementId) -> Option<&TableLayout> {
        self.elements.get(id)?.container()?.table()
    }

    /// Resolved column widths of a table panel (empty for anything else)
    pub fn column_widths(&self, id: ElementId) -> &[i32] {
        self.table(id).map(TableLayout::column_widths).unwrap_or(&[])
    }

    /// Resolved row heights of a table panel (empty for anything else)
    pub fn row_heights(&self, id: ElementId) -> &[i32] {
        self.table(id).map(TableLayout::row_heights).unwrap_or(&[])
    }

    // ---------------------------------------------------------------------
    // Properties
    // ---------------------------------------------------------------------

    pub fn name(&self, id: ElementId) -> Option<&str> {
        self.elements.get(id).map(Element::name)
    }

    pub fn set_name(&mut self, id: ElementId, name: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.name = name.into();
        }
    }

    /// Local bounds, relative to the parent's content origin
    pub fn bounds(&self, id: ElementId) -> Rect {
        self.elements.get(id).map(Element::bounds).unwrap_or_default()
    }

    /// Set local bounds and re-lay-out children if `id` is a container
    ///
    /// Returns `false` when nothing changed. A non-positive size snaps to zero.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) -> bool {
        let bounds = normalize(bounds);
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        let old = element.bounds;
        if old == bounds {
            return false;
        }
        element.bounds = bounds;
        if let Body::Widget(widget) = &mut element.body {
            widget.bounds_changed(old, bounds);
        }

        self.bounds_changed(id, old, bounds);
        true
    }

    pub fn set_location(&mut self, id: ElementId, location: Point) -> bool {
        let bounds = self.bounds(id).with_location(location);
        self.set_bounds(id, bounds)
    }

    pub fn set_size(&mut self, id: ElementId, size: IVec2) -> bool {
        let bounds = self.bounds(id).with_size(size);
        self.set_bounds(id, bounds)
    }

    pub fn set_back_colour(&mut self, id: ElementId, colour: Color) -> bool {
        match self.elements.get_mut(id) {
            Some(element) if element.back_colour != colour => {
                element.back_colour = colour;
                true
            }
            _ => false,
        }
    }

    pub fn set_margin(&mut self, id: ElementId, margin: Padding) -> bool {
        match self.elements.get_mut(id) {
            Some(element) if element.margin != margin => {
                element.margin = margin;
                self.content_area_changed(id);
                true
            }
            _ => false,
        }
    }

    pub fn set_padding(&mut self, id: ElementId, padding: Padding) -> bool {
        match self.elements.get_mut(id) {
            Some(element) if element.padding != padding => {
                element.padding = padding;
                self.content_area_changed(id);
                true
            }
            _ => false,
        }
    }

    /// Replace the border; borders have no structural equality, so this always applies
    pub fn set_border(&mut self, id: ElementId, border: Option<Box<dyn Border>>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.border = border;
            self.content_area_changed(id);
        }
    }

    pub fn set_column_styles(&mut self, id: ElementId, styles: Vec<TrackStyle>) {
        if let Some(table) = self.table_mut(id) {
            table.set_column_styles(styles);
            self.layout_table(id, false);
        }
    }

    pub fn set_row_styles(&mut self, id: ElementId, styles: Vec<TrackStyle>) {
        if let Some(table) = self.table_mut(id) {
            table.set_row_styles(styles);
            self.layout_table(id, false);
        }
    }

    fn table_mut(&mut self, id: ElementId) -> Option<&mut TableLayout> {
        match &mut self.elements.get_mut(id)?.container_mut()?.kind {
            ContainerKind::Table(table) => Some(table),
            _ => None,
        }
    }

    // ---------------------------------------------------------------------
    // Layout
    // ---------------------------------------------------------------------

    fn bounds_changed(&mut self, id: ElementId, old: Rect, new: Rect) {
        let Some(container) = self.elements.get(id).and_then(Element::container) else {
            return;
        };
        match container.kind {
            ContainerKind::Panel => {}
            ContainerKind::Anchored => self.apply_anchors(id, old, new),
            ContainerKind::Table(_) => self.layout_table(id, false),
        }
    }

    fn content_area_changed(&mut self, id: ElementId) {
        let is_table = self
            .elements
            .get(id)
            .and_then(Element::container)
            .is_some_and(|c| c.table().is_some());
        if is_table {
            self.layout_table(id, false);
        }
    }

    fn apply_anchors(&mut self, id: ElementId, old: Rect, new: Rect) {
        let anchored: Vec<(ElementId, AnchorStyle)> = self
            .slots(id)
            .iter()
            .filter_map(|slot| match slot.placement {
                Placement::Anchored(anchor) => Some((slot.id, anchor)),
                _ => None,
            })
            .collect();

        for (child, anchor) in anchored {
            let before = self.bounds(child);
            let after = anchor.resize(before, old, new);
            log::trace!("anchor {anchor:?} moves {child:?} from {before:?} to {after:?}");
            self.set_bounds(child, after);
        }
    }

    /// Re-resolve a table's tracks; re-place children if they changed or `force` is set
    fn layout_table(&mut self, id: ElementId, force: bool) {
        let Some(element) = self.elements.get_mut(id) else {
            return;
        };
        let content = element.content_bounds().size();
        let Some(container) = element.container_mut() else {
            return;
        };
        let ContainerKind::Table(table) = &mut container.kind else {
            return;
        };

        let changed = table.resolve(content);
        if !changed && !force {
            return;
        }

        let placements: Vec<(ElementId, Rect)> = container
            .children
            .iter()
            .filter_map(|slot| match slot.placement {
                Placement::Cell(cell) => Some((slot.id, table.cell_rect(cell))),
                _ => None,
            })
            .collect();

        for (child, rect) in placements {
            log::trace!("table {id:?} places {child:?} at {rect:?}");
            self.set_bounds(child, rect);
        }
    }

    fn place_in_cell(&mut self, parent: ElementId, child: ElementId, cell: CellPosition) {
        // Tracks may be stale if the content area changed since the last resolve
        self.layout_table(parent, false);
        if let Some(rect) = self.table(parent).map(|table| table.cell_rect(cell)) {
            self.set_bounds(child, rect);
        }
    }

    /// Re-resolve every table in the tree and re-place all cell children
    pub fn perform_layout(&mut self) {
        let mut pending = vec![self.root];
        while let Some(id) = pending.pop() {
            self.layout_table(id, true);
            pending.extend(self.children(id));
        }
    }

    // ---------------------------------------------------------------------
    // Derived geometry
    // ---------------------------------------------------------------------

    /// Bounds minus margin, border and padding, in local space
    pub fn content_bounds(&self, id: ElementId) -> Rect {
        self.elements
            .get(id)
            .map(Element::content_bounds)
            .unwrap_or_default()
    }

    /// Translation from `id`'s local space to screen space
    ///
    /// The sum of every ancestor's content origin.
    pub fn screen_offset(&self, id: ElementId) -> Point {
        let mut offset = Point::ZERO;
        let mut current = self.parent(id);
        while let Some(parent) = current {
            offset += self.content_bounds(parent).location();
            current = self.parent(parent);
        }
        offset
    }

    pub fn screen_bounds(&self, id: ElementId) -> Rect {
        self.bounds(id).offset(self.screen_offset(id))
    }

    pub fn screen_content_bounds(&self, id: ElementId) -> Rect {
        let content = self.content_bounds(id);
        if content.is_empty() {
            return Rect::EMPTY;
        }
        content.offset(self.screen_offset(id))
    }

    /// Convert a screen point into `id`'s content-local space
    pub fn to_content_local(&self, id: ElementId, point: Point) -> Point {
        point - self.screen_content_bounds(id).location()
    }

    // ---------------------------------------------------------------------
    // Hit testing
    // ---------------------------------------------------------------------

    /// Whether `point` lies inside `id`'s screen bounds
    pub fn hit_test(&self, id: ElementId, point: Point) -> bool {
        self.screen_bounds(id).contains_point(point)
    }

    /// Whether `rect` lies entirely inside `id`'s screen bounds
    pub fn hit_test_rect(&self, id: ElementId, rect: Rect) -> bool {
        self.screen_bounds(id).contains_rect(&rect)
    }

    /// Topmost element under `point`, searching the root's children
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.element_at_in(self.root, point)
    }

    /// Topmost element under `point` among `container`'s descendants
    ///
    /// Children are tested last-added first. A hit container answers with its own
    /// deepest hit descendant, or with itself when none of its children are hit;
    /// its earlier siblings are not consulted in that case.
    pub fn element_at_in(&self, container: ElementId, point: Point) -> Option<ElementId> {
        for slot in self.slots(container).iter().rev() {
            if !self.hit_test(slot.id, point) {
                continue;
            }
            let is_container = self
                .elements
                .get(slot.id)
                .is_some_and(Element::is_container);
            if is_container {
                return Some(self.element_at_in(slot.id, point).unwrap_or(slot.id));
            }
            return Some(slot.id);
        }
        None
    }

    // ---------------------------------------------------------------------
    // Frame
    // ---------------------------------------------------------------------

    /// Advance every element depth first, children in insertion order
    pub fn update(&mut self, dt: f32) {
        self.update_element(self.root, dt);
    }

    fn update_element(&mut self, id: ElementId, dt: f32) {
        let Some(element) = self.elements.get_mut(id) else {
            return;
        };
        if let Some(border) = element.border.as_mut() {
            border.update(dt);
        }
        if let Body::Widget(widget) = &mut element.body {
            widget.update(dt);
            return;
        }

        let mut index = 0;
        while let Some(child) = self.slots(id).get(index).map(|slot| slot.id) {
            self.update_element(child, dt);
            index += 1;
        }
    }

    /// Paint the whole tree onto `surface`
    ///
    /// Each element is clipped to its screen bounds intersected with the clip
    /// its parent drew under, not to its own bounds alone. A child overflowing
    /// its parent's content area is therefore cut off at that edge.
    pub fn draw(&self, surface: &mut dyn Surface) {
        if !surface.is_usable() {
            return;
        }
        let origin = self.screen_offset(self.root);
        self.draw_element(self.root, origin, surface);
    }

    /// Paint a single element (and its subtree) onto `surface`
    pub fn draw_subtree(&self, id: ElementId, surface: &mut dyn Surface) {
        if !surface.is_usable() {
            return;
        }
        self.draw_element(id, self.screen_offset(id), surface);
    }

    /// `origin` is the screen offset of `id`'s local space
    fn draw_element(&self, id: ElementId, origin: Point, surface: &mut dyn Surface) {
        let Some(element) = self.elements.get(id) else {
            return;
        };
        let screen_bounds = element.bounds.offset(origin);
        if screen_bounds.is_empty() {
            return;
        }

        let mut guard = ClipGuard::push(surface, screen_bounds);
        let clip = guard.clip();

        if !element.back_colour.is_transparent() {
            guard.fill_rectangle(screen_bounds, element.back_colour);
        }

        let content = element.content_bounds();
        let screen_content = if content.is_empty() {
            Rect::EMPTY
        } else {
            content.offset(origin)
        };

        if !screen_content.is_empty() {
            guard.narrow(screen_content);
            match &element.body {
                Body::Widget(widget) => widget.paint(&mut *guard, screen_content),
                Body::Container(container) => {
                    let child_origin = screen_content.location();
                    for slot in container.children() {
                        self.draw_element(slot.id, child_origin, &mut *guard);
                    }
                }
            }
            guard.reset(screen_bounds);
        }

        if let Some(border) = &element.border {
            border.draw(&mut *guard, screen_bounds);
        }

        if self.debug_options.is_enabled() {
            let geometry = DebugGeometry {
                bounds: screen_bounds,
                margin: element.margin,
                border: element.border_thickness(),
                padding: element.padding,
                content: screen_content,
                clip,
            };
            draw_overlay(&self.debug_options, &geometry, &mut *guard);
        }
    }
}

impl std::fmt::Debug for Gui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gui")
            .field("elements", &self.elements.len())
            .field("root", &self.root)
            .field("debug_options", &self.debug_options)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use super::*;
    use crate::border::SolidBorder;
    use crate::color::css;
    use crate::output::{DrawCommand, DrawList};
    use crate::surface::FontId;
    use crate::widgets::Label;

    fn screen() -> Gui {
        Gui::new(Rect::new(0, 0, 800, 600))
    }

    fn label(text: &str, bounds: Rect) -> Element {
        Element::widget(Label::new(text, FontId(0)))
            .with_name(text)
            .with_bounds(bounds)
    }

    #[derive(Default)]
    struct Probe {
        updates: u32,
        resizes: Vec<(Rect, Rect)>,
    }

    impl Widget for Probe {
        fn update(&mut self, _dt: f32) {
            self.updates += 1;
        }

        fn paint(&self, surface: &mut dyn Surface, content: Rect) {
            surface.fill_rectangle(content, css::LIME);
        }

        fn bounds_changed(&mut self, old: Rect, new: Rect) {
            self.resizes.push((old, new));
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn three_column_table(gui: &mut Gui) -> ElementId {
        let table = Element::table(
            vec![
                TrackStyle::px(50),
                TrackStyle::percent(50.0),
                TrackStyle::percent(50.0),
            ],
            vec![TrackStyle::percent(100.0)],
        )
        .with_name("table")
        .with_bounds(Rect::new(0, 0, 750, 600));
        gui.add(gui.root(), table, Placement::Free).unwrap()
    }

    #[test]
    fn test_table_places_cells_and_follows_resize() {
        let mut gui = screen();
        let table = three_column_table(&mut gui);
        let cell = gui.insert(label("cell", Rect::EMPTY));
        gui.add_to_cell(table, cell, CellPosition::new(2, 0)).unwrap();

        assert_eq!(gui.column_widths(table), &[50, 350, 350]);
        assert_eq!(gui.row_heights(table), &[600]);
        assert_eq!(gui.bounds(cell), Rect::new(400, 0, 350, 600));

        assert!(gui.set_size(table, IVec2::new(850, 600)));
        assert_eq!(gui.column_widths(table), &[50, 400, 400]);
        assert_eq!(gui.bounds(cell), Rect::new(450, 0, 400, 600));
    }

    #[test]
    fn test_table_padding_shrinks_tracks() {
        let mut gui = screen();
        let table = three_column_table(&mut gui);
        let cell = gui
            .add(table, label("cell", Rect::EMPTY), Placement::Cell(CellPosition::new(2, 0)))
            .unwrap();

        assert!(gui.set_padding(table, Padding::all(25)));
        assert_eq!(gui.column_widths(table), &[50, 325, 325]);
        assert_eq!(gui.bounds(cell), Rect::new(375, 0, 325, 550));
        assert!(!gui.set_padding(table, Padding::all(25)));
    }

    #[test]
    fn test_cell_span_and_move() {
        let mut gui = screen();
        let table = three_column_table(&mut gui);
        let cell = gui
            .add(
                table,
                label("wide", Rect::EMPTY),
                Placement::Cell(CellPosition::new(1, 0).with_span(2, 1)),
            )
            .unwrap();
        assert_eq!(gui.bounds(cell), Rect::new(50, 0, 700, 600));

        gui.set_cell(table, cell, CellPosition::new(0, 0)).unwrap();
        assert_eq!(gui.bounds(cell), Rect::new(0, 0, 50, 600));
        assert_eq!(
            gui.placement(table, cell),
            Some(Placement::Cell(CellPosition::new(0, 0)))
        );
    }

    #[test]
    fn test_column_styles_change_relayouts() {
        let mut gui = screen();
        let table = three_column_table(&mut gui);
        let cell = gui
            .add(table, label("cell", Rect::EMPTY), Placement::Cell(CellPosition::new(1, 0)))
            .unwrap();

        gui.set_column_styles(table, vec![TrackStyle::px(100), TrackStyle::percent(1.0)]);
        assert_eq!(gui.column_widths(table), &[100, 650]);
        assert_eq!(gui.bounds(cell), Rect::new(100, 0, 650, 600));
    }

    #[test]
    fn test_anchored_children_follow_resize() {
        let mut gui = screen();
        let panel = gui
            .add(
                gui.root(),
                Element::anchored_panel().with_bounds(Rect::new(0, 0, 100, 100)),
                Placement::Free,
            )
            .unwrap();
        let stretch = gui.insert(label("stretch", Rect::new(10, 10, 80, 80)));
        let corner = gui.insert(label("corner", Rect::new(70, 70, 20, 20)));
        let pinned = gui.insert(label("pinned", Rect::new(5, 5, 10, 10)));
        let free = gui.insert(label("free", Rect::new(50, 50, 10, 10)));
        gui.add_anchored(panel, stretch, AnchorStyle::ALL).unwrap();
        gui.add_anchored(panel, corner, AnchorStyle::BOTTOM_RIGHT).unwrap();
        gui.add_anchored(panel, pinned, AnchorStyle::TOP_LEFT).unwrap();
        gui.add_child(panel, free).unwrap();

        assert!(gui.set_bounds(panel, Rect::new(0, 0, 200, 150)));

        assert_eq!(gui.bounds(stretch), Rect::new(10, 10, 180, 130));
        assert_eq!(gui.bounds(corner), Rect::new(170, 120, 20, 20));
        assert_eq!(gui.bounds(pinned), Rect::new(5, 5, 10, 10));
        assert_eq!(gui.bounds(free), Rect::new(50, 50, 10, 10));
    }

    #[test]
    fn test_anchor_change_applies_on_next_resize() {
        let mut gui = screen();
        let panel = gui
            .add(
                gui.root(),
                Element::anchored_panel().with_bounds(Rect::new(0, 0, 100, 100)),
                Placement::Free,
            )
            .unwrap();
        let child = gui
            .add(
                panel,
                label("child", Rect::new(10, 10, 20, 20)),
                Placement::Anchored(AnchorStyle::TOP_LEFT),
            )
            .unwrap();

        gui.set_anchor(panel, child, AnchorStyle::TOP_RIGHT).unwrap();
        assert_eq!(gui.bounds(child), Rect::new(10, 10, 20, 20));
        gui.set_size(panel, IVec2::new(140, 100));
        assert_eq!(gui.bounds(child), Rect::new(50, 10, 20, 20));
    }

    #[test]
    fn test_topmost_child_wins_hit_test() {
        let mut gui = screen();
        let root = gui.root();
        let a = gui.add(root, label("a", Rect::new(10, 10, 100, 100)), Placement::Free).unwrap();
        let b = gui.add(root, label("b", Rect::new(50, 50, 100, 100)), Placement::Free).unwrap();

        assert_eq!(gui.element_at(Point::new(60, 60)), Some(b));
        assert_eq!(gui.element_at(Point::new(20, 20)), Some(a));
        assert_eq!(gui.element_at(Point::new(500, 500)), None);
        // far edges are exclusive
        assert_eq!(gui.element_at(Point::new(150, 150)), None);
    }

    #[test]
    fn test_hit_container_falls_back_to_itself() {
        let mut gui = screen();
        let root = gui.root();
        let panel = gui
            .add(root, Element::panel().with_bounds(Rect::new(200, 200, 100, 100)), Placement::Free)
            .unwrap();
        let inner = gui.add(panel, label("inner", Rect::new(10, 10, 20, 20)), Placement::Free).unwrap();

        assert_eq!(gui.element_at(Point::new(215, 215)), Some(inner));
        assert_eq!(gui.element_at(Point::new(250, 250)), Some(panel));
        assert!(gui.hit_test(inner, Point::new(210, 210)));
        assert!(!gui.hit_test(inner, Point::new(230, 210)));
        assert!(gui.hit_test_rect(panel, Rect::new(210, 210, 50, 50)));
        assert!(!gui.hit_test_rect(panel, Rect::new(250, 250, 100, 10)));
    }

    #[test]
    fn test_screen_geometry_composes_content_origins() {
        let mut gui = screen();
        let panel = gui
            .add(
                gui.root(),
                Element::panel()
                    .with_bounds(Rect::new(100, 50, 200, 200))
                    .with_margin(Padding::all(5))
                    .with_padding(Padding::all(5)),
                Placement::Free,
            )
            .unwrap();
        let child = gui.add(panel, label("child", Rect::new(10, 10, 50, 50)), Placement::Free).unwrap();

        assert_eq!(gui.screen_offset(child), Point::new(110, 60));
        assert_eq!(gui.screen_bounds(child), Rect::new(120, 70, 50, 50));
        assert_eq!(gui.screen_content_bounds(panel), Rect::new(110, 60, 180, 180));
        assert_eq!(gui.to_content_local(panel, Point::new(120, 70)), Point::new(10, 10));
        assert_eq!(gui.element_at(Point::new(125, 75)), Some(child));
    }

    #[test]
    fn test_draw_order_background_content_border() {
        let mut gui = screen();
        let panel = gui
            .add(
                gui.root(),
                Element::panel()
                    .with_bounds(Rect::new(10, 10, 100, 100))
                    .with_back_colour(css::RED)
                    .with_border(SolidBorder::new(css::WHITE, 2)),
                Placement::Free,
            )
            .unwrap();
        gui.add(panel, label("hi", Rect::new(0, 0, 50, 20)), Placement::Free).unwrap();

        let mut list = DrawList::new(IVec2::new(800, 600));
        gui.draw(&mut list);

        let commands = list.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0].command,
            DrawCommand::Fill {
                rect: Rect::new(10, 10, 100, 100),
                color: css::RED,
            }
        );
        assert_eq!(commands[0].clip_rect, Rect::new(10, 10, 100, 100));

        assert!(matches!(
            &commands[1].command,
            DrawCommand::Text { text, position, .. } if text == "hi" && *position == Point::new(12, 12)
        ));
        assert_eq!(commands[1].clip_rect, Rect::new(12, 12, 50, 20));

        assert!(matches!(
            commands[2].command,
            DrawCommand::Outline { thickness: 2, inset: true, .. }
        ));
        assert_eq!(commands[2].clip_rect, Rect::new(10, 10, 100, 100));
    }

    #[test]
    fn test_children_are_clipped_to_parent_content() {
        let mut gui = screen();
        let panel = gui
            .add(
                gui.root(),
                Element::panel().with_bounds(Rect::new(0, 0, 50, 50)),
                Placement::Free,
            )
            .unwrap();
        gui.add(panel, Element::widget(Probe::default()).with_bounds(Rect::new(40, 40, 30, 30)), Placement::Free)
            .unwrap();

        let mut list = DrawList::new(IVec2::new(800, 600));
        gui.draw(&mut list);

        assert_eq!(list.commands().len(), 1);
        assert_eq!(list.commands()[0].clip_rect, Rect::new(40, 40, 10, 10));
    }

    #[test]
    fn test_unusable_surface_draws_nothing() {
        let mut gui = screen();
        gui.set_back_colour(gui.root(), css::NAVY);
        let mut list = DrawList::new(IVec2::new(800, 600));
        list.set_usable(false);
        gui.draw(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_empty_elements_are_skipped() {
        let mut gui = screen();
        gui.add(
            gui.root(),
            Element::panel().with_bounds(Rect::new(5, 5, 0, 40)).with_back_colour(css::RED),
            Placement::Free,
        )
        .unwrap();
        let mut list = DrawList::new(IVec2::new(800, 600));
        gui.draw(&mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn test_debug_overlay_outlines_bounds() {
        let mut gui = screen();
        gui.add(gui.root(), label("x", Rect::new(10, 10, 40, 40)), Placement::Free).unwrap();
        gui.set_debug_options(DebugOptions::none().with_bounds(true));

        let mut list = DrawList::new(IVec2::new(800, 600));
        gui.draw(&mut list);

        let outlines: Vec<Rect> = list
            .commands()
            .iter()
            .filter_map(|c| match c.command {
                DrawCommand::Outline { rect, .. } => Some(rect),
                _ => None,
            })
            .collect();
        assert_eq!(outlines, vec![Rect::new(10, 10, 40, 40), Rect::new(0, 0, 800, 600)]);
    }

    #[test]
    fn test_find_by_name_depth_first() {
        let mut gui = screen();
        let root = gui.root();
        let panel = gui
            .add(root, Element::panel().with_name("menu").with_bounds(Rect::new(0, 0, 10, 10)), Placement::Free)
            .unwrap();
        let nested = gui.add(panel, label("ok", Rect::EMPTY), Placement::Free).unwrap();
        let later = gui.add(root, label("ok", Rect::EMPTY), Placement::Free).unwrap();

        assert_eq!(gui.find("root"), Some(root));
        assert_eq!(gui.find("ok"), Some(nested));
        assert_ne!(gui.find("ok"), Some(later));
        assert_eq!(gui.find_in(panel, "menu"), Some(panel));
        assert_eq!(gui.find("missing"), None);
    }

    #[test]
    fn test_tree_errors() {
        let mut gui = screen();
        let root = gui.root();
        let a = gui.add(root, Element::panel(), Placement::Free).unwrap();
        let b = gui.add(a, Element::panel(), Placement::Free).unwrap();
        let leaf = gui.add(b, label("leaf", Rect::EMPTY), Placement::Free).unwrap();
        let loose = gui.insert(Element::panel());

        assert_eq!(gui.add_child(leaf, loose), Err(TreeError::NotAContainer(leaf)));
        assert_eq!(gui.add_child(root, b), Err(TreeError::AlreadyAttached(b)));
        assert_eq!(gui.add_child(a, root), Err(TreeError::RootRemoval));
        assert_eq!(
            gui.remove_child(root, loose),
            Err(TreeError::NotAChild { parent: root, child: loose })
        );

        gui.remove_child(root, a).unwrap();
        assert_eq!(gui.parent(a), None);
        assert_eq!(gui.add_child(b, a), Err(TreeError::WouldCycle));

        assert_eq!(gui.remove(root), Err(TreeError::RootRemoval));
        gui.remove(a).unwrap();
        assert!(!gui.contains(a));
        assert!(!gui.contains(b));
        assert!(!gui.contains(leaf));
        assert_eq!(gui.add_child(root, a), Err(TreeError::UnknownElement(a)));
    }

    #[test]
    fn test_failed_add_does_not_leak() {
        let mut gui = screen();
        let leaf = gui.add(gui.root(), label("leaf", Rect::EMPTY), Placement::Free).unwrap();
        let before = gui.len();
        assert!(gui.add(leaf, Element::panel(), Placement::Free).is_err());
        assert_eq!(gui.len(), before);
    }

    #[test]
    fn test_widget_hooks_and_downcast() {
        let mut gui = screen();
        let probe = gui
            .add(gui.root(), Element::widget(Probe::default()), Placement::Free)
            .unwrap();

        assert!(gui.set_bounds(probe, Rect::new(1, 2, 3, 4)));
        assert!(!gui.set_bounds(probe, Rect::new(1, 2, 3, 4)));
        assert!(gui.set_location(probe, Point::new(5, 5)));
        gui.update(0.016);
        gui.update(0.016);

        let widget = gui.widget::<Probe>(probe).unwrap();
        assert_eq!(widget.updates, 2);
        assert_eq!(
            widget.resizes,
            vec![
                (Rect::EMPTY, Rect::new(1, 2, 3, 4)),
                (Rect::new(1, 2, 3, 4), Rect::new(5, 5, 3, 4)),
            ]
        );
        assert!(gui.widget::<Label>(probe).is_none());
        assert!(gui.widget::<Probe>(gui.root()).is_none());

        gui.widget_mut::<Probe>(probe).unwrap().updates = 0;
        assert_eq!(gui.widget::<Probe>(probe).unwrap().updates, 0);
    }

    #[test]
    fn test_negative_size_snaps_to_zero() {
        let mut gui = screen();
        let id = gui.add(gui.root(), Element::panel(), Placement::Free).unwrap();
        gui.set_bounds(id, Rect::new(3, 3, -5, 10));
        assert_eq!(gui.bounds(id), Rect::new(3, 3, 0, 10));
    }

    #[test]
    fn test_cell_placement_outside_table_is_inert() {
        let mut gui = screen();
        let child = gui.insert(label("c", Rect::new(1, 1, 10, 10)));
        gui.add_to_cell(gui.root(), child, CellPosition::new(1, 1)).unwrap();
        assert_eq!(gui.bounds(child), Rect::new(1, 1, 10, 10));
        assert_eq!(
            gui.placement(gui.root(), child),
            Some(Placement::Cell(CellPosition::new(1, 1)))
        );
    }

    #[test]
    fn test_table_resolves_without_children() {
        let mut gui = screen();
        let table = three_column_table(&mut gui);
        assert_eq!(gui.column_widths(table), &[50, 350, 350]);
        assert_eq!(gui.row_heights(table), &[600]);

        let detached = gui.insert(
            Element::table(vec![TrackStyle::percent(1.0)], vec![TrackStyle::px(30)])
                .with_bounds(Rect::new(0, 0, 120, 90)),
        );
        assert_eq!(gui.column_widths(detached), &[120]);
        assert_eq!(gui.row_heights(detached), &[30]);
    }

    #[test]
    fn test_later_empty_panel_shadows_earlier_sibling() {
        let mut gui = screen();
        let root = gui.root();
        let below = gui.add(root, label("below", Rect::new(10, 10, 100, 100)), Placement::Free).unwrap();
        let above = gui
            .add(root, Element::panel().with_bounds(Rect::new(0, 0, 200, 200)), Placement::Free)
            .unwrap();

        assert_eq!(gui.element_at(Point::new(50, 50)), Some(above));
        assert_ne!(gui.element_at(Point::new(50, 50)), Some(below));
    }

    #[test]
    fn test_unchanged_tracks_leave_cells_alone() {
        let mut gui = screen();
        let table = gui
            .add(
                gui.root(),
                Element::table(
                    vec![TrackStyle::px(100), TrackStyle::px(100)],
                    vec![TrackStyle::px(50)],
                )
                .with_bounds(Rect::new(0, 0, 300, 200)),
                Placement::Free,
            )
            .unwrap();
        let cell = gui
            .add(table, label("cell", Rect::EMPTY), Placement::Cell(CellPosition::new(1, 0)))
            .unwrap();
        assert_eq!(gui.bounds(cell), Rect::new(100, 0, 100, 50));

        gui.set_bounds(cell, Rect::new(5, 5, 10, 10));
        assert!(gui.set_size(table, IVec2::new(400, 300)));
        assert_eq!(gui.bounds(cell), Rect::new(5, 5, 10, 10));

        // a real track change places the child again
        gui.set_column_styles(table, vec![TrackStyle::px(60), TrackStyle::px(100)]);
        assert_eq!(gui.bounds(cell), Rect::new(60, 0, 100, 50));
    }
}
