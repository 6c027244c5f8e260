use std::any::Any;

use crate::color::Color;
use crate::layout::{align_inside, ContentAlignment};
use crate::primitives::{Point, Rect};
use crate::surface::{FontId, Surface, TextTransform};
use crate::widgets::Widget;

/// Colours and metrics for a list box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListBoxStyle {
    pub item_height: i32,
    /// Horizontal inset of item text from the row edge
    pub text_inset: i32,
    pub text_color: Color,
    pub selected_text_color: Color,
    pub selection_color: Color,
}

impl Default for ListBoxStyle {
    fn default() -> Self {
        Self {
            item_height: 20,
            text_inset: 4,
            text_color: Color::rgb(0.8, 0.8, 0.8),
            selected_text_color: Color::rgb(1.0, 1.0, 1.0),
            selection_color: Color::rgb(0.2, 0.3, 0.6),
        }
    }
}

/// Vertical list of text rows with a single selection
#[derive(Debug, Clone, PartialEq)]
pub struct ListBox {
    items: Vec<String>,
    selected: Option<usize>,
    first_visible: usize,
    font: FontId,
    style: ListBoxStyle,
}

impl ListBox {
    pub fn new(font: FontId) -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            first_visible: 0,
            font,
            style: ListBoxStyle::default(),
        }
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_style(mut self, style: ListBoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn push_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Remove the item at `index`, keeping the selection on the same item where possible
    pub fn remove_item(&mut self, index: usize) -> Option<String> {
        if index >= self.items.len() {
            return None;
        }
        let removed = self.items.remove(index);
        self.selected = match self.selected {
            Some(s) if s == index => None,
            Some(s) if s > index => Some(s - 1),
            other => other,
        };
        self.first_visible = self.first_visible.min(self.items.len().saturating_sub(1));
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
        self.first_visible = 0;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    /// Select `index`, or clear the selection if it is out of range
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|i| *i < self.items.len());
    }

    /// Move the selection down one row, stopping at the last item
    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => (i + 1).min(self.items.len() - 1),
            None => 0,
        });
    }

    /// Move the selection up one row, stopping at the first item
    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(i) => i.saturating_sub(1),
            None => self.items.len() - 1,
        });
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn set_first_visible(&mut self, index: usize) {
        self.first_visible = index.min(self.items.len().saturating_sub(1));
    }

    /// Number of whole rows that fit in `content_height`
    pub fn visible_rows(&self, content_height: i32) -> usize {
        if self.style.item_height <= 0 || content_height <= 0 {
            return 0;
        }
        (content_height / self.style.item_height) as usize
    }

    /// Scroll so `index` is within the first `visible_rows` rows
    pub fn ensure_visible(&mut self, index: usize, visible_rows: usize) {
        if visible_rows == 0 || index >= self.items.len() {
            return;
        }
        if index < self.first_visible {
            self.first_visible = index;
        } else if index >= self.first_visible + visible_rows {
            self.first_visible = index + 1 - visible_rows;
        }
    }

    /// Item under `local`, a point relative to the content area's top-left corner
    pub fn item_at(&self, local: Point, content: Rect) -> Option<usize> {
        if self.style.item_height <= 0
            || local.x < 0
            || local.y < 0
            || local.x >= content.width
            || local.y >= content.height
        {
            return None;
        }
        let index = self.first_visible + (local.y / self.style.item_height) as usize;
        (index < self.items.len()).then_some(index)
    }
}

impl Widget for ListBox {
    fn paint(&self, surface: &mut dyn Surface, content: Rect) {
        if self.style.item_height <= 0 {
            return;
        }

        let mut remaining = content;
        for (index, item) in self.items.iter().enumerate().skip(self.first_visible) {
            if remaining.is_empty() {
                break;
            }
            let (row, rest) = remaining.slice_top(self.style.item_height);
            remaining = rest;

            let is_selected = self.selected == Some(index);
            if is_selected {
                surface.fill_rectangle(row, self.style.selection_color);
            }

            let text_area = row.shrink(self.style.text_inset, 0, self.style.text_inset, 0);
            let size = surface.measure_text(self.font, item);
            let placed = align_inside(size, text_area, ContentAlignment::MiddleLeft);
            let color = if is_selected {
                self.style.selected_text_color
            } else {
                self.style.text_color
            };
            surface.draw_text(
                self.font,
                item,
                placed.location(),
                color,
                TextTransform::IDENTITY,
            );
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
