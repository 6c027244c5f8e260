//! Table panel track sizing.
//!
//! Columns and rows are resolved independently with the same algorithm:
//!
//! 1. `Absolute` tracks take their size first.
//! 2. `Percent` and `VariablePercent` tracks share whatever is left, weighted.
//! 3. A single clamp pass turns `VariablePercent` tracks whose share falls outside
//!    their min/max into fixed tracks; the rest re-share the remaining space.
//!
//! The clamp pass is not iterated to a fixpoint, so a track pushed below its own
//! minimum by a neighbour's clamp is not re-checked. A minimum is honoured even
//! when it exceeds the space left, so only then can tracks overflow the content.

use glam::IVec2;

use crate::primitives::Rect;

/// Sizing policy for one column or row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackStyle {
    /// Fixed size in pixels
    Absolute(i32),
    /// Weighted share of the space left after absolute tracks
    Percent(f32),
    /// Weighted share clamped to `[min, max]`; a negative bound means unbounded
    VariablePercent { weight: f32, min: i32, max: i32 },
}

impl TrackStyle {
    pub const fn px(size: i32) -> Self {
        Self::Absolute(size)
    }

    pub const fn percent(weight: f32) -> Self {
        Self::Percent(weight)
    }

    pub const fn clamped(weight: f32, min: i32, max: i32) -> Self {
        Self::VariablePercent { weight, min, max }
    }

    fn weight(&self) -> Option<f32> {
        match *self {
            TrackStyle::Absolute(_) => None,
            TrackStyle::Percent(weight) | TrackStyle::VariablePercent { weight, .. } => {
                Some(weight.max(0.0))
            }
        }
    }
}

/// Where a child sits in a table, in tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub column: usize,
    pub row: usize,
    pub column_span: usize,
    pub row_span: usize,
}

impl CellPosition {
    /// A single cell
    pub const fn new(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            column_span: 1,
            row_span: 1,
        }
    }

    pub const fn with_span(mut self, column_span: usize, row_span: usize) -> Self {
        self.column_span = column_span;
        self.row_span = row_span;
        self
    }
}

impl Default for CellPosition {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Column/row styles of a table panel plus their last resolved pixel sizes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableLayout {
    column_styles: Vec<TrackStyle>,
    row_styles: Vec<TrackStyle>,
    column_widths: Vec<i32>,
    row_heights: Vec<i32>,
}

impl TableLayout {
    pub fn new(column_styles: Vec<TrackStyle>, row_styles: Vec<TrackStyle>) -> Self {
        Self {
            column_styles,
            row_styles,
            column_widths: Vec::new(),
            row_heights: Vec::new(),
        }
    }

    pub fn column_styles(&self) -> &[TrackStyle] {
        &self.column_styles
    }

    pub fn row_styles(&self) -> &[TrackStyle] {
        &self.row_styles
    }

    pub fn column_widths(&self) -> &[i32] {
        &self.column_widths
    }

    pub fn row_heights(&self) -> &[i32] {
        &self.row_heights
    }

    pub(crate) fn set_column_styles(&mut self, styles: Vec<TrackStyle>) {
        self.column_styles = styles;
    }

    pub(crate) fn set_row_styles(&mut self, styles: Vec<TrackStyle>) {
        self.row_styles = styles;
    }

    /// Resolve tracks for a content area of `content` size
    ///
    /// Returns `true` if any resolved width or height differs from the previous resolution.
    pub fn resolve(&mut self, content: IVec2) -> bool {
        let widths = resolve_tracks(&self.column_styles, content.x);
        let heights = resolve_tracks(&self.row_styles, content.y);

        let changed = widths != self.column_widths || heights != self.row_heights;
        if changed {
            log::debug!("table tracks resolved: columns {widths:?}, rows {heights:?}");
            self.column_widths = widths;
            self.row_heights = heights;
        }
        changed
    }

    /// Rectangle covered by `cell`, relative to the table's content origin
    ///
    /// Cells past the last track collapse to zero size at the far edge; spans are
    /// cut off at the last track.
    pub fn cell_rect(&self, cell: CellPosition) -> Rect {
        let (x, width) = span(&self.column_widths, cell.column, cell.column_span);
        let (y, height) = span(&self.row_heights, cell.row, cell.row_span);
        Rect::new(x, y, width, height)
    }
}

fn span(sizes: &[i32], start: usize, count: usize) -> (i32, i32) {
    let offset = sizes.iter().take(start).sum();
    let length = sizes.iter().skip(start).take(count.max(1)).sum();
    (offset, length)
}

fn share(space: i32, weight: f32, total_weight: f32) -> i32 {
    (space as f64 * weight as f64 / total_weight as f64).round_ties_even() as i32
}

/// Resolve one axis of track styles against `available` pixels
pub fn resolve_tracks(styles: &[TrackStyle], available: i32) -> Vec<i32> {
    let mut sizes = vec![0; styles.len()];
    let mut total_fixed = 0;
    let mut total_weight = 0.0f32;

    for (size, style) in sizes.iter_mut().zip(styles) {
        match *style {
            TrackStyle::Absolute(px) => {
                *size = px.max(0);
                total_fixed += *size;
            }
            _ => total_weight += style.weight().unwrap_or(0.0),
        }
    }

    if total_weight <= 0.0 {
        return sizes;
    }

    let mut variable_space = (available - total_fixed).max(0);

    // Single clamp pass, every candidate measured against the unclamped totals
    let mut clamped = vec![false; styles.len()];
    let mut adjusted_fixed = 0;
    let mut adjusted_weight = 0.0f32;
    for (i, style) in styles.iter().enumerate() {
        let TrackStyle::VariablePercent { weight, min, max } = *style else {
            continue;
        };
        let weight = weight.max(0.0);
        let candidate = share(variable_space, weight, total_weight);
        let bound = if min >= 0 && candidate < min {
            Some(min)
        } else if max >= 0 && candidate > max {
            Some(max)
        } else {
            None
        };
        if let Some(bound) = bound {
            sizes[i] = bound;
            clamped[i] = true;
            adjusted_fixed += bound;
            adjusted_weight += weight;
        }
    }

    variable_space = (variable_space - adjusted_fixed).max(0);
    total_weight -= adjusted_weight;

    let mut shared = Vec::new();
    let mut distributed = 0;
    for (i, style) in styles.iter().enumerate() {
        let Some(weight) = style.weight() else {
            continue;
        };
        if clamped[i] {
            continue;
        }
        sizes[i] = if variable_space == 0 || total_weight <= 0.0 {
            0
        } else {
            share(variable_space, weight, total_weight)
        };
        distributed += sizes[i];
        shared.push(i);
    }

    // Rounding can overshoot by a pixel or two; take it back from the trailing tracks
    let mut overshoot = distributed - variable_space;
    for &i in shared.iter().rev() {
        if overshoot <= 0 {
            break;
        }
        let take = overshoot.min(sizes[i]);
        sizes[i] -= take;
        overshoot -= take;
    }

    sizes
}
