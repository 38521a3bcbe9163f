// ABOUTME: Boundary/cell grid model for window pane layouts.
// ABOUTME: Supports maximizing a pane, even distribution, and validation.

use serde::{Deserialize, Serialize};

/// One pane's rectangle, as index spans into the boundary arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub col_start: usize,
    pub row_start: usize,
    pub col_end: usize,
    pub row_end: usize,
}

impl Cell {
    pub const fn new(col_start: usize, row_start: usize, col_end: usize, row_end: usize) -> Self {
        Self {
            col_start,
            row_start,
            col_end,
            row_end,
        }
    }
}

/// A window's pane grid in normalized coordinates (0.0 to 1.0).
///
/// Column and row boundaries subdivide the window; each cell references a
/// span of boundary indices on both axes. Boundaries start at 0.0 and end
/// at 1.0. A maximized layout keeps its cell topology but collapses all
/// boundaries onto 0.0 and 1.0, so repeated boundary values are legal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub cols: Vec<f32>,
    pub rows: Vec<f32>,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    #[error("{axis} boundaries must have at least two points")]
    TooFewBoundaries { axis: &'static str },

    #[error("{axis} boundaries must start at 0.0 and end at 1.0")]
    BadEndpoints { axis: &'static str },

    #[error("{axis} boundaries must be non-decreasing")]
    NotMonotonic { axis: &'static str },

    #[error("layout has no cells")]
    NoCells,

    #[error("cell {0} references a boundary index out of range")]
    CellOutOfRange(usize),

    #[error("cell {0} has an empty index span")]
    EmptyCell(usize),
}

impl Layout {
    /// Single full-window pane
    pub fn single() -> Self {
        Self {
            cols: vec![0.0, 1.0],
            rows: vec![0.0, 1.0],
            cells: vec![Cell::new(0, 0, 1, 1)],
        }
    }

    /// The two-column enforcement target: two side-by-side panes, one row
    pub fn two_column() -> Self {
        Self {
            cols: vec![0.0, 0.5, 1.0],
            rows: vec![0.0, 1.0],
            cells: vec![Cell::new(0, 0, 1, 1), Cell::new(1, 0, 2, 1)],
        }
    }

    pub fn num_panes(&self) -> usize {
        self.cells.len()
    }

    /// Check the grid invariants
    pub fn validate(&self) -> Result<(), LayoutError> {
        validate_axis(&self.cols, "column")?;
        validate_axis(&self.rows, "row")?;

        if self.cells.is_empty() {
            return Err(LayoutError::NoCells);
        }
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.col_end >= self.cols.len() || cell.row_end >= self.rows.len() {
                return Err(LayoutError::CellOutOfRange(i));
            }
            if cell.col_start >= cell.col_end || cell.row_start >= cell.row_end {
                return Err(LayoutError::EmptyCell(i));
            }
        }
        Ok(())
    }

    /// True when the window has more than one pane but every boundary sits
    /// on a window edge. This is what a maximized window's geometry looks
    /// like, whether or not we were the ones who maximized it.
    pub fn looks_maximized(&self) -> bool {
        self.cells.len() > 1
            && self
                .cols
                .iter()
                .chain(self.rows.iter())
                .all(|&v| v == 0.0 || v == 1.0)
    }

    /// Collapse the grid so `pane` fills the whole window.
    ///
    /// Boundaries strictly below the pane's end index collapse to 0.0, the
    /// rest to 1.0, independently per axis. Topology is preserved; every
    /// other pane ends up zero-sized. Returns None if `pane` is out of range.
    pub fn maximized_onto(&self, pane: usize) -> Option<Layout> {
        let cell = self.cells.get(pane)?;
        let cols = collapse_axis(&self.cols, cell.col_end);
        let rows = collapse_axis(&self.rows, cell.row_end);
        Some(Layout {
            cols,
            rows,
            cells: self.cells.clone(),
        })
    }

    /// Respace both axes evenly over [0.0, 1.0], leaving cells unchanged.
    ///
    /// An axis with fewer than two points is left as-is.
    pub fn distributed(&self) -> Layout {
        Layout {
            cols: distribute_axis(&self.cols),
            rows: distribute_axis(&self.rows),
            cells: self.cells.clone(),
        }
    }
}

fn validate_axis(values: &[f32], axis: &'static str) -> Result<(), LayoutError> {
    if values.len() < 2 {
        return Err(LayoutError::TooFewBoundaries { axis });
    }
    if values.first() != Some(&0.0) || values.last() != Some(&1.0) {
        return Err(LayoutError::BadEndpoints { axis });
    }
    if values.windows(2).any(|w| w[0] > w[1]) {
        return Err(LayoutError::NotMonotonic { axis });
    }
    Ok(())
}

fn collapse_axis(values: &[f32], end_index: usize) -> Vec<f32> {
    values
        .iter()
        .enumerate()
        .map(|(i, _)| if i < end_index { 0.0 } else { 1.0 })
        .collect()
}

fn distribute_axis(values: &[f32]) -> Vec<f32> {
    let n = values.len();
    if n < 2 {
        return values.to_vec();
    }
    (0..n).map(|i| i as f32 / (n - 1) as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_columns() -> Layout {
        Layout {
            cols: vec![0.0, 0.33, 0.66, 1.0],
            rows: vec![0.0, 1.0],
            cells: vec![
                Cell::new(0, 0, 1, 1),
                Cell::new(1, 0, 2, 1),
                Cell::new(2, 0, 3, 1),
            ],
        }
    }

    #[test]
    fn builtin_layouts_are_valid() {
        assert_eq!(Layout::single().validate(), Ok(()));
        assert_eq!(Layout::two_column().validate(), Ok(()));
        assert_eq!(three_columns().validate(), Ok(()));
    }

    #[test]
    fn two_column_shape() {
        let layout = Layout::two_column();
        assert_eq!(layout.cols, vec![0.0, 0.5, 1.0]);
        assert_eq!(layout.rows, vec![0.0, 1.0]);
        assert_eq!(layout.num_panes(), 2);
    }

    #[test]
    fn validate_rejects_bad_endpoints() {
        let mut layout = Layout::two_column();
        layout.cols = vec![0.1, 0.5, 1.0];
        assert_eq!(
            layout.validate(),
            Err(LayoutError::BadEndpoints { axis: "column" })
        );
    }

    #[test]
    fn validate_rejects_decreasing_boundaries() {
        let mut layout = Layout::two_column();
        layout.rows = vec![0.0, 0.7, 0.4, 1.0];
        assert_eq!(
            layout.validate(),
            Err(LayoutError::NotMonotonic { axis: "row" })
        );
    }

    #[test]
    fn validate_rejects_out_of_range_cell() {
        let mut layout = Layout::two_column();
        layout.cells.push(Cell::new(0, 0, 5, 1));
        assert_eq!(layout.validate(), Err(LayoutError::CellOutOfRange(2)));
    }

    #[test]
    fn maximize_middle_of_three_panes() {
        let maxed = three_columns().maximized_onto(1).unwrap();
        assert_eq!(maxed.cols, vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(maxed.rows, vec![0.0, 1.0]);
        // Topology untouched
        assert_eq!(maxed.cells, three_columns().cells);
    }

    #[test]
    fn maximized_layout_still_validates() {
        let maxed = three_columns().maximized_onto(0).unwrap();
        assert_eq!(maxed.cols, vec![0.0, 1.0, 1.0, 1.0]);
        assert_eq!(maxed.validate(), Ok(()));
    }

    #[test]
    fn maximize_out_of_range_pane() {
        assert!(three_columns().maximized_onto(3).is_none());
    }

    #[test]
    fn maximized_looks_maximized() {
        assert!(!three_columns().looks_maximized());
        let maxed = three_columns().maximized_onto(2).unwrap();
        assert!(maxed.looks_maximized());
    }

    #[test]
    fn single_pane_never_looks_maximized() {
        assert!(!Layout::single().looks_maximized());
    }

    #[test]
    fn distribute_spaces_evenly() {
        let maxed = three_columns().maximized_onto(1).unwrap();
        let spread = maxed.distributed();
        assert_eq!(spread.cols, vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);
        assert_eq!(spread.rows, vec![0.0, 1.0]);
        assert_eq!(spread.validate(), Ok(()));
        // Strictly increasing
        assert!(spread.cols.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn distribute_is_idempotent() {
        let spread = three_columns().distributed();
        assert_eq!(spread.distributed(), spread);
    }

    #[test]
    fn distribute_leaves_degenerate_axis_alone() {
        // A single-point axis would divide by zero; it must pass through
        // untouched.
        let layout = Layout {
            cols: vec![0.5],
            rows: vec![0.0, 0.3, 1.0],
            cells: vec![Cell::new(0, 0, 1, 1)],
        };
        let spread = layout.distributed();
        assert_eq!(spread.cols, vec![0.5]);
        assert_eq!(spread.rows, vec![0.0, 0.5, 1.0]);
    }
}
