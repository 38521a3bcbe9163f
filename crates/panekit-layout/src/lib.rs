// ABOUTME: Pane layout geometry for panekit.
// ABOUTME: Implements the boundary/cell grid model and layout transformations.

mod grid;

pub use grid::{Cell, Layout, LayoutError};
