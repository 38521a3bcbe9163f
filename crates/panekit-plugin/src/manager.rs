// ABOUTME: Per-window maximize state store and lock set.
// ABOUTME: Records pre-maximize layouts so restore is exact, not guessed.

use std::collections::{HashMap, HashSet};

use panekit_core::WindowId;
use panekit_layout::Layout;

/// The geometry captured immediately before a window was maximized, plus
/// the pane that was active at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxRecord {
    pub layout: Layout,
    pub pane: usize,
}

/// Process-wide maximize state, keyed by window id.
///
/// A window can look maximized (all boundaries on the window edges) without
/// us having maximized it, e.g. after the user dragged the dividers shut by
/// hand. A stored record means we can restore the exact prior geometry; a
/// window that merely looks maximized only gets a best-effort restore.
#[derive(Debug, Default)]
pub struct PaneManager {
    records: HashMap<WindowId, MaxRecord>,
    locks: HashSet<WindowId>,
}

impl PaneManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture the window's current geometry, overwriting any prior record
    pub fn store(&mut self, window: WindowId, layout: Layout, pane: usize) {
        self.records.insert(window, MaxRecord { layout, pane });
    }

    /// Take the stored record, if any. The record is consumed; a second
    /// pop returns None.
    pub fn pop(&mut self, window: WindowId) -> Option<MaxRecord> {
        self.records.remove(&window)
    }

    pub fn has_record(&self, window: WindowId) -> bool {
        self.records.contains_key(&window)
    }

    /// The pane that was active when the window was maximized
    pub fn maximized_pane(&self, window: WindowId) -> Option<usize> {
        self.records.get(&window).map(|rec| rec.pane)
    }

    /// True if we maximized this window, or if its current geometry looks
    /// maximized anyway.
    pub fn is_maximized(&self, window: WindowId, current: &Layout) -> bool {
        self.has_record(window) || current.looks_maximized()
    }

    /// Exclude the window from automatic layout policies
    pub fn lock(&mut self, window: WindowId) {
        self.locks.insert(window);
    }

    pub fn unlock(&mut self, window: WindowId) {
        self.locks.remove(&window);
    }

    pub fn is_locked(&self, window: WindowId) -> bool {
        self.locks.contains(&window)
    }
}
