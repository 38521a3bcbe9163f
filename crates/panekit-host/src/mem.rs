// ABOUTME: In-memory host implementation for tests and headless runs.
// ABOUTME: Simulates windows, panes, views, and records issued file commands.

use std::collections::{BTreeMap, HashMap};

use panekit_core::{BufferId, ViewId, WindowId};
use panekit_layout::Layout;

use crate::api::Host;

#[derive(Debug)]
struct MemWindow {
    layout: Layout,
    /// One view list per layout cell, in cell order
    panes: Vec<Vec<ViewId>>,
    active_pane: usize,
    active_view: Option<ViewId>,
}

/// A scriptable host holding the full window/view model in memory.
///
/// Used by the demo binary and the integration tests. Operations on ids
/// the host never handed out are ignored, matching the trait contract.
/// Every file command issued through the trait is recorded so tests can
/// assert exact command sequences.
#[derive(Debug, Default)]
pub struct MemHost {
    windows: BTreeMap<WindowId, MemWindow>,
    buffers: HashMap<ViewId, BufferId>,
    statuses: HashMap<ViewId, BTreeMap<String, String>>,
    settings: HashMap<String, serde_json::Value>,
    command_log: Vec<String>,
    next_id: u64,
}

impl MemHost {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Open a new window with the given layout and no views
    pub fn add_window(&mut self, layout: Layout) -> WindowId {
        let id = WindowId(self.alloc_id());
        let panes = vec![Vec::new(); layout.num_panes()];
        self.windows.insert(
            id,
            MemWindow {
                layout,
                panes,
                active_pane: 0,
                active_view: None,
            },
        );
        id
    }

    pub fn new_buffer(&mut self) -> BufferId {
        BufferId(self.alloc_id())
    }

    /// Open a view on `buffer` in the given pane. The new view gets focus,
    /// as a freshly opened file would.
    pub fn add_view(&mut self, window: WindowId, pane: usize, buffer: BufferId) -> ViewId {
        let view = ViewId(self.alloc_id());
        self.buffers.insert(view, buffer);
        if let Some(win) = self.windows.get_mut(&window) {
            if pane < win.panes.len() {
                win.panes[pane].push(view);
                win.active_pane = pane;
                win.active_view = Some(view);
            }
        }
        view
    }

    /// Publish a named settings object visible through `shared_settings`
    pub fn set_shared_settings(&mut self, name: &str, value: serde_json::Value) {
        self.settings.insert(name.to_string(), value);
    }

    /// Status text currently set on a view under `key`
    pub fn view_status(&self, view: ViewId, key: &str) -> Option<&str> {
        self.statuses
            .get(&view)
            .and_then(|m| m.get(key))
            .map(|s| s.as_str())
    }

    /// Every file command issued through the trait, in order
    pub fn command_log(&self) -> &[String] {
        &self.command_log
    }

    /// Which pane a view currently sits in
    pub fn pane_of_view(&self, view: ViewId) -> Option<usize> {
        self.windows.values().find_map(|win| {
            win.panes
                .iter()
                .position(|views| views.contains(&view))
        })
    }
}

impl Host for MemHost {
    fn windows(&self) -> Vec<WindowId> {
        self.windows.keys().copied().collect()
    }

    fn layout(&self, window: WindowId) -> Layout {
        self.windows
            .get(&window)
            .map(|win| win.layout.clone())
            .unwrap_or_else(Layout::single)
    }

    fn set_layout(&mut self, window: WindowId, layout: Layout) {
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        let new_panes = layout.num_panes();
        // Shrinking merges orphaned views into the last surviving pane,
        // the way a real host collapses groups.
        while win.panes.len() > new_panes {
            let orphans = win.panes.pop().unwrap_or_default();
            if let Some(last) = win.panes.last_mut() {
                last.extend(orphans);
            }
        }
        while win.panes.len() < new_panes {
            win.panes.push(Vec::new());
        }
        if win.active_pane >= new_panes {
            win.active_pane = new_panes.saturating_sub(1);
            win.active_view = win
                .panes
                .get(win.active_pane)
                .and_then(|views| views.last().copied());
        }
        win.layout = layout;
    }

    fn num_panes(&self, window: WindowId) -> usize {
        self.windows.get(&window).map_or(0, |win| win.panes.len())
    }

    fn active_pane(&self, window: WindowId) -> usize {
        self.windows.get(&window).map_or(0, |win| win.active_pane)
    }

    fn focus_pane(&mut self, window: WindowId, pane: usize) {
        if let Some(win) = self.windows.get_mut(&window) {
            if pane < win.panes.len() {
                win.active_pane = pane;
                win.active_view = win.panes[pane].last().copied();
            }
        }
    }

    fn views(&self, window: WindowId) -> Vec<ViewId> {
        self.windows
            .get(&window)
            .map(|win| win.panes.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    fn active_view(&self, window: WindowId) -> Option<ViewId> {
        self.windows.get(&window).and_then(|win| win.active_view)
    }

    fn buffer_of(&self, view: ViewId) -> Option<BufferId> {
        self.buffers.get(&view).copied()
    }

    fn window_of_view(&self, view: ViewId) -> Option<WindowId> {
        self.windows.iter().find_map(|(id, win)| {
            win.panes
                .iter()
                .any(|views| views.contains(&view))
                .then_some(*id)
        })
    }

    fn focus_view(&mut self, window: WindowId, view: ViewId) {
        if let Some(win) = self.windows.get_mut(&window) {
            if let Some(pane) = win.panes.iter().position(|views| views.contains(&view)) {
                win.active_pane = pane;
                win.active_view = Some(view);
            }
        }
    }

    fn set_view_status(&mut self, view: ViewId, key: &str, text: &str) {
        self.statuses
            .entry(view)
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    fn erase_view_status(&mut self, view: ViewId, key: &str) {
        if let Some(map) = self.statuses.get_mut(&view) {
            map.remove(key);
        }
    }

    fn clone_active_file(&mut self, window: WindowId) {
        self.command_log.push("clone_file".to_string());
        let Some(active) = self.active_view(window) else {
            return;
        };
        let buffer = self.buffers.get(&active).copied();
        let view = ViewId(self.alloc_id());
        if let Some(buffer) = buffer {
            self.buffers.insert(view, buffer);
        }
        if let Some(win) = self.windows.get_mut(&window) {
            let pane = win.active_pane;
            win.panes[pane].push(view);
            win.active_view = Some(view);
        }
    }

    fn move_active_to_neighboring_pane(&mut self, window: WindowId) {
        self.command_log
            .push("move_to_neighboring_pane".to_string());
        let Some(win) = self.windows.get_mut(&window) else {
            return;
        };
        let Some(active) = win.active_view else {
            return;
        };
        let n = win.panes.len();
        if n < 2 {
            return;
        }
        let from = win.active_pane;
        let to = (from + 1) % n;
        if let Some(pos) = win.panes[from].iter().position(|v| *v == active) {
            win.panes[from].remove(pos);
            win.panes[to].push(active);
            win.active_pane = to;
        }
    }

    fn shared_settings(&self, name: &str) -> Option<serde_json::Value> {
        self.settings.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_view_focuses_it() {
        let mut host = MemHost::new();
        let window = host.add_window(Layout::two_column());
        let buffer = host.new_buffer();
        let view = host.add_view(window, 1, buffer);

        assert_eq!(host.active_pane(window), 1);
        assert_eq!(host.active_view(window), Some(view));
        assert_eq!(host.buffer_of(view), Some(buffer));
        assert_eq!(host.window_of_view(view), Some(window));
    }

    #[test]
    fn clone_creates_view_on_same_buffer() {
        let mut host = MemHost::new();
        let window = host.add_window(Layout::two_column());
        let buffer = host.new_buffer();
        let original = host.add_view(window, 0, buffer);

        host.clone_active_file(window);

        let views = host.views(window);
        assert_eq!(views.len(), 2);
        let clone = views.into_iter().find(|v| *v != original).unwrap();
        assert_eq!(host.buffer_of(clone), Some(buffer));
        // The clone has focus, like a freshly opened file
        assert_eq!(host.active_view(window), Some(clone));
        assert_eq!(host.command_log(), &["clone_file".to_string()]);
    }

    #[test]
    fn move_to_neighboring_pane_wraps() {
        let mut host = MemHost::new();
        let window = host.add_window(Layout::two_column());
        let buffer = host.new_buffer();
        let view = host.add_view(window, 1, buffer);

        host.move_active_to_neighboring_pane(window);

        assert_eq!(host.pane_of_view(view), Some(0));
        assert_eq!(host.active_pane(window), 0);
    }

    #[test]
    fn shrinking_layout_merges_views() {
        let mut host = MemHost::new();
        let window = host.add_window(Layout::two_column());
        let left = host.new_buffer();
        let right = host.new_buffer();
        host.add_view(window, 0, left);
        let orphan = host.add_view(window, 1, right);

        host.set_layout(window, Layout::single());

        assert_eq!(host.num_panes(window), 1);
        assert_eq!(host.views(window).len(), 2);
        assert_eq!(host.pane_of_view(orphan), Some(0));
    }

    #[test]
    fn stale_ids_are_ignored() {
        let mut host = MemHost::new();
        let ghost = WindowId(99);
        assert_eq!(host.num_panes(ghost), 0);
        assert!(host.views(ghost).is_empty());
        host.focus_pane(ghost, 3);
        host.set_layout(ghost, Layout::two_column());
        assert!(host.windows().is_empty());
    }

    #[test]
    fn status_set_and_erase() {
        let mut host = MemHost::new();
        let window = host.add_window(Layout::single());
        let buffer = host.new_buffer();
        let view = host.add_view(window, 0, buffer);

        host.set_view_status(view, "0_maxpane", "MAX");
        assert_eq!(host.view_status(view, "0_maxpane"), Some("MAX"));

        host.erase_view_status(view, "0_maxpane");
        assert_eq!(host.view_status(view, "0_maxpane"), None);
    }
}
