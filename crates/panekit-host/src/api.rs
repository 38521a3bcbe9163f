// ABOUTME: The window API the host editor exposes to the plugin.
// ABOUTME: All operations are keyed by opaque window/view identifiers.

use panekit_core::{BufferId, ViewId, WindowId};
use panekit_layout::Layout;

/// What the host editor lets the plugin see and do.
///
/// The host owns all window, view, and geometry state; the plugin only
/// reads layouts and requests changes through this trait. Ids passed in
/// are expected to come from the host itself; operations on stale ids are
/// ignored by conforming implementations.
pub trait Host {
    /// All currently open windows
    fn windows(&self) -> Vec<WindowId>;

    fn layout(&self, window: WindowId) -> Layout;
    fn set_layout(&mut self, window: WindowId, layout: Layout);

    fn num_panes(&self, window: WindowId) -> usize;
    fn active_pane(&self, window: WindowId) -> usize;
    fn focus_pane(&mut self, window: WindowId, pane: usize);

    /// All views in the window, across every pane
    fn views(&self, window: WindowId) -> Vec<ViewId>;
    /// The focused view, or None when the active pane is empty
    fn active_view(&self, window: WindowId) -> Option<ViewId>;
    fn buffer_of(&self, view: ViewId) -> Option<BufferId>;
    fn window_of_view(&self, view: ViewId) -> Option<WindowId>;
    fn focus_view(&mut self, window: WindowId, view: ViewId);

    fn set_view_status(&mut self, view: ViewId, key: &str, text: &str);
    fn erase_view_status(&mut self, view: ViewId, key: &str);

    /// Clone the focused file into a new view in the active pane
    fn clone_active_file(&mut self, window: WindowId);
    /// Move the focused view into the neighboring pane
    fn move_active_to_neighboring_pane(&mut self, window: WindowId);

    /// A named host settings object, if the host has one by that name.
    /// Used for cross-plugin interop; callers must treat any shape of
    /// payload defensively.
    fn shared_settings(&self, name: &str) -> Option<serde_json::Value>;
}
