// ABOUTME: Pane commands, the two-column policy, and event coordination.
// ABOUTME: All operations are synchronous host calls on the dispatch thread.

use panekit_core::{Config, ViewId, WindowId};
use panekit_host::{Host, HostEvent, StructuralCommand, EXIT_COMMAND};
use panekit_layout::Layout;

use crate::manager::PaneManager;
use crate::probe::{probe_from_config, LockProbe};

/// The plugin's command and event surface.
///
/// Owns the maximize state store and the lock probe; every method takes the
/// host as an explicit collaborator. One instance serves all windows, with
/// per-window state looked up by id.
pub struct PanePlugin {
    manager: PaneManager,
    probe: Box<dyn LockProbe>,
    enforce_two_columns: bool,
    status_key: String,
    status_text: String,
}

impl PanePlugin {
    pub fn new(config: &Config) -> Self {
        Self::with_probe(config, probe_from_config(config))
    }

    /// Build with an explicit lock probe, overriding the config's choice
    pub fn with_probe(config: &Config, probe: Box<dyn LockProbe>) -> Self {
        Self {
            manager: PaneManager::new(),
            probe,
            enforce_two_columns: config.enforce_two_columns,
            status_key: config.status_key.clone(),
            status_text: config.status_text.clone(),
        }
    }

    pub fn manager(&self) -> &PaneManager {
        &self.manager
    }

    /// Collapse the window onto its active pane, remembering the current
    /// geometry. No-op on single-pane windows.
    pub fn maximize(&mut self, host: &mut dyn Host, window: WindowId) {
        if host.num_panes(window) < 2 {
            tracing::debug!("window {:?} has a single pane, nothing to maximize", window);
            return;
        }
        let layout = host.layout(window);
        let active = host.active_pane(window);
        let Some(maxed) = layout.maximized_onto(active) else {
            tracing::debug!("active pane {} not present in layout, skipping", active);
            return;
        };
        self.manager.store(window, layout, active);
        self.manager.lock(window);
        for view in host.views(window) {
            host.set_view_status(view, &self.status_key, &self.status_text);
        }
        host.set_layout(window, maxed);
        tracing::info!("maximized window {:?} onto pane {}", window, active);
    }

    /// Restore the geometry captured at maximize time. A window that looks
    /// maximized but has no record gets evenly distributed instead.
    pub fn unmaximize(&mut self, host: &mut dyn Host, window: WindowId) {
        if let Some(record) = self.manager.pop(window) {
            host.set_layout(window, record.layout);
            tracing::info!("restored stored layout for window {:?}", window);
        } else if host.layout(window).looks_maximized() {
            // No record to restore from, so even spacing is the best we
            // can do.
            tracing::info!(
                "window {:?} looks maximized with no record, distributing",
                window
            );
            self.distribute(host, window);
        }
        self.manager.unlock(window);
        for view in host.views(window) {
            host.erase_view_status(view, &self.status_key);
        }
    }

    /// Respace pane boundaries evenly on both axes
    pub fn distribute(&mut self, host: &mut dyn Host, window: WindowId) {
        let layout = host.layout(window);
        host.set_layout(window, layout.distributed());
    }

    /// Flip between NORMAL and MAXIMIZED. Maximizing locks the window
    /// against the two-column policy; restoring unlocks it.
    pub fn toggle_maximize(&mut self, host: &mut dyn Host, window: WindowId) {
        let layout = host.layout(window);
        if self.manager.is_maximized(window, &layout) {
            self.unmaximize(host, window);
        } else if host.num_panes(window) > 1 {
            self.maximize(host, window);
        }
    }

    /// Move focus to the next pane, wrapping from the last back to pane 0
    pub fn shift_pane(&mut self, host: &mut dyn Host, window: WindowId) {
        let n = host.num_panes(window);
        if n == 0 {
            return;
        }
        host.focus_pane(window, (host.active_pane(window) + 1) % n);
    }

    /// Move focus to the previous pane, wrapping from pane 0 to the last
    pub fn unshift_pane(&mut self, host: &mut dyn Host, window: WindowId) {
        let n = host.num_panes(window);
        if n == 0 {
            return;
        }
        host.focus_pane(window, (host.active_pane(window) + n - 1) % n);
    }

    /// Clone the active file into the neighboring pane, unless a clone of
    /// its buffer is already open somewhere in the window. Focus stays on
    /// the original view, so the clone opens behind it.
    pub fn clone_file_to_pane(&mut self, host: &mut dyn Host, window: WindowId) {
        let Some(original) = host.active_view(window) else {
            tracing::debug!("empty pane in window {:?}, nothing to clone", window);
            return;
        };
        let buffer = host.buffer_of(original);
        let duplicates = host
            .views(window)
            .iter()
            .filter(|view| host.buffer_of(**view) == buffer)
            .count();
        if duplicates > 1 {
            tracing::debug!("buffer already has a clone in window {:?}", window);
            return;
        }
        host.clone_active_file(window);
        host.move_active_to_neighboring_pane(window);
        host.focus_view(window, original);
        tracing::info!("cloned active file to neighboring pane in {:?}", window);
    }

    /// Apply the two-column policy to every window's active view, once at
    /// plugin load time.
    pub fn on_startup(&mut self, host: &mut dyn Host) {
        for window in host.windows() {
            if let Some(view) = host.active_view(window) {
                self.enforce_two_columns_on(host, view);
            }
        }
    }

    /// React to a host event
    pub fn handle_event(&mut self, host: &mut dyn Host, event: HostEvent) {
        match event {
            HostEvent::FileCreated(view) | HostEvent::FileLoaded(view) => {
                self.enforce_two_columns_on(host, view);
            }
            HostEvent::WindowCommand { window, name } => {
                if StructuralCommand::from_name(&name).is_some() {
                    // The pane structure is about to change under us;
                    // restore first so the record never goes stale.
                    self.unmaximize(host, window);
                } else if name == EXIT_COMMAND {
                    self.unmaximize_all(host);
                }
            }
            HostEvent::ViewActivated(view) => self.on_view_activated(host, view),
            HostEvent::Exiting => self.unmaximize_all(host),
        }
    }

    /// Maximized follows focus: if focus lands in a pane other than the
    /// one we maximized onto, re-maximize onto the new pane.
    fn on_view_activated(&mut self, host: &mut dyn Host, view: ViewId) {
        let Some(window) = host.window_of_view(view) else {
            tracing::debug!("activated view {:?} has no window", view);
            return;
        };
        let layout = host.layout(window);
        if !self.manager.is_maximized(window, &layout) {
            return;
        }
        let active = host.active_pane(window);
        if self.manager.maximized_pane(window) != Some(active) {
            self.unmaximize(host, window);
            self.maximize(host, window);
        }
    }

    fn enforce_two_columns_on(&mut self, host: &mut dyn Host, view: ViewId) {
        if !self.enforce_two_columns {
            return;
        }
        let Some(window) = host.window_of_view(view) else {
            tracing::debug!("view {:?} has no window, skipping enforcement", view);
            return;
        };
        let target = Layout::two_column();
        if host.layout(window) == target {
            tracing::debug!("window {:?} already two-column", window);
            return;
        }
        if self.probe.is_locked(&*host, &self.manager, window) {
            tracing::debug!("window {:?} is locked, leaving layout alone", window);
            return;
        }
        tracing::info!("forcing two-column layout on window {:?}", window);
        host.set_layout(window, target);
    }

    fn unmaximize_all(&mut self, host: &mut dyn Host) {
        for window in host.windows() {
            self.unmaximize(host, window);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panekit_host::MemHost;
    use panekit_layout::Cell;

    fn three_pane_window(host: &mut MemHost) -> WindowId {
        let layout = Layout {
            cols: vec![0.0, 0.33, 0.66, 1.0],
            rows: vec![0.0, 1.0],
            cells: vec![
                Cell::new(0, 0, 1, 1),
                Cell::new(1, 0, 2, 1),
                Cell::new(2, 0, 3, 1),
            ],
        };
        host.add_window(layout)
    }

    fn plugin() -> PanePlugin {
        PanePlugin::new(&Config::default())
    }

    #[test]
    fn maximize_single_pane_is_noop() {
        let mut host = MemHost::new();
        let window = host.add_window(Layout::single());
        let mut plugin = plugin();

        plugin.maximize(&mut host, window);

        assert_eq!(host.layout(window), Layout::single());
        assert!(!plugin.manager().has_record(window));
    }

    #[test]
    fn maximize_collapses_onto_active_pane() {
        let mut host = MemHost::new();
        let window = three_pane_window(&mut host);
        host.focus_pane(window, 1);
        let mut plugin = plugin();

        plugin.maximize(&mut host, window);

        let layout = host.layout(window);
        assert_eq!(layout.cols, vec![0.0, 0.0, 1.0, 1.0]);
        assert_eq!(layout.rows, vec![0.0, 1.0]);
        assert_eq!(plugin.manager().maximized_pane(window), Some(1));
    }

    #[test]
    fn unmaximize_restores_exact_boundaries() {
        let mut host = MemHost::new();
        let window = three_pane_window(&mut host);
        host.focus_pane(window, 2);
        let before = host.layout(window);
        let mut plugin = plugin();

        plugin.maximize(&mut host, window);
        plugin.unmaximize(&mut host, window);

        assert_eq!(host.layout(window), before);
        assert!(!plugin.manager().has_record(window));
    }

    #[test]
    fn unmaximize_without_record_distributes() {
        let mut host = MemHost::new();
        let window = three_pane_window(&mut host);
        // Collapse the geometry behind the plugin's back
        let collapsed = host.layout(window).maximized_onto(0).unwrap();
        host.set_layout(window, collapsed);
        let mut plugin = plugin();

        plugin.unmaximize(&mut host, window);

        assert_eq!(
            host.layout(window).cols,
            vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]
        );
    }

    #[test]
    fn unmaximize_normal_window_is_noop() {
        let mut host = MemHost::new();
        let window = three_pane_window(&mut host);
        let before = host.layout(window);
        let mut plugin = plugin();

        plugin.unmaximize(&mut host, window);

        assert_eq!(host.layout(window), before);
    }

    #[test]
    fn maximize_marks_views_and_restore_clears_them() {
        let mut host = MemHost::new();
        let window = host.add_window(Layout::two_column());
        let left = host.new_buffer();
        let right = host.new_buffer();
        let a = host.add_view(window, 0, left);
        let b = host.add_view(window, 1, right);
        let mut plugin = plugin();

        plugin.maximize(&mut host, window);
        assert_eq!(host.view_status(a, "0_maxpane"), Some("MAX"));
        assert_eq!(host.view_status(b, "0_maxpane"), Some("MAX"));

        plugin.unmaximize(&mut host, window);
        assert_eq!(host.view_status(a, "0_maxpane"), None);
        assert_eq!(host.view_status(b, "0_maxpane"), None);
    }

    #[test]
    fn shift_and_unshift_are_cyclic_inverses() {
        let mut host = MemHost::new();
        let window = three_pane_window(&mut host);
        host.focus_pane(window, 0);
        let mut plugin = plugin();

        plugin.shift_pane(&mut host, window);
        assert_eq!(host.active_pane(window), 1);
        plugin.unshift_pane(&mut host, window);
        assert_eq!(host.active_pane(window), 0);

        // Wrap both directions
        plugin.unshift_pane(&mut host, window);
        assert_eq!(host.active_pane(window), 2);
        plugin.shift_pane(&mut host, window);
        assert_eq!(host.active_pane(window), 0);

        // A full cycle returns to the start
        for _ in 0..3 {
            plugin.shift_pane(&mut host, window);
        }
        assert_eq!(host.active_pane(window), 0);
    }
}
