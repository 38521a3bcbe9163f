// ABOUTME: Pane layout state machine for panekit.
// ABOUTME: Maximize/restore store, layout commands, two-column policy, event handling.

mod manager;
mod plugin;
mod probe;

pub use manager::{MaxRecord, PaneManager};
pub use plugin::PanePlugin;
pub use probe::{InternalLock, LockProbe, SharedSettingsLock};
