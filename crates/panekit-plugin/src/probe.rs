// ABOUTME: Lock-probe strategies for the two-column policy.
// ABOUTME: A window's lock signal may come from our lock set or host settings.

use panekit_core::{Config, WindowId};
use panekit_host::Host;

use crate::manager::PaneManager;

/// Decides whether a window is currently locked against automatic layout
/// changes. The policy layer stays agnostic to where the signal comes from.
pub trait LockProbe {
    fn is_locked(&self, host: &dyn Host, manager: &PaneManager, window: WindowId) -> bool;
}

/// Lock signal from our own lock set: a window is locked while we hold it
/// maximized.
#[derive(Debug, Default)]
pub struct InternalLock;

impl LockProbe for InternalLock {
    fn is_locked(&self, _host: &dyn Host, manager: &PaneManager, window: WindowId) -> bool {
        manager.is_locked(window)
    }
}

/// Lock signal from a host settings object maintained by an externally
/// installed maximize plugin.
///
/// The settings payload is read defensively: a missing object, a missing
/// key, or a malformed list all read as "not locked". Entries that are not
/// window ids are skipped.
#[derive(Debug)]
pub struct SharedSettingsLock {
    object: String,
    key: String,
}

impl SharedSettingsLock {
    pub fn new(object: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            key: "maximized_windows".to_string(),
        }
    }

    pub fn with_key(object: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            object: object.into(),
            key: key.into(),
        }
    }
}

impl LockProbe for SharedSettingsLock {
    fn is_locked(&self, host: &dyn Host, _manager: &PaneManager, window: WindowId) -> bool {
        let Some(value) = host.shared_settings(&self.object) else {
            return false;
        };
        let Some(list) = value.get(self.key.as_str()).and_then(|v| v.as_array()) else {
            tracing::warn!(
                "settings object '{}' has no '{}' list, treating as unlocked",
                self.object,
                self.key
            );
            return false;
        };
        list.iter()
            .filter_map(|v| v.as_u64())
            .any(|id| WindowId(id) == window)
    }
}

/// Pick the probe the config asks for
pub fn probe_from_config(config: &Config) -> Box<dyn LockProbe> {
    match &config.shared_lock_settings {
        Some(object) => Box::new(SharedSettingsLock::new(object.clone())),
        None => Box::new(InternalLock),
    }
}
