// ABOUTME: Opaque identifiers for host-owned objects.
// ABOUTME: Windows, views, and buffers are referenced by id only.

use serde::{Deserialize, Serialize};

/// Identifier for a host window. All per-window plugin state is keyed by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Identifier for a single file view inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewId(pub u64);

/// Identifier for the buffer backing a view. Two views showing the same
/// file share a buffer id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferId(pub u64);
