// ABOUTME: Events and command names dispatched by the host editor.
// ABOUTME: Structural pane commands are parsed from their wire names.

use panekit_core::{ViewId, WindowId};

/// Host command name that shuts the application down
pub const EXIT_COMMAND: &str = "exit";

/// Commands that change a window's pane structure.
///
/// The maximize state must never survive one of these, so the coordination
/// layer unmaximizes the window before any of them runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralCommand {
    CreatePane,
    CreatePaneWithFile,
    DestroyPane,
    TravelToPane,
    CarryFileToPane,
    CloneFileToPane,
}

impl StructuralCommand {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "create_pane" => Some(Self::CreatePane),
            "create_pane_with_file" => Some(Self::CreatePaneWithFile),
            "destroy_pane" => Some(Self::DestroyPane),
            "travel_to_pane" => Some(Self::TravelToPane),
            "carry_file_to_pane" => Some(Self::CarryFileToPane),
            "clone_file_to_pane" => Some(Self::CloneFileToPane),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CreatePane => "create_pane",
            Self::CreatePaneWithFile => "create_pane_with_file",
            Self::DestroyPane => "destroy_pane",
            Self::TravelToPane => "travel_to_pane",
            Self::CarryFileToPane => "carry_file_to_pane",
            Self::CloneFileToPane => "clone_file_to_pane",
        }
    }
}

/// Events the host delivers to the plugin, one at a time, on its dispatch
/// thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A new file view was created
    FileCreated(ViewId),
    /// A file view finished loading from disk
    FileLoaded(ViewId),
    /// A named window command is about to run
    WindowCommand { window: WindowId, name: String },
    /// A view received focus
    ViewActivated(ViewId),
    /// The application is shutting down
    Exiting,
}
