// ABOUTME: Headless demo entry point.
// ABOUTME: Drives the plugin through a scripted host scenario with logging.

use anyhow::Result;

use panekit_core::Config;
use panekit_host::{Host, HostEvent, MemHost};
use panekit_layout::{Cell, Layout};
use panekit_plugin::PanePlugin;

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

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting panekit demo");

    let config = Config::load_or_default();
    let mut plugin = PanePlugin::new(&config);
    let mut host = MemHost::new();

    // A three-column window with a file in each pane
    let window = host.add_window(three_columns());
    let views: Vec<_> = (0..3)
        .map(|pane| {
            let buffer = host.new_buffer();
            host.add_view(window, pane, buffer)
        })
        .collect();

    // A second window that still has the default single pane
    let other = host.add_window(Layout::single());
    let buffer = host.new_buffer();
    host.add_view(other, 0, buffer);

    plugin.on_startup(&mut host);
    tracing::info!("after startup: {:?}", host.layout(other));

    // Maximize the middle pane, then watch focus drag the maximize along
    host.focus_pane(window, 1);
    plugin.toggle_maximize(&mut host, window);
    tracing::info!("maximized: {:?}", host.layout(window));

    host.focus_view(window, views[2]);
    plugin.handle_event(&mut host, HostEvent::ViewActivated(views[2]));
    tracing::info!("after focus change: {:?}", host.layout(window));

    // A structural pane command forces a restore first
    plugin.handle_event(
        &mut host,
        HostEvent::WindowCommand {
            window,
            name: "create_pane".to_string(),
        },
    );
    tracing::info!("after create_pane: {:?}", host.layout(window));

    // Clone the active file into the neighboring pane
    host.focus_view(window, views[0]);
    plugin.clone_file_to_pane(&mut host, window);
    tracing::info!("host commands issued: {:?}", host.command_log());

    // Shut down: every window is restored to its stored geometry
    plugin.handle_event(&mut host, HostEvent::Exiting);
    tracing::info!("demo finished");

    Ok(())
}
