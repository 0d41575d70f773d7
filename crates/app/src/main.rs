use bevy::prelude::*;
use bevy::window::PresentMode;

use cartogram::Cartogram;
use rendering::view::CartogramView;

/// Bundled demo dataset: Moroccan intercity rail across four eras.
const MOROCCO_RAIL: &str = include_str!("../assets/morocco_rail.json");

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "ChronoMap".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((rendering::CartogramRenderPlugin, ui::UiPlugin));

    // Dataset problems are configuration errors: fail before the window
    // opens, with every violation listed.
    let dataset = match Cartogram::from_json(MOROCCO_RAIL) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    info!(
        "loaded cartogram dataset: {} nodes, {} routes, {} eras (anchor {})",
        dataset.node_count(),
        dataset.routes().len(),
        dataset.era_count(),
        dataset.anchor().label,
    );
    app.insert_resource(CartogramView::new(dataset));

    app.run();
}
