use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod comparison_panel;
pub mod era_selector;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<comparison_panel::ComparisonSelection>()
            .add_systems(
                Update,
                (
                    era_selector::era_selector_ui,
                    comparison_panel::comparison_panel_ui,
                    comparison_panel::comparison_panel_keybind,
                ),
            );
    }
}
