use bevy::prelude::*;

pub mod camera;
pub mod colors;
pub mod draw;
pub mod view;


use view::CartogramStyle;

pub struct CartogramRenderPlugin;

impl Plugin for CartogramRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CartogramStyle>()
            .add_systems(Startup, camera::setup_camera)
            .add_systems(
                Update,
                (
                    draw::advance_transition,
                    draw::manage_node_labels,
                    draw::sync_node_labels.after(draw::advance_transition),
                    draw::draw_cartogram.after(draw::advance_transition),
                ),
            );
    }
}
