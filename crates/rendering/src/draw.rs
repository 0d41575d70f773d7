//! Frame advancement and gizmo drawing.
//!
//! `advance_transition` is the only writer of animation state and runs
//! before the draw systems each frame. The draw systems consume the
//! engine's frame records; they never reach into the transform directly.

use bevy::prelude::*;

use crate::colors;
use crate::view::{CartogramStyle, CartogramView};

/// Marks a spawned label entity and remembers which node it follows.
#[derive(Component)]
pub struct NodeLabel {
    pub node: usize,
}

/// Feed the host frame clock into the view's transition machine.
pub fn advance_transition(time: Res<Time>, view: Option<ResMut<CartogramView>>) {
    let Some(mut view) = view else { return };
    view.advance(time.delta_secs());
}

/// Draw this frame's edges and nodes.
pub fn draw_cartogram(
    view: Option<Res<CartogramView>>,
    style: Res<CartogramStyle>,
    mut gizmos: Gizmos,
) {
    let Some(view) = view else { return };
    let frame = view.frame();

    // Edges first so nodes sit on top of the line joints.
    for edge in &frame.edges {
        let color = if edge.highlighted {
            colors::EDGE_HIGHLIGHT
        } else {
            colors::EDGE_BASE
        };
        gizmos.line_2d(edge.a_pos, edge.b_pos, color);
    }

    for node in &frame.nodes {
        gizmos.circle_2d(node.pos, style.node_radius, colors::NODE_FILL);
        if node.is_anchor {
            gizmos.circle_2d(node.pos, style.anchor_ring_radius, colors::ANCHOR_RING);
        }
    }
}

/// Spawn one label entity per node while a view exists; despawn them all
/// when the view is removed so tear-down leaves nothing behind.
pub fn manage_node_labels(
    mut commands: Commands,
    view: Option<Res<CartogramView>>,
    style: Res<CartogramStyle>,
    labels: Query<Entity, With<NodeLabel>>,
) {
    match view {
        Some(view) => {
            if !labels.is_empty() {
                return;
            }
            for (i, node) in view.cartogram.nodes().iter().enumerate() {
                commands.spawn((
                    NodeLabel { node: i },
                    Text2d::new(node.label.clone()),
                    TextFont {
                        font_size: style.label_font_size,
                        ..default()
                    },
                    TextColor(colors::LABEL),
                    Transform::from_translation((node.pos + style.label_offset).extend(1.0)),
                ));
            }
        }
        None => {
            for entity in &labels {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Keep each label over its node's current interpolated position.
pub fn sync_node_labels(
    view: Option<Res<CartogramView>>,
    style: Res<CartogramStyle>,
    mut labels: Query<(&NodeLabel, &mut Transform)>,
) {
    let Some(view) = view else { return };
    for (label, mut transform) in &mut labels {
        let pos = view.transition.position(&view.cartogram, label.node);
        transform.translation = (pos + style.label_offset).extend(1.0);
    }
}
