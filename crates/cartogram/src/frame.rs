//! Per-frame placement records.
//!
//! The engine's only output surface: a flat list of node placements and
//! edge segments in the caller's plane. The host draws them with whatever
//! vector facility it has (gizmos here, SVG or canvas elsewhere); nothing
//! in this crate issues draw calls.

use bevy::math::Vec2;

use crate::dataset::{Cartogram, EraId, NodeKey};
use crate::transition::Transition;

/// Where to draw one node this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePlacement {
    pub key: NodeKey,
    pub label: String,
    pub pos: Vec2,
    pub is_anchor: bool,
}

/// Where to draw one edge this frame. Endpoints are the *current
/// interpolated* node positions; the highlight flag already reflects the
/// mid-transition era snap.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSegment {
    pub a: NodeKey,
    pub b: NodeKey,
    pub a_pos: Vec2,
    pub b_pos: Vec2,
    pub highlighted: bool,
}

/// Everything a host needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CartogramFrame {
    /// The era edge styling is taken from this frame.
    pub style_era: EraId,
    pub nodes: Vec<NodePlacement>,
    pub edges: Vec<EdgeSegment>,
}

/// Project the current transition state into draw records.
///
/// Cheap — O(nodes + routes) — and recomputed every frame; the frame is
/// transient and never cached.
pub fn render_frame(cartogram: &Cartogram, transition: &Transition) -> CartogramFrame {
    let style_era = transition.highlight_era();
    let positions = transition.positions(cartogram);

    let nodes = cartogram
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| NodePlacement {
            key: node.key.clone(),
            label: node.label.clone(),
            pos: positions[i],
            is_anchor: i == cartogram.anchor_index(),
        })
        .collect();

    let edges = cartogram
        .routes()
        .iter()
        .map(|route| EdgeSegment {
            a: cartogram.node(route.a).key.clone(),
            b: cartogram.node(route.b).key.clone(),
            a_pos: positions[route.a],
            b_pos: positions[route.b],
            highlighted: route.highlighted(style_era),
        })
        .collect();

    CartogramFrame {
        style_era,
        nodes,
        edges,
    }
}
