//! Color constants for the cartogram renderer.
//!
//! Kept as data so the transform stays free of presentation concerns;
//! highlight identity comes from route metadata, color comes from here.

use bevy::prelude::*;

/// Ordinary route line.
pub const EDGE_BASE: Color = Color::srgb(0.45, 0.47, 0.52);

/// Route featured in the current style era (e.g. high-speed service).
pub const EDGE_HIGHLIGHT: Color = Color::srgb(0.93, 0.42, 0.12);

/// Node disc.
pub const NODE_FILL: Color = Color::srgb(0.16, 0.18, 0.22);

/// Extra ring drawn around the anchor node.
pub const ANCHOR_RING: Color = Color::srgb(0.80, 0.16, 0.22);

/// Node label text.
pub const LABEL: Color = Color::srgb(0.25, 0.27, 0.32);

/// Stable accent color for an era, by era index.
pub fn era_color(index: usize) -> Color {
    const HUES: [[f32; 3]; 6] = [
        [0.55, 0.48, 0.38],
        [0.35, 0.55, 0.70],
        [0.30, 0.65, 0.45],
        [0.93, 0.42, 0.12],
        [0.60, 0.40, 0.85],
        [0.85, 0.30, 0.40],
    ];
    let [r, g, b] = HUES[index % HUES.len()];
    Color::srgb(r, g, b)
}
