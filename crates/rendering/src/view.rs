//! The live cartogram instance.
//!
//! `CartogramView` is the owned resource tying a validated dataset to its
//! transition machine. It is created explicitly (the host inserts it) and
//! destroyed explicitly (the host removes it); every system in this crate
//! takes `Option<Res<CartogramView>>` and no-ops when the resource is
//! absent, so tearing a view down mid-transition leaves no partial state
//! behind and releases the frame loop immediately.

use bevy::prelude::*;

use cartogram::{render_frame, Cartogram, CartogramFrame, EraId, Transition};

/// One cartogram instance: dataset plus animator. Each view owns its own
/// transition state; nothing is shared across instances.
#[derive(Resource)]
pub struct CartogramView {
    pub cartogram: Cartogram,
    pub transition: Transition,
}

impl CartogramView {
    /// A view resting at the dataset's reference era.
    pub fn new(cartogram: Cartogram) -> Self {
        let transition = Transition::new(cartogram.reference_era());
        Self {
            cartogram,
            transition,
        }
    }

    /// Begin (or cleanly restart) a transition toward `era`.
    pub fn select_era(&mut self, era: EraId) {
        self.transition.select_era(&self.cartogram, era);
    }

    /// Advance the animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.transition.tick(dt);
    }

    /// This frame's draw records.
    pub fn frame(&self) -> CartogramFrame {
        render_frame(&self.cartogram, &self.transition)
    }
}

/// Visual tuning for the gizmo renderer.
#[derive(Resource)]
pub struct CartogramStyle {
    pub node_radius: f32,
    pub anchor_ring_radius: f32,
    /// Offset from a node's position to its label anchor.
    pub label_offset: Vec2,
    pub label_font_size: f32,
}

impl Default for CartogramStyle {
    fn default() -> Self {
        Self {
            node_radius: 6.0,
            anchor_ring_radius: 11.0,
            label_offset: Vec2::new(0.0, 16.0),
            label_font_size: 14.0,
        }
    }
}
