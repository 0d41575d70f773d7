//! The perceived-position transform.
//!
//! A node's perceived position in an era is its true offset from the anchor
//! scaled by the compression ratio `time(era) / time(reference_era)`. The
//! ratio is exactly 1.0 at the reference era (identity), approaches 0 for
//! instantaneous travel (the node lands on the anchor), and may exceed 1.0
//! for a corridor that got relatively slower — that pushes the node
//! outward and is never clamped.
//!
//! Pure, deterministic, and recomputed on every call: perceived positions
//! are never cached, so there is no invalidation problem.

use bevy::math::Vec2;

use crate::dataset::{Cartogram, EraId, NodeKey};


/// Travel time from a node to the anchor in one era.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorTime {
    /// A declared route connects the node straight to the anchor.
    Direct(f32),
    /// Hub fallback: the sum of the `node -> via` and `via -> anchor` legs.
    ViaHub { via: usize, minutes: f32 },
    /// No declared connectivity to the anchor. The node keeps its true
    /// position — a defined degraded behavior, not an error.
    Unrouted,
}

impl AnchorTime {
    pub fn minutes(&self) -> Option<f32> {
        match *self {
            AnchorTime::Direct(m) | AnchorTime::ViaHub { minutes: m, .. } => Some(m),
            AnchorTime::Unrouted => None,
        }
    }
}

/// One route projected into an era: endpoints, perceived positions, and
/// the era's highlight flag.
#[derive(Debug, Clone, PartialEq)]
pub struct EraEdge {
    pub a: NodeKey,
    pub b: NodeKey,
    pub a_pos: Vec2,
    pub b_pos: Vec2,
    pub highlighted: bool,
}

impl Cartogram {
    /// Resolve the travel time from a node to the anchor in `era`.
    ///
    /// Resolution order is a fixed rule: the direct route if declared,
    /// otherwise the node's entry in the explicit fallback table (both legs
    /// summed), otherwise [`AnchorTime::Unrouted`].
    pub fn time_to_anchor(&self, node: usize, era: EraId) -> AnchorTime {
        if node == self.anchor {
            return AnchorTime::Direct(0.0);
        }
        if let Some(route) = self.route_between(node, self.anchor) {
            return AnchorTime::Direct(route.minutes(era));
        }
        if let Some(via) = self.fallback_via(node) {
            // Both legs exist for every era; validation guarantees it.
            if let (Some(spoke), Some(trunk)) = (
                self.route_between(node, via),
                self.route_between(via, self.anchor),
            ) {
                return AnchorTime::ViaHub {
                    via,
                    minutes: spoke.minutes(era) + trunk.minutes(era),
                };
            }
        }
        AnchorTime::Unrouted
    }

    /// The compression ratio applied to a node's anchor offset in `era`.
    ///
    /// 1.0 for the anchor itself and for unrouted nodes (no compression).
    /// Always finite and non-negative on a validated dataset: reference-era
    /// times are checked to be positive at load.
    pub fn compression(&self, node: usize, era: EraId) -> f32 {
        if node == self.anchor {
            return 1.0;
        }
        let Some(now) = self.time_to_anchor(node, era).minutes() else {
            return 1.0;
        };
        let Some(reference) = self.time_to_anchor(node, self.reference_era).minutes() else {
            return 1.0;
        };
        now / reference
    }

    /// Perceived position of a node (by index) in `era`.
    ///
    /// The anchor is the fixed point of the transform: its perceived
    /// position equals its true position in every era. At the reference
    /// era the transform is the identity for every routed node.
    pub fn perceived_position_at(&self, node: usize, era: EraId) -> Vec2 {
        let anchor_pos = self.nodes[self.anchor].pos;
        if node == self.anchor {
            return anchor_pos;
        }
        let offset = self.nodes[node].pos - anchor_pos;
        anchor_pos + offset * self.compression(node, era)
    }

    /// Perceived position of a node (by key) in `era`, or `None` for a key
    /// the dataset does not declare.
    pub fn perceived_position(&self, key: &NodeKey, era: EraId) -> Option<Vec2> {
        self.index_of(key)
            .map(|i| self.perceived_position_at(i, era))
    }

    /// Every route projected into `era`, highlight taken from route metadata.
    pub fn edges_for_era(&self, era: EraId) -> Vec<EraEdge> {
        self.edges_for_era_with(era, |cartogram, route_idx, e| {
            cartogram.routes[route_idx].highlighted(e)
        })
    }

    /// Every route projected into `era`, highlight decided by the caller.
    pub fn edges_for_era_with(
        &self,
        era: EraId,
        highlight: impl Fn(&Cartogram, usize, EraId) -> bool,
    ) -> Vec<EraEdge> {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, route)| EraEdge {
                a: self.nodes[route.a].key.clone(),
                b: self.nodes[route.b].key.clone(),
                a_pos: self.perceived_position_at(route.a, era),
                b_pos: self.perceived_position_at(route.b, era),
                highlighted: highlight(self, i, era),
            })
            .collect()
    }
}
