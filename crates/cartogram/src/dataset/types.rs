//! Raw (serde) and validated dataset types.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use bevy::math::Vec2;
use serde::Deserialize;

// =============================================================================
// Identity types
// =============================================================================

/// Stable string identity for a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct NodeKey(pub String);

impl NodeKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeKey {
    fn from(s: &str) -> Self {
        NodeKey(s.to_string())
    }
}

/// Index of an era in the dataset's declared era order.
///
/// Eras are totally ordered; a larger index is a later era. The id is only
/// meaningful for the dataset it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EraId(pub usize);

// =============================================================================
// Raw input forms (the load-once wire contract)
// =============================================================================

/// The unvalidated dataset as authored, straight out of serde.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDataset {
    pub nodes: Vec<RawNode>,
    /// Ordered era labels, earliest first.
    pub eras: Vec<String>,
    /// The era compression ratios are normalized against (usually the
    /// earliest and slowest).
    pub reference_era: String,
    /// The fixed hub all perceived positions are computed relative to.
    pub anchor: String,
    pub routes: Vec<RawRoute>,
    /// Explicit hub fallback table: nodes with no direct route to the
    /// anchor reach it through the named intermediate.
    #[serde(default)]
    pub fallbacks: Vec<RawFallback>,
}

/// A named point in the caller's already-projected plane.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    pub key: String,
    /// Display label; defaults to the key.
    #[serde(default)]
    pub label: Option<String>,
    pub x: f32,
    pub y: f32,
}

/// An unordered node pair with a travel time per era.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRoute {
    pub a: String,
    pub b: String,
    /// Minutes of travel per era label. An entry is required for every
    /// declared era.
    pub time_by_era: BTreeMap<String, f32>,
    /// Per-era featured flag (e.g. "high-speed service in this era").
    #[serde(default)]
    pub highlight_by_era: BTreeMap<String, bool>,
    #[serde(default)]
    pub distance_km: Option<f32>,
    /// Assumed one-way trips per day, feeding the editorial annual-savings
    /// estimate. Falls back to a crate-wide default when absent.
    #[serde(default)]
    pub daily_trips: Option<f32>,
    #[serde(default)]
    pub note: Option<String>,
}

/// One entry of the hub fallback table: `node` reaches the anchor via the
/// two declared legs `node -> via` and `via -> anchor`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFallback {
    pub node: String,
    pub via: String,
}

// =============================================================================
// Validated forms
// =============================================================================

/// A validated node.
#[derive(Debug, Clone)]
pub struct Node {
    pub key: NodeKey,
    pub label: String,
    /// True geographic position in the caller's projected plane.
    pub pos: Vec2,
}

/// A validated route. Endpoints and times are resolved to indices so the
/// per-frame transform never does string lookups.
#[derive(Debug, Clone)]
pub struct Route {
    /// Node index of one endpoint.
    pub a: usize,
    /// Node index of the other endpoint.
    pub b: usize,
    /// Minutes of travel, indexed by `EraId`.
    pub minutes_by_era: Vec<f32>,
    /// Featured flag, indexed by `EraId`.
    pub highlight_by_era: Vec<bool>,
    pub distance_km: Option<f32>,
    pub daily_trips: Option<f32>,
    pub note: Option<String>,
}

impl Route {
    pub fn minutes(&self, era: EraId) -> f32 {
        self.minutes_by_era[era.0]
    }

    pub fn highlighted(&self, era: EraId) -> bool {
        self.highlight_by_era[era.0]
    }

    /// The endpoint opposite `node`, or `None` if `node` is not on this route.
    pub fn other_end(&self, node: usize) -> Option<usize> {
        if node == self.a {
            Some(self.b)
        } else if node == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// The validated, immutable cartogram dataset.
///
/// Constructed via [`Cartogram::from_raw`] or [`Cartogram::from_json`]
/// (see [`super::validate`]); construction is the only place validation
/// happens, so every method here may assume a consistent dataset.
#[derive(Debug, Clone)]
pub struct Cartogram {
    pub(crate) nodes: Vec<Node>,
    pub(crate) node_index: HashMap<NodeKey, usize>,
    pub(crate) eras: Vec<String>,
    pub(crate) reference_era: EraId,
    pub(crate) anchor: usize,
    pub(crate) routes: Vec<Route>,
    /// Route lookup keyed by normalized `(min, max)` endpoint indices.
    pub(crate) route_index: HashMap<(usize, usize), usize>,
    /// Hub fallback table, node index -> via node index.
    pub(crate) fallback_via: HashMap<usize, usize>,
}

impl Cartogram {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn index_of(&self, key: &NodeKey) -> Option<usize> {
        self.node_index.get(key).copied()
    }

    /// Ordered era labels, earliest first.
    pub fn eras(&self) -> &[String] {
        &self.eras
    }

    pub fn era_count(&self) -> usize {
        self.eras.len()
    }

    pub fn era_id(&self, label: &str) -> Option<EraId> {
        self.eras.iter().position(|e| e == label).map(EraId)
    }

    pub fn era_label(&self, era: EraId) -> &str {
        &self.eras[era.0]
    }

    pub fn reference_era(&self) -> EraId {
        self.reference_era
    }

    pub fn anchor_index(&self) -> usize {
        self.anchor
    }

    pub fn anchor(&self) -> &Node {
        &self.nodes[self.anchor]
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The direct route between two nodes, in either order.
    pub fn route_between(&self, a: usize, b: usize) -> Option<&Route> {
        let pair = (a.min(b), a.max(b));
        self.route_index.get(&pair).map(|&i| &self.routes[i])
    }

    /// The declared fallback intermediate for a node, if any.
    pub fn fallback_via(&self, node: usize) -> Option<usize> {
        self.fallback_via.get(&node).copied()
    }
}
