//! Load-time validation: one pass, every violation reported.

use std::collections::HashMap;
use std::fmt;

use bevy::log::warn;
use bevy::math::Vec2;
use thiserror::Error;

use super::types::{Cartogram, EraId, Node, NodeKey, RawDataset, RawRoute, Route};

// =============================================================================
// Errors
// =============================================================================

/// A single dataset rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("dataset declares no nodes")]
    NoNodes,
    #[error("dataset declares no eras")]
    NoEras,
    #[error("duplicate node key `{0}`")]
    DuplicateNode(String),
    #[error("duplicate era label `{0}`")]
    DuplicateEra(String),
    #[error("reference era `{0}` is not a declared era")]
    UnknownReferenceEra(String),
    #[error("anchor `{0}` is not a declared node")]
    UnknownAnchor(String),
    #[error("route `{route}` references undeclared node `{node}`")]
    UnknownRouteNode { route: String, node: String },
    #[error("route `{0}` connects a node to itself")]
    SelfRoute(String),
    #[error("route `{0}` is declared more than once")]
    DuplicateRoute(String),
    #[error("route `{route}` has no travel time for era `{era}`")]
    MissingEraTime { route: String, era: String },
    #[error("route `{route}` has a non-finite or negative time for era `{era}`")]
    InvalidTime { route: String, era: String },
    #[error("route `{0}` has a zero travel time in the reference era")]
    ZeroReferenceTime(String),
    #[error("route `{route}` declares a time for undeclared era `{era}`")]
    UnknownRouteEra { route: String, era: String },
    #[error("fallback references undeclared node `{0}`")]
    UnknownFallbackNode(String),
    #[error("fallback for `{0}` routes a node via itself")]
    FallbackViaSelf(String),
    #[error("fallback declared for the anchor `{0}`")]
    FallbackForAnchor(String),
    #[error("node `{0}` has more than one fallback entry")]
    DuplicateFallback(String),
    #[error("fallback for `{node}`: no declared route between `{node}` and `{via}`")]
    MissingFallbackLeg { node: String, via: String },
    #[error("fallback for `{node}`: via `{via}` has no direct route to the anchor (chained fallbacks are not supported)")]
    FallbackViaUnrouted { node: String, via: String },
}

/// Every violation found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetError {
    pub violations: Vec<Violation>,
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "invalid cartogram dataset ({} violation(s)):",
            self.violations.len()
        )?;
        for (i, v) in self.violations.iter().enumerate() {
            writeln!(f, "  {}. {v}", i + 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for DatasetError {}

/// Parse-or-validate failure when loading from JSON text.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] DatasetError),
}

// =============================================================================
// Validation
// =============================================================================

fn route_label(route: &RawRoute) -> String {
    format!("{}-{}", route.a, route.b)
}

impl Cartogram {
    /// Parse and validate a JSON dataset in one step.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw)?)
    }

    /// Validate a raw dataset and build the indexed form.
    ///
    /// Fails with a [`DatasetError`] carrying *every* violation found, not
    /// just the first. Travel times that grow across era order are legal
    /// (the node moves outward) but are usually authoring mistakes, so they
    /// are logged as warnings rather than rejected.
    pub fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        let mut violations = Vec::new();

        if raw.nodes.is_empty() {
            violations.push(Violation::NoNodes);
        }
        if raw.eras.is_empty() {
            violations.push(Violation::NoEras);
        }

        // Node and era identity.
        let mut node_index: HashMap<NodeKey, usize> = HashMap::new();
        let mut nodes: Vec<Node> = Vec::with_capacity(raw.nodes.len());
        for raw_node in &raw.nodes {
            let key = NodeKey(raw_node.key.clone());
            if node_index.contains_key(&key) {
                violations.push(Violation::DuplicateNode(raw_node.key.clone()));
                continue;
            }
            node_index.insert(key.clone(), nodes.len());
            nodes.push(Node {
                label: raw_node.label.clone().unwrap_or_else(|| raw_node.key.clone()),
                key,
                pos: Vec2::new(raw_node.x, raw_node.y),
            });
        }

        let mut eras: Vec<String> = Vec::with_capacity(raw.eras.len());
        for era in &raw.eras {
            if eras.contains(era) {
                violations.push(Violation::DuplicateEra(era.clone()));
            } else {
                eras.push(era.clone());
            }
        }

        let reference_era = match eras.iter().position(|e| *e == raw.reference_era) {
            Some(i) => EraId(i),
            None => {
                violations.push(Violation::UnknownReferenceEra(raw.reference_era.clone()));
                EraId(0)
            }
        };

        let anchor = match node_index.get(&NodeKey(raw.anchor.clone())) {
            Some(&i) => i,
            None => {
                violations.push(Violation::UnknownAnchor(raw.anchor.clone()));
                0
            }
        };

        // Routes.
        let mut routes: Vec<Route> = Vec::with_capacity(raw.routes.len());
        let mut route_index: HashMap<(usize, usize), usize> = HashMap::new();
        for raw_route in &raw.routes {
            let label = route_label(raw_route);

            let a = node_index.get(&NodeKey(raw_route.a.clone())).copied();
            let b = node_index.get(&NodeKey(raw_route.b.clone())).copied();
            if a.is_none() {
                violations.push(Violation::UnknownRouteNode {
                    route: label.clone(),
                    node: raw_route.a.clone(),
                });
            }
            if b.is_none() {
                violations.push(Violation::UnknownRouteNode {
                    route: label.clone(),
                    node: raw_route.b.clone(),
                });
            }

            // Times for exactly the declared eras.
            let mut minutes_by_era = Vec::with_capacity(eras.len());
            for (era_idx, era) in eras.iter().enumerate() {
                match raw_route.time_by_era.get(era) {
                    None => {
                        violations.push(Violation::MissingEraTime {
                            route: label.clone(),
                            era: era.clone(),
                        });
                        minutes_by_era.push(f32::NAN);
                    }
                    Some(&t) if !t.is_finite() || t < 0.0 => {
                        violations.push(Violation::InvalidTime {
                            route: label.clone(),
                            era: era.clone(),
                        });
                        minutes_by_era.push(f32::NAN);
                    }
                    Some(&t) => {
                        if era_idx == reference_era.0 && t == 0.0 {
                            // Zero here would divide the compression ratio later.
                            violations.push(Violation::ZeroReferenceTime(label.clone()));
                        }
                        minutes_by_era.push(t);
                    }
                }
            }
            for era in raw_route.time_by_era.keys() {
                if !eras.contains(era) {
                    violations.push(Violation::UnknownRouteEra {
                        route: label.clone(),
                        era: era.clone(),
                    });
                }
            }

            let highlight_by_era = eras
                .iter()
                .map(|era| raw_route.highlight_by_era.get(era).copied().unwrap_or(false))
                .collect();

            let (Some(a), Some(b)) = (a, b) else { continue };
            if a == b {
                violations.push(Violation::SelfRoute(label.clone()));
                continue;
            }
            let pair = (a.min(b), a.max(b));
            if route_index.contains_key(&pair) {
                violations.push(Violation::DuplicateRoute(label.clone()));
                continue;
            }

            // Slower-over-time corridors are legal; flag them for the author.
            for w in minutes_by_era.windows(2) {
                if w[0].is_finite() && w[1].is_finite() && w[1] > w[0] {
                    warn!(
                        "route {label}: travel time increases across era order ({} -> {} min); \
                         the node will move away from the anchor",
                        w[0], w[1]
                    );
                    break;
                }
            }

            route_index.insert(pair, routes.len());
            routes.push(Route {
                a,
                b,
                minutes_by_era,
                highlight_by_era,
                distance_km: raw_route.distance_km,
                daily_trips: raw_route.daily_trips,
                note: raw_route.note.clone(),
            });
        }

        // Hub fallback table.
        let mut fallback_via: HashMap<usize, usize> = HashMap::new();
        for fb in &raw.fallbacks {
            let node = node_index.get(&NodeKey(fb.node.clone())).copied();
            let via = node_index.get(&NodeKey(fb.via.clone())).copied();
            if node.is_none() {
                violations.push(Violation::UnknownFallbackNode(fb.node.clone()));
            }
            if via.is_none() {
                violations.push(Violation::UnknownFallbackNode(fb.via.clone()));
            }
            let (Some(node), Some(via)) = (node, via) else { continue };
            if node == via {
                violations.push(Violation::FallbackViaSelf(fb.node.clone()));
                continue;
            }
            if node == anchor {
                violations.push(Violation::FallbackForAnchor(fb.node.clone()));
                continue;
            }
            if fallback_via.contains_key(&node) {
                violations.push(Violation::DuplicateFallback(fb.node.clone()));
                continue;
            }
            let leg = (node.min(via), node.max(via));
            if !route_index.contains_key(&leg) {
                violations.push(Violation::MissingFallbackLeg {
                    node: fb.node.clone(),
                    via: fb.via.clone(),
                });
            }
            // One level only: the via must reach the anchor directly.
            let trunk = (via.min(anchor), via.max(anchor));
            if via != anchor && !route_index.contains_key(&trunk) {
                violations.push(Violation::FallbackViaUnrouted {
                    node: fb.node.clone(),
                    via: fb.via.clone(),
                });
            }
            fallback_via.insert(node, via);
        }

        if !violations.is_empty() {
            return Err(DatasetError { violations });
        }

        Ok(Cartogram {
            nodes,
            node_index,
            eras,
            reference_era,
            anchor,
            routes,
            route_index,
            fallback_via,
        })
    }
}
