//! Temporal-distance cartogram engine.
//!
//! Redraws a set of geographic points so their visual distance from a fixed
//! anchor reflects travel *time* rather than travel distance, and animates
//! the redrawing across discrete historical eras.
//!
//! The crate is surface-agnostic: it consumes a node/route dataset (see
//! [`dataset`]), computes perceived positions per era ([`transform`]),
//! drives the era-to-era animation ([`transition`]), and emits plain
//! placement records each frame ([`frame`]) for a host to draw with
//! whatever vector facility it has. It performs no draw calls itself.

pub mod comparison;
pub mod config;
pub mod dataset;
pub mod frame;
pub mod transform;
pub mod transition;

pub use comparison::{compare_route, ComparisonRow, RouteComparison};
pub use dataset::{
    Cartogram, DatasetError, EraId, LoadError, Node, NodeKey, RawDataset, RawFallback, RawNode,
    RawRoute, Route, Violation,
};
pub use frame::{render_frame, CartogramFrame, EdgeSegment, NodePlacement};
pub use transform::{AnchorTime, EraEdge};
pub use transition::{ease_out_cubic, Transition, TransitionState};
