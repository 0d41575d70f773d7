//! Dataset loading and validation.
//!
//! The input contract is a static, load-once description of nodes, eras,
//! routes, and an explicit hub fallback table ([`RawDataset`], deserialized
//! with serde). Construction of a [`Cartogram`] validates the whole dataset
//! in one pass and reports *every* violation found, so authors can fix a
//! bad file in a single round trip.
//!
//! Nodes and routes are immutable after load. Perceived positions are never
//! stored here; they are derived per frame by the [`crate::transform`]
//! module, so there is a single source of truth and nothing to invalidate.

pub mod types;
pub mod validate;

#[cfg(test)]
mod tests;

pub use types::*;
pub use validate::{DatasetError, LoadError, Violation};
