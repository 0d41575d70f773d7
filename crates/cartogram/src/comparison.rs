//! Labeled comparison mode: per-era travel-time breakdown for one node pair.
//!
//! Stateless and derived straight from route data. Only *direct* routes
//! qualify; a pair connected through the fallback table still reports
//! [`RouteComparison::NoDirectRoute`], which the UI must surface as an
//! explicit message rather than a chart of unrelated data.

use crate::config::{DAYS_PER_YEAR, DEFAULT_DAILY_TRIPS};
use crate::dataset::{Cartogram, NodeKey};

/// One era's row in the comparison strip.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub era: String,
    pub minutes: f32,
    /// Percent of travel time saved relative to the reference era.
    /// Negative when the corridor got slower.
    pub percent_saved: f32,
    /// Editorial estimate: minutes saved per trip, times assumed daily
    /// trips, times days per year, expressed in hours.
    pub annual_hours_saved: f32,
    pub is_reference: bool,
    pub highlighted: bool,
}

/// Result of comparing a node pair.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteComparison {
    Direct {
        a: NodeKey,
        b: NodeKey,
        distance_km: Option<f32>,
        note: Option<String>,
        /// Trips-per-day assumption behind the annual estimate.
        assumed_daily_trips: f32,
        /// One row per era, in declared era order.
        rows: Vec<ComparisonRow>,
    },
    /// First-class "no data" state, never an error.
    NoDirectRoute { a: NodeKey, b: NodeKey },
}

/// Compare the direct route between two nodes across every era.
pub fn compare_route(cartogram: &Cartogram, a: &NodeKey, b: &NodeKey) -> RouteComparison {
    let no_route = || RouteComparison::NoDirectRoute {
        a: a.clone(),
        b: b.clone(),
    };

    let (Some(ia), Some(ib)) = (cartogram.index_of(a), cartogram.index_of(b)) else {
        return no_route();
    };
    if ia == ib {
        return no_route();
    }
    let Some(route) = cartogram.route_between(ia, ib) else {
        return no_route();
    };

    let reference = cartogram.reference_era();
    let reference_minutes = route.minutes(reference);
    let daily_trips = route.daily_trips.unwrap_or(DEFAULT_DAILY_TRIPS);

    let rows = cartogram
        .eras()
        .iter()
        .enumerate()
        .map(|(i, era)| {
            let era_id = crate::dataset::EraId(i);
            let minutes = route.minutes(era_id);
            let saved_per_trip = reference_minutes - minutes;
            ComparisonRow {
                era: era.clone(),
                minutes,
                percent_saved: saved_per_trip / reference_minutes * 100.0,
                annual_hours_saved: saved_per_trip * daily_trips * DAYS_PER_YEAR / 60.0,
                is_reference: era_id == reference,
                highlighted: route.highlighted(era_id),
            }
        })
        .collect();

    RouteComparison::Direct {
        a: a.clone(),
        b: b.clone(),
        distance_km: route.distance_km,
        note: route.note.clone(),
        assumed_daily_trips: daily_trips,
        rows,
    }
}
