//! Unit tests for dataset loading and validation.

use std::collections::BTreeMap;

use super::types::{RawDataset, RawFallback, RawNode, RawRoute};
use super::validate::{LoadError, Violation};
use super::Cartogram;

// -------------------------------------------------------------------------
// Builders
// -------------------------------------------------------------------------

fn node(key: &str, x: f32, y: f32) -> RawNode {
    RawNode {
        key: key.to_string(),
        label: None,
        x,
        y,
    }
}

fn route(a: &str, b: &str, times: &[(&str, f32)]) -> RawRoute {
    RawRoute {
        a: a.to_string(),
        b: b.to_string(),
        time_by_era: times
            .iter()
            .map(|(era, t)| (era.to_string(), *t))
            .collect::<BTreeMap<_, _>>(),
        highlight_by_era: BTreeMap::new(),
        distance_km: None,
        daily_trips: None,
        note: None,
    }
}

fn valid_raw() -> RawDataset {
    RawDataset {
        nodes: vec![node("hub", 0.0, 0.0), node("east", 100.0, 0.0)],
        eras: vec!["old".to_string(), "new".to_string()],
        reference_era: "old".to_string(),
        anchor: "hub".to_string(),
        routes: vec![route("hub", "east", &[("old", 100.0), ("new", 25.0)])],
        fallbacks: Vec::new(),
    }
}

// -------------------------------------------------------------------------
// Happy path
// -------------------------------------------------------------------------

#[test]
fn test_valid_dataset_builds() {
    let cartogram = Cartogram::from_raw(valid_raw()).expect("dataset should validate");
    assert_eq!(cartogram.node_count(), 2);
    assert_eq!(cartogram.era_count(), 2);
    assert_eq!(cartogram.anchor().key.as_str(), "hub");
    assert_eq!(cartogram.era_label(cartogram.reference_era()), "old");
    assert!(cartogram.route_between(0, 1).is_some());
    assert!(cartogram.route_between(1, 0).is_some(), "routes are unordered");
}

#[test]
fn test_from_json_parses_the_wire_contract() {
    let json = r#"{
        "nodes": [
            { "key": "hub", "label": "The Hub", "x": 0, "y": 0 },
            { "key": "east", "x": 100, "y": 0 }
        ],
        "eras": ["old", "new"],
        "reference_era": "old",
        "anchor": "hub",
        "routes": [
            {
                "a": "hub",
                "b": "east",
                "time_by_era": { "old": 100, "new": 25 },
                "highlight_by_era": { "new": true },
                "distance_km": 180.5,
                "daily_trips": 900,
                "note": "express service from the new era"
            }
        ]
    }"#;
    let cartogram = Cartogram::from_json(json).expect("json should load");
    assert_eq!(cartogram.node(0).label, "The Hub");
    assert_eq!(cartogram.node(1).label, "east", "label defaults to the key");
    let r = cartogram.route_between(0, 1).unwrap();
    assert_eq!(r.distance_km, Some(180.5));
    assert_eq!(r.daily_trips, Some(900.0));
    let new = cartogram.era_id("new").unwrap();
    assert!(r.highlighted(new));
    let old = cartogram.era_id("old").unwrap();
    assert!(!r.highlighted(old), "highlight defaults to false per era");
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let err = Cartogram::from_json("{ not json").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

// -------------------------------------------------------------------------
// Violations are collected, not short-circuited
// -------------------------------------------------------------------------

#[test]
fn test_all_violations_reported_in_one_pass() {
    let mut raw = valid_raw();
    raw.anchor = "nowhere".to_string();
    raw.reference_era = "prehistory".to_string();
    raw.routes
        .push(route("hub", "ghost", &[("old", 10.0), ("new", 5.0)]));

    let err = Cartogram::from_raw(raw).unwrap_err();
    assert!(err.violations.len() >= 3, "got: {err}");
    assert!(err
        .violations
        .contains(&Violation::UnknownAnchor("nowhere".to_string())));
    assert!(err
        .violations
        .contains(&Violation::UnknownReferenceEra("prehistory".to_string())));
    assert!(err.violations.iter().any(|v| matches!(
        v,
        Violation::UnknownRouteNode { node, .. } if node == "ghost"
    )));
}

#[test]
fn test_error_display_lists_every_violation() {
    let mut raw = valid_raw();
    raw.anchor = "nowhere".to_string();
    raw.reference_era = "prehistory".to_string();
    let err = Cartogram::from_raw(raw).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("2 violation(s)"), "got: {text}");
    assert!(text.contains("1."));
    assert!(text.contains("2."));
}

#[test]
fn test_missing_era_time_is_rejected() {
    let mut raw = valid_raw();
    raw.routes = vec![route("hub", "east", &[("old", 100.0)])];
    let err = Cartogram::from_raw(raw).unwrap_err();
    assert!(err.violations.iter().any(|v| matches!(
        v,
        Violation::MissingEraTime { era, .. } if era == "new"
    )));
}

#[test]
fn test_zero_reference_time_fails_at_load_not_render() {
    let mut raw = valid_raw();
    raw.routes = vec![route("hub", "east", &[("old", 0.0), ("new", 25.0)])];
    let err = Cartogram::from_raw(raw).unwrap_err();
    assert!(err
        .violations
        .contains(&Violation::ZeroReferenceTime("hub-east".to_string())));
}

#[test]
fn test_zero_time_outside_reference_era_is_allowed() {
    let mut raw = valid_raw();
    raw.routes = vec![route("hub", "east", &[("old", 100.0), ("new", 0.0)])];
    assert!(Cartogram::from_raw(raw).is_ok());
}

#[test]
fn test_non_finite_and_negative_times_are_rejected() {
    let mut raw = valid_raw();
    raw.routes = vec![
        route("hub", "east", &[("old", f32::NAN), ("new", -5.0)]),
    ];
    let err = Cartogram::from_raw(raw).unwrap_err();
    let count = err
        .violations
        .iter()
        .filter(|v| matches!(v, Violation::InvalidTime { .. }))
        .count();
    assert_eq!(count, 2);
}

#[test]
fn test_duplicate_and_self_routes_are_rejected() {
    let mut raw = valid_raw();
    raw.routes.push(route("east", "hub", &[("old", 90.0), ("new", 20.0)]));
    raw.routes.push(route("hub", "hub", &[("old", 1.0), ("new", 1.0)]));
    let err = Cartogram::from_raw(raw).unwrap_err();
    assert!(err
        .violations
        .contains(&Violation::DuplicateRoute("east-hub".to_string())));
    assert!(err
        .violations
        .contains(&Violation::SelfRoute("hub-hub".to_string())));
}

#[test]
fn test_duplicate_nodes_and_eras_are_rejected() {
    let mut raw = valid_raw();
    raw.nodes.push(node("east", 1.0, 1.0));
    raw.eras.push("old".to_string());
    let err = Cartogram::from_raw(raw).unwrap_err();
    assert!(err
        .violations
        .contains(&Violation::DuplicateNode("east".to_string())));
    assert!(err
        .violations
        .contains(&Violation::DuplicateEra("old".to_string())));
}

#[test]
fn test_undeclared_era_on_route_is_rejected() {
    let mut raw = valid_raw();
    raw.routes = vec![route(
        "hub",
        "east",
        &[("old", 100.0), ("new", 25.0), ("future", 5.0)],
    )];
    let err = Cartogram::from_raw(raw).unwrap_err();
    assert!(err.violations.iter().any(|v| matches!(
        v,
        Violation::UnknownRouteEra { era, .. } if era == "future"
    )));
}

#[test]
fn test_empty_dataset_is_rejected() {
    let raw = RawDataset {
        nodes: Vec::new(),
        eras: Vec::new(),
        reference_era: "old".to_string(),
        anchor: "hub".to_string(),
        routes: Vec::new(),
        fallbacks: Vec::new(),
    };
    let err = Cartogram::from_raw(raw).unwrap_err();
    assert!(err.violations.contains(&Violation::NoNodes));
    assert!(err.violations.contains(&Violation::NoEras));
}

// -------------------------------------------------------------------------
// Fallback table rules
// -------------------------------------------------------------------------

fn raw_with_fallback() -> RawDataset {
    let mut raw = valid_raw();
    raw.nodes.push(node("village", 160.0, 40.0));
    raw.routes
        .push(route("village", "east", &[("old", 30.0), ("new", 15.0)]));
    raw.fallbacks = vec![RawFallback {
        node: "village".to_string(),
        via: "east".to_string(),
    }];
    raw
}

#[test]
fn test_valid_fallback_builds() {
    let cartogram = Cartogram::from_raw(raw_with_fallback()).expect("fallback should validate");
    let village = cartogram.index_of(&"village".into()).unwrap();
    let east = cartogram.index_of(&"east".into()).unwrap();
    assert_eq!(cartogram.fallback_via(village), Some(east));
}

#[test]
fn test_fallback_missing_spoke_leg_is_rejected() {
    let mut raw = raw_with_fallback();
    raw.routes.retain(|r| r.a != "village");
    let err = Cartogram::from_raw(raw).unwrap_err();
    assert!(err.violations.iter().any(|v| matches!(
        v,
        Violation::MissingFallbackLeg { node, .. } if node == "village"
    )));
}

#[test]
fn test_fallback_via_without_trunk_route_is_rejected() {
    // Chain: village -> east -> hub, but east itself has no route to hub.
    let mut raw = raw_with_fallback();
    raw.routes.retain(|r| !(r.a == "hub" && r.b == "east"));
    let err = Cartogram::from_raw(raw).unwrap_err();
    assert!(err.violations.iter().any(|v| matches!(
        v,
        Violation::FallbackViaUnrouted { via, .. } if via == "east"
    )));
}

#[test]
fn test_fallback_self_anchor_and_duplicate_are_rejected() {
    let mut raw = raw_with_fallback();
    raw.fallbacks.push(RawFallback {
        node: "village".to_string(),
        via: "east".to_string(),
    });
    raw.fallbacks.push(RawFallback {
        node: "east".to_string(),
        via: "east".to_string(),
    });
    raw.fallbacks.push(RawFallback {
        node: "hub".to_string(),
        via: "east".to_string(),
    });
    let err = Cartogram::from_raw(raw).unwrap_err();
    assert!(err
        .violations
        .contains(&Violation::DuplicateFallback("village".to_string())));
    assert!(err
        .violations
        .contains(&Violation::FallbackViaSelf("east".to_string())));
    assert!(err
        .violations
        .contains(&Violation::FallbackForAnchor("hub".to_string())));
}

#[test]
fn test_fallback_referencing_unknown_nodes_is_rejected() {
    let mut raw = valid_raw();
    raw.fallbacks = vec![RawFallback {
        node: "ghost".to_string(),
        via: "phantom".to_string(),
    }];
    let err = Cartogram::from_raw(raw).unwrap_err();
    let count = err
        .violations
        .iter()
        .filter(|v| matches!(v, Violation::UnknownFallbackNode(_)))
        .count();
    assert_eq!(count, 2);
}
