//! Route comparison panel.
//!
//! Picks two nodes and shows the per-era travel-time strip for their
//! direct route: minutes, percent saved vs the reference era, and the
//! annual-savings editorial estimate. A pair without a direct route gets
//! an explicit message, never an empty chart.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use cartogram::{compare_route, ComparisonRow, NodeKey, RouteComparison};
use rendering::view::CartogramView;

/// Panel visibility and the currently picked pair.
#[derive(Resource)]
pub struct ComparisonSelection {
    pub visible: bool,
    pub a: Option<NodeKey>,
    pub b: Option<NodeKey>,
}

impl Default for ComparisonSelection {
    fn default() -> Self {
        Self {
            visible: true,
            a: None,
            b: None,
        }
    }
}

/// Keybind (C) to toggle the panel.
pub fn comparison_panel_keybind(
    keys: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<ComparisonSelection>,
) {
    if keys.just_pressed(KeyCode::KeyC) {
        selection.visible = !selection.visible;
    }
}

/// Renders the comparison window.
pub fn comparison_panel_ui(
    mut contexts: EguiContexts,
    mut selection: ResMut<ComparisonSelection>,
    view: Option<Res<CartogramView>>,
) {
    let Some(view) = view else { return };
    if !selection.visible {
        return;
    }

    let mut open = true;
    egui::Window::new("Route comparison")
        .open(&mut open)
        .resizable(false)
        .default_width(320.0)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .show(contexts.ctx_mut(), |ui| {
            node_picker(ui, "From", &view, &mut selection.a);
            node_picker(ui, "To", &view, &mut selection.b);

            let (Some(a), Some(b)) = (selection.a.clone(), selection.b.clone()) else {
                ui.separator();
                ui.label("Pick two stations to compare.");
                return;
            };

            ui.separator();
            match compare_route(&view.cartogram, &a, &b) {
                RouteComparison::NoDirectRoute { a, b } => {
                    ui.label(format!("No direct route between {a} and {b}."));
                }
                RouteComparison::Direct {
                    distance_km,
                    note,
                    assumed_daily_trips,
                    rows,
                    ..
                } => {
                    if let Some(km) = distance_km {
                        ui.small(format!("{km:.0} km as the rail runs"));
                    }

                    let reference_minutes = rows
                        .iter()
                        .find(|r| r.is_reference)
                        .map(|r| r.minutes)
                        .unwrap_or(1.0);
                    for row in &rows {
                        era_strip(ui, row, reference_minutes);
                    }

                    if let Some(last) = rows.last() {
                        if last.annual_hours_saved > 0.0 {
                            ui.separator();
                            ui.small(format!(
                                "~{:.0} travel hours saved per year by {} \
                                 (editorial estimate: {:.0} trips/day)",
                                last.annual_hours_saved, last.era, assumed_daily_trips
                            ));
                        }
                    }

                    if let Some(note) = note {
                        ui.small(note);
                    }
                }
            }
        });
    if !open {
        selection.visible = false;
    }
}

/// One era's strip: label, bar scaled to the reference era, numbers.
fn era_strip(ui: &mut egui::Ui, row: &ComparisonRow, reference_minutes: f32) {
    ui.horizontal(|ui| {
        ui.add_sized([44.0, 18.0], egui::Label::new(&row.era));

        // A slower-than-reference era overflows the bar; clamp the fill,
        // not the numbers.
        let fraction = (row.minutes / reference_minutes).clamp(0.0, 1.0);
        let text = if row.is_reference {
            format!("{:.0} min (baseline)", row.minutes)
        } else if row.percent_saved >= 0.0 {
            format!("{:.0} min ({:.0}% faster)", row.minutes, row.percent_saved)
        } else {
            format!("{:.0} min ({:.0}% slower)", row.minutes, -row.percent_saved)
        };
        let bar = egui::ProgressBar::new(fraction).text(text);
        let bar = if row.highlighted {
            bar.fill(egui::Color32::from_rgb(237, 107, 31))
        } else {
            bar
        };
        ui.add(bar);
    });
}

/// Combo box over the dataset's nodes.
fn node_picker(
    ui: &mut egui::Ui,
    label: &str,
    view: &CartogramView,
    slot: &mut Option<NodeKey>,
) {
    let selected_text = slot
        .as_ref()
        .and_then(|key| view.cartogram.index_of(key))
        .map(|i| view.cartogram.node(i).label.clone())
        .unwrap_or_else(|| "(pick one)".to_string());

    egui::ComboBox::from_label(label)
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for node in view.cartogram.nodes() {
                ui.selectable_value(slot, Some(node.key.clone()), &node.label);
            }
        });
}
