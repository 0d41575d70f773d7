//! Era selector panel.
//!
//! One button per era in declared order. Clicking mid-transition is fine:
//! the view restarts the tween from the currently displayed positions.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use cartogram::EraId;
use rendering::colors::era_color;
use rendering::view::CartogramView;

/// Renders the era selector window.
pub fn era_selector_ui(mut contexts: EguiContexts, view: Option<ResMut<CartogramView>>) {
    let Some(mut view) = view else { return };

    egui::Window::new("Eras")
        .resizable(false)
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                let current = view.transition.target_era();
                for i in 0..view.cartogram.era_count() {
                    let era = EraId(i);
                    let label = view.cartogram.era_label(era).to_string();
                    let selected = era == current;

                    let accent = to_egui_color(era_color(i));
                    let text = if selected {
                        egui::RichText::new(label).color(accent).strong()
                    } else {
                        egui::RichText::new(label)
                    };
                    if ui.selectable_label(selected, text).clicked() && !selected {
                        view.select_era(era);
                    }
                }
            });

            if view.transition.is_transitioning() {
                ui.small("redrawing…");
            } else {
                let reference = view.cartogram.reference_era();
                let era = view.transition.target_era();
                if era == reference {
                    ui.small("reference era: true geography");
                } else {
                    ui.small("distances scaled by travel time");
                }
            }
        });
}

fn to_egui_color(color: Color) -> egui::Color32 {
    let [r, g, b, a] = color.to_srgba().to_u8_array();
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
