//! Control panel - title, time scale slider and shortcut hints.
//!
//! Anchored to the top-left corner of the viewport.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::session::SessionState;
use crate::types::{SPEED_MAX, SPEED_MIN};

use super::icons;

/// Colors for the control panel.
mod colors {
    use bevy_egui::egui::Color32;

    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 180);
    pub const PANEL_BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const TITLE: Color32 = Color32::from_rgb(253, 184, 19);
    pub const TEXT: Color32 = Color32::from_rgb(220, 220, 230);
    pub const HINT: Color32 = Color32::from_rgb(140, 140, 160);
}

/// Slider granularity.
pub const SLIDER_STEP: f64 = 0.1;

const PANEL_WIDTH: f32 = 240.0;

/// Keyboard shortcuts listed under the slider.
const SHORTCUTS: &[(&str, &str)] = &[
    ("Espacio", "Pausa"),
    ("[ ]", "Velocidad"),
    ("F", "Viajar"),
    ("Esc", "Deseleccionar"),
];

/// Mouse controls, shown above the shortcuts.
pub const MOUSE_HINTS: &[&str] = &[
    "Clic en un cuerpo para ver su información",
    "Arrastra para rotar la vista",
    "Scroll para hacer zoom",
    "Clic derecho para mover",
];

/// Text next to the slider, e.g. `1.5x`.
pub fn speed_label(speed: f32) -> String {
    format!("{speed:.1}x")
}

/// System that renders the control panel.
pub fn control_panel_system(mut contexts: EguiContexts, mut session: ResMut<SessionState>) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("control_panel"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(16.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(colors::PANEL_BG)
                .stroke(egui::Stroke::new(1.0, colors::PANEL_BORDER))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_max_width(PANEL_WIDTH);

                    ui.label(
                        egui::RichText::new("Sistema Solar 3D")
                            .size(20.0)
                            .strong()
                            .color(colors::TITLE),
                    );

                    ui.add_space(8.0);
                    render_speed_slider(ui, &mut session);

                    ui.add_space(6.0);
                    render_hints(ui);
                });
        });
}

fn render_speed_slider(ui: &mut egui::Ui, session: &mut SessionState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(icons::CLOCK).size(14.0).color(colors::TEXT));
        ui.label(
            egui::RichText::new("Velocidad del Tiempo")
                .size(14.0)
                .color(colors::TEXT),
        );
    });

    ui.horizontal(|ui| {
        let (icon, tooltip) = if session.is_paused() {
            (icons::PLAY, "Reanudar (Espacio)")
        } else {
            (icons::PAUSE, "Pausar (Espacio)")
        };
        if ui
            .add(egui::Button::new(egui::RichText::new(icon).size(16.0)))
            .on_hover_text(tooltip)
            .clicked()
        {
            session.toggle_pause();
        }

        let mut speed = session.speed_multiplier();
        let response = ui.add(
            egui::Slider::new(&mut speed, SPEED_MIN..=SPEED_MAX)
                .step_by(SLIDER_STEP)
                .show_value(false),
        );
        if response.changed() {
            session.set_speed_multiplier(speed);
        }

        ui.label(
            egui::RichText::new(speed_label(session.speed_multiplier()))
                .monospace()
                .color(colors::TEXT),
        );
    });
}

fn render_hints(ui: &mut egui::Ui) {
    for hint in MOUSE_HINTS {
        ui.label(egui::RichText::new(*hint).small().color(colors::HINT));
    }
    ui.add_space(4.0);
    egui::Grid::new("shortcut_hints")
        .num_columns(2)
        .spacing([8.0, 2.0])
        .show(ui, |ui| {
            for (key, action) in SHORTCUTS {
                ui.label(egui::RichText::new(*key).monospace().small().color(colors::HINT));
                ui.label(egui::RichText::new(*action).small().color(colors::HINT));
                ui.end_row();
            }
        });
}
