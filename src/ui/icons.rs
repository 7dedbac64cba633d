//! Phosphor icon definitions for the UI.
//!
//! Provides icon constants using the Phosphor icon font.
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::registry::CelestialBody;

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Play icon (triangle pointing right)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Pause icon (two vertical bars)
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Close/X icon
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Fly-to icon
pub const FLY_TO: &str = egui_phosphor::regular::ROCKET_LAUNCH;
/// Time scale icon
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;

// Celestial body icons
/// Sun icon
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Planet/globe icon
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
/// Ringed planet icon
pub const RINGED_PLANET: &str = egui_phosphor::regular::PLANET;

/// Icon for a body's info card header.
pub fn body_icon(body: &CelestialBody) -> &'static str {
    if body.is_luminous {
        SUN
    } else if body.has_rings {
        RINGED_PLANET
    } else {
        PLANET
    }
}
