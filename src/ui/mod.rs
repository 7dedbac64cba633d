//! UI module providing the egui overlay.
//!
//! A control panel in the top-left corner and an info card for the
//! selected body in the top-right corner.

mod control_panel;
pub mod icons;
mod info_panel;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use control_panel::{speed_label, MOUSE_HINTS, SLIDER_STEP};
pub use info_panel::{apply_card_action, fly_to_caption, loaded_preview, preview_size, InfoCardAction};

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<icons::FontsInitialized>()
            // Font initialization MUST run before any UI systems that use icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    control_panel::control_panel_system,
                    info_panel::info_panel_system,
                )
                    .after(icons::setup_fonts)
                    .run_if(|init: Res<icons::FontsInitialized>| init.0),
            );
    }
}
