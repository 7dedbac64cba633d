//! Rendering systems for the solar system view.
//!
//! This module provides the visual representation of the bodies, the
//! asteroid belt, orbit paths, highlights, labels and background.

mod asteroids;
mod background;
pub mod bodies;
pub mod highlight;
mod labels;
mod orbits;
pub mod textures;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::types::FrameSet;

use self::asteroids::{spawn_asteroid_rocks, sync_asteroid_rocks};
use self::background::BackgroundPlugin;
use self::bodies::{apply_orbital_rotation, apply_spin, CelestialBodyPlugin};
use self::highlight::{draw_hover, draw_selection};
use self::labels::draw_body_labels;
use self::orbits::draw_orbit_paths;
use self::textures::resolve_pending_textures;

// Re-export for use in other modules
pub use self::asteroids::AsteroidRock;
pub use self::background::{random_shell_point, StarfieldSettings};
pub use self::bodies::{BodySurface, OrbitPivot};
pub use self::highlight::HoveredBody;
pub use self::labels::LabelSettings;
pub use self::orbits::{orbit_radii, OrbitPathSettings};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((CelestialBodyPlugin, BackgroundPlugin))
            .init_resource::<OrbitPathSettings>()
            .init_resource::<LabelSettings>()
            .init_resource::<HoveredBody>()
            .add_systems(Startup, spawn_asteroid_rocks)
            .add_systems(Update, resolve_pending_textures)
            .add_systems(
                Update,
                (apply_orbital_rotation, apply_spin, sync_asteroid_rocks).in_set(FrameSet::Sync),
            )
            .add_systems(
                Update,
                (draw_orbit_paths, draw_selection, draw_hover).in_set(FrameSet::Draw),
            )
            .add_systems(EguiPrimaryContextPass, draw_body_labels);
    }
}
