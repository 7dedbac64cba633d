//! Orbit path rendering using Bevy Gizmos.
//!
//! Orbits are circular in this model, so each path is a single gizmo
//! circle in the XZ plane at the body's orbital distance.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::registry::BodyRegistry;

/// Settings for orbit path rendering.
#[derive(Resource, Clone, Debug)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Number of segments per circle (higher = smoother).
    pub segments: u32,
    pub color: Color,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 128,
            color: Color::srgba(0.27, 0.27, 0.27, 0.3),
        }
    }
}

/// Radii of every orbit worth drawing (the star has none).
pub fn orbit_radii(registry: &BodyRegistry) -> impl Iterator<Item = f32> + '_ {
    registry
        .iter()
        .map(|body| body.orbital_distance)
        .filter(|distance| *distance > 0.0)
}

/// Draw a circle for every planetary orbit.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    registry: Res<BodyRegistry>,
) {
    if !settings.visible {
        return;
    }

    let flat = Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2));
    for radius in orbit_radii(&registry) {
        gizmos
            .circle(flat, radius, settings.color)
            .resolution(settings.segments.max(16));
    }
}
