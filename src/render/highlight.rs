//! Hover and selection highlighting for celestial bodies.

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::render::bodies::BodySurface;
use crate::session::SessionState;

/// Selection sphere radius relative to the body.
pub const SELECTION_SCALE: f32 = 1.15;

/// Hover ring radius relative to the body.
pub const HOVER_SCALE: f32 = 1.3;

/// Resource tracking the body under the cursor.
#[derive(Resource, Default, Debug)]
pub struct HoveredBody {
    pub key: Option<String>,
}

/// Draw a wireframe sphere around the selected body.
pub fn draw_selection(
    mut gizmos: Gizmos,
    session: Res<SessionState>,
    bodies: Query<(&BodySurface, &GlobalTransform)>,
) {
    let Some(selected) = session.selected_body() else {
        return;
    };

    let color = Color::srgba(1.0, 1.0, 0.0, 0.3);
    for (surface, transform) in bodies.iter() {
        if surface.key == selected {
            gizmos
                .sphere(
                    Isometry3d::from_translation(transform.translation()),
                    surface.radius * SELECTION_SCALE,
                    color,
                )
                .resolution(24);
        }
    }
}

/// Draw a camera-facing ring around the hovered body.
pub fn draw_hover(
    mut gizmos: Gizmos,
    hovered: Res<HoveredBody>,
    bodies: Query<(&BodySurface, &GlobalTransform)>,
    camera: Query<&GlobalTransform, With<MainCamera>>,
) {
    let Some(key) = hovered.key.as_deref() else {
        return;
    };
    let Ok(camera_transform) = camera.single() else {
        return;
    };

    let color = Color::srgba(0.0, 1.0, 1.0, 0.8);
    for (surface, transform) in bodies.iter() {
        if surface.key != key {
            continue;
        }
        let center = transform.translation();
        let facing = (camera_transform.translation() - center).normalize_or(Vec3::Z);
        let rotation = Quat::from_rotation_arc(Vec3::Z, facing);
        gizmos
            .circle(Isometry3d::new(center, rotation), surface.radius * HOVER_SCALE, color)
            .resolution(48);
    }
}
