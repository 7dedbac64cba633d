//! Body labels using egui for text rendering.
//!
//! Renders each body's display name just above it.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::camera::MainCamera;
use crate::render::bodies::BodySurface;

/// Settings for label rendering.
#[derive(Resource, Clone, Debug)]
pub struct LabelSettings {
    /// Whether labels are visible.
    pub visible: bool,
    /// Gap between the top of the body and the label, in scene units.
    pub height_offset: f32,
    pub font_size: f32,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            height_offset: 1.5,
            font_size: 14.0,
        }
    }
}

/// Draw labels for all bodies.
pub fn draw_body_labels(
    mut contexts: EguiContexts,
    bodies: Query<(&BodySurface, &GlobalTransform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    settings: Res<LabelSettings>,
) {
    if !settings.visible {
        return;
    }

    let Ok((camera, camera_transform)) = camera.single() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let painter = ctx.layer_painter(egui::LayerId::background());
    let font = egui::FontId::proportional(settings.font_size);

    for (surface, transform) in bodies.iter() {
        let anchor = transform.translation() + Vec3::Y * (surface.radius + settings.height_offset);

        // Skip bodies behind the camera
        let to_anchor = anchor - camera_transform.translation();
        if to_anchor.dot(camera_transform.forward().as_vec3()) <= 0.0 {
            continue;
        }

        let Ok(screen_pos) = camera.world_to_viewport(camera_transform, anchor) else {
            continue;
        };
        let pos = egui::pos2(screen_pos.x, screen_pos.y);

        // Shadow
        painter.text(
            pos + egui::vec2(1.0, 1.0),
            egui::Align2::CENTER_BOTTOM,
            &surface.display_name,
            font.clone(),
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
        );

        painter.text(
            pos,
            egui::Align2::CENTER_BOTTOM,
            &surface.display_name,
            font.clone(),
            egui::Color32::WHITE,
        );
    }
}
