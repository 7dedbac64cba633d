//! Input handling for keyboard shortcuts and mouse picking.
//!
//! Provides keyboard controls for the time scale, selection and fly-to.
//! A left click that does not drag selects the body under the cursor.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;

use crate::camera::MainCamera;
use crate::render::{BodySurface, HoveredBody};
use crate::session::SessionState;
use crate::types::{FrameSet, SPEED_STEP};

/// Cursor travel, in pixels, below which a press and release count as a click.
pub const CLICK_TOLERANCE: f32 = 5.0;

/// Small bodies are picked as if they had at least this radius.
pub const MIN_PICK_RADIUS: f32 = 0.5;

/// Resource tracking an in-progress left click.
#[derive(Resource, Default, Debug)]
pub struct ClickState {
    /// Cursor position when the left button went down.
    pub pressed_at: Option<Vec2>,
}

/// Plugin providing keyboard shortcuts and click-to-select.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClickState>().add_systems(
            Update,
            (keyboard_shortcuts, update_hover, click_to_select).in_set(FrameSet::Input),
        );
    }
}

/// Distance along a normalized ray to the first hit with a sphere.
///
/// Returns `None` when the ray misses or the sphere is entirely behind the
/// origin. A ray starting inside the sphere hits at distance 0.
pub fn ray_sphere_distance(origin: Vec3, direction: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let along = to_center.dot(direction);
    let closest_sq = to_center.length_squared() - along * along;
    let radius_sq = radius * radius;
    if closest_sq > radius_sq {
        return None;
    }

    let half_chord = (radius_sq - closest_sq).sqrt();
    let near = along - half_chord;
    let far = along + half_chord;
    if far < 0.0 {
        None
    } else {
        Some(near.max(0.0))
    }
}

/// Key of the nearest body hit by the ray.
pub fn pick_body<'a>(
    origin: Vec3,
    direction: Vec3,
    bodies: impl IntoIterator<Item = (&'a str, Vec3, f32)>,
) -> Option<&'a str> {
    bodies
        .into_iter()
        .filter_map(|(key, center, radius)| {
            ray_sphere_distance(origin, direction, center, radius.max(MIN_PICK_RADIUS))
                .map(|distance| (key, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(key, _)| key)
}

/// True when egui is using the pointer.
fn egui_wants_pointer(contexts: &mut EguiContexts) -> bool {
    contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.is_pointer_over_area() || ctx.is_using_pointer())
}

/// World-space ray under the cursor.
fn cursor_ray(
    window: &Query<&Window, With<PrimaryWindow>>,
    camera: &Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) -> Option<Ray3d> {
    let window = window.single().ok()?;
    let cursor = window.cursor_position()?;
    let (camera, camera_transform) = camera.single().ok()?;
    camera.viewport_to_world(camera_transform, cursor).ok()
}

/// Handle keyboard shortcuts for time and selection.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<SessionState>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().is_ok_and(|ctx| ctx.wants_keyboard_input()) {
        return;
    }

    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        session.toggle_pause();
        info!("Time {}", if session.is_paused() { "paused" } else { "running" });
    }

    // [ and ] adjust the multiplier
    if keys.just_pressed(KeyCode::BracketLeft) {
        session.nudge_speed(-SPEED_STEP);
        info!("Speed: {}x", session.speed_multiplier());
    }
    if keys.just_pressed(KeyCode::BracketRight) {
        session.nudge_speed(SPEED_STEP);
        info!("Speed: {}x", session.speed_multiplier());
    }

    if keys.just_pressed(KeyCode::Digit0) {
        session.set_speed_multiplier(0.0);
        info!("Speed: 0x (frozen)");
    }
    if keys.just_pressed(KeyCode::Digit1) {
        session.set_speed_multiplier(1.0);
        info!("Speed: 1x");
    }

    // F: fly to the selection
    if keys.just_pressed(KeyCode::KeyF) && session.request_fly_to().is_none() {
        debug!("Fly-to ignored, nothing selected");
    }

    if keys.just_pressed(KeyCode::Escape) {
        session.clear_selection();
    }
}

/// Track the body under the cursor.
fn update_hover(
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&BodySurface, &GlobalTransform)>,
    mut hovered: ResMut<HoveredBody>,
    mut contexts: EguiContexts,
) {
    let hit = if egui_wants_pointer(&mut contexts) {
        None
    } else {
        cursor_ray(&window, &camera).and_then(|ray| {
            pick_body(
                ray.origin,
                *ray.direction,
                bodies
                    .iter()
                    .map(|(surface, transform)| (surface.key.as_str(), transform.translation(), surface.radius)),
            )
            .map(str::to_string)
        })
    };

    if hovered.key != hit {
        hovered.key = hit;
    }
}

/// Select the body under the cursor on a click that did not drag.
fn click_to_select(
    mouse: Res<ButtonInput<MouseButton>>,
    window: Query<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    bodies: Query<(&BodySurface, &GlobalTransform)>,
    mut click: ResMut<ClickState>,
    mut session: ResMut<SessionState>,
    mut contexts: EguiContexts,
) {
    let cursor = window.single().ok().and_then(Window::cursor_position);

    if mouse.just_pressed(MouseButton::Left) {
        click.pressed_at = if egui_wants_pointer(&mut contexts) {
            None
        } else {
            cursor
        };
        return;
    }

    if !mouse.just_released(MouseButton::Left) {
        return;
    }
    let Some(pressed_at) = click.pressed_at.take() else {
        return;
    };
    let Some(released_at) = cursor else {
        return;
    };
    if pressed_at.distance(released_at) > CLICK_TOLERANCE {
        return;
    }

    let Some(ray) = cursor_ray(&window, &camera) else {
        return;
    };
    let picked = pick_body(
        ray.origin,
        *ray.direction,
        bodies
            .iter()
            .map(|(surface, transform)| (surface.key.as_str(), transform.translation(), surface.radius)),
    );

    // Clicking empty space keeps the current selection.
    if let Some(key) = picked {
        info!("Selected {key}");
        session.select(key);
    }
}
