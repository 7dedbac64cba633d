//! Camera system for the solar system explorer.
//!
//! Provides orbit, pan and zoom controls around a look-at target, and
//! fly-to repositioning onto the selected body. Fly-to is a hard cut: the
//! target and position are overwritten in a single frame.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit},
    prelude::*,
};
use bevy_egui::EguiContexts;

use crate::animation::AnimationState;
use crate::registry::{BodyRegistry, RegistryError};
use crate::session::SessionState;
use crate::types::{BodyKey, FrameSet};

/// Camera placement used when flying to the central star.
pub const STAR_FRAMING_POSITION: Vec3 = Vec3::new(20.0, 10.0, 20.0);

/// Extra distance added to `radius * 3` when framing a body.
pub const FRAMING_MARGIN: f32 = 2.0;

/// Pitch limit, just short of the poles so `looking_at` stays defined.
const MAX_PITCH: f32 = 1.54;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Look-at target and eye position of the main camera.
///
/// The camera `Transform` is derived from this every time it changes.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub position: Vec3,
}

impl OrbitCamera {
    pub fn distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.target, Vec3::Y)
    }

    pub fn apply(&mut self, framing: CameraFraming) {
        self.target = framing.target;
        self.position = framing.position;
    }
}

/// Result of resolving a fly-to target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFraming {
    pub target: Vec3,
    pub position: Vec3,
}

impl CameraFraming {
    /// Rotate the framing about the vertical axis through the origin.
    pub fn rotated_about_y(self, angle: f32) -> Self {
        let rotation = Quat::from_rotation_y(angle);
        Self {
            target: rotation * self.target,
            position: rotation * self.position,
        }
    }
}

/// How fly-to picks the point to frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlyToFraming {
    /// Frame the orbital radius on the +X reference axis, regardless of
    /// where the body currently is on its orbit.
    #[default]
    ReferenceAxis,
    /// Frame the body where it is now, using its animated orbital angle.
    LivePosition,
}

/// Camera tunables.
#[derive(Resource, Clone, Debug)]
pub struct CameraSettings {
    pub initial_position: Vec3,
    pub initial_target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians per pixel of drag.
    pub orbit_sensitivity: f32,
    /// Fraction of the view distance per pixel of drag.
    pub pan_sensitivity: f32,
    /// Fraction of the view distance per scroll line.
    pub zoom_speed: f32,
    pub framing: FlyToFraming,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            initial_position: Vec3::new(0.0, 40.0, 100.0),
            initial_target: Vec3::ZERO,
            fov_degrees: 60.0,
            min_distance: 2.0,
            max_distance: 400.0,
            orbit_sensitivity: 0.005,
            pan_sensitivity: 0.001,
            zoom_speed: 0.1,
            framing: FlyToFraming::ReferenceAxis,
        }
    }
}

/// Fly-to state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraMode {
    /// The user has free control.
    #[default]
    Idle,
    /// A fly-to request is being applied. Lasts for one system run.
    Transitioning,
}

/// Resource tracking fly-to handling.
#[derive(Resource, Debug, Default)]
pub struct CameraController {
    pub mode: CameraMode,
    /// Sequence number of the last request handled.
    pub last_handled: Option<u64>,
    /// Framing applied by the last successful fly-to.
    pub last_framing: Option<CameraFraming>,
}

/// Resolve the framing for `key` on the reference axis.
///
/// The star is framed from a fixed vantage point. Any other body gets its
/// orbital radius on +X as the look-at target, with the camera pulled back
/// by `radius * 3 + 2` so larger bodies stay proportionally framed.
pub fn resolve_fly_to_target(
    registry: &BodyRegistry,
    key: &str,
) -> Result<CameraFraming, RegistryError> {
    let body = registry.lookup(key)?;

    if body.is_central_star() {
        return Ok(CameraFraming {
            target: Vec3::ZERO,
            position: STAR_FRAMING_POSITION,
        });
    }

    let offset = body.radius * 3.0 + FRAMING_MARGIN;
    Ok(CameraFraming {
        target: Vec3::new(body.orbital_distance, 0.0, 0.0),
        position: Vec3::new(
            body.orbital_distance + offset,
            body.radius + FRAMING_MARGIN,
            offset,
        ),
    })
}

/// Orbit `position` around `target` by yaw/pitch deltas in radians.
pub fn orbit(position: Vec3, target: Vec3, yaw_delta: f32, pitch_delta: f32) -> Vec3 {
    let offset = position - target;
    let radius = offset.length();
    if radius <= f32::EPSILON {
        return position;
    }

    let yaw = offset.x.atan2(offset.z) + yaw_delta;
    let pitch = ((offset.y / radius).clamp(-1.0, 1.0).asin() + pitch_delta).clamp(-MAX_PITCH, MAX_PITCH);

    target
        + radius
            * Vec3::new(
                pitch.cos() * yaw.sin(),
                pitch.sin(),
                pitch.cos() * yaw.cos(),
            )
}

/// Translate target and eye together in the view plane.
///
/// `delta` is in screen pixels (x right, y down).
pub fn pan(camera: OrbitCamera, delta: Vec2, sensitivity: f32) -> OrbitCamera {
    let forward = (camera.target - camera.position).normalize_or_zero();
    if forward == Vec3::ZERO {
        return camera;
    }
    let right = forward.cross(Vec3::Y).normalize_or_zero();
    let up = right.cross(forward);

    let scale = camera.distance() * sensitivity;
    let shift = (-right * delta.x + up * delta.y) * scale;
    OrbitCamera {
        target: camera.target + shift,
        position: camera.position + shift,
    }
}

/// Scroll pixels that count as one wheel line.
const PIXELS_PER_LINE: f32 = 100.0;

/// Bounds on the distance factor of a single zoom step.
const MIN_ZOOM_FACTOR: f32 = 0.5;
const MAX_ZOOM_FACTOR: f32 = 2.0;

/// Vertical scroll in wheel lines, whatever unit the device reports.
pub fn scroll_lines(unit: MouseScrollUnit, delta: f32) -> f32 {
    match unit {
        MouseScrollUnit::Line => delta,
        MouseScrollUnit::Pixel => delta / PIXELS_PER_LINE,
    }
}

/// Move the eye along the view axis; positive `scroll` zooms in.
///
/// One step at most halves or doubles the distance.
pub fn zoom(position: Vec3, target: Vec3, scroll: f32, speed: f32, min: f32, max: f32) -> Vec3 {
    let offset = position - target;
    let distance = offset.length();
    if distance <= f32::EPSILON {
        return position;
    }

    let factor = (1.0 - scroll * speed).clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR);
    let new_distance = (distance * factor).clamp(min, max);
    target + offset / distance * new_distance
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraSettings>()
            .init_resource::<CameraController>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (apply_fly_to, camera_controls)
                    .chain()
                    .in_set(FrameSet::Camera),
            )
            .add_systems(Update, sync_camera_transform.in_set(FrameSet::Sync));
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands, settings: Res<CameraSettings>) {
    let orbit = OrbitCamera {
        target: settings.initial_target,
        position: settings.initial_position,
    };

    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: settings.fov_degrees.to_radians(),
            far: 2000.0,
            ..default()
        }),
        orbit.transform(),
        AmbientLight {
            color: Color::WHITE,
            brightness: 150.0,
            ..default()
        },
        orbit,
        MainCamera,
    ));
}

/// Consume a pending fly-to request and cut the camera to it.
pub fn apply_fly_to(
    mut session: ResMut<SessionState>,
    mut controller: ResMut<CameraController>,
    registry: Res<BodyRegistry>,
    settings: Res<CameraSettings>,
    bodies: Query<(&BodyKey, &AnimationState)>,
    mut camera: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    let Some(request) = session.take_fly_to() else {
        return;
    };
    if controller.last_handled == Some(request.sequence) {
        return;
    }

    controller.mode = CameraMode::Transitioning;

    match resolve_fly_to_target(&registry, &request.target) {
        Ok(framing) => {
            let framing = match settings.framing {
                FlyToFraming::ReferenceAxis => framing,
                FlyToFraming::LivePosition => {
                    let angle = bodies
                        .iter()
                        .find(|(key, _)| key.as_str() == request.target)
                        .map_or(0.0, |(_, state)| state.orbital_angle);
                    framing.rotated_about_y(angle)
                }
            };

            if let Ok(mut orbit) = camera.single_mut() {
                orbit.apply(framing);
                controller.last_framing = Some(framing);
                info!("Flying to {}", request.target);
            }
        }
        Err(err) => warn!("Ignoring fly-to request: {err}"),
    }

    controller.last_handled = Some(request.sequence);
    controller.mode = CameraMode::Idle;
}

/// Left drag orbits, right drag pans, scroll zooms.
fn camera_controls(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    settings: Res<CameraSettings>,
    mut contexts: EguiContexts,
    mut camera: Query<&mut OrbitCamera, With<MainCamera>>,
) {
    if let Ok(ctx) = contexts.ctx_mut() {
        if ctx.is_pointer_over_area() || ctx.is_using_pointer() {
            return;
        }
    }

    let Ok(mut orbit_camera) = camera.single_mut() else {
        return;
    };
    let mut updated = *orbit_camera;

    if mouse_buttons.pressed(MouseButton::Left) && mouse_motion.delta != Vec2::ZERO {
        let delta = mouse_motion.delta * settings.orbit_sensitivity;
        updated.position = orbit(updated.position, updated.target, -delta.x, delta.y);
    }

    if mouse_buttons.pressed(MouseButton::Right) && mouse_motion.delta != Vec2::ZERO {
        updated = pan(updated, mouse_motion.delta, settings.pan_sensitivity);
    }

    let scroll = scroll_lines(mouse_scroll.unit, mouse_scroll.delta.y);
    if scroll != 0.0 {
        updated.position = zoom(
            updated.position,
            updated.target,
            scroll,
            settings.zoom_speed,
            settings.min_distance,
            settings.max_distance,
        );
    }

    // Only write through on change so `Changed<OrbitCamera>` stays quiet.
    if updated != *orbit_camera {
        *orbit_camera = updated;
    }
}

/// Derive the camera transform from its orbit state.
pub fn sync_camera_transform(
    mut camera: Query<(&OrbitCamera, &mut Transform), (With<MainCamera>, Changed<OrbitCamera>)>,
) {
    for (orbit, mut transform) in camera.iter_mut() {
        *transform = orbit.transform();
    }
}
