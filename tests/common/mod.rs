//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use solar_explorer::animation::{AnimationState, Kinematics};
use solar_explorer::camera::{CameraController, CameraSettings, MainCamera, OrbitCamera};
use solar_explorer::registry::BodyRegistry;
use solar_explorer::session::SessionState;
use solar_explorer::types::BodyKey;

/// Create a minimal Bevy app with the built-in catalog and a fresh session.
pub fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(BodyRegistry::solar_system().expect("built-in catalog is valid"));
    app.insert_resource(SessionState::default());
    app
}

/// Headless app that can also hold meshes, materials and images.
///
/// No image loaders are registered, so every file load fails.
pub fn asset_app() -> App {
    let mut app = headless_app();
    app.add_plugins((AssetPlugin::default(), bevy::transform::TransformPlugin))
        .init_asset::<Mesh>()
        .init_asset::<StandardMaterial>()
        .init_asset::<Image>();
    app
}

/// Spawn an animated body pivot.
pub fn spawn_body(app: &mut App, key: &str, orbital: f32, rotation: f32) -> Entity {
    app.world_mut()
        .spawn((
            BodyKey(key.to_string()),
            Kinematics {
                orbital_angular_speed: orbital,
                rotation_angular_speed: rotation,
            },
            AnimationState::default(),
        ))
        .id()
}

/// Add camera resources and a main camera at the default vantage point.
pub fn with_camera(app: &mut App, settings: CameraSettings) -> Entity {
    let orbit = OrbitCamera {
        target: settings.initial_target,
        position: settings.initial_position,
    };
    app.insert_resource(settings);
    app.init_resource::<CameraController>();
    app.world_mut().spawn((orbit, orbit.transform(), MainCamera)).id()
}

pub fn orbit_camera(app: &App, camera: Entity) -> OrbitCamera {
    *app.world()
        .get::<OrbitCamera>(camera)
        .expect("camera entity has an OrbitCamera")
}

pub fn animation_state(app: &App, entity: Entity) -> AnimationState {
    *app.world()
        .get::<AnimationState>(entity)
        .expect("entity has an AnimationState")
}

/// Component-wise closeness for vectors.
pub fn vec3_close(a: Vec3, b: Vec3, epsilon: f32) -> bool {
    (a - b).abs().max_element() <= epsilon
}
