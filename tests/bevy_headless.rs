//! Headless Bevy integration tests.
//!
//! These tests verify the animation, belt and fly-to systems work correctly
//! without a GPU.

mod common;

use std::f32::consts::FRAC_PI_2;

use approx::assert_relative_eq;
use bevy::prelude::*;
use solar_explorer::animation::AnimationPlugin;
use solar_explorer::asteroid_belt::{AsteroidBeltPlugin, AsteroidBeltSettings, AsteroidField};
use solar_explorer::camera::{apply_fly_to, CameraController, CameraMode, CameraSettings, FlyToFraming};
use solar_explorer::session::SessionState;

use common::{animation_state, headless_app, orbit_camera, spawn_body, vec3_close, with_camera};

#[test]
fn test_bodies_advance_each_frame() {
    let mut app = headless_app();
    app.add_plugins(AnimationPlugin);
    app.world_mut().resource_mut::<SessionState>().set_speed_multiplier(2.0);
    let earth = spawn_body(&mut app, "earth", 0.01, 0.02);

    for _ in 0..10 {
        app.update();
    }

    let state = animation_state(&app, earth);
    assert_relative_eq!(state.orbital_angle, 0.2, epsilon = 1e-5);
    assert_relative_eq!(state.self_rotation_angle, 0.4, epsilon = 1e-5);
}

#[test]
fn test_zero_speed_freezes_bodies() {
    let mut app = headless_app();
    app.add_plugins(AnimationPlugin);
    let mars = spawn_body(&mut app, "mars", 0.008, 0.018);

    for _ in 0..5 {
        app.update();
    }
    let before = animation_state(&app, mars);

    app.world_mut().resource_mut::<SessionState>().set_speed_multiplier(0.0);
    for _ in 0..20 {
        app.update();
    }

    assert_eq!(animation_state(&app, mars), before);
}

#[test]
fn test_pause_and_resume_restores_speed() {
    let mut app = headless_app();
    app.add_plugins(AnimationPlugin);
    let venus = spawn_body(&mut app, "venus", 0.015, -0.004);

    {
        let mut session = app.world_mut().resource_mut::<SessionState>();
        session.set_speed_multiplier(3.0);
        session.toggle_pause();
    }
    app.update();
    assert_eq!(animation_state(&app, venus).orbital_angle, 0.0);

    app.world_mut().resource_mut::<SessionState>().toggle_pause();
    app.update();
    let state = animation_state(&app, venus);
    assert_relative_eq!(state.orbital_angle, 0.045, epsilon = 1e-6);
    assert!(state.self_rotation_angle < 0.0, "venus spins retrograde");
}

#[test]
fn test_belt_generated_and_advanced() {
    let mut app = headless_app();
    app.insert_resource(AsteroidBeltSettings {
        count: 100,
        seed: Some(42),
        ..default()
    });
    app.add_plugins(AsteroidBeltPlugin);

    app.update();
    let first: Vec<f32> = app
        .world()
        .resource::<AsteroidField>()
        .particles()
        .iter()
        .map(|p| p.angle)
        .collect();
    assert_eq!(first.len(), 100);

    app.update();
    let field = app.world().resource::<AsteroidField>();
    assert_eq!(field.len(), 100);
    for (before, particle) in first.iter().zip(field.particles()) {
        assert!(particle.angle > *before);
    }
}

#[test]
fn test_invalid_belt_settings_disable_belt() {
    let mut app = headless_app();
    app.insert_resource(AsteroidBeltSettings {
        inner_radius: 50.0,
        outer_radius: 40.0,
        ..default()
    });
    app.add_plugins(AsteroidBeltPlugin);

    app.update();
    assert!(app.world().get_resource::<AsteroidField>().is_none());
}

#[test]
fn test_fly_to_without_selection_is_noop() {
    let mut app = headless_app();
    let camera = with_camera(&mut app, CameraSettings::default());
    app.add_systems(Update, apply_fly_to);

    let before = orbit_camera(&app, camera);
    assert!(app.world_mut().resource_mut::<SessionState>().request_fly_to().is_none());
    app.update();

    assert_eq!(orbit_camera(&app, camera), before);
    assert_eq!(app.world().resource::<CameraController>().last_handled, None);
}

#[test]
fn test_fly_to_saturn() {
    let mut app = headless_app();
    let camera = with_camera(&mut app, CameraSettings::default());
    app.add_systems(Update, apply_fly_to);

    {
        let mut session = app.world_mut().resource_mut::<SessionState>();
        session.select("saturn");
        session.request_fly_to();
    }
    app.update();

    let orbit = orbit_camera(&app, camera);
    assert!(vec3_close(orbit.target, Vec3::new(40.0, 0.0, 0.0), 1e-4));
    assert!(vec3_close(orbit.position, Vec3::new(48.3, 4.1, 8.3), 1e-4));

    let controller = app.world().resource::<CameraController>();
    assert_eq!(controller.mode, CameraMode::Idle);
    assert_eq!(controller.last_handled, Some(1));

    // Selection survives the fly-to and the slot is consumed
    let session = app.world().resource::<SessionState>();
    assert_eq!(session.selected_body(), Some("saturn"));
    assert!(session.fly_to_request().is_none());
}

#[test]
fn test_fly_to_sun_uses_fixed_vantage() {
    let mut app = headless_app();
    let camera = with_camera(&mut app, CameraSettings::default());
    app.add_systems(Update, apply_fly_to);

    {
        let mut session = app.world_mut().resource_mut::<SessionState>();
        session.select("sun");
        session.request_fly_to();
    }
    app.update();

    let orbit = orbit_camera(&app, camera);
    assert_eq!(orbit.target, Vec3::ZERO);
    assert_eq!(orbit.position, Vec3::new(20.0, 10.0, 20.0));
}

#[test]
fn test_handled_request_is_not_replayed() {
    let mut app = headless_app();
    let camera = with_camera(&mut app, CameraSettings::default());
    app.add_systems(Update, apply_fly_to);

    {
        let mut session = app.world_mut().resource_mut::<SessionState>();
        session.select("earth");
        session.request_fly_to();
    }
    app.update();

    // User orbits away after the cut
    let moved = Vec3::new(-30.0, 20.0, 5.0);
    app.world_mut()
        .get_mut::<solar_explorer::camera::OrbitCamera>(camera)
        .unwrap()
        .position = moved;

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(orbit_camera(&app, camera).position, moved);
}

#[test]
fn test_latest_request_wins() {
    let mut app = headless_app();
    let camera = with_camera(&mut app, CameraSettings::default());
    app.add_systems(Update, apply_fly_to);

    {
        let mut session = app.world_mut().resource_mut::<SessionState>();
        session.select("mercury");
        session.request_fly_to();
        session.select("neptune");
        session.request_fly_to();
    }
    app.update();

    assert!(vec3_close(orbit_camera(&app, camera).target, Vec3::new(60.0, 0.0, 0.0), 1e-4));
    assert_eq!(app.world().resource::<CameraController>().last_handled, Some(2));
}

#[test]
fn test_unknown_target_leaves_camera() {
    let mut app = headless_app();
    let camera = with_camera(&mut app, CameraSettings::default());
    app.add_systems(Update, apply_fly_to);

    let before = orbit_camera(&app, camera);
    {
        let mut session = app.world_mut().resource_mut::<SessionState>();
        session.select("pluto");
        session.request_fly_to();
    }
    app.update();

    assert_eq!(orbit_camera(&app, camera), before);
    let controller = app.world().resource::<CameraController>();
    assert_eq!(controller.last_handled, Some(1));
    assert!(controller.last_framing.is_none());
}

#[test]
fn test_live_framing_follows_orbit() {
    let mut app = headless_app();
    let camera = with_camera(
        &mut app,
        CameraSettings {
            framing: FlyToFraming::LivePosition,
            ..default()
        },
    );
    app.add_systems(Update, apply_fly_to);

    let saturn = spawn_body(&mut app, "saturn", 0.0009, 0.038);
    app.world_mut()
        .get_mut::<solar_explorer::animation::AnimationState>(saturn)
        .unwrap()
        .orbital_angle = FRAC_PI_2;

    {
        let mut session = app.world_mut().resource_mut::<SessionState>();
        session.select("saturn");
        session.request_fly_to();
    }
    app.update();

    let orbit = orbit_camera(&app, camera);
    assert!(vec3_close(orbit.target, Vec3::new(0.0, 0.0, -40.0), 1e-3));
    assert_relative_eq!(orbit.position.distance(orbit.target), Vec3::new(8.3, 4.1, 8.3).length(), epsilon = 1e-3);
}
