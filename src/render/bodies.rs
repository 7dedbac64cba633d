//! Celestial body rendering and spawning.
//!
//! Each registry body becomes a small hierarchy:
//!
//! ```text
//! OrbitPivot (rotation = orbital angle)
//! └── BodyAnchor (translation = orbital distance on +X)
//!     ├── surface mesh (rotation = self-rotation angle)
//!     ├── cloud layer (rotation = 0.8 × self-rotation angle)
//!     ├── rings
//!     └── moon OrbitPivot → moon mesh
//! ```

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use crate::animation::{AnimationState, Kinematics};
use crate::registry::{BodyRegistry, CelestialBody, Moon};
use crate::types::BodyKey;

use super::textures::{PendingTextures, TextureSlot};

/// Cloud layer texture for bodies with `has_clouds`.
pub const CLOUD_TEXTURE: &str = "textures/2k_earth_clouds.jpg";

/// Ring texture for bodies with `has_rings`.
pub const RING_TEXTURE: &str = "textures/2k_saturn_ring_alpha.png";

/// Cloud layers spin slower than the surface below.
pub const CLOUD_SPIN_FACTOR: f32 = 0.8;

/// Ring band relative to the body radius.
pub const RING_INNER_FACTOR: f32 = 1.4;
pub const RING_OUTER_FACTOR: f32 = 2.2;

/// Fallback moon colour when no texture is available.
const MOON_COLOR: Color = Color::srgb(0.7, 0.7, 0.7);

/// Rotates with the orbital angle of its [`AnimationState`].
#[derive(Component)]
pub struct OrbitPivot;

/// Holds a body at its orbital distance inside the pivot.
#[derive(Component)]
pub struct BodyAnchor;

/// Spins with the self-rotation angle of the pivot `source`.
#[derive(Component, Clone, Copy, Debug)]
pub struct Spin {
    pub source: Entity,
    pub factor: f32,
}

/// Visible surface of a top-level body; used for picking and labels.
#[derive(Component, Clone, Debug)]
pub struct BodySurface {
    pub key: String,
    pub display_name: String,
    pub radius: f32,
}

/// Plugin providing celestial body spawning.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_solar_system);
    }
}

/// Material for a body surface before any texture arrives.
pub fn body_material(body: &CelestialBody) -> StandardMaterial {
    StandardMaterial {
        base_color: body.color,
        emissive: if body.is_luminous {
            body.color.to_linear() * 2.0
        } else {
            LinearRgba::BLACK
        },
        metallic: 0.1,
        perceptual_roughness: 0.7,
        ..default()
    }
}

/// Sphere mesh for a body, with tangents when a normal map will be used.
fn surface_mesh(body: &CelestialBody) -> (Mesh, bool) {
    let mesh = Sphere::new(body.radius).mesh().uv(64, 32);
    if body.normal_map.is_none() {
        return (mesh, false);
    }

    match mesh.clone().with_generated_tangents() {
        Ok(mesh) => (mesh, true),
        Err(err) => {
            warn!("No tangents for {}, skipping normal map: {err}", body.key);
            (mesh, false)
        }
    }
}

/// Spawn every body in the registry.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    registry: Res<BodyRegistry>,
) {
    let mut moon_count = 0;

    for body in registry.iter() {
        let pivot = commands
            .spawn((
                Name::new(body.display_name),
                OrbitPivot,
                BodyKey(body.key.to_string()),
                Kinematics::from(body),
                AnimationState::default(),
                Transform::default(),
                Visibility::default(),
            ))
            .id();

        let anchor = commands
            .spawn((
                BodyAnchor,
                Transform::from_xyz(body.orbital_distance, 0.0, 0.0),
                Visibility::default(),
                ChildOf(pivot),
            ))
            .id();

        // Surface
        let (mesh, use_normal_map) = surface_mesh(body);
        let mut textures = PendingTextures::default();
        if let Some(path) = body.texture {
            textures = textures.with(&asset_server, path, TextureSlot::BaseColor { tint: Color::WHITE });
        }
        if let (true, Some(path)) = (use_normal_map, body.normal_map) {
            textures = textures.with(&asset_server, path, TextureSlot::Normal);
        }
        commands.spawn((
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(materials.add(body_material(body))),
            Transform::default(),
            Spin {
                source: pivot,
                factor: 1.0,
            },
            BodySurface {
                key: body.key.to_string(),
                display_name: body.display_name.to_string(),
                radius: body.radius,
            },
            textures,
            ChildOf(anchor),
        ));

        if body.has_clouds {
            spawn_clouds(&mut commands, &mut meshes, &mut materials, &asset_server, body, pivot, anchor);
        }

        if body.has_rings {
            spawn_rings(&mut commands, &mut meshes, &mut materials, &asset_server, body, anchor);
        }

        for moon in &body.moons {
            spawn_moon(&mut commands, &mut meshes, &mut materials, &asset_server, moon, body.radius, anchor);
            moon_count += 1;
        }
    }

    info!("Spawned {} bodies and {} moons", registry.len(), moon_count);
}

/// Transparent layer just above the surface; invisible until its texture loads.
fn spawn_clouds(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    body: &CelestialBody,
    pivot: Entity,
    anchor: Entity,
) {
    let material = StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.0),
        alpha_mode: AlphaMode::Add,
        double_sided: true,
        cull_mode: None,
        ..default()
    };

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(body.radius * 1.01).mesh().uv(32, 16))),
        MeshMaterial3d(materials.add(material)),
        Transform::default(),
        Spin {
            source: pivot,
            factor: CLOUD_SPIN_FACTOR,
        },
        PendingTextures::default().with(
            asset_server,
            CLOUD_TEXTURE,
            TextureSlot::BaseColor {
                tint: Color::srgba(1.0, 1.0, 1.0, 0.8),
            },
        ),
        ChildOf(anchor),
    ));
}

/// Flat annulus in the body's equatorial plane.
fn spawn_rings(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    body: &CelestialBody,
    anchor: Entity,
) {
    let material = StandardMaterial {
        base_color: Color::srgba(0.90, 0.84, 0.78, 0.8),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    };

    commands.spawn((
        Mesh3d(meshes.add(Annulus::new(
            body.radius * RING_INNER_FACTOR,
            body.radius * RING_OUTER_FACTOR,
        ))),
        MeshMaterial3d(materials.add(material)),
        Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
        PendingTextures::default().with(
            asset_server,
            RING_TEXTURE,
            TextureSlot::BaseColor {
                tint: Color::srgba(1.0, 1.0, 1.0, 0.8),
            },
        ),
        ChildOf(anchor),
    ));
}

fn spawn_moon(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    asset_server: &AssetServer,
    moon: &Moon,
    parent_radius: f32,
    anchor: Entity,
) {
    let pivot = commands
        .spawn((
            Name::new(moon.display_name),
            OrbitPivot,
            Kinematics::from(moon),
            AnimationState::default(),
            Transform::default(),
            Visibility::default(),
            ChildOf(anchor),
        ))
        .id();

    let mut textures = PendingTextures::default();
    if let Some(path) = moon.texture {
        textures = textures.with(asset_server, path, TextureSlot::BaseColor { tint: Color::WHITE });
    }

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(moon.radius).mesh().uv(32, 16))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: MOON_COLOR,
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(moon.offset_from_parent(parent_radius), 0.0, 0.0),
        textures,
        ChildOf(pivot),
    ));
}

/// Rotate orbit pivots to their accumulated orbital angle.
pub fn apply_orbital_rotation(
    mut pivots: Query<(&AnimationState, &mut Transform), (With<OrbitPivot>, Changed<AnimationState>)>,
) {
    for (state, mut transform) in pivots.iter_mut() {
        transform.rotation = Quat::from_rotation_y(state.orbital_angle);
    }
}

/// Spin surfaces and cloud layers from their pivot's rotation angle.
pub fn apply_spin(states: Query<&AnimationState>, mut spinning: Query<(&Spin, &mut Transform)>) {
    for (spin, mut transform) in spinning.iter_mut() {
        let Ok(state) = states.get(spin.source) else {
            continue;
        };
        transform.rotation = Quat::from_rotation_y(state.self_rotation_angle * spin.factor);
    }
}
