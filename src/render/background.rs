//! Background rendering for the solar system visualization.
//!
//! Provides the star field, the optional Milky Way backdrop and the sun's
//! point light.

use std::f32::consts::TAU;

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy::render::render_resource::Face;
use rand::Rng;

use super::textures::{PendingTextures, TextureSlot};

/// Star field and backdrop configuration.
#[derive(Resource, Clone, Debug)]
pub struct StarfieldSettings {
    pub star_count: usize,
    /// Stars are scattered in a shell between these radii.
    pub min_radius: f32,
    pub max_radius: f32,
    pub star_size: f32,
    /// Panoramic backdrop; when it loads, the procedural stars are hidden.
    pub backdrop_texture: Option<&'static str>,
    pub backdrop_radius: f32,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            star_count: 3000,
            min_radius: 200.0,
            max_radius: 300.0,
            star_size: 0.3,
            backdrop_texture: Some("textures/8k_stars_milky_way.jpg"),
            backdrop_radius: 400.0,
        }
    }
}

/// Marker for procedural background stars.
#[derive(Component)]
pub struct BackgroundStar;

/// Inside-out sphere carrying the backdrop image.
#[derive(Component)]
pub struct Skysphere {
    pub image: Handle<Image>,
}

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StarfieldSettings>()
            .add_systems(Startup, (spawn_starfield, spawn_skysphere, spawn_lighting))
            .add_systems(Update, reveal_skysphere);
    }
}

/// Uniformly distributed point in a spherical shell.
pub fn random_shell_point(rng: &mut impl Rng, min_radius: f32, max_radius: f32) -> Vec3 {
    let z: f32 = rng.random_range(-1.0..1.0);
    let phi: f32 = rng.random_range(0.0..TAU);
    let radius = if max_radius > min_radius {
        rng.random_range(min_radius..max_radius)
    } else {
        min_radius
    };
    let ring = (1.0 - z * z).sqrt();
    Vec3::new(ring * phi.cos(), z, ring * phi.sin()) * radius
}

/// Spawn a starfield background with randomly placed stars.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<StarfieldSettings>,
) {
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(settings.star_size).mesh().ico(0).unwrap_or_else(|err| {
        warn!("Falling back to UV star mesh: {err}");
        Sphere::new(settings.star_size).mesh().uv(6, 4)
    }));

    let mut rng = rand::rng();

    for _ in 0..settings.star_count {
        let position = random_shell_point(&mut rng, settings.min_radius, settings.max_radius);
        let scale = rng.random_range(0.5..1.5);

        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(position).with_scale(Vec3::splat(scale)),
            BackgroundStar,
        ));
    }

    info!("Spawned {} background stars", settings.star_count);
}

/// Unlit material for the backdrop sphere.
///
/// Only the inner faces are drawn so the sphere never occludes the scene
/// when the camera sits outside its radius.
pub fn skysphere_material() -> StandardMaterial {
    StandardMaterial {
        base_color: Color::BLACK,
        unlit: true,
        cull_mode: Some(Face::Front),
        double_sided: false,
        ..default()
    }
}

/// Spawn the backdrop sphere. It stays black until its image loads.
fn spawn_skysphere(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    settings: Res<StarfieldSettings>,
) {
    let Some(path) = settings.backdrop_texture else {
        return;
    };

    let textures = PendingTextures::default().with(
        &asset_server,
        path,
        TextureSlot::BaseColor { tint: Color::WHITE },
    );
    let image = textures.0[0].image.clone();

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(settings.backdrop_radius).mesh().uv(64, 32))),
        MeshMaterial3d(materials.add(skysphere_material())),
        Transform::default(),
        Skysphere { image },
        textures,
    ));
}

/// Hide the procedural stars once the backdrop image is available.
fn reveal_skysphere(
    asset_server: Res<AssetServer>,
    skysphere: Query<&Skysphere>,
    mut stars: Query<&mut Visibility, With<BackgroundStar>>,
    mut revealed: Local<bool>,
) {
    if *revealed {
        return;
    }
    let Ok(sky) = skysphere.single() else {
        return;
    };

    match asset_server.load_state(sky.image.id()) {
        LoadState::Loaded => {
            for mut visibility in stars.iter_mut() {
                *visibility = Visibility::Hidden;
            }
            *revealed = true;
            info!("Backdrop loaded, procedural stars hidden");
        }
        // Keep the procedural stars
        LoadState::Failed(_) => *revealed = true,
        _ => {}
    }
}

/// Spawn the sun's light.
fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        PointLight {
            color: Color::srgb_u8(0xFD, 0xB8, 0x13),
            intensity: 5.0e7,
            range: 200.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    info!("Scene lighting initialized");
}
