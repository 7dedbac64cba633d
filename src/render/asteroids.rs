//! Asteroid belt visuals.
//!
//! One entity per [`AsteroidField`] particle, all sharing a single mesh
//! and material. The transforms are rewritten from the field whenever it
//! advances.

use bevy::prelude::*;

use crate::asteroid_belt::AsteroidField;

/// Index of the particle this rock draws.
#[derive(Component, Clone, Copy, Debug)]
pub struct AsteroidRock(pub usize);

const ROCK_COLOR: Color = Color::srgb(0.53, 0.53, 0.53);

/// Spawn a rock for every belt particle.
pub fn spawn_asteroid_rocks(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    field: Option<Res<AsteroidField>>,
) {
    let Some(field) = field else {
        return;
    };

    // Unit sphere, scaled per rock
    let mesh = Sphere::new(1.0).mesh().ico(0).unwrap_or_else(|err| {
        warn!("Falling back to UV asteroid mesh: {err}");
        Sphere::new(1.0).mesh().uv(8, 6)
    });
    let mesh = meshes.add(mesh);
    let material = materials.add(StandardMaterial {
        base_color: ROCK_COLOR,
        perceptual_roughness: 0.8,
        ..default()
    });

    let rocks: Vec<_> = field
        .particles()
        .iter()
        .enumerate()
        .map(|(index, particle)| {
            (
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                particle.transform(),
                AsteroidRock(index),
            )
        })
        .collect();
    commands.spawn_batch(rocks);

    info!("Spawned {} asteroid rocks", field.len());
}

/// Copy particle transforms onto their rocks.
pub fn sync_asteroid_rocks(
    field: Option<Res<AsteroidField>>,
    mut rocks: Query<(&AsteroidRock, &mut Transform)>,
) {
    let Some(field) = field else {
        return;
    };
    if !field.is_changed() {
        return;
    }

    for (rock, mut transform) in rocks.iter_mut() {
        if let Some(particle) = field.get(rock.0) {
            *transform = particle.transform();
        }
    }
}
