//! Optional surface textures with flat-colour fallback.
//!
//! Materials are created with their flat registry colour and no texture,
//! so the scene renders correctly before any image arrives. Each textured
//! entity carries [`PendingTextures`]; once an image is available it is
//! swapped into the material. A failed load logs a warning and leaves the
//! flat colour in place without touching any other body.

use bevy::asset::LoadState;
use bevy::prelude::*;

/// Where a loaded image goes in the material.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextureSlot {
    /// Base colour map. `tint` replaces the fallback colour once the map
    /// is in. Emissive materials also get the map as emissive texture.
    BaseColor { tint: Color },
    /// Tangent-space normal map.
    Normal,
}

/// One outstanding image load.
#[derive(Clone, Debug)]
pub struct PendingTexture {
    pub path: &'static str,
    pub image: Handle<Image>,
    pub slot: TextureSlot,
}

/// Images still loading for this entity's material.
#[derive(Component, Clone, Debug, Default)]
pub struct PendingTextures(pub Vec<PendingTexture>);

impl PendingTextures {
    pub fn with(mut self, asset_server: &AssetServer, path: &'static str, slot: TextureSlot) -> Self {
        self.0.push(PendingTexture {
            path,
            image: asset_server.load(path),
            slot,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Put a loaded image into the material slot it was requested for.
pub fn apply_texture(material: &mut StandardMaterial, image: Handle<Image>, slot: TextureSlot) {
    match slot {
        TextureSlot::BaseColor { tint } => {
            if material.emissive != LinearRgba::BLACK {
                material.emissive_texture = Some(image.clone());
            }
            material.base_color_texture = Some(image);
            material.base_color = tint;
        }
        TextureSlot::Normal => {
            material.normal_map_texture = Some(image);
        }
    }
}

/// Swap available images into materials; drop failed ones.
///
/// An image counts as available as soon as it is in `Assets<Image>`,
/// whether the asset server loaded it or it was added directly.
pub fn resolve_pending_textures(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut pending: Query<(Entity, &mut PendingTextures, &MeshMaterial3d<StandardMaterial>)>,
) {
    for (entity, mut textures, material) in pending.iter_mut() {
        textures.0.retain(|texture| {
            if images.contains(&texture.image) {
                if let Some(target) = materials.get_mut(&material.0) {
                    apply_texture(target, texture.image.clone(), texture.slot);
                }
                debug!("Texture {} applied", texture.path);
                return false;
            }
            match asset_server.load_state(texture.image.id()) {
                LoadState::Failed(err) => {
                    warn!("Texture {} unavailable, keeping flat colour: {err}", texture.path);
                    false
                }
                _ => true,
            }
        });

        if textures.is_empty() {
            commands.entity(entity).remove::<PendingTextures>();
        }
    }
}
