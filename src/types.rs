//! Shared constants and schedule labels for the solar system explorer.

use bevy::prelude::*;

/// Lower bound of the global time multiplier.
pub const SPEED_MIN: f32 = 0.0;

/// Upper bound of the global time multiplier (the slider's 5x end).
pub const SPEED_MAX: f32 = 5.0;

/// Multiplier applied at startup.
pub const DEFAULT_SPEED: f32 = 1.0;

/// Step used by the keyboard speed shortcuts.
pub const SPEED_STEP: f32 = 0.5;

/// Per-frame ordering of the update loop.
///
/// User input mutates the session first, the camera consumes any fly-to
/// request, then angles advance and transforms are written before gizmos
/// read them.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard shortcuts and click selection.
    Input,
    /// Fly-to resolution and interactive orbit/pan/zoom.
    Camera,
    /// Orbital, rotational and asteroid angle accumulation.
    Animate,
    /// Copy animation state into transforms.
    Sync,
    /// Gizmo drawing (orbits, highlights).
    Draw,
}

/// Plugin that chains the [`FrameSet`] labels in `Update`.
pub struct FrameSetsPlugin;

impl Plugin for FrameSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::Input,
                FrameSet::Camera,
                FrameSet::Animate,
                FrameSet::Sync,
                FrameSet::Draw,
            )
                .chain(),
        );
    }
}

/// Stable key of a body in the [`crate::registry::BodyRegistry`].
///
/// Attached to the orbit pivot of every top-level body so systems can map
/// entities back to catalog entries.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BodyKey(pub String);

impl BodyKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
