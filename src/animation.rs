//! Orbital and rotational animation.
//!
//! Every animated entity carries its static angular speeds ([`Kinematics`])
//! and its accumulated angles ([`AnimationState`]). Each frame the angles
//! advance by `speed * speed_multiplier`. Moons are parented to their
//! planet's orbital frame, so the two accumulators compose through the
//! transform hierarchy and no body reads another body's state.

use bevy::prelude::*;

use crate::registry::{CelestialBody, Moon};
use crate::session::SessionState;
use crate::types::FrameSet;

/// Static angular speeds, copied from the registry at spawn time.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Kinematics {
    /// Radians per tick around the parent.
    pub orbital_angular_speed: f32,
    /// Radians per tick about the body's own axis.
    pub rotation_angular_speed: f32,
}

impl From<&CelestialBody> for Kinematics {
    fn from(body: &CelestialBody) -> Self {
        Self {
            orbital_angular_speed: body.orbital_angular_speed,
            rotation_angular_speed: body.rotation_angular_speed,
        }
    }
}

impl From<&Moon> for Kinematics {
    fn from(moon: &Moon) -> Self {
        Self {
            orbital_angular_speed: moon.orbital_angular_speed,
            rotation_angular_speed: 0.0,
        }
    }
}

/// Accumulated angles in radians.
///
/// Never wrapped; transforms take the raw angle.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub orbital_angle: f32,
    pub self_rotation_angle: f32,
}

impl AnimationState {
    /// Advance both angles by one tick.
    pub fn advance(&mut self, kinematics: &Kinematics, speed_multiplier: f32) {
        self.orbital_angle += kinematics.orbital_angular_speed * speed_multiplier;
        self.self_rotation_angle += kinematics.rotation_angular_speed * speed_multiplier;
    }
}

/// Tick pacing.
///
/// By default one frame is one tick, so angular speeds are per frame.
/// With `frame_rate_independent` the tick is stretched by the frame's
/// elapsed time relative to `reference_fps`.
#[derive(Resource, Clone, Debug)]
pub struct AnimationSettings {
    pub frame_rate_independent: bool,
    pub reference_fps: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frame_rate_independent: false,
            reference_fps: 60.0,
        }
    }
}

impl AnimationSettings {
    /// Number of ticks represented by a frame of `delta_secs`.
    pub fn ticks_for(&self, delta_secs: f32) -> f32 {
        if self.frame_rate_independent {
            delta_secs * self.reference_fps
        } else {
            1.0
        }
    }
}

/// Plugin advancing orbital and rotational angles each frame.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationSettings>()
            .add_systems(Update, animate_bodies.in_set(FrameSet::Animate));
    }
}

/// Advance every animated body and moon.
pub fn animate_bodies(
    session: Res<SessionState>,
    settings: Res<AnimationSettings>,
    time: Res<Time>,
    mut bodies: Query<(&Kinematics, &mut AnimationState)>,
) {
    let speed = session.speed_multiplier() * settings.ticks_for(time.delta_secs());
    if speed == 0.0 {
        return;
    }

    for (kinematics, mut state) in bodies.iter_mut() {
        state.advance(kinematics, speed);
    }
}
