//! Asteroid belt particle field.
//!
//! A fixed population of particles is generated once at startup inside the
//! belt band between Mars and Jupiter. Only the angle of each particle
//! changes afterwards; distance, size, height and angular speed are frozen
//! at creation. The per-frame update is a single pass over a preallocated
//! `Vec` with no allocation.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::AnimationSettings;
use crate::session::SessionState;
use crate::types::FrameSet;

/// Errors in the belt configuration.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum BeltError {
    #[error("belt band [{inner}, {outer}) is empty or not finite")]
    EmptyBand { inner: f32, outer: f32 },

    #[error("asteroid angular speed range [{min}, {max}) must be positive")]
    InvalidSpeedRange { min: f32, max: f32 },

    #[error("asteroid size range [{min}, {max}) must be positive")]
    InvalidSizeRange { min: f32, max: f32 },
}

/// Generation parameters for the belt.
#[derive(Resource, Clone, Debug)]
pub struct AsteroidBeltSettings {
    /// Number of particles.
    pub count: usize,
    /// Inner edge of the band.
    pub inner_radius: f32,
    /// Outer edge of the band (exclusive).
    pub outer_radius: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Particles are spread in `[-max_vertical_offset, max_vertical_offset)`.
    pub max_vertical_offset: f32,
    pub min_angular_speed: f32,
    pub max_angular_speed: f32,
    /// Fixed seed for reproducible fields. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AsteroidBeltSettings {
    fn default() -> Self {
        Self {
            count: 2000,
            inner_radius: 35.0,
            outer_radius: 45.0,
            min_size: 0.05,
            max_size: 0.15,
            max_vertical_offset: 1.0,
            min_angular_speed: 0.001,
            max_angular_speed: 0.006,
            seed: None,
        }
    }
}

impl AsteroidBeltSettings {
    pub fn validate(&self) -> Result<(), BeltError> {
        let band_ok = self.inner_radius.is_finite()
            && self.outer_radius.is_finite()
            && self.inner_radius >= 0.0
            && self.inner_radius < self.outer_radius;
        if !band_ok {
            return Err(BeltError::EmptyBand {
                inner: self.inner_radius,
                outer: self.outer_radius,
            });
        }

        if !(self.min_angular_speed > 0.0 && self.min_angular_speed <= self.max_angular_speed)
            || !self.max_angular_speed.is_finite()
        {
            return Err(BeltError::InvalidSpeedRange {
                min: self.min_angular_speed,
                max: self.max_angular_speed,
            });
        }

        if !(self.min_size > 0.0 && self.min_size <= self.max_size) || !self.max_size.is_finite() {
            return Err(BeltError::InvalidSizeRange {
                min: self.min_size,
                max: self.max_size,
            });
        }

        Ok(())
    }
}

/// One belt particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsteroidParticle {
    /// Accumulated angle around the star, radians.
    pub angle: f32,
    pub orbital_distance: f32,
    pub size: f32,
    pub vertical_offset: f32,
    /// Radians per tick at speed 1. Always positive.
    pub angular_speed: f32,
    /// Per-particle phase for the cosmetic tumble.
    pub tumble: f32,
}

impl AsteroidParticle {
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.angle.cos() * self.orbital_distance,
            self.vertical_offset,
            self.angle.sin() * self.orbital_distance,
        )
    }

    /// Irregular-looking orientation derived from the angle.
    ///
    /// Purely cosmetic. It only changes when the angle does, so a frozen
    /// belt stays still.
    pub fn orientation(&self) -> Quat {
        let x = (self.angle * 53.0 + self.tumble).sin() * PI;
        let y = (self.angle * 71.0 + self.tumble * 1.7).cos() * PI;
        Quat::from_euler(EulerRot::XYZ, x, y, 0.0)
    }

    pub fn transform(&self) -> Transform {
        Transform::from_translation(self.position())
            .with_rotation(self.orientation())
            .with_scale(Vec3::splat(self.size))
    }
}

/// The whole belt population.
#[derive(Resource, Clone, Debug)]
pub struct AsteroidField {
    particles: Vec<AsteroidParticle>,
    inner_radius: f32,
    outer_radius: f32,
}

impl AsteroidField {
    /// Generate the population from validated settings.
    pub fn generate(settings: &AsteroidBeltSettings, rng: &mut impl Rng) -> Result<Self, BeltError> {
        settings.validate()?;

        let particles = (0..settings.count)
            .map(|_| AsteroidParticle {
                angle: rng.random_range(0.0..TAU),
                orbital_distance: sample(rng, settings.inner_radius, settings.outer_radius),
                size: sample(rng, settings.min_size, settings.max_size),
                vertical_offset: sample(
                    rng,
                    -settings.max_vertical_offset,
                    settings.max_vertical_offset,
                ),
                angular_speed: sample(rng, settings.min_angular_speed, settings.max_angular_speed),
                tumble: rng.random_range(0.0..TAU),
            })
            .collect();

        Ok(Self {
            particles,
            inner_radius: settings.inner_radius,
            outer_radius: settings.outer_radius,
        })
    }

    /// Generate with the settings' seed, or from OS entropy.
    pub fn from_settings(settings: &AsteroidBeltSettings) -> Result<Self, BeltError> {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::generate(settings, &mut rng)
    }

    /// Advance every particle by one tick.
    pub fn advance(&mut self, speed_multiplier: f32) {
        for particle in &mut self.particles {
            particle.angle += particle.angular_speed * speed_multiplier;
        }
    }

    pub fn particles(&self) -> &[AsteroidParticle] {
        &self.particles
    }

    pub fn get(&self, index: usize) -> Option<&AsteroidParticle> {
        self.particles.get(index)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The band `[inner, outer)` the particles were drawn from.
    pub fn band(&self) -> (f32, f32) {
        (self.inner_radius, self.outer_radius)
    }
}

/// Uniform sample in `[min, max)` that tolerates a degenerate `min == max`
/// range.
///
/// Float rounding can make `random_range` return `max` itself; that draw
/// folds back to `min`.
fn sample(rng: &mut impl Rng, min: f32, max: f32) -> f32 {
    if max <= min {
        return min;
    }
    let value = rng.random_range(min..max);
    if value < max { value } else { min }
}

/// Plugin generating the belt and advancing it each frame.
pub struct AsteroidBeltPlugin;

impl Plugin for AsteroidBeltPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AsteroidBeltSettings>()
            .init_resource::<AnimationSettings>()
            .add_systems(PreStartup, generate_asteroid_field)
            .add_systems(Update, advance_asteroid_field.in_set(FrameSet::Animate));
    }
}

/// Build the [`AsteroidField`] resource from the current settings.
///
/// Invalid settings leave the scene without a belt rather than aborting.
pub fn generate_asteroid_field(mut commands: Commands, settings: Res<AsteroidBeltSettings>) {
    match AsteroidField::from_settings(&settings) {
        Ok(field) => {
            info!(
                "Generated asteroid belt: {} particles in [{}, {})",
                field.len(),
                settings.inner_radius,
                settings.outer_radius
            );
            commands.insert_resource(field);
        }
        Err(err) => warn!("Asteroid belt disabled: {err}"),
    }
}

/// Advance all particle angles.
pub fn advance_asteroid_field(
    session: Res<SessionState>,
    settings: Res<AnimationSettings>,
    time: Res<Time>,
    field: Option<ResMut<AsteroidField>>,
) {
    let Some(mut field) = field else {
        return;
    };

    let speed = session.speed_multiplier() * settings.ticks_for(time.delta_secs());
    if speed == 0.0 {
        return;
    }
    field.advance(speed);
}
