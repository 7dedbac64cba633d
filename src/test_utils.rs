//! Test utilities for the solar system model.
//!
//! Provides fixtures for building catalogs and bodies, and assertions for
//! the angle invariants the animator must keep.

use crate::animation::{AnimationState, Kinematics};

/// Fixtures for creating test bodies.
pub mod fixtures {
    use bevy::prelude::*;

    use crate::animation::Kinematics;
    use crate::registry::{BodyInfo, CelestialBody};

    /// A luminous star at the origin.
    pub fn star() -> CelestialBody {
        CelestialBody {
            key: "sun",
            display_name: "Sol",
            radius: 4.0,
            orbital_distance: 0.0,
            orbital_angular_speed: 0.0,
            rotation_angular_speed: 0.005,
            is_luminous: true,
            has_rings: false,
            has_clouds: false,
            color: Color::srgb(1.0, 0.8, 0.1),
            texture: None,
            normal_map: None,
            moons: Vec::new(),
            info: BodyInfo::default(),
        }
    }

    /// A plain planet of radius 1 at `distance`, with no moons or textures.
    pub fn planet(key: &'static str, distance: f32) -> CelestialBody {
        CelestialBody {
            key,
            display_name: key,
            radius: 1.0,
            orbital_distance: distance,
            orbital_angular_speed: 0.01,
            rotation_angular_speed: 0.02,
            is_luminous: false,
            has_rings: false,
            has_clouds: false,
            color: Color::srgb(0.3, 0.5, 0.9),
            texture: None,
            normal_map: None,
            moons: Vec::new(),
            info: BodyInfo::default(),
        }
    }

    pub fn kinematics(orbital: f32, rotation: f32) -> Kinematics {
        Kinematics {
            orbital_angular_speed: orbital,
            rotation_angular_speed: rotation,
        }
    }
}

/// Assertions over accumulated angles.
pub mod assertions {
    use super::*;

    /// Angles after `ticks` frames at a constant multiplier.
    pub fn advanced(kinematics: &Kinematics, speed: f32, ticks: usize) -> AnimationState {
        let mut state = AnimationState::default();
        for _ in 0..ticks {
            state.advance(kinematics, speed);
        }
        state
    }

    /// Relative closeness with an absolute floor for values near zero.
    pub fn close(actual: f32, expected: f32, tolerance: f32) -> bool {
        (actual - expected).abs() <= tolerance * expected.abs().max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::BodyRegistry;

    #[test]
    fn test_fixtures_form_valid_catalog() {
        let registry = BodyRegistry::new(vec![
            fixtures::star(),
            fixtures::planet("inner", 10.0),
            fixtures::planet("outer", 20.0),
        ])
        .unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.central_star().map(|s| s.key), Some("sun"));
    }

    #[test]
    fn test_advanced_accumulates() {
        let state = assertions::advanced(&fixtures::kinematics(0.01, 0.02), 1.0, 100);
        assert!(assertions::close(state.orbital_angle, 1.0, 1e-4));
        assert!(assertions::close(state.self_rotation_angle, 2.0, 1e-4));
    }
}
