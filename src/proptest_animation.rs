//! Property-based tests for angle accumulation and the asteroid belt.
//!
//! These tests verify the animator and belt invariants across a wide range
//! of speeds and multipliers.

use proptest::prelude::*;

use crate::asteroid_belt::{AsteroidBeltSettings, AsteroidField};
use crate::registry::BodyRegistry;
use crate::session::SessionState;
use crate::test_utils::{assertions, fixtures};
use crate::types::{SPEED_MAX, SPEED_MIN};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// After n frames at a constant multiplier the angle is speed × s × n.
    #[test]
    fn prop_angle_is_linear_in_ticks(
        orbital in -0.05f32..0.05,
        rotation in -0.05f32..0.05,
        multiplier in 0.0f32..5.0,
        ticks in 1usize..500,
    ) {
        let state = assertions::advanced(&fixtures::kinematics(orbital, rotation), multiplier, ticks);
        let n = ticks as f32;

        let expected_orbit = orbital * multiplier * n;
        let expected_spin = rotation * multiplier * n;

        prop_assert!(
            assertions::close(state.orbital_angle, expected_orbit, 1e-4),
            "orbital {} vs {}", state.orbital_angle, expected_orbit
        );
        prop_assert!(
            assertions::close(state.self_rotation_angle, expected_spin, 1e-4),
            "rotation {} vs {}", state.self_rotation_angle, expected_spin
        );
    }

    /// A zero multiplier leaves every angle where it was.
    #[test]
    fn prop_zero_multiplier_freezes(
        orbital in -0.05f32..0.05,
        rotation in -0.05f32..0.05,
        ticks in 1usize..200,
    ) {
        let state = assertions::advanced(&fixtures::kinematics(orbital, rotation), 0.0, ticks);
        prop_assert_eq!(state.orbital_angle, 0.0);
        prop_assert_eq!(state.self_rotation_angle, 0.0);
    }

    /// Angles move monotonically in the direction of their speed's sign.
    #[test]
    fn prop_angle_monotonic_in_sign(
        rotation in -0.05f32..0.05,
        multiplier in 0.1f32..5.0,
        ticks in 1usize..100,
    ) {
        prop_assume!(rotation.abs() > 1e-4);
        let kinematics = fixtures::kinematics(0.0, rotation);
        let mut state = crate::animation::AnimationState::default();
        let mut previous = state.self_rotation_angle;

        for _ in 0..ticks {
            state.advance(&kinematics, multiplier);
            if rotation > 0.0 {
                prop_assert!(state.self_rotation_angle > previous);
            } else {
                prop_assert!(state.self_rotation_angle < previous);
            }
            previous = state.self_rotation_angle;
        }
    }

    /// The multiplier always stays inside the slider range.
    #[test]
    fn prop_speed_multiplier_is_clamped(requested in -100.0f32..100.0) {
        let mut session = SessionState::default();
        session.set_speed_multiplier(requested);
        let speed = session.speed_multiplier();
        prop_assert!((SPEED_MIN..=SPEED_MAX).contains(&speed));
    }

    /// Belt particles stay in their band and keep their count while advancing.
    #[test]
    fn prop_belt_stays_in_band(
        seed in any::<u64>(),
        count in 0usize..300,
        multiplier in 0.0f32..5.0,
        ticks in 0usize..50,
    ) {
        let settings = AsteroidBeltSettings {
            count,
            seed: Some(seed),
            ..Default::default()
        };
        let mut field = AsteroidField::from_settings(&settings).unwrap();
        for _ in 0..ticks {
            field.advance(multiplier);
        }

        prop_assert_eq!(field.len(), count);
        for particle in field.particles() {
            let position = particle.position();
            let xz = bevy::math::Vec2::new(position.x, position.z).length();
            prop_assert!(xz >= 35.0 - 1e-3 && xz < 45.0 + 1e-3, "xz distance {}", xz);
            prop_assert!(particle.vertical_offset.abs() <= 1.0);
        }
    }

    /// Fly-to framing keeps a positive distance to every catalog body.
    #[test]
    fn prop_fly_to_frames_from_outside(index in 0usize..9) {
        let registry = BodyRegistry::solar_system().unwrap();
        let body = registry.iter().nth(index).unwrap();
        let framing = crate::camera::resolve_fly_to_target(&registry, body.key).unwrap();
        prop_assert!(framing.position.distance(framing.target) > body.radius);
    }
}
