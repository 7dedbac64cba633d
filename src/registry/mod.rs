//! Celestial body registry.
//!
//! The registry is the static catalog every other subsystem reads from:
//! sizes, orbital distances, angular speeds, capability flags and the
//! descriptive metadata shown in the info card. It is validated once at
//! startup and never mutated afterwards.

pub mod data;

use std::collections::HashSet;

use bevy::prelude::*;

pub use data::{solar_system_bodies, CENTRAL_STAR_KEY};

/// Errors raised while building or querying the registry.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("unknown body key {0:?}")]
    UnknownBody(String),

    #[error("duplicate body key {0:?}")]
    DuplicateKey(String),

    #[error("body {key:?} has invalid radius {radius} (must be positive)")]
    InvalidRadius { key: String, radius: f32 },

    #[error("body {key:?} has invalid orbital distance {distance} (must be finite and non-negative)")]
    InvalidOrbit { key: String, distance: f32 },

    #[error("body {0:?} sits at the origin but is not luminous")]
    MisplacedStar(String),
}

/// Static description of a top-level body (the star or a planet).
#[derive(Clone, Debug)]
pub struct CelestialBody {
    /// Unique identifier, stable for the whole session.
    pub key: &'static str,
    /// Localized label.
    pub display_name: &'static str,
    /// Visual radius in scene units.
    pub radius: f32,
    /// Distance from the origin; zero only for the central star.
    pub orbital_distance: f32,
    /// Radians per tick at speed 1. Negative is retrograde.
    pub orbital_angular_speed: f32,
    /// Radians per tick at speed 1. Sign gives the spin direction.
    pub rotation_angular_speed: f32,
    /// Emits light (rendered emissive, framed from afar on fly-to).
    pub is_luminous: bool,
    /// Carries a ring system.
    pub has_rings: bool,
    /// Carries a separately spinning cloud layer.
    pub has_clouds: bool,
    /// Flat colour used until (or instead of) the surface texture.
    pub color: Color,
    /// Surface texture, relative to the asset folder.
    pub texture: Option<&'static str>,
    /// Optional normal map, relative to the asset folder.
    pub normal_map: Option<&'static str>,
    pub moons: Vec<Moon>,
    pub info: BodyInfo,
}

impl CelestialBody {
    /// The star everything else orbits.
    pub fn is_central_star(&self) -> bool {
        self.is_luminous && self.orbital_distance == 0.0
    }

    /// World position for the given accumulated orbital angle.
    ///
    /// The orbit lies in the XZ plane and the body starts on +X, matching a
    /// pivot rotated about Y with the body offset along its local X axis.
    pub fn world_position(&self, orbital_angle: f32) -> Vec3 {
        Quat::from_rotation_y(orbital_angle) * Vec3::new(self.orbital_distance, 0.0, 0.0)
    }
}

/// A moon, owned by its parent body.
#[derive(Clone, Debug)]
pub struct Moon {
    pub display_name: &'static str,
    pub radius: f32,
    /// Distance from the parent's surface.
    pub orbital_distance: f32,
    /// Radians per tick at speed 1, around the parent.
    pub orbital_angular_speed: f32,
    pub texture: Option<&'static str>,
}

impl Moon {
    /// Offset of the moon from its parent's centre.
    pub fn offset_from_parent(&self, parent_radius: f32) -> f32 {
        parent_radius + self.orbital_distance
    }
}

/// Descriptive metadata rendered by the info card.
#[derive(Clone, Debug, Default)]
pub struct BodyInfo {
    pub kind: &'static str,
    pub diameter: &'static str,
    pub mass: &'static str,
    pub temperature: &'static str,
    pub orbital_period: Option<&'static str>,
    pub day_length: Option<&'static str>,
    pub composition: Option<&'static str>,
    pub age: Option<&'static str>,
    pub description: &'static str,
}

impl BodyInfo {
    /// Labelled rows in display order. Missing optional fields are skipped.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        let mut rows = vec![
            ("Tipo", self.kind),
            ("Diámetro", self.diameter),
            ("Masa", self.mass),
            ("Temperatura", self.temperature),
        ];

        let optional = [
            ("Período orbital", self.orbital_period),
            ("Duración del día", self.day_length),
            ("Composición", self.composition),
            ("Edad", self.age),
        ];
        rows.extend(
            optional
                .into_iter()
                .filter_map(|(label, value)| value.map(|v| (label, v))),
        );

        rows
    }
}

/// Validated, read-only catalog of bodies, in display order.
#[derive(Resource, Clone, Debug)]
pub struct BodyRegistry {
    bodies: Vec<CelestialBody>,
}

impl BodyRegistry {
    /// Build a registry, rejecting malformed or duplicate entries.
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self, RegistryError> {
        let mut seen = HashSet::new();

        for body in &bodies {
            if !seen.insert(body.key) {
                return Err(RegistryError::DuplicateKey(body.key.to_string()));
            }
            validate_radius(body.key, body.radius)?;

            if !body.orbital_distance.is_finite() || body.orbital_distance < 0.0 {
                return Err(RegistryError::InvalidOrbit {
                    key: body.key.to_string(),
                    distance: body.orbital_distance,
                });
            }
            if body.orbital_distance == 0.0 && !body.is_luminous {
                return Err(RegistryError::MisplacedStar(body.key.to_string()));
            }

            for moon in &body.moons {
                validate_radius(body.key, moon.radius)?;
                if !moon.orbital_distance.is_finite() || moon.orbital_distance < 0.0 {
                    return Err(RegistryError::InvalidOrbit {
                        key: body.key.to_string(),
                        distance: moon.orbital_distance,
                    });
                }
            }
        }

        Ok(Self { bodies })
    }

    /// The built-in solar system catalog.
    pub fn solar_system() -> Result<Self, RegistryError> {
        Self::new(solar_system_bodies())
    }

    pub fn get(&self, key: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|body| body.key == key)
    }

    /// Like [`Self::get`] but with a typed error for logging.
    pub fn lookup(&self, key: &str) -> Result<&CelestialBody, RegistryError> {
        self.get(key)
            .ok_or_else(|| RegistryError::UnknownBody(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn central_star(&self) -> Option<&CelestialBody> {
        self.bodies.iter().find(|body| body.is_central_star())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn validate_radius(key: &str, radius: f32) -> Result<(), RegistryError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(RegistryError::InvalidRadius {
            key: key.to_string(),
            radius,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;

    #[test]
    fn test_solar_system_is_valid() {
        let registry = BodyRegistry::solar_system().unwrap();
        assert_eq!(registry.len(), 9, "sun plus eight planets");
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_lookup_by_key() {
        let registry = BodyRegistry::solar_system().unwrap();
        let saturn = registry.get("saturn").unwrap();
        assert_eq!(saturn.orbital_distance, 40.0);
        assert!(saturn.has_rings);
        assert!(registry.contains("earth"));
    }

    #[test]
    fn test_lookup_unknown_key() {
        let registry = BodyRegistry::solar_system().unwrap();
        assert!(registry.get("pluto").is_none());
        assert_eq!(
            registry.lookup("pluto").unwrap_err(),
            RegistryError::UnknownBody("pluto".to_string())
        );
    }

    #[test]
    fn test_central_star() {
        let registry = BodyRegistry::solar_system().unwrap();
        let star = registry.central_star().unwrap();
        assert_eq!(star.key, CENTRAL_STAR_KEY);
        assert_eq!(star.orbital_angular_speed, 0.0);
        assert!(star.is_luminous);
    }

    #[test]
    fn test_only_earth_has_clouds_and_only_saturn_has_rings() {
        let registry = BodyRegistry::solar_system().unwrap();
        let clouded: Vec<_> = registry.iter().filter(|b| b.has_clouds).map(|b| b.key).collect();
        let ringed: Vec<_> = registry.iter().filter(|b| b.has_rings).map(|b| b.key).collect();
        assert_eq!(clouded, vec!["earth"]);
        assert_eq!(ringed, vec!["saturn"]);
    }

    #[test]
    fn test_retrograde_rotators() {
        let registry = BodyRegistry::solar_system().unwrap();
        let retrograde: Vec<_> = registry
            .iter()
            .filter(|b| b.rotation_angular_speed < 0.0)
            .map(|b| b.key)
            .collect();
        assert_eq!(retrograde, vec!["venus", "uranus"]);
    }

    #[test]
    fn test_rejects_duplicate_key() {
        let bodies = vec![fixtures::star(), fixtures::planet("earth", 15.0), fixtures::planet("earth", 20.0)];
        assert_eq!(
            BodyRegistry::new(bodies).unwrap_err(),
            RegistryError::DuplicateKey("earth".to_string())
        );
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let mut planet = fixtures::planet("mars", 20.0);
        planet.radius = 0.0;
        let err = BodyRegistry::new(vec![fixtures::star(), planet]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidRadius { .. }));
    }

    #[test]
    fn test_rejects_negative_distance() {
        let planet = fixtures::planet("mars", -1.0);
        let err = BodyRegistry::new(vec![planet]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidOrbit { .. }));
    }

    #[test]
    fn test_rejects_dark_body_at_origin() {
        let planet = fixtures::planet("rogue", 0.0);
        assert_eq!(
            BodyRegistry::new(vec![planet]).unwrap_err(),
            RegistryError::MisplacedStar("rogue".to_string())
        );
    }

    #[test]
    fn test_rejects_bad_moon() {
        let mut planet = fixtures::planet("earth", 15.0);
        planet.moons.push(Moon {
            display_name: "Luna",
            radius: -0.2,
            orbital_distance: 2.5,
            orbital_angular_speed: 0.05,
            texture: None,
        });
        let err = BodyRegistry::new(vec![planet]).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidRadius { .. }));
    }

    #[test]
    fn test_info_entries_skip_missing_fields() {
        let registry = BodyRegistry::solar_system().unwrap();

        let sun_labels: Vec<_> = registry.get("sun").unwrap().info.entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            sun_labels,
            vec!["Tipo", "Diámetro", "Masa", "Temperatura", "Composición", "Edad"]
        );

        let earth_labels: Vec<_> = registry.get("earth").unwrap().info.entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            earth_labels,
            vec!["Tipo", "Diámetro", "Masa", "Temperatura", "Período orbital", "Duración del día"]
        );
    }

    #[test]
    fn test_world_position_follows_angle() {
        let planet = fixtures::planet("earth", 15.0);
        let start = planet.world_position(0.0);
        assert!((start - Vec3::new(15.0, 0.0, 0.0)).length() < 1e-5);

        let quarter = planet.world_position(std::f32::consts::FRAC_PI_2);
        assert!((quarter.length() - 15.0).abs() < 1e-4);
        assert!(quarter.x.abs() < 1e-4);
    }

    #[test]
    fn test_moon_offset_includes_parent_radius() {
        let registry = BodyRegistry::solar_system().unwrap();
        let earth = registry.get("earth").unwrap();
        let luna = &earth.moons[0];
        assert!((luna.offset_from_parent(earth.radius) - 3.5).abs() < 1e-6);
    }
}
