//! Built-in catalog: the Sun and the eight planets.
//!
//! Distances and radii are in scene units and deliberately not to scale.
//! Angular speeds are radians per tick at a speed multiplier of 1.

use bevy::prelude::*;

use super::{BodyInfo, CelestialBody, Moon};

/// Key of the central star in the built-in catalog.
pub const CENTRAL_STAR_KEY: &str = "sun";

/// All bodies in display order (star first, then planets outward).
pub fn solar_system_bodies() -> Vec<CelestialBody> {
    vec![
        CelestialBody {
            key: CENTRAL_STAR_KEY,
            display_name: "Sol",
            radius: 4.0,
            orbital_distance: 0.0,
            orbital_angular_speed: 0.0,
            rotation_angular_speed: 0.005,
            is_luminous: true,
            has_rings: false,
            has_clouds: false,
            color: Color::srgb_u8(0xFD, 0xB8, 0x13),
            texture: Some("textures/2k_sun.jpg"),
            normal_map: None,
            moons: Vec::new(),
            info: BodyInfo {
                kind: "Estrella",
                diameter: "1,392,000 km",
                mass: "1.989 × 10³⁰ kg",
                temperature: "5,778 K (superficie)",
                composition: Some("Hidrógeno (73%), Helio (25%), otros (2%)"),
                age: Some("4.6 mil millones de años"),
                description: "El Sol es la estrella central del sistema solar y la fuente de luz y calor que sustenta la vida en la Tierra.",
                ..default()
            },
        },
        planet(
            "mercury",
            "Mercurio",
            0.38,
            8.0,
            0.024,
            0.017,
            Color::srgb_u8(0x8C, 0x78, 0x53),
            "textures/2k_mercury.jpg",
            BodyInfo {
                kind: "Planeta rocoso",
                diameter: "4,879 km",
                mass: "3.301 × 10²³ kg",
                temperature: "-173°C a 427°C",
                orbital_period: Some("88 días terrestres"),
                day_length: Some("176 días terrestres"),
                description: "Mercurio es el planeta más cercano al Sol y el más pequeño del sistema solar. Su superficie está llena de cráteres.",
                ..default()
            },
        ),
        planet(
            "venus",
            "Venus",
            0.95,
            11.0,
            0.015,
            -0.004,
            Color::srgb_u8(0xFF, 0xC6, 0x49),
            "textures/2k_venus_surface.jpg",
            BodyInfo {
                kind: "Planeta rocoso",
                diameter: "12,104 km",
                mass: "4.867 × 10²⁴ kg",
                temperature: "462°C (superficie)",
                orbital_period: Some("225 días terrestres"),
                day_length: Some("243 días terrestres"),
                description: "Venus es el planeta más caliente del sistema solar debido a su densa atmósfera de dióxido de carbono.",
                ..default()
            },
        ),
        CelestialBody {
            has_clouds: true,
            normal_map: Some("textures/2k_earth_normal.jpg"),
            moons: vec![Moon {
                display_name: "Luna",
                radius: 0.27,
                orbital_distance: 2.5,
                orbital_angular_speed: 0.05,
                texture: Some("textures/2k_moon.jpg"),
            }],
            ..planet(
                "earth",
                "Tierra",
                1.0,
                15.0,
                0.01,
                0.02,
                Color::srgb_u8(0x6B, 0x93, 0xD6),
                "textures/2k_earth_daymap.jpg",
                BodyInfo {
                    kind: "Planeta rocoso",
                    diameter: "12,756 km",
                    mass: "5.972 × 10²⁴ kg",
                    temperature: "-88°C a 58°C",
                    orbital_period: Some("365.25 días"),
                    day_length: Some("24 horas"),
                    description: "La Tierra es el único planeta conocido que alberga vida, con océanos de agua líquida y una atmósfera protectora.",
                    ..default()
                },
            )
        },
        CelestialBody {
            moons: vec![
                Moon {
                    display_name: "Fobos",
                    radius: 0.1,
                    orbital_distance: 1.2,
                    orbital_angular_speed: 0.08,
                    texture: Some("textures/2k_phobos.jpg"),
                },
                Moon {
                    display_name: "Deimos",
                    radius: 0.08,
                    orbital_distance: 1.8,
                    orbital_angular_speed: 0.04,
                    texture: Some("textures/2k_deimos.jpg"),
                },
            ],
            ..planet(
                "mars",
                "Marte",
                0.53,
                20.0,
                0.008,
                0.018,
                Color::srgb_u8(0xCD, 0x5C, 0x5C),
                "textures/2k_mars.jpg",
                BodyInfo {
                    kind: "Planeta rocoso",
                    diameter: "6,792 km",
                    mass: "6.39 × 10²³ kg",
                    temperature: "-87°C a -5°C",
                    orbital_period: Some("687 días terrestres"),
                    day_length: Some("24.6 horas"),
                    description: "Marte, conocido como el planeta rojo, tiene los volcanes más grandes del sistema solar y evidencia de agua antigua.",
                    ..default()
                },
            )
        },
        planet(
            "jupiter",
            "Júpiter",
            2.5,
            30.0,
            0.002,
            0.04,
            Color::srgb_u8(0xD8, 0xCA, 0x9D),
            "textures/2k_jupiter.jpg",
            BodyInfo {
                kind: "Gigante gaseoso",
                diameter: "142,984 km",
                mass: "1.898 × 10²⁷ kg",
                temperature: "-108°C (superficie de nubes)",
                orbital_period: Some("12 años terrestres"),
                day_length: Some("9.9 horas"),
                description: "Júpiter es el planeta más grande del sistema solar y actúa como un escudo protector para los planetas internos.",
                ..default()
            },
        ),
        CelestialBody {
            has_rings: true,
            ..planet(
                "saturn",
                "Saturno",
                2.1,
                40.0,
                0.0009,
                0.038,
                Color::srgb_u8(0xFA, 0xD5, 0xA5),
                "textures/2k_saturn.jpg",
                BodyInfo {
                    kind: "Gigante gaseoso",
                    diameter: "120,536 km",
                    mass: "5.683 × 10²⁶ kg",
                    temperature: "-139°C (superficie de nubes)",
                    orbital_period: Some("29 años terrestres"),
                    day_length: Some("10.7 horas"),
                    description: "Saturno es famoso por sus espectaculares anillos compuestos principalmente de hielo y roca.",
                    ..default()
                },
            )
        },
        planet(
            "uranus",
            "Urano",
            1.6,
            50.0,
            0.0004,
            -0.03,
            Color::srgb_u8(0x4F, 0xD0, 0xE7),
            "textures/2k_uranus.jpg",
            BodyInfo {
                kind: "Gigante de hielo",
                diameter: "51,118 km",
                mass: "8.681 × 10²⁵ kg",
                temperature: "-197°C (superficie de nubes)",
                orbital_period: Some("84 años terrestres"),
                day_length: Some("17.2 horas"),
                description: "Urano es único porque rota de lado, probablemente debido a una colisión antigua. Es un gigante de hielo.",
                ..default()
            },
        ),
        planet(
            "neptune",
            "Neptuno",
            1.5,
            60.0,
            0.0001,
            0.032,
            Color::srgb_u8(0x4B, 0x70, 0xDD),
            "textures/2k_neptune.jpg",
            BodyInfo {
                kind: "Gigante de hielo",
                diameter: "49,528 km",
                mass: "1.024 × 10²⁶ kg",
                temperature: "-201°C (superficie de nubes)",
                orbital_period: Some("165 años terrestres"),
                day_length: Some("16.1 horas"),
                description: "Neptuno es el planeta más distante del Sol y tiene los vientos más fuertes del sistema solar.",
                ..default()
            },
        ),
    ]
}

/// A plain planet: no rings, no clouds, no moons, not luminous.
fn planet(
    key: &'static str,
    display_name: &'static str,
    radius: f32,
    orbital_distance: f32,
    orbital_angular_speed: f32,
    rotation_angular_speed: f32,
    color: Color,
    texture: &'static str,
    info: BodyInfo,
) -> CelestialBody {
    CelestialBody {
        key,
        display_name,
        radius,
        orbital_distance,
        orbital_angular_speed,
        rotation_angular_speed,
        is_luminous: false,
        has_rings: false,
        has_clouds: false,
        color,
        texture: Some(texture),
        normal_map: None,
        moons: Vec::new(),
        info,
    }
}
