//! Solar Explorer - Interactive 3D Solar System
//!
//! A desktop application for exploring the Sun and its planets: orbit the
//! camera, change the flow of time and fly to any body.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use solar_explorer::animation::AnimationPlugin;
use solar_explorer::asteroid_belt::AsteroidBeltPlugin;
use solar_explorer::camera::CameraPlugin;
use solar_explorer::input::InputPlugin;
use solar_explorer::registry::{BodyRegistry, RegistryError};
use solar_explorer::render::RenderPlugin;
use solar_explorer::session::SessionState;
use solar_explorer::types::FrameSetsPlugin;
use solar_explorer::ui::UiPlugin;

fn main() -> Result<(), RegistryError> {
    let registry = BodyRegistry::solar_system()?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Sistema Solar 3D".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(registry)
        .insert_resource(SessionState::default())
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins((
            FrameSetsPlugin,
            AnimationPlugin,
            AsteroidBeltPlugin,
            CameraPlugin,
            InputPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run();

    Ok(())
}
