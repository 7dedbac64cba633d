//! Solar Explorer - Interactive 3D Solar System
//!
//! A library crate providing the body catalog, animation, camera and UI
//! plugins for testing and integration purposes.

pub mod animation;
pub mod asteroid_belt;
pub mod camera;
pub mod input;
pub mod registry;
pub mod render;
pub mod session;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod proptest_animation;
