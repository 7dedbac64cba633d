//! Info panel - details card for the selected body.
//!
//! Anchored to the top-right corner. Hidden when nothing is selected or the
//! selected key is not in the registry.

use bevy::asset::LoadState;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiTextureHandle, egui};

use crate::registry::{BodyRegistry, CelestialBody};
use crate::session::SessionState;

use super::icons;

/// Colors for the info card.
mod colors {
    use bevy_egui::egui::Color32;

    pub const CARD_BG: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 200);
    pub const CARD_BORDER: Color32 = Color32::from_rgb(60, 60, 80);
    pub const LABEL: Color32 = Color32::from_rgb(150, 150, 170);
    pub const VALUE: Color32 = Color32::from_rgb(230, 230, 240);
    pub const ACCENT: Color32 = Color32::from_rgb(85, 153, 221);
}

const CARD_WIDTH: f32 = 300.0;
const PREVIEW_MAX_HEIGHT: f32 = 160.0;

/// What the user did with the card this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoCardAction {
    Close,
    FlyTo,
}

/// Caption of the fly-to button.
pub fn fly_to_caption(display_name: &str) -> String {
    format!("Viajar a {display_name}")
}

/// Apply a card action to the session.
pub fn apply_card_action(session: &mut SessionState, action: InfoCardAction) {
    match action {
        InfoCardAction::Close => session.clear_selection(),
        InfoCardAction::FlyTo => {
            if let Some(request) = session.request_fly_to() {
                info!("Fly-to requested: {}", request.target);
            }
        }
    }
}

/// On-screen size of a texture preview spanning the card width.
///
/// Keeps the image's aspect ratio, capped at `PREVIEW_MAX_HEIGHT`.
/// Degenerate images get no preview.
pub fn preview_size(image_size: UVec2) -> Option<egui::Vec2> {
    if image_size.x == 0 || image_size.y == 0 {
        return None;
    }
    let height = CARD_WIDTH * image_size.y as f32 / image_size.x as f32;
    Some(egui::vec2(CARD_WIDTH, height.min(PREVIEW_MAX_HEIGHT)))
}

/// The body's surface texture, once it has loaded.
///
/// Bodies without a texture, textures still loading and textures that
/// failed to load all yield `None`, which hides the preview.
pub fn loaded_preview(
    asset_server: &AssetServer,
    images: &Assets<Image>,
    body: &CelestialBody,
) -> Option<(Handle<Image>, UVec2)> {
    let path = body.texture?;
    let handle: Handle<Image> = asset_server.load(path);
    if let LoadState::Failed(_) = asset_server.load_state(handle.id()) {
        return None;
    }
    let size = images.get(&handle)?.size();
    Some((handle, size))
}

/// System that renders the info card for the selected body.
pub fn info_panel_system(
    mut contexts: EguiContexts,
    mut session: ResMut<SessionState>,
    registry: Res<BodyRegistry>,
    asset_server: Res<AssetServer>,
    images: Res<Assets<Image>>,
) {
    let Some(body) = session.selected_info(&registry) else {
        return;
    };

    let preview = loaded_preview(&asset_server, &images, body).and_then(|(handle, size)| {
        let size = preview_size(size)?;
        let id = contexts.add_image(EguiTextureHandle::Strong(handle));
        Some(egui::load::SizedTexture::new(id, size))
    });

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if let Some(action) = render_card(ctx, body, preview) {
        apply_card_action(&mut session, action);
    }
}

fn render_card(
    ctx: &egui::Context,
    body: &CelestialBody,
    preview: Option<egui::load::SizedTexture>,
) -> Option<InfoCardAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("info_panel"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(colors::CARD_BG)
                .stroke(egui::Stroke::new(1.0, colors::CARD_BORDER))
                .corner_radius(egui::CornerRadius::same(8))
                .inner_margin(egui::Margin::same(14))
                .show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);

                    // Header with icon, name and close button
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(icons::body_icon(body)).size(20.0));
                        ui.label(egui::RichText::new(body.display_name).strong().size(20.0));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add(egui::Button::new(egui::RichText::new(icons::CLOSE).size(16.0)).frame(false))
                                .on_hover_text("Cerrar (Esc)")
                                .clicked()
                            {
                                action = Some(InfoCardAction::Close);
                            }
                        });
                    });

                    if let Some(texture) = preview {
                        ui.add_space(4.0);
                        ui.add(egui::Image::new(texture).corner_radius(egui::CornerRadius::same(4)));
                    }

                    ui.add_space(4.0);
                    let caption = format!("{} {}", icons::FLY_TO, fly_to_caption(body.display_name));
                    let button = egui::Button::new(egui::RichText::new(caption).color(egui::Color32::WHITE))
                        .fill(colors::ACCENT)
                        .min_size(egui::vec2(CARD_WIDTH, 28.0));
                    if ui.add(button).on_hover_text("F").clicked() {
                        action = Some(InfoCardAction::FlyTo);
                    }

                    ui.separator();

                    egui::Grid::new("body_info")
                        .num_columns(2)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            for (label, value) in body.info.entries() {
                                ui.label(egui::RichText::new(label).color(colors::LABEL));
                                ui.label(egui::RichText::new(value).color(colors::VALUE));
                                ui.end_row();
                            }
                        });

                    ui.separator();
                    ui.label(egui::RichText::new(body.info.description).italics().color(colors::VALUE));
                });
        });

    action
}
