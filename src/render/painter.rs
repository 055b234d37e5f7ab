//! Zeichnet die [`SceneSurface`]-Layer in Zeichenreihenfolge in den
//! egui-Viewport: Füllungen, Linien, Raster-Overlay und das
//! Live-Flächenlabel der aktiven Drawing-Session.

use crate::app::{use_cases, AppState};
use crate::core::{LngLat, Ring};
use crate::map::{SceneLayerKind, SceneSource, SceneSurface};
use eframe::egui;
use image::RgbaImage;
use std::sync::Arc;

/// Cache für die egui-Textur des Raster-Overlays.
///
/// Das Overlay-Bild wechselt selten; hochgeladen wird nur, wenn sich
/// die Bild-Identität (Arc-Pointer) ändert.
#[derive(Default)]
pub struct RasterTextureCache {
    texture: Option<egui::TextureHandle>,
    key: Option<usize>,
}

impl RasterTextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure(&mut self, ctx: &egui::Context, image: &Arc<RgbaImage>) -> &egui::TextureHandle {
        let key = Arc::as_ptr(image) as usize;
        if self.key != Some(key) {
            let size = [image.width() as usize, image.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            self.texture =
                Some(ctx.load_texture("vi-overlay", color_image, egui::TextureOptions::LINEAR));
            self.key = Some(key);
            log::info!("Overlay-Textur hochgeladen ({}x{})", size[0], size[1]);
        }
        self.texture.as_ref().expect("Textur wurde gerade gesetzt")
    }
}

fn color32(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

fn project(state: &AppState, rect: egui::Rect, p: LngLat) -> egui::Pos2 {
    let viewport = [rect.width(), rect.height()];
    let s = state.view.camera.project(p, viewport);
    egui::pos2(rect.min.x + s[0], rect.min.y + s[1])
}

fn ring_points(state: &AppState, rect: egui::Rect, ring: &Ring) -> Vec<egui::Pos2> {
    ring.vertices()
        .iter()
        .map(|v| project(state, rect, *v))
        .collect()
}

/// Zeichnet die komplette Szene in den Viewport.
pub fn draw_scene(
    ui: &egui::Ui,
    rect: egui::Rect,
    state: &AppState,
    cache: &mut RasterTextureCache,
) {
    let painter = ui.painter_at(rect);
    let scene: &SceneSurface = &state.scene;

    for (_id, layer) in scene.layers() {
        if !layer.visible {
            continue;
        }
        let Some(source) = scene.source(&layer.source_id) else {
            continue;
        };

        match (&layer.kind, source) {
            (SceneLayerKind::Fill(paint), SceneSource::GeoJson(geometry)) => {
                for ring in geometry.exterior_rings() {
                    let points = ring_points(state, rect, ring);
                    if points.len() < 3 {
                        continue;
                    }
                    painter.add(egui::Shape::convex_polygon(
                        points,
                        color32(paint.fill_color),
                        egui::Stroke::new(paint.outline_width_px, color32(paint.outline_color)),
                    ));
                }
            }
            (SceneLayerKind::Line(paint), SceneSource::GeoJson(geometry)) => {
                let stroke = egui::Stroke::new(paint.width_px, color32(paint.color));
                for ring in geometry.exterior_rings() {
                    let points = ring_points(state, rect, ring);
                    if points.len() >= 2 {
                        painter.add(egui::Shape::line(points.clone(), stroke));
                    }
                    for point in points {
                        painter.circle_filled(
                            point,
                            state.options.drawing_vertex_radius_px,
                            color32(paint.color),
                        );
                    }
                }
            }
            (SceneLayerKind::Raster { opacity }, SceneSource::Image { image, corners }) => {
                let texture = cache.ensure(ui.ctx(), image);
                let projected: Vec<egui::Pos2> =
                    corners.iter().map(|c| project(state, rect, *c)).collect();
                let image_rect = egui::Rect::from_points(&projected);
                painter.image(
                    texture.id(),
                    image_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE.gamma_multiply(*opacity),
                );
            }
            // Layer ohne passende Source-Art wird übersprungen
            _ => {}
        }
    }

    draw_live_label(&painter, rect, state);
}

/// Schwebendes Flächenlabel der aktiven Drawing-Session.
fn draw_live_label(painter: &egui::Painter, rect: egui::Rect, state: &AppState) {
    let Some(feedback) = use_cases::drawing::live_feedback(state) else {
        return;
    };
    let pos = egui::pos2(
        rect.min.x + feedback.label_screen_pos[0],
        rect.min.y + feedback.label_screen_pos[1],
    );
    let galley = painter.layout_no_wrap(
        feedback.area_text,
        egui::FontId::proportional(14.0),
        egui::Color32::WHITE,
    );
    let text_rect = egui::Align2::CENTER_CENTER.anchor_size(pos, galley.size());
    painter.rect_filled(
        text_rect.expand(4.0),
        4.0,
        egui::Color32::from_black_alpha(160),
    );
    painter.galley(text_rect.min, galley, egui::Color32::WHITE);
}
