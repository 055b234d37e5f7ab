//! Zentrale Konfiguration für den AgriField Mapper.
//!
//! `MapperOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor (Pixel pro Meter).
pub const CAMERA_ZOOM_MIN: f64 = 0.01;
/// Maximaler Zoom-Faktor (Pixel pro Meter).
pub const CAMERA_ZOOM_MAX: f64 = 64.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f64 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f64 = 1.1;

// ── Diagnose ────────────────────────────────────────────────────────

/// Maximale Anzahl Einträge im Command-Log.
pub const COMMAND_LOG_CAPACITY: usize = 1000;

// ── Feld-Rendering ──────────────────────────────────────────────────

/// Füllfarbe gespeicherter Felder (RGBA: Grün, transparent).
pub const FIELD_FILL_COLOR: [u8; 4] = [46, 160, 67, 60];
/// Randfarbe gespeicherter Felder (RGBA: Grün, opak).
pub const FIELD_OUTLINE_COLOR: [u8; 4] = [46, 160, 67, 255];
/// Randbreite gespeicherter Felder in Pixel.
pub const FIELD_OUTLINE_WIDTH_PX: f32 = 2.0;

// ── Drawing-Rendering ───────────────────────────────────────────────

/// Füllfarbe der Live-Zeichnung (RGBA: Orange, transparent).
pub const DRAWING_FILL_COLOR: [u8; 4] = [255, 152, 0, 50];
/// Linienfarbe der Live-Zeichnung (RGBA: Orange, opak).
pub const DRAWING_LINE_COLOR: [u8; 4] = [255, 152, 0, 255];
/// Linienbreite der Live-Zeichnung in Pixel.
pub const DRAWING_LINE_WIDTH_PX: f32 = 2.0;
/// Radius der gesetzten Vertices in Pixel.
pub const DRAWING_VERTEX_RADIUS_PX: f32 = 4.0;

// ── Overlay ─────────────────────────────────────────────────────────

/// Standard-Deckungsgrad des Vegetationsindex-Overlays.
pub const OVERLAY_OPACITY: f32 = 0.85;
/// Padding beim Heranzoomen an ein Overlay in Pixel.
pub const OVERLAY_FIT_PADDING_PX: f32 = 48.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Mapper-Optionen.
/// Wird als `agri_field_mapper.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapperOptions {
    // ── Felder ──────────────────────────────────────────────────
    /// Füllfarbe gespeicherter Felder (RGBA)
    pub field_fill_color: [u8; 4],
    /// Randfarbe gespeicherter Felder
    pub field_outline_color: [u8; 4],
    /// Randbreite gespeicherter Felder in Pixel
    pub field_outline_width_px: f32,

    // ── Zeichnung ───────────────────────────────────────────────
    /// Füllfarbe der Live-Zeichnung
    pub drawing_fill_color: [u8; 4],
    /// Linienfarbe der Live-Zeichnung
    pub drawing_line_color: [u8; 4],
    /// Linienbreite der Live-Zeichnung in Pixel
    pub drawing_line_width_px: f32,
    /// Radius der gesetzten Vertices in Pixel
    #[serde(default = "default_drawing_vertex_radius_px")]
    pub drawing_vertex_radius_px: f32,

    // ── Overlay ─────────────────────────────────────────────────
    /// Deckungsgrad des Vegetationsindex-Overlays
    pub overlay_opacity: f32,
    /// Padding beim Heranzoomen an ein Overlay in Pixel
    #[serde(default = "default_overlay_fit_padding_px")]
    pub overlay_fit_padding_px: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f64,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f64,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f64,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f64,
}

impl Default for MapperOptions {
    fn default() -> Self {
        Self {
            field_fill_color: FIELD_FILL_COLOR,
            field_outline_color: FIELD_OUTLINE_COLOR,
            field_outline_width_px: FIELD_OUTLINE_WIDTH_PX,

            drawing_fill_color: DRAWING_FILL_COLOR,
            drawing_line_color: DRAWING_LINE_COLOR,
            drawing_line_width_px: DRAWING_LINE_WIDTH_PX,
            drawing_vertex_radius_px: DRAWING_VERTEX_RADIUS_PX,

            overlay_opacity: OVERLAY_OPACITY,
            overlay_fit_padding_px: OVERLAY_FIT_PADDING_PX,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
        }
    }
}

/// Serde-Default für `drawing_vertex_radius_px` (Abwärtskompatibilität).
fn default_drawing_vertex_radius_px() -> f32 {
    DRAWING_VERTEX_RADIUS_PX
}

/// Serde-Default für `overlay_fit_padding_px` (Abwärtskompatibilität).
fn default_overlay_fit_padding_px() -> f32 {
    OVERLAY_FIT_PADDING_PX
}

impl MapperOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("agri_field_mapper"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("agri_field_mapper.toml")
    }

    /// Füll-Stil gespeicherter Felder.
    pub fn field_paint(&self) -> crate::map::FillPaint {
        crate::map::FillPaint {
            fill_color: self.field_fill_color,
            outline_color: self.field_outline_color,
            outline_width_px: self.field_outline_width_px,
        }
    }

    /// Füll-Stil der Live-Zeichnung.
    pub fn drawing_fill_paint(&self) -> crate::map::FillPaint {
        crate::map::FillPaint {
            fill_color: self.drawing_fill_color,
            outline_color: self.drawing_line_color,
            outline_width_px: self.drawing_line_width_px,
        }
    }

    /// Linien-Stil der Live-Zeichnung.
    pub fn drawing_line_paint(&self) -> crate::map::LinePaint {
        crate::map::LinePaint {
            color: self.drawing_line_color,
            width_px: self.drawing_line_width_px,
        }
    }
}
