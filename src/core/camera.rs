//! Geo-Kamera: Viewport-Transformation zwischen LngLat und Screen-Pixeln.
//!
//! Lokale equirektangulare Projektion um das Kamera-Zentrum: Grad werden
//! mit `cos(center.lat)` in Meter skaliert. Für feldgroße Ausschnitte
//! ausreichend genau; es wird nie ein ganzer Kontinent angezeigt.

use super::geometry::{GeoBounds, LngLat};

/// Meter pro Grad geografischer Breite (WGS-84-Mittel).
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Kamera mit Pan und Zoom über einer geografischen Szene.
#[derive(Debug, Clone)]
pub struct GeoCamera {
    /// Blickpunkt in geografischen Koordinaten
    pub center: LngLat,
    /// Zoom-Level: Pixel pro Meter
    pub zoom: f64,
}

impl GeoCamera {
    /// Minimaler Zoom (Pixel pro Meter).
    pub const ZOOM_MIN: f64 = 0.01;
    /// Maximaler Zoom (Pixel pro Meter).
    pub const ZOOM_MAX: f64 = 64.0;

    pub fn new() -> Self {
        Self {
            center: LngLat::new(100.5018, 13.7563),
            zoom: 1.0,
        }
    }

    /// Zentriert die Kamera auf einen Punkt.
    pub fn look_at(&mut self, target: LngLat) {
        self.center = target;
    }

    /// Verschiebt die Kamera um ein Screen-Pixel-Delta.
    pub fn pan_pixels(&mut self, delta: [f32; 2]) {
        let m_per_px = 1.0 / self.zoom;
        let d_east = -delta[0] as f64 * m_per_px;
        let d_north = delta[1] as f64 * m_per_px;
        self.center = LngLat::new(
            self.center.lng + d_east / (METERS_PER_DEGREE * self.center.lat.to_radians().cos()),
            (self.center.lat + d_north / METERS_PER_DEGREE).clamp(-85.0, 85.0),
        );
    }

    /// Zoomt um `factor`, optional auf einen Screen-Fokuspunkt.
    /// Der Punkt unter dem Cursor bleibt dabei geografisch stehen.
    pub fn zoom_towards(
        &mut self,
        factor: f64,
        focus_screen: Option<[f32; 2]>,
        viewport: [f32; 2],
    ) {
        let focus_geo = focus_screen.map(|s| self.unproject(s, viewport));
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
        if let (Some(geo), Some(screen)) = (focus_geo, focus_screen) {
            let after = self.project(geo, viewport);
            self.pan_pixels([screen[0] - after[0], screen[1] - after[1]]);
        }
    }

    /// Projiziert eine geografische Koordinate in Screen-Pixel.
    /// Y wächst nach unten (egui-Konvention).
    pub fn project(&self, p: LngLat, viewport: [f32; 2]) -> [f32; 2] {
        let east_m =
            (p.lng - self.center.lng) * METERS_PER_DEGREE * self.center.lat.to_radians().cos();
        let north_m = (p.lat - self.center.lat) * METERS_PER_DEGREE;
        [
            (viewport[0] as f64 / 2.0 + east_m * self.zoom) as f32,
            (viewport[1] as f64 / 2.0 - north_m * self.zoom) as f32,
        ]
    }

    /// Umkehrung von `project`.
    pub fn unproject(&self, screen: [f32; 2], viewport: [f32; 2]) -> LngLat {
        let east_m = (screen[0] as f64 - viewport[0] as f64 / 2.0) / self.zoom;
        let north_m = (viewport[1] as f64 / 2.0 - screen[1] as f64) / self.zoom;
        LngLat::new(
            self.center.lng + east_m / (METERS_PER_DEGREE * self.center.lat.to_radians().cos()),
            self.center.lat + north_m / METERS_PER_DEGREE,
        )
    }

    /// Zentriert und zoomt die Kamera so, dass `bounds` mit `padding_px`
    /// Rand vollständig sichtbar ist.
    pub fn fit_bounds(&mut self, bounds: GeoBounds, viewport: [f32; 2], padding_px: f32) {
        self.center = bounds.center();

        let width_m = (bounds.max_lng - bounds.min_lng)
            * METERS_PER_DEGREE
            * self.center.lat.to_radians().cos();
        let height_m = (bounds.max_lat - bounds.min_lat) * METERS_PER_DEGREE;

        let avail_w = (viewport[0] - 2.0 * padding_px).max(1.0) as f64;
        let avail_h = (viewport[1] - 2.0 * padding_px).max(1.0) as f64;

        let zoom_w = if width_m > 0.0 {
            avail_w / width_m
        } else {
            Self::ZOOM_MAX
        };
        let zoom_h = if height_m > 0.0 {
            avail_h / height_m
        } else {
            Self::ZOOM_MAX
        };
        self.zoom = zoom_w.min(zoom_h).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }
}

impl Default for GeoCamera {
    fn default() -> Self {
        Self::new()
    }
}
