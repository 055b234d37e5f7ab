//! Reine Geodäsie-Funktionen: Fläche, Zentroid, UTM-Projektion,
//! Flächenformatierung in Rai/Ngan/Tarang-Wah.
//!
//! Layer-neutral: wird von Session, Registry und UI konsumiert,
//! hält selbst keinen Zustand.

use super::geometry::{FieldGeometry, LngLat, Ring};
use std::fmt;

/// Mittlerer Erdradius in Metern (Kugel-Näherung).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Polygonfläche in m² über die Spherical-Excess-Näherung.
///
/// Pro Kante wird `(λ2−λ1)·(2 + sin φ1 + sin φ2)` in Radiant akkumuliert,
/// Ergebnis ist `|Summe|·R²/2`. Kugel statt Ellipsoid — für feldgroße
/// Polygone ausreichend, für Landesflächen nicht.
///
/// Weniger als 3 distinkte Vertices ergeben 0.
pub fn ring_area_sq_m(ring: &Ring) -> f64 {
    let pts = ring.distinct_vertices();
    if pts.len() < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        sum += (b.lng - a.lng).to_radians()
            * (2.0 + a.lat.to_radians().sin() + b.lat.to_radians().sin());
    }

    sum.abs() * EARTH_RADIUS_M * EARTH_RADIUS_M / 2.0
}

/// Gesamtfläche einer Geometrie: Summe der Außenring-Flächen.
pub fn geometry_area_sq_m(geometry: &FieldGeometry) -> f64 {
    geometry.exterior_rings().iter().map(ring_area_sq_m).sum()
}

/// Zentroid als arithmetisches Mittel der distinkten Vertices.
///
/// Bewusst kein flächengewichteter Schwerpunkt: der Wert platziert nur
/// das schwebende Flächen-Label. Bei stark konkaven Polygonen kann das
/// Label sichtbar neben der Flächenmitte liegen.
pub fn ring_centroid(ring: &Ring) -> Option<LngLat> {
    let pts = ring.distinct_vertices();
    if pts.is_empty() {
        return None;
    }
    let n = pts.len() as f64;
    let (sum_lng, sum_lat) = pts
        .iter()
        .fold((0.0, 0.0), |(lng, lat), p| (lng + p.lng, lat + p.lat));
    Some(LngLat::new(sum_lng / n, sum_lat / n))
}

/// Zentroid über alle Ringe einer Geometrie.
pub fn geometry_centroid(geometry: &FieldGeometry) -> Option<LngLat> {
    let mut count = 0usize;
    let (mut sum_lng, mut sum_lat) = (0.0, 0.0);
    for ring in geometry.exterior_rings() {
        for p in ring.distinct_vertices() {
            sum_lng += p.lng;
            sum_lat += p.lat;
            count += 1;
        }
    }
    if count == 0 {
        return None;
    }
    Some(LngLat::new(sum_lng / count as f64, sum_lat / count as f64))
}

/// Hemisphäre einer UTM-Koordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

/// UTM-Koordinate (WGS-84, metrisch, auf ganze Meter gerundet).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmCoordinate {
    pub zone: u8,
    pub hemisphere: Hemisphere,
    pub easting: f64,
    pub northing: f64,
}

impl fmt::Display for UtmCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let h = match self.hemisphere {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        };
        write!(
            f,
            "{}{} {:.0} E {:.0} N",
            self.zone, h, self.easting, self.northing
        )
    }
}

// WGS-84-Ellipsoid
const WGS84_A: f64 = 6_378_137.0;
const WGS84_F: f64 = 1.0 / 298.257223563;
const UTM_K0: f64 = 0.9996;
const UTM_FALSE_EASTING: f64 = 500_000.0;
const UTM_FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Transverse-Mercator-Vorwärtsprojektion WGS-84 → UTM.
///
/// Zone = `floor((lng+180)/6)+1`, Hemisphäre nach Vorzeichen der Breite.
/// Easting/Northing werden für die Anzeige auf ganze Meter gerundet.
pub fn to_utm(p: LngLat) -> UtmCoordinate {
    let zone = (((p.lng + 180.0) / 6.0).floor() as i32 + 1).clamp(1, 60) as u8;
    let lam0 = ((zone as f64 - 1.0) * 6.0 - 180.0 + 3.0).to_radians();

    let e2 = WGS84_F * (2.0 - WGS84_F);
    let ep2 = e2 / (1.0 - e2);

    let phi = p.lat.to_radians();
    let lam = p.lng.to_radians();

    let sin_phi = phi.sin();
    let cos_phi = phi.cos();
    let tan_phi = phi.tan();

    let n = WGS84_A / (1.0 - e2 * sin_phi * sin_phi).sqrt();
    let t = tan_phi * tan_phi;
    let c = ep2 * cos_phi * cos_phi;
    let a = (lam - lam0) * cos_phi;

    // Meridianbogenlänge
    let m = WGS84_A
        * ((1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2 * e2 * e2 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e2 * e2 / 32.0 + 45.0 * e2 * e2 * e2 / 1024.0)
                * (2.0 * phi).sin()
            + (15.0 * e2 * e2 / 256.0 + 45.0 * e2 * e2 * e2 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e2 * e2 * e2 / 3072.0) * (6.0 * phi).sin());

    let easting = UTM_K0
        * n
        * (a + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0)
        + UTM_FALSE_EASTING;

    let mut northing = UTM_K0
        * (m + n
            * tan_phi
            * (a * a / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a.powi(6) / 720.0));

    let hemisphere = if p.lat >= 0.0 {
        Hemisphere::North
    } else {
        northing += UTM_FALSE_NORTHING_SOUTH;
        Hemisphere::South
    };

    UtmCoordinate {
        zone,
        hemisphere,
        easting: easting.round(),
        northing: northing.round(),
    }
}

/// Fläche in traditionellen Landeinheiten:
/// 1 Rai = 1600 m², 1 Ngan = 400 m², 1 Tarang Wah = 4 m².
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandArea {
    pub rai: u64,
    pub ngan: u64,
    pub square_wah: u64,
}

impl LandArea {
    /// Zerlegt m² per Integer-Division-Kaskade. Jede Stufe trunkiert
    /// (kein Runden), negative Eingaben werden als 0 behandelt.
    pub fn from_square_meters(sq_m: f64) -> Self {
        let total = sq_m.max(0.0) as u64;
        let rai = total / 1600;
        let rest = total % 1600;
        let ngan = rest / 400;
        let square_wah = (rest % 400) / 4;
        Self {
            rai,
            ngan,
            square_wah,
        }
    }

    /// Summe der Bänder zurück in m².
    pub fn to_square_meters(&self) -> f64 {
        self.rai as f64 * 1600.0 + self.ngan as f64 * 400.0 + self.square_wah as f64 * 4.0
    }
}

impl fmt::Display for LandArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Rai {} Ngan {} Wah²",
            self.rai, self.ngan, self.square_wah
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Ring;
    use approx::assert_relative_eq;

    /// Rechteck w×h Meter mit unterer linker Ecke bei (lng0, lat0).
    fn rect_ring(lng0: f64, lat0: f64, w_m: f64, h_m: f64) -> Ring {
        let d_lat = (h_m / EARTH_RADIUS_M).to_degrees();
        let d_lng = (w_m / (EARTH_RADIUS_M * lat0.to_radians().cos())).to_degrees();
        Ring::closed(vec![
            LngLat::new(lng0, lat0),
            LngLat::new(lng0 + d_lng, lat0),
            LngLat::new(lng0 + d_lng, lat0 + d_lat),
            LngLat::new(lng0, lat0 + d_lat),
        ])
    }

    #[test]
    fn flaeche_von_100x100_metern() {
        let ring = rect_ring(100.5, 13.75, 100.0, 100.0);
        assert_relative_eq!(ring_area_sq_m(&ring), 10_000.0, max_relative = 0.01);
    }

    #[test]
    fn flaeche_unter_drei_vertices_ist_null() {
        let ring = Ring::new(vec![LngLat::new(0.0, 0.0), LngLat::new(1.0, 0.0)]);
        assert_eq!(ring_area_sq_m(&ring), 0.0);
        assert_eq!(ring_area_sq_m(&Ring::new(vec![])), 0.0);
    }

    #[test]
    fn flaeche_ist_invariant_unter_rotation_und_umkehrung() {
        let ring = rect_ring(100.0, 13.0, 80.0, 55.0);
        let base = ring_area_sq_m(&ring);

        let pts = ring.distinct_vertices().to_vec();
        for shift in 1..pts.len() {
            let mut rotated = pts.clone();
            rotated.rotate_left(shift);
            assert_relative_eq!(
                ring_area_sq_m(&Ring::closed(rotated)),
                base,
                max_relative = 1e-9
            );
        }

        let mut reversed = pts.clone();
        reversed.reverse();
        assert_relative_eq!(
            ring_area_sq_m(&Ring::closed(reversed)),
            base,
            max_relative = 1e-9
        );
    }

    #[test]
    fn zentroid_mittelt_distinkte_vertices() {
        let ring = Ring::closed(vec![
            LngLat::new(0.0, 0.0),
            LngLat::new(2.0, 0.0),
            LngLat::new(2.0, 2.0),
            LngLat::new(0.0, 2.0),
        ]);
        let c = ring_centroid(&ring).unwrap();
        // Das schließende Duplikat darf den Mittelwert nicht verzerren
        assert_relative_eq!(c.lng, 1.0);
        assert_relative_eq!(c.lat, 1.0);
    }

    #[test]
    fn utm_referenzpunkt_bangkok() {
        let utm = to_utm(LngLat::new(100.5018, 13.7563));
        assert_eq!(utm.zone, 47);
        assert_eq!(utm.hemisphere, Hemisphere::North);
        assert!(
            (utm.easting - 662_367.0).abs() <= 1.0,
            "easting {}",
            utm.easting
        );
        assert!(
            (utm.northing - 1_521_281.0).abs() <= 1.0,
            "northing {}",
            utm.northing
        );
    }

    #[test]
    fn utm_suedhalbkugel_mit_false_northing() {
        let utm = to_utm(LngLat::new(151.2093, -33.8688));
        assert_eq!(utm.zone, 56);
        assert_eq!(utm.hemisphere, Hemisphere::South);
        assert!(
            (utm.easting - 334_369.0).abs() <= 1.0,
            "easting {}",
            utm.easting
        );
        assert!(
            (utm.northing - 6_250_948.0).abs() <= 1.0,
            "northing {}",
            utm.northing
        );
    }

    #[test]
    fn landarea_kaskade_trunkiert() {
        let area = LandArea::from_square_meters(4253.0);
        assert_eq!(area.rai, 2);
        assert_eq!(area.ngan, 2);
        assert_eq!(area.square_wah, 63);
        assert_eq!(area.to_string(), "2 Rai 2 Ngan 63 Wah²");
    }

    #[test]
    fn landarea_roundtrip_innerhalb_einer_wah() {
        for sq_m in [0.0, 3.9, 4.0, 399.0, 1600.0, 4253.0, 123_456.7] {
            let area = LandArea::from_square_meters(sq_m);
            let back = area.to_square_meters();
            assert!(back <= sq_m, "{} -> {}", sq_m, back);
            assert!(sq_m - back < 5.0, "{} -> {}", sq_m, back);
        }
    }

    #[test]
    fn landarea_negativ_wird_null() {
        let area = LandArea::from_square_meters(-50.0);
        assert_eq!((area.rai, area.ngan, area.square_wah), (0, 0, 0));
    }
}
