//! Snapshot-Record: eine datierte Vegetationsindex-Messung eines Felds.
//!
//! Snapshots werden extern erzeugt (Satelliten-Analyse); die Engine
//! konsumiert sie nur, um das Overlay-Rendering zu steuern.

use serde::{Deserialize, Serialize};

/// Unterstützte Vegetationsindizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VegetationIndex {
    Ndvi,
    Gndvi,
    Ndwi,
}

impl VegetationIndex {
    pub fn label(&self) -> &'static str {
        match self {
            VegetationIndex::Ndvi => "NDVI",
            VegetationIndex::Gndvi => "GNDVI",
            VegetationIndex::Ndwi => "NDWI",
        }
    }
}

/// Eine Vegetationsindex-Messung für ein Feld.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub field_id: u64,
    pub vi_type: VegetationIndex,
    /// Aufnahmedatum als ISO-8601-String (`YYYY-MM-DD`).
    pub date: String,
    /// Skalarer Mittelwert des Index über die Feldfläche.
    pub mean_value: f64,
    /// Referenz auf das Raster-Bild (Pfad oder URL).
    /// `None` bedeutet "kein Overlay verfügbar", kein Fehler.
    pub image_ref: Option<String>,
}
