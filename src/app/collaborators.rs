//! Injizierte Kollaborateure: Feld-Persistenz und Snapshot-Quelle.
//!
//! Die Engine kennt nur die Traits; konkrete Backends (In-Memory,
//! lokales Verzeichnis, später ein Server) werden beim App-Start
//! eingesteckt.

use crate::core::{Field, NewFieldRequest, Snapshot};
use anyhow::{anyhow, Context, Result};
use image::RgbaImage;
use indexmap::IndexMap;
use std::path::PathBuf;

/// Persistenz-Schnittstelle für Felder.
///
/// Fehler werden unverändert an den Aufrufer durchgereicht; die Engine
/// interpretiert Persistenzfehler nicht.
pub trait FieldStore {
    /// Speichert ein neues Feld und vergibt dessen ID.
    fn save(&mut self, request: NewFieldRequest) -> Result<Field>;

    /// Löscht ein Feld.
    fn delete(&mut self, field_id: u64) -> Result<()>;

    /// Alle gespeicherten Felder in Speicher-Reihenfolge.
    fn list(&self) -> Result<Vec<Field>>;
}

/// Quelle für Vegetationsindex-Snapshots und deren Raster-Bilder.
pub trait SnapshotProvider {
    /// Snapshots eines Felds, neueste zuerst.
    fn snapshots_for(&self, field_id: u64) -> Result<Vec<Snapshot>>;

    /// Lädt das Overlay-Raster zu einer Bild-Referenz.
    fn load_overlay_image(&self, image_ref: &str) -> Result<RgbaImage>;
}

/// Einfacher In-Memory-Store, zugleich das Test-Backend.
#[derive(Debug, Default)]
pub struct InMemoryFieldStore {
    fields: IndexMap<u64, Field>,
    next_id: u64,
}

impl InMemoryFieldStore {
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
            next_id: 1,
        }
    }
}

impl FieldStore for InMemoryFieldStore {
    fn save(&mut self, request: NewFieldRequest) -> Result<Field> {
        let id = self.next_id;
        self.next_id += 1;
        let field = Field {
            id,
            name: request.name,
            geometry: request.geometry,
            area_sq_m: request.area_sq_m,
            centroid: request.centroid,
            attributes: request.attributes,
        };
        self.fields.insert(id, field.clone());
        Ok(field)
    }

    fn delete(&mut self, field_id: u64) -> Result<()> {
        self.fields
            .shift_remove(&field_id)
            .map(|_| ())
            .ok_or_else(|| anyhow!("Feld {} nicht gefunden", field_id))
    }

    fn list(&self) -> Result<Vec<Field>> {
        Ok(self.fields.values().cloned().collect())
    }
}

/// Snapshot-Quelle auf Basis eines lokalen Verzeichnisses.
///
/// Erwartet pro Feld eine `snapshots-<id>.json` mit einer Liste von
/// [`Snapshot`]-Einträgen; `image_ref` ist ein Dateiname relativ zum
/// Wurzelverzeichnis.
#[derive(Debug)]
pub struct LocalSnapshotProvider {
    root: PathBuf,
}

impl LocalSnapshotProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl SnapshotProvider for LocalSnapshotProvider {
    fn snapshots_for(&self, field_id: u64) -> Result<Vec<Snapshot>> {
        let path = self.root.join(format!("snapshots-{field_id}.json"));
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Snapshot-Liste nicht lesbar: {}", path.display()))?;
        let snapshots: Vec<Snapshot> = serde_json::from_str(&content)
            .with_context(|| format!("Snapshot-Liste fehlerhaft: {}", path.display()))?;
        Ok(snapshots)
    }

    fn load_overlay_image(&self, image_ref: &str) -> Result<RgbaImage> {
        let path = self.root.join(image_ref);
        let image = image::open(&path)
            .with_context(|| format!("Overlay-Bild nicht lesbar: {}", path.display()))?;
        Ok(image.to_rgba8())
    }
}
