//! Use-Case-Funktionen für gespeicherte Felder.

use crate::app::AppState;
use crate::core::{FieldAttributes, LandArea, NewFieldRequest};
use anyhow::Result;

/// Lädt die Feldliste neu aus dem Store und gleicht die Karten-Layer ab.
pub fn refresh_from_store(state: &mut AppState) -> Result<()> {
    state.fields = state.store.list()?;
    sync_field_layers(state);
    Ok(())
}

/// Gleicht die Boundary-Layer mit der Feldliste ab: verwaiste Layer
/// gelöschter Felder verschwinden, alle aktuellen Felder bekommen ein
/// idempotentes Upsert.
pub fn sync_field_layers(state: &mut AppState) {
    let known: Vec<u64> = state.registry.field_ids().collect();
    for id in known {
        if state.field(id).is_none() {
            state.registry.remove_field_layers(&mut state.scene, id);
        }
    }
    let paint = state.options.field_paint();
    for field in state.fields.clone() {
        state
            .registry
            .ensure_field_layers(&mut state.scene, &field, paint);
    }
}

/// Speichert die wartende Geometrie als neues Feld.
/// Ohne wartende Geometrie ein No-op.
pub fn save_pending(state: &mut AppState, name: String, attributes: FieldAttributes) -> Result<()> {
    let Some(geometry) = state.drawing.pending_geometry.clone() else {
        return Ok(());
    };
    let request = NewFieldRequest::from_geometry(name, attributes, geometry);
    let field = state.store.save(request)?;

    log::info!("Feld gespeichert: {} ('{}')", field.id, field.name);
    state.ui.status_message = Some(format!(
        "Feld '{}' gespeichert: {}",
        field.name,
        LandArea::from_square_meters(field.area_sq_m)
    ));

    state.fields.push(field.clone());
    let paint = state.options.field_paint();
    state
        .registry
        .ensure_field_layers(&mut state.scene, &field, paint);

    super::drawing::dismiss_save_dialog(state);
    state.ui.selected_field_id = Some(field.id);
    Ok(())
}

/// Löscht ein Feld samt Karten-Layern. Ein aktives Overlay auf diesem
/// Feld wird vorher ausgeblendet.
pub fn delete(state: &mut AppState, field_id: u64) -> Result<()> {
    if state.overlay.active_field_id() == Some(field_id) {
        super::overlay::hide(state);
    }
    state.store.delete(field_id)?;
    state.fields.retain(|f| f.id != field_id);
    state.registry.remove_field_layers(&mut state.scene, field_id);
    if state.ui.selected_field_id == Some(field_id) {
        state.ui.selected_field_id = None;
    }
    log::info!("Feld gelöscht: {}", field_id);
    Ok(())
}

/// Selektiert ein Feld in der Liste (None = Selektion aufheben).
pub fn select(state: &mut AppState, field_id: Option<u64>) {
    state.ui.selected_field_id = field_id;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DrawingModeKind;
    use crate::app::use_cases::drawing;
    use crate::core::LngLat;
    use crate::map::MapSurface;

    fn draw_and_confirm(state: &mut AppState) {
        drawing::start(state, DrawingModeKind::PointPlacement);
        drawing::add_point(state, LngLat::new(0.0, 0.0));
        drawing::add_point(state, LngLat::new(0.001, 0.0));
        drawing::add_point(state, LngLat::new(0.001, 0.001));
        drawing::add_point(state, LngLat::new(0.0, 0.001));
        drawing::confirm(state);
    }

    #[test]
    fn save_pending_legt_feld_und_layer_an() {
        let mut state = AppState::new();
        draw_and_confirm(&mut state);
        save_pending(&mut state, "Reisfeld Nord".into(), FieldAttributes::default()).unwrap();

        assert_eq!(state.field_count(), 1);
        let field = &state.fields[0];
        assert_eq!(field.name, "Reisfeld Nord");
        assert!(state.scene.has_layer(&format!("field-layer-{}", field.id)));
        // Zeichnungs-Vorschau ist abgeräumt
        assert!(!state.scene.has_layer("drawing-line-layer"));
        assert!(!state.ui.save_field_dialog.visible);
    }

    #[test]
    fn save_ohne_wartende_geometrie_ist_noop() {
        let mut state = AppState::new();
        save_pending(&mut state, "Nichts".into(), FieldAttributes::default()).unwrap();
        assert_eq!(state.field_count(), 0);
    }

    #[test]
    fn delete_entfernt_feld_layer_und_selektion() {
        let mut state = AppState::new();
        draw_and_confirm(&mut state);
        save_pending(&mut state, "A".into(), FieldAttributes::default()).unwrap();
        let id = state.fields[0].id;

        delete(&mut state, id).unwrap();
        assert_eq!(state.field_count(), 0);
        assert!(!state.scene.has_layer(&format!("field-layer-{id}")));
        assert_eq!(state.ui.selected_field_id, None);
    }
}
