//! Handler für das Vegetationsindex-Overlay.

use crate::app::use_cases;
use crate::app::AppState;

/// Zeigt das Overlay eines Snapshots an.
pub fn show(state: &mut AppState, field_id: u64, image_ref: &str) -> anyhow::Result<()> {
    use_cases::overlay::show(state, field_id, image_ref)
}

/// Blendet das aktive Overlay aus.
pub fn hide(state: &mut AppState) {
    use_cases::overlay::hide(state);
}

/// Baut alle Layer nach einem Basemap-Style-Reload neu auf.
pub fn rebuild_after_style_reload(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::overlay::rebuild_after_style_reload(state)
}
