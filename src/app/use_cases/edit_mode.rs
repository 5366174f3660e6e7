//! Use-Case-Funktionen für den Edit-Modus.

use crate::app::{AppState, EditMode};

/// Wechselt den Edit-Modus.
///
/// Außerhalb von `ModelEdit` wird die Drawable-Liste durch eine vollständige
/// Traversierung neu aufgebaut. Sie bleibt bis zum nächsten Wechsel bestehen,
/// auch wenn sich der Baum zwischenzeitlich ändert.
pub fn set_edit_mode(state: &mut AppState, mode: EditMode, unselect_first: bool) {
    if unselect_first {
        state.selection.clear();
    }

    let drawables = match mode {
        EditMode::ModelEdit => Vec::new(),
        _ => state.puppet().map(|p| p.drawables()).unwrap_or_default(),
    };
    log::debug!(
        "Edit-Modus {:?} → {:?} ({} Drawables gecacht)",
        state.editor.mode,
        mode,
        drawables.len()
    );
    state.editor.set_drawable_cache(drawables);
    state.editor.mode = mode;
}
