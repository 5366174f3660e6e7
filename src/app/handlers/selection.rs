//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Leert die Selektion.
pub fn clear(state: &mut AppState) {
    use_cases::selection::select_none(state);
}

/// Selektiert genau einen Node.
pub fn select(state: &mut AppState, uuid: u32) {
    use_cases::selection::select(state, uuid);
}

/// Hängt einen Node an die Selektion an.
pub fn add(state: &mut AppState, uuid: u32) {
    use_cases::selection::add_to_selection(state, uuid);
}

/// Entfernt einen Node aus der Selektion.
pub fn remove(state: &mut AppState, uuid: u32) {
    use_cases::selection::remove_from_selection(state, uuid);
}

/// Selektiert alle Nodes außer dem Root.
pub fn select_all(state: &mut AppState) {
    use_cases::selection::select_all(state);
}
