//! Use-Case-Funktionen für die Node-Selektion.
//!
//! Ungültige Ziele (kein Projekt, Node nicht im Baum) sind stille No-Ops.

use crate::app::AppState;

/// Leert die Selektion.
pub fn select_none(state: &mut AppState) {
    state.selection.clear();
}

/// Ersetzt die Selektion durch genau einen Node.
pub fn select(state: &mut AppState, uuid: u32) {
    if !node_exists(state, uuid) {
        log::debug!("Select: Node {} nicht im Baum, ignoriert", uuid);
        return;
    }
    state.selection.set_single(uuid);
}

/// Hängt einen Node an die Selektion an (Duplikate erlaubt).
pub fn add_to_selection(state: &mut AppState, uuid: u32) {
    if !node_exists(state, uuid) {
        log::debug!("AddToSelection: Node {} nicht im Baum, ignoriert", uuid);
        return;
    }
    state.selection.push(uuid);
}

/// Entfernt alle Vorkommen eines Nodes; idempotent.
pub fn remove_from_selection(state: &mut AppState, uuid: u32) {
    let removed = state.selection.remove_all(uuid);
    log::debug!("RemoveFromSelection: {} Einträge für Node {}", removed, uuid);
}

/// Selektiert alle Nodes außer dem Root in Pre-Order.
pub fn select_all(state: &mut AppState) {
    let all = state
        .puppet()
        .map(|puppet| puppet.descendants(puppet.root()))
        .unwrap_or_default();
    state.selection.replace(all);
}

/// `true`, wenn ein gültiger Selektionseintrag auf den Node zeigt.
///
/// Veraltete Einträge (Node entfernt) werden übersprungen.
pub fn is_selected(state: &AppState, uuid: u32) -> bool {
    let Some(puppet) = state.puppet() else {
        return false;
    };
    state
        .selection
        .entries()
        .iter()
        .any(|&id| id == uuid && puppet.contains(id))
}

/// Erster gültiger Selektionseintrag, sonst der Root.
///
/// `None` nur ohne aktives Projekt.
pub fn primary_selected(state: &AppState) -> Option<u32> {
    let puppet = state.puppet()?;
    let first_live = state
        .selection
        .entries()
        .iter()
        .copied()
        .find(|&id| puppet.contains(id));
    Some(first_live.unwrap_or(puppet.root()))
}

fn node_exists(state: &AppState, uuid: u32) -> bool {
    state.puppet().is_some_and(|p| p.contains(uuid))
}
