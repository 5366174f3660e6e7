//! Handler für Edit-Modus, Parameter, Rebleed und Optionen.

use crate::app::use_cases;
use crate::app::{AppState, EditMode};
use crate::shared::EditorOptions;

/// Wechselt den Edit-Modus.
pub fn set_edit_mode(state: &mut AppState, mode: EditMode, unselect_first: bool) {
    use_cases::edit_mode::set_edit_mode(state, mode, unselect_first);
}

/// Schaltet einen Parameter scharf.
pub fn arm_parameter(state: &mut AppState, uuid: u32) {
    use_cases::parameter::arm_parameter(state, uuid);
}

/// Löst den scharfgeschalteten Parameter.
pub fn disarm_parameter(state: &mut AppState) {
    use_cases::parameter::disarm_parameter(state);
}

/// Führt den Rebleed-Task aus und propagiert Fehler an den Aufrufer.
pub fn rebleed(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::rebleed::run_rebleed(state)?;
    Ok(())
}

/// Übernimmt neue Laufzeit-Optionen.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.options = options;
    log::info!("Optionen übernommen");
}
