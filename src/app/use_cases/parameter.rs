//! Use-Case-Funktionen für den scharfgeschalteten Parameter.

use crate::app::AppState;

/// Schaltet einen Parameter der aktiven Puppet scharf.
///
/// Unbekannte UUIDs sind ein No-Op; die Selektion bleibt unberührt.
pub fn arm_parameter(state: &mut AppState, uuid: u32) {
    let Some(param) = state.puppet().and_then(|p| p.find_parameter(uuid)).cloned() else {
        log::debug!("ArmParameter: Parameter {} unbekannt, ignoriert", uuid);
        return;
    };
    log::debug!("Parameter '{}' scharfgeschaltet", param.name);
    state.editor.arm(&param);
}

/// Löst den scharfgeschalteten Parameter.
pub fn disarm_parameter(state: &mut AppState) {
    state.editor.disarm();
}
