//! Use-Case-Funktionen für Projekt-Anlage und Importe.
//!
//! Jeder Import baut die neue Puppet vollständig auf und übernimmt sie erst
//! danach in die Session. Schlägt der Import fehl, bleibt das bisherige
//! Projekt unverändert aktiv.

use crate::app::AppState;
use crate::core::{Camera2D, Project};
use crate::import::{self, ImportBackends};
use crate::shared::EditorError;
use std::path::Path;

/// Installiert ein neues, leeres Projekt.
pub fn new_project(state: &mut AppState) {
    install_project(state, Project::new());
}

/// Importiert einen Bildordner als neues Projekt.
pub fn import_folder(
    state: &mut AppState,
    backends: &ImportBackends,
    path: &Path,
) -> anyhow::Result<()> {
    let puppet = import::import_folder(path, backends.image_decoder.as_ref(), &state.options)?;
    install_project(state, Project::from_puppet(puppet, Some(path.to_path_buf())));
    Ok(())
}

/// Importiert ein Ebenen-Dokument als neues Projekt.
pub fn import_layered_document(
    state: &mut AppState,
    backends: &ImportBackends,
    path: &Path,
) -> anyhow::Result<()> {
    let decoder = backends
        .layered_decoder
        .as_deref()
        .ok_or_else(|| EditorError::state("kein Dekoder für Ebenen-Dokumente registriert"))?;
    let puppet = import::import_layered_document(
        path,
        decoder,
        backends.premultiply.as_ref(),
        &state.options,
    )?;
    install_project(state, Project::from_puppet(puppet, Some(path.to_path_buf())));
    Ok(())
}

/// Lädt eine native Puppet-Datei als neues Projekt.
pub fn import_puppet(
    state: &mut AppState,
    backends: &ImportBackends,
    path: &Path,
) -> anyhow::Result<()> {
    let deserializer = backends
        .puppet_deserializer
        .as_deref()
        .ok_or_else(|| EditorError::state("kein Puppet-Deserializer registriert"))?;
    let puppet = import::import_puppet_file(path, deserializer)?;
    install_project(state, Project::from_puppet(puppet, Some(path.to_path_buf())));
    Ok(())
}

/// Tauscht das aktive Projekt aus und setzt die Session zurück.
///
/// Das abgelöste Projekt wird hier freigegeben. Danach: Selektion leer,
/// Parameter gelöst, `ModelEdit`, Kamera zurückgesetzt und, falls die
/// Viewport-Größe bekannt ist, auf den neuen Root ausgerichtet.
pub fn install_project(state: &mut AppState, project: Project) {
    let node_count = project.puppet.node_count();
    if let Some(old) = state.project.replace(project) {
        let released = old.puppet.node_count();
        drop(old);
        log::info!("Vorheriges Projekt freigegeben ({} Nodes)", released);
    }

    state.selection.clear();
    state.editor.disarm();
    super::edit_mode::set_edit_mode(state, crate::app::EditMode::ModelEdit, true);
    state.view.camera = Camera2D::default();
    if state.view.has_viewport() {
        super::camera::frame_root(state);
    }

    state.status_message = Some(format!("Projekt geladen: {} Nodes", node_count));
    log::info!("Projekt installiert: {} Nodes", node_count);
}
