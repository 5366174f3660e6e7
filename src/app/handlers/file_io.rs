//! Handler für Projekt-Anlage und Importe.

use crate::app::use_cases;
use crate::app::AppState;
use crate::import::ImportBackends;
use std::path::Path;

/// Legt ein leeres Projekt an.
pub fn new_project(state: &mut AppState) {
    use_cases::file_io::new_project(state);
}

/// Importiert einen Bildordner.
pub fn import_folder(
    state: &mut AppState,
    backends: &ImportBackends,
    path: &Path,
) -> anyhow::Result<()> {
    use_cases::file_io::import_folder(state, backends, path)
}

/// Importiert ein Ebenen-Dokument.
pub fn import_layered_document(
    state: &mut AppState,
    backends: &ImportBackends,
    path: &Path,
) -> anyhow::Result<()> {
    use_cases::file_io::import_layered_document(state, backends, path)
}

/// Lädt eine native Puppet-Datei.
pub fn import_puppet(
    state: &mut AppState,
    backends: &ImportBackends,
    path: &Path,
) -> anyhow::Result<()> {
    use_cases::file_io::import_puppet(state, backends, path)
}
