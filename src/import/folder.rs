//! Ordner-Import: jede Bilddatei eines Verzeichnisses wird ein Part unter dem Root.

use super::ImageDecoder;
use crate::core::{Node, Part, Puppet, Texture};
use crate::shared::{EditorError, EditorOptions, EditorResult, FolderImportPolicy};
use glam::Vec2;
use std::path::{Path, PathBuf};

/// Importiert alle direkten Dateien eines Verzeichnisses (nicht rekursiv).
///
/// # Ablauf
/// 1. Einträge lesen, Unterverzeichnisse verwerfen, nach Dateiname sortieren
/// 2. Jede Datei dekodieren; Erfolg → Part mit `zSort = -(index * zsort_step)`
/// 3. Nicht dekodierbare Einträge je nach `folder_import_policy` überspringen oder abbrechen
/// 4. `rescan()` und Textur-Slots deduplizieren
pub fn import_folder(
    dir: &Path,
    decoder: &dyn ImageDecoder,
    options: &EditorOptions,
) -> EditorResult<Puppet> {
    let files = list_files_sorted(dir)?;
    let mut puppet = Puppet::new();
    let root = puppet.root();
    let mut index = 0usize;

    for path in &files {
        let image = match decoder.decode(path) {
            Ok(image) => image,
            Err(e) => match options.folder_import_policy {
                FolderImportPolicy::Skip => {
                    log::warn!("Überspringe '{}': {}", path.display(), e);
                    continue;
                }
                FolderImportPolicy::Abort => return Err(e),
            },
        };

        let size = Vec2::new(image.width() as f32, image.height() as f32);
        let slot = puppet.add_texture(Texture::new(image));
        let mut part = Part::new(size, Some(slot));
        part.zsort = options.zsort_for_index(index);
        puppet.add_child(root, Node::new_part(part_name(path), part));
        index += 1;
    }

    puppet.rescan();
    let slots = puppet.populate_texture_slots();
    log::info!(
        "Ordner importiert: {} ({} Parts aus {} Dateien, {} Textur-Slots)",
        dir.display(),
        index,
        files.len(),
        slots
    );
    Ok(puppet)
}

/// Direkte Dateien eines Verzeichnisses, sortiert nach Dateiname.
fn list_files_sorted(dir: &Path) -> EditorResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| EditorError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EditorError::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            log::debug!("Unterverzeichnis ignoriert: {}", path.display());
            continue;
        }
        files.push(path);
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Dateiname ohne Endung
fn part_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
