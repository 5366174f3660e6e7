//! Direkter Import einer Puppet im nativen Format.

use super::PuppetDeserializer;
use crate::core::Puppet;
use crate::shared::EditorResult;
use std::path::Path;

/// Liest eine native Puppet-Datei und baut die abgeleiteten Listen neu auf.
pub fn import_puppet_file(
    path: &Path,
    deserializer: &dyn PuppetDeserializer,
) -> EditorResult<Puppet> {
    let mut puppet = deserializer.deserialize(path)?;
    puppet.rescan();
    log::info!(
        "Puppet geladen: {} ({} Nodes, {} Textur-Slots)",
        path.display(),
        puppet.node_count(),
        puppet.textures().len()
    );
    Ok(puppet)
}
