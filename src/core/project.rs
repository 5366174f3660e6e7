//! Projekt: Besitzer der aktiven Puppet.

use super::{Puppet, Texture};
use std::path::PathBuf;
use std::sync::Arc;

/// Ein Editor-Projekt
#[derive(Debug, Clone, Default)]
pub struct Project {
    /// Die bearbeitete Puppet
    pub puppet: Puppet,
    /// Quelle, aus der das Projekt importiert wurde (None = neues Projekt)
    pub source_path: Option<PathBuf>,
}

impl Project {
    /// Neues, leeres Projekt
    pub fn new() -> Self {
        Self::default()
    }

    /// Projekt um eine fertig aufgebaute Puppet
    pub fn from_puppet(puppet: Puppet, source_path: Option<PathBuf>) -> Self {
        Self {
            puppet,
            source_path,
        }
    }

    /// Texturen des Projekts in Slot-Reihenfolge
    pub fn textures(&self) -> &[Arc<Texture>] {
        self.puppet.textures()
    }
}
