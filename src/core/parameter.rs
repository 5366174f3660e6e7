//! Animations-Parameter (nur Identität; Auswertung liegt außerhalb des Kerns).

use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_PARAMETER_UUID: AtomicU32 = AtomicU32::new(1);

/// Animations-Parameter einer Puppet
#[derive(Debug)]
pub struct Parameter {
    /// Prozessweit eindeutige ID
    pub uuid: u32,
    /// Anzeigename
    pub name: String,
}

impl Parameter {
    /// Erstellt einen Parameter mit neuer UUID.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            uuid: NEXT_PARAMETER_UUID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
        }
    }
}
