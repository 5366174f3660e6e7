use crate::core::Parameter;
use std::sync::{Arc, Weak};

/// Edit-Modus des Editors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Modell bearbeiten (Standard)
    #[default]
    ModelEdit,
    /// Vertices eines Drawables bearbeiten
    VertexEdit,
    /// Animation bearbeiten
    AnimEdit,
    /// Modell testen
    ModelTest,
}

/// Zustand von Edit-Modus und scharfgeschaltetem Parameter
#[derive(Debug, Clone, Default)]
pub struct EditorState {
    /// Aktiver Edit-Modus
    pub mode: EditMode,
    /// Drawables zum Zeitpunkt des letzten Moduswechsels (nur außerhalb von ModelEdit).
    ///
    /// Wird bei späteren Baum-Änderungen nicht aktualisiert.
    drawable_cache: Vec<u32>,
    /// Nicht-besitzende Referenz auf den scharfgeschalteten Parameter
    armed_parameter: Option<Weak<Parameter>>,
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand (ModelEdit, nichts scharf).
    pub fn new() -> Self {
        Self::default()
    }

    /// Gecachte Drawable-Liste
    pub fn drawable_cache(&self) -> &[u32] {
        &self.drawable_cache
    }

    pub(crate) fn set_drawable_cache(&mut self, drawables: Vec<u32>) {
        self.drawable_cache = drawables;
    }

    /// Scharfgeschalteter Parameter, solange die Puppet ihn noch besitzt
    pub fn armed_parameter(&self) -> Option<Arc<Parameter>> {
        self.armed_parameter.as_ref().and_then(Weak::upgrade)
    }

    pub fn arm(&mut self, parameter: &Arc<Parameter>) {
        self.armed_parameter = Some(Arc::downgrade(parameter));
    }

    pub fn disarm(&mut self) {
        self.armed_parameter = None;
    }
}
