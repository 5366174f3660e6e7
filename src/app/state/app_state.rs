use crate::app::CommandLog;
use crate::core::{Project, Puppet};
use crate::shared::EditorOptions;
use crate::tasks::TaskRunner;

use super::{EditorState, SelectionState, ViewState};

/// Hauptzustand der Anwendung (explizites Session-Objekt)
#[derive(Debug)]
pub struct AppState {
    /// Aktives Projekt (None = noch nichts angelegt oder importiert)
    pub project: Option<Project>,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Edit-Modus und scharfgeschalteter Parameter
    pub editor: EditorState,
    /// Host für kooperative Tasks (Rebleed)
    pub tasks: TaskRunner,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Letzte Statusmeldung für den Host
    pub status_message: Option<String>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            project: None,
            view: ViewState::new(),
            selection: SelectionState::new(),
            editor: EditorState::new(),
            tasks: TaskRunner::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            status_message: None,
        }
    }

    /// Puppet des aktiven Projekts
    pub fn puppet(&self) -> Option<&Puppet> {
        self.project.as_ref().map(|p| &p.puppet)
    }

    /// Mutable Puppet des aktiven Projekts
    pub fn puppet_mut(&mut self) -> Option<&mut Puppet> {
        self.project.as_mut().map(|p| &mut p.puppet)
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.puppet().map_or(0, Puppet::node_count)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
