//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::import::ImportBackends;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
///
/// Hält die Import-Kollaborateure (Dekoder, Deserializer, Premultiply).
#[derive(Default)]
pub struct AppController {
    backends: ImportBackends,
}

impl AppController {
    /// Erstellt einen Controller mit den Standard-Kollaborateuren.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt einen Controller mit eigenen Import-Kollaborateuren.
    pub fn with_backends(backends: ImportBackends) -> Self {
        Self { backends }
    }

    /// Import-Kollaborateure
    pub fn backends(&self) -> &ImportBackends {
        &self.backends
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Projekt & Import ===
            AppCommand::NewProject => handlers::file_io::new_project(state),
            AppCommand::ImportFolder { path } => {
                handlers::file_io::import_folder(state, &self.backends, &path)?
            }
            AppCommand::ImportLayeredDocument { path } => {
                handlers::file_io::import_layered_document(state, &self.backends, &path)?
            }
            AppCommand::ImportPuppet { path } => {
                handlers::file_io::import_puppet(state, &self.backends, &path)?
            }

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::AdvanceCamera => handlers::view::advance_camera(state),
            AppCommand::FocusCamera { uuid, position } => {
                handlers::view::focus(state, uuid, position)
            }

            // === Selektion ===
            AppCommand::SelectNone => handlers::selection::clear(state),
            AppCommand::SelectNode { uuid } => handlers::selection::select(state, uuid),
            AppCommand::AddToSelection { uuid } => handlers::selection::add(state, uuid),
            AppCommand::RemoveFromSelection { uuid } => handlers::selection::remove(state, uuid),
            AppCommand::SelectAll => handlers::selection::select_all(state),

            // === Edit-Modus, Parameter, Tasks ===
            AppCommand::SetEditMode {
                mode,
                unselect_first,
            } => handlers::editing::set_edit_mode(state, mode, unselect_first),
            AppCommand::ArmParameter { uuid } => handlers::editing::arm_parameter(state, uuid),
            AppCommand::DisarmParameter => handlers::editing::disarm_parameter(state),
            AppCommand::RunRebleed => handlers::editing::rebleed(state)?,
            AppCommand::ApplyOptions { options } => {
                handlers::editing::apply_options(state, *options)
            }
        }

        Ok(())
    }
}
