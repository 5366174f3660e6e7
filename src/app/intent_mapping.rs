//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{use_cases, AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewProjectRequested => vec![AppCommand::NewProject],
        AppIntent::ImportFolderRequested { path } => vec![AppCommand::ImportFolder { path }],
        AppIntent::ImportLayeredDocumentRequested { path } => {
            vec![AppCommand::ImportLayeredDocument { path }]
        }
        AppIntent::ImportPuppetRequested { path } => vec![AppCommand::ImportPuppet { path }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { factor } => vec![AppCommand::ZoomCamera { factor }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::FrameTick => vec![AppCommand::AdvanceCamera],
        AppIntent::NodeClicked { uuid, additive } => {
            if additive {
                vec![AppCommand::AddToSelection { uuid }]
            } else {
                vec![AppCommand::SelectNode { uuid }]
            }
        }
        AppIntent::NodeDeselectRequested { uuid } => {
            vec![AppCommand::RemoveFromSelection { uuid }]
        }
        AppIntent::SelectAllRequested => vec![AppCommand::SelectAll],
        AppIntent::SelectNoneRequested => vec![AppCommand::SelectNone],
        AppIntent::FocusNodeRequested { uuid, position } => {
            vec![AppCommand::FocusCamera { uuid, position }]
        }
        AppIntent::FocusSelectionRequested => vec![AppCommand::FocusCamera {
            uuid: use_cases::selection::primary_selected(state),
            position: None,
        }],
        AppIntent::EditModeChanged {
            mode,
            unselect_first,
        } => vec![AppCommand::SetEditMode {
            mode,
            unselect_first,
        }],
        AppIntent::ParameterArmRequested { uuid } => vec![AppCommand::ArmParameter { uuid }],
        AppIntent::ParameterDisarmRequested => vec![AppCommand::DisarmParameter],
        AppIntent::RebleedRequested => vec![AppCommand::RunRebleed],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
