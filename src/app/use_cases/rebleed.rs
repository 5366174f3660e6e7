//! Use-Case: Rebleed über alle Texturen der aktiven Puppet.

use crate::app::AppState;
use crate::shared::{EditorError, EditorResult};
use crate::tasks::RebleedTask;

/// Führt den Rebleed-Task auf dem Session-Task-Host aus.
///
/// Gibt die Anzahl der bearbeiteten Texturen zurück. Ohne aktives Projekt
/// → `StateError`.
pub fn run_rebleed(state: &mut AppState) -> EditorResult<usize> {
    let project = state
        .project
        .as_mut()
        .ok_or_else(|| EditorError::state("Rebleed benötigt ein aktives Projekt"))?;
    let task = RebleedTask::with_passes(state.options.rebleed_passes);

    let processed = state
        .tasks
        .run(RebleedTask::NAME, |host| Ok(task.run(&mut project.puppet, host)))?;
    state.status_message = Some(format!("Rebleed: {} Texturen bearbeitet", processed));
    Ok(processed)
}
