//! Application State: zentrale Datenhaltung der Editor-Session.

mod app_state;
mod editor;
mod selection;
mod view;

pub use app_state::AppState;
pub use editor::{EditMode, EditorState};
pub use selection::SelectionState;
pub use view::ViewState;
