//! Puppet-Rig-Editor Library.
//! Editor-Kern als Library exportiert für Tests und Wiederverwendung:
//! Import von Bildordnern und Ebenen-Dokumenten, Selektion, Edit-Modi, Kamera.

pub mod app;
pub mod core;
pub mod import;
pub mod shared;
pub mod tasks;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditMode, ViewState};
pub use core::{
    BlendMode, Bounds, Camera2D, Node, NodeKind, Part, Project, Puppet, SourceBlendMode,
    Texture, Viewport,
};
pub use import::ImportBackends;
pub use shared::{EditorError, EditorOptions, FolderImportPolicy};
pub use tasks::{TaskHost, TaskRunner};
