//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen und die Fehler-Taxonomie, die von
//! `import`, `tasks` und `app` gemeinsam genutzt werden.

pub mod error;
pub mod options;

pub use error::{EditorError, EditorResult};
pub use options::{EditorOptions, FolderImportPolicy};
