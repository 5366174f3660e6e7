//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod edit_mode;
pub mod file_io;
pub mod parameter;
pub mod rebleed;
pub mod selection;
