use crate::app::state::EditMode;
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Leeres Projekt installieren
    NewProject,
    /// Ordner-Import
    ImportFolder { path: PathBuf },
    /// Ebenen-Dokument-Import
    ImportLayeredDocument { path: PathBuf },
    /// Native Puppet-Datei laden
    ImportPuppet { path: PathBuf },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (geklemmt)
    ZoomCamera { factor: f32 },
    /// Kamera zurücksetzen
    ResetCamera,
    /// Kamera einen Schritt Richtung Ziel bewegen
    AdvanceCamera,
    /// Selektion leeren
    SelectNone,
    /// Selektion durch einen Node ersetzen
    SelectNode { uuid: u32 },
    /// Node an die Selektion anhängen
    AddToSelection { uuid: u32 },
    /// Alle Vorkommen eines Nodes aus der Selektion entfernen
    RemoveFromSelection { uuid: u32 },
    /// Alle Nodes außer dem Root selektieren
    SelectAll,
    /// Kamera-Ziel auf einen Node setzen
    FocusCamera {
        uuid: Option<u32>,
        position: Option<glam::Vec2>,
    },
    /// Edit-Modus setzen
    SetEditMode { mode: EditMode, unselect_first: bool },
    /// Parameter scharfschalten
    ArmParameter { uuid: u32 },
    /// Parameter lösen
    DisarmParameter,
    /// Rebleed-Task ausführen
    RunRebleed,
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
}
