use crate::app::state::EditMode;
use crate::shared::EditorOptions;
use std::path::PathBuf;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neues, leeres Projekt anlegen
    NewProjectRequested,
    /// Bildordner als neue Puppet importieren
    ImportFolderRequested { path: PathBuf },
    /// Ebenen-Dokument als neue Puppet importieren
    ImportLayeredDocumentRequested { path: PathBuf },
    /// Native Puppet-Datei öffnen
    ImportPuppetRequested { path: PathBuf },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen
    CameraZoom { factor: f32 },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Frame-Tick: Kamera läuft auf ihr Ziel zu
    FrameTick,
    /// Node angeklickt (additiv = an Selektion anhängen)
    NodeClicked { uuid: u32, additive: bool },
    /// Node aus der Selektion nehmen
    NodeDeselectRequested { uuid: u32 },
    /// Alle Nodes selektieren
    SelectAllRequested,
    /// Selektion aufheben
    SelectNoneRequested,
    /// Kamera auf einen Node ausrichten (optional mit explizitem Pan-Ziel)
    FocusNodeRequested {
        uuid: Option<u32>,
        position: Option<glam::Vec2>,
    },
    /// Kamera auf den primär selektierten Node ausrichten
    FocusSelectionRequested,
    /// Edit-Modus wechseln
    EditModeChanged { mode: EditMode, unselect_first: bool },
    /// Parameter für Live-Bearbeitung scharfschalten
    ParameterArmRequested { uuid: u32 },
    /// Scharfgeschalteten Parameter lösen
    ParameterDisarmRequested,
    /// Rebleed über alle Texturen starten
    RebleedRequested,
    /// Optionen übernehmen
    OptionsChanged { options: Box<EditorOptions> },
}
