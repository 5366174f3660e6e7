//! Puppet-Rig-Editor (headless).
//!
//! Importiert einen Bildordner, richtet die Kamera aus, führt optional einen
//! Rebleed aus und protokolliert eine Zusammenfassung.
//!
//! Aufruf: `Puppet-Rig-Editor <ordner> [--rebleed]`

use puppet_rig_editor::{AppController, AppIntent, AppState, EditorOptions};
use std::path::PathBuf;

const USAGE: &str = "Aufruf: Puppet-Rig-Editor <ordner> [--rebleed]";

/// Standard-Viewport für das Framing ohne Fenster
const HEADLESS_VIEWPORT: [f32; 2] = [1280.0, 720.0];
/// Obergrenze der Kamera-Schritte (bei Ease-Faktor 0 wird das Ziel nie erreicht)
const MAX_CAMERA_STEPS: usize = 1000;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Puppet-Rig-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let Some(source) = args.next().map(PathBuf::from) else {
        anyhow::bail!(USAGE);
    };
    let rebleed = args.any(|a| a == "--rebleed");

    // Optionen aus TOML laden (oder Standardwerte)
    let mut state = AppState::new();
    state.options = EditorOptions::load_from_file(&EditorOptions::config_path());
    let mut controller = AppController::new();

    controller.handle_intent(
        &mut state,
        AppIntent::ViewportResized {
            size: HEADLESS_VIEWPORT,
        },
    )?;

    controller.handle_intent(&mut state, import_intent(source)?)?;

    if rebleed {
        controller.handle_intent(&mut state, AppIntent::RebleedRequested)?;
    }

    // Kamera bis zum Ziel nachführen
    for _ in 0..MAX_CAMERA_STEPS {
        if !state.view.camera.advance(state.options.camera_ease_factor) {
            break;
        }
    }

    let parts = state.puppet().map_or(0, |p| p.parts().len());
    let textures = state.puppet().map_or(0, |p| p.textures().len());
    log::info!(
        "Fertig: {} Nodes, {} Parts, {} Textur-Slots, Kamera zoom {:.3} pan ({:.1}, {:.1})",
        state.node_count(),
        parts,
        textures,
        state.view.camera.zoom,
        state.view.camera.position.x,
        state.view.camera.position.y
    );
    Ok(())
}

/// Import-Intent für das Kommandozeilen-Argument.
///
/// Headless gibt es nur den Ordner-Import; Dateien brauchen einen
/// registrierten Dekoder bzw. Deserializer und werden abgelehnt.
fn import_intent(source: PathBuf) -> anyhow::Result<AppIntent> {
    if !source.is_dir() {
        anyhow::bail!("'{}' ist kein Ordner. {}", source.display(), USAGE);
    }
    Ok(AppIntent::ImportFolderRequested { path: source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_argument_maps_to_folder_import() {
        let dir = std::env::temp_dir();
        let intent = import_intent(dir.clone()).expect("Ordner sollte akzeptiert werden");
        assert!(matches!(
            intent,
            AppIntent::ImportFolderRequested { path } if path == dir
        ));
    }

    #[test]
    fn file_argument_is_rejected_with_usage() {
        let file = std::env::temp_dir().join(format!(
            "puppet_rig_editor_main_arg_{}.inp",
            std::process::id()
        ));
        std::fs::write(&file, b"x").expect("Datei sollte schreibbar sein");

        let err = import_intent(file.clone()).expect_err("Datei sollte abgelehnt werden");
        let _ = std::fs::remove_file(&file);

        assert!(err.to_string().contains(USAGE));
    }
}
