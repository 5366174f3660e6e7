//! Zentrale Konfiguration für den Puppet-Rig-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor beim Fokussieren.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor beim Fokussieren.
pub const CAMERA_ZOOM_MAX: f32 = 2.0;
/// Anteil des Viewports, den ein fokussierter Node ausfüllt.
pub const FOCUS_FILL_RATIO: f32 = 0.85;
/// Fallback-Zoom für Bounds ohne Ausdehnung.
pub const DEGENERATE_FOCUS_ZOOM: f32 = 1.0;
/// Interpolationsfaktor pro Kamera-Schritt.
pub const CAMERA_EASE_FACTOR: f32 = 0.2;

// ── Import ──────────────────────────────────────────────────────────

/// Abstand der zSort-Werte aufeinanderfolgender Ebenen/Dateien.
pub const ZSORT_STEP: f32 = 0.01;

// ── Tasks ───────────────────────────────────────────────────────────

/// Dilatations-Durchläufe des Standard-Bleed-Filters.
pub const REBLEED_PASSES: u32 = 4;

/// Verhalten beim Ordner-Import, wenn ein Eintrag kein Bild ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FolderImportPolicy {
    /// Eintrag überspringen (Warnung im Log)
    #[default]
    Skip,
    /// Gesamten Import abbrechen
    Abort,
}

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `puppet_rig_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Viewport-Anteil eines fokussierten Nodes
    pub focus_fill_ratio: f32,
    /// Zoom für Nodes ohne Ausdehnung (wird trotzdem geklemmt)
    #[serde(default = "default_degenerate_focus_zoom")]
    pub degenerate_focus_zoom: f32,
    /// Interpolationsfaktor der Kamera Richtung Ziel
    #[serde(default = "default_camera_ease_factor")]
    pub camera_ease_factor: f32,

    // ── Import ──────────────────────────────────────────────────
    /// Abstand der zSort-Werte (1/100)
    pub zsort_step: f32,
    /// Umgang mit Nicht-Bild-Einträgen beim Ordner-Import
    #[serde(default)]
    pub folder_import_policy: FolderImportPolicy,

    // ── Tasks ───────────────────────────────────────────────────
    /// Dilatations-Durchläufe beim Rebleed
    #[serde(default = "default_rebleed_passes")]
    pub rebleed_passes: u32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            focus_fill_ratio: FOCUS_FILL_RATIO,
            degenerate_focus_zoom: DEGENERATE_FOCUS_ZOOM,
            camera_ease_factor: CAMERA_EASE_FACTOR,

            zsort_step: ZSORT_STEP,
            folder_import_policy: FolderImportPolicy::Skip,

            rebleed_passes: REBLEED_PASSES,
        }
    }
}

/// Serde-Default für `degenerate_focus_zoom` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_degenerate_focus_zoom() -> f32 {
    DEGENERATE_FOCUS_ZOOM
}

fn default_camera_ease_factor() -> f32 {
    CAMERA_EASE_FACTOR
}

fn default_rebleed_passes() -> u32 {
    REBLEED_PASSES
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("puppet_rig_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("puppet_rig_editor.toml")
    }

    /// zSort für die Position `index` in Verarbeitungsreihenfolge.
    ///
    /// `-(index * zsort_step)`: spätere Einträge liegen weiter hinten.
    pub fn zsort_for_index(&self, index: usize) -> f32 {
        -(index as f32 * self.zsort_step)
    }
}
