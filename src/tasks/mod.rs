//! Kooperative Hintergrund-Tasks.
//!
//! Ein Task läuft als Einheit bis zum Ende (kein Abbruch), gibt zwischen
//! Arbeitsschritten über `yield_now` die Kontrolle ab und meldet Fortschritt
//! und Status an den Host. Während ein Task läuft, darf kein Import starten;
//! der Aufrufer stellt das sicher.

pub mod rebleed;

use crate::shared::EditorResult;

pub use rebleed::{BleedFilter, DilationBleed, RebleedTask};

/// Host-Schnittstelle, die ein laufender Task sieht.
pub trait TaskHost {
    /// Gibt die Kontrolle an den Scheduler des Hosts zurück.
    fn yield_now(&mut self);
    /// Meldet den Fortschritt (0.0..=1.0, monoton steigend).
    fn report_progress(&mut self, progress: f32);
    /// Meldet einen lesbaren Status.
    fn report_status(&mut self, status: &str);
}

/// Eingebauter, synchroner Task-Host.
///
/// Führt den Task direkt aus und protokolliert Fortschritt und Status.
#[derive(Debug, Default)]
pub struct TaskRunner {
    task_name: String,
    progress: f32,
    status: String,
    progress_log: Vec<f32>,
    yields: usize,
}

impl TaskRunner {
    /// Erstellt einen leeren Runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Führt eine benannte Arbeitseinheit bis zum Ende aus.
    pub fn run<T>(
        &mut self,
        name: &str,
        work: impl FnOnce(&mut dyn TaskHost) -> EditorResult<T>,
    ) -> EditorResult<T> {
        self.task_name = name.to_string();
        self.progress = 0.0;
        self.status.clear();
        self.progress_log.clear();
        self.yields = 0;

        log::info!("Task '{}' gestartet", name);
        let host: &mut dyn TaskHost = self;
        let result = work(host);
        match &result {
            Ok(_) => log::info!(
                "Task '{}' beendet ({} Schritte, Status: {})",
                name,
                self.yields,
                self.status
            ),
            Err(e) => log::warn!("Task '{}' fehlgeschlagen: {}", name, e),
        }
        result
    }

    /// Name des zuletzt gestarteten Tasks
    pub fn task_name(&self) -> &str {
        &self.task_name
    }

    /// Letzter gemeldeter Fortschritt
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Letzter gemeldeter Status
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Alle Fortschrittsmeldungen des letzten Laufs
    pub fn progress_log(&self) -> &[f32] {
        &self.progress_log
    }

    /// Anzahl der Yield-Punkte des letzten Laufs
    pub fn yields(&self) -> usize {
        self.yields
    }
}

impl TaskHost for TaskRunner {
    fn yield_now(&mut self) {
        self.yields += 1;
        log::debug!("Task '{}' yield #{}", self.task_name, self.yields);
    }

    fn report_progress(&mut self, progress: f32) {
        // Rückschritte werden ignoriert
        let progress = progress.clamp(0.0, 1.0).max(self.progress);
        self.progress = progress;
        self.progress_log.push(progress);
    }

    fn report_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}
