/// Auswahlbezogener Anwendungszustand
///
/// Geordnete Liste von Node-UUIDs. Duplikate sind erlaubt; Einträge können
/// veralten, wenn der Node entfernt wird (Prüfung gegen die Puppet erfolgt in
/// den Selektions-Use-Cases).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    entries: Vec<u32>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alle Einträge in Selektionsreihenfolge
    pub fn entries(&self) -> &[u32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Leert die Selektion.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Ersetzt die Selektion durch genau einen Node.
    pub fn set_single(&mut self, uuid: u32) {
        self.entries.clear();
        self.entries.push(uuid);
    }

    /// Hängt einen Node an (ohne Deduplizierung).
    pub fn push(&mut self, uuid: u32) {
        self.entries.push(uuid);
    }

    /// Entfernt alle Einträge mit dieser UUID; gibt die Anzahl zurück.
    pub fn remove_all(&mut self, uuid: u32) -> usize {
        let before = self.entries.len();
        self.entries.retain(|&id| id != uuid);
        before - self.entries.len()
    }

    /// Ersetzt die Selektion durch eine Liste.
    pub fn replace(&mut self, entries: Vec<u32>) {
        self.entries = entries;
    }
}
