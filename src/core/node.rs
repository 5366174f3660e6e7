//! Nodes des Puppet-Baums: einfache Nodes, Drawables und Parts.

use super::{BlendMode, Transform};
use glam::Vec2;
use std::sync::atomic::{AtomicU32, Ordering};

/// Nächste freie Node-UUID (prozessweit, wird nie wiederverwendet)
static NEXT_NODE_UUID: AtomicU32 = AtomicU32::new(1);

/// Vergibt eine neue, prozessweit eindeutige Node-UUID.
pub fn next_node_uuid() -> u32 {
    NEXT_NODE_UUID.fetch_add(1, Ordering::Relaxed)
}

/// Zeichenbarer Anteil eines Nodes: lokales Rechteck um den Node-Ursprung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawable {
    /// Breite/Höhe des Rechtecks in lokalen Einheiten
    pub size: Vec2,
}

impl Drawable {
    /// Erstellt ein Drawable mit der angegebenen Größe.
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    /// Eckpunkte des lokalen Rechtecks (zentriert auf den Ursprung)
    pub fn local_corners(&self) -> [Vec2; 4] {
        let half = self.size * 0.5;
        [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ]
    }
}

/// Texturierter, überblendbarer Drawable-Node
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    /// Geometrie
    pub drawable: Drawable,
    /// Referenz auf einen Slot der Textur-Tabelle der Puppet
    pub texture_slot: Option<usize>,
    /// Deckkraft (0.0..=1.0)
    pub opacity: f32,
    /// Ob der Part gezeichnet wird
    pub enabled: bool,
    /// Blend-Modus
    pub blend_mode: BlendMode,
    /// Zeichenreihenfolge: negativer = weiter hinten
    pub zsort: f32,
}

impl Part {
    /// Erstellt einen sichtbaren, voll deckenden Part.
    pub fn new(size: Vec2, texture_slot: Option<usize>) -> Self {
        Self {
            drawable: Drawable::new(size),
            texture_slot,
            opacity: 1.0,
            enabled: true,
            blend_mode: BlendMode::Normal,
            zsort: 0.0,
        }
    }
}

/// Typ-spezifischer Anteil eines Nodes
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Reiner Gruppierungs-/Transform-Node
    Node,
    /// Drawable ohne Textur
    Drawable(Drawable),
    /// Texturierter Drawable
    Part(Part),
}

/// Ein Node im Puppet-Baum
#[derive(Debug, Clone)]
pub struct Node {
    /// Prozessweit eindeutige ID
    pub uuid: u32,
    /// Anzeigename
    pub name: String,
    /// Lokale Transformation
    pub transform: Transform,
    /// Nicht-besitzende Rückreferenz auf den Parent (nur für Traversierung)
    pub(crate) parent: Option<u32>,
    /// Besessene Kinder in Reihenfolge
    pub(crate) children: Vec<u32>,
    /// Typ-spezifische Daten
    pub kind: NodeKind,
}

impl Node {
    /// Erstellt einen Node beliebigen Typs mit neuer UUID.
    pub fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            uuid: next_node_uuid(),
            name: name.into(),
            transform: Transform::IDENTITY,
            parent: None,
            children: Vec::new(),
            kind,
        }
    }

    /// Einfacher Gruppierungs-Node
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Node)
    }

    /// Part-Node
    pub fn new_part(name: impl Into<String>, part: Part) -> Self {
        Self::with_kind(name, NodeKind::Part(part))
    }

    /// Parent-UUID (None für den Root bzw. abgehängte Nodes)
    pub fn parent(&self) -> Option<u32> {
        self.parent
    }

    /// Kinder in Reihenfolge
    pub fn children(&self) -> &[u32] {
        &self.children
    }

    /// Drawable-Anteil, falls vorhanden (auch für Parts)
    pub fn drawable(&self) -> Option<&Drawable> {
        match &self.kind {
            NodeKind::Node => None,
            NodeKind::Drawable(d) => Some(d),
            NodeKind::Part(p) => Some(&p.drawable),
        }
    }

    /// `true` für Drawables und Parts
    pub fn is_drawable(&self) -> bool {
        self.drawable().is_some()
    }

    /// Part-Daten, falls der Node ein Part ist
    pub fn as_part(&self) -> Option<&Part> {
        match &self.kind {
            NodeKind::Part(p) => Some(p),
            _ => None,
        }
    }

    /// Mutable Part-Daten
    pub fn as_part_mut(&mut self) -> Option<&mut Part> {
        match &mut self.kind {
            NodeKind::Part(p) => Some(p),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuids_are_unique() {
        let a = Node::new("a");
        let b = Node::new("b");
        assert_ne!(a.uuid, b.uuid);
    }

    #[test]
    fn part_is_drawable_plain_node_is_not() {
        let part = Node::new_part("p", Part::new(Vec2::new(4.0, 2.0), None));
        let plain = Node::new("n");
        assert!(part.is_drawable());
        assert!(part.as_part().is_some());
        assert!(!plain.is_drawable());
        assert!(plain.as_part().is_none());
    }

    #[test]
    fn local_corners_are_centered() {
        let d = Drawable::new(Vec2::new(4.0, 2.0));
        let corners = d.local_corners();
        assert_eq!(corners[0], Vec2::new(-2.0, -1.0));
        assert_eq!(corners[2], Vec2::new(2.0, 1.0));
    }
}
