//! Die Puppet: Node-Baum, Textur-Slot-Tabelle und Parameter.

use super::{Bounds, Node, Parameter, Texture};
use glam::{Affine2, Vec2};
use indexmap::IndexMap;
use std::sync::Arc;

/// Ein Puppet-Rig
///
/// Der Baum wird flach nach UUID gespeichert; jeder Node besitzt seine Kinder
/// (Liste von UUIDs), die Parent-Referenz dient nur der Traversierung.
#[derive(Debug, Clone)]
pub struct Puppet {
    /// Alle Nodes, indexiert nach UUID (Einfügereihenfolge bleibt erhalten)
    nodes: IndexMap<u32, Node>,
    /// UUID des Root-Nodes
    root: u32,
    /// Deduplizierte Textur-Slots (Parts referenzieren per Index)
    textures: Vec<Arc<Texture>>,
    /// Parameter der Puppet (die Session hält nur schwache Referenzen)
    parameters: Vec<Arc<Parameter>>,
    /// Parts in Zeichenreihenfolge (hinten zuerst), aktualisiert durch `rescan()`
    paint_order: Vec<u32>,
}

impl Puppet {
    /// Erstellt eine leere Puppet mit Root-Node.
    pub fn new() -> Self {
        let root = Node::new("Root");
        let root_uuid = root.uuid;
        let mut nodes = IndexMap::new();
        nodes.insert(root_uuid, root);
        Self {
            nodes,
            root: root_uuid,
            textures: Vec::new(),
            parameters: Vec::new(),
            paint_order: Vec::new(),
        }
    }

    /// UUID des Root-Nodes
    pub fn root(&self) -> u32 {
        self.root
    }

    /// Gibt einen Node zurück (None, wenn nicht (mehr) im Baum)
    pub fn node(&self, uuid: u32) -> Option<&Node> {
        self.nodes.get(&uuid)
    }

    /// Mutable Node-Referenz
    pub fn node_mut(&mut self, uuid: u32) -> Option<&mut Node> {
        self.nodes.get_mut(&uuid)
    }

    /// Prüft, ob ein Node mit dieser UUID im Baum lebt.
    pub fn contains(&self, uuid: u32) -> bool {
        self.nodes.contains_key(&uuid)
    }

    /// Anzahl aller Nodes inklusive Root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Hängt einen neuen Node als letztes Kind an `parent` an.
    ///
    /// Gibt `None` zurück, wenn der Parent fehlt oder die UUID bereits vergeben ist.
    pub fn add_child(&mut self, parent: u32, mut node: Node) -> Option<u32> {
        if !self.nodes.contains_key(&parent) || self.nodes.contains_key(&node.uuid) {
            return None;
        }
        let uuid = node.uuid;
        node.parent = Some(parent);
        node.children.clear();
        self.nodes.insert(uuid, node);
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(uuid);
        }
        Some(uuid)
    }

    /// Entfernt einen Node samt Teilbaum. Der Root kann nicht entfernt werden.
    ///
    /// Gibt die Anzahl freigegebener Nodes zurück.
    pub fn remove_node(&mut self, uuid: u32) -> Option<usize> {
        if uuid == self.root {
            return None;
        }
        let parent = self.nodes.get(&uuid)?.parent;
        if let Some(p) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            p.children.retain(|&c| c != uuid);
        }

        let mut removed = 0;
        let mut stack = vec![uuid];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.shift_remove(&current) {
                stack.extend(node.children);
                removed += 1;
            }
        }
        self.paint_order.retain(|id| self.nodes.contains_key(id));
        Some(removed)
    }

    /// Hängt einen Node unter einen neuen Parent um (ans Ende der Kinderliste).
    ///
    /// Verweigert Zyklen (neuer Parent liegt im eigenen Teilbaum) und den Root.
    pub fn reparent(&mut self, uuid: u32, new_parent: u32) -> bool {
        if uuid == self.root || uuid == new_parent || !self.nodes.contains_key(&new_parent) {
            return false;
        }
        let Some(old_parent) = self.nodes.get(&uuid).and_then(|n| n.parent) else {
            return false;
        };
        if self.descendants(uuid).contains(&new_parent) {
            return false;
        }

        if let Some(p) = self.nodes.get_mut(&old_parent) {
            p.children.retain(|&c| c != uuid);
        }
        if let Some(p) = self.nodes.get_mut(&new_parent) {
            p.children.push(uuid);
        }
        if let Some(n) = self.nodes.get_mut(&uuid) {
            n.parent = Some(new_parent);
        }
        true
    }

    /// Sucht den ersten Node (Pre-Order) mit dem angegebenen Namen.
    pub fn find_by_name(&self, name: &str) -> Option<u32> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|id| self.nodes.get(id).is_some_and(|n| n.name == name))
    }

    /// Alle Nachfahren eines Nodes in Pre-Order (Node selbst ausgeschlossen).
    ///
    /// Iterativ mit explizitem Stack.
    pub fn descendants(&self, uuid: u32) -> Vec<u32> {
        let mut result = Vec::new();
        let Some(start) = self.nodes.get(&uuid) else {
            return result;
        };
        let mut stack: Vec<u32> = start.children.iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            let Some(node) = self.nodes.get(&current) else {
                continue;
            };
            result.push(current);
            stack.extend(node.children.iter().rev().copied());
        }
        result
    }

    /// Alle Drawable-Nodes des Baums in Pre-Order.
    pub fn drawables(&self) -> Vec<u32> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .filter(|id| self.nodes.get(id).is_some_and(Node::is_drawable))
            .collect()
    }

    /// Alle Part-UUIDs in Pre-Order.
    pub fn parts(&self) -> Vec<u32> {
        self.descendants(self.root)
            .into_iter()
            .filter(|id| self.nodes.get(id).is_some_and(|n| n.as_part().is_some()))
            .collect()
    }

    /// Welt-Transformation eines Nodes (Verkettung entlang der Parent-Kette).
    pub fn world_transform(&self, uuid: u32) -> Option<Affine2> {
        let mut node = self.nodes.get(&uuid)?;
        let mut world = node.transform.to_affine();
        while let Some(parent) = node.parent.and_then(|p| self.nodes.get(&p)) {
            world = parent.transform.to_affine() * world;
            node = parent;
        }
        Some(world)
    }

    /// Welt-Position (Ursprung) eines Nodes
    pub fn world_position(&self, uuid: u32) -> Option<Vec2> {
        self.world_transform(uuid).map(|t| t.translation)
    }

    /// Bounds eines Drawables im Puppet-Raum (None für Nicht-Drawables).
    pub fn drawable_bounds(&self, uuid: u32) -> Option<Bounds> {
        let drawable = self.nodes.get(&uuid)?.drawable()?;
        let world = self.world_transform(uuid)?;
        Bounds::from_points(
            drawable
                .local_corners()
                .into_iter()
                .map(|c| world.transform_point2(c)),
        )
    }

    /// Kombinierte Bounds: eigene Bounds für Drawables, sonst die Position
    /// des Nodes vereinigt mit den Bounds aller Drawable-Nachfahren.
    pub fn combined_bounds(&self, uuid: u32) -> Option<Bounds> {
        if let Some(bounds) = self.drawable_bounds(uuid) {
            return Some(bounds);
        }
        let origin = self.world_position(uuid)?;
        let bounds = self
            .descendants(uuid)
            .into_iter()
            .filter_map(|id| self.drawable_bounds(id))
            .fold(Bounds::from_point(origin), Bounds::union);
        Some(bounds)
    }

    /// Baut abgeleitete Listen neu auf (Zeichenreihenfolge der Parts).
    pub fn rescan(&mut self) {
        let mut order: Vec<(u32, f32)> = self
            .parts()
            .into_iter()
            .filter_map(|id| Some((id, self.nodes.get(&id)?.as_part()?.zsort)))
            .collect();
        // Stabil: gleiche zSort-Werte behalten die Baumreihenfolge
        order.sort_by(|a, b| a.1.total_cmp(&b.1));
        self.paint_order = order.into_iter().map(|(id, _)| id).collect();
    }

    /// Parts in Zeichenreihenfolge (hinten zuerst), Stand des letzten `rescan()`
    pub fn paint_order(&self) -> &[u32] {
        &self.paint_order
    }

    /// Legt eine Textur in einem neuen Slot ab (ohne Deduplizierung).
    pub fn add_texture(&mut self, texture: Texture) -> usize {
        self.textures.push(Arc::new(texture));
        self.textures.len() - 1
    }

    /// Baut die Textur-Slot-Tabelle aus den Texturen der Parts neu auf.
    ///
    /// Inhaltsgleiche Texturen teilen sich einen Slot, unreferenzierte Slots
    /// entfallen. Gibt die Anzahl der verbleibenden Slots zurück.
    pub fn populate_texture_slots(&mut self) -> usize {
        let old = std::mem::take(&mut self.textures);
        // Hash → Slots mit diesem Hash (Kollisionen werden per Pixelvergleich getrennt)
        let mut by_content: IndexMap<u64, Vec<usize>> = IndexMap::new();
        let mut slots: Vec<Arc<Texture>> = Vec::new();

        for id in self.parts() {
            let Some(part) = self.nodes.get_mut(&id).and_then(Node::as_part_mut) else {
                continue;
            };
            let Some(old_slot) = part.texture_slot else {
                continue;
            };
            let Some(texture) = old.get(old_slot) else {
                log::warn!("Part {} referenziert ungültigen Textur-Slot {}", id, old_slot);
                part.texture_slot = None;
                continue;
            };
            let candidates = by_content.entry(texture.content_hash()).or_default();
            let existing = candidates
                .iter()
                .copied()
                .find(|&slot| slots[slot].same_pixels(texture));
            let new_slot = match existing {
                Some(slot) => slot,
                None => {
                    slots.push(Arc::clone(texture));
                    candidates.push(slots.len() - 1);
                    slots.len() - 1
                }
            };
            part.texture_slot = Some(new_slot);
        }

        self.textures = slots;
        self.textures.len()
    }

    /// Textur-Slot-Tabelle
    pub fn textures(&self) -> &[Arc<Texture>] {
        &self.textures
    }

    /// Textur eines Slots
    pub fn texture(&self, slot: usize) -> Option<&Arc<Texture>> {
        self.textures.get(slot)
    }

    /// Mutable Slot-Tabelle (Copy-on-Write über `Arc::make_mut`)
    pub(crate) fn textures_mut(&mut self) -> &mut [Arc<Texture>] {
        &mut self.textures
    }

    /// Legt einen neuen Parameter an.
    pub fn add_parameter(&mut self, name: impl Into<String>) -> Arc<Parameter> {
        let param = Arc::new(Parameter::new(name));
        self.parameters.push(Arc::clone(&param));
        param
    }

    /// Entfernt einen Parameter; schwache Referenzen darauf werden ungültig.
    pub fn remove_parameter(&mut self, uuid: u32) -> bool {
        let before = self.parameters.len();
        self.parameters.retain(|p| p.uuid != uuid);
        self.parameters.len() != before
    }

    /// Sucht einen Parameter per UUID.
    pub fn find_parameter(&self, uuid: u32) -> Option<&Arc<Parameter>> {
        self.parameters.iter().find(|p| p.uuid == uuid)
    }

    /// Alle Parameter
    pub fn parameters(&self) -> &[Arc<Parameter>] {
        &self.parameters
    }
}

impl Default for Puppet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
