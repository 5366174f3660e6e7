//! Ebenen-Dokument-Import: verschachtelte Gruppen → flache Part-Liste unter dem Root.
//!
//! Die Ebenen werden von unten nach oben verarbeitet (umgekehrte
//! Speicherreihenfolge). Gruppen werden nicht als Nodes übernommen; ihr
//! Sichtbarkeits- und Blend-Zustand wirkt über einen Gruppen-Stack auf die
//! enthaltenen Raster-Ebenen, wobei nur die nächstgelegene Gruppe zählt.

use super::{LayeredDocumentDecoder, Premultiply};
use crate::core::{Node, Part, Puppet, SourceBlendMode, Texture, Transform};
use crate::shared::{EditorError, EditorOptions, EditorResult};
use glam::{Vec2, Vec3};
use image::RgbaImage;
use std::path::Path;

/// Dekodiertes Ebenen-Dokument
#[derive(Debug, Clone, Default)]
pub struct LayeredDocument {
    /// Dokument-Breite in Pixeln
    pub width: u32,
    /// Dokument-Höhe in Pixeln
    pub height: u32,
    /// Ebenen in Speicherreihenfolge (oberste zuerst)
    pub layers: Vec<DocumentLayer>,
}

/// Raster-Ebene mit Pixelblock
#[derive(Debug, Clone)]
pub struct RasterLayer {
    pub name: String,
    pub visible: bool,
    /// Deckkraft 0..=255
    pub opacity: u8,
    pub blend: SourceBlendMode,
    /// Linke obere Ecke im Dokument
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
    /// Straight-Alpha RGBA8, Länge `width * height * 4`
    pub pixels: Vec<u8>,
}

/// Kopfdaten einer Ebenen-Gruppe
#[derive(Debug, Clone)]
pub struct GroupInfo {
    pub name: String,
    pub visible: bool,
    pub blend: SourceBlendMode,
}

/// Ein Eintrag der Ebenenliste
#[derive(Debug, Clone)]
pub enum DocumentLayer {
    Raster(RasterLayer),
    GroupBegin(GroupInfo),
    GroupEnd,
}

/// Eintrag des Gruppen-Stacks (nur während des Imports)
#[derive(Debug, Clone)]
struct LayerGroupStackEntry {
    name: String,
    visible: bool,
    blend: SourceBlendMode,
}

impl LayerGroupStackEntry {
    fn from_info(info: &GroupInfo) -> Self {
        Self {
            name: info.name.clone(),
            visible: info.visible,
            blend: info.blend.clone(),
        }
    }
}

/// Dekodiert ein Ebenen-Dokument und baut daraus eine Puppet.
pub fn import_layered_document(
    path: &Path,
    decoder: &dyn LayeredDocumentDecoder,
    premultiply: &dyn Premultiply,
    options: &EditorOptions,
) -> EditorResult<Puppet> {
    let document = decoder.decode(path)?;
    build_puppet_from_document(path, document, premultiply, options)
}

/// Baut eine Puppet aus einem bereits dekodierten Dokument.
///
/// `path` dient nur der Fehlerzuordnung. Die Puppet wird vollständig
/// aufgebaut, bevor sie zurückgegeben wird; bei einem Fehler entsteht nichts.
pub fn build_puppet_from_document(
    path: &Path,
    document: LayeredDocument,
    premultiply: &dyn Premultiply,
    options: &EditorOptions,
) -> EditorResult<Puppet> {
    let mut group_heads = pair_groups(&document.layers)?;
    let doc_size = Vec2::new(document.width as f32, document.height as f32);
    let layer_count = document.layers.len();

    let mut puppet = Puppet::new();
    let root = puppet.root();
    let mut stack: Vec<LayerGroupStackEntry> = Vec::new();
    let mut raster_count = 0usize;

    for (reverse_index, layer) in document.layers.into_iter().rev().enumerate() {
        let storage_index = layer_count - 1 - reverse_index;
        match layer {
            // Rückwärts wird das Gruppen-Ende vor dem Anfang erreicht
            DocumentLayer::GroupEnd => {
                let entry = group_heads[storage_index].take().ok_or_else(|| {
                    EditorError::parse(format!("Gruppen-Ende #{storage_index} ohne Anfang"))
                })?;
                stack.push(entry);
            }
            DocumentLayer::GroupBegin(info) => {
                if stack.pop().is_none() {
                    return Err(EditorError::parse(format!(
                        "Gruppe '{}' (#{storage_index}) nicht geschlossen",
                        info.name
                    )));
                }
            }
            DocumentLayer::Raster(raster) => {
                let (mut node, texture) =
                    build_part(path, raster, stack.last(), doc_size, premultiply)?;
                let slot = puppet.add_texture(texture);
                if let Some(part) = node.as_part_mut() {
                    part.texture_slot = Some(slot);
                    part.zsort = options.zsort_for_index(reverse_index);
                }
                puppet.add_child(root, node);
                raster_count += 1;
            }
        }
    }

    puppet.rescan();
    let slots = puppet.populate_texture_slots();
    log::info!(
        "Ebenen-Dokument importiert: {} ({} Parts aus {} Ebenen, {} Textur-Slots)",
        path.display(),
        raster_count,
        layer_count,
        slots
    );
    Ok(puppet)
}

/// Paart Gruppen-Anfänge und -Enden in Speicherreihenfolge.
///
/// Liefert pro Index des Gruppen-Endes die Kopfdaten des zugehörigen Anfangs.
/// Ende ohne Anfang oder nie geschlossener Anfang → `ParseError`.
fn pair_groups(layers: &[DocumentLayer]) -> EditorResult<Vec<Option<LayerGroupStackEntry>>> {
    let mut heads = vec![None; layers.len()];
    let mut open: Vec<(usize, &GroupInfo)> = Vec::new();

    for (index, layer) in layers.iter().enumerate() {
        match layer {
            DocumentLayer::GroupBegin(info) => open.push((index, info)),
            DocumentLayer::GroupEnd => {
                let (_, info) = open.pop().ok_or_else(|| {
                    EditorError::parse(format!("Gruppen-Ende #{index} ohne Anfang"))
                })?;
                heads[index] = Some(LayerGroupStackEntry::from_info(info));
            }
            DocumentLayer::Raster(_) => {}
        }
    }

    if let Some((index, info)) = open.last() {
        return Err(EditorError::parse(format!(
            "Gruppe '{}' (#{index}) nicht geschlossen",
            info.name
        )));
    }
    Ok(heads)
}

/// Erzeugt den Part-Node einer Raster-Ebene samt Textur.
///
/// Textur-Slot und zSort setzt der Aufrufer.
fn build_part(
    path: &Path,
    raster: RasterLayer,
    group: Option<&LayerGroupStackEntry>,
    doc_size: Vec2,
    premultiply: &dyn Premultiply,
) -> EditorResult<(Node, Texture)> {
    let size = Vec2::new(raster.width as f32, raster.height as f32);
    let top_left = Vec2::new(raster.left as f32, raster.top as f32);
    let center = top_left + size * 0.5 - doc_size * 0.5;

    let mut enabled = raster.visible;
    let mut blend_mode = raster.blend.resolve();
    if let Some(group) = group {
        if !group.visible {
            log::debug!(
                "Ebene '{}' durch versteckte Gruppe '{}' deaktiviert",
                raster.name,
                group.name
            );
            enabled = false;
        }
        if !group.blend.is_pass_through() {
            blend_mode = group.blend.resolve();
        }
    }

    let name = raster.name.clone();
    let opacity = opacity_to_unit(raster.opacity);
    let texture = decode_pixels(path, raster, premultiply)?;

    let mut part = Part::new(size, None);
    part.enabled = enabled;
    part.opacity = opacity;
    part.blend_mode = blend_mode;

    let mut node = Node::new_part(name, part);
    node.transform = Transform::from_translation(Vec3::new(center.x, center.y, 0.0));
    Ok((node, texture))
}

/// Validiert den Pixelblock und wandelt ihn in eine vormultiplizierte Textur.
fn decode_pixels(
    path: &Path,
    raster: RasterLayer,
    premultiply: &dyn Premultiply,
) -> EditorResult<Texture> {
    let expected = (raster.width as usize)
        .checked_mul(raster.height as usize)
        .and_then(|n| n.checked_mul(4));
    if expected != Some(raster.pixels.len()) {
        return Err(EditorError::decode(
            path,
            format!(
                "Ebene '{}': {} Bytes für {}x{} Pixel",
                raster.name,
                raster.pixels.len(),
                raster.width,
                raster.height
            ),
        ));
    }
    if raster.width == 0 || raster.height == 0 {
        return Ok(Texture::empty());
    }

    let name = raster.name;
    let mut image = RgbaImage::from_raw(raster.width, raster.height, raster.pixels)
        .ok_or_else(|| EditorError::decode(path, format!("Ebene '{name}': Pixelblock ungültig")))?;
    premultiply.premultiply(&mut image);
    Ok(Texture::new(image))
}

/// 0..=255 → 0.0..=1.0
fn opacity_to_unit(opacity: u8) -> f32 {
    opacity as f32 / 255.0
}
