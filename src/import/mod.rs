//! Import-Pipelines: Bildordner, Ebenen-Dokumente und native Puppet-Dateien.
//!
//! Alle Pipelines bauen eine vollständige `Puppet` auf, bevor der Aufrufer sie
//! in die Session übernimmt. Dekodierung läuft über schmale Kollaborateur-Traits,
//! damit Codecs und Dateiformate austauschbar bleiben.

pub mod folder;
pub mod layered;
pub mod puppet;

use crate::core::Puppet;
use crate::shared::{EditorError, EditorResult};
use image::{ImageReader, RgbaImage};
use std::io::BufReader;
use std::path::Path;

pub use folder::import_folder;
pub use layered::{
    build_puppet_from_document, import_layered_document, DocumentLayer, GroupInfo,
    LayeredDocument, RasterLayer,
};
pub use puppet::import_puppet_file;

/// Dekodiert eine Bilddatei zu RGBA8-Pixeln.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> EditorResult<RgbaImage>;
}

/// Dekodiert ein Ebenen-Dokument (Ebenen in Speicherreihenfolge, oben zuerst).
pub trait LayeredDocumentDecoder {
    fn decode(&self, path: &Path) -> EditorResult<LayeredDocument>;
}

/// Liest eine Puppet im nativen Format.
pub trait PuppetDeserializer {
    fn deserialize(&self, path: &Path) -> EditorResult<Puppet>;
}

/// Wandelt einen Pixelpuffer in-place in vormultipliziertes Alpha um.
pub trait Premultiply {
    fn premultiply(&self, image: &mut RgbaImage);
}

/// Standard-Bilddekoder über das `image`-Crate (Format-Erkennung per Inhalt).
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateDecoder;

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, path: &Path) -> EditorResult<RgbaImage> {
        let file = std::fs::File::open(path).map_err(|e| EditorError::io(path, e))?;
        // Dateiendungen sind unzuverlässig (z.B. .dds mit PNG-Inhalt),
        // daher Erkennung über die Magic Bytes
        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(|e| EditorError::io(path, e))?;
        if reader.format().is_none() {
            return Err(EditorError::decode(path, "unbekanntes Bildformat"));
        }
        let image = reader
            .decode()
            .map_err(|e| EditorError::decode(path, e.to_string()))?;
        Ok(image.to_rgba8())
    }
}

/// Straight → Premultiplied Alpha.
#[derive(Debug, Default, Clone, Copy)]
pub struct PremultiplyAlpha;

impl Premultiply for PremultiplyAlpha {
    fn premultiply(&self, image: &mut RgbaImage) {
        premultiply_alpha(image);
    }
}

/// Multipliziert die Farbkanäle jedes Pixels mit seinem Alpha (gerundet).
pub fn premultiply_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let a = pixel[3] as u16;
        if a == 255 {
            continue;
        }
        for c in &mut pixel.0[..3] {
            *c = ((*c as u16 * a + 127) / 255) as u8;
        }
    }
}

/// Gebündelte Import-Kollaborateure des Controllers.
///
/// Ebenen-Dokument-Dekoder und Puppet-Deserializer haben keine eingebaute
/// Implementierung; fehlen sie, scheitert der jeweilige Import mit `StateError`.
pub struct ImportBackends {
    pub image_decoder: Box<dyn ImageDecoder>,
    pub layered_decoder: Option<Box<dyn LayeredDocumentDecoder>>,
    pub puppet_deserializer: Option<Box<dyn PuppetDeserializer>>,
    pub premultiply: Box<dyn Premultiply>,
}

impl ImportBackends {
    /// Setzt den Ebenen-Dokument-Dekoder.
    pub fn with_layered_decoder(mut self, decoder: impl LayeredDocumentDecoder + 'static) -> Self {
        self.layered_decoder = Some(Box::new(decoder));
        self
    }

    /// Setzt den Deserializer für native Puppet-Dateien.
    pub fn with_puppet_deserializer(
        mut self,
        deserializer: impl PuppetDeserializer + 'static,
    ) -> Self {
        self.puppet_deserializer = Some(Box::new(deserializer));
        self
    }

    /// Ersetzt den Bilddekoder.
    pub fn with_image_decoder(mut self, decoder: impl ImageDecoder + 'static) -> Self {
        self.image_decoder = Box::new(decoder);
        self
    }
}

impl Default for ImportBackends {
    fn default() -> Self {
        Self {
            image_decoder: Box::new(ImageCrateDecoder),
            layered_decoder: None,
            puppet_deserializer: None,
            premultiply: Box::new(PremultiplyAlpha),
        }
    }
}
