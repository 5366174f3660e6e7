//! Texturen der Puppet (RGBA8, CPU-seitig).

use image::RgbaImage;
use std::hash::{DefaultHasher, Hash, Hasher};

/// RGBA-Textur mit Inhalts-Hash für die Deduplizierung
#[derive(Debug, Clone)]
pub struct Texture {
    image: RgbaImage,
    content_hash: u64,
}

impl Texture {
    /// Erstellt eine Textur aus einem RGBA-Bild und berechnet den Inhalts-Hash.
    pub fn new(image: RgbaImage) -> Self {
        let content_hash = Self::hash_image(&image);
        Self {
            image,
            content_hash,
        }
    }

    /// Leere 0×0-Textur (z.B. für Ebenen ohne Fläche)
    pub fn empty() -> Self {
        Self::new(RgbaImage::new(0, 0))
    }

    fn hash_image(image: &RgbaImage) -> u64 {
        let mut hasher = DefaultHasher::new();
        image.dimensions().hash(&mut hasher);
        image.as_raw().hash(&mut hasher);
        hasher.finish()
    }

    /// Breite in Pixeln
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Höhe in Pixeln
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Inhalts-Identität (Dimensionen + Pixel)
    pub fn content_hash(&self) -> u64 {
        self.content_hash
    }

    /// Read-only Zugriff auf die Pixel
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Ersetzt die Pixel über eine Mutation und aktualisiert den Hash.
    /// Textur mit vorgegebenem Hash (nur Tests: erzwingt Kollisionen)
    #[cfg(test)]
    pub(crate) fn with_content_hash(image: RgbaImage, content_hash: u64) -> Self {
        Self {
            image,
            content_hash,
        }
    }

    /// Pixelgleichheit (Abmessungen und Rohdaten), unabhängig vom Hash
    pub fn same_pixels(&self, other: &Texture) -> bool {
        self.image.dimensions() == other.image.dimensions()
            && self.image.as_raw() == other.image.as_raw()
    }

    pub fn update_pixels(&mut self, mutate: impl FnOnce(&mut RgbaImage)) {
        mutate(&mut self.image);
        self.content_hash = Self::hash_image(&self.image);
    }
}
