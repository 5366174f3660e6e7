//! Rebleed: Farbe in transparente Randpixel der Texturen ausbreiten.
//!
//! Verhindert dunkle Säume beim Filtern an Alpha-Kanten. Der Filter selbst ist
//! austauschbar (`BleedFilter`); der Task iteriert die Textur-Slots der Puppet.

use super::TaskHost;
use crate::core::Puppet;
use image::RgbaImage;
use std::sync::Arc;

/// Pixel-Filter, der auf eine einzelne Textur angewendet wird.
pub trait BleedFilter {
    fn apply(&self, image: &mut RgbaImage);
}

/// 8er-Nachbarschaft
const NEIGHBOURS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Dilatation: voll transparente Pixel neben bekannten Pixeln erhalten den
/// Farbmittelwert ihrer Nachbarn. Alpha bleibt unverändert.
#[derive(Debug, Clone, Copy)]
pub struct DilationBleed {
    /// Anzahl Durchläufe (= Saumbreite in Pixeln)
    pub passes: u32,
}

impl BleedFilter for DilationBleed {
    fn apply(&self, image: &mut RgbaImage) {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return;
        }
        let index = |x: u32, y: u32| (y as usize) * (width as usize) + x as usize;
        let mut known: Vec<bool> = image.pixels().map(|p| p[3] > 0).collect();

        for _ in 0..self.passes {
            let mut filled: Vec<(u32, u32, [u8; 3])> = Vec::new();
            for y in 0..height {
                for x in 0..width {
                    if known[index(x, y)] {
                        continue;
                    }
                    let mut sum = [0u32; 3];
                    let mut count = 0u32;
                    for (dx, dy) in NEIGHBOURS {
                        let nx = x as i64 + dx;
                        let ny = y as i64 + dy;
                        if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                            continue;
                        }
                        let (nx, ny) = (nx as u32, ny as u32);
                        if !known[index(nx, ny)] {
                            continue;
                        }
                        let p = image.get_pixel(nx, ny);
                        for c in 0..3 {
                            sum[c] += p[c] as u32;
                        }
                        count += 1;
                    }
                    if count > 0 {
                        filled.push((x, y, sum.map(|s| ((s + count / 2) / count) as u8)));
                    }
                }
            }
            if filled.is_empty() {
                break;
            }
            for (x, y, rgb) in filled {
                let pixel = image.get_pixel_mut(x, y);
                pixel.0[..3].copy_from_slice(&rgb);
                known[index(x, y)] = true;
            }
        }
    }
}

/// Rebleed über alle Textur-Slots der aktiven Puppet.
pub struct RebleedTask {
    filter: Box<dyn BleedFilter>,
}

impl RebleedTask {
    /// Task-Name für den Host
    pub const NAME: &'static str = "Rebleed";

    /// Erstellt den Task mit beliebigem Filter.
    pub fn new(filter: impl BleedFilter + 'static) -> Self {
        Self {
            filter: Box::new(filter),
        }
    }

    /// Task mit dem Standard-Dilatationsfilter.
    pub fn with_passes(passes: u32) -> Self {
        Self::new(DilationBleed { passes })
    }

    /// Verarbeitet alle Texturen; gibt deren Anzahl zurück.
    ///
    /// Zwischen zwei Texturen wird `yield_now` aufgerufen. Der Fortschritt
    /// steigt in Schritten von `1/n` und endet bei 1.0.
    pub fn run(&self, puppet: &mut Puppet, host: &mut dyn TaskHost) -> usize {
        let slots = puppet.textures_mut();
        let total = slots.len();
        host.report_status(&format!("Rebleed: {total} Texturen"));
        if total == 0 {
            host.report_progress(1.0);
            return 0;
        }

        for (i, slot) in slots.iter_mut().enumerate() {
            host.report_status(&format!("Rebleed Textur {}/{}", i + 1, total));
            // Copy-on-Write: geteilte Texturen (z.B. in Snapshots) bleiben unberührt
            Arc::make_mut(slot).update_pixels(|image| self.filter.apply(image));
            host.report_progress((i + 1) as f32 / total as f32);
            host.yield_now();
        }

        host.report_status("Rebleed abgeschlossen");
        total
    }
}
