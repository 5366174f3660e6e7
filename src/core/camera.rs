//! 2D-Kamera für Pan und Zoom mit Zielwerten für weiches Nachführen.

use glam::Vec2;

/// Viewport-Schnittstelle: liefert die Größe und nimmt Zielwerte entgegen.
///
/// Die Zielwerte werden asynchron (z.B. pro Frame) angefahren; `set_target`
/// blockiert nie.
pub trait Viewport {
    /// Aktuelle Viewport-Größe in Pixeln
    fn size(&self) -> Vec2;
    /// Setzt Ziel-Zoom und Ziel-Pan
    fn set_target(&mut self, zoom: f32, position: Vec2);
}

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Pan-Offset: der Weltpunkt `-position` liegt in der Bildschirmmitte
    pub position: Vec2,
    /// Zoom-Level (1.0 = ein Pixel pro Welteinheit)
    pub zoom: f32,
    /// Ziel-Pan, auf das `advance()` zuläuft
    pub target_position: Vec2,
    /// Ziel-Zoom, auf das `advance()` zuläuft
    pub target_zoom: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 2.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            target_position: Vec2::ZERO,
            target_zoom: 1.0,
        }
    }

    /// Setzt Position und Zoom sofort (ohne Nachführen)
    pub fn jump_to(&mut self, position: Vec2, zoom: f32) {
        self.position = position;
        self.zoom = zoom;
        self.target_position = position;
        self.target_zoom = zoom;
    }

    /// Verschiebt die Kamera (Pan) inklusive Ziel
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
        self.target_position += delta;
    }

    /// Ändert den Zoom-Level innerhalb der Grenzen
    pub fn zoom_by_clamped(&mut self, factor: f32, min: f32, max: f32) {
        self.zoom = (self.zoom * factor).clamp(min, max);
        self.target_zoom = self.zoom;
    }

    /// Läuft um `factor` (0..=1) auf die Zielwerte zu.
    ///
    /// Gibt `true` zurück, solange das Ziel noch nicht erreicht ist.
    pub fn advance(&mut self, factor: f32) -> bool {
        let t = factor.clamp(0.0, 1.0);
        self.position = self.position.lerp(self.target_position, t);
        self.zoom += (self.target_zoom - self.zoom) * t;

        let settled = self.position.abs_diff_eq(self.target_position, 1e-3)
            && (self.zoom - self.target_zoom).abs() < 1e-4;
        if settled {
            self.position = self.target_position;
            self.zoom = self.target_zoom;
        }
        !settled
    }

    /// Konvertiert Screen-Koordinaten zu Puppet-Koordinaten.
    pub fn screen_to_world(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (screen_pos - screen_size * 0.5) / self.zoom - self.position
    }

    /// Konvertiert Puppet-Koordinaten zu Screen-Koordinaten.
    pub fn world_to_screen(&self, world_pos: Vec2, screen_size: Vec2) -> Vec2 {
        (world_pos + self.position) * self.zoom + screen_size * 0.5
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}
