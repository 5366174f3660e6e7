use crate::core::{Camera2D, Viewport};
use glam::Vec2;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [0.0, 0.0],
        }
    }

    /// `true`, sobald der Host eine Viewport-Größe gemeldet hat
    pub fn has_viewport(&self) -> bool {
        self.viewport_size[0] > 0.0 && self.viewport_size[1] > 0.0
    }
}

impl Viewport for ViewState {
    fn size(&self) -> Vec2 {
        Vec2::from(self.viewport_size)
    }

    fn set_target(&mut self, zoom: f32, position: Vec2) {
        self.camera.target_zoom = zoom;
        self.camera.target_position = position;
    }
}
