//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Verschiebt die Kamera um ein Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt um einen Faktor.
pub fn zoom(state: &mut AppState, factor: f32) {
    use_cases::camera::zoom_by(state, factor);
}

/// Bewegt die Kamera einen Schritt Richtung Ziel.
pub fn advance_camera(state: &mut AppState) {
    use_cases::camera::advance(state);
}

/// Setzt das Kamera-Ziel auf einen Node.
pub fn focus(state: &mut AppState, uuid: Option<u32>, position: Option<glam::Vec2>) {
    use_cases::camera::focus_camera(state, uuid, position);
}
