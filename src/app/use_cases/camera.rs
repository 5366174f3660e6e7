//! Use-Case-Funktionen für Kamera-Steuerung und Framing.

use crate::app::AppState;
use crate::core::{Camera2D, Puppet, Viewport};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Ziel-Zoom und Ziel-Pan für den Viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusTarget {
    pub zoom: f32,
    pub position: Vec2,
}

/// Setzt die Kamera auf Default zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = Camera2D::default();
}

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt die Kamera um einen Faktor (innerhalb der konfigurierten Grenzen).
pub fn zoom_by(state: &mut AppState, factor: f32) {
    let (min, max) = zoom_limits(&state.options);
    state.view.camera.zoom_by_clamped(factor, min, max);
}

/// Bewegt die Kamera einen Schritt auf ihr Ziel zu.
pub fn advance(state: &mut AppState) -> bool {
    let ease = state.options.camera_ease_factor;
    state.view.camera.advance(ease)
}

/// Berechnet das Kamera-Ziel für einen Node.
///
/// - Drawables: eigene Bounds, Pan auf die negierte Welt-Translation
/// - Sonstige Nodes: kombinierte Bounds, Pan auf den negierten Bounds-Mittelpunkt
///   (der Node selbst wird nicht verändert)
///
/// `position` ersetzt das Pan-Ziel. `None`, wenn der Node nicht existiert.
pub fn focus_target(
    puppet: &Puppet,
    uuid: u32,
    position: Option<Vec2>,
    viewport_size: Vec2,
    options: &EditorOptions,
) -> Option<FocusTarget> {
    let node = puppet.node(uuid)?;
    let bounds = puppet.combined_bounds(uuid)?;
    let translation = if node.is_drawable() {
        puppet.world_position(uuid)?
    } else {
        bounds.center()
    };

    let (min, max) = zoom_limits(options);
    let extent = bounds.max_extent();
    let zoom = if bounds.is_degenerate() || !extent.is_finite() {
        log::warn!(
            "Node '{}' hat keine Ausdehnung, verwende Zoom {}",
            node.name,
            options.degenerate_focus_zoom
        );
        options.degenerate_focus_zoom
    } else {
        options.focus_fill_ratio * viewport_size.max_element() / extent
    };
    let zoom = if zoom.is_finite() { zoom } else { min };

    Some(FocusTarget {
        zoom: zoom.clamp(min, max),
        position: position.unwrap_or(-translation),
    })
}

/// Setzt das Ziel eines Viewports auf einen Node. Gibt `false` bei No-Op zurück.
pub fn focus_viewport(
    puppet: &Puppet,
    uuid: u32,
    position: Option<Vec2>,
    viewport: &mut dyn Viewport,
    options: &EditorOptions,
) -> bool {
    let Some(target) = focus_target(puppet, uuid, position, viewport.size(), options) else {
        log::debug!("FocusCamera: Node {} nicht im Baum, ignoriert", uuid);
        return false;
    };
    viewport.set_target(target.zoom, target.position);
    true
}

/// Richtet die Session-Kamera auf einen Node aus (kein Node → No-Op).
pub fn focus_camera(state: &mut AppState, uuid: Option<u32>, position: Option<Vec2>) {
    let Some(uuid) = uuid else {
        return;
    };
    let Some(project) = state.project.as_ref() else {
        return;
    };
    focus_viewport(
        &project.puppet,
        uuid,
        position,
        &mut state.view,
        &state.options,
    );
}

/// Richtet die Kamera auf den Root der aktiven Puppet aus.
pub fn frame_root(state: &mut AppState) {
    let root = state.puppet().map(Puppet::root);
    focus_camera(state, root, None);
}

/// Zoom-Grenzen in aufsteigender Reihenfolge (robust gegen vertauschte Optionen)
fn zoom_limits(options: &EditorOptions) -> (f32, f32) {
    let (a, b) = (options.camera_zoom_min, options.camera_zoom_max);
    (a.min(b), a.max(b))
}
