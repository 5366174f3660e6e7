//! Lokale Node-Transformation (Translation, Rotation, Skalierung).

use glam::{Affine2, Vec2, Vec3};

/// Lokale Transformation eines Nodes relativ zu seinem Parent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Verschiebung; `z` wird nur mitgeführt, nicht für Bounds verwendet
    pub translation: Vec3,
    /// Rotation um die Z-Achse in Radiant
    pub rotation: f32,
    /// Skalierung in X/Y
    pub scale: Vec2,
}

impl Transform {
    /// Identität
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: 0.0,
        scale: Vec2::ONE,
    };

    /// Reine Verschiebung
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::IDENTITY
        }
    }

    /// 2D-Affine-Matrix dieser Transformation (Z fällt weg).
    pub fn to_affine(&self) -> Affine2 {
        Affine2::from_scale_angle_translation(self.scale, self.rotation, self.translation.truncate())
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
