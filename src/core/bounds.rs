//! Achsen-alignierte Bounding-Box im Puppet-Raum.

use glam::Vec2;

/// Achsen-alignierte Begrenzung (Puppet-Koordinaten)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Linke obere Ecke (kleinste Koordinaten)
    pub min: Vec2,
    /// Rechte untere Ecke (größte Koordinaten)
    pub max: Vec2,
}

impl Bounds {
    /// Erstellt Bounds aus zwei beliebigen Eckpunkten.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Degenerierte Bounds (Fläche 0) an einem Punkt.
    pub fn from_point(point: Vec2) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Kleinste Box, die alle Punkte enthält. `None` bei leerer Eingabe.
    pub fn from_points(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::from_point(first), |acc, p| acc.include(p)))
    }

    /// Erweitert die Box um einen Punkt.
    pub fn include(self, point: Vec2) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Vereinigung zweier Boxen.
    pub fn union(self, other: Bounds) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Breite und Höhe
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Mittelpunkt
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Größte Ausdehnung (max(Breite, Höhe))
    pub fn max_extent(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y)
    }

    /// `true`, wenn Breite und Höhe (nahezu) 0 sind.
    pub fn is_degenerate(&self) -> bool {
        self.max_extent() <= f32::EPSILON
    }
}
