//! Blend-Modi: Ziel-Modi der Parts und Quell-Tags aus Ebenen-Dokumenten.

use serde::{Deserialize, Serialize};

/// Blend-Modus eines Parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// Normales Überblenden
    #[default]
    Normal,
    /// Multiplizieren
    Multiply,
    /// Linear abwedeln (Addieren)
    LinearDodge,
    /// Farbig abwedeln
    ColorDodge,
    /// Negativ multiplizieren
    Screen,
}

/// Blend-Tag einer Ebene oder Gruppe im Quelldokument.
///
/// Deckt das vollständige Vokabular geschichteter Dokumente ab; unbekannte
/// (z.B. zukünftige) Tags landen in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceBlendMode {
    /// Gruppe reicht die Modi ihrer Kinder unverändert durch
    PassThrough,
    #[default]
    Normal,
    Dissolve,
    Darken,
    Multiply,
    ColorBurn,
    LinearBurn,
    DarkerColor,
    Lighten,
    Screen,
    ColorDodge,
    LinearDodge,
    LighterColor,
    Overlay,
    SoftLight,
    HardLight,
    VividLight,
    LinearLight,
    PinLight,
    HardMix,
    Difference,
    Exclusion,
    Subtract,
    Divide,
    Hue,
    Saturation,
    Color,
    Luminosity,
    /// Nicht erkannter Tag (Rohschlüssel)
    Unknown(String),
}

impl SourceBlendMode {
    /// Parst einen Vier-Zeichen-Blend-Schlüssel (z.B. `"mul "`, `"scrn"`).
    pub fn from_key(key: &str) -> Self {
        match key {
            "pass" => Self::PassThrough,
            "norm" => Self::Normal,
            "diss" => Self::Dissolve,
            "dark" => Self::Darken,
            "mul " => Self::Multiply,
            "idiv" => Self::ColorBurn,
            "lbrn" => Self::LinearBurn,
            "dkCl" => Self::DarkerColor,
            "lite" => Self::Lighten,
            "scrn" => Self::Screen,
            "div " => Self::ColorDodge,
            "lddg" => Self::LinearDodge,
            "lgCl" => Self::LighterColor,
            "over" => Self::Overlay,
            "sLit" => Self::SoftLight,
            "hLit" => Self::HardLight,
            "vLit" => Self::VividLight,
            "lLit" => Self::LinearLight,
            "pLit" => Self::PinLight,
            "hMix" => Self::HardMix,
            "diff" => Self::Difference,
            "smud" => Self::Exclusion,
            "fsub" => Self::Subtract,
            "fdiv" => Self::Divide,
            "hue " => Self::Hue,
            "sat " => Self::Saturation,
            "colr" => Self::Color,
            "lum " => Self::Luminosity,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// `true` für Pass-Through-Gruppen.
    pub fn is_pass_through(&self) -> bool {
        matches!(self, Self::PassThrough)
    }

    /// Bildet den Quell-Tag auf den Ziel-Blend-Modus ab.
    ///
    /// Gilt identisch für Raster-Ebenen und Gruppen. Alles außerhalb von
    /// Multiply/LinearDodge/ColorDodge/Screen wird zu `Normal`.
    pub fn resolve(&self) -> BlendMode {
        match self {
            Self::Multiply => BlendMode::Multiply,
            Self::LinearDodge => BlendMode::LinearDodge,
            Self::ColorDodge => BlendMode::ColorDodge,
            Self::Screen => BlendMode::Screen,
            _ => BlendMode::Normal,
        }
    }
}
