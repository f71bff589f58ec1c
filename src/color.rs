use eframe::egui::Color32;
use palette::rgb::FromHexError;
use palette::Srgb;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid colour {hex:?}: {source}")]
pub struct ColorError {
    hex: String,
    #[source]
    source: FromHexError,
}

// ---------------------------------------------------------------------------
// Series colour: exact sRGB channels plus opacity
// ---------------------------------------------------------------------------

/// A series colour as written in the configuration, converted to egui
/// colours only when drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesColor {
    rgb: Srgb<u8>,
    alpha: f32,
}

impl SeriesColor {
    /// Parse a `#rrggbb` (or `#rgb`) code and attach an opacity in `[0, 1]`.
    pub fn from_hex(hex: &str, alpha: f32) -> Result<Self, ColorError> {
        let rgb: Srgb<u8> = hex.parse().map_err(|source| ColorError {
            hex: hex.to_string(),
            source,
        })?;
        Ok(SeriesColor {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        })
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.rgb.red, self.rgb.green, self.rgb.blue]
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Translucent fill colour.
    pub fn fill(&self) -> Color32 {
        let a = (self.alpha * 255.0).round() as u8;
        Color32::from_rgba_unmultiplied(self.rgb.red, self.rgb.green, self.rgb.blue, a)
    }

    /// Opaque outline colour.
    pub fn stroke(&self) -> Color32 {
        Color32::from_rgb(self.rgb.red, self.rgb.green, self.rgb.blue)
    }
}
