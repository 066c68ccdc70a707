use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::QrError;

pub const DEFAULT_DARK_COLOR: &str = "#000000";
pub const DEFAULT_LIGHT_COLOR: &str = "#ffffff";
pub const DEFAULT_SCALE: u8 = 8;
pub const DEFAULT_BORDER: u8 = 2;
pub const MIN_SCALE: u8 = 1;
pub const MAX_SCALE: u8 = 20;
pub const MAX_BORDER: u8 = 10;

/// A color in canonical `#rrggbb` form (lowercase).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(raw: &str) -> Result<Self, QrError> {
        let digits = raw
            .strip_prefix('#')
            .ok_or_else(|| QrError::InvalidColor(raw.to_string()))?;

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(QrError::InvalidColor(raw.to_string()));
        }

        Ok(HexColor(format!("#{}", digits.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

/// Direction or shape used to interpolate from the dark color to the light one.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientGeometry {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    #[default]
    Vertical,
    /// Circle, dark at the center and light at the edge.
    Radial,
    /// Concentric squares, dark at the center and light at the outer ring.
    Square,
}

impl GradientGeometry {
    pub fn all() -> [GradientGeometry; 4] {
        [
            GradientGeometry::Horizontal,
            GradientGeometry::Vertical,
            GradientGeometry::Radial,
            GradientGeometry::Square,
        ]
    }

    /// Spelling the renderer expects in `grad_type`.
    pub fn as_str(&self) -> &'static str {
        match self {
            GradientGeometry::Horizontal => "horizontal",
            GradientGeometry::Vertical => "vertical",
            GradientGeometry::Radial => "radial",
            GradientGeometry::Square => "square",
        }
    }
}

impl fmt::Display for GradientGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradientGeometry {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        GradientGeometry::all()
            .into_iter()
            .find(|geometry| geometry.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                QrError::invalid_value(
                    "gradientGeometry",
                    format!("{s:?} is not one of horizontal, vertical, radial, square"),
                )
            })
    }
}

/// Canonical style. Every field is resolved, nothing is left to renderer defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSpec {
    pub dark_color: HexColor,
    pub light_color: HexColor,
    pub gradient_enabled: bool,
    /// Kept even when the gradient is off.
    pub gradient_geometry: GradientGeometry,
    pub scale: u8,
    pub border: u8,
}
