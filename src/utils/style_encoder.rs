//! Style encoding for the rendering endpoint and the local preview.
//!
//! Both outputs are derived from the same canonical [`StyleSpec`], so the
//! preview cannot drift from what the renderer is asked to draw.

use serde::Serialize;
use url::form_urlencoded;
use validator::Validate;

use crate::errors::QrError;
use crate::models::style::{
    DEFAULT_BORDER, DEFAULT_DARK_COLOR, DEFAULT_LIGHT_COLOR, DEFAULT_SCALE, GradientGeometry,
    HexColor, StyleSpec,
};
use crate::structs::style_request::StyleForm;

pub const PARAM_DARK_COLOR: &str = "dark_color";
pub const PARAM_LIGHT_COLOR: &str = "light_color";
pub const PARAM_GRADIENT: &str = "gradient";
pub const PARAM_GRAD_TYPE: &str = "grad_type";
pub const PARAM_SCALE: &str = "scale";
pub const PARAM_BORDER: &str = "border";

/// Style parameters in the order the renderer receives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryFragment {
    pairs: Vec<(&'static str, String)>,
}

impl QueryFragment {
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(name, value)| (*name, value.as_str()))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }

    /// Percent-encoded `name=value&...` string, `#` becomes `%23`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs())
            .finish()
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LinearDirection {
    ToRight,
    ToBottom,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RadialShape {
    Circle,
    Square,
}

/// How far a radial gradient reaches. The renderer ends the light color at
/// the nearest edge of the image, not at its corners.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RadialExtent {
    ClosestSide,
}

/// Declarative description of the style for a display layer to draw locally.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PreviewDescriptor {
    Solid {
        foreground: HexColor,
        background: HexColor,
    },
    Linear {
        direction: LinearDirection,
        from: HexColor,
        to: HexColor,
    },
    Radial {
        shape: RadialShape,
        extent: RadialExtent,
        center: HexColor,
        edge: HexColor,
    },
}

impl PreviewDescriptor {
    /// Geometry this preview depicts, `None` for a solid fill.
    pub fn geometry(&self) -> Option<GradientGeometry> {
        match self {
            PreviewDescriptor::Solid { .. } => None,
            PreviewDescriptor::Linear { direction, .. } => Some(match direction {
                LinearDirection::ToRight => GradientGeometry::Horizontal,
                LinearDirection::ToBottom => GradientGeometry::Vertical,
            }),
            PreviewDescriptor::Radial { shape, .. } => Some(match shape {
                RadialShape::Circle => GradientGeometry::Radial,
                RadialShape::Square => GradientGeometry::Square,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedStyle {
    pub query: QueryFragment,
    pub preview: PreviewDescriptor,
}

/// Resolve a raw style selection into its canonical form.
///
/// Defaults: dark `#000000`, light `#ffffff`, geometry `vertical`, scale 8,
/// border 2. Present but malformed values are errors, not defaults.
pub fn canonicalize(form: &StyleForm) -> Result<StyleSpec, QrError> {
    form.validate()?;

    let dark_color = HexColor::parse(form.dark_color.as_deref().unwrap_or(DEFAULT_DARK_COLOR))?;
    let light_color =
        HexColor::parse(form.light_color.as_deref().unwrap_or(DEFAULT_LIGHT_COLOR))?;

    let gradient_geometry = match form.gradient_geometry.as_deref().map(str::trim) {
        None | Some("") => GradientGeometry::default(),
        Some(raw) => raw.parse()?,
    };

    Ok(StyleSpec {
        dark_color,
        light_color,
        gradient_enabled: form.gradient_enabled,
        gradient_geometry,
        scale: small_int(form.scale, DEFAULT_SCALE, "scale")?,
        border: small_int(form.border, DEFAULT_BORDER, "border")?,
    })
}

fn small_int(value: Option<u32>, default: u8, field: &str) -> Result<u8, QrError> {
    match value {
        None => Ok(default),
        Some(value) => {
            u8::try_from(value).map_err(|_| QrError::invalid_value(field, "out of the allowed range"))
        }
    }
}

pub fn encode(style: &StyleSpec) -> EncodedStyle {
    EncodedStyle {
        query: query_fragment(style),
        preview: preview_descriptor(style),
    }
}

pub fn encode_form(form: &StyleForm) -> Result<EncodedStyle, QrError> {
    canonicalize(form).map(|style| encode(&style))
}

/// Every parameter is always present. The renderer keeps no defaults of its own.
pub fn query_fragment(style: &StyleSpec) -> QueryFragment {
    QueryFragment {
        pairs: vec![
            (PARAM_DARK_COLOR, style.dark_color.to_string()),
            (PARAM_LIGHT_COLOR, style.light_color.to_string()),
            (PARAM_GRADIENT, style.gradient_enabled.to_string()),
            // Sent in solid mode as well, the renderer ignores it there
            (PARAM_GRAD_TYPE, style.gradient_geometry.to_string()),
            (PARAM_SCALE, style.scale.to_string()),
            (PARAM_BORDER, style.border.to_string()),
        ],
    }
}

pub fn preview_descriptor(style: &StyleSpec) -> PreviewDescriptor {
    let dark = style.dark_color.clone();
    let light = style.light_color.clone();

    if !style.gradient_enabled {
        return PreviewDescriptor::Solid {
            foreground: dark,
            background: light,
        };
    }

    match style.gradient_geometry {
        GradientGeometry::Horizontal => PreviewDescriptor::Linear {
            direction: LinearDirection::ToRight,
            from: dark,
            to: light,
        },
        GradientGeometry::Vertical => PreviewDescriptor::Linear {
            direction: LinearDirection::ToBottom,
            from: dark,
            to: light,
        },
        GradientGeometry::Radial => PreviewDescriptor::Radial {
            shape: RadialShape::Circle,
            extent: RadialExtent::ClosestSide,
            center: dark,
            edge: light,
        },
        GradientGeometry::Square => PreviewDescriptor::Radial {
            shape: RadialShape::Square,
            extent: RadialExtent::ClosestSide,
            center: dark,
            edge: light,
        },
    }
}
