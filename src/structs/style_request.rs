use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::style::StyleSpec;

/// Style selection as the form sends it. Colors may come in any case.
#[derive(Deserialize, Serialize, Validate, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StyleForm {
    pub dark_color: Option<String>,
    pub light_color: Option<String>,
    #[serde(default)]
    pub gradient_enabled: bool,
    pub gradient_geometry: Option<String>,
    #[validate(range(min = 1, max = 20))]
    pub scale: Option<u32>,
    #[validate(range(max = 10))]
    pub border: Option<u32>,
}

impl From<&StyleSpec> for StyleForm {
    fn from(style: &StyleSpec) -> Self {
        Self {
            dark_color: Some(style.dark_color.to_string()),
            light_color: Some(style.light_color.to_string()),
            gradient_enabled: style.gradient_enabled,
            gradient_geometry: Some(style.gradient_geometry.to_string()),
            scale: Some(u32::from(style.scale)),
            border: Some(u32::from(style.border)),
        }
    }
}
