use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

use crate::models::creation::CreationResult;
use crate::models::style::StyleSpec;
use crate::utils::render_url::compose;
use crate::utils::style_encoder::query_fragment;

/// Image formats the rendering service serves, one endpoint each.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Png,
    Svg,
}

impl RenderFormat {
    pub fn all() -> [RenderFormat; 2] {
        [RenderFormat::Png, RenderFormat::Svg]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderFormat::Png => "png",
            RenderFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendering endpoint per format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderEndpoints {
    pub png: Url,
    pub svg: Url,
}

impl RenderEndpoints {
    pub fn base(&self, format: RenderFormat) -> &Url {
        match format {
            RenderFormat::Png => &self.png,
            RenderFormat::Svg => &self.svg,
        }
    }
}

/// Everything the rendering endpoint needs for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub slug: String,
    pub style: StyleSpec,
    pub format: RenderFormat,
}

impl RenderRequest {
    pub fn new(result: &CreationResult, style: &StyleSpec, format: RenderFormat) -> Self {
        Self {
            slug: result.slug.clone(),
            style: style.clone(),
            format,
        }
    }

    /// The same query goes to either endpoint, only the base differs.
    pub fn url(&self, endpoints: &RenderEndpoints) -> Url {
        compose(
            endpoints.base(self.format),
            &self.slug,
            &query_fragment(&self.style),
        )
    }
}
