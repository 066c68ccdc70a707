use url::Url;

use crate::errors::QrError;
use crate::utils::style_encoder::QueryFragment;

pub const PARAM_SLUG: &str = "slug";

/// Image URL for a slug: the rendering endpoint, `slug`, then every style parameter.
pub fn compose(render_base: &Url, slug: &str, fragment: &QueryFragment) -> Url {
    let mut url = render_base.clone();
    url.query_pairs_mut()
        .append_pair(PARAM_SLUG, slug)
        .extend_pairs(fragment.pairs());
    url
}

/// Redirect URL for a slug, the slug becoming the last path segment.
pub fn compose_redirect(redirect_base: &Url, slug: &str) -> Result<Url, QrError> {
    let mut url = redirect_base.clone();
    url.path_segments_mut()
        .map_err(|_| QrError::InvalidUrl(redirect_base.to_string()))?
        .pop_if_empty()
        .push(slug);
    Ok(url)
}
