use actix_web::{HttpResponse, web};

use crate::errors::QrError;
use crate::structs::qr_request::StylePreviewResponse;
use crate::structs::style_request::StyleForm;
use crate::utils::style_encoder::{canonicalize, encode};

/// Canonical style, renderer query and local preview for a style selection
pub async fn preview_style(web::Json(form): web::Json<StyleForm>) -> Result<HttpResponse, QrError> {
    let style = canonicalize(&form)?;
    let encoded = encode(&style);

    Ok(HttpResponse::Ok().json(StylePreviewResponse {
        query: encoded.query.to_query_string(),
        preview: encoded.preview,
        style,
    }))
}
