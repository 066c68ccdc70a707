use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::style::StyleSpec;
use crate::structs::style_request::StyleForm;
use crate::utils::style_encoder::PreviewDescriptor;

/// Raw form state. Fields of every content type live side by side; only the
/// ones belonging to `type` are read.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QrForm {
    pub title: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient_content_type")]
    pub content_type: Option<String>,
    pub note: Option<String>,
    // URL
    pub target_url: Option<String>,
    // WIFI
    pub ssid: Option<String>,
    pub password: Option<String>,
    pub encryption: Option<String>,
    // VCARD
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    // TEXT
    pub content: Option<String>,
}

// Non-string values keep their JSON text and later fail as an unknown type
fn lenient_content_type<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => Some(raw),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SubmitRequest {
    pub form: QrForm,
    #[serde(default)]
    pub style: StyleForm,
}

#[derive(Serialize)]
pub struct StylePreviewResponse {
    pub style: StyleSpec,
    pub query: String,
    pub preview: PreviewDescriptor,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedQr {
    pub slug: String,
    /// PNG image.
    pub render_url: String,
    pub svg_url: String,
    pub redirect_url: String,
    pub preview: PreviewDescriptor,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResponse {
    pub sequence: u64,
    #[serde(flatten)]
    pub qr: CreatedQr,
    /// False when a newer submission resolved first and this one was discarded.
    pub current: bool,
}
