use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::QrError;
use crate::models::content_type::QrContentType;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WifiEncryption {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    NoPass,
}

impl WifiEncryption {
    pub fn as_str(&self) -> &'static str {
        match self {
            WifiEncryption::Wpa => "WPA",
            WifiEncryption::Wep => "WEP",
            WifiEncryption::NoPass => "nopass",
        }
    }
}

impl FromStr for WifiEncryption {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wpa" => Ok(WifiEncryption::Wpa),
            "wep" => Ok(WifiEncryption::Wep),
            "nopass" => Ok(WifiEncryption::NoPass),
            _ => Err(QrError::invalid_value(
                "encryption",
                format!("{s:?} is not one of WPA, WEP, nopass"),
            )),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WifiData {
    pub ssid: String,
    pub password: String,
    pub encryption: WifiEncryption,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VcardData {
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TextData {
    pub content: String,
}

/// Content of a QR code, one variant per content type.
///
/// Serialized with the `type` tag next to either `targetUrl` (for URL) or
/// `data` (for everything else), never both.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum QrContent {
    #[serde(rename = "URL")]
    Url {
        #[serde(rename = "targetUrl")]
        target_url: String,
    },
    #[serde(rename = "WIFI")]
    Wifi { data: WifiData },
    #[serde(rename = "VCARD")]
    Vcard { data: VcardData },
    #[serde(rename = "TEXT")]
    Text { data: TextData },
}

impl QrContent {
    pub fn content_type(&self) -> QrContentType {
        match self {
            QrContent::Url { .. } => QrContentType::Url,
            QrContent::Wifi { .. } => QrContentType::Wifi,
            QrContent::Vcard { .. } => QrContentType::Vcard,
            QrContent::Text { .. } => QrContentType::Text,
        }
    }
}

/// Body of `POST /api/qr` on the creation service.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreationRequest {
    pub title: String,
    #[serde(flatten)]
    pub content: QrContent,
    pub note: String,
}

impl CreationRequest {
    pub fn content_type(&self) -> QrContentType {
        self.content.content_type()
    }
}

/// Response of the creation service. The slug is opaque.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CreationResult {
    pub slug: String,
}
