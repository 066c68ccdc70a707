use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::QrError;

/// Kind of content a QR code carries. Exactly one is active per request.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QrContentType {
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "WIFI")]
    Wifi,
    #[serde(rename = "VCARD")]
    Vcard,
    #[serde(rename = "TEXT")]
    Text,
}

impl QrContentType {
    pub fn all() -> [QrContentType; 4] {
        [
            QrContentType::Url,
            QrContentType::Wifi,
            QrContentType::Vcard,
            QrContentType::Text,
        ]
    }

    /// Wire spelling, always uppercase.
    pub fn as_str(&self) -> &'static str {
        match self {
            QrContentType::Url => "URL",
            QrContentType::Wifi => "WIFI",
            QrContentType::Vcard => "VCARD",
            QrContentType::Text => "TEXT",
        }
    }
}

impl fmt::Display for QrContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Forms have been seen sending both "url" and "URL"
impl FromStr for QrContentType {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        QrContentType::all()
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| QrError::InvalidType(s.to_string()))
    }
}
