use url::Url;

use crate::errors::QrError;
use crate::models::content_type::QrContentType;
use crate::models::creation::{
    CreationRequest, QrContent, TextData, VcardData, WifiData, WifiEncryption,
};
use crate::structs::qr_request::QrForm;

/// Same limit as the creation service's title column.
pub const MAX_TITLE_CHARS: usize = 200;

/// Turn raw form state into the payload for the creation service.
///
/// Only the fields of the selected content type are read, so values left over
/// from a previously selected type never reach the payload.
pub fn build(form: &QrForm) -> Result<CreationRequest, QrError> {
    let content_type: QrContentType = required(form.content_type.as_deref(), "type")?.parse()?;

    let content = match content_type {
        QrContentType::Url => url_content(form)?,
        QrContentType::Wifi => wifi_content(form)?,
        QrContentType::Vcard => vcard_content(form)?,
        QrContentType::Text => text_content(form)?,
    };

    let title = required(form.title.as_deref(), "title")?;
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(QrError::invalid_value(
            "title",
            format!("longer than {MAX_TITLE_CHARS} characters"),
        ));
    }

    Ok(CreationRequest {
        title: title.to_string(),
        content,
        note: form.note.clone().unwrap_or_default(),
    })
}

/// Accept only absolute http(s) URLs.
pub fn validate_target_url(raw: &str) -> Result<(), QrError> {
    let parsed = Url::parse(raw).map_err(|_| QrError::InvalidUrl(raw.to_string()))?;

    match parsed.scheme() {
        "http" | "https" if parsed.has_host() => Ok(()),
        _ => Err(QrError::InvalidUrl(raw.to_string())),
    }
}

fn trimmed(value: Option<&str>) -> &str {
    value.map(str::trim).unwrap_or_default()
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, QrError> {
    let value = trimmed(value);
    if value.is_empty() {
        return Err(QrError::MissingField(field));
    }
    Ok(value)
}

fn url_content(form: &QrForm) -> Result<QrContent, QrError> {
    let target_url = required(form.target_url.as_deref(), "targetUrl")?;
    validate_target_url(target_url)?;

    // Keep the user's spelling, the parser would append a trailing slash
    Ok(QrContent::Url {
        target_url: target_url.to_string(),
    })
}

fn wifi_content(form: &QrForm) -> Result<QrContent, QrError> {
    let ssid = required(form.ssid.as_deref(), "ssid")?;

    let encryption = match trimmed(form.encryption.as_deref()) {
        "" => WifiEncryption::default(),
        raw => raw.parse()?,
    };

    // Passwords are taken verbatim, surrounding spaces included
    let password = match encryption {
        WifiEncryption::NoPass => String::new(),
        _ => form.password.clone().unwrap_or_default(),
    };

    Ok(QrContent::Wifi {
        data: WifiData {
            ssid: ssid.to_string(),
            password,
            encryption,
        },
    })
}

fn vcard_content(form: &QrForm) -> Result<QrContent, QrError> {
    let data = VcardData {
        name: trimmed(form.name.as_deref()).to_string(),
        phone: trimmed(form.phone.as_deref()).to_string(),
        email: trimmed(form.email.as_deref()).to_string(),
    };

    if data.name.is_empty() && data.phone.is_empty() && data.email.is_empty() {
        return Err(QrError::MissingField("name, phone or email"));
    }

    Ok(QrContent::Vcard { data })
}

fn text_content(form: &QrForm) -> Result<QrContent, QrError> {
    required(form.content.as_deref(), "content")?;

    Ok(QrContent::Text {
        data: TextData {
            content: form.content.clone().unwrap_or_default(),
        },
    })
}
