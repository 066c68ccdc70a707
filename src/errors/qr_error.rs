use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use log::debug;
use serde::Serialize;

/// Message shown to the user when the creation service could not be used.
pub const CREATION_FAILED_MESSAGE: &str = "Could not create the QR code. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    MissingField,
    InvalidType,
    InvalidUrl,
    InvalidColor,
    InvalidValue,
    TransportFailure,
    UnexpectedResponseShape,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QrError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid content type: {0:?}")]
    InvalidType(String),

    #[error("Invalid URL: {0:?} (expected an absolute http or https URL)")]
    InvalidUrl(String),

    #[error("Invalid color: {0:?} (expected #rrggbb)")]
    InvalidColor(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Creation service request failed: {0}")]
    TransportFailure(String),

    #[error("Creation service returned an unexpected response: {0}")]
    UnexpectedResponseShape(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: ErrorKind,
}

impl QrError {
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            QrError::MissingField(_) => ErrorKind::MissingField,
            QrError::InvalidType(_) => ErrorKind::InvalidType,
            QrError::InvalidUrl(_) => ErrorKind::InvalidUrl,
            QrError::InvalidColor(_) => ErrorKind::InvalidColor,
            QrError::InvalidValue { .. } => ErrorKind::InvalidValue,
            QrError::TransportFailure(_) => ErrorKind::TransportFailure,
            QrError::UnexpectedResponseShape(_) => ErrorKind::UnexpectedResponseShape,
        }
    }

    /// Validation errors are detected locally, before anything is sent.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            QrError::TransportFailure(_) | QrError::UnexpectedResponseShape(_)
        )
    }

    /// The text a user gets to see. Creation failures collapse into one message.
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            CREATION_FAILED_MESSAGE.to_string()
        }
    }
}

impl From<validator::ValidationErrors> for QrError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        match fields.into_iter().next() {
            Some(field) => QrError::invalid_value(field, "out of the allowed range"),
            None => QrError::invalid_value("form", "failed validation"),
        }
    }
}

impl ResponseError for QrError {
    fn status_code(&self) -> StatusCode {
        if self.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::BAD_GATEWAY
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.user_message(),
            kind: self.kind(),
        })
    }
}

/// Bodies the JSON extractor rejects (wrong field types, malformed JSON)
/// answer with the same `{error, kind}` shape as every other validation error.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected JSON body on {}: {}", req.path(), err);
    QrError::invalid_value("body", err.to_string()).into()
}
