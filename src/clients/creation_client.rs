use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;

use crate::errors::QrError;
use crate::models::creation::{CreationRequest, CreationResult};

/// Client for the slug-issuing service (`POST /api/qr`).
#[derive(Debug, Clone)]
pub struct CreationClient {
    endpoint: Url,
    http: Client,
}

impl CreationClient {
    pub fn new(endpoint: Url, timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, http })
    }

    /// Send one creation request. Failures are returned as-is, never retried.
    pub async fn create(&self, request: &CreationRequest) -> Result<CreationResult, QrError> {
        debug!(
            "POST {} ({} content)",
            self.endpoint,
            request.content_type()
        );

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| QrError::TransportFailure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QrError::TransportFailure(format!(
                "creation service answered {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QrError::TransportFailure(e.to_string()))?;

        parse_creation_result(&body)
    }
}

pub fn parse_creation_result(body: &[u8]) -> Result<CreationResult, QrError> {
    let result: CreationResult = serde_json::from_slice(body)
        .map_err(|e| QrError::UnexpectedResponseShape(e.to_string()))?;

    if result.slug.trim().is_empty() {
        return Err(QrError::UnexpectedResponseShape("empty slug".to_string()));
    }

    Ok(result)
}
