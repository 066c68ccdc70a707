//! Runtime configuration, read from the environment (and `.env`) at startup.
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Bind address | `127.0.0.1` |
//! | `PORT` | Bind port | `8080` |
//! | `QR_SERVICE_URL` | Base URL of the QR service | `http://localhost:8000` |
//! | `QR_RENDER_URL` | PNG rendering endpoint | `{QR_SERVICE_URL}/qr.png` |
//! | `QR_RENDER_SVG_URL` | SVG rendering endpoint | `{QR_SERVICE_URL}/qr.svg` |
//! | `QR_REDIRECT_URL` | Redirect prefix | `{QR_SERVICE_URL}/r/` |
//! | `QR_SERVICE_TIMEOUT_SECS` | Timeout of the creation call | `10` |
//! | `ALLOWED_ORIGINS` | Comma-separated CORS origins | `http://localhost:5173,http://localhost:4173` |

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
// Vite dev server and preview ports
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:4173";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `POST` target for creation requests.
    pub creation_url: Url,
    pub render_url: Url,
    pub render_svg_url: Url,
    pub redirect_url: Url,
    pub service_timeout: Duration,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port: {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let service_raw = var("QR_SERVICE_URL").unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());
        let service_url = as_base(parse_service_url("QR_SERVICE_URL", &service_raw)?);
        let creation_url = service_url
            .join("api/qr")
            .context("QR_SERVICE_URL cannot be extended with /api/qr")?;

        let render_url = match var("QR_RENDER_URL") {
            Some(raw) => parse_service_url("QR_RENDER_URL", &raw)?,
            None => service_url
                .join("qr.png")
                .context("QR_SERVICE_URL cannot be extended with /qr.png")?,
        };
        let render_svg_url = match var("QR_RENDER_SVG_URL") {
            Some(raw) => parse_service_url("QR_RENDER_SVG_URL", &raw)?,
            None => service_url
                .join("qr.svg")
                .context("QR_SERVICE_URL cannot be extended with /qr.svg")?,
        };
        let redirect_url = match var("QR_REDIRECT_URL") {
            Some(raw) => parse_service_url("QR_REDIRECT_URL", &raw)?,
            None => service_url
                .join("r/")
                .context("QR_SERVICE_URL cannot be extended with /r/")?,
        };

        let timeout_secs = match var("QR_SERVICE_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("QR_SERVICE_TIMEOUT_SECS is not a number: {raw:?}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            host,
            port,
            creation_url,
            render_url,
            render_svg_url,
            redirect_url,
            service_timeout: Duration::from_secs(timeout_secs),
            allowed_origins,
        })
    }
}

fn parse_service_url(name: &str, raw: &str) -> Result<Url> {
    let url =
        Url::parse(raw.trim()).with_context(|| format!("{name} is not a valid URL: {raw:?}"))?;

    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        bail!("{name} must be an absolute http(s) URL, got {raw:?}");
    }

    Ok(url)
}

// Without a trailing slash, join() would replace the last path segment
fn as_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
