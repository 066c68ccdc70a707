use url::Url;

use crate::clients::CreationClient;
use crate::config::AppConfig;
use crate::models::render::RenderEndpoints;
use crate::state::submissions::SubmissionLedger;

pub struct AppState {
    pub creation: CreationClient,
    pub render: RenderEndpoints,
    pub redirect_url: Url,
    pub submissions: SubmissionLedger,
}

impl AppState {
    pub fn new(config: &AppConfig) -> reqwest::Result<Self> {
        Ok(Self {
            creation: CreationClient::new(config.creation_url.clone(), config.service_timeout)?,
            render: RenderEndpoints {
                png: config.render_url.clone(),
                svg: config.render_svg_url.clone(),
            },
            redirect_url: config.redirect_url.clone(),
            submissions: SubmissionLedger::new(),
        })
    }
}
