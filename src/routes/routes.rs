use actix_web::web;

use crate::errors::qr_error::json_error_handler;
use crate::handlers::health_handlers::health_check;
use crate::handlers::qr_handlers::{build_payload, latest_submission, submit_qr};
use crate::handlers::style_handlers::preview_style;

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health/check", web::get().to(health_check))
            // Local only, these never call the QR service
            .route("/qr/payload", web::post().to(build_payload))
            .route("/style/preview", web::post().to(preview_style))
            .route("/qr/submit", web::post().to(submit_qr))
            .route("/qr/latest", web::get().to(latest_submission)),
    );
}
