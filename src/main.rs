use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware::Logger, web};
use anyhow::Context;
use dotenv::dotenv;
use env_logger::Env;
use kyuar::config::AppConfig;
use kyuar::routes::init_routes;
use kyuar::state::app_state::AppState;
use log::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Shared by every worker so submission ordering is global
    let app_state = web::Data::new(
        AppState::new(&config).context("Failed to build the HTTP client")?,
    );

    info!(
        "Creating QR codes through {}, rendering at {} and {}",
        config.creation_url, config.render_url, config.render_svg_url
    );

    let allowed_origins = config.allowed_origins.clone();
    HttpServer::new(move || {
        // Create a logger with a custom format instead
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        let cors = allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![http::header::ACCEPT])
            .allowed_header(http::header::CONTENT_TYPE)
            .max_age(3600);
        App::new()
            .wrap(logger)
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(init_routes)
    })
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?
    .run()
    .await
    .context("Server error")
}
