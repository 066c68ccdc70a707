//! Fake creation service for tests, served by a real actix server on a random port.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};

use actix_web::{App, HttpResponse, HttpServer, http::StatusCode, web};
use serde_json::Value;
use url::Url;

use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[derive(Clone)]
struct Canned {
    status: u16,
    body: String,
    received: Arc<Mutex<Vec<Value>>>,
}

async fn canned_reply(canned: web::Data<Canned>, web::Json(payload): web::Json<Value>) -> HttpResponse {
    canned.received.lock().unwrap().push(payload);

    HttpResponse::build(StatusCode::from_u16(canned.status).unwrap())
        .content_type("application/json")
        .body(canned.body.clone())
}

pub struct FakeCreationService {
    pub endpoint: Url,
    received: Arc<Mutex<Vec<Value>>>,
}

impl FakeCreationService {
    /// Answer every `POST /api/qr` with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let canned = web::Data::new(Canned {
            status,
            body: body.to_string(),
            received: received.clone(),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(canned.clone())
                .route("/api/qr", web::post().to(canned_reply))
        })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            endpoint: Url::parse(&format!("http://{addr}/api/qr")).unwrap(),
            received,
        }
    }

    /// Payloads received so far, in arrival order.
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}

/// An endpoint on a port nothing listens on.
pub fn unreachable_endpoint() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/api/qr")).unwrap()
}

/// Application state talking to `creation_url`, everything else at defaults.
pub fn app_state(creation_url: Url) -> web::Data<AppState> {
    let mut config = AppConfig::from_lookup(|_| None).unwrap();
    config.creation_url = creation_url;
    web::Data::new(AppState::new(&config).unwrap())
}
