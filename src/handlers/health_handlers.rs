use actix_web::HttpResponse;

// Nothing to ping, the service keeps no connections open
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "success": true }))
}
