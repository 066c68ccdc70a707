use actix_web::{HttpResponse, web};
use log::{debug, info, warn};

use crate::errors::QrError;
use crate::models::render::{RenderFormat, RenderRequest};
use crate::state::app_state::AppState;
use crate::state::submissions::SubmissionOutcome;
use crate::structs::qr_request::{CreatedQr, QrForm, SubmissionResponse, SubmitRequest};
use crate::utils::render_url::compose_redirect;
use crate::utils::request_builder::build;
use crate::utils::style_encoder::{canonicalize, preview_descriptor};

/// Show the creation payload a form would produce, without sending it
pub async fn build_payload(web::Json(form): web::Json<QrForm>) -> Result<HttpResponse, QrError> {
    let request = build(&form)?;
    Ok(HttpResponse::Ok().json(request))
}

/// Create a QR code and return its render and redirect URLs
pub async fn submit_qr(
    app_state: web::Data<AppState>,
    web::Json(req): web::Json<SubmitRequest>,
) -> Result<HttpResponse, QrError> {
    // Both halves are validated before anything goes over the wire
    let creation_request = build(&req.form)?;
    let style = canonicalize(&req.style)?;

    let sequence = app_state.submissions.begin();
    debug!(
        "Submission #{} started ({} content)",
        sequence,
        creation_request.content_type()
    );

    let result = match app_state.creation.create(&creation_request).await {
        Ok(result) => result,
        Err(e) => {
            warn!("Submission #{} failed: {}", sequence, e);
            app_state.submissions.publish(
                sequence,
                SubmissionOutcome::Failed {
                    message: e.user_message(),
                },
            );
            return Err(e);
        }
    };

    let render_url =
        RenderRequest::new(&result, &style, RenderFormat::Png).url(&app_state.render);
    let svg_url = RenderRequest::new(&result, &style, RenderFormat::Svg).url(&app_state.render);
    let redirect_url = compose_redirect(&app_state.redirect_url, &result.slug)?;

    let qr = CreatedQr {
        slug: result.slug,
        render_url: render_url.to_string(),
        svg_url: svg_url.to_string(),
        redirect_url: redirect_url.to_string(),
        preview: preview_descriptor(&style),
    };

    let current = app_state
        .submissions
        .publish(sequence, SubmissionOutcome::Created(qr.clone()));
    if current {
        info!("Submission #{} created slug {}", sequence, qr.slug);
    } else {
        debug!("Submission #{} superseded by a newer one, not displayed", sequence);
    }

    Ok(HttpResponse::Created().json(SubmissionResponse {
        sequence,
        qr,
        current,
    }))
}

/// Latest resolved submission, created or failed
pub async fn latest_submission(app_state: web::Data<AppState>) -> HttpResponse {
    match app_state.submissions.latest() {
        Some(published) => HttpResponse::Ok().json(published),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "error": "No submission yet"
        })),
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::qr_error::CREATION_FAILED_MESSAGE;
    use crate::routes::init_routes;
    use crate::test_support::{FakeCreationService, app_state, unreachable_endpoint};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn payload_dry_run_returns_creation_request() {
        let app = test::init_service(
            App::new()
                .app_data(app_state(unreachable_endpoint()))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/qr/payload")
            .set_json(json!({ "title": "Notes", "type": "text", "content": "hi", "ssid": "stale" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({ "title": "Notes", "type": "TEXT", "note": "", "data": { "content": "hi" } })
        );
    }

    #[actix_web::test]
    async fn non_string_type_is_an_invalid_type() {
        let fake = FakeCreationService::start(200, r#"{"slug":"never"}"#).await;
        let app = test::init_service(
            App::new()
                .app_data(app_state(fake.endpoint.clone()))
                .configure(init_routes),
        )
        .await;

        for content_type in [json!(5), json!(["URL"]), json!({ "name": "URL" })] {
            let req = test::TestRequest::post()
                .uri("/api/qr/payload")
                .set_json(json!({ "title": "T", "type": content_type.clone(), "content": "hi" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["kind"], "InvalidType", "{content_type}");
        }

        let req = test::TestRequest::post()
            .uri("/api/qr/submit")
            .set_json(json!({ "form": { "title": "T", "type": 5, "content": "hi" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "InvalidType");
        assert!(fake.received().is_empty());
    }

    #[actix_web::test]
    async fn mistyped_fields_answer_with_an_error_kind() {
        let fake = FakeCreationService::start(200, r#"{"slug":"never"}"#).await;
        let app = test::init_service(
            App::new()
                .app_data(app_state(fake.endpoint.clone()))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/qr/submit")
            .set_json(json!({
                "form": { "title": 7, "type": "TEXT", "content": "hi" },
                "style": { "scale": "big" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "InvalidValue");
        assert!(fake.received().is_empty());

        let req = test::TestRequest::post()
            .uri("/api/qr/payload")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["kind"], "InvalidValue");
    }

    #[actix_web::test]
    async fn submit_url_end_to_end() {
        let fake = FakeCreationService::start(200, r#"{"slug":"abc123"}"#).await;
        let app = test::init_service(
            App::new()
                .app_data(app_state(fake.endpoint.clone()))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/qr/submit")
            .set_json(json!({
                "form": { "title": "Site", "type": "URL", "targetUrl": "https://example.com" },
                "style": { "darkColor": "#000000", "lightColor": "#ffffff", "gradientEnabled": false }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["sequence"], 1);
        assert_eq!(body["slug"], "abc123");
        assert_eq!(body["current"], true);
        assert_eq!(body["redirectUrl"], "http://localhost:8000/r/abc123");
        assert_eq!(body["preview"]["kind"], "solid");

        let render_url = body["renderUrl"].as_str().unwrap();
        assert!(render_url.starts_with("http://localhost:8000/qr.png?"));
        assert!(render_url.contains("slug=abc123"));
        assert!(render_url.contains("dark_color=%23000000"));
        assert!(render_url.contains("gradient=false"));

        let svg_url = body["svgUrl"].as_str().unwrap();
        assert!(svg_url.starts_with("http://localhost:8000/qr.svg?"));
        assert_eq!(
            svg_url.split_once('?').map(|(_, query)| query),
            render_url.split_once('?').map(|(_, query)| query)
        );

        assert_eq!(
            fake.received(),
            vec![json!({
                "title": "Site",
                "type": "URL",
                "note": "",
                "targetUrl": "https://example.com"
            })]
        );

        let req = test::TestRequest::get().uri("/api/qr/latest").to_request();
        let latest: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(latest["status"], "created");
        assert_eq!(latest["sequence"], 1);
        assert_eq!(latest["slug"], "abc123");
    }

    #[actix_web::test]
    async fn submit_after_switching_type_sends_only_active_fields() {
        let fake = FakeCreationService::start(200, r#"{"slug":"txt1"}"#).await;
        let app = test::init_service(
            App::new()
                .app_data(app_state(fake.endpoint.clone()))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/qr/submit")
            .set_json(json!({
                "form": {
                    "title": "Flyer",
                    "type": "TEXT",
                    "content": "See you there",
                    "ssid": "Home",
                    "password": "secret"
                }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let received = fake.received();
        assert_eq!(received[0]["data"], json!({ "content": "See you there" }));
    }

    #[actix_web::test]
    async fn invalid_input_never_reaches_the_service() {
        let fake = FakeCreationService::start(200, r#"{"slug":"never"}"#).await;
        let app = test::init_service(
            App::new()
                .app_data(app_state(fake.endpoint.clone()))
                .configure(init_routes),
        )
        .await;

        let cases = [
            (
                json!({ "form": { "title": "", "type": "URL", "targetUrl": "https://example.com" } }),
                "MissingField",
            ),
            (
                json!({ "form": { "title": "Site", "type": "URL", "targetUrl": "not-a-url" } }),
                "InvalidUrl",
            ),
            (
                json!({
                    "form": { "title": "Site", "type": "URL", "targetUrl": "https://example.com" },
                    "style": { "darkColor": "black" }
                }),
                "InvalidColor",
            ),
        ];

        for (payload, kind) in cases {
            let req = test::TestRequest::post()
                .uri("/api/qr/submit")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["kind"], kind);
        }

        assert!(fake.received().is_empty());

        let req = test::TestRequest::get().uri("/api/qr/latest").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn creation_failure_is_one_user_message() {
        let fake = FakeCreationService::start(503, "unavailable").await;
        let app = test::init_service(
            App::new()
                .app_data(app_state(fake.endpoint.clone()))
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/qr/submit")
            .set_json(json!({
                "form": { "title": "Notes", "type": "TEXT", "content": "hi" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], CREATION_FAILED_MESSAGE);
        assert_eq!(body["kind"], "TransportFailure");
        assert_eq!(fake.received().len(), 1);

        let req = test::TestRequest::get().uri("/api/qr/latest").to_request();
        let latest: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(latest["status"], "failed");
        assert_eq!(latest["message"], CREATION_FAILED_MESSAGE);
    }
}
