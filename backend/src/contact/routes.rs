use actix_web::{web, HttpResponse};
use log::info;
use shared::validate::required;
use shared::{ContactRequest, ContactResponse};

use crate::error::ApiError;

/// POST /api/contact. Submissions are acknowledged and logged; nothing is
/// stored and no mail is sent.
pub async fn submit(body: web::Json<ContactRequest>) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    let all_present = [&req.name, &req.email, &req.subject, &req.message]
        .into_iter()
        .all(|field| required(field));
    if !all_present {
        return Err(ApiError::Validation("All fields are required"));
    }

    info!(
        "Contact form received from {} <{}>: {}",
        req.name, req.email, req.subject
    );

    Ok(HttpResponse::Ok().json(ContactResponse {
        success: true,
        message: "Your message has been received. We will get back to you soon.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::json;
    use shared::{ContactResponse, ErrorResponse};

    use super::*;

    macro_rules! contact_app {
        () => {
            test::init_service(
                App::new().service(web::resource("/api/contact").route(web::post().to(submit))),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn empty_body_is_rejected_with_a_message() {
        let app = contact_app!();
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(!body.error.is_empty());
    }

    #[actix_web::test]
    async fn full_submission_is_acknowledged() {
        let app = contact_app!();
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "A",
                "email": "a@a.com",
                "subject": "S",
                "message": "M"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: ContactResponse = test::read_body_json(resp).await;
        assert!(body.success);
        assert!(!body.message.is_empty());
    }

    #[actix_web::test]
    async fn one_missing_field_is_rejected() {
        let app = contact_app!();
        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({ "name": "A", "email": "a@a.com", "subject": "S" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
