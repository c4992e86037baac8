use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::info;
use shared::validate::required;
use shared::{AuthResponse, AuthUser, LoginRequest, RegisterRequest};
use uuid::Uuid;

use crate::error::ApiError;

/// Demo credential: looks like a bearer token, carries no claims. Nothing
/// verifies it anywhere.
fn demo_token(user_id: &Uuid) -> String {
    format!("demo.{}.{}", user_id.simple(), Utc::now().timestamp())
}

/// POST /api/auth/login. No credential store exists; any non-empty pair is
/// accepted and answered with a static demo identity.
pub async fn login(body: web::Json<LoginRequest>) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    if !required(&req.email) || !required(&req.password) {
        return Err(ApiError::Validation("Email and password are required"));
    }

    let user = AuthUser {
        id: Uuid::new_v4(),
        name: "Demo User".to_string(),
        email: req.email,
        phone: None,
    };
    info!("Demo login issued for {}", user.email);

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        token: demo_token(&user.id),
        user,
    }))
}

/// POST /api/auth/register. Echoes the submitted profile back with a demo
/// token; nothing is stored.
pub async fn register(body: web::Json<RegisterRequest>) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();
    let all_present = [&req.name, &req.email, &req.phone, &req.password]
        .into_iter()
        .all(|field| required(field));
    if !all_present {
        return Err(ApiError::Validation("All fields are required"));
    }

    let user = AuthUser {
        id: Uuid::new_v4(),
        name: req.name,
        email: req.email,
        phone: Some(req.phone),
    };
    info!("Demo registration for {} <{}>", user.name, user.email);

    Ok(HttpResponse::Ok().json(AuthResponse {
        success: true,
        token: demo_token(&user.id),
        user,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::json;
    use shared::{AuthResponse, ErrorResponse};

    use super::*;

    macro_rules! auth_app {
        () => {
            test::init_service(
                App::new()
                    .service(web::resource("/api/auth/login").route(web::post().to(login)))
                    .service(web::resource("/api/auth/register").route(web::post().to(register))),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn login_rejects_missing_password() {
        let app = auth_app!();
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "a@a.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Email and password are required");
    }

    #[actix_web::test]
    async fn login_succeeds_with_any_credentials() {
        let app = auth_app!();
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "a@a.com", "password": "hunter22" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: AuthResponse = test::read_body_json(resp).await;
        assert!(body.success);
        assert_eq!(body.user.email, "a@a.com");
        assert!(!body.token.is_empty());
    }

    #[actix_web::test]
    async fn register_requires_every_field() {
        let app = auth_app!();
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({ "name": "A", "email": "a@a.com", "password": "longenough" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "All fields are required");
    }

    #[actix_web::test]
    async fn register_echoes_profile_with_token() {
        let app = auth_app!();
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "name": "Aisha",
                "email": "aisha@relief.example.org",
                "phone": "5551234567",
                "password": "longenough"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: AuthResponse = test::read_body_json(resp).await;
        assert!(body.success);
        assert_eq!(body.user.name, "Aisha");
        assert_eq!(body.user.phone.as_deref(), Some("5551234567"));
        assert!(body.token.starts_with("demo."));
    }

    #[actix_web::test]
    async fn blank_fields_count_as_missing() {
        let app = auth_app!();
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "   ", "password": "hunter22" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
