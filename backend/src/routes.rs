use actix_files::Files;
use actix_web::web;

use crate::analysis;
use crate::auth;
use crate::contact;
use crate::error::ApiError;

/// Wires the four mock API routes and the compiled frontend bundle.
pub fn configure_routes(cfg: &mut web::ServiceConfig, frontend_dir: String) {
    cfg.app_data(json_config())
        .service(web::resource("/api/waste/analyze").route(web::post().to(analysis::routes::analyze)))
        .service(web::resource("/api/auth/login").route(web::post().to(auth::routes::login)))
        .service(web::resource("/api/auth/register").route(web::post().to(auth::routes::register)))
        .service(web::resource("/api/contact").route(web::post().to(contact::routes::submit)))
        .service(Files::new("/", frontend_dir).index_file("index.html"));
}

/// Malformed JSON bodies come back as 400 in the same `{error}` shape the
/// field validation uses, not actix's plain-text default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::BadBody(err.to_string()).into())
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use shared::ErrorResponse;

    use super::*;

    #[actix_web::test]
    async fn malformed_json_is_a_400_with_error_shape() {
        let app = test::init_service(App::new().app_data(json_config()).service(
            web::resource("/api/contact").route(web::post().to(crate::contact::routes::submit)),
        ))
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.starts_with("malformed request body"));
    }
}
