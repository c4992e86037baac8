use actix_web::{web, HttpResponse};
use log::info;
use shared::AnalyzeResponse;

use super::engine::WasteClassifier;

/// POST /api/waste/analyze. The request body, if any, is ignored; the demo
/// classifier answers with canned results after its simulated delay.
pub async fn analyze(classifier: web::Data<WasteClassifier>) -> HttpResponse {
    let results = classifier.classify().await;
    info!("Waste analysis completed: {}", results.waste_type);
    HttpResponse::Ok().json(AnalyzeResponse {
        success: true,
        results,
    })
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use shared::AnalyzeResponse;

    use super::*;

    #[actix_web::test]
    async fn analyze_returns_canned_results_without_a_body() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(WasteClassifier::new(0, 0)))
                .service(web::resource("/api/waste/analyze").route(web::post().to(analyze))),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/waste/analyze")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: AnalyzeResponse = test::read_body_json(resp).await;
        assert!(body.success);
        assert_eq!(body.results.waste_type, "Construction Debris");
        assert_eq!(body.results.materials.len(), 5);
    }
}
