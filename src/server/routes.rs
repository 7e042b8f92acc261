use actix_web::{web, HttpResponse, Responder};

use crate::classifier::taxonomy;
use crate::error::AppError;
use crate::pipeline::TrademarkPipeline;
use crate::server::models::{HealthResponse, TrademarkCheckRequest};
use crate::upload::ImageUpload;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/api/design-codes", web::get().to(design_codes))
        .route("/api/uspto/trademark", web::post().to(check_trademark));
}

async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok())
}

async fn design_codes() -> impl Responder {
    HttpResponse::Ok().json(taxonomy())
}

async fn check_trademark(
    pipeline: web::Data<TrademarkPipeline>,
    request: web::Json<TrademarkCheckRequest>,
) -> Result<HttpResponse, AppError> {
    let upload = ImageUpload::from_data_url(&request.image).inspect_err(|error| {
        tracing::warn!(%error, "Rejected upload");
    })?;

    match pipeline.check(upload).await {
        Ok(report) => Ok(HttpResponse::Ok().json(report)),
        Err(error) => {
            tracing::error!(%error, "Trademark check failed");
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use super::*;
    use crate::domain::{DetectedFeature, FeatureSource};
    use crate::server::json_config;
    use crate::test_support::{StaticRegistry, StaticVision};
    use crate::vision::VisionAnalysis;

    fn pipeline(vision: StaticVision) -> TrademarkPipeline {
        TrademarkPipeline::builder()
            .vision(Arc::new(vision))
            .registry(Arc::new(
                StaticRegistry::new().with_record("03.01.08", "<case-status/>"),
            ))
            .build()
            .unwrap()
    }

    fn dog_vision() -> StaticVision {
        StaticVision::new(VisionAnalysis {
            logos: vec![DetectedFeature::labelled("Good Boy Co")
                .with_source(FeatureSource::Logo)
                .with_confidence(0.75)],
            labels: vec![DetectedFeature::labelled("Golden Retriever dog detected")],
            ..Default::default()
        })
    }

    macro_rules! app {
        ($vision:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(pipeline($vision)))
                    .app_data(json_config(1024 * 1024))
                    .configure(configure),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_health() {
        let app = app!(dog_vision());
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_check_trademark() {
        let app = app!(dog_vision());
        let req = test::TestRequest::post()
            .uri("/api/uspto/trademark")
            .set_json(json!({"image": "data:image/png;base64,AAAA"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body["logoDetection"],
            json!([{"name": "Good Boy Co", "confidence": 0.75}])
        );
        assert_eq!(
            body["features"],
            json!(["Good Boy Co", "Golden Retriever dog detected"])
        );
        assert!(body["designCodes"]
            .as_array()
            .unwrap()
            .contains(&json!("03.01.08")));
        assert_eq!(
            body["trademarkResults"],
            json!([{"code": "03.01.08", "result": "<case-status/>"}])
        );
    }

    #[actix_web::test]
    async fn test_invalid_upload_is_bad_request() {
        let app = app!(dog_vision());
        let req = test::TestRequest::post()
            .uri("/api/uspto/trademark")
            .set_json(json!({"image": "not-a-data-url"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("data URL"));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app!(dog_vision());
        let req = test::TestRequest::post()
            .uri("/api/uspto/trademark")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"picture\": 1}")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_vision_failure_is_internal_error() {
        let app = app!(StaticVision::failing("quota exceeded"));
        let req = test::TestRequest::post()
            .uri("/api/uspto/trademark")
            .set_json(json!({"image": "data:image/png;base64,AAAA"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("quota exceeded"));
    }

    #[actix_web::test]
    async fn test_design_codes_listing() {
        let app = app!(dog_vision());
        let req = test::TestRequest::get().uri("/api/design-codes").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["animals"]["prefix"], "03");
        assert_eq!(body["colors"]["entries"][0]["code"], "29.01.01");
    }
}
