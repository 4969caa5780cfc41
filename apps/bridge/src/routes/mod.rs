pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::bridge::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML form surface
        .route("/", get(handlers::handle_index))
        .route("/bridge", post(handlers::handle_bridge_form))
        .route("/bridge/report.pdf", post(handlers::handle_report_download))
        // JSON API
        .route("/api/v1/bridge", post(handlers::handle_bridge))
        .route("/api/v1/report/pdf", post(handlers::handle_report_pdf))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::pipeline::tests::SpyGenerator;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use bytes::Bytes;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(spy: &Arc<SpyGenerator>) -> Router {
        build_router(AppState {
            generator: spy.clone(),
        })
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    async fn body_text(response: Response) -> String {
        String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let spy = Arc::new(SpyGenerator::replying("unused"));
        let response = app(&spy)
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "gemini-3-pro-preview");
    }

    #[tokio::test]
    async fn test_index_serves_form() {
        let spy = Arc::new(SpyGenerator::replying("unused"));
        let response = app(&spy)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("name=\"credential\""));
        assert!(html.contains("Build My Bridge"));
        assert_eq!(spy.call_count(), 0);
    }

    #[tokio::test]
    async fn test_form_missing_credential_shows_error_without_call() {
        let spy = Arc::new(SpyGenerator::replying("unused"));
        let response = app(&spy)
            .oneshot(form_request(
                "/bridge",
                "credential=&current_role=Nurse&target_role=Product+Manager",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let html = body_text(response).await;
        assert!(html.contains("Please enter your API Key to begin."));
        assert!(!html.contains("/bridge/report.pdf"));
        assert!(html.contains("value=\"Nurse\""));
        assert_eq!(spy.call_count(), 0);
    }

    #[tokio::test]
    async fn test_form_generation_failure_shows_one_error_and_no_download() {
        let spy = Arc::new(SpyGenerator::failing());
        let response = app(&spy)
            .oneshot(form_request(
                "/bridge",
                "credential=key&current_role=Sales+Rep&target_role=RevOps",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = body_text(response).await;
        assert_eq!(html.matches("role=\"alert\"").count(), 1);
        assert!(html.contains("Check if your API Key is valid and active."));
        assert!(html.contains("Resource has been exhausted"));
        assert!(!html.contains("Download Full PDF Roadmap"));
        assert_eq!(spy.call_count(), 1);
    }

    #[tokio::test]
    async fn test_form_success_shows_report_and_download() {
        let spy = Arc::new(SpyGenerator::replying("**Acme EdTech** is hiring."));
        let response = app(&spy)
            .oneshot(form_request(
                "/bridge",
                "credential=key&current_role=K-12+Teacher&target_role=EdTech+Architect",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Analysis Complete!"));
        assert!(html.contains("<strong>Acme EdTech</strong> is hiring."));
        assert!(html.contains("action=\"/bridge/report.pdf\""));
        assert!(html.contains("https://jobs.example.com"));
        assert!(!html.contains("value=\"key\""), "credential must not be echoed");
        assert_eq!(spy.call_count(), 1);
    }

    #[tokio::test]
    async fn test_form_download_returns_pdf_without_generation() {
        let spy = Arc::new(SpyGenerator::replying("unused"));
        let response = app(&spy)
            .oneshot(form_request(
                "/bridge/report.pdf",
                "report_text=Week+1%3A+learn+Figma",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/pdf"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Career_Pivot_Plan.pdf\""
        );
        let bytes = body_bytes(response).await;
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(spy.call_count(), 0);
    }

    #[tokio::test]
    async fn test_api_bridge_success() {
        let spy = Arc::new(SpyGenerator::replying("Roadmap text"));
        let response = app(&spy)
            .oneshot(json_request(
                "/api/v1/bridge",
                serde_json::json!({
                    "credential": "key",
                    "current_role": "Registered Nurse",
                    "target_role": "Product Manager"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["report_text"], "Roadmap text");
        assert_eq!(body["document"]["file_name"], "Career_Pivot_Plan.pdf");
        assert_eq!(body["document"]["mime_type"], "application/pdf");
        assert!(body["document"]["byte_len"].as_u64().unwrap() > 0);
        assert!(body["prompt"].as_str().unwrap().contains("clinical triage"));
        assert_eq!(body["sources"][0]["uri"], "https://jobs.example.com");
        assert!(body.get("credential").is_none());
    }

    #[tokio::test]
    async fn test_api_bridge_missing_credential() {
        let spy = Arc::new(SpyGenerator::replying("unused"));
        let response = app(&spy)
            .oneshot(json_request(
                "/api/v1/bridge",
                serde_json::json!({"current_role": "Nurse", "target_role": "PM"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["error"]["code"], "MISSING_CREDENTIAL");
        assert_eq!(spy.call_count(), 0);
    }

    #[tokio::test]
    async fn test_api_report_pdf_empty_text() {
        let spy = Arc::new(SpyGenerator::replying("unused"));
        let response = app(&spy)
            .oneshot(json_request(
                "/api/v1/report/pdf",
                serde_json::json!({"report_text": ""}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = body_bytes(response).await;
        assert!(bytes.starts_with(b"%PDF"));
    }
}
