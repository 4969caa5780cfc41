//! Axum route handlers for the bridge: the HTML form surface and the JSON API.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bridge::page::{render_page, PageOutcome, PageView};
use crate::bridge::pipeline::{render_document, run_bridge, BridgeReport};
use crate::bridge::session::SessionInput;
use crate::errors::AppError;
use crate::llm_client::WebSource;
use crate::render::ReportDocument;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ReportTextRequest {
    #[serde(default)]
    pub report_text: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentInfo {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub byte_len: usize,
}

#[derive(Debug, Serialize)]
pub struct BridgeResponse {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub prompt: String,
    pub report_text: String,
    pub sources: Vec<WebSource>,
    pub document: DocumentInfo,
}

impl From<BridgeReport> for BridgeResponse {
    fn from(report: BridgeReport) -> Self {
        BridgeResponse {
            run_id: report.run_id,
            generated_at: report.generated_at,
            prompt: report.prompt,
            report_text: report.report_text,
            sources: report.sources,
            document: DocumentInfo {
                file_name: report.document.file_name,
                mime_type: report.document.mime_type,
                byte_len: report.document.bytes.len(),
            },
        }
    }
}

fn pdf_response(document: ReportDocument) -> Response {
    (
        [
            (header::CONTENT_TYPE, document.mime_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.file_name),
            ),
        ],
        document.bytes,
    )
        .into_response()
}

// ────────────────────────────────────────────────────────────────────────────
// HTML surface
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&PageView::default()))
}

/// POST /bridge
///
/// Runs the pipeline for one button press. Failures render the same page with an
/// error banner and no download form.
pub async fn handle_bridge_form(
    State(state): State<AppState>,
    Form(input): Form<SessionInput>,
) -> (StatusCode, Html<String>) {
    let result = run_bridge(state.generator.as_ref(), &input).await;

    let (status, outcome) = match &result {
        Ok(report) => (StatusCode::OK, PageOutcome::Report(report)),
        Err(e) => {
            e.log();
            (e.status_and_code().0, PageOutcome::Error(e.user_message()))
        }
    };

    let page = render_page(&PageView {
        current_role: &input.current_role,
        target_role: &input.target_role,
        outcome: Some(outcome),
    });
    (status, Html(page))
}

/// POST /bridge/report.pdf
///
/// Renders the report text already shown on the page into the PDF download.
pub async fn handle_report_download(
    Form(request): Form<ReportTextRequest>,
) -> Result<Response, AppError> {
    let document = render_document(request.report_text).await?;
    Ok(pdf_response(document))
}

// ────────────────────────────────────────────────────────────────────────────
// JSON API
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/bridge
pub async fn handle_bridge(
    State(state): State<AppState>,
    Json(input): Json<SessionInput>,
) -> Result<Json<BridgeResponse>, AppError> {
    let report = run_bridge(state.generator.as_ref(), &input).await?;
    Ok(Json(report.into()))
}

/// POST /api/v1/report/pdf
pub async fn handle_report_pdf(
    Json(request): Json<ReportTextRequest>,
) -> Result<Response, AppError> {
    let document = render_document(request.report_text).await?;
    Ok(pdf_response(document))
}
