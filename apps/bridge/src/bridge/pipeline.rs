//! The bridge pipeline: credential check -> prompt -> one generation call -> PDF.
//!
//! Either everything succeeds (report text plus document) or the caller gets a single
//! `AppError`. The generator is called at most once per run and never when the
//! credential is missing.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::bridge::builder::{build_prompt, matched_rule, ROLE_RULES};
use crate::bridge::generator::ReportGenerator;
use crate::bridge::session::SessionInput;
use crate::errors::AppError;
use crate::llm_client::WebSource;
use crate::render::{render_report, ReportDocument};

/// Everything one successful run produces.
#[derive(Debug, Clone)]
pub struct BridgeReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub prompt: String,
    pub report_text: String,
    pub sources: Vec<WebSource>,
    pub document: ReportDocument,
}

pub async fn run_bridge(
    generator: &dyn ReportGenerator,
    input: &SessionInput,
) -> Result<BridgeReport, AppError> {
    let credential = input.credential()?;

    let run_id = Uuid::new_v4();
    let clause = matched_rule(ROLE_RULES, &input.current_role).map(|rule| rule.name);
    info!(
        %run_id,
        current_role = %input.current_role,
        target_role = %input.target_role,
        clause = clause.unwrap_or("none"),
        "Building career bridge"
    );

    let prompt = build_prompt(&input.current_role, &input.target_role);
    let generation = generator.generate(credential, &prompt).await?;
    info!(
        %run_id,
        report_chars = generation.text.chars().count(),
        sources = generation.sources.len(),
        "Generation complete"
    );

    let document = render_document(generation.text.clone()).await?;

    Ok(BridgeReport {
        run_id,
        generated_at: Utc::now(),
        prompt,
        report_text: generation.text,
        sources: generation.sources,
        document,
    })
}

/// Renders report text into the PDF download on the blocking pool.
pub async fn render_document(report_text: String) -> Result<ReportDocument, AppError> {
    let document = tokio::task::spawn_blocking(move || render_report(&report_text))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;
    Ok(document)
}
