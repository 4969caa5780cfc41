// Report rendering: lossy Latin-1 transcode, then an A4 Helvetica PDF via lopdf.
// Rendering is CPU-bound; async callers run it inside tokio::task::spawn_blocking.

pub mod pdf;
pub mod transcode;

use bytes::Bytes;
use thiserror::Error;

use crate::layout::default_page_config;

/// File name offered for the downloaded report.
pub const REPORT_FILE_NAME: &str = "Career_Pivot_Plan.pdf";
pub const PDF_MIME_TYPE: &str = "application/pdf";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A finished report document, ready to be offered as a download.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub file_name: &'static str,
    pub mime_type: &'static str,
    pub bytes: Bytes,
}

/// Renders `body` into the downloadable report on the default A4 page.
pub fn render_report(body: &str) -> Result<ReportDocument, RenderError> {
    let bytes = pdf::render_report_pdf(body, &default_page_config())?;
    Ok(ReportDocument {
        file_name: REPORT_FILE_NAME,
        mime_type: PDF_MIME_TYPE,
        bytes: Bytes::from(bytes),
    })
}
