//! The report generator seam.
//!
//! `AppState` holds an `Arc<dyn ReportGenerator>`. Production uses `GeminiClient`;
//! tests swap in spies that count calls or fail on demand.

use async_trait::async_trait;

use crate::bridge::session::Credential;
use crate::llm_client::{GeminiClient, LlmError, WebSource};

/// Result of one successful generation call.
#[derive(Debug, Clone, Default)]
pub struct Generation {
    pub text: String,
    pub sources: Vec<WebSource>,
}

#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate(&self, credential: &Credential, prompt: &str)
        -> Result<Generation, LlmError>;
}

#[async_trait]
impl ReportGenerator for GeminiClient {
    async fn generate(
        &self,
        credential: &Credential,
        prompt: &str,
    ) -> Result<Generation, LlmError> {
        let response = self.generate_content(credential.expose(), prompt).await?;
        Ok(Generation {
            text: response.text(),
            sources: response.sources(),
        })
    }
}
