use std::sync::Arc;

use crate::bridge::generator::ReportGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-user data: session input travels with each request.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generator. Default: `GeminiClient`.
    pub generator: Arc<dyn ReportGenerator>,
}
