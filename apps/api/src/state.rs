use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ExtractionModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable for the lifetime of the process; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Extraction backend. `LlmClient` in production, a fake in tests.
    pub model: Arc<dyn ExtractionModel>,
    pub config: Config,
}
