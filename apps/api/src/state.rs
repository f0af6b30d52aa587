use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::Completer;

/// Shared application state injected into all route handlers via Axum
/// extractors. Built once at startup and cloned per request; nothing in it
/// is mutated after construction.
#[derive(Clone)]
pub struct AppState {
    /// Completion client behind the `Completer` seam so tests can swap in
    /// a stub without a live endpoint.
    pub llm: Arc<dyn Completer>,
    /// Read-only process configuration. Resolved once from the environment.
    #[allow(dead_code)]
    pub config: Config,
}
