use std::sync::Arc;

use crate::catalog::ProductCatalog;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::places::details::DetailsClient;
use crate::places::PlacesClient;
use crate::prospecting::classifier::BatchClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub places: PlacesClient,
    /// Details/reviews capability; `None` when GOOGLE_PLACES_API_KEY is unset.
    pub details: Option<DetailsClient>,
    /// LLM capability for pitch writing; `None` when ANTHROPIC_API_KEY is unset.
    pub llm: Option<LlmClient>,
    /// Batched prospect classifier; degrades to keyword filtering without a provider.
    pub classifier: Arc<BatchClassifier>,
    pub catalog: Arc<ProductCatalog>,
}
