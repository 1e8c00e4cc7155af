use std::sync::Arc;

use crate::auth::SessionStore;
use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::mindset::model::MindsetClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Candidate sheet. Default: CsvCandidateStore at CANDIDATES_CSV.
    pub store: Arc<dyn CandidateStore>,
    /// Loaded once at startup and never reloaded.
    pub mindset: Arc<dyn MindsetClassifier>,
    pub sessions: Arc<SessionStore>,
    pub config: Config,
}
