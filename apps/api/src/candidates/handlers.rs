use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::candidates::search::{parse_search_terms, search_candidates, CandidateMatch};
use crate::candidates::tips::generate_booster_tips;
use crate::candidates::writer::{submit_candidate, CandidateSubmission, SUBMIT_SUCCESS_MESSAGE};
use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub serial_no: u64,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub candidate: CandidateMatch,
    pub booster_tips: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub search_terms: Vec<String>,
    pub total: usize,
    pub students: Vec<SearchResult>,
}

/// POST /api/v1/candidates
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(submission): Json<CandidateSubmission>,
) -> Result<Json<SubmitResponse>, AppError> {
    let serial_no = submit_candidate(state.store.as_ref(), submission).await?;
    Ok(Json(SubmitResponse {
        status: "success",
        message: SUBMIT_SUCCESS_MESSAGE,
        serial_no,
    }))
}

/// GET /api/v1/candidates
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRecord>>, AppError> {
    Ok(Json(state.store.all().await?))
}

/// GET /api/v1/candidates/search?q=python,football
///
/// Each hit is annotated with its booster tips.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    if params.q.is_empty() {
        return Err(AppError::Validation("Please enter search terms".to_string()));
    }

    let students: Vec<SearchResult> = search_candidates(state.store.as_ref(), &params.q)
        .await
        .into_iter()
        .map(|candidate| {
            let booster_tips = generate_booster_tips(&candidate);
            SearchResult {
                candidate,
                booster_tips,
            }
        })
        .collect();

    Ok(Json(SearchResponse {
        search_terms: parse_search_terms(&params.q),
        total: students.len(),
        students,
    }))
}
