use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::mindset::features::{MindsetFeatures, MindsetInput};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub mindset: String,
}

/// POST /api/v1/mindset/predict
///
/// Unparsable inputs and model failures come back as 422, never as a crash.
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(input): Json<MindsetInput>,
) -> Result<Json<PredictResponse>, AppError> {
    let features = MindsetFeatures::from_input(&input)?;
    let mindset = state.mindset.predict(&features)?;
    info!("Predicted mindset '{mindset}'");
    Ok(Json(PredictResponse { mindset }))
}
