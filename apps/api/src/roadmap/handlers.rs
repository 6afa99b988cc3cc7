//! Axum route handler for roadmap generation.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::roadmap::generator::generate_roadmap;
use crate::roadmap::models::{RoadmapRequest, RoadmapResult};
use crate::state::AppState;

/// POST /generate-roadmap
///
/// Validates the three required fields, then asks the model for a roadmap.
/// Failures past validation follow the configured failure policy.
pub async fn handle_generate_roadmap(
    State(state): State<AppState>,
    payload: Result<Json<RoadmapRequest>, JsonRejection>,
) -> Result<Json<RoadmapResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        AppError::Validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        ))
    })?;
    let input = request.validate()?;

    let request_id = Uuid::new_v4();
    let span = info_span!("generate_roadmap", %request_id, domain = %input.domain);

    async move {
        info!(
            "Generating roadmap (year: {}, level: {})",
            input.current_year, input.experience_level
        );
        let roadmap =
            generate_roadmap(state.llm.as_ref(), state.config.failure_policy, &input).await?;
        Ok::<_, AppError>(Json(roadmap))
    }
    .instrument(span)
    .await
}
