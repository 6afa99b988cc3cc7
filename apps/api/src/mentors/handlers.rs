use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::errors::AppError;
use crate::mentors::models::{MentorPage, MentorQuery, MentorRecord};
use crate::state::AppState;

/// GET /mentors
pub async fn handle_list_mentors(
    State(state): State<AppState>,
    query: Result<Query<MentorQuery>, QueryRejection>,
) -> Result<Json<MentorPage>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        AppError::Validation(format!("Invalid query string: {}", rejection.body_text()))
    })?;
    Ok(Json(state.mentors.query(&query)))
}

/// GET /mentors/:id
pub async fn handle_get_mentor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MentorRecord>, AppError> {
    state
        .mentors
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Mentor {id} not found")))
}
