//! Notes-to-flashcards endpoints

use axum::{body::Bytes, extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/notes/generate
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<NotesRequest>,
) -> Result<Json<GeneratedResponse>> {
    if req.notes.trim().is_empty() {
        return Err(ApiError::BadRequest("notes must not be empty".to_string()));
    }

    let pipeline = state.pipeline()?;
    let generated =
        tokio::task::spawn_blocking(move || pipeline.flashcards_from_notes(&req.notes)).await??;

    Ok(Json(GeneratedResponse {
        raw_text: generated.raw_text,
        table: generated.report.into(),
    }))
}

/// POST /api/notes/pdf
///
/// Body is the raw PDF file.
pub async fn pdf(State(state): State<AppState>, body: Bytes) -> Result<Json<GeneratedResponse>> {
    if body.is_empty() {
        return Err(ApiError::BadRequest("request body must be a PDF file".to_string()));
    }

    let pipeline = state.pipeline()?;
    let generated =
        tokio::task::spawn_blocking(move || pipeline.flashcards_from_document(&body)).await??;

    tracing::info!(
        records = generated.report.table.len(),
        "generated flashcards from uploaded PDF"
    );

    Ok(Json(GeneratedResponse {
        raw_text: generated.raw_text,
        table: generated.report.into(),
    }))
}
