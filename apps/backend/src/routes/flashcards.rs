//! Flashcard parse and export endpoints

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use flashcard_core::{export, parse, parse_with_report, ExportedFile};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/flashcards/parse
pub async fn parse_text(Json(req): Json<FlashcardTextRequest>) -> Json<FlashcardTableResponse> {
    Json(parse_with_report(&req.text).into())
}

/// POST /api/flashcards/csv
pub async fn csv(Json(req): Json<FlashcardTextRequest>) -> Result<Response> {
    let table = parse(&req.text);
    let file = export::csv_file(&table)?;
    Ok(download(file))
}

/// POST /api/flashcards/apkg
pub async fn apkg(
    State(state): State<AppState>,
    Json(req): Json<DeckExportRequest>,
) -> Result<Response> {
    let deck_name = match req.deck_name {
        Some(name) if name.trim().is_empty() => {
            return Err(ApiError::BadRequest("deck_name must not be empty".to_string()))
        }
        Some(name) => name,
        None => state.config.deck_name.clone(),
    };

    // SQLite and temp file work happens off the async workers.
    let file = tokio::task::spawn_blocking(move || {
        let table = parse(&req.text);
        export::deck_file(&table, &deck_name)
    })
    .await??;

    Ok(download(file))
}

/// Attachment response for an exported file.
pub(crate) fn download(file: ExportedFile) -> Response {
    (
        [
            (header::CONTENT_TYPE, file.mime_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ),
        ],
        file.bytes,
    )
        .into_response()
}
