pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use flashcard_core::{CollaboratorError, FlashcardGenerator, Pipeline, TextExtractor};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::services::{OpenAiGenerator, PdfTextExtractor};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub extractor: Arc<dyn TextExtractor>,
    /// `None` when no generation backend is configured.
    pub generator: Option<Arc<dyn FlashcardGenerator>>,
}

impl AppState {
    /// Pipeline over this state's collaborators.
    ///
    /// Fails with [`ApiError::Unavailable`] when generation is not configured.
    pub fn pipeline(
        &self,
    ) -> Result<Pipeline<impl TextExtractor + 'static, impl FlashcardGenerator + 'static>> {
        let generator = self.generator.clone().ok_or_else(|| {
            ApiError::Unavailable("flashcard generation is not configured (set OPENAI_KEY)".into())
        })?;
        let extractor = self.extractor.clone();

        Ok(Pipeline::new(
            move |document: &[u8]| -> std::result::Result<String, CollaboratorError> {
                extractor.extract(document)
            },
            move |notes: &str| -> std::result::Result<String, CollaboratorError> {
                generator.generate(notes)
            },
        ))
    }
}

/// Build the router with all routes.
pub fn app(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health_check))
        // Flashcard text routes
        .route("/api/flashcards/parse", post(routes::flashcards::parse_text))
        .route("/api/flashcards/csv", post(routes::flashcards::csv))
        .route("/api/flashcards/apkg", post(routes::flashcards::apkg))
        // Notes routes
        .route("/api/notes/generate", post(routes::notes::generate))
        .route("/api/notes/pdf", post(routes::notes::pdf))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let generator = OpenAiGenerator::from_config(&config)
        .map(|g| Arc::new(g) as Arc<dyn FlashcardGenerator>);
    if generator.is_none() {
        tracing::warn!("OPENAI_KEY not set; generation endpoints will return 503");
    }

    let state = AppState {
        config: Arc::new(config.clone()),
        extractor: Arc::new(PdfTextExtractor),
        generator,
    };

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
