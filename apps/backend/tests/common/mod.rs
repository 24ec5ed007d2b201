//! Common test utilities and fixtures for integration tests.
//!
//! The router is built with stub collaborators, so no network access or
//! API key is needed.

pub mod fixtures;

use std::sync::Arc;

use axum_test::TestServer;
use flashcard_core::{CollaboratorError, FlashcardGenerator, TextExtractor};

use studyly_backend::config::Config;
use studyly_backend::{app, AppState};

/// Test context wrapping a router with injected collaborators.
pub struct TestContext {
    state: AppState,
}

impl TestContext {
    /// Context whose generator always returns `generated`.
    pub fn with_generated_text(generated: &str) -> Self {
        let generated = generated.to_string();
        Self::with_generator(Arc::new(
            move |_notes: &str| -> Result<String, CollaboratorError> { Ok(generated.clone()) },
        ))
    }

    /// Context whose generator echoes the notes it receives as one card.
    pub fn echoing() -> Self {
        Self::with_generator(Arc::new(
            |notes: &str| -> Result<String, CollaboratorError> {
                Ok(format!("Notes;{}", notes.trim()))
            },
        ))
    }

    /// Context whose generator always fails.
    pub fn failing_generator(message: &'static str) -> Self {
        Self::with_generator(Arc::new(
            move |_notes: &str| -> Result<String, CollaboratorError> {
                Err(CollaboratorError::new(message))
            },
        ))
    }

    /// Context with no generator configured.
    pub fn without_generator() -> Self {
        Self {
            state: AppState {
                config: Arc::new(Config::default()),
                extractor: stub_extractor(),
                generator: None,
            },
        }
    }

    fn with_generator(generator: Arc<dyn FlashcardGenerator>) -> Self {
        Self {
            state: AppState {
                config: Arc::new(Config::default()),
                extractor: stub_extractor(),
                generator: Some(generator),
            },
        }
    }

    /// Get a test server for this context.
    pub fn server(&self) -> TestServer {
        TestServer::new(app(self.state.clone())).unwrap()
    }
}

/// Extractor that treats the uploaded bytes as UTF-8 text.
///
/// Bodies starting with `%PDF-broken` fail, to exercise the error path.
fn stub_extractor() -> Arc<dyn TextExtractor> {
    Arc::new(|document: &[u8]| -> Result<String, CollaboratorError> {
        if document.starts_with(b"%PDF-broken") {
            return Err(CollaboratorError::new("could not read PDF"));
        }
        Ok(String::from_utf8_lossy(document).into_owned())
    })
}
