//! Translation client
//!
//! One round trip per invocation against a generative-language API, with a
//! strict JSON output schema so the model reports both the translation and
//! the detected direction. No retries, no streaming.

pub mod service;
pub mod types;

use async_trait::async_trait;

use crate::shared::error::AppResult;
use crate::shared::types::TranslationResult;

/// Seam between the controller and the translation backend, so tests can
/// drive the controller without network access.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> AppResult<TranslationResult>;
}
