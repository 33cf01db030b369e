//! Application error taxonomy
//!
//! Every failure in the app is converted into one of these variants and
//! ultimately into a human-readable message in UI state. Nothing here is
//! fatal to the process; the user can retry the triggering action.
//! All variants are serializable for IPC communication with the frontend.

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// The host SDK object never became available in the page
    #[error("The host SDK is not available")]
    SdkUnavailable,

    /// The host SDK was present but refused to initialize
    #[error("Bridge initialization failed: {0}")]
    InitializationFailed(String),

    /// Missing or unusable build-time configuration (credential, app id)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The translation service answered with no textual payload
    #[error("The translation service returned an empty response")]
    EmptyResponse,

    /// The translation payload was not JSON, or did not match the schema
    #[error("The translation service returned a malformed response: {0}")]
    MalformedResponse(String),

    /// The host refused to forward the message (e.g. not inside the client)
    #[error("Message sending was rejected: {0}")]
    SendRejected(String),

    /// The host denied the chat-message-write capability
    #[error("The host denied the message-send permission: {0}")]
    PermissionDenied(String),

    /// Clipboard operation error
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Transport-level failure talking to an external service
    #[error("Network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

// Helper type alias for fallible operations
pub type AppResult<T> = Result<T, AppError>;
