//! Host-platform bridge adapter
//!
//! The host chat application injects its SDK into the page. The controller
//! never touches that global directly; it talks to a capability-scoped
//! `BridgeClient` so the UI logic stays testable without a real host.

pub mod webview;

use async_trait::async_trait;

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::{BridgeFaultKind, BridgeReply};

#[async_trait]
pub trait BridgeClient: Send + Sync {
    /// Idempotent SDK setup. Fails with `SdkUnavailable` when the SDK never
    /// became present in the page, `InitializationFailed` otherwise.
    async fn init(&self, app_id: &str) -> AppResult<()>;

    /// Whether the page runs inside the host client. Only meaningful after
    /// a successful `init`.
    async fn is_embedded(&self) -> AppResult<bool>;

    /// Forward a text message into the host chat. On success the host also
    /// closes the hosting window; that side effect is the host's, not ours.
    async fn send_message(&self, text: &str) -> AppResult<()>;
}

impl BridgeReply {
    /// Fold a webview reply into the application error taxonomy.
    pub fn into_result(self) -> AppResult<serde_json::Value> {
        if self.ok {
            return Ok(self.value);
        }
        Err(match self.error {
            Some(fault) => match fault.kind {
                BridgeFaultKind::Unavailable => AppError::SdkUnavailable,
                BridgeFaultKind::InitFailed => AppError::InitializationFailed(fault.message),
                BridgeFaultKind::SendRejected => AppError::SendRejected(fault.message),
                BridgeFaultKind::PermissionDenied => AppError::PermissionDenied(fault.message),
            },
            None => AppError::InitializationFailed(
                "bridge reported failure without detail".to_string(),
            ),
        })
    }
}
