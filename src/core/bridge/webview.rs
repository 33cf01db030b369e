//! Production bridge implementation
//!
//! The host SDK is a script living inside the webview, so every bridge call
//! is a correlated request/response round trip over Tauri events: the core
//! emits `bridge://request`, the page runs the SDK call and answers through
//! the `bridge_response` command.
//!
//! The page loader reports SDK availability through `bridge_sdk_loaded`
//! instead of the core polling on a timer; `init` simply awaits that signal.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, OnceLock};

use async_trait::async_trait;
use tauri::AppHandle;
use tokio::sync::{oneshot, watch};
use uuid::Uuid;

use super::BridgeClient;
use crate::shared::emit::emit_event;
use crate::shared::error::{AppError, AppResult};
use crate::shared::events::AppEvent;
use crate::shared::types::{BridgeReply, BridgeRequest};

/// Operation names understood by the webview dispatcher.
mod ops {
    pub const INIT: &str = "init";
    pub const IS_IN_CLIENT: &str = "is_in_client";
    pub const SEND_TEXT: &str = "send_text";
    pub const CLOSE_WINDOW: &str = "close_window";
}

pub struct WebviewBridge {
    app: OnceLock<AppHandle>,
    sdk_loaded: watch::Sender<Option<bool>>,
    initialized: AtomicBool,
    pending: Mutex<HashMap<String, oneshot::Sender<BridgeReply>>>,
}

impl WebviewBridge {
    pub fn new() -> Self {
        let (sdk_loaded, _) = watch::channel(None);
        Self {
            app: OnceLock::new(),
            sdk_loaded,
            initialized: AtomicBool::new(false),
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Attach the transport once the app (and its window) exists.
    pub fn attach(&self, app: AppHandle) {
        let _ = self.app.set(app);
    }

    /// Called by the page loader: the SDK script finished loading (or
    /// definitively failed to).
    pub fn mark_sdk_loaded(&self, available: bool) {
        self.sdk_loaded.send_replace(Some(available));
    }

    /// Complete the pending request matching this reply. Replies for
    /// unknown ids are dropped.
    pub fn resolve(&self, reply: BridgeReply) {
        let sender = self.pending_map().remove(&reply.id);
        match sender {
            Some(tx) => {
                let _ = tx.send(reply);
            }
            None => eprintln!("[Bridge] Dropping reply for unknown request {}", reply.id),
        }
    }

    fn pending_map(&self) -> MutexGuard<'_, HashMap<String, oneshot::Sender<BridgeReply>>> {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn register(&self) -> (String, oneshot::Receiver<BridgeReply>) {
        let id = Uuid::new_v4().to_string();
        let (tx, rx) = oneshot::channel();
        self.pending_map().insert(id.clone(), tx);
        (id, rx)
    }

    async fn call(&self, op: &str, payload: serde_json::Value) -> AppResult<serde_json::Value> {
        let app = self.app.get().ok_or_else(|| {
            AppError::InitializationFailed("bridge transport is not attached".to_string())
        })?;
        let (id, rx) = self.register();
        emit_event(
            app,
            AppEvent::BridgeRequest(BridgeRequest {
                id: id.clone(),
                op: op.to_string(),
                payload,
            }),
        );
        match rx.await {
            Ok(reply) => reply.into_result(),
            Err(_) => {
                self.pending_map().remove(&id);
                Err(AppError::InitializationFailed(
                    "bridge request was dropped before completion".to_string(),
                ))
            }
        }
    }

    /// Wait for the loader's availability report. Resolves immediately once
    /// the report happened; there is no timeout by design.
    async fn sdk_available(&self) -> AppResult<bool> {
        let mut rx = self.sdk_loaded.subscribe();
        loop {
            if let Some(available) = *rx.borrow() {
                return Ok(available);
            }
            rx.changed().await.map_err(|_| {
                AppError::InitializationFailed("bridge readiness channel closed".to_string())
            })?;
        }
    }
}

impl Default for WebviewBridge {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BridgeClient for WebviewBridge {
    async fn init(&self, app_id: &str) -> AppResult<()> {
        if self.initialized.load(Ordering::SeqCst) {
            return Ok(());
        }
        if !self.sdk_available().await? {
            return Err(AppError::SdkUnavailable);
        }
        self.call(ops::INIT, serde_json::json!({ "appId": app_id }))
            .await?;
        self.initialized.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn is_embedded(&self) -> AppResult<bool> {
        let value = self.call(ops::IS_IN_CLIENT, serde_json::Value::Null).await?;
        value.as_bool().ok_or_else(|| {
            AppError::InitializationFailed(
                "bridge returned a non-boolean embedding state".to_string(),
            )
        })
    }

    async fn send_message(&self, text: &str) -> AppResult<()> {
        self.call(ops::SEND_TEXT, serde_json::json!({ "text": text }))
            .await?;
        // Host-defined behavior after a successful send; its outcome is not
        // ours to report.
        let _ = self
            .call(ops::CLOSE_WINDOW, serde_json::Value::Null)
            .await;
        Ok(())
    }
}
