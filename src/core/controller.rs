//! Application controller
//!
//! Owns the single piece of UI state and sequences the bridge, the
//! translation client and the clipboard. Every failure ends up as a
//! human-readable message in state; the UI stays interactive throughout.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::core::bridge::BridgeClient;
use crate::core::clipboard::ClipboardSink;
use crate::core::translator::Translator;
use crate::shared::error::AppError;
use crate::shared::settings::PLACEHOLDER_APP_ID;
use crate::shared::types::{AppStatus, TranslationResult, UiState};

/// How long the "copied" acknowledgment stays up.
pub const COPY_ACK_MS: u64 = 2000;

struct ControllerState {
    status: AppStatus,
    result: Option<TranslationResult>,
    loading: bool,
    error: Option<String>,
    copied: bool,
    /// Bumped on every copy so a stale ack timer cannot clear a newer ack.
    copy_epoch: u64,
}

impl ControllerState {
    fn new() -> Self {
        Self {
            status: AppStatus::Initializing,
            result: None,
            loading: false,
            error: None,
            copied: false,
            copy_epoch: 0,
        }
    }
}

pub struct AppController {
    bridge: Arc<dyn BridgeClient>,
    translator: Arc<dyn Translator>,
    clipboard: Arc<dyn ClipboardSink>,
    bridge_app_id: Option<String>,
    state: Arc<Mutex<ControllerState>>,
}

impl AppController {
    pub fn new(
        bridge: Arc<dyn BridgeClient>,
        translator: Arc<dyn Translator>,
        clipboard: Arc<dyn ClipboardSink>,
        bridge_app_id: Option<String>,
    ) -> Self {
        Self {
            bridge,
            translator,
            clipboard,
            bridge_app_id,
            state: Arc::new(Mutex::new(ControllerState::new())),
        }
    }

    fn state(&self) -> MutexGuard<'_, ControllerState> {
        // Recover rather than propagate a poison: state is plain data
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> UiState {
        let s = self.state();
        UiState {
            status: s.status,
            loading: s.loading,
            result: s.result.clone(),
            error: s.error.clone(),
            copied: s.copied,
            can_send: s.result.is_some() && s.status == AppStatus::Ready,
            can_copy: s.result.is_some(),
        }
    }

    /// Drive bridge initialization to one terminal status. Runs once at
    /// startup; `reload` re-enters `Initializing` and runs it again.
    pub async fn initialize(&self) -> UiState {
        let app_id = match self.bridge_app_id.as_deref() {
            Some(id) if id != PLACEHOLDER_APP_ID => id.to_string(),
            Some(_) => {
                return self.fail_initialization(
                    "The sample bridge application id is still in place. Register your own \
                     id and rebuild."
                        .to_string(),
                );
            }
            None => {
                return self.fail_initialization(
                    "No bridge application id is configured. Build with BRIDGE_APP_ID set."
                        .to_string(),
                );
            }
        };

        if let Err(e) = self.bridge.init(&app_id).await {
            return self.fail_initialization(init_failure_message(&e));
        }
        match self.bridge.is_embedded().await {
            Ok(true) => self.state().status = AppStatus::Ready,
            Ok(false) => self.state().status = AppStatus::OutsideHost,
            Err(e) => return self.fail_initialization(init_failure_message(&e)),
        }
        self.snapshot()
    }

    fn fail_initialization(&self, message: String) -> UiState {
        {
            let mut s = self.state();
            s.status = AppStatus::Error;
            s.error = Some(message);
        }
        self.snapshot()
    }

    /// Re-enter `Initializing` and retry bridge setup (manual reload).
    pub async fn reload(&self) -> UiState {
        {
            let mut s = self.state();
            s.status = AppStatus::Initializing;
            s.error = None;
        }
        self.initialize().await
    }

    /// Translate the given text. Blank input and duplicate submissions are
    /// no-ops; a failure keeps whatever result was already on screen.
    pub async fn translate(&self, text: &str) -> UiState {
        let input = text.trim();
        if input.is_empty() {
            return self.snapshot();
        }
        let already_loading = {
            let mut s = self.state();
            if s.loading {
                true
            } else {
                s.loading = true;
                s.error = None;
                false
            }
        };
        if already_loading {
            // An in-flight request is not cancelled, only shielded from
            // duplicate submission.
            return self.snapshot();
        }

        let outcome = self.translator.translate(input).await;

        let mut s = self.state();
        s.loading = false;
        match outcome {
            Ok(result) => s.result = Some(result),
            Err(e) => s.error = Some(format!("Translation failed: {}", e)),
        }
        drop(s);
        self.snapshot()
    }

    /// Forward the bilingual message into the host chat. Guarded on a
    /// present result and an initialized bridge; outside the host client it
    /// only leaves guidance to copy manually.
    pub async fn send_to_host(&self) -> UiState {
        enum Gate {
            Send(String),
            OutsideHost,
            Skip,
        }
        let gate = {
            let s = self.state();
            match (&s.result, s.status) {
                (Some(result), AppStatus::Ready) => Gate::Send(result.chat_message()),
                (Some(_), AppStatus::OutsideHost) => Gate::OutsideHost,
                // No result yet, or the bridge never initialized
                _ => Gate::Skip,
            }
        };

        match gate {
            Gate::Send(message) => {
                if let Err(e) = self.bridge.send_message(&message).await {
                    self.state().error = Some(send_failure_message(&e));
                }
            }
            Gate::OutsideHost => {
                self.state().error = Some(
                    "Running outside the host client. Copy the message and paste it into \
                     the chat manually."
                        .to_string(),
                );
            }
            Gate::Skip => {}
        }
        self.snapshot()
    }

    /// Copy the bilingual message and raise a transient acknowledgment that
    /// clears after exactly `COPY_ACK_MS`.
    pub async fn copy(&self) -> UiState {
        let message = {
            let s = self.state();
            s.result.as_ref().map(TranslationResult::chat_message)
        };
        let message = match message {
            Some(message) => message,
            None => return self.snapshot(),
        };

        if let Err(e) = self.clipboard.write_text(&message).await {
            self.state().error = Some(format!("Copy failed: {}", e));
            return self.snapshot();
        }

        let epoch = {
            let mut s = self.state();
            s.copied = true;
            s.copy_epoch += 1;
            s.copy_epoch
        };

        let state = Arc::clone(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(COPY_ACK_MS)).await;
            let mut s = state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            if s.copy_epoch == epoch {
                s.copied = false;
            }
        });
        self.snapshot()
    }
}

fn init_failure_message(err: &AppError) -> String {
    match err {
        AppError::SdkUnavailable => {
            "Could not load the host SDK. Check the network connection and reload.".to_string()
        }
        other => other.to_string(),
    }
}

fn send_failure_message(err: &AppError) -> String {
    match err {
        AppError::PermissionDenied(_) | AppError::SendRejected(_) => {
            "Sending failed. Check that the app was opened inside the host client and that \
             the chat message write permission is granted."
                .to_string()
        }
        other => format!("Sending failed: {}", other),
    }
}
