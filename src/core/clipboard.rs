use async_trait::async_trait;
use tauri::AppHandle;
use tauri_plugin_clipboard_manager::ClipboardExt;

use crate::shared::error::{AppError, AppResult};

/// Clipboard capability injected into the controller, so the copy flow is
/// testable without a windowing system.
#[async_trait]
pub trait ClipboardSink: Send + Sync {
    async fn write_text(&self, text: &str) -> AppResult<()>;
}

/// Production sink backed by the clipboard-manager plugin.
pub struct PluginClipboard {
    app: AppHandle,
}

impl PluginClipboard {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

#[async_trait]
impl ClipboardSink for PluginClipboard {
    async fn write_text(&self, text: &str) -> AppResult<()> {
        self.app
            .clipboard()
            .write_text(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}
