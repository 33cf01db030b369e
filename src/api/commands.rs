//! IPC command surface
//!
//! Thin wrappers around the controller and the bridge transport. Commands
//! return the fresh `UiState` snapshot so the frontend re-renders from the
//! reply without a second round trip.

use std::sync::Arc;

use tauri::{AppHandle, State};

use crate::core::bridge::webview::WebviewBridge;
use crate::core::controller::AppController;
use crate::shared::emit::emit_event;
use crate::shared::error::AppError;
use crate::shared::events::AppEvent;
use crate::shared::types::{BridgeReply, UiState};

#[tauri::command]
pub async fn get_state(
    controller: State<'_, Arc<AppController>>,
) -> Result<UiState, AppError> {
    Ok(controller.snapshot())
}

#[tauri::command]
pub async fn translate(
    text: String,
    controller: State<'_, Arc<AppController>>,
) -> Result<UiState, AppError> {
    Ok(controller.translate(&text).await)
}

#[tauri::command]
pub async fn send_to_host(
    controller: State<'_, Arc<AppController>>,
) -> Result<UiState, AppError> {
    Ok(controller.send_to_host().await)
}

#[tauri::command]
pub async fn copy_message(
    controller: State<'_, Arc<AppController>>,
) -> Result<UiState, AppError> {
    Ok(controller.copy().await)
}

#[tauri::command]
pub async fn reload_bridge(
    app: AppHandle,
    controller: State<'_, Arc<AppController>>,
) -> Result<UiState, AppError> {
    let state = controller.reload().await;
    emit_event(&app, AppEvent::StateChanged(state.clone()));
    Ok(state)
}

/// Invoked by the page loader once the host SDK script has loaded (or
/// definitively failed to load).
#[tauri::command]
pub fn bridge_sdk_loaded(available: bool, bridge: State<'_, Arc<WebviewBridge>>) {
    bridge.mark_sdk_loaded(available);
}

/// Invoked by the webview to answer a `bridge://request` event.
#[tauri::command]
pub fn bridge_response(reply: BridgeReply, bridge: State<'_, Arc<WebviewBridge>>) {
    bridge.resolve(reply);
}
