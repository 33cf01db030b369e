use tauri::{AppHandle, Emitter};

use super::events::AppEvent;

/// Emit an application event to all windows
///
/// The AppEvent enum carries both the event name (via the serde rename) and
/// the payload, but Tauri's emit takes the name as a plain string, so this
/// dispatches each variant under its canonical name.
pub fn emit_event(app: &AppHandle, event: AppEvent) {
    match &event {
        AppEvent::StateChanged(state) => {
            if let Err(e) = app.emit("state://changed", state) {
                eprintln!("Failed to emit state update: {}", e);
            }
        }
        AppEvent::BridgeRequest(request) => {
            if let Err(e) = app.emit("bridge://request", request) {
                eprintln!("Failed to emit bridge request: {}", e);
            }
        }
    }
}
