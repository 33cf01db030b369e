mod api;
mod core;
mod shared;

use std::sync::Arc;

use tauri::Manager;

use crate::core::bridge::webview::WebviewBridge;
use crate::core::clipboard::PluginClipboard;
use crate::core::controller::AppController;
use crate::core::translator::service::GeminiTranslator;
use crate::shared::emit::emit_event;
use crate::shared::events::AppEvent;
use crate::shared::settings::AppSettings;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .plugin(tauri_plugin_clipboard_manager::init())
        .setup(|app| {
            let settings = AppSettings::load();

            let bridge = Arc::new(WebviewBridge::new());
            bridge.attach(app.handle().clone());

            let translator = Arc::new(GeminiTranslator::new(settings.clone()));
            let clipboard = Arc::new(PluginClipboard::new(app.handle().clone()));
            let controller = Arc::new(AppController::new(
                bridge.clone(),
                translator,
                clipboard,
                settings.bridge_app_id.clone(),
            ));

            app.manage(bridge);
            app.manage(controller.clone());

            // Drive bridge initialization in the background; it completes
            // once the webview has reported SDK availability.
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let state = controller.initialize().await;
                println!("[Startup] Bridge initialization finished: {:?}", state.status);
                emit_event(&handle, AppEvent::StateChanged(state));
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            api::commands::get_state,
            api::commands::translate,
            api::commands::send_to_host,
            api::commands::copy_message,
            api::commands::reload_bridge,
            api::commands::bridge_sdk_loaded,
            api::commands::bridge_response,
        ])
        .run(tauri::generate_context!())
        .unwrap_or_else(|e| {
            eprintln!("FATAL: Failed to start application: {}", e);
            std::process::exit(1);
        });
}
