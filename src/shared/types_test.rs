//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use ts_rs::TS;

    use crate::shared::events::AppEvent;
    use crate::shared::types::*;

    #[test]
    fn export_bindings() {
        // This test triggers ts-rs to export TypeScript bindings
        Lang::export().expect("Failed to export Lang");
        TranslationResult::export().expect("Failed to export TranslationResult");
        AppStatus::export().expect("Failed to export AppStatus");
        UiState::export().expect("Failed to export UiState");
        BridgeRequest::export().expect("Failed to export BridgeRequest");
        BridgeReply::export().expect("Failed to export BridgeReply");
        BridgeFault::export().expect("Failed to export BridgeFault");
        BridgeFaultKind::export().expect("Failed to export BridgeFaultKind");
        AppEvent::export().expect("Failed to export AppEvent");
    }

    #[test]
    fn chat_message_labels_follow_detected_direction() {
        let vi_source = TranslationResult {
            original: "Xin chào".to_string(),
            translated: "你好".to_string(),
            source_lang: Lang::Vi,
            target_lang: Lang::Zh,
        };
        assert_eq!(vi_source.chat_message(), "🇻🇳 越語：Xin chào\n🇹🇼 中文：你好");

        let zh_source = TranslationResult {
            original: "你好".to_string(),
            translated: "Xin chào".to_string(),
            source_lang: Lang::Zh,
            target_lang: Lang::Vi,
        };
        assert_eq!(zh_source.chat_message(), "🇹🇼 中文：你好\n🇻🇳 越語：Xin chào");
    }

    #[test]
    fn translation_result_uses_schema_field_names() {
        let json = serde_json::json!({
            "original": "你好",
            "translated": "Xin chào",
            "sourceLang": "zh",
            "targetLang": "vi"
        });
        let result: TranslationResult = serde_json::from_value(json).unwrap();
        assert_eq!(result.source_lang, Lang::Zh);
        assert_eq!(result.target_lang, Lang::Vi);
    }
}
