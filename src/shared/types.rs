use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The two languages the translator moves between.
///
/// Wire form matches the tags the language model is instructed to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Vi,
    Zh,
}

impl Lang {
    pub fn label(self) -> &'static str {
        match self {
            Lang::Vi => "🇻🇳 越語",
            Lang::Zh => "🇹🇼 中文",
        }
    }
}

/// One successful translation. Immutable; replaced wholesale by the next
/// translation request. Field names are camelCase on the wire because they
/// mirror the response schema sent to the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub original: String,
    pub translated: String,
    pub source_lang: Lang,
    pub target_lang: Lang,
}

impl TranslationResult {
    /// Bilingual message forwarded to the host chat (and copied to the
    /// clipboard), labelled according to the detected direction.
    pub fn chat_message(&self) -> String {
        format!(
            "{}：{}\n{}：{}",
            self.source_lang.label(),
            self.original,
            self.target_lang.label(),
            self.translated
        )
    }
}

/// Bridge-initialization outcome. Transitions one-way from `Initializing`
/// to exactly one of the other states; only a manual reload re-enters
/// `Initializing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AppStatus {
    Initializing,
    Ready,
    Error,
    OutsideHost,
}

/// Snapshot of controller state rendered by the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub status: AppStatus,
    pub loading: bool,
    pub result: Option<TranslationResult>,
    pub error: Option<String>,
    pub copied: bool,
    pub can_send: bool,
    pub can_copy: bool,
}

/// A call the Rust core asks the webview to run against the host SDK.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BridgeRequest {
    pub id: String,
    pub op: String,
    #[ts(type = "unknown")]
    pub payload: serde_json::Value,
}

/// The webview's answer to a `BridgeRequest`, correlated by id.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BridgeReply {
    pub id: String,
    pub ok: bool,
    #[serde(default)]
    #[ts(type = "unknown")]
    pub value: serde_json::Value,
    pub error: Option<BridgeFault>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BridgeFault {
    pub kind: BridgeFaultKind,
    pub message: String,
}

/// Failure classes the webview distinguishes when a host SDK call throws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BridgeFaultKind {
    Unavailable,
    InitFailed,
    SendRejected,
    PermissionDenied,
}
