use serde::Serialize;
use ts_rs::TS;

use super::types::{BridgeRequest, UiState};

#[derive(Debug, Clone, Serialize, TS)]
#[serde(tag = "event", content = "payload")] // Tagged enum for easier frontend parsing
#[ts(export)]
pub enum AppEvent {
    #[serde(rename = "state://changed")]
    StateChanged(UiState),

    #[serde(rename = "bridge://request")]
    BridgeRequest(BridgeRequest),
}
