// src/handlers/mod.rs
pub mod chat;
pub mod es;
pub mod kb;
pub mod rate;

use serde::Serialize;

use crate::{error::RequestError, page::ElementId, state::SharedState};

pub const SENDING: &str = "Đang gửi...";
pub const SEARCHING: &str = "Đang tìm...";
pub const RUNNING: &str = "Đang chạy...";
pub const ERROR_PREFIX: &str = "Lỗi: ";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a button")]
pub struct NotAButton(pub ElementId);

/// Runs the handler wired to `button`. Handler failures are rendered into the
/// page; only clicking something that is not a button is an error.
pub async fn click(state: &SharedState, button: ElementId) -> Result<(), NotAButton> {
    match button {
        ElementId::SendBtn => chat::send_handler(state).await,
        ElementId::RateBtn => rate::rate_handler(state).await,
        ElementId::KbSearchBtn => kb::search_handler(state).await,
        ElementId::KbItemBtn => kb::item_handler(state).await,
        ElementId::EsSearchBtn => es::search_handler(state).await,
        ElementId::EsCategoriesBtn => es::categories_handler(state).await,
        other => return Err(NotAButton(other)),
    }
    Ok(())
}

/// Text shown in place of a result when the request failed.
pub fn error_text(err: &RequestError) -> String {
    format!("{}{}", ERROR_PREFIX, err)
}

/// Two-space indented JSON, keys in the order the server sent them.
pub fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{}{}", ERROR_PREFIX, e))
}
