use tracing::{info, warn};

use super::{SENDING, error_text};
use crate::{
    message::ChatRequest,
    page::{ElementId, Page},
    services::form::{float_or, non_empty, or_default},
    state::SharedState,
};

pub const DEFAULT_USER_ID: &str = "demo-user";
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

pub fn read_request(page: &Page) -> ChatRequest {
    ChatRequest {
        user_id: or_default(page.value(ElementId::UserId), DEFAULT_USER_ID).to_string(),
        session_id: non_empty(page.value(ElementId::SessionId)),
        temperature: float_or(page.value(ElementId::Temperature), DEFAULT_TEMPERATURE),
        message: page.value(ElementId::Message).to_string(),
    }
}

pub async fn send_handler(state: &SharedState) {
    let request = {
        let mut page = state.page.write().await;
        let request = read_request(&page);
        page.set_text(ElementId::Answer, SENDING);
        request
    };

    let result = state.client.chat(&request).await;

    let mut page = state.page.write().await;
    match result {
        Ok(data) => {
            info!(history_id = data.history_id, "chat answered");
            page.set_text(
                ElementId::Answer,
                format!("#{}:\n\n{}", data.history_id, data.answer),
            );
            page.set_value(ElementId::HistoryId, data.history_id.to_string());
        }
        Err(e) => {
            warn!(error = %e, "chat failed");
            page.set_text(ElementId::Answer, error_text(&e));
        }
    }
}
