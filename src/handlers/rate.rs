use tracing::warn;

use super::{SENDING, error_text, pretty_json};
use crate::{
    message::RateRequest,
    page::{ElementId, Page},
    services::form::int_or,
    state::SharedState,
};

pub fn read_request(page: &Page) -> RateRequest {
    RateRequest {
        history_id: int_or(page.value(ElementId::HistoryId), 0),
        rating: int_or(page.value(ElementId::Rating), 0),
    }
}

pub async fn rate_handler(state: &SharedState) {
    let request = {
        let mut page = state.page.write().await;
        let request = read_request(&page);
        page.set_text(ElementId::RateResult, SENDING);
        request
    };

    let result = state.client.rate(&request).await;

    let mut page = state.page.write().await;
    match result {
        Ok(data) => page.set_text(ElementId::RateResult, pretty_json(&data)),
        Err(e) => {
            warn!(error = %e, history_id = request.history_id, "rating failed");
            page.set_text(ElementId::RateResult, error_text(&e));
        }
    }
}
