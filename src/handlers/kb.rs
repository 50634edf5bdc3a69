use tracing::{debug, warn};

use super::{SEARCHING, SENDING, error_text, pretty_json};
use crate::{page::ElementId, services::form::int_or, state::SharedState};

pub async fn search_handler(state: &SharedState) {
    let query = {
        let mut page = state.page.write().await;
        let query = page.value(ElementId::KbQuery).to_string();
        page.set_items(ElementId::KbResults, vec![SEARCHING.to_string()]);
        query
    };

    let result = state.client.kb_search(&query).await;

    let mut page = state.page.write().await;
    match result {
        Ok(items) => {
            debug!(count = items.len(), "kb search returned");
            page.clear_items(ElementId::KbResults);
            for item in items {
                page.push_item(ElementId::KbResults, format!("{} - {}", item.id, item.title));
            }
        }
        Err(e) => {
            warn!(error = %e, "kb search failed");
            page.set_items(ElementId::KbResults, vec![error_text(&e)]);
        }
    }
}

pub async fn item_handler(state: &SharedState) {
    let id = {
        let mut page = state.page.write().await;
        let id = int_or(page.value(ElementId::KbItemId), 0);
        page.set_text(ElementId::KbItem, SENDING);
        id
    };

    let result = state.client.kb_item(id).await;

    let mut page = state.page.write().await;
    match result {
        Ok(item) => page.set_text(ElementId::KbItem, pretty_json(&item)),
        Err(e) => {
            warn!(error = %e, id, "kb item lookup failed");
            page.set_text(ElementId::KbItem, error_text(&e));
        }
    }
}
