use tracing::warn;

use super::{RUNNING, SEARCHING, error_text, pretty_json};
use crate::{
    message::SemanticSearchRequest,
    page::{ElementId, Page},
    services::form::{int_or, or_default, split_categories},
    state::SharedState,
};

pub const DEFAULT_QUERY: &str = "*";
pub const DEFAULT_TOP_N: i64 = 5;

pub fn read_request(page: &Page) -> SemanticSearchRequest {
    SemanticSearchRequest {
        query: or_default(page.value(ElementId::EsQuery), DEFAULT_QUERY).to_string(),
        categories: split_categories(page.value(ElementId::EsCategories)),
        top_n_per_category: int_or(page.value(ElementId::EsTopN), DEFAULT_TOP_N),
        save_to_postgres: page.is_checked(ElementId::EsSave),
    }
}

pub async fn search_handler(state: &SharedState) {
    let request = {
        let mut page = state.page.write().await;
        let request = read_request(&page);
        page.set_text(ElementId::EsResults, RUNNING);
        request
    };

    let result = state.client.es_search(&request).await;

    let mut page = state.page.write().await;
    match result {
        Ok(data) => page.set_text(ElementId::EsResults, pretty_json(&data)),
        Err(e) => {
            warn!(error = %e, query = %request.query, "semantic search failed");
            page.set_text(ElementId::EsResults, error_text(&e));
        }
    }
}

pub async fn categories_handler(state: &SharedState) {
    state
        .page
        .write()
        .await
        .set_items(ElementId::EsCategoryList, vec![SEARCHING.to_string()]);

    let result = state.client.es_categories().await;

    let mut page = state.page.write().await;
    match result {
        Ok(list) => page.set_items(ElementId::EsCategoryList, list.categories),
        Err(e) => {
            warn!(error = %e, "category listing failed");
            page.set_items(ElementId::EsCategoryList, vec![error_text(&e)]);
        }
    }
}
