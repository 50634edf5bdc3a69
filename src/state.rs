// src/state.rs
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{page::Page, services::api_client::ApiClient};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub client: ApiClient,
    pub page: RwLock<Page>,
}

impl AppState {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            page: RwLock::new(Page::new()),
        }
    }

    pub fn shared(client: ApiClient) -> SharedState {
        Arc::new(Self::new(client))
    }
}
