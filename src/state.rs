// src/state.rs

use std::sync::Arc;

use crate::{
    config::Config,
    store::{FactProvider, ResultSink, SqliteStore},
};

/// Shared handles every quiz session is built from.
#[derive(Clone)]
pub struct AppState {
    pub facts: Arc<dyn FactProvider>,
    pub results: Arc<dyn ResultSink>,
    pub config: Config,
}

impl AppState {
    pub fn new(facts: Arc<dyn FactProvider>, results: Arc<dyn ResultSink>, config: Config) -> Self {
        Self {
            facts,
            results,
            config,
        }
    }

    /// Both collaborators backed by the same SQLite store.
    pub fn from_sqlite(store: SqliteStore, config: Config) -> Self {
        let store = Arc::new(store);
        Self {
            facts: store.clone(),
            results: store,
            config,
        }
    }
}
