//! projectdesk-server: HTTP transport for the ProjectDesk GraphQL API.
//!
//! Loads configuration, opens the configured entity store, composes the
//! schema once and serves it on a single `/graphql` endpoint.

pub mod config;
pub mod routes;

use projectdesk_core::config::StoreBackend;
use projectdesk_store::{MemoryStore, Neo4jStore, StoreError, Stores};

use crate::config::AppConfig;

/// Open the store backend selected by `config.store.backend`.
pub async fn connect_stores(config: &AppConfig) -> Result<Stores, StoreError> {
    match config.store.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory store");
            Ok(Stores::from_backend(MemoryStore::new()))
        }
        StoreBackend::Neo4j => {
            let store = Neo4jStore::connect(&config.neo4j).await?;
            Ok(Stores::from_backend(store))
        }
    }
}
