//! Client lookups for the `Project.client` relationship.
//!
//! The relationship resolver only ever talks to a `ClientLoader`, so a
//! batching or caching implementation can be dropped in through
//! `build_schema_with_loader` without changing the schema.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;

use projectdesk_core::{Client, ClientId};
use projectdesk_store::{ClientStore, StoreError};

/// Resolves a set of client ids to the clients that exist.
///
/// Ids with no matching client are absent from the returned map.
#[async_trait]
pub trait ClientLoader: Send + Sync {
    async fn load_clients_by_ids(
        &self,
        ids: &HashSet<ClientId>,
    ) -> Result<HashMap<ClientId, Client>, StoreError>;
}

/// Unbatched loader: one `find_client` per requested id.
pub struct StoreClientLoader {
    clients: Arc<dyn ClientStore>,
}

impl StoreClientLoader {
    pub fn new(clients: Arc<dyn ClientStore>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl ClientLoader for StoreClientLoader {
    async fn load_clients_by_ids(
        &self,
        ids: &HashSet<ClientId>,
    ) -> Result<HashMap<ClientId, Client>, StoreError> {
        let mut found = HashMap::with_capacity(ids.len());
        for id in ids {
            if let Some(client) = self.clients.find_client(id).await? {
                found.insert(*id, client);
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use projectdesk_core::NewClient;
    use projectdesk_store::MemoryStore;

    #[tokio::test]
    async fn missing_ids_are_left_out() {
        let store = MemoryStore::new();
        let ann = store
            .insert_client(NewClient {
                name: "Ann".to_string(),
                email: "a@x.com".to_string(),
                phone: "1".to_string(),
            })
            .await
            .unwrap();
        let dangling = ClientId::new();

        let loader = StoreClientLoader::new(Arc::new(store));
        let found = loader
            .load_clients_by_ids(&HashSet::from([ann.id, dangling]))
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found.get(&ann.id).map(|c| c.name.as_str()), Some("Ann"));
        assert!(!found.contains_key(&dangling));
    }

    #[tokio::test]
    async fn empty_request_touches_nothing() {
        let loader = StoreClientLoader::new(Arc::new(MemoryStore::new()));
        let found = loader.load_clients_by_ids(&HashSet::new()).await.unwrap();
        assert!(found.is_empty());
    }
}
