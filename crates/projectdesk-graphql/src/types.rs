//! GraphQL output types.
//!
//! Every scalar field is nullable on read, matching the published contract.

use std::collections::HashSet;
use std::sync::Arc;

use async_graphql::{Context, Object, Result as GQLResult, ID};

use projectdesk_core::{Client, Project};

use crate::error::store_failure;
use crate::loader::ClientLoader;

/// GraphQL `Client` object.
#[derive(Debug, Clone)]
pub struct ClientObject(pub Client);

#[Object(name = "Client")]
impl ClientObject {
    async fn id(&self) -> Option<ID> {
        Some(ID(self.0.id.to_string()))
    }

    async fn name(&self) -> Option<&str> {
        Some(&self.0.name)
    }

    async fn email(&self) -> Option<&str> {
        Some(&self.0.email)
    }

    async fn phone(&self) -> Option<&str> {
        Some(&self.0.phone)
    }
}

/// GraphQL `Project` object.
#[derive(Debug, Clone)]
pub struct ProjectObject(pub Project);

#[Object(name = "Project")]
impl ProjectObject {
    async fn id(&self) -> Option<ID> {
        Some(ID(self.0.id.to_string()))
    }

    async fn name(&self) -> Option<&str> {
        Some(&self.0.name)
    }

    async fn description(&self) -> Option<&str> {
        Some(&self.0.description)
    }

    /// Display form of the status, e.g. `Not Started`.
    async fn status(&self) -> Option<&str> {
        Some(self.0.status.as_str())
    }

    /// The client this project references, or null if it no longer exists.
    async fn client(&self, ctx: &Context<'_>) -> GQLResult<Option<ClientObject>> {
        let loader = ctx.data::<Arc<dyn ClientLoader>>()?;
        let client_id = self.0.client_id;

        let mut found = loader
            .load_clients_by_ids(&HashSet::from([client_id]))
            .await
            .map_err(store_failure)?;

        if !found.contains_key(&client_id) {
            tracing::debug!(
                project_id = %self.0.id,
                client_id = %client_id,
                "Project references a missing client"
            );
        }
        Ok(found.remove(&client_id).map(ClientObject))
    }
}
