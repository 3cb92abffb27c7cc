//! The entity store contract.
//!
//! Each collection exposes the same five primitives the API needs:
//! list all, find by id, insert, delete by id and (projects only) a
//! partial update. Any backend satisfying these traits is substitutable.

use std::sync::Arc;

use async_trait::async_trait;

use projectdesk_core::{Client, ClientId, NewClient, NewProject, Project, ProjectId, ProjectPatch};

use crate::error::StoreError;

/// The `clients` collection.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// Every client in the collection.
    async fn list_clients(&self) -> Result<Vec<Client>, StoreError>;

    async fn find_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError>;

    /// Insert a new client and return the stored record.
    async fn insert_client(&self, client: NewClient) -> Result<Client, StoreError>;

    /// Remove a client, returning the removed record if it existed.
    async fn delete_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError>;
}

/// The `projects` collection.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Every project in the collection.
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;

    async fn find_project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError>;

    /// Insert a new project and return the stored record.
    ///
    /// The client reference is stored as given; it is not checked.
    async fn insert_project(&self, project: NewProject) -> Result<Project, StoreError>;

    /// Remove a project, returning the removed record if it existed.
    async fn delete_project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError>;

    /// Merge `patch` into an existing project and return the updated record.
    /// Fields absent from the patch keep their stored values.
    async fn update_project(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> Result<Option<Project>, StoreError>;
}

/// Both collections, as handed to the API layer.
///
/// Clone is cheap (inner Arcs).
#[derive(Clone)]
pub struct Stores {
    pub clients: Arc<dyn ClientStore>,
    pub projects: Arc<dyn ProjectStore>,
}

impl Stores {
    /// Use one backend for both collections.
    pub fn from_backend<S>(backend: S) -> Self
    where
        S: ClientStore + ProjectStore + 'static,
    {
        let backend = Arc::new(backend);
        Self {
            clients: backend.clone(),
            projects: backend,
        }
    }
}
