//! Process-local entity store.
//!
//! Collections are kept in insertion order, which is also the order
//! `list_*` returns them in. Contents are lost when the process exits.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use projectdesk_core::{Client, ClientId, NewClient, NewProject, Project, ProjectId, ProjectPatch};

use crate::error::StoreError;
use crate::store::{ClientStore, ProjectStore};

/// In-memory backend for both collections.
///
/// Clone is cheap (inner Arc); clones share the same collections.
#[derive(Clone, Default)]
pub struct MemoryStore {
    clients: Arc<RwLock<Vec<Client>>>,
    projects: Arc<RwLock<Vec<Project>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStore for MemoryStore {
    async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        Ok(self.clients.read().await.clone())
    }

    async fn find_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError> {
        let clients = self.clients.read().await;
        Ok(clients.iter().find(|c| c.id == *id).cloned())
    }

    async fn insert_client(&self, client: NewClient) -> Result<Client, StoreError> {
        let client = client.into_client();
        self.clients.write().await.push(client.clone());
        tracing::debug!(client_id = %client.id, "Client inserted");
        Ok(client)
    }

    async fn delete_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError> {
        let mut clients = self.clients.write().await;
        let removed = clients
            .iter()
            .position(|c| c.id == *id)
            .map(|idx| clients.remove(idx));
        tracing::debug!(client_id = %id, removed = removed.is_some(), "Client delete");
        Ok(removed)
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        Ok(self.projects.read().await.clone())
    }

    async fn find_project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError> {
        let projects = self.projects.read().await;
        Ok(projects.iter().find(|p| p.id == *id).cloned())
    }

    async fn insert_project(&self, project: NewProject) -> Result<Project, StoreError> {
        let project = project.into_project();
        self.projects.write().await.push(project.clone());
        tracing::debug!(
            project_id = %project.id,
            client_id = %project.client_id,
            "Project inserted"
        );
        Ok(project)
    }

    async fn delete_project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError> {
        let mut projects = self.projects.write().await;
        let removed = projects
            .iter()
            .position(|p| p.id == *id)
            .map(|idx| projects.remove(idx));
        tracing::debug!(project_id = %id, removed = removed.is_some(), "Project delete");
        Ok(removed)
    }

    async fn update_project(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> Result<Option<Project>, StoreError> {
        let mut projects = self.projects.write().await;
        let Some(project) = projects.iter_mut().find(|p| p.id == *id) else {
            return Ok(None);
        };
        project.apply(&patch);
        tracing::debug!(project_id = %id, "Project updated");
        Ok(Some(project.clone()))
    }
}
