//! Neo4j connection management and the Neo4j-backed entity store.

use async_trait::async_trait;
use neo4rs::{ConfigBuilder, Graph, Query};
use serde::Deserialize;

use projectdesk_core::{Client, ClientId, NewClient, NewProject, Project, ProjectId, ProjectPatch};

use crate::error::StoreError;
use crate::store::{ClientStore, ProjectStore};

/// Configuration for connecting to Neo4j (`[neo4j]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Neo4jConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub fetch_size: usize,
}

impl Default for Neo4jConfig {
    fn default() -> Self {
        Self {
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: "projectdesk-dev".to_string(),
            max_connections: 16,
            fetch_size: 256,
        }
    }
}

/// Entity store persisting clients and projects as Neo4j nodes.
///
/// Each record is a single node labelled `Client` or `Project` and keyed by
/// its `id` property. A project's client reference is kept as the
/// `client_id` property, not as a relationship, so deleting a client never
/// touches its projects.
///
/// Clone is cheap (inner Arc).
#[derive(Clone)]
pub struct Neo4jStore {
    graph: Graph,
}

impl Neo4jStore {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &Neo4jConfig) -> Result<Self, StoreError> {
        let neo_config = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size)
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(uri = %config.uri, "Connected to Neo4j");
        Ok(Self { graph })
    }

    /// Execute a write-only query (CREATE, DELETE, SET).
    pub async fn run(&self, query: Query) -> Result<(), StoreError> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute a read query and collect all rows.
    pub async fn query_rows(&self, query: Query) -> Result<Vec<neo4rs::Row>, StoreError> {
        let mut stream = self.graph.execute(query).await?;
        let mut rows = Vec::new();
        while let Some(row) = stream.next().await? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// Execute a read query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, StoreError> {
        let mut stream = self.graph.execute(query).await?;
        Ok(stream.next().await?)
    }
}

#[async_trait]
impl ClientStore for Neo4jStore {
    async fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        self.fetch_clients().await
    }

    async fn find_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError> {
        self.get_client(id).await
    }

    async fn insert_client(&self, client: NewClient) -> Result<Client, StoreError> {
        self.create_client(client.into_client()).await
    }

    async fn delete_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError> {
        self.remove_client(id).await
    }
}

#[async_trait]
impl ProjectStore for Neo4jStore {
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        self.fetch_projects().await
    }

    async fn find_project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError> {
        self.get_project(id).await
    }

    async fn insert_project(&self, project: NewProject) -> Result<Project, StoreError> {
        self.create_project(project.into_project()).await
    }

    async fn delete_project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError> {
        self.remove_project(id).await
    }

    async fn update_project(
        &self,
        id: &ProjectId,
        patch: ProjectPatch,
    ) -> Result<Option<Project>, StoreError> {
        self.patch_project(id, &patch).await
    }
}
