//! Read operations against the Neo4j backend.

use chrono::{DateTime, Utc};
use neo4rs::query;

use projectdesk_core::{Client, ClientId, Project, ProjectId};

use crate::client::Neo4jStore;
use crate::error::StoreError;

pub(crate) const CLIENT_LABEL: &str = "Client";
pub(crate) const PROJECT_LABEL: &str = "Project";

impl Neo4jStore {
    // ── Clients ──────────────────────────────────────────────────

    /// All clients, oldest first.
    pub async fn fetch_clients(&self) -> Result<Vec<Client>, StoreError> {
        let q = query(
            "MATCH (n:Client)
             RETURN n
             ORDER BY n.created_at ASC",
        );

        let rows = self.query_rows(q).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            results.push(node_to_client(&row_node(&row, CLIENT_LABEL)?)?);
        }
        Ok(results)
    }

    pub async fn get_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError> {
        let q = query(
            "MATCH (n:Client {id: $id})
             RETURN n",
        )
        .param("id", id.to_string());

        match self.query_one(q).await? {
            Some(row) => Ok(Some(node_to_client(&row_node(&row, CLIENT_LABEL)?)?)),
            None => Ok(None),
        }
    }

    // ── Projects ─────────────────────────────────────────────────

    /// All projects, oldest first.
    pub async fn fetch_projects(&self) -> Result<Vec<Project>, StoreError> {
        let q = query(
            "MATCH (n:Project)
             RETURN n
             ORDER BY n.created_at ASC",
        );

        let rows = self.query_rows(q).await?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            results.push(node_to_project(&row_node(&row, PROJECT_LABEL)?)?);
        }
        Ok(results)
    }

    pub async fn get_project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError> {
        let q = query(
            "MATCH (n:Project {id: $id})
             RETURN n",
        )
        .param("id", id.to_string());

        match self.query_one(q).await? {
            Some(row) => Ok(Some(node_to_project(&row_node(&row, PROJECT_LABEL)?)?)),
            None => Ok(None),
        }
    }
}

// ── Conversions ──────────────────────────────────────────────────

/// Pull the `n` column out of a result row.
pub(crate) fn row_node(row: &neo4rs::Row, label: &str) -> Result<neo4rs::Node, StoreError> {
    row.get("n")
        .map_err(|e| malformed(label, format!("failed to deserialize node: {e}")))
}

pub(crate) fn node_to_client(node: &neo4rs::Node) -> Result<Client, StoreError> {
    Ok(Client {
        id: parse_prop(node, CLIENT_LABEL, "id")?,
        name: string_prop(node, CLIENT_LABEL, "name")?,
        email: string_prop(node, CLIENT_LABEL, "email")?,
        phone: string_prop(node, CLIENT_LABEL, "phone")?,
        created_at: timestamp_prop(node, CLIENT_LABEL)?,
    })
}

pub(crate) fn node_to_project(node: &neo4rs::Node) -> Result<Project, StoreError> {
    Ok(Project {
        id: parse_prop(node, PROJECT_LABEL, "id")?,
        name: string_prop(node, PROJECT_LABEL, "name")?,
        description: string_prop(node, PROJECT_LABEL, "description")?,
        status: parse_prop(node, PROJECT_LABEL, "status")?,
        client_id: parse_prop::<ClientId>(node, PROJECT_LABEL, "client_id")?,
        created_at: timestamp_prop(node, PROJECT_LABEL)?,
    })
}

fn string_prop(node: &neo4rs::Node, label: &str, key: &str) -> Result<String, StoreError> {
    node.get::<String>(key)
        .map_err(|e| malformed(label, format!("property {key}: {e}")))
}

fn parse_prop<T>(node: &neo4rs::Node, label: &str, key: &str) -> Result<T, StoreError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    string_prop(node, label, key)?
        .parse()
        .map_err(|e: T::Err| malformed(label, format!("property {key}: {e}")))
}

fn timestamp_prop(node: &neo4rs::Node, label: &str) -> Result<DateTime<Utc>, StoreError> {
    let raw = string_prop(node, label, "created_at")?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| malformed(label, format!("property created_at: {e}")))
}

fn malformed(label: &str, reason: String) -> StoreError {
    StoreError::Malformed {
        label: label.to_string(),
        reason,
    }
}
