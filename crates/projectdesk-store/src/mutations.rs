//! Write operations against the Neo4j backend.
//!
//! Records are created with CREATE (ids are minted client-side, so there
//! is nothing to merge against). Deletes read the record first so the
//! removed value can be returned to the caller.

use chrono::{DateTime, SecondsFormat, Utc};
use neo4rs::query;

use projectdesk_core::{Client, ClientId, Project, ProjectId, ProjectPatch};

use crate::client::Neo4jStore;
use crate::error::StoreError;
use crate::queries::{node_to_project, row_node, CLIENT_LABEL, PROJECT_LABEL};

impl Neo4jStore {
    // ── Clients ──────────────────────────────────────────────────

    /// Create a Client node from a fully-formed record.
    pub async fn create_client(&self, client: Client) -> Result<Client, StoreError> {
        let q = query(
            "CREATE (n:Client {
               id: $id, name: $name, email: $email, phone: $phone,
               created_at: $created_at
             })",
        )
        .param("id", client.id.to_string())
        .param("name", client.name.clone())
        .param("email", client.email.clone())
        .param("phone", client.phone.clone())
        .param("created_at", timestamp(&client.created_at));

        self.run(q).await?;
        tracing::debug!(client_id = %client.id, "Client node created");
        Ok(client)
    }

    /// Delete a Client node, returning the record it held.
    pub async fn remove_client(&self, id: &ClientId) -> Result<Option<Client>, StoreError> {
        let Some(existing) = self.get_client(id).await? else {
            return Ok(None);
        };

        let q = query(
            "MATCH (n:Client {id: $id})
             DETACH DELETE n",
        )
        .param("id", id.to_string());

        self.run(q).await?;
        tracing::debug!(client_id = %id, "Client node deleted");
        Ok(Some(existing))
    }

    // ── Projects ─────────────────────────────────────────────────

    /// Create a Project node from a fully-formed record.
    pub async fn create_project(&self, project: Project) -> Result<Project, StoreError> {
        let q = query(
            "CREATE (n:Project {
               id: $id, name: $name, description: $description,
               status: $status, client_id: $client_id,
               created_at: $created_at
             })",
        )
        .param("id", project.id.to_string())
        .param("name", project.name.clone())
        .param("description", project.description.clone())
        .param("status", project.status.as_str().to_string())
        .param("client_id", project.client_id.to_string())
        .param("created_at", timestamp(&project.created_at));

        self.run(q).await?;
        tracing::debug!(
            project_id = %project.id,
            client_id = %project.client_id,
            "Project node created"
        );
        Ok(project)
    }

    /// Delete a Project node, returning the record it held.
    pub async fn remove_project(&self, id: &ProjectId) -> Result<Option<Project>, StoreError> {
        let Some(existing) = self.get_project(id).await? else {
            return Ok(None);
        };

        let q = query(
            "MATCH (n:Project {id: $id})
             DETACH DELETE n",
        )
        .param("id", id.to_string());

        self.run(q).await?;
        tracing::debug!(project_id = %id, "Project node deleted");
        Ok(Some(existing))
    }

    /// Set only the properties present in `patch` and return the result.
    pub async fn patch_project(
        &self,
        id: &ProjectId,
        patch: &ProjectPatch,
    ) -> Result<Option<Project>, StoreError> {
        let mut assignments = Vec::new();
        if patch.name.is_some() {
            assignments.push("n.name = $name");
        }
        if patch.description.is_some() {
            assignments.push("n.description = $description");
        }
        if patch.status.is_some() {
            assignments.push("n.status = $status");
        }

        let cypher = if assignments.is_empty() {
            "MATCH (n:Project {id: $id}) RETURN n".to_string()
        } else {
            format!(
                "MATCH (n:Project {{id: $id}})
                 SET {}
                 RETURN n",
                assignments.join(", ")
            )
        };

        let mut q = query(&cypher).param("id", id.to_string());
        if let Some(name) = &patch.name {
            q = q.param("name", name.clone());
        }
        if let Some(description) = &patch.description {
            q = q.param("description", description.clone());
        }
        if let Some(status) = patch.status {
            q = q.param("status", status.as_str().to_string());
        }

        match self.query_one(q).await? {
            Some(row) => {
                let project = node_to_project(&row_node(&row, PROJECT_LABEL)?)?;
                tracing::debug!(
                    project_id = %id,
                    fields = assignments.len(),
                    "Project node patched"
                );
                Ok(Some(project))
            }
            None => Ok(None),
        }
    }

    /// Delete every Client and Project node. Used to reset test databases.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let cypher =
            format!("MATCH (n) WHERE n:{CLIENT_LABEL} OR n:{PROJECT_LABEL} DETACH DELETE n");
        self.run(query(&cypher)).await
    }
}

/// Fixed-width RFC 3339 so that string ordering matches time ordering.
fn timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_sort_chronologically_as_strings() {
        let earlier = Utc.with_ymd_and_hms(2024, 1, 15, 9, 5, 0).unwrap();
        let later = earlier + chrono::TimeDelta::milliseconds(1500);

        let (a, b) = (timestamp(&earlier), timestamp(&later));
        assert_eq!(a, "2024-01-15T09:05:00.000000Z");
        assert!(a < b);
    }

    #[test]
    fn minted_creation_time_survives_storage_format() {
        let client = projectdesk_core::NewClient {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            phone: "1".to_string(),
        }
        .into_client();

        let stored = timestamp(&client.created_at);
        let read_back = DateTime::parse_from_rfc3339(&stored)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(read_back, client.created_at);
    }
}
