//! GraphQL mutations for creating, updating, and deleting clients and projects.
//!
//! Each mutation turns its arguments into one of the typed write payloads
//! from `projectdesk_core` and performs exactly one store call. Required
//! arguments are non-null in the schema, so a request missing one fails
//! validation before any of this code runs.

use async_graphql::{Context, Object, Result as GQLResult, ID};

use projectdesk_core::{ClientId, NewClient, NewProject, ProjectId, ProjectPatch, ProjectStatus};
use projectdesk_store::Stores;

use crate::error::{bad_input, store_failure};
use crate::types::{ClientObject, ProjectObject};

/// Root mutation type for GraphQL
#[derive(Default)]
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a client.
    async fn add_client(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        phone: String,
    ) -> GQLResult<Option<ClientObject>> {
        let stores = ctx.data::<Stores>()?;
        let input = NewClient { name, email, phone };

        let client = stores
            .clients
            .insert_client(input)
            .await
            .map_err(store_failure)?;
        tracing::info!(client_id = %client.id, "Client added");
        Ok(Some(ClientObject(client)))
    }

    /// Delete a client. Returns the removed client, or null if none matched.
    ///
    /// Projects referencing the client are left in place.
    async fn delete_client(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> GQLResult<Option<ClientObject>> {
        let id: ClientId = id.parse().map_err(bad_input)?;
        let stores = ctx.data::<Stores>()?;

        let removed = stores
            .clients
            .delete_client(&id)
            .await
            .map_err(store_failure)?;
        tracing::info!(client_id = %id, found = removed.is_some(), "Client deleted");
        Ok(removed.map(ClientObject))
    }

    /// Create a project for a client. `status` defaults to `new` (Not Started),
    /// and an explicit null is treated the same way.
    ///
    /// The client id is stored as given; it need not refer to an existing client.
    async fn add_project(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
        #[graphql(default_with = "Some(ProjectStatus::NotStarted)")]
        status: Option<ProjectStatus>,
        client_id: ID,
    ) -> GQLResult<Option<ProjectObject>> {
        let input = NewProject {
            name,
            description,
            status: status.unwrap_or_default(),
            client_id: client_id.parse().map_err(bad_input)?,
        };
        let stores = ctx.data::<Stores>()?;

        let project = stores
            .projects
            .insert_project(input)
            .await
            .map_err(store_failure)?;
        tracing::info!(
            project_id = %project.id,
            client_id = %project.client_id,
            "Project added"
        );
        Ok(Some(ProjectObject(project)))
    }

    /// Delete a project. Returns the removed project, or null if none matched.
    async fn delete_project(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> GQLResult<Option<ProjectObject>> {
        let id: ProjectId = id.parse().map_err(bad_input)?;
        let stores = ctx.data::<Stores>()?;

        let removed = stores
            .projects
            .delete_project(&id)
            .await
            .map_err(store_failure)?;
        tracing::info!(project_id = %id, found = removed.is_some(), "Project deleted");
        Ok(removed.map(ProjectObject))
    }

    /// Update a project. Only the arguments supplied are changed; the
    /// client reference can never be changed. Returns null if no project
    /// has the given id.
    async fn update_project(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: Option<String>,
        description: Option<String>,
        status: Option<ProjectStatus>,
    ) -> GQLResult<Option<ProjectObject>> {
        let id: ProjectId = id.parse().map_err(bad_input)?;
        let patch = ProjectPatch {
            name,
            description,
            status,
        };
        let stores = ctx.data::<Stores>()?;

        let updated = stores
            .projects
            .update_project(&id, patch)
            .await
            .map_err(store_failure)?;
        tracing::info!(project_id = %id, found = updated.is_some(), "Project updated");
        Ok(updated.map(ProjectObject))
    }
}
