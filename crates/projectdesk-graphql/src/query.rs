//! Read operations.

use async_graphql::{Context, Object, Result as GQLResult, ID};

use projectdesk_core::{ClientId, ProjectId};
use projectdesk_store::Stores;

use crate::error::{bad_input, store_failure};
use crate::types::{ClientObject, ProjectObject};

/// Root query type for GraphQL
#[derive(Default)]
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Every client.
    async fn clients(&self, ctx: &Context<'_>) -> GQLResult<Option<Vec<Option<ClientObject>>>> {
        let stores = ctx.data::<Stores>()?;
        let clients = stores.clients.list_clients().await.map_err(store_failure)?;
        Ok(Some(
            clients.into_iter().map(|c| Some(ClientObject(c))).collect(),
        ))
    }

    /// A single client, or null when `id` is omitted or unknown.
    async fn client(&self, ctx: &Context<'_>, id: Option<ID>) -> GQLResult<Option<ClientObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let id: ClientId = id.parse().map_err(bad_input)?;

        let stores = ctx.data::<Stores>()?;
        let client = stores.clients.find_client(&id).await.map_err(store_failure)?;
        Ok(client.map(ClientObject))
    }

    /// Every project.
    async fn projects(&self, ctx: &Context<'_>) -> GQLResult<Option<Vec<Option<ProjectObject>>>> {
        let stores = ctx.data::<Stores>()?;
        let projects = stores.projects.list_projects().await.map_err(store_failure)?;
        Ok(Some(
            projects.into_iter().map(|p| Some(ProjectObject(p))).collect(),
        ))
    }

    /// A single project, or null when `id` is omitted or unknown.
    async fn project(&self, ctx: &Context<'_>, id: Option<ID>) -> GQLResult<Option<ProjectObject>> {
        let Some(id) = id else {
            return Ok(None);
        };
        let id: ProjectId = id.parse().map_err(bad_input)?;

        let stores = ctx.data::<Stores>()?;
        let project = stores
            .projects
            .find_project(&id)
            .await
            .map_err(store_failure)?;
        Ok(project.map(ProjectObject))
    }
}
