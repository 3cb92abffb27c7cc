//! GraphQL API for ProjectDesk.
//!
//! The schema exposes list/get queries for clients and projects, create and
//! delete mutations for both, and a partial update for projects. A project's
//! `client` field is resolved through a [`ClientLoader`].
//!
//! There is no global schema: [`build_schema`] composes an immutable
//! [`AppSchema`] from the injected stores, and callers share it by
//! reference (clone is cheap).

mod error;
mod loader;
mod mutation;
mod query;
mod types;

pub use error::{ApiError, BAD_USER_INPUT, INTERNAL_SERVER_ERROR};
pub use loader::{ClientLoader, StoreClientLoader};
pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use types::{ClientObject, ProjectObject};

use std::sync::Arc;

use async_graphql::{EmptySubscription, Schema};
use projectdesk_store::Stores;

/// GraphQL schema type
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Compose the schema over `stores`, resolving `Project.client` with an
/// unbatched [`StoreClientLoader`].
pub fn build_schema(stores: Stores) -> AppSchema {
    let loader: Arc<dyn ClientLoader> = Arc::new(StoreClientLoader::new(stores.clients.clone()));
    build_schema_with_loader(stores, loader)
}

/// Compose the schema with a caller-supplied client loader.
pub fn build_schema_with_loader(stores: Stores, loader: Arc<dyn ClientLoader>) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(stores)
        .data(loader)
        .finish()
}
