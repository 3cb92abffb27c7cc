//! ProjectDesk Store: the entity store behind the GraphQL API.
//!
//! `ClientStore` and `ProjectStore` define the per-collection CRUD contract.
//! Two backends implement it: `MemoryStore` (process-local, the default)
//! and `Neo4jStore` (one node per record in a Neo4j database).

pub mod client;
pub mod error;
pub mod memory;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{Neo4jConfig, Neo4jStore};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{ClientStore, ProjectStore, Stores};
