//! Errors from entity store operations.

/// Errors from store operations.
///
/// Not-found is never an error here: lookups and deletes of an unknown id
/// return `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Malformed {label} record: {reason}")]
    Malformed { label: String, reason: String },
}
