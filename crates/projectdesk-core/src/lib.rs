//! projectdesk-core: Shared types, configuration, and error handling for ProjectDesk.
//!
//! This crate provides the foundational types used across all ProjectDesk crates:
//! - Client and Project records, their ids, and write payloads
//! - The project status enum shared by create and update
//! - Layered configuration loading
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use error::ProjectDeskError;
pub use types::{
    Client, ClientId, NewClient, NewProject, Project, ProjectId, ProjectPatch, ProjectStatus,
};
