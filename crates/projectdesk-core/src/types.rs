//! Core domain types for ProjectDesk.
//!
//! Two collections live in the entity store: clients and the projects
//! that reference them by id. Write payloads (`NewClient`, `NewProject`,
//! `ProjectPatch`) carry exactly the fields each mutation accepts.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ProjectDeskError;

// ── Identifiers ───────────────────────────────────────────────────

/// Unique identifier for a client record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClientId(pub Uuid);

impl ClientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ClientId {
    type Err = ProjectDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_uuid(s).map(Self)
    }
}

/// Unique identifier for a project record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ProjectId {
    type Err = ProjectDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_uuid(s).map(Self)
    }
}

fn parse_uuid(s: &str) -> Result<Uuid, ProjectDeskError> {
    Uuid::parse_str(s).map_err(|_| ProjectDeskError::InvalidId(s.to_string()))
}

// ── Records ───────────────────────────────────────────────────────

/// A client as stored in the `clients` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// A project as stored in the `projects` collection.
///
/// `client_id` is a foreign key into `clients`. Nothing checks that the
/// referenced client exists; a dangling reference simply resolves to no
/// client at read time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub client_id: ClientId,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Merge a patch into this project. Only fields present in the patch change.
    pub fn apply(&mut self, patch: &ProjectPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

// ── Status ────────────────────────────────────────────────────────

/// Lifecycle status of a project.
///
/// On the GraphQL wire the symbolic values are `new`, `progress` and
/// `completed`; stored and displayed values are the human-readable strings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "graphql", derive(async_graphql::Enum))]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Not Started")]
    #[cfg_attr(feature = "graphql", graphql(name = "new"))]
    NotStarted,
    #[serde(rename = "In Progress")]
    #[cfg_attr(feature = "graphql", graphql(name = "progress"))]
    InProgress,
    #[serde(rename = "Completed")]
    #[cfg_attr(feature = "graphql", graphql(name = "completed"))]
    Completed,
}

impl ProjectStatus {
    /// The display string stored with the record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ProjectDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(Self::NotStarted),
            "In Progress" => Ok(Self::InProgress),
            "Completed" => Ok(Self::Completed),
            other => Err(ProjectDeskError::InvalidStatus(other.to_string())),
        }
    }
}

// ── Write Payloads ────────────────────────────────────────────────

/// Arguments of `addClient`. Every field is required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewClient {
    /// Assign a fresh id and creation time.
    pub fn into_client(self) -> Client {
        Client {
            id: ClientId::new(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            created_at: creation_time(),
        }
    }
}

/// Arguments of `addProject`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    pub client_id: ClientId,
}

impl NewProject {
    /// Assign a fresh id and creation time.
    pub fn into_project(self) -> Project {
        Project {
            id: ProjectId::new(),
            name: self.name,
            description: self.description,
            status: self.status,
            client_id: self.client_id,
            created_at: creation_time(),
        }
    }
}

/// Creation timestamps are kept at microsecond precision, the finest any
/// backend persists.
fn creation_time() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Arguments of `updateProject` beyond the id. `None` leaves the field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
}

impl ProjectPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        NewProject {
            name: "Site".to_string(),
            description: "Marketing site".to_string(),
            status: ProjectStatus::default(),
            client_id: ClientId::new(),
        }
        .into_project()
    }

    #[test]
    fn status_defaults_to_not_started() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::NotStarted);
        assert_eq!(ProjectStatus::default().as_str(), "Not Started");
    }

    #[test]
    fn status_serializes_display_string() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let parsed: ProjectStatus = serde_json::from_str("\"Completed\"").unwrap();
        assert_eq!(parsed, ProjectStatus::Completed);
    }

    #[test]
    fn status_from_str_rejects_unknown() {
        assert_eq!(
            "In Progress".parse::<ProjectStatus>().unwrap(),
            ProjectStatus::InProgress
        );
        assert!("progress".parse::<ProjectStatus>().is_err());
    }

    #[test]
    fn ids_parse_from_uuid_strings() {
        let id = ClientId::new();
        let parsed: ClientId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);

        let err = "C1".parse::<ProjectId>().unwrap_err();
        assert!(matches!(err, ProjectDeskError::InvalidId(ref s) if s == "C1"));
    }

    #[test]
    fn ids_with_surrounding_whitespace_are_rejected() {
        let id = ProjectId::new();
        assert!(format!(" {id} ").parse::<ProjectId>().is_err());
        assert!(format!("{id}\n").parse::<ClientId>().is_err());
    }

    #[test]
    fn creation_time_has_microsecond_precision() {
        let project = sample_project();
        assert_eq!(project.created_at.timestamp_subsec_nanos() % 1_000, 0);

        let client = NewClient {
            name: "Ann".into(),
            email: "a@x.com".into(),
            phone: "1".into(),
        }
        .into_client();
        assert_eq!(client.created_at.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn patch_only_touches_provided_fields() {
        let mut project = sample_project();
        let before = project.clone();

        project.apply(&ProjectPatch {
            status: Some(ProjectStatus::Completed),
            ..Default::default()
        });

        assert_eq!(project.status, ProjectStatus::Completed);
        assert_eq!(project.name, before.name);
        assert_eq!(project.description, before.description);
        assert_eq!(project.client_id, before.client_id);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut project = sample_project();
        let before = project.clone();
        let patch = ProjectPatch::default();

        assert!(patch.is_empty());
        project.apply(&patch);
        assert_eq!(project, before);
    }

    #[test]
    fn new_project_keeps_client_reference() {
        let client_id = ClientId::new();
        let project = NewProject {
            name: "Site".to_string(),
            description: "d".to_string(),
            status: ProjectStatus::InProgress,
            client_id,
        }
        .into_project();

        assert_eq!(project.client_id, client_id);
        assert_eq!(project.status, ProjectStatus::InProgress);
    }
}
