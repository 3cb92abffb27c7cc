//! Configuration management for ProjectDesk services.
//!
//! Configuration is loaded from (in priority order):
//! 1. Environment variables (PROJECTDESK__ prefix, `__` between sections)
//! 2. Config file (projectdesk.toml, or any format `config` recognises)
//! 3. Defaults

use serde::Deserialize;

use crate::error::ProjectDeskError;

/// Environment variable prefix shared by every service.
pub const ENV_PREFIX: &str = "PROJECTDESK";

/// Build the layered configuration source for `file_prefix`.
///
/// The file is optional; a missing file yields an empty layer.
pub fn layered(file_prefix: &str) -> Result<config::Config, ProjectDeskError> {
    let cfg = config::Config::builder()
        .add_source(config::File::with_name(file_prefix).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    Ok(cfg)
}

/// Read a section, falling back to its defaults when the section is absent.
pub fn section<T>(cfg: &config::Config, key: &str) -> Result<T, ProjectDeskError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    match cfg.get::<T>(key) {
        Ok(value) => Ok(value),
        Err(config::ConfigError::NotFound(_)) => Ok(T::default()),
        Err(e) => Err(e.into()),
    }
}

/// HTTP listener settings (`[server]`).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL IDE on `GET /graphql`.
    #[serde(default = "default_true")]
    pub graphiql: bool,
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: true,
        }
    }
}

/// Entity store selection (`[store]`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
}

/// Which entity store implementation backs the API.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local collections; contents are lost on restart.
    #[default]
    Memory,
    /// Nodes in a Neo4j database, configured by `[neo4j]`.
    Neo4j,
}

impl std::str::FromStr for StoreBackend {
    type Err = ProjectDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "neo4j" => Ok(Self::Neo4j),
            other => Err(ProjectDeskError::Config(config::ConfigError::Message(
                format!("Invalid store backend: {other}. Choose: memory, neo4j"),
            ))),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_true() -> bool {
    true
}
