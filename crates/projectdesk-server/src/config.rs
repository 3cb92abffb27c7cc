//! Configuration for the ProjectDesk server.

use projectdesk_core::config::{layered, section, ServerConfig, StoreBackend, StoreConfig};
use projectdesk_core::ProjectDeskError;
use projectdesk_store::Neo4jConfig;

/// Everything the server reads at startup.
///
/// Loaded from the `[server]`, `[store]` and `[neo4j]` sections of
/// `projectdesk.toml` or `PROJECTDESK__<SECTION>__<KEY>` environment variables.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub neo4j: Neo4jConfig,
}

impl AppConfig {
    pub fn load(file_prefix: &str) -> Result<Self, ProjectDeskError> {
        let cfg = layered(file_prefix)?;
        Ok(Self {
            server: section(&cfg, "server")?,
            store: section(&cfg, "store")?,
            neo4j: section(&cfg, "neo4j")?,
        })
    }

    /// Apply command-line overrides on top of the loaded configuration.
    pub fn with_overrides(mut self, port: Option<u16>, backend: Option<StoreBackend>) -> Self {
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(backend) = backend {
            self.store.backend = backend;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("projectdesk");
        let config = AppConfig::load(prefix.to_str().unwrap()).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.neo4j.uri, "bolt://localhost:7687");
    }

    #[test]
    fn test_neo4j_section_is_partial() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("projectdesk.toml"),
            "[store]\nbackend = \"neo4j\"\n\n[neo4j]\nuri = \"bolt://graph:7687\"\n",
        )
        .unwrap();

        let prefix = dir.path().join("projectdesk");
        let config = AppConfig::load(prefix.to_str().unwrap()).unwrap();

        assert_eq!(config.store.backend, StoreBackend::Neo4j);
        assert_eq!(config.neo4j.uri, "bolt://graph:7687");
        assert_eq!(config.neo4j.user, "neo4j");
        assert_eq!(config.neo4j.max_connections, 16);
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = AppConfig::default().with_overrides(Some(8080), Some(StoreBackend::Neo4j));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.backend, StoreBackend::Neo4j);

        let untouched = AppConfig::default().with_overrides(None, None);
        assert_eq!(untouched.server, ServerConfig::default());
    }
}
