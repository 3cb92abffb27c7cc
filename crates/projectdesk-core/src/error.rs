use thiserror::Error;

/// Top-level error type for ProjectDesk.
#[derive(Error, Debug)]
pub enum ProjectDeskError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid id: {0:?}")]
    InvalidId(String),

    #[error("Invalid project status: {0:?}")]
    InvalidStatus(String),
}
