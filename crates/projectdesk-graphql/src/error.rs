//! Mapping of domain and store failures onto GraphQL errors.
//!
//! Every error leaving a resolver carries an `extensions.code`:
//! `BAD_USER_INPUT` for arguments the caller got wrong, and
//! `INTERNAL_SERVER_ERROR` for store failures, whose message is passed
//! through unmodified.

use async_graphql::ErrorExtensions;
use thiserror::Error;

use projectdesk_core::ProjectDeskError;
use projectdesk_store::StoreError;

pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";
pub const INTERNAL_SERVER_ERROR: &str = "INTERNAL_SERVER_ERROR";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(#[from] ProjectDeskError),

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => BAD_USER_INPUT,
            Self::Store(_) => INTERNAL_SERVER_ERROR,
        }
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", code))
    }
}

/// Convert a failed store call, logging it first.
pub(crate) fn store_failure(err: StoreError) -> async_graphql::Error {
    tracing::error!(error = %err, "Store operation failed");
    ApiError::Store(err).extend()
}

/// Convert an argument the caller supplied in an unusable form.
pub(crate) fn bad_input(err: ProjectDeskError) -> async_graphql::Error {
    ApiError::InvalidInput(err).extend()
}
