use thiserror::Error;

use crate::types::ResourceKind;

/// Errors produced by the token exchange and the catalog lookups.
#[derive(Error, Debug)]
pub enum Error {
    /// The upstream catalog answered 404 for a single-resource lookup.
    #[error("{0} not found")]
    EntityNotFound(ResourceKind),

    /// Any other failure: transport error, non-404 error status or a response
    /// that could not be read as the expected document.
    #[error("{message}")]
    Api {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn api(message: impl Into<String>) -> Self {
        Error::Api {
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn api_from(message: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Api {
            message: message.into(),
            source: Some(source),
        }
    }

    /// Maps a failed request onto the two lookup error kinds.
    ///
    /// Only an upstream 404 on an id-addressed resource becomes
    /// [`Error::EntityNotFound`]; everything else is an [`Error::Api`]
    /// carrying `message`.
    pub(crate) fn classify(
        kind: Option<ResourceKind>,
        message: impl Into<String>,
        source: reqwest::Error,
    ) -> Self {
        match (kind, source.status()) {
            (Some(kind), Some(reqwest::StatusCode::NOT_FOUND)) => Error::EntityNotFound(kind),
            _ => Error::api_from(message, source),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::EntityNotFound(_))
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Configuration(err.to_string())
    }
}
