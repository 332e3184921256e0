//! Error types for catalog calls, the assembly workflow, sign-in and
//! configuration.

use thiserror::Error;

use crate::types::CreatedPlaylist;

/// Failure of a single Spotify Web API call.
///
/// Classification relies only on the HTTP status of the response: 401 is
/// [`CatalogError::Unauthorized`], anything else that is not a success is
/// [`CatalogError::RequestFailed`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No access token has been set on the client.
    #[error("no access token is set, sign in first")]
    NotAuthenticated,

    /// Spotify rejected the bearer token.
    #[error("access token was rejected by Spotify")]
    Unauthorized,

    /// Transport failure, non-success status, or an undecodable body.
    #[error("{}", request_failed_message(.status, .message))]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },
}

fn request_failed_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("request failed with status {}: {}", code, message),
        None => format!("request failed: {}", message),
    }
}

impl CatalogError {
    pub fn request_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        CatalogError::RequestFailed {
            status,
            message: message.into(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CatalogError::Unauthorized)
    }
}

/// Terminal failure of one playlist assembly invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("select at least one track before creating a playlist")]
    NothingSelected,

    #[error("you are not signed in to Spotify")]
    NotAuthenticated,

    #[error("give the playlist a name")]
    MissingName,

    #[error("could not look up the current user: {0}")]
    UserLookupFailed(CatalogError),

    #[error("could not create the playlist: {0}")]
    PlaylistCreationFailed(CatalogError),

    /// The playlist exists on Spotify but is empty.
    #[error("playlist {} was created but the tracks could not be added: {source}", .playlist.name)]
    TrackAdditionFailed {
        playlist: CreatedPlaylist,
        source: CatalogError,
    },
}

/// Failure of the sign-in flow or of a token grant.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("token request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("token endpoint answered without {0}")]
    MissingField(&'static str),

    #[error("callback server failed: {0}")]
    Server(String),

    #[error("invalid authorization url: {0}")]
    InvalidUrl(String),

    #[error("no authorization arrived before the sign-in timed out")]
    TimedOut,
}

/// Failure reading or writing the cached token.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token cache io: {0}")]
    Io(#[from] std::io::Error),

    #[error("token cache format: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("cannot prepare config directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read .env file: {0}")]
    DotEnv(String),
}
