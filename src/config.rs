//! Configuration management for wordplaylist.
//!
//! Values come from environment variables, which may be seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Defaults pointing at Spotify's public endpoints (where applicable)

use std::{env, path::PathBuf};

use crate::errors::ConfigError;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SCOPE: &str = "user-read-private playlist-modify-private";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";

/// Returns the application's directory inside the platform data directory.
///
/// - Linux: `~/.local/share/wordplaylist`
/// - macOS: `~/Library/Application Support/wordplaylist`
/// - Windows: `%LOCALAPPDATA%/wordplaylist`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("wordplaylist");
    path
}

/// Loads environment variables from `<data_dir>/.env`.
///
/// Creates the data directory if needed. A missing `.env` file is fine since
/// every variable can also come from the process environment; a file that
/// exists but cannot be parsed is an error.
///
/// # Example
///
/// ```
/// use wordplaylist::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), ConfigError> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir).await?;

    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| ConfigError::DotEnv(e.to_string()))
}

/// Reads `key` from the environment, falling back to `default` when it is
/// unset or blank.
pub fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(key)),
    }
}

/// Address the local OAuth callback server binds to, e.g. `127.0.0.1:8888`.
pub fn server_addr() -> String {
    env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Client id registered with Spotify's developer dashboard.
///
/// Required for every sign-in and token grant.
pub fn spotify_client_id() -> Result<String, ConfigError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Client secret, used only for the client-credentials app token.
///
/// Returns `None` when unset: searching then requires a signed-in user.
pub fn spotify_client_secret() -> Option<String> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET").ok()
}

/// Callback URL Spotify redirects to after authorization. Must match the
/// redirect URI registered for the app.
pub fn spotify_redirect_uri() -> String {
    env_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Scopes requested during sign-in.
pub fn spotify_scope() -> String {
    env_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Spotify's OAuth authorization page.
pub fn spotify_apiauth_url() -> String {
    env_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Base URL of the Spotify Web API.
pub fn spotify_apiurl() -> String {
    env_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Token endpoint for code exchange and client-credentials grants.
pub fn spotify_apitoken_url() -> String {
    env_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}
