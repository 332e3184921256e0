use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config,
    errors::CatalogError,
    spotify::Catalog,
    types::{
        AddTracksRequest, ApiErrorBody, CreatePlaylistRequest, CreatedPlaylist, SearchResponse,
        Snapshot, User,
    },
};

/// reqwest-backed [`Catalog`] talking to the Spotify Web API.
///
/// Holds one pooled `reqwest::Client` and the current bearer token. The
/// base URL defaults to `SPOTIFY_API_URL` and can be overridden, which is
/// how tests point it at a local server.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    access_token: Option<String>,
}

impl SpotifyClient {
    /// Client for the API at `SPOTIFY_API_URL`, without a token.
    pub fn new() -> Self {
        Self::with_base_url(config::spotify_apiurl())
    }

    /// Client for the API at `base_url`. A trailing slash is dropped.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        SpotifyClient {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> Result<&str, CatalogError> {
        self.access_token
            .as_deref()
            .ok_or(CatalogError::NotAuthenticated)
    }

    /// Sends `request` and decodes a JSON body from a successful response.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, CatalogError> {
        let token = self.token()?;
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| CatalogError::request_failed(None, e.to_string()))?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::request_failed(
                Some(status.as_u16()),
                error_message(status, &body),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::request_failed(Some(status.as_u16()), e.to_string()))
    }
}

impl Default for SpotifyClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pulls the message out of Spotify's `{"error": {...}}` envelope, falling
/// back to the raw body or the status reason.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = envelope.error.message {
            return message;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

#[async_trait]
impl Catalog for SpotifyClient {
    fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    async fn current_user(&self) -> Result<User, CatalogError> {
        let api_url = format!("{uri}/me", uri = self.base_url);
        self.send(self.http.get(&api_url)).await
    }

    async fn search_tracks(&self, query: &str) -> Result<SearchResponse, CatalogError> {
        let api_url = format!("{uri}/search", uri = self.base_url);
        let request = self
            .http
            .get(&api_url)
            .query(&[("q", query), ("type", "track")]);
        self.send(request).await
    }

    async fn create_playlist(
        &self,
        owner_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatedPlaylist, CatalogError> {
        let api_url = format!(
            "{uri}/users/{user_id}/playlists",
            uri = self.base_url,
            user_id = owner_id
        );
        self.send(self.http.post(&api_url).json(request)).await
    }

    async fn add_tracks(
        &self,
        playlist_id: &str,
        request: &AddTracksRequest,
    ) -> Result<Snapshot, CatalogError> {
        let api_url = format!(
            "{uri}/playlists/{playlist_id}/tracks",
            uri = self.base_url,
            playlist_id = playlist_id
        );
        self.send(self.http.post(&api_url).json(request)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_spotify_envelope() {
        let body = r#"{"error":{"status":403,"message":"Insufficient client scope"}}"#;
        assert_eq!(
            error_message(StatusCode::FORBIDDEN, body),
            "Insufficient client scope"
        );
    }

    #[test]
    fn error_message_falls_back_to_reason() {
        assert_eq!(
            error_message(StatusCode::BAD_GATEWAY, "  "),
            "Bad Gateway"
        );
        assert_eq!(error_message(StatusCode::BAD_REQUEST, "nope"), "nope");
    }
}
