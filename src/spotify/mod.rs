//! # Spotify Integration Module
//!
//! The integration layer between wordplaylist and Spotify: the Web API
//! client used by the word resolver and the playlist assembly workflow, and
//! the OAuth flows that produce the bearer tokens it sends.
//!
//! ## Architecture
//!
//! ```text
//! Session / CLI layer
//!          ↓
//! Catalog trait (resolver + assembly only see this)
//!          ↓
//! SpotifyClient (reqwest, JSON)        auth (PKCE + client credentials)
//!          ↓                                   ↓
//! Spotify Web API                      Spotify accounts service
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - current user
//! - `GET /search?q=..&type=track` - first page of track results
//! - `POST /users/{user_id}/playlists` - create a playlist
//! - `POST /playlists/{playlist_id}/tracks` - add tracks
//! - `POST /api/token` - code exchange and client-credentials grant
//!
//! ## Error Handling
//!
//! Every catalog call is a plain request/response: no retry, no backoff, no
//! caching. A 401 becomes [`CatalogError::Unauthorized`]; deciding what to
//! do about it is left to [`crate::assembly::ReauthPolicy`], so the client
//! never prompts or opens a browser on its own.

pub mod auth;
mod client;

use async_trait::async_trait;

pub use client::SpotifyClient;

use crate::{
    errors::CatalogError,
    types::{
        AddTracksRequest, CreatePlaylistRequest, CreatedPlaylist, SearchResponse, Snapshot, User,
    },
};

/// The four catalog operations the resolver and the workflow need.
///
/// Every call uses the access token set through [`Catalog::set_access_token`];
/// without one the call fails with [`CatalogError::NotAuthenticated`].
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Replaces the bearer token; `None` removes it.
    fn set_access_token(&mut self, token: Option<String>);

    /// Profile of the user the token belongs to.
    async fn current_user(&self) -> Result<User, CatalogError>;

    /// First page of track results for `query`, all release types included.
    async fn search_tracks(&self, query: &str) -> Result<SearchResponse, CatalogError>;

    /// Creates a playlist on `owner_id`'s account.
    async fn create_playlist(
        &self,
        owner_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatedPlaylist, CatalogError>;

    /// Inserts `request.uris` at `request.position` in one call.
    async fn add_tracks(
        &self,
        playlist_id: &str,
        request: &AddTracksRequest,
    ) -> Result<Snapshot, CatalogError>;
}
