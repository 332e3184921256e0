use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    pub token: Option<Token>,
}

/// Bearer token handed to the catalog client.
///
/// Only a `User` credential can create playlists. An `App` credential comes
/// from the client-credentials grant and is good for searching only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    User(String),
    App(String),
}

impl Credential {
    pub fn access_token(&self) -> &str {
        match self {
            Credential::User(token) | Credential::App(token) => token,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Credential::User(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackPage {
    pub items: Vec<Track>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Track {
    pub uri: String,
    pub name: String,
    pub album: TrackAlbum,
    pub artists: Vec<TrackArtist>,
}

impl Track {
    pub fn release_type(&self) -> &ReleaseType {
        &self.album.album_type
    }

    pub fn is_single(&self) -> bool {
        self.album.album_type == ReleaseType::Single
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackAlbum {
    pub album_type: ReleaseType,
    #[serde(default)]
    pub name: String,
}

/// Spotify's `album_type`. Anything unknown decodes as `Other`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Single,
    Album,
    Compilation,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackArtist {
    pub name: String,
}

/// Results of one word's search, tagged with the word that produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBatch {
    pub origin_token: String,
    pub results: Vec<Track>,
}

impl SearchBatch {
    /// Tracks shown to the user: singles only.
    pub fn surfaced(&self) -> impl Iterator<Item = &Track> {
        self.results.iter().filter(|t| t.is_single())
    }
}

/// Name and description the playlist will be created with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistDraft {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePlaylistRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedPlaylist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub public: Option<bool>,
    #[serde(default)]
    pub snapshot_id: Option<String>,
    #[serde(default)]
    pub external_urls: Option<ExternalUrls>,
}

impl CreatedPlaylist {
    /// Link to the playlist on open.spotify.com, when Spotify sent one.
    pub fn web_url(&self) -> Option<&str> {
        self.external_urls
            .as_ref()
            .and_then(|u| u.spotify.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
    pub position: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snapshot {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub status: Option<u16>,
    pub message: Option<String>,
}

#[derive(Tabled)]
pub struct CandidateTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = " ")]
    pub selected: String,
    pub track: String,
    pub artists: String,
}
