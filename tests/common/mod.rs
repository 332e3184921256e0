#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use wordplaylist::{
    assembly::Reauthenticator,
    errors::CatalogError,
    spotify::Catalog,
    types::{
        AddTracksRequest, CreatePlaylistRequest, CreatedPlaylist, ReleaseType, SearchResponse,
        Snapshot, Track, TrackAlbum, TrackArtist, TrackPage, User,
    },
};

pub fn track(uri: &str, name: &str, release_type: ReleaseType, artists: &[&str]) -> Track {
    Track {
        uri: uri.to_string(),
        name: name.to_string(),
        album: TrackAlbum {
            album_type: release_type,
            name: format!("{} (release)", name),
        },
        artists: artists
            .iter()
            .map(|a| TrackArtist {
                name: a.to_string(),
            })
            .collect(),
    }
}

pub fn single(uri: &str, name: &str) -> Track {
    track(uri, name, ReleaseType::Single, &["Alice"])
}

pub fn playlist(id: &str, name: &str) -> CreatedPlaylist {
    CreatedPlaylist {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        public: Some(false),
        snapshot_id: None,
        external_urls: None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CurrentUser,
    Search(String),
    CreatePlaylist {
        owner_id: String,
        request: CreatePlaylistRequest,
    },
    AddTracks {
        playlist_id: String,
        request: AddTracksRequest,
    },
}

/// In-memory catalog that records every call.
pub struct FakeCatalog {
    pub token: Option<String>,
    calls: Mutex<Vec<Call>>,
    searches: HashMap<String, Result<Vec<Track>, CatalogError>>,
    delays: HashMap<String, Duration>,
    pub user: Result<User, CatalogError>,
    pub created: Result<CreatedPlaylist, CatalogError>,
    pub added: Result<Snapshot, CatalogError>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        FakeCatalog {
            token: None,
            calls: Mutex::new(Vec::new()),
            searches: HashMap::new(),
            delays: HashMap::new(),
            user: Ok(User {
                id: "listener-1".into(),
                display_name: Some("Listener".into()),
            }),
            created: Ok(playlist("pl-1", "Created")),
            added: Ok(Snapshot {
                snapshot_id: "snap-1".into(),
            }),
        }
    }

    pub fn with_search(mut self, word: &str, tracks: Vec<Track>) -> Self {
        self.searches.insert(word.to_string(), Ok(tracks));
        self
    }

    pub fn with_failed_search(mut self, word: &str, err: CatalogError) -> Self {
        self.searches.insert(word.to_string(), Err(err));
        self
    }

    pub fn with_delay(mut self, word: &str, millis: u64) -> Self {
        self.delays
            .insert(word.to_string(), Duration::from_millis(millis));
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Search(_)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    fn set_access_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    async fn current_user(&self) -> Result<User, CatalogError> {
        self.record(Call::CurrentUser);
        self.user.clone()
    }

    async fn search_tracks(&self, query: &str) -> Result<SearchResponse, CatalogError> {
        self.record(Call::Search(query.to_string()));
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }

        let items = match self.searches.get(query) {
            Some(Ok(tracks)) => tracks.clone(),
            Some(Err(e)) => return Err(e.clone()),
            None => Vec::new(),
        };

        Ok(SearchResponse {
            tracks: TrackPage {
                items,
                total: None,
            },
        })
    }

    async fn create_playlist(
        &self,
        owner_id: &str,
        request: &CreatePlaylistRequest,
    ) -> Result<CreatedPlaylist, CatalogError> {
        self.record(Call::CreatePlaylist {
            owner_id: owner_id.to_string(),
            request: request.clone(),
        });
        self.created.clone().map(|mut p| {
            p.name = request.name.clone();
            p
        })
    }

    async fn add_tracks(
        &self,
        playlist_id: &str,
        request: &AddTracksRequest,
    ) -> Result<Snapshot, CatalogError> {
        self.record(Call::AddTracks {
            playlist_id: playlist_id.to_string(),
            request: request.clone(),
        });
        self.added.clone()
    }
}

/// Counts re-authentication triggers.
#[derive(Default)]
pub struct CountingReauth {
    count: AtomicUsize,
}

impl CountingReauth {
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Reauthenticator for CountingReauth {
    async fn reauthenticate(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}
