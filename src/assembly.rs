//! Playlist assembly: user lookup → playlist creation → track addition.
//!
//! Each step is a catalog call whose failure ends the invocation. Nothing
//! is retried and nothing is rolled back: if adding tracks fails, the
//! playlist created one step earlier stays on the account, empty, and the
//! returned [`AssemblyError::TrackAdditionFailed`] says so.
//!
//! Expired credentials are handled by [`ReauthPolicy`], which wraps the
//! catalog calls and starts the external sign-in when Spotify answers 401.

use std::future::Future;

use async_trait::async_trait;

use crate::{
    errors::{AssemblyError, CatalogError},
    management::SelectionStore,
    spotify::Catalog,
    types::{
        AddTracksRequest, CreatePlaylistRequest, CreatedPlaylist, Credential, PlaylistDraft, User,
    },
};

/// Insertion position for the selected tracks.
pub const INSERT_POSITION: u32 = 0;

/// Starts the external sign-in, e.g. by opening Spotify's authorization page.
///
/// Implementations run the flow once. Whether it succeeds is not reported
/// back; the user re-submits afterwards.
#[async_trait]
pub trait Reauthenticator: Send + Sync {
    async fn reauthenticate(&self);
}

/// Watches catalog outcomes and triggers re-authentication on `Unauthorized`.
///
/// Fires at most once per policy value. Create one per user action so a
/// rejected token leads to exactly one sign-in prompt, however many calls
/// of that action were rejected.
pub struct ReauthPolicy<'a> {
    reauth: &'a dyn Reauthenticator,
    fired: bool,
}

impl<'a> ReauthPolicy<'a> {
    /// Policy that has not fired yet.
    pub fn new(reauth: &'a dyn Reauthenticator) -> Self {
        ReauthPolicy {
            reauth,
            fired: false,
        }
    }

    /// Passes `outcome` through, triggering re-authentication first if it
    /// is `Unauthorized`.
    pub async fn inspect<T>(
        &mut self,
        outcome: Result<T, CatalogError>,
    ) -> Result<T, CatalogError> {
        if let Err(CatalogError::Unauthorized) = &outcome {
            self.trigger().await;
        }
        outcome
    }

    /// Awaits `call` and inspects its outcome.
    pub async fn run<T, F>(&mut self, call: F) -> Result<T, CatalogError>
    where
        F: Future<Output = Result<T, CatalogError>>,
    {
        let outcome = call.await;
        self.inspect(outcome).await
    }

    /// Starts re-authentication unless this policy already did.
    pub async fn trigger(&mut self) {
        if self.fired {
            return;
        }
        self.fired = true;
        self.reauth.reauthenticate().await;
    }

    pub fn fired(&self) -> bool {
        self.fired
    }
}

/// Result of a successful assembly.
/// What a successful assembly left on the account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub owner: User,
    pub playlist: CreatedPlaylist,
    pub tracks_added: usize,
    pub snapshot_id: String,
}

/// Creates a playlist from `draft` holding every selected track.
///
/// Guards run before any remote call, in this order: empty selection, no
/// signed-in user credential (which also triggers re-authentication), blank
/// name. Then one call each to `current_user`, `create_playlist` and
/// `add_tracks`, the last one carrying all selected uris at position 0.
///
/// A rejected token during the first two calls ends the invocation as
/// [`AssemblyError::NotAuthenticated`]. Once the playlist exists, any
/// failure (a rejected token included) is reported as
/// [`AssemblyError::TrackAdditionFailed`] carrying that playlist.
pub async fn assemble<C: Catalog + ?Sized>(
    catalog: &C,
    credential: Option<&Credential>,
    selection: &SelectionStore,
    draft: &PlaylistDraft,
    policy: &mut ReauthPolicy<'_>,
) -> Result<AssemblyReport, AssemblyError> {
    let uris = selection.selected_uris();
    if uris.is_empty() {
        return Err(AssemblyError::NothingSelected);
    }

    if !credential.is_some_and(Credential::is_user) {
        policy.trigger().await;
        return Err(AssemblyError::NotAuthenticated);
    }

    if draft.name.trim().is_empty() {
        return Err(AssemblyError::MissingName);
    }

    let owner = policy
        .run(catalog.current_user())
        .await
        .map_err(|e| step_error(e, AssemblyError::UserLookupFailed))?;

    let request = CreatePlaylistRequest {
        name: draft.name.clone(),
        description: draft.description.clone(),
        public: false,
    };
    let playlist = policy
        .run(catalog.create_playlist(&owner.id, &request))
        .await
        .map_err(|e| step_error(e, AssemblyError::PlaylistCreationFailed))?;

    let request = AddTracksRequest {
        uris,
        position: INSERT_POSITION,
    };
    let outcome = policy.run(catalog.add_tracks(&playlist.id, &request)).await;
    // the playlist exists from here on, so every failure has to name it
    let snapshot = match outcome {
        Ok(snapshot) => snapshot,
        Err(source) => return Err(AssemblyError::TrackAdditionFailed { playlist, source }),
    };

    Ok(AssemblyReport {
        owner,
        playlist,
        tracks_added: request.uris.len(),
        snapshot_id: snapshot.snapshot_id,
    })
}

fn step_error(err: CatalogError, wrap: fn(CatalogError) -> AssemblyError) -> AssemblyError {
    match err {
        CatalogError::Unauthorized | CatalogError::NotAuthenticated => {
            AssemblyError::NotAuthenticated
        }
        other => wrap(other),
    }
}
