use crate::{
    assembly::{self, AssemblyReport, ReauthPolicy, Reauthenticator},
    errors::AssemblyError,
    management::{SearchBatches, SelectionStore},
    resolver::{self, ResolutionReport},
    spotify::Catalog,
    types::{Credential, PlaylistDraft},
};

/// State of one browsing session: the catalog client with its credential,
/// the accumulated search batches, the selection and the playlist draft.
///
/// Everything is mutated from the single task driving the session, so no
/// locking is involved.
pub struct WordSession<C: Catalog> {
    catalog: C,
    credential: Option<Credential>,
    batches: SearchBatches,
    selection: SelectionStore,
    draft: PlaylistDraft,
}

impl<C: Catalog> WordSession<C> {
    pub fn new(mut catalog: C, credential: Option<Credential>) -> Self {
        catalog.set_access_token(credential.as_ref().map(|c| c.access_token().to_string()));
        WordSession {
            catalog,
            credential,
            batches: SearchBatches::new(),
            selection: SelectionStore::new(),
            draft: PlaylistDraft::default(),
        }
    }

    /// Replaces the credential, e.g. after a fresh sign-in.
    pub fn set_credential(&mut self, credential: Option<Credential>) {
        self.catalog
            .set_access_token(credential.as_ref().map(|c| c.access_token().to_string()));
        self.credential = credential;
    }

    /// Credential the catalog client currently sends, if any.
    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn batches(&self) -> &SearchBatches {
        &self.batches
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn draft(&self) -> &PlaylistDraft {
        &self.draft
    }

    /// Resolves the words of `input` and appends their batches, without
    /// reacting to rejected tokens.
    ///
    /// Returns `None` without searching when `input` is empty.
    pub async fn search(&mut self, input: &str) -> Option<ResolutionReport> {
        let words = resolver::split_words(input)?;
        Some(resolver::resolve_words(&self.catalog, words, &mut self.batches).await)
    }

    /// [`WordSession::search`] followed by at most one re-authentication
    /// when any of the searches was rejected.
    pub async fn submit(
        &mut self,
        input: &str,
        reauth: &dyn Reauthenticator,
    ) -> Option<ResolutionReport> {
        let report = self.search(input).await?;
        let mut policy = ReauthPolicy::new(reauth);
        resolver::reauthenticate_if_rejected(&report, &mut policy).await;
        Some(report)
    }

    /// Flips the selection of `uri` and returns the new state.
    ///
    /// Any uri can be toggled, surfaced or not.
    pub fn toggle(&mut self, uri: &str) -> bool {
        self.selection.toggle(uri)
    }

    /// Toggles the candidate shown at 1-based `index`.
    ///
    /// Returns `None` when no candidate has that index.
    pub fn toggle_index(&mut self, index: usize) -> Option<bool> {
        let uri = self.batches.candidate(index)?.track.uri.clone();
        Some(self.selection.toggle(&uri))
    }

    /// Selects every surfaced single that is not selected yet.
    pub fn select_all(&mut self) -> usize {
        let uris: Vec<String> = self
            .batches
            .candidates()
            .iter()
            .map(|c| c.track.uri.clone())
            .collect();

        let mut newly_selected = 0;
        for uri in uris {
            if !self.selection.is_selected(&uri) {
                self.selection.toggle(&uri);
                newly_selected += 1;
            }
        }
        newly_selected
    }

    /// Sets the playlist name. Blank names are only rejected on assembly.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    /// Sets the playlist description; blank text clears it.
    pub fn set_description(&mut self, description: Option<String>) {
        self.draft.description = description.filter(|d| !d.trim().is_empty());
    }

    /// Runs the assembly workflow with the current selection and draft.
    pub async fn assemble(
        &self,
        reauth: &dyn Reauthenticator,
    ) -> Result<AssemblyReport, AssemblyError> {
        let mut policy = ReauthPolicy::new(reauth);
        assembly::assemble(
            &self.catalog,
            self.credential.as_ref(),
            &self.selection,
            &self.draft,
            &mut policy,
        )
        .await
    }
}
