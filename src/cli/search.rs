use crate::{
    assembly::ReauthPolicy,
    cli::{
        auth::{BrowserSignIn, load_credential},
        render,
    },
    info,
    management::WordSession,
    resolver,
    spotify::{Catalog, SpotifyClient},
    warning,
};

/// One-shot search: resolves `words` and prints the singles found.
pub async fn search(words: String) {
    let Some(mut session) = open_session().await else {
        return;
    };
    let reauth = BrowserSignIn::new();

    if submit(&mut session, &words, &reauth).await {
        render::print_candidates(session.batches(), session.selection());
    }
}

/// One-shot create: resolves `words`, selects every single found and
/// creates the playlist.
pub async fn create(words: String, name: String, description: Option<String>) {
    let Some(mut session) = open_session().await else {
        return;
    };
    let reauth = BrowserSignIn::new();

    if !submit(&mut session, &words, &reauth).await {
        return;
    }

    let selected = session.select_all();
    info!("Selected {} singles.", selected);
    render::print_candidates(session.batches(), session.selection());

    session.set_name(name);
    session.set_description(description);

    let pb = render::spinner("Creating playlist...");
    let outcome = session.assemble(&reauth).await;
    pb.finish_and_clear();
    render::print_assembly(&outcome);
}

pub(crate) async fn open_session() -> Option<WordSession<SpotifyClient>> {
    let credential = load_credential().await;
    if credential.is_none() {
        warning!(
            "Not signed in and no client secret configured. Run wordplaylist auth first."
        );
        return None;
    }
    Some(WordSession::new(SpotifyClient::new(), credential))
}

/// Submits `input` to the session, reporting what happened.
///
/// Returns `false` when nothing was searched.
pub(crate) async fn submit<C: Catalog>(
    session: &mut WordSession<C>,
    input: &str,
    reauth: &BrowserSignIn,
) -> bool {
    let pb = render::spinner("Searching Spotify...");
    let report = session.search(input).await;
    pb.finish_and_clear();

    match report {
        Some(report) => {
            render::print_resolution(&report);
            let mut policy = ReauthPolicy::new(reauth);
            resolver::reauthenticate_if_rejected(&report, &mut policy).await;
            true
        }
        None => {
            warning!("Type in the words you'd like to use, separated with commas.");
            false
        }
    }
}
