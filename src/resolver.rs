//! Word resolution: turns the user's comma-separated words into search
//! batches.
//!
//! Each word gets its own `search_tracks` call. All calls are in flight at
//! once and their results are appended to the session's [`SearchBatches`]
//! as they complete, so the batch order is arrival order. Nothing already
//! accumulated is replaced. A rejected token is only acted upon after the
//! last search of a submission has come back.

use futures::stream::{FuturesUnordered, StreamExt};

use crate::{
    assembly::ReauthPolicy,
    errors::CatalogError,
    management::SearchBatches,
    spotify::Catalog,
    types::{SearchBatch, TrackArtist},
};

/// Outcome of one submission.
#[derive(Debug, Default)]
pub struct ResolutionReport {
    /// Number of searches issued.
    pub searched: usize,
    /// Words whose batch was appended, in arrival order.
    pub arrived: Vec<String>,
    /// Words whose search failed.
    pub failed: Vec<(String, CatalogError)>,
}

impl ResolutionReport {
    pub fn unauthorized(&self) -> bool {
        self.failed.iter().any(|(_, e)| e.is_unauthorized())
    }
}

/// Splits raw input on commas and trims every piece.
///
/// Only an entirely empty input is rejected (`None`). Empty pieces inside a
/// non-empty input are kept and will be searched as they are.
pub fn split_words(input: &str) -> Option<Vec<String>> {
    if input.is_empty() {
        return None;
    }

    Some(input.split(',').map(|w| w.trim().to_string()).collect())
}

/// Searches every word concurrently and appends one batch per successful
/// search to `batches` in completion order.
///
/// Failed searches add no batch and are listed in the report. Nothing here
/// re-authenticates; see [`reauthenticate_if_rejected`].
pub async fn resolve_words<C: Catalog + ?Sized>(
    catalog: &C,
    words: Vec<String>,
    batches: &mut SearchBatches,
) -> ResolutionReport {
    let mut report = ResolutionReport {
        searched: words.len(),
        ..Default::default()
    };

    let mut in_flight: FuturesUnordered<_> = words
        .into_iter()
        .map(|word| async move {
            let outcome = catalog.search_tracks(&word).await;
            (word, outcome)
        })
        .collect();

    while let Some((word, outcome)) = in_flight.next().await {
        match outcome {
            Ok(response) => {
                batches.push(SearchBatch {
                    origin_token: word.clone(),
                    results: response.tracks.items,
                });
                report.arrived.push(word);
            }
            Err(e) => report.failed.push((word, e)),
        }
    }

    report
}

/// Triggers re-authentication through `policy` if any search of `report`
/// was rejected as `Unauthorized`. Returns whether it did.
///
/// Called once the whole submission has been resolved, so the interactive
/// sign-in never holds up the remaining results.
pub async fn reauthenticate_if_rejected(
    report: &ResolutionReport,
    policy: &mut ReauthPolicy<'_>,
) -> bool {
    if !report.unauthorized() {
        return false;
    }
    policy.trigger().await;
    true
}

/// Credits line for a track: `by X.`, `by A and B.`, `by A, B, and C.`
///
/// Returns an empty string for a track without artists.
pub fn attribution(artists: &[TrackArtist]) -> String {
    let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();

    match names.as_slice() {
        [] => String::new(),
        [only] => format!("by {}.", only),
        [first, second] => format!("by {} and {}.", first, second),
        [rest @ .., last] => format!("by {}, and {}.", rest.join(", "), last),
    }
}
