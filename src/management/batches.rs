use crate::types::{SearchBatch, Track};

/// One row of the candidate list: a surfaced single and the word it came from.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// 1-based position across all batches, used to toggle from the prompt.
    pub index: usize,
    /// Position of the batch the track belongs to.
    pub batch: usize,
    /// Word whose search returned the track.
    pub origin_token: &'a str,
    pub track: &'a Track,
}

/// Append-only log of search batches in the order their searches completed.
#[derive(Debug, Clone, Default)]
pub struct SearchBatches {
    batches: Vec<SearchBatch>,
}

impl SearchBatches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `batch` after every batch already stored.
    pub fn push(&mut self, batch: SearchBatch) {
        self.batches.push(batch);
    }

    /// Every batch, oldest first, with unfiltered results.
    pub fn batches(&self) -> &[SearchBatch] {
        &self.batches
    }

    /// Number of batches, not of tracks.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Surfaced singles of every batch, numbered from 1.
    ///
    /// Numbering runs across batches in storage order, so a number stays
    /// valid when later submissions append new batches.
    pub fn candidates(&self) -> Vec<Candidate<'_>> {
        self.batches
            .iter()
            .enumerate()
            .flat_map(|(b, batch)| {
                batch
                    .surfaced()
                    .map(move |track| (b, batch.origin_token.as_str(), track))
            })
            .enumerate()
            .map(|(i, (batch, origin_token, track))| Candidate {
                index: i + 1,
                batch,
                origin_token,
                track,
            })
            .collect()
    }

    /// The candidate numbered `index`, if any.
    pub fn candidate(&self, index: usize) -> Option<Candidate<'_>> {
        self.candidates().into_iter().find(|c| c.index == index)
    }
}
