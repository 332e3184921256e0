use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    assembly::AssemblyReport,
    errors::AssemblyError,
    info,
    management::{SearchBatches, SelectionStore},
    resolver::{self, ResolutionReport},
    success,
    types::CandidateTableRow,
    warning,
};

/// Spinner shown while waiting on Spotify. Finish it before printing.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Prints one table per batch, numbered continuously across batches.
pub fn print_candidates(batches: &SearchBatches, selection: &SelectionStore) {
    if batches.is_empty() {
        info!("Nothing searched yet.");
        return;
    }

    let candidates = batches.candidates();
    for (b, batch) in batches.batches().iter().enumerate() {
        println!("\n{} {}", "For:".bold(), batch.origin_token.bright_blue());

        let rows: Vec<CandidateTableRow> = candidates
            .iter()
            .filter(|c| c.batch == b)
            .map(|c| CandidateTableRow {
                index: c.index,
                selected: if selection.is_selected(&c.track.uri) {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                },
                track: c.track.name.clone(),
                artists: resolver::attribution(&c.track.artists),
            })
            .collect();

        if rows.is_empty() {
            println!("  no singles found");
        } else {
            println!("{}", Table::new(rows));
        }
    }
}

/// Reports failed searches and how many came back.
pub fn print_resolution(report: &ResolutionReport) {
    for (word, e) in &report.failed {
        warning!("Search for \"{}\" failed: {}", word, e);
    }
    if !report.arrived.is_empty() {
        success!(
            "{} of {} searches returned results.",
            report.arrived.len(),
            report.searched
        );
    }
}

/// Reports the playlist, or why it could not be completed. A playlist left
/// empty on the account is always named.
pub fn print_assembly(outcome: &Result<AssemblyReport, AssemblyError>) {
    match outcome {
        Ok(report) => {
            success!(
                "Playlist \"{}\" created with {} tracks.",
                report.playlist.name,
                report.tracks_added
            );
            if let Some(url) = report.playlist.web_url() {
                info!("{}", url);
            }
        }
        Err(AssemblyError::TrackAdditionFailed { playlist, source }) => {
            warning!("Could not add the tracks: {}", source);
            warning!(
                "The empty playlist \"{}\" ({}) is still on your account.",
                playlist.name,
                playlist.id
            );
            if source.is_unauthorized() {
                info!("Sign in again, then create the playlist once more.");
            }
        }
        Err(e) => warning!("{}", e),
    }
}
