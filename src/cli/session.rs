use rustyline::{DefaultEditor, error::ReadlineError};

use crate::{
    assembly::Reauthenticator,
    cli::{
        auth::{BrowserSignIn, load_credential},
        render,
        search::submit,
    },
    info,
    management::WordSession,
    spotify::{Catalog, SpotifyClient},
    success,
    types::Credential,
    warning,
};

const PROMPT: &str = "wordplaylist> ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Search(String),
    Toggle(Vec<usize>),
    List,
    Selected,
    Name(String),
    Description(String),
    Create,
    SignIn,
    Help,
    Quit,
    Unknown(String),
}

/// Parses one prompt line. Blank lines yield `None`.
///
/// Bare numbers (`2 5` or `2,5`) are a shorthand for `toggle`.
pub fn parse_command(line: &str) -> Option<SessionCommand> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    let command = match cmd {
        "search" | "s" | "+" => SessionCommand::Search(rest.to_string()),
        "toggle" | "t" => parse_indexes(rest)
            .map(SessionCommand::Toggle)
            .unwrap_or_else(|| SessionCommand::Unknown(line.to_string())),
        "list" | "ls" => SessionCommand::List,
        "selected" => SessionCommand::Selected,
        "name" => SessionCommand::Name(rest.to_string()),
        "desc" | "description" => SessionCommand::Description(rest.to_string()),
        "create" => SessionCommand::Create,
        "signin" | "login" => SessionCommand::SignIn,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        _ => parse_indexes(line)
            .map(SessionCommand::Toggle)
            .unwrap_or_else(|| SessionCommand::Unknown(line.to_string())),
    };

    Some(command)
}

fn parse_indexes(input: &str) -> Option<Vec<usize>> {
    let indexes: Option<Vec<usize>> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<usize>().ok())
        .collect();

    indexes.filter(|i| !i.is_empty())
}

fn print_help() {
    println!(
        "\
  search <words>   search Spotify for comma-separated words (adds to the list)
  <n> [n ...]      toggle the numbered tracks (same as toggle <n> ...)
  list             show the candidates again
  selected         show the selected tracks
  name <text>      set the playlist name
  desc <text>      set the playlist description
  create           create the playlist from the selected tracks
  signin           sign in to Spotify again
  quit             leave the session"
    );
}

/// Interactive session: search, toggle, name and create in one place.
pub async fn session(words: Option<String>, name: Option<String>, description: Option<String>) {
    let credential = load_credential().await;
    if credential.is_none() {
        warning!("Not signed in. Type signin to authorize with Spotify.");
    }

    let mut session = WordSession::new(SpotifyClient::new(), credential);
    let reauth = BrowserSignIn::new();

    if let Some(name) = name {
        session.set_name(name);
    }
    session.set_description(description);

    if let Some(words) = words {
        if submit(&mut session, &words, &reauth).await {
            render::print_candidates(session.batches(), session.selection());
        }
    }

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            warning!("Cannot start interactive prompt: {}", e);
            return;
        }
    };

    print_help();

    loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                warning!("Input error: {}", e);
                break;
            }
        };

        let Some(command) = parse_command(&line) else {
            continue;
        };
        let _ = rl.add_history_entry(line.as_str());

        if command == SessionCommand::Quit {
            break;
        }
        handle(&mut session, command, &reauth).await;

        if let Some(token) = reauth.take_token().await {
            session.set_credential(Some(Credential::User(token.access_token)));
        }
    }
}

async fn handle<C: Catalog>(
    session: &mut WordSession<C>,
    command: SessionCommand,
    reauth: &BrowserSignIn,
) {
    match command {
        SessionCommand::Search(words) => {
            if submit(session, &words, reauth).await {
                render::print_candidates(session.batches(), session.selection());
            }
        }
        SessionCommand::Toggle(indexes) => {
            for index in indexes {
                match session.toggle_index(index) {
                    Some(true) => info!("Selected #{}", index),
                    Some(false) => info!("Deselected #{}", index),
                    None => warning!("There is no track #{}", index),
                }
            }
        }
        SessionCommand::List => render::print_candidates(session.batches(), session.selection()),
        SessionCommand::Selected => {
            let selected = session.selection().selected_uris();
            if selected.is_empty() {
                info!("Nothing selected yet.");
            }
            for candidate in session.batches().candidates() {
                if session.selection().is_selected(&candidate.track.uri) {
                    info!("#{} {}", candidate.index, candidate.track.name);
                }
            }
        }
        SessionCommand::Name(name) => {
            session.set_name(name);
            info!("Playlist name: {}", session.draft().name);
        }
        SessionCommand::Description(description) => {
            session.set_description(Some(description));
            info!(
                "Playlist description: {}",
                session.draft().description.as_deref().unwrap_or("<none>")
            );
        }
        SessionCommand::Create => {
            let pb = render::spinner("Creating playlist...");
            let outcome = session.assemble(reauth).await;
            pb.finish_and_clear();
            render::print_assembly(&outcome);
            if outcome.is_ok() {
                success!("Keep toggling to build another one, or quit.");
            }
        }
        SessionCommand::SignIn => reauth.reauthenticate().await,
        SessionCommand::Help => print_help(),
        SessionCommand::Unknown(line) => {
            warning!("Unknown command: {}. Type help for the list.", line)
        }
        SessionCommand::Quit => {}
    }
}
