use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use wordplaylist::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Sign in to Spotify
    Auth,

    /// Forget the stored Spotify token
    Logout,

    /// Show the signed-in Spotify user
    Whoami,

    /// Search singles for comma-separated words
    Search(SearchOptions),

    /// Create a playlist from every single found for the words
    Create(CreateOptions),

    /// Interactive session: search, pick tracks, create the playlist
    Session(SessionOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Comma-separated words, e.g. "be my, valentine"
    words: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// Comma-separated words, e.g. "be my, valentine"
    words: String,

    /// Playlist name
    #[clap(long)]
    name: String,

    /// Playlist description
    #[clap(long)]
    description: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct SessionOptions {
    /// Words to search right away
    words: Option<String>,

    /// Playlist name
    #[clap(long)]
    name: Option<String>,

    /// Playlist description
    #[clap(long)]
    description: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::Logout => cli::logout().await,
        Command::Whoami => cli::whoami().await,
        Command::Search(opt) => cli::search(opt.words).await,
        Command::Create(opt) => cli::create(opt.words, opt.name, opt.description).await,
        Command::Session(opt) => cli::session(opt.words, opt.name, opt.description).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
