use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spoxy::{cli, config, error, warning};

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
    /// Print the formatted records as JSON instead of tables
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Request an access token with the configured client credentials
    Token,

    /// Look up an album by id
    Album(IdOption),

    /// Look up a track by id
    Track(IdOption),

    /// Look up an artist by id
    Artist(IdOption),

    /// Show the top tracks of an artist
    TopTracks(TopTracksOptions),

    /// Look up a playlist by id
    Playlist(IdOption),

    /// Search albums or tracks
    Search(SearchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct IdOption {
    /// Spotify id of the resource
    id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct TopTracksOptions {
    /// Spotify id of the artist
    artist_id: String,

    /// Market as ISO 3166-1 alpha-2 country code
    #[clap(long, default_value = "US")]
    market: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// Search query
    query: String,

    /// What to search for
    #[clap(long = "type", value_enum, default_value_t = cli::SearchKind::Track)]
    kind: cli::SearchKind,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let config = match config::Config::from_env() {
        Ok(config) => config,
        Err(e) => error!(
            "{}\nSet it in the environment or in {}",
            e,
            config::env_path().display()
        ),
    };

    let json = cli.json;
    match cli.command {
        Command::Token => cli::token(&config, json).await,
        Command::Album(opt) => cli::album(&config, &opt.id, json).await,
        Command::Track(opt) => cli::track(&config, &opt.id, json).await,
        Command::Artist(opt) => cli::artist(&config, &opt.id, json).await,
        Command::TopTracks(opt) => {
            cli::top_tracks(&config, &opt.artist_id, &opt.market, json).await
        }
        Command::Playlist(opt) => cli::playlist(&config, &opt.id, json).await,
        Command::Search(opt) => cli::search(&config, &opt.query, opt.kind, json).await,
        Command::Completions(_) => {}
    }
}
