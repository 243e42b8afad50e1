use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use gigmix::{cli, config, error, ticketmaster, types::Token};
use tokio::sync::Mutex;

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
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with the Spotify API and print a token for manual use
    Auth,

    /// List upcoming music events for a region
    Events(EventsOptions),

    /// Build a Spotify playlist from upcoming concert performers
    Playlist(PlaylistOptions),

    /// List the known region (DMA) identifiers
    Regions,

    /// Show the authenticated Spotify user
    Info,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct EventsOptions {
    /// Start of the search window (YYYY-MM-DD)
    #[clap(long)]
    pub start: String,

    /// End of the search window (YYYY-MM-DD)
    #[clap(long)]
    pub end: String,

    /// Region (DMA) identifier; see `gigmix regions`
    #[clap(long)]
    pub region: u32,

    /// Number of events to request
    #[clap(long, default_value_t = ticketmaster::DEFAULT_PAGE_SIZE)]
    pub size: u32,

    /// Print performer names only, one per line
    #[clap(long)]
    pub names_only: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    /// Start of the search window (YYYY-MM-DD)
    #[clap(long)]
    pub start: String,

    /// End of the search window (YYYY-MM-DD)
    #[clap(long)]
    pub end: String,

    /// Region (DMA) identifier; see `gigmix regions`
    #[clap(long)]
    pub region: u32,

    /// Playlist name; derived from region and date range when omitted
    #[clap(long)]
    pub name: Option<String>,

    /// Number of top tracks to add per artist
    #[clap(long, default_value_t = 3)]
    pub tracks_per_artist: usize,

    /// Number of events to request
    #[clap(long, default_value_t = ticketmaster::DEFAULT_PAGE_SIZE)]
    pub size: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    /// Shell to generate completions for
    #[clap(value_enum)]
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Failed to load configuration: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Auth => {
            let shared_state: Arc<Mutex<Option<Token>>> = Arc::new(Mutex::new(None));
            cli::auth::auth(shared_state).await;
        }
        Command::Events(opts) => {
            cli::events::events(&opts.start, &opts.end, opts.region, opts.size, opts.names_only)
                .await;
        }
        Command::Playlist(opts) => {
            cli::playlist::playlist(
                &opts.start,
                &opts.end,
                opts.region,
                opts.name,
                opts.tracks_per_artist,
                opts.size,
            )
            .await;
        }
        Command::Regions => {
            cli::regions::regions();
        }
        Command::Info => {
            cli::info::info().await;
        }
        Command::Completions(opts) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opts.shell, &mut cmd, name, &mut std::io::stdout());
        }
    }
}
