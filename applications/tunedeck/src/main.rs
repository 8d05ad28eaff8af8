/// TuneDeck - music discovery and playback client
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tune_core::{MostPlayedList, MostPlayedStore, Song};
use tune_playback::{PlaybackEvent, PlaybackTracker, Player, SilentMedia};
use tune_service_client::MusicServiceClient;
use tunedeck::{format_song_row, play_through, AppConfig, Catalog};

#[derive(Parser)]
#[command(name = "tunedeck")]
#[command(about = "Browse and play music from the TuneDeck service", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./tunedeck.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List trending songs
    Trending,
    /// List the service-wide most played songs
    MostPlayed,
    /// Search the service
    Search {
        /// Free-text query
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Print the playable audio URL for a video id
    Resolve {
        /// Video id to resolve
        video_id: String,
    },
    /// Show the local most played list, newest first
    Recent {
        /// Number of entries to show
        #[arg(short, long, default_value_t = tunedeck::RECENTLY_PLAYED_LIMIT)]
        limit: usize,
    },
    /// Play a song through without audio output, recording it as played
    Play {
        /// Video id to play
        video_id: String,
        /// Simulated seconds between progress ticks
        #[arg(long, default_value_t = 1.0)]
        step: f64,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunedeck=info,tune_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Trending => {
            let mut catalog = catalog(&config)?;
            print_songs(catalog.refresh_trending().await);
        }
        Commands::MostPlayed => {
            let mut catalog = catalog(&config)?;
            print_songs(catalog.refresh_most_played().await);
        }
        Commands::Search { query } => {
            let mut catalog = catalog(&config)?;
            print_songs(catalog.search(&query.join(" ")).await);
        }
        Commands::Resolve { video_id } => {
            let client = MusicServiceClient::new(config.service_config())?;
            let url = client
                .audio_url(&video_id)
                .await
                .with_context(|| format!("Failed to resolve {}", video_id))?;
            println!("{}", url);
        }
        Commands::Recent { limit } => {
            let store = config.most_played_store()?;
            let list = MostPlayedList::from_songs(store.load());
            let recent: Vec<Song> = list.recent(limit).into_iter().cloned().collect();
            print_songs(&recent);
        }
        Commands::Play { video_id, step } => {
            play(&config, &video_id, step).await?;
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn catalog(config: &AppConfig) -> anyhow::Result<Catalog> {
    let client = MusicServiceClient::new(config.service_config())?;
    Ok(Catalog::new(client))
}

async fn play(config: &AppConfig, video_id: &str, step: f64) -> anyhow::Result<()> {
    let client = MusicServiceClient::new(config.service_config())?;

    // Pick up title and duration from whichever list knows the song
    let mut catalog = Catalog::new(client.clone());
    catalog.refresh().await;
    let song = match catalog.find(video_id) {
        Some((song, _)) => song.clone(),
        None => {
            tracing::warn!(video_id = %video_id, "Song not in any list, length unknown");
            Song::new(video_id, "", 0.0)
        }
    };

    let store = config.most_played_store()?;
    let tracker = PlaybackTracker::new(
        config.playback_config(),
        Box::new(SilentMedia),
        Box::new(store),
    );
    let mut player = Player::new(tracker, Arc::new(client));

    let events = play_through(&mut player, song.clone(), vec![song], step).await?;
    for event in events.iter().filter(|e| !matches!(e, PlaybackEvent::PositionUpdate { .. })) {
        println!("{}", serde_json::to_string(event)?);
    }

    Ok(())
}

fn print_songs(songs: &[Song]) {
    if songs.is_empty() {
        println!("(no songs)");
        return;
    }
    for song in songs {
        println!("{}", format_song_row(song));
    }
}
