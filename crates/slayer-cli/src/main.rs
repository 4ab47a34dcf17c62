//! Manga Slayer CLI: command-line client for the Manga Slayer API.
//!
//! Set SLAYER_API_URL to point at the server (default http://localhost:8001).

use anyhow::Context;
use clap::{Parser, Subcommand};
use slayer_api_client::ApiClient;
use slayer_cli::{init_tracing, parse_speed, print_json};

#[derive(Parser)]
#[command(name = "slayer", about = "Manga Slayer API CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage manga sources
    Sources {
        #[command(subcommand)]
        sub: SourceCommands,
    },
    /// Search manga
    Search {
        /// Search text
        #[arg(default_value = "")]
        query: String,
        /// Only search this source
        #[arg(long)]
        source: Option<String>,
    },
    /// Show a manga with its chapters
    Manga {
        manga_id: String,
    },
    /// Show a chapter with its pages
    Chapter {
        chapter_id: String,
    },
    /// Start a download
    Download {
        #[command(subcommand)]
        sub: DownloadCommands,
    },
    /// Download statistics and disk usage
    Stats,
    /// Manga that are downloading or downloaded
    Downloads,
    /// Translate a chapter title
    Translate {
        chapter_id: String,
        /// Target language
        #[arg(long, default_value = "ar")]
        lang: String,
    },
    /// Reader preferences
    Prefs {
        #[command(subcommand)]
        sub: PrefsCommands,
    },
    /// Reading progress
    Progress {
        #[command(subcommand)]
        sub: ProgressCommands,
    },
}

#[derive(Subcommand)]
enum SourceCommands {
    /// List built-in and custom sources
    List,
    /// Add a custom source
    Add {
        name: String,
        url: String,
        /// Store the source disabled
        #[arg(long)]
        disabled: bool,
    },
    /// Delete a custom source
    Delete {
        source_id: String,
    },
}

#[derive(Subcommand)]
enum DownloadCommands {
    /// Download one chapter
    Chapter { chapter_id: String },
    /// Download a whole manga
    Manga { manga_id: String },
}

#[derive(Subcommand)]
enum PrefsCommands {
    /// Show current preferences
    Get,
    /// Change the auto-scroll speed (1-10)
    SetSpeed {
        #[arg(value_parser = parse_speed)]
        speed: i32,
    },
}

#[derive(Subcommand)]
enum ProgressCommands {
    /// Show progress for a manga
    Get { manga_id: String },
    /// Record progress for a manga
    Set {
        manga_id: String,
        page: i32,
        #[arg(long)]
        chapter: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = ApiClient::from_env().context("Failed to create API client")?;

    match cli.command {
        Commands::Sources { sub } => match sub {
            SourceCommands::List => print_json(&client.list_sources().await?)?,
            SourceCommands::Add {
                name,
                url,
                disabled,
            } => {
                let response = client.add_source(&name, &url, Some(!disabled)).await?;
                print_json(&response)?;
            }
            SourceCommands::Delete { source_id } => {
                print_json(&client.delete_source(&source_id).await?)?;
            }
        },
        Commands::Search { query, source } => {
            let response = client.search(&query, source.as_deref()).await?;
            print_json(&response)?;
        }
        Commands::Manga { manga_id } => print_json(&client.get_manga(&manga_id).await?)?,
        Commands::Chapter { chapter_id } => print_json(&client.get_chapter(&chapter_id).await?)?,
        Commands::Download { sub } => match sub {
            DownloadCommands::Chapter { chapter_id } => {
                print_json(&client.download_chapter(&chapter_id).await?)?;
            }
            DownloadCommands::Manga { manga_id } => {
                print_json(&client.download_manga(&manga_id).await?)?;
            }
        },
        Commands::Stats => print_json(&client.download_stats().await?)?,
        Commands::Downloads => print_json(&client.list_downloads().await?)?,
        Commands::Translate { chapter_id, lang } => {
            print_json(&client.translate_chapter(&chapter_id, &lang).await?)?;
        }
        Commands::Prefs { sub } => match sub {
            PrefsCommands::Get => print_json(&client.get_preferences().await?)?,
            PrefsCommands::SetSpeed { speed } => {
                let mut preferences = client.get_preferences().await?;
                preferences.auto_scroll.speed = speed;
                client.update_preferences(&preferences).await?;
                print_json(&preferences)?;
            }
        },
        Commands::Progress { sub } => match sub {
            ProgressCommands::Get { manga_id } => {
                print_json(&client.get_progress(&manga_id).await?)?;
            }
            ProgressCommands::Set {
                manga_id,
                page,
                chapter,
            } => {
                let response = client
                    .update_progress(&manga_id, chapter.as_deref(), page)
                    .await?;
                print_json(&response)?;
            }
        },
    }

    Ok(())
}
