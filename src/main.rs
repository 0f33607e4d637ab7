use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use motamot::api::{self, AppState};
use motamot::config::AppConfig;
use motamot::db::Database;
use motamot::generation::SentenceClient;
use motamot::illustrate::{self, BatchOptions, ImageGenerator, ILLUSTRATIONS};
use motamot::images::ImageStore;
use motamot::play;
use motamot::session::SessionManager;
use motamot::settings::{CredentialStore, Settings, API_KEY_ENV};
use motamot::vocabulary::{format_with_article, VOCABULARY};

#[derive(Parser)]
#[command(name = "motamot")]
#[command(about = "French flashcards that turn ten clicked words into a funny sentence")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Warm the storage cache with every illustration at startup
        #[arg(long)]
        prefetch: bool,
    },
    /// Play in the terminal (Enter clicks, q quits)
    Play,
    /// Manage the Groq API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },
    /// Generate every illustration
    Illustrate {
        /// Where to write the images
        #[arg(long, default_value = "generated-images")]
        out_dir: PathBuf,
    },
    /// Generate the illustrations missing from a previous run, with retries
    Regenerate {
        /// Where the images live
        #[arg(long, default_value = "generated-images")]
        out_dir: PathBuf,
    },
    /// List the vocabulary
    Words,
}

#[derive(Subcommand)]
enum KeyAction {
    /// Store the key (prompted for when omitted)
    Set { key: Option<String> },
    /// Remove the stored key
    Clear,
    /// Show whether a key is configured
    Status,
}

/// Initialize tracing with output to stderr (interactive commands) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "motamot=info,tower_http=debug".into()),
    );

    if use_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn open_database(config: &AppConfig) -> Result<Database> {
    let db = match &config.db_path {
        Some(path) => Database::open(path.clone())?,
        None => Database::open_default()?,
    };
    db.migrate()?;
    Ok(db)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Serve {
        port: 3000,
        prefetch: false,
    });

    // Keep stdout for the user in everything but the server
    let use_stderr = !matches!(command, Commands::Serve { .. });
    init_tracing(use_stderr);

    let config = AppConfig::from_env();

    match command {
        Commands::Serve { port, prefetch } => {
            let db = open_database(&config)?;
            let settings = Settings::new(Arc::new(db));
            let images = ImageStore::from_config(&config);
            let sessions = SessionManager::new(
                SentenceClient::from_config(&config),
                Arc::new(settings.clone()),
                images.clone(),
            )
            .with_ttl(config.session_ttl);

            if prefetch {
                let images = images.clone();
                tokio::spawn(async move {
                    let urls: Vec<String> = VOCABULARY
                        .iter()
                        .filter_map(|e| e.illustration)
                        .map(|f| images.public_url(f))
                        .collect();
                    images.prefetch(&urls).await;
                });
            }

            let app = api::create_router(AppState {
                sessions,
                settings,
                images,
            });

            let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
            tracing::info!("Motamot listening on http://127.0.0.1:{}", port);

            axum::serve(listener, app).await?;
        }
        Commands::Play => {
            let db = open_database(&config)?;
            let settings = Settings::new(Arc::new(db));
            let generator = SentenceClient::from_config(&config);
            let stdin = io::stdin();
            play::run(stdin.lock(), io::stdout(), &generator, &settings).await?;
        }
        Commands::Key { action } => {
            let db = open_database(&config)?;
            let settings = Settings::new(Arc::new(db));
            run_key_action(&settings, action)?;
        }
        Commands::Illustrate { out_dir } => {
            let generator = ImageGenerator::from_config(&config);
            let report = illustrate::run_batch(
                &generator,
                ILLUSTRATIONS,
                &out_dir,
                BatchOptions::generate_all(),
            )
            .await?;
            illustrate::print_summary(&report, &out_dir);
        }
        Commands::Regenerate { out_dir } => {
            let generator = ImageGenerator::from_config(&config);
            let report = illustrate::run_batch(
                &generator,
                ILLUSTRATIONS,
                &out_dir,
                BatchOptions::regenerate_missing(),
            )
            .await?;
            illustrate::print_summary(&report, &out_dir);
        }
        Commands::Words => {
            let images = ImageStore::from_config(&config);
            for entry in VOCABULARY {
                match entry.illustration {
                    Some(file) => println!(
                        "{:<20} {:<10} {}",
                        format_with_article(entry),
                        entry.category.as_str(),
                        images.public_url(file)
                    ),
                    None => println!(
                        "{:<20} {}",
                        format_with_article(entry),
                        entry.category.as_str()
                    ),
                }
            }
        }
    }

    Ok(())
}

fn run_key_action(settings: &Settings, action: KeyAction) -> Result<()> {
    match action {
        KeyAction::Set { key } => {
            let key = match key {
                Some(key) => key,
                None => prompt_for_key()?,
            };
            if key.trim().is_empty() {
                bail!("No API key provided");
            }
            settings.set_credential(&key)?;
            println!("API key stored.");
        }
        KeyAction::Clear => {
            if settings.clear_credential()? {
                println!("API key removed.");
            } else {
                println!("No API key was stored.");
            }
        }
        KeyAction::Status => match settings.status()?.source {
            Some(source) => println!("API key configured ({}).", source.description()),
            None => println!(
                "No API key configured. Run `motamot key set` or set {}.",
                API_KEY_ENV
            ),
        },
    }
    Ok(())
}

fn prompt_for_key() -> Result<String> {
    print!("Clé API Groq (https://console.groq.com/keys): ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
