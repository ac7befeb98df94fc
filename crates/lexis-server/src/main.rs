use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lexis_anki::CardTemplate;
use lexis_config::Config;
use lexis_core::types::VocabCandidate;
use tokio::signal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod app;
mod deck;
mod error;
mod routes;
mod state;

use self::state::AppState;

#[derive(Parser)]
#[command(name = "lexis-server", version, about = "Vocabulary and dictionary enrichment service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Print vocabulary candidates for a text file as JSON
    Vocab {
        file: PathBuf,
        #[arg(long)]
        threshold: Option<f64>,
    },
    /// Print the dictionary record for an entry as JSON
    Lookup { language: String, entry: String },
    /// Build cards for a text file and export them as an Anki package
    Deck {
        file: PathBuf,
        output: PathBuf,
        #[arg(long)]
        threshold: Option<f64>,
        #[arg(long, default_value = "en")]
        language: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let state = AppState::new(Config::new())?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => run(state, shutdown_signal()).await,
        Command::Vocab { file, threshold } => {
            let candidates = extract_file(&state, &file, threshold).await?;
            println!("{}", serde_json::to_string_pretty(&candidates)?);
            Ok(())
        }
        Command::Lookup { language, entry } => {
            let record = state.dictionary.lookup(&language, &entry).await?;
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        Command::Deck {
            file,
            output,
            threshold,
            language,
        } => {
            let Some(client) = state.anki.as_ref() else {
                anyhow::bail!("Anki export is disabled, set ANKI_ENABLED=true");
            };
            client
                .check_connection()
                .await
                .context("AnkiConnect is not reachable")?;

            let candidates = extract_file(&state, &file, threshold).await?;
            let cards = deck::build_cards(&state, &language, &candidates).await;
            let template = CardTemplate::for_deck(
                state.config.anki.deck.clone(),
                state.config.anki.model.clone(),
            );

            let note_ids = lexis_anki::export_deck(client, &template, &cards, &output).await?;
            println!("Exported {} cards to {}", note_ids.len(), output.display());
            Ok(())
        }
    }
}

async fn extract_file(
    state: &AppState,
    file: &Path,
    threshold: Option<f64>,
) -> Result<Vec<VocabCandidate>> {
    let text = tokio::fs::read_to_string(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let threshold = threshold.unwrap_or(state.config.vocab.threshold);

    Ok(state.vocab.extract(&text, threshold)?)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,lexis=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl+c: {e}");
        // Without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
}

async fn run(state: AppState, shutdown: impl Future<Output = ()> + Send + 'static) -> Result<()> {
    let addr = state.config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app::build_app(state))
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("Shutdown requested");
        })
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
