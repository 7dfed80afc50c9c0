//! HP Keeper Engine - Main entry point.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hpkeeper_engine::api;
use hpkeeper_engine::infrastructure::{
    config::{load_dotenv_from, AppConfig},
    fixtures::load_character_fixture,
    memory::InMemoryCharacterRepo,
};
use hpkeeper_engine::use_cases::SeedOutcome;
use hpkeeper_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root as well as the working directory.
    load_dotenv_from(&Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join(".."));
    load_dotenv_from(Path::new("."));

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hpkeeper_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting HP Keeper Engine");

    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Fixture: {}", config.character_fixture_path.display());

    let app = Arc::new(App::new(Arc::new(InMemoryCharacterRepo::new())));

    // Seed the store from the fixture, if there is one
    let fixture = load_character_fixture(&config.character_fixture_path)
        .await
        .context("Failed to load character fixture")?;
    match fixture {
        Some(character) => {
            let outcome = app
                .use_cases
                .seed
                .execute(vec![character])
                .await
                .context("Failed to seed character store")?;
            if let SeedOutcome::Seeded { count } = outcome {
                tracing::info!(count, "Character store seeded");
            }
        }
        None => {
            tracing::warn!(
                path = %config.character_fixture_path.display(),
                "Character fixture not found, starting with an empty store"
            );
        }
    }

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = config
        .cors_allowed_origins
        .as_deref()
        .and_then(api::build_cors_layer)
    {
        router = router.layer(cors);
    }

    // Start server
    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
