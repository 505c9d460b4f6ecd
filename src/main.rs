use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use clubhub::adapters::auth::{JwksConfig, JwksTokenVerifier};
use clubhub::adapters::http::{app_router, AppState};
use clubhub::adapters::memory::InMemoryStore;
use clubhub::adapters::stripe::{StripeConfig, StripePaymentGateway};
use clubhub::application::handlers::CheckoutUrls;
use clubhub::config::{AppConfig, DatabaseConfig, ServerConfig};
use clubhub::ports::{PaymentGateway, TokenVerifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.server);
    config.validate().context("Invalid configuration")?;

    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(
        JwksTokenVerifier::new(JwksConfig::from(&config.auth))
            .context("Failed to build token verifier")?,
    );
    let payment_gateway: Arc<dyn PaymentGateway> =
        Arc::new(StripePaymentGateway::new(StripeConfig::from(&config.payment)));
    let checkout_urls = CheckoutUrls::from(&config.payment);

    let (state, pool) = if config.database.is_in_memory() {
        tracing::warn!("Using the in-memory store; data is lost on exit");
        let state = AppState::from_store(
            Arc::new(InMemoryStore::new()),
            token_verifier,
            payment_gateway,
            checkout_urls,
        );
        (state, None)
    } else {
        let pool = connect(&config.database).await?;
        let state = AppState::postgres(pool.clone(), token_verifier, payment_gateway, checkout_urls);
        (state, Some(pool))
    };

    let app = app_router(state, &config.server);
    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, environment = ?config.server.environment, "ClubHub listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    tracing::info!("Server stopped");
    Ok(())
}

/// JSON lines in production, human-readable output elsewhere.
fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }
}

async fn connect(database: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .min_connections(database.min_connections)
        .max_connections(database.max_connections)
        .acquire_timeout(database.acquire_timeout())
        .idle_timeout(database.idle_timeout())
        .max_lifetime(database.max_lifetime())
        .connect(&database.url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    tracing::info!("Connected to PostgreSQL");

    if database.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations applied");
    }
    Ok(pool)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
