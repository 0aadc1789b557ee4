use std::time::Duration;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use sf_api::app::create_app;
use sf_api::state::{AppState, Repositories};
use sf_core::services::DeliveryMode;
use sf_infra::{build_email_sender, DatabasePool};
use sf_shared::AppConfig;

/// How often expired one-time codes are swept from the database
const OTP_PURGE_INTERVAL: Duration = Duration::from_secs(15 * 60);

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();
    tracing::info!(environment = %config.environment, "Starting storefront API");

    let pool = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to the database")?;
    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .context("failed to apply database migrations")?;
    }

    let sender = build_email_sender(&config.email).context("failed to configure email delivery")?;
    let state = web::Data::new(
        AppState::build(
            Repositories::mysql(&pool),
            sender,
            &config,
            DeliveryMode::Background,
        )
        .with_database(pool.clone()),
    );

    let verification = state.verification.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(OTP_PURGE_INTERVAL);
        loop {
            ticker.tick().await;
            if let Err(e) = verification.purge_expired().await {
                tracing::warn!(error = %e, "Failed to purge expired one-time codes");
            }
        }
    });

    let bind_address = config.server.bind_address();
    tracing::info!(address = %bind_address, "Server listening");

    let cors = config.cors.clone();
    let max_payload_size = config.server.max_payload_size;
    let mut server =
        HttpServer::new(move || create_app(state.clone(), &cors, max_payload_size))
            .keep_alive(Duration::from_secs(config.server.keep_alive))
            .client_request_timeout(Duration::from_secs(config.server.request_timeout));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    tracing::info!("Server stopped, closing database pool");
    pool.close().await;
    Ok(())
}
