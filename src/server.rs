//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, resolver selection, and the Axum
//! server lifecycle.

use crate::application::services::{LinkService, RedirectService};
use crate::config::Config;
use crate::infrastructure::dns::{NullResolver, SystemResolver};
use crate::infrastructure::persistence::PgLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::url_normalizer::HostResolver;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - DNS resolver (system lookup, or no-op when `DNS_CHECK=false`)
/// - Link and redirect services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let resolver: Arc<dyn HostResolver> = if config.dns_check {
        Arc::new(SystemResolver::new(Duration::from_secs(
            config.dns_timeout_seconds,
        )))
    } else {
        tracing::warn!("DNS liveness check disabled; destinations are accepted unverified");
        Arc::new(NullResolver)
    };

    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(repository.clone(), resolver));
    let redirect_service = Arc::new(RedirectService::new(repository));

    let state = AppState {
        link_service,
        redirect_service,
        base_url: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
