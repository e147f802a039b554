use crate::config::Config;
use crate::state::AppState;
use crate::web::create_router;
use anyhow::Context;
use figment::{Figment, providers::Env};
use sqlx::ConnectOptions;
use sqlx::postgres::PgPoolOptions;
use std::future::IntoFuture;
use std::process::ExitCode;
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info, warn};

/// Main application struct containing all necessary components
pub struct App {
    config: Config,
    app_state: AppState,
}

impl App {
    /// Create a new App instance with all necessary components initialized
    pub async fn new() -> Result<Self, anyhow::Error> {
        // Load configuration
        let config: Config = Figment::new()
            .merge(Env::raw())
            .extract()
            .context("Failed to load config")?;

        // Create database connection pool
        let connect_options = sqlx::postgres::PgConnectOptions::from_str(&config.database_url)
            .context("Failed to parse database URL")?
            .log_statements(tracing::log::LevelFilter::Debug)
            .log_slow_statements(tracing::log::LevelFilter::Warn, Duration::from_secs(1));

        let db_pool = PgPoolOptions::new()
            .min_connections(0)
            .max_connections(4)
            .acquire_timeout(Duration::from_secs(4))
            .idle_timeout(Duration::from_secs(60 * 2))
            .max_lifetime(Duration::from_secs(60 * 30))
            .connect_with(connect_options)
            .await
            .context("Failed to create database pool")?;

        info!(
            min_connections = 0,
            max_connections = 4,
            acquire_timeout = "4s",
            idle_timeout = "2m",
            max_lifetime = "30m",
            "database pool established"
        );

        // Run database migrations
        info!("Running database migrations...");
        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to run database migrations")?;
        info!("Database migrations completed successfully");

        let app_state = AppState::new(db_pool);

        // Inject a fixed development session if configured
        #[cfg(debug_assertions)]
        if let Some(ref uid) = config.dev_session_uid {
            let user = crate::data::sessions::upsert_user(
                &app_state.db_pool,
                uid,
                uid,
                &["ROLE_UH".to_owned()],
            )
            .await
            .context("Failed to seed dev user")?;
            app_state.session_cache.inject_dev_session("dev-session", user);
            info!(uid = %uid, "Dev auth bypass active -- use: Cookie: session=dev-session");
        }

        // Drop stale sessions left over from previous runs (non-fatal)
        match crate::data::sessions::purge_expired(&app_state.db_pool).await {
            Ok(0) => {}
            Ok(n) => info!(count = n, "Purged expired sessions"),
            Err(e) => warn!(error = ?e, "Failed to purge expired sessions (non-fatal)"),
        }

        Ok(App { config, app_state })
    }

    /// Bind the listener and serve until a shutdown signal arrives.
    pub async fn run(self) -> ExitCode {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.port));
        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!(error = ?e, port = self.config.port, "Failed to bind listener");
                return ExitCode::FAILURE;
            }
        };

        info!(port = self.config.port, "web server listening");

        let router = create_router(self.app_state.clone());

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .into_future(),
        );

        shutdown_signal().await;
        info!(
            timeout_secs = self.config.shutdown_timeout,
            "shutdown signal received, draining connections"
        );
        let _ = shutdown_tx.send(());

        let timeout = Duration::from_secs(self.config.shutdown_timeout);
        match tokio::time::timeout(timeout, server).await {
            Ok(Ok(Ok(()))) => {
                info!("web server stopped cleanly");
                ExitCode::SUCCESS
            }
            Ok(Ok(Err(e))) => {
                error!(error = ?e, "web server exited with error");
                ExitCode::FAILURE
            }
            Ok(Err(join_err)) => {
                error!(error = ?join_err, "web server task panicked");
                ExitCode::FAILURE
            }
            Err(_) => {
                warn!("graceful shutdown timed out, exiting anyway");
                ExitCode::SUCCESS
            }
        }
    }
}

/// Resolve on SIGINT (ctrl-c) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
