use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use goldleaf_api::auth::password::hash_password;
use goldleaf_api::config::{BootstrapAdmin, ServerConfig};
use goldleaf_api::router::build_app_router;
use goldleaf_api::state::AppState;
use goldleaf_core::roles::Role;
use goldleaf_db::models::user::CreateUser;
use goldleaf_db::repositories::{SessionRepo, UserProfileRepo, UserRepo};
use goldleaf_db::DbPool;
use goldleaf_media::{CloudinaryConfig, CloudinaryHost};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "goldleaf_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = goldleaf_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    goldleaf_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    goldleaf_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    match SessionRepo::purge_stale(&pool).await {
        Ok(purged) => tracing::info!(purged, "Purged stale sessions"),
        Err(e) => tracing::warn!(error = %e, "Failed to purge stale sessions"),
    }

    if let Some(admin) = &config.bootstrap_admin {
        bootstrap_admin(&pool, admin)
            .await
            .expect("Failed to create bootstrap admin");
    }

    // --- Media host ---
    let cloudinary = CloudinaryConfig::from_env().expect("Invalid media host configuration");
    tracing::info!(cloud_name = %cloudinary.cloud_name, "Media host configured");
    let media = CloudinaryHost::new(cloudinary).expect("Failed to build media host client");

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        media: Arc::new(media),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    let shutdown_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(shutdown_timeout, pool.close())
        .await
        .is_err()
    {
        tracing::warn!(
            timeout_secs = config.shutdown_timeout_secs,
            "Timed out closing database pool"
        );
    }

    tracing::info!("Graceful shutdown complete");
}

/// Create the configured admin account when the database has no users yet.
async fn bootstrap_admin(pool: &DbPool, admin: &BootstrapAdmin) -> Result<(), sqlx::Error> {
    if UserRepo::count(pool).await? > 0 {
        return Ok(());
    }

    let password_hash = match hash_password(&admin.password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "Could not hash bootstrap admin password");
            return Ok(());
        }
    };

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            is_superuser: true,
        },
    )
    .await?;
    UserProfileRepo::set_role(pool, user.id, Role::Admin.as_str()).await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap admin created");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
