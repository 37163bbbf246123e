//! Startup initialization for logging, database, sessions, and HTTP clients.

use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::{gate::CategoryGateRepository, user::UserRepository},
    error::AppError,
    model::application::Category,
};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up to date before the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or to run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}

/// Builds the session layer backed by the same Sqlite database.
///
/// Sessions live in their own table managed by the store; expiry matches a
/// week of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to attach to the router
/// - `Err(AppError)` - Session table migration failed
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());
    session_store.migrate().await?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session_layer)
}

/// Creates the HTTP client used for Steam calls.
///
/// Redirects are disabled; the only redirects in the login flow are the
/// ones this server issues itself.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    Ok(client)
}

/// Seeds one open gate row per category if absent.
///
/// Keeps the public gate listing complete from the first request onward
/// without ever flipping a gate an admin already closed.
pub async fn seed_category_gates(db: &DatabaseConnection) -> Result<(), AppError> {
    let gate_repo = CategoryGateRepository::new(db);

    for category in Category::ALL {
        gate_repo.ensure_exists(category).await?;
    }

    Ok(())
}

/// Logs how the first admin will come to exist, if none does yet.
///
/// # Arguments
/// - `db` - Database connection for the admin count
/// - `config` - Configuration carrying the optional bootstrap steam id
pub async fn warn_if_no_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    match config.bootstrap_admin {
        Some(steam_id) => tracing::info!(
            "No admin user yet; steam id {} will receive the admin role on first login",
            steam_id
        ),
        None => tracing::warn!(
            "No admin user exists and ADMIN_STEAM_ID is not set; the admin surface is unreachable"
        ),
    }

    Ok(())
}
