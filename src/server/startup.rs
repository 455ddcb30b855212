use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::AppError};

/// Opens the directory database and brings its schema up to date.
///
/// Connects to `DATABASE_URL` and applies any pending migrations, which create the
/// `bot`, `server` and `user` collections on a fresh database. SQL statement logging is
/// left to the `sqlx` tracing target so `RUST_LOG` controls it.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with every collection present
/// - `Err(AppError::DbErr)` - Connection or migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};

    let mut options = ConnectOptions::new(&config.database_url);
    options.sqlx_logging(false);

    let db = Database::connect(options).await?;

    let pending = Migrator::get_pending_migrations(&db).await?.len();
    Migrator::up(&db, None).await?;

    tracing::info!("Directory database ready, {} migration(s) applied", pending);

    Ok(db)
}
