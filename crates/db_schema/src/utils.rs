use beans_utils::{error::BeansResult, settings::Settings};
use diesel::{
  prelude::*,
  r2d2::{ConnectionManager, Pool, PooledConnection},
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub fn run_migrations(conn: &mut SqliteConnection) -> BeansResult<()> {
  conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| anyhow::anyhow!("couldnt run migrations: {e}"))?;
  Ok(())
}

pub fn build_db_pool(settings: &Settings) -> BeansResult<DbPool> {
  let manager = ConnectionManager::<SqliteConnection>::new(settings.get_database_url());
  let pool = Pool::builder()
    .max_size(settings.database_pool_size())
    .build(manager)?;
  run_migrations(&mut *pool.get()?)?;
  Ok(pool)
}

/// A private in-memory database with the schema applied, one per call.
pub fn establish_test_connection() -> SqliteConnection {
  let mut conn =
    SqliteConnection::establish(":memory:").expect("establish sqlite connection");
  run_migrations(&mut conn).expect("run migrations");
  conn
}
