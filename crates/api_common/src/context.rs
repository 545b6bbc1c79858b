use crate::notify::Notifier;
use beans_db_schema::{
  storage::{MemoryObjectStore, ObjectStore},
  utils::{build_db_pool, run_migrations, DbConn, DbPool},
};
use beans_utils::{error::BeansResult, settings::Settings};
use diesel::r2d2::{ConnectionManager, Pool};
use std::sync::Arc;

/// Everything an api operation needs: the connection pool and the two
/// external collaborators, object storage and push delivery.
#[derive(Clone)]
pub struct AppContext {
  pool: DbPool,
  object_store: Arc<dyn ObjectStore>,
  notifier: Arc<dyn Notifier>,
  settings: Settings,
}

impl AppContext {
  pub fn create(
    pool: DbPool,
    object_store: Arc<dyn ObjectStore>,
    notifier: Arc<dyn Notifier>,
    settings: Settings,
  ) -> Self {
    Self {
      pool,
      object_store,
      notifier,
      settings,
    }
  }

  pub fn init(
    object_store: Arc<dyn ObjectStore>,
    notifier: Arc<dyn Notifier>,
  ) -> BeansResult<Self> {
    let settings = Settings::get();
    let pool = build_db_pool(&settings)?;
    Ok(Self::create(pool, object_store, notifier, settings))
  }

  /// Context over a private in-memory database, for tests and local runs.
  /// The pool is capped at one connection so every caller sees the same
  /// database.
  pub fn new_in_memory(
    object_store: Arc<dyn ObjectStore>,
    notifier: Arc<dyn Notifier>,
  ) -> BeansResult<Self> {
    let pool = Pool::builder()
      .max_size(1)
      .build(ConnectionManager::new(":memory:"))?;
    run_migrations(&mut *pool.get()?)?;
    Ok(Self::create(
      pool,
      object_store,
      notifier,
      Settings::default(),
    ))
  }

  pub fn new_in_memory_with_default_store(
    notifier: Arc<dyn Notifier>,
  ) -> BeansResult<Self> {
    Self::new_in_memory(Arc::new(MemoryObjectStore::new()), notifier)
  }

  pub fn conn(&self) -> BeansResult<DbConn> {
    Ok(self.pool.get()?)
  }

  pub fn object_store(&self) -> &dyn ObjectStore {
    self.object_store.as_ref()
  }

  pub fn notifier(&self) -> &dyn Notifier {
    self.notifier.as_ref()
  }

  pub fn settings(&self) -> &Settings {
    &self.settings
  }
}
