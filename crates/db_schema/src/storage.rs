use crate::newtypes::StorageKey;
use beans_utils::error::{BeansErrorType, BeansResult};
use std::{collections::HashSet, sync::RwLock};
use url::Url;

/// The seam to the object storage service. Uploads happen client-side against
/// a one-time url, so this side only ever resolves and releases references.
pub trait ObjectStore: Send + Sync {
  /// Resolve a storage reference to a fetchable url. `None` when the object
  /// is missing or the service cannot serve it.
  fn resolve(&self, key: &StorageKey) -> Option<Url>;
  /// Release the underlying object. Releasing a reference that is already
  /// gone is not an error.
  fn delete(&self, key: &StorageKey) -> BeansResult<()>;
}

/// In-memory [`ObjectStore`] used by tests and local development.
pub struct MemoryObjectStore {
  base: Url,
  objects: RwLock<HashSet<StorageKey>>,
}

impl MemoryObjectStore {
  pub fn new() -> Self {
    Self {
      base: Url::parse("http://localhost:8388/media/").expect("parse base url"),
      objects: RwLock::new(HashSet::new()),
    }
  }

  /// Registers an uploaded object, as the upload callback would.
  pub fn put(&self, key: &StorageKey) {
    if let Ok(mut objects) = self.objects.write() {
      objects.insert(key.clone());
    }
  }

  pub fn contains(&self, key: &StorageKey) -> bool {
    self
      .objects
      .read()
      .map(|objects| objects.contains(key))
      .unwrap_or(false)
  }
}

impl Default for MemoryObjectStore {
  fn default() -> Self {
    Self::new()
  }
}

impl ObjectStore for MemoryObjectStore {
  fn resolve(&self, key: &StorageKey) -> Option<Url> {
    if !self.contains(key) {
      return None;
    }
    self.base.join(&key.0).ok()
  }

  fn delete(&self, key: &StorageKey) -> BeansResult<()> {
    let mut objects = self
      .objects
      .write()
      .map_err(|_| BeansErrorType::ObjectStoreError("storage lock poisoned".into()))?;
    objects.remove(key);
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_resolve_and_delete() {
    let store = MemoryObjectStore::new();
    let key = StorageKey("v60/abc123.jpg".into());
    assert!(store.resolve(&key).is_none());

    store.put(&key);
    let url = store.resolve(&key).unwrap();
    assert_eq!("http://localhost:8388/media/v60/abc123.jpg", url.as_str());

    store.delete(&key).unwrap();
    assert!(store.resolve(&key).is_none());
    // releasing twice is fine
    store.delete(&key).unwrap();
  }
}
