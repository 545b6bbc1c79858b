use crate::error::BeansResult;
use deser_hjson::from_str;
use merge::Merge;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::{env, fs, sync::RwLock};

static CONFIG_FILE: &str = "config/config.hjson";

static SETTINGS: Lazy<RwLock<Settings>> = Lazy::new(|| {
  RwLock::new(match Settings::init() {
    Ok(settings) => settings,
    Err(e) => {
      tracing::warn!("couldnt load settings, using defaults: {}", e);
      Settings::default()
    }
  })
});

#[derive(Debug, Deserialize, Clone, Merge)]
pub struct Settings {
  pub database: Option<DatabaseConfig>,
  pub hostname: Option<String>,
  pub feed: Option<FeedConfig>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      database: Some(DatabaseConfig::default()),
      hostname: Some("localhost".into()),
      feed: Some(FeedConfig::default()),
    }
  }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
  pub url: String,
  pub pool_size: u32,
}

impl Default for DatabaseConfig {
  fn default() -> Self {
    Self {
      url: "beans.sqlite3".into(),
      pool_size: 5,
    }
  }
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
  pub default_limit: i64,
  pub max_limit: i64,
}

impl Default for FeedConfig {
  fn default() -> Self {
    Self {
      default_limit: 20,
      max_limit: 50,
    }
  }
}

impl Settings {
  fn init() -> BeansResult<Self> {
    let config_location =
      env::var("BEANS_CONFIG_LOCATION").unwrap_or_else(|_| CONFIG_FILE.to_string());
    let mut config = from_str::<Settings>(&fs::read_to_string(config_location)?)?;
    // fill anything the file left out from the defaults
    config.merge(Settings::default());
    Ok(config)
  }

  pub fn get() -> Self {
    SETTINGS.read().expect("read settings").clone()
  }

  pub fn get_database_url(&self) -> String {
    if let Ok(url) = env::var("BEANS_DATABASE_URL") {
      return url;
    }
    self
      .database
      .clone()
      .unwrap_or_default()
      .url
  }

  pub fn database_pool_size(&self) -> u32 {
    self.database.clone().unwrap_or_default().pool_size
  }

  pub fn hostname(&self) -> String {
    self.hostname.clone().unwrap_or_else(|| "localhost".into())
  }

  pub fn feed(&self) -> FeedConfig {
    self.feed.clone().unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_merge_fills_missing_sections() {
    let mut partial = from_str::<Settings>("{ hostname: \"beans.coffee\" }").unwrap();
    partial.merge(Settings::default());

    assert_eq!("beans.coffee", partial.hostname());
    assert_eq!(20, partial.feed().default_limit);
    assert_eq!("beans.sqlite3", partial.database.unwrap().url);
  }

  #[test]
  fn test_file_sections_win_over_defaults() {
    let mut partial =
      from_str::<Settings>("{ feed: { default_limit: 10, max_limit: 25 } }").unwrap();
    partial.merge(Settings::default());

    assert_eq!(10, partial.feed().default_limit);
    assert_eq!(25, partial.feed().max_limit);
  }
}
