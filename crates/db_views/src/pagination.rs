use beans_db_schema::newtypes::PostId;
use beans_utils::error::{BeansErrorType, BeansResult};
use serde::{Deserialize, Serialize};

/// An opaque cursor into the feed. Pass it back unchanged to get the page
/// after the one it ends; the same cursor always names the same page
/// boundary. The format is internal and may change between versions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaginationCursor(pub String);

impl PaginationCursor {
  pub fn new(post_id: PostId) -> Self {
    // hex encoding to prevent ossification
    Self(format!("P{:x}", post_id.0))
  }

  pub fn post_id(&self) -> BeansResult<PostId> {
    let id_str = self
      .0
      .strip_prefix('P')
      .ok_or(BeansErrorType::CouldntParsePaginationToken)?;
    let id = i32::from_str_radix(id_str, 16)
      .map_err(|_| BeansErrorType::CouldntParsePaginationToken)?;
    Ok(PostId(id))
  }
}
