use crate::{
  newtypes::{PostId, PostImageId, StorageKey},
  schema::post_image,
  source::post::Post,
};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// An image attached to a post. Lives and dies with its post; the delete
/// trigger on the post table removes these rows.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(Post))]
#[diesel(table_name = post_image)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PostImage {
  pub id: PostImageId,
  pub post_id: PostId,
  pub object_key: StorageKey,
  pub content_type: String,
  /// Position within the post's image strip, zero-based.
  pub position: i32,
  pub published: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = post_image)]
pub struct PostImageInsertForm {
  pub post_id: PostId,
  pub object_key: StorageKey,
  pub content_type: String,
  pub position: i32,
  pub published: NaiveDateTime,
}
