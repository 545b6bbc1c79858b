use beans_db_schema::{
  newtypes::{BeanProfileId, GearId, PostId, StorageKey, UserId},
  source::post::RecipeStep,
};
use beans_db_views::{
  pagination::PaginationCursor,
  structs::{CommentView, PostView},
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// An image the client already uploaded through a one-time url. Creation
/// refuses the post unless every reference resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostImageParams {
  pub object_key: StorageKey,
  pub content_type: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePost {
  pub auth: String,
  pub bean_name: Option<String>,
  pub bean_profile_id: Option<BeanProfileId>,
  pub ratio: Option<String>,
  pub dose_grams: Option<f32>,
  pub water_grams: Option<f32>,
  pub temperature: Option<f32>,
  pub grind_setting: Option<String>,
  pub brewer_id: Option<GearId>,
  pub grinder_id: Option<GearId>,
  pub filter_id: Option<GearId>,
  pub steps: Vec<RecipeStep>,
  pub images: Vec<PostImageParams>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
  pub post_view: PostView,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetPost {
  pub id: PostId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPostResponse {
  pub post_view: PostView,
  pub comments: Vec<CommentView>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetFeed {
  /// Restrict to one author; covers "list mine" and "list by user".
  pub creator_id: Option<UserId>,
  pub cursor: Option<PaginationCursor>,
  pub limit: Option<i64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetFeedResponse {
  pub posts: Vec<PostView>,
  pub next_page: Option<PaginationCursor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePost {
  pub auth: String,
  pub id: PostId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeletePostResponse {
  pub id: PostId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostLike {
  pub auth: String,
  pub post_id: PostId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostLike {
  pub auth: String,
  pub post_id: PostId,
}
