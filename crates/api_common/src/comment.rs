use beans_db_schema::newtypes::{CommentId, PostId, UserId};
use beans_db_views::structs::CommentView;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
  pub auth: String,
  pub post_id: PostId,
  pub content: String,
  /// Client-generated correlation token. Echoed back verbatim so an
  /// optimistic cache entry can be matched to this authoritative result.
  pub form_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
  pub comment_view: CommentView,
  /// Users whose mention notifications were fanned out.
  pub recipient_ids: Vec<UserId>,
  pub form_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteComment {
  pub auth: String,
  pub comment_id: CommentId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteCommentResponse {
  pub id: CommentId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ListComments {
  pub post_id: PostId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommentsResponse {
  pub comments: Vec<CommentView>,
}
