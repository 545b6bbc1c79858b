use crate::{
  newtypes::{CommentId, MentionId, PostId, UserId},
  schema::{comment, comment_mention},
  source::post::Post,
};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A comment on a post. Immutable after creation, other than delete.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(Post))]
#[diesel(table_name = comment)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Comment {
  pub id: CommentId,
  pub post_id: PostId,
  pub creator_id: UserId,
  pub content: String,
  pub published: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comment)]
pub struct CommentInsertForm {
  pub post_id: PostId,
  pub creator_id: UserId,
  pub content: String,
  pub published: NaiveDateTime,
}

/// A user mentioned by a comment, resolved from `@name` tokens when the
/// comment was created and never re-resolved.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable, Associations)]
#[diesel(belongs_to(Comment))]
#[diesel(table_name = comment_mention)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CommentMention {
  pub id: MentionId,
  pub comment_id: CommentId,
  pub recipient_id: UserId,
  pub published: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comment_mention)]
pub struct CommentMentionInsertForm {
  pub comment_id: CommentId,
  pub recipient_id: UserId,
  pub published: NaiveDateTime,
}
