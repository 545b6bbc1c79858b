use crate::pagination::PaginationCursor;
use beans_db_schema::{
  newtypes::UserId,
  source::{
    bean_profile::BeanProfile, comment::Comment, gear::Gear, post::Post, user::UserSafe,
  },
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use url::Url;

/// The summary badges a feed card shows. The like count is the post's
/// denormalized counter; the comment count is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCounts {
  pub comments: i64,
  pub likes: i32,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatorView {
  pub user: UserSafe,
  /// Avatar storage reference resolved to something fetchable.
  pub avatar_url: Option<Url>,
}

/// A post joined with everything a card or a detail page renders, so the
/// client never fans out follow-up reads.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
  pub post: Post,
  pub creator: CreatorView,
  pub bean_profile: Option<BeanProfile>,
  pub brewer: Option<Gear>,
  pub grinder: Option<Gear>,
  pub filter: Option<Gear>,
  /// Resolved image urls in strip order. References the storage layer could
  /// not resolve are filtered out, never left as holes.
  pub image_urls: Vec<Url>,
  pub counts: PostCounts,
}

impl PostView {
  pub fn brewer_name(&self) -> Option<&str> {
    self
      .brewer
      .as_ref()
      .map(|g| g.name.as_str())
      .or(self.post.brewer.as_deref())
  }

  pub fn grinder_name(&self) -> Option<&str> {
    self
      .grinder
      .as_ref()
      .map(|g| g.name.as_str())
      .or(self.post.grinder.as_deref())
  }

  pub fn filter_name(&self) -> Option<&str> {
    self
      .filter
      .as_ref()
      .map(|g| g.name.as_str())
      .or(self.post.filter.as_deref())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
  pub comment: Comment,
  pub creator: CreatorView,
  /// Users this comment mentions, in resolution order. Used for bolding
  /// names and nothing else after creation.
  pub mentions: Vec<UserId>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
  pub posts: Vec<PostView>,
  pub next_page: Option<PaginationCursor>,
}
