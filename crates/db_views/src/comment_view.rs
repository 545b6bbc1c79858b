use crate::{post_view::creator_view, structs::CommentView};
use beans_db_schema::{
  newtypes::{CommentId, PostId, UserId},
  source::{
    comment::{Comment, CommentMention},
    user::{User, UserSafe},
  },
  storage::ObjectStore,
};
use beans_utils::error::{BeansError, BeansErrorExt2, BeansErrorType, BeansResult};
use diesel::sqlite::SqliteConnection;
use std::collections::HashMap;

fn assemble(
  conn: &mut SqliteConnection,
  store: &dyn ObjectStore,
  comments: Vec<Comment>,
) -> BeansResult<Vec<CommentView>> {
  let comment_ids: Vec<CommentId> = comments.iter().map(|c| c.id).collect();
  let creator_ids: Vec<UserId> = comments.iter().map(|c| c.creator_id).collect();

  let creators: HashMap<UserId, UserSafe> = User::read_safe_many(conn, &creator_ids)?
    .into_iter()
    .map(|u| (u.id, u))
    .collect();

  let mut mentions_by_comment: HashMap<CommentId, Vec<UserId>> = HashMap::new();
  for mention in CommentMention::for_comments(conn, &comment_ids)? {
    mentions_by_comment
      .entry(mention.comment_id)
      .or_default()
      .push(mention.recipient_id);
  }

  comments
    .into_iter()
    .map(|comment| {
      let creator = creators
        .get(&comment.creator_id)
        .cloned()
        .ok_or_else(|| BeansError::from(BeansErrorType::CouldntFindUser))?;
      Ok(CommentView {
        creator: creator_view(store, creator),
        mentions: mentions_by_comment.remove(&comment.id).unwrap_or_default(),
        comment,
      })
    })
    .collect()
}

impl CommentView {
  pub fn read(
    conn: &mut SqliteConnection,
    store: &dyn ObjectStore,
    comment_id: CommentId,
  ) -> BeansResult<Self> {
    let comment =
      Comment::read(conn, comment_id).with_beans_type(BeansErrorType::CouldntFindComment)?;
    assemble(conn, store, vec![comment])?
      .pop()
      .ok_or_else(|| BeansErrorType::CouldntFindComment.into())
  }

  /// All comments of a post, oldest first, with resolved authors and
  /// mention targets.
  pub fn for_post(
    conn: &mut SqliteConnection,
    store: &dyn ObjectStore,
    post_id: PostId,
  ) -> BeansResult<Vec<Self>> {
    let comments = Comment::for_post(conn, post_id)?;
    assemble(conn, store, comments)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use beans_db_schema::{
    naive_now,
    source::{
      comment::{CommentInsertForm, CommentMentionInsertForm},
      post::{Post, PostInsertForm},
      user::UserInsertForm,
    },
    storage::MemoryObjectStore,
    traits::Crud,
  };
  use pretty_assertions::assert_eq;

  #[test]
  fn test_for_post_resolves_mentions_in_order() {
    let conn = &mut establish();
    let store = MemoryObjectStore::new();
    let terry = create_user(conn, "terry");
    let dana = create_user(conn, "dana");
    let noah = create_user(conn, "noah");
    let post = Post::create(conn, &PostInsertForm::new(terry.id, naive_now())).unwrap();

    let comment = Comment::create(
      conn,
      &CommentInsertForm {
        post_id: post.id,
        creator_id: terry.id,
        content: "@noah and @dana should try this".into(),
        published: naive_now(),
      },
    )
    .unwrap();
    for recipient_id in [noah.id, dana.id] {
      CommentMention::create(
        conn,
        &CommentMentionInsertForm {
          comment_id: comment.id,
          recipient_id,
          published: naive_now(),
        },
      )
      .unwrap();
    }

    let views = CommentView::for_post(conn, &store, post.id).unwrap();
    assert_eq!(1, views.len());
    assert_eq!("terry", views[0].creator.user.name);
    assert_eq!(vec![noah.id, dana.id], views[0].mentions);
  }

  fn establish() -> SqliteConnection {
    beans_db_schema::utils::establish_test_connection()
  }

  fn create_user(conn: &mut SqliteConnection, name: &str) -> beans_db_schema::source::user::User {
    User::create(
      conn,
      &UserInsertForm {
        name: name.into(),
        bio: None,
        website: None,
        avatar: None,
        auth_id: format!("auth|{name}"),
        published: naive_now(),
      },
    )
    .unwrap()
  }
}
