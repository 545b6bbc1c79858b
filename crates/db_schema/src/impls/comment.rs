use crate::{
  newtypes::{CommentId, PostId},
  schema::{comment, comment_mention},
  source::comment::{Comment, CommentInsertForm, CommentMention, CommentMentionInsertForm},
};
use beans_utils::error::BeansResult;
use diesel::{insert_into, prelude::*};

// Comments are immutable other than delete, so there is no update path at
// all, and no Crud impl.
impl Comment {
  pub fn create(conn: &mut SqliteConnection, form: &CommentInsertForm) -> BeansResult<Self> {
    Ok(
      insert_into(comment::table)
        .values(form)
        .get_result::<Self>(conn)?,
    )
  }

  pub fn read(conn: &mut SqliteConnection, comment_id: CommentId) -> BeansResult<Self> {
    Ok(comment::table.find(comment_id).first::<Self>(conn)?)
  }

  pub fn delete(conn: &mut SqliteConnection, comment_id: CommentId) -> BeansResult<usize> {
    Ok(diesel::delete(comment::table.find(comment_id)).execute(conn)?)
  }

  /// Comments of a post, oldest first.
  pub fn for_post(conn: &mut SqliteConnection, post_id: PostId) -> BeansResult<Vec<Self>> {
    Ok(
      comment::table
        .filter(comment::post_id.eq(post_id))
        .order((comment::published.asc(), comment::id.asc()))
        .load::<Self>(conn)?,
    )
  }

  pub fn count_for_posts(
    conn: &mut SqliteConnection,
    post_ids: &[PostId],
  ) -> BeansResult<Vec<(PostId, i64)>> {
    Ok(
      comment::table
        .filter(comment::post_id.eq_any(post_ids.to_vec()))
        .group_by(comment::post_id)
        .select((comment::post_id, diesel::dsl::count_star()))
        .load::<(PostId, i64)>(conn)?,
    )
  }
}

impl CommentMention {
  pub fn create(
    conn: &mut SqliteConnection,
    form: &CommentMentionInsertForm,
  ) -> BeansResult<Self> {
    Ok(
      insert_into(comment_mention::table)
        .values(form)
        .get_result::<Self>(conn)?,
    )
  }

  pub fn for_comment(
    conn: &mut SqliteConnection,
    comment_id: CommentId,
  ) -> BeansResult<Vec<Self>> {
    Ok(
      comment_mention::table
        .filter(comment_mention::comment_id.eq(comment_id))
        .order(comment_mention::id.asc())
        .load::<Self>(conn)?,
    )
  }

  pub fn for_comments(
    conn: &mut SqliteConnection,
    comment_ids: &[CommentId],
  ) -> BeansResult<Vec<Self>> {
    Ok(
      comment_mention::table
        .filter(comment_mention::comment_id.eq_any(comment_ids.to_vec()))
        .order(comment_mention::id.asc())
        .load::<Self>(conn)?,
    )
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    impls::{post::tests::test_post_form, user::tests::test_user_form},
    naive_now,
    source::{
      comment::{Comment, CommentInsertForm, CommentMention, CommentMentionInsertForm},
      post::Post,
      user::User,
    },
    traits::Crud,
    utils::establish_test_connection,
  };
  use pretty_assertions::assert_eq;

  #[test]
  fn test_crud_and_mentions() {
    let conn = &mut establish_test_connection();
    let terry = User::create(conn, &test_user_form("terry", "auth|terry")).unwrap();
    let dana = User::create(conn, &test_user_form("dana", "auth|dana")).unwrap();
    let inserted_post = Post::create(conn, &test_post_form(terry.id)).unwrap();

    let inserted_comment = Comment::create(
      conn,
      &CommentInsertForm {
        post_id: inserted_post.id,
        creator_id: dana.id,
        content: "lovely bloom on this one @terry".into(),
        published: naive_now(),
      },
    )
    .unwrap();

    CommentMention::create(
      conn,
      &CommentMentionInsertForm {
        comment_id: inserted_comment.id,
        recipient_id: terry.id,
        published: naive_now(),
      },
    )
    .unwrap();

    let comments = Comment::for_post(conn, inserted_post.id).unwrap();
    assert_eq!(1, comments.len());
    assert_eq!(inserted_comment, comments[0]);

    let mentions = CommentMention::for_comment(conn, inserted_comment.id).unwrap();
    assert_eq!(vec![terry.id], mentions.iter().map(|m| m.recipient_id).collect::<Vec<_>>());

    // deleting the comment takes its mention rows with it
    Comment::delete(conn, inserted_comment.id).unwrap();
    assert_eq!(
      0,
      CommentMention::for_comment(conn, inserted_comment.id)
        .unwrap()
        .len()
    );
  }

  #[test]
  fn test_count_for_posts() {
    let conn = &mut establish_test_connection();
    let terry = User::create(conn, &test_user_form("terry", "auth|terry")).unwrap();
    let first_post = Post::create(conn, &test_post_form(terry.id)).unwrap();
    let second_post = Post::create(conn, &test_post_form(terry.id)).unwrap();

    for content in ["nice", "very nice"] {
      Comment::create(
        conn,
        &CommentInsertForm {
          post_id: first_post.id,
          creator_id: terry.id,
          content: content.into(),
          published: naive_now(),
        },
      )
      .unwrap();
    }

    let counts = Comment::count_for_posts(conn, &[first_post.id, second_post.id]).unwrap();
    assert_eq!(vec![(first_post.id, 2)], counts);
  }
}
