use crate::{
  newtypes::UserId,
  schema::{bean_profile, comment, comment_mention, device_token, gear, post, post_like, user_, user_follower},
  source::user::{User, UserInsertForm, UserSafe, UserUpdateForm},
  traits::Crud,
};
use beans_utils::error::{BeansError, BeansErrorType, BeansResult};
use diesel::{insert_into, prelude::*, result::DatabaseErrorKind};
use std::cmp::max;

impl Crud for User {
  type InsertForm = UserInsertForm;
  type UpdateForm = UserUpdateForm;
  type IdType = UserId;

  fn create(conn: &mut SqliteConnection, form: &UserInsertForm) -> BeansResult<Self> {
    insert_into(user_::table)
      .values(form)
      .get_result::<Self>(conn)
      .map_err(|e| match e {
        diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
          BeansErrorType::UserAlreadyExists.into()
        }
        e => e.into(),
      })
  }

  fn read(conn: &mut SqliteConnection, user_id: UserId) -> BeansResult<Self> {
    Ok(user_::table.find(user_id).first::<Self>(conn)?)
  }

  fn update(
    conn: &mut SqliteConnection,
    user_id: UserId,
    form: &UserUpdateForm,
  ) -> BeansResult<Self> {
    Ok(
      diesel::update(user_::table.find(user_id))
        .set(form)
        .get_result::<Self>(conn)?,
    )
  }

  fn delete(conn: &mut SqliteConnection, user_id: UserId) -> BeansResult<usize> {
    Ok(diesel::delete(user_::table.find(user_id)).execute(conn)?)
  }
}

impl User {
  pub fn read_from_auth_id(conn: &mut SqliteConnection, auth_id: &str) -> BeansResult<Self> {
    Ok(
      user_::table
        .filter(user_::auth_id.eq(auth_id))
        .first::<Self>(conn)?,
    )
  }

  /// Like [`User::read_from_auth_id`], but an unknown identifier is a
  /// first sign-in, not an error.
  pub fn find_from_auth_id(
    conn: &mut SqliteConnection,
    auth_id: &str,
  ) -> BeansResult<Option<Self>> {
    Ok(
      user_::table
        .filter(user_::auth_id.eq(auth_id))
        .first::<Self>(conn)
        .optional()?,
    )
  }

  /// Resolves a display name to a user. Names are not unique; the oldest
  /// account wins, which mention resolution documents as a known limitation.
  pub fn read_from_name(
    conn: &mut SqliteConnection,
    name: &str,
  ) -> BeansResult<Option<Self>> {
    Ok(
      user_::table
        .filter(user_::name.eq(name))
        .order(user_::id.asc())
        .first::<Self>(conn)
        .optional()?,
    )
  }

  pub fn read_safe_many(
    conn: &mut SqliteConnection,
    user_ids: &[UserId],
  ) -> BeansResult<Vec<UserSafe>> {
    Ok(
      user_::table
        .filter(user_::id.eq_any(user_ids.to_vec()))
        .select(UserSafe::as_select())
        .load::<UserSafe>(conn)?,
    )
  }

  /// Removes the user and everything hanging off them, in one transaction.
  /// Driven by the auth provider's deletion webhook; object storage cleanup
  /// is the caller's job, done before this.
  pub fn purge(conn: &mut SqliteConnection, user_id: UserId) -> BeansResult<usize> {
    conn.transaction::<_, BeansError, _>(|conn| {
      // the user's own posts take images, comments, mentions and likes with
      // them via the post delete trigger
      diesel::delete(post::table.filter(post::creator_id.eq(user_id))).execute(conn)?;

      // likes the user cast on surviving posts roll their counters back
      let liked_post_ids = post_like::table
        .filter(post_like::user_id.eq(user_id))
        .select(post_like::post_id)
        .load::<crate::newtypes::PostId>(conn)?;
      diesel::delete(post_like::table.filter(post_like::user_id.eq(user_id))).execute(conn)?;
      for post_id in liked_post_ids {
        let count = post::table
          .find(post_id)
          .select(post::likes_count)
          .first::<i32>(conn)?;
        diesel::update(post::table.find(post_id))
          .set(post::likes_count.eq(max(count - 1, 0)))
          .execute(conn)?;
      }

      // comments the user wrote on surviving posts, and their mention rows
      let comment_ids = comment::table
        .filter(comment::creator_id.eq(user_id))
        .select(comment::id)
        .load::<crate::newtypes::CommentId>(conn)?;
      diesel::delete(
        comment_mention::table.filter(comment_mention::comment_id.eq_any(comment_ids)),
      )
      .execute(conn)?;
      diesel::delete(comment::table.filter(comment::creator_id.eq(user_id))).execute(conn)?;
      diesel::delete(
        comment_mention::table.filter(comment_mention::recipient_id.eq(user_id)),
      )
      .execute(conn)?;

      diesel::delete(
        user_follower::table.filter(
          user_follower::user_id
            .eq(user_id)
            .or(user_follower::follower_id.eq(user_id)),
        ),
      )
      .execute(conn)?;
      diesel::delete(device_token::table.filter(device_token::user_id.eq(user_id)))
        .execute(conn)?;
      diesel::delete(bean_profile::table.filter(bean_profile::creator_id.eq(user_id)))
        .execute(conn)?;
      diesel::delete(gear::table.filter(gear::creator_id.eq(user_id))).execute(conn)?;

      Ok(diesel::delete(user_::table.find(user_id)).execute(conn)?)
    })
  }
}

#[cfg(test)]
pub(crate) mod tests {
  use crate::{
    naive_now,
    source::user::{User, UserInsertForm, UserUpdateForm},
    traits::Crud,
    utils::establish_test_connection,
  };
  use pretty_assertions::assert_eq;

  pub(crate) fn test_user_form(name: &str, auth_id: &str) -> UserInsertForm {
    UserInsertForm {
      name: name.into(),
      bio: None,
      website: None,
      avatar: None,
      auth_id: auth_id.into(),
      published: naive_now(),
    }
  }

  #[test]
  fn test_crud() {
    let conn = &mut establish_test_connection();

    let inserted_user = User::create(conn, &test_user_form("terry", "auth|terry")).unwrap();

    let read_user = User::read(conn, inserted_user.id).unwrap();
    assert_eq!(inserted_user, read_user);

    let update_form = UserUpdateForm {
      bio: Some(Some("kettle botherer".into())),
      updated: Some(Some(naive_now())),
      ..Default::default()
    };
    let updated_user = User::update(conn, inserted_user.id, &update_form).unwrap();
    assert_eq!(Some("kettle botherer".to_string()), updated_user.bio);
    assert_eq!("terry", updated_user.name);

    let num_deleted = User::delete(conn, inserted_user.id).unwrap();
    assert_eq!(1, num_deleted);
  }

  #[test]
  fn test_auth_id_lookup_and_uniqueness() {
    let conn = &mut establish_test_connection();

    let inserted_user = User::create(conn, &test_user_form("terry", "auth|terry")).unwrap();
    let found = User::read_from_auth_id(conn, "auth|terry").unwrap();
    assert_eq!(inserted_user.id, found.id);

    let conflict = User::create(conn, &test_user_form("terry2", "auth|terry"));
    assert_eq!(
      beans_utils::error::BeansErrorType::UserAlreadyExists,
      conflict.unwrap_err().error_type
    );
  }

  #[test]
  fn test_purge_unwinds_social_state() {
    use crate::{
      impls::post::tests::test_post_form,
      source::{
        comment::{Comment, CommentInsertForm},
        follower::{UserFollower, UserFollowerForm},
        post::{Post, PostLike, PostLikeForm},
      },
      traits::{Followable, Likeable},
    };
    let conn = &mut establish_test_connection();

    let terry = User::create(conn, &test_user_form("terry", "auth|terry")).unwrap();
    let dana = User::create(conn, &test_user_form("dana", "auth|dana")).unwrap();

    let terrys_post = Post::create(conn, &test_post_form(terry.id)).unwrap();
    let danas_post = Post::create(conn, &test_post_form(dana.id)).unwrap();
    PostLike::like(conn, &PostLikeForm::new(dana.id, terrys_post.id)).unwrap();
    Comment::create(
      conn,
      &CommentInsertForm {
        post_id: terrys_post.id,
        creator_id: dana.id,
        content: "what a pour".into(),
        published: naive_now(),
      },
    )
    .unwrap();
    UserFollower::follow(conn, &UserFollowerForm::new(terry.id, dana.id)).unwrap();

    User::purge(conn, dana.id).unwrap();

    // dana, her post, her like and her comment are all gone
    assert!(User::read(conn, dana.id).is_err());
    assert!(Post::read(conn, danas_post.id).is_err());
    let terrys_post = Post::read(conn, terrys_post.id).unwrap();
    assert_eq!(0, terrys_post.likes_count);
    assert_eq!(0, Comment::for_post(conn, terrys_post.id).unwrap().len());
    assert!(!UserFollower::is_following(conn, terry.id, dana.id).unwrap());
  }

  #[test]
  fn test_name_resolution_oldest_wins() {
    let conn = &mut establish_test_connection();

    let first = User::create(conn, &test_user_form("dana", "auth|dana1")).unwrap();
    let _second = User::create(conn, &test_user_form("dana", "auth|dana2")).unwrap();

    let resolved = User::read_from_name(conn, "dana").unwrap().unwrap();
    assert_eq!(first.id, resolved.id);

    assert!(User::read_from_name(conn, "nobody").unwrap().is_none());
  }
}
