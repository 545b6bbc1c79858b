use crate::{
  newtypes::{PostId, UserId},
  schema::{post, post_like},
  source::post::{Post, PostInsertForm, PostLike, PostLikeForm, PostUpdateForm},
  traits::{Crud, Likeable},
};
use beans_utils::error::{BeansError, BeansErrorType, BeansResult};
use diesel::{insert_into, prelude::*};
use std::cmp::max;

impl Crud for Post {
  type InsertForm = PostInsertForm;
  type UpdateForm = PostUpdateForm;
  type IdType = PostId;

  fn create(conn: &mut SqliteConnection, form: &PostInsertForm) -> BeansResult<Self> {
    Ok(
      insert_into(post::table)
        .values(form)
        .get_result::<Self>(conn)?,
    )
  }

  fn read(conn: &mut SqliteConnection, post_id: PostId) -> BeansResult<Self> {
    Ok(post::table.find(post_id).first::<Self>(conn)?)
  }

  fn update(
    conn: &mut SqliteConnection,
    post_id: PostId,
    form: &PostUpdateForm,
  ) -> BeansResult<Self> {
    Ok(
      diesel::update(post::table.find(post_id))
        .set(form)
        .get_result::<Self>(conn)?,
    )
  }

  fn delete(conn: &mut SqliteConnection, post_id: PostId) -> BeansResult<usize> {
    Ok(diesel::delete(post::table.find(post_id)).execute(conn)?)
  }
}

impl Post {
  pub fn list_for_creator(
    conn: &mut SqliteConnection,
    creator_id: UserId,
  ) -> BeansResult<Vec<Self>> {
    Ok(
      post::table
        .filter(post::creator_id.eq(creator_id))
        .order((post::published.desc(), post::id.desc()))
        .load::<Self>(conn)?,
    )
  }
}

impl Likeable for PostLike {
  type Form = PostLikeForm;
  type IdType = PostId;

  /// At most one like per (user, post). The existence check, the insert and
  /// the counter bump commit together or not at all.
  fn like(conn: &mut SqliteConnection, form: &PostLikeForm) -> BeansResult<Self> {
    conn.transaction::<_, BeansError, _>(|conn| {
      let existing = post_like::table
        .filter(post_like::post_id.eq(form.post_id))
        .filter(post_like::user_id.eq(form.user_id))
        .first::<Self>(conn)
        .optional()?;
      if existing.is_some() {
        return Err(BeansErrorType::AlreadyLiked.into());
      }

      let inserted = insert_into(post_like::table)
        .values(form)
        .get_result::<Self>(conn)?;

      let count = post::table
        .find(form.post_id)
        .select(post::likes_count)
        .first::<i32>(conn)?;
      diesel::update(post::table.find(form.post_id))
        .set(post::likes_count.eq(count + 1))
        .execute(conn)?;

      Ok(inserted)
    })
  }

  /// The decrement is clamped at zero: a drifted-low counter makes unlike
  /// tolerant, not loud.
  fn remove(
    conn: &mut SqliteConnection,
    user_id: UserId,
    post_id: PostId,
  ) -> BeansResult<usize> {
    conn.transaction::<_, BeansError, _>(|conn| {
      let deleted = diesel::delete(
        post_like::table
          .filter(post_like::post_id.eq(post_id))
          .filter(post_like::user_id.eq(user_id)),
      )
      .execute(conn)?;
      if deleted == 0 {
        return Err(BeansErrorType::LikeNotFound.into());
      }

      let count = post::table
        .find(post_id)
        .select(post::likes_count)
        .first::<i32>(conn)?;
      diesel::update(post::table.find(post_id))
        .set(post::likes_count.eq(max(count - 1, 0)))
        .execute(conn)?;

      Ok(deleted)
    })
  }
}

impl PostLike {
  pub fn read_for_post(conn: &mut SqliteConnection, post_id: PostId) -> BeansResult<Vec<Self>> {
    Ok(
      post_like::table
        .filter(post_like::post_id.eq(post_id))
        .load::<Self>(conn)?,
    )
  }
}
