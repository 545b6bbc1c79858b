use crate::{
  newtypes::UserId,
  schema::user_follower,
  source::follower::{UserFollower, UserFollowerForm},
  traits::Followable,
};
use beans_utils::error::{BeansError, BeansErrorType, BeansResult};
use diesel::{insert_into, prelude::*};

impl Followable for UserFollower {
  type Form = UserFollowerForm;

  fn follow(conn: &mut SqliteConnection, form: &UserFollowerForm) -> BeansResult<Self> {
    if form.user_id == form.follower_id {
      return Err(BeansErrorType::CantFollowYourself.into());
    }
    conn.transaction::<_, BeansError, _>(|conn| {
      let existing = user_follower::table
        .filter(user_follower::user_id.eq(form.user_id))
        .filter(user_follower::follower_id.eq(form.follower_id))
        .first::<Self>(conn)
        .optional()?;
      if existing.is_some() {
        return Err(BeansErrorType::AlreadyFollowing.into());
      }
      Ok(
        insert_into(user_follower::table)
          .values(form)
          .get_result::<Self>(conn)?,
      )
    })
  }

  fn unfollow(conn: &mut SqliteConnection, form: &UserFollowerForm) -> BeansResult<usize> {
    let deleted = diesel::delete(
      user_follower::table
        .filter(user_follower::user_id.eq(form.user_id))
        .filter(user_follower::follower_id.eq(form.follower_id)),
    )
    .execute(conn)?;
    if deleted == 0 {
      return Err(BeansErrorType::NotFollowing.into());
    }
    Ok(deleted)
  }
}

impl UserFollower {
  pub fn is_following(
    conn: &mut SqliteConnection,
    user_id: UserId,
    follower_id: UserId,
  ) -> BeansResult<bool> {
    Ok(
      user_follower::table
        .filter(user_follower::user_id.eq(user_id))
        .filter(user_follower::follower_id.eq(follower_id))
        .first::<Self>(conn)
        .optional()?
        .is_some(),
    )
  }
}
