use crate::{
  newtypes::{FollowId, UserId},
  schema::user_follower,
};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A follow edge. `user_id` is the user being followed.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = user_follower)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserFollower {
  pub id: FollowId,
  pub user_id: UserId,
  pub follower_id: UserId,
  pub published: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_follower)]
pub struct UserFollowerForm {
  pub user_id: UserId,
  pub follower_id: UserId,
  pub published: NaiveDateTime,
}

impl UserFollowerForm {
  pub fn new(user_id: UserId, follower_id: UserId) -> Self {
    Self {
      user_id,
      follower_id,
      published: crate::naive_now(),
    }
  }
}
