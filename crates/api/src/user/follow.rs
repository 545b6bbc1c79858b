use beans_api_common::{
  context::AppContext,
  user::{FollowUser, FollowUserResponse},
  utils::require_user,
};
use beans_db_schema::{
  source::{
    follower::{UserFollower, UserFollowerForm},
    user::User,
  },
  traits::{Crud, Followable},
};
use beans_utils::error::{BeansErrorExt2, BeansErrorType, BeansResult};

#[tracing::instrument(skip(context))]
pub fn follow_user(data: &FollowUser, context: &AppContext) -> BeansResult<FollowUserResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  User::read(conn, data.user_id).with_beans_type(BeansErrorType::CouldntFindUser)?;

  UserFollower::follow(conn, &UserFollowerForm::new(data.user_id, user.id))?;
  Ok(FollowUserResponse {
    user_id: data.user_id,
    is_following: true,
  })
}

#[tracing::instrument(skip(context))]
pub fn unfollow_user(data: &FollowUser, context: &AppContext) -> BeansResult<FollowUserResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;

  UserFollower::unfollow(conn, &UserFollowerForm::new(data.user_id, user.id))?;
  Ok(FollowUserResponse {
    user_id: data.user_id,
    is_following: false,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::user::tests::login_test_user;
  use beans_api_common::notify::NullNotifier;
  use beans_db_schema::storage::MemoryObjectStore;
  use beans_utils::error::BeansErrorType;
  use pretty_assertions::assert_eq;
  use std::sync::Arc;

  #[test]
  fn test_follow_toggle_and_edge_cases() {
    let context =
      AppContext::new_in_memory(Arc::new(MemoryObjectStore::new()), Arc::new(NullNotifier))
        .unwrap();
    let terry = login_test_user(&context, "terry");
    let _dana = login_test_user(&context, "dana");

    // look the ids up, then hand the pooled connection back before the ops
    let mut conn = context.conn().unwrap();
    let dana_user = User::read_from_name(&mut conn, "dana").unwrap().unwrap();
    let terry_user = User::read_from_name(&mut conn, "terry").unwrap().unwrap();
    drop(conn);

    let followed = follow_user(
      &FollowUser {
        auth: terry.clone(),
        user_id: dana_user.id,
      },
      &context,
    )
    .unwrap();
    assert!(followed.is_following);

    // double-follow is an explicit error, mirroring the like pair
    let again = follow_user(
      &FollowUser {
        auth: terry.clone(),
        user_id: dana_user.id,
      },
      &context,
    );
    assert_eq!(
      BeansErrorType::AlreadyFollowing,
      again.unwrap_err().error_type
    );

    // no self-follow
    let own = follow_user(
      &FollowUser {
        auth: terry.clone(),
        user_id: terry_user.id,
      },
      &context,
    );
    assert_eq!(
      BeansErrorType::CantFollowYourself,
      own.unwrap_err().error_type
    );

    let unfollowed = unfollow_user(
      &FollowUser {
        auth: terry.clone(),
        user_id: dana_user.id,
      },
      &context,
    )
    .unwrap();
    assert!(!unfollowed.is_following);

    let again = unfollow_user(
      &FollowUser {
        auth: terry,
        user_id: dana_user.id,
      },
      &context,
    );
    assert_eq!(BeansErrorType::NotFollowing, again.unwrap_err().error_type);
  }
}
