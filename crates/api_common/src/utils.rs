use beans_db_schema::source::{
  bean_profile::BeanProfile, comment::Comment, gear::Gear, post::Post, user::User,
};
use beans_utils::error::{BeansErrorExt2, BeansErrorType, BeansResult};
use diesel::sqlite::SqliteConnection;

/// Resolves the acting user from the external-auth identifier carried on a
/// request. The identifier is trusted verbatim; signature checks happened at
/// the auth provider.
pub fn require_user(conn: &mut SqliteConnection, auth: &str) -> BeansResult<User> {
  User::read_from_auth_id(conn, auth).with_beans_type(BeansErrorType::CouldntFindUser)
}

pub fn check_post_creator(user: &User, post: &Post) -> BeansResult<()> {
  if post.creator_id != user.id {
    return Err(BeansErrorType::NoPostEditAllowed.into());
  }
  Ok(())
}

pub fn check_comment_creator(user: &User, comment: &Comment) -> BeansResult<()> {
  if comment.creator_id != user.id {
    return Err(BeansErrorType::NoCommentEditAllowed.into());
  }
  Ok(())
}

pub fn check_bean_profile_creator(user: &User, bean_profile: &BeanProfile) -> BeansResult<()> {
  if bean_profile.creator_id != user.id {
    return Err(BeansErrorType::NoBeanProfileEditAllowed.into());
  }
  Ok(())
}

pub fn check_gear_creator(user: &User, gear: &Gear) -> BeansResult<()> {
  if gear.creator_id != user.id {
    return Err(BeansErrorType::NoGearEditAllowed.into());
  }
  Ok(())
}
