use beans_api_common::{
  context::AppContext,
  user::{ProfileResponse, UpdateProfile},
  utils::require_user,
};
use beans_db_schema::{
  naive_now,
  source::user::{User, UserUpdateForm},
  traits::Crud,
};
use beans_utils::{
  error::{BeansErrorType, BeansResult},
  utils::is_valid_display_name,
};

#[tracing::instrument(skip(context))]
pub fn update_profile(data: &UpdateProfile, context: &AppContext) -> BeansResult<ProfileResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;

  if let Some(name) = &data.name {
    if !is_valid_display_name(name) {
      return Err(BeansErrorType::InvalidDisplayName.into());
    }
  }
  // a fresh avatar must point at a finished upload
  if let Some(avatar) = &data.avatar {
    if context.object_store().resolve(avatar).is_none() {
      return Err(BeansErrorType::ImageNotUploaded.into());
    }
  }

  let form = UserUpdateForm {
    name: data.name.clone(),
    bio: data.bio.clone().map(Some),
    website: data.website.clone().map(Some),
    avatar: data.avatar.clone().map(Some),
    updated: Some(Some(naive_now())),
  };
  let updated = User::update(conn, user.id, &form)?;

  Ok(ProfileResponse {
    user: updated.into(),
  })
}
