use beans_api_common::{
  context::AppContext,
  user::{Login, LoginResponse},
};
use beans_db_schema::{
  naive_now,
  source::user::{User, UserInsertForm},
  traits::Crud,
};
use beans_utils::{
  error::{BeansErrorType, BeansResult},
  utils::is_valid_display_name,
};

/// Resolves the external-auth identity to a user row, creating it on first
/// sign-in.
#[tracing::instrument(skip(context))]
pub fn login(data: &Login, context: &AppContext) -> BeansResult<LoginResponse> {
  let conn = &mut context.conn()?;

  if let Some(user) = User::find_from_auth_id(conn, &data.auth)? {
    return Ok(LoginResponse {
      user: user.into(),
      registered: false,
    });
  }

  if !is_valid_display_name(&data.name) {
    return Err(BeansErrorType::InvalidDisplayName.into());
  }
  let user = User::create(
    conn,
    &UserInsertForm {
      name: data.name.clone(),
      bio: None,
      website: None,
      avatar: None,
      auth_id: data.auth.clone(),
      published: naive_now(),
    },
  )?;

  Ok(LoginResponse {
    user: user.into(),
    registered: true,
  })
}
