pub mod delete_account;
pub mod follow;
pub mod login;
pub mod register_device;
pub mod update_profile;

#[cfg(test)]
pub(crate) mod tests {
  use beans_api_common::{context::AppContext, user::Login};

  /// Signs `name` in (registering on first use) and returns the auth id the
  /// provider would hand to later requests.
  pub(crate) fn login_test_user(context: &AppContext, name: &str) -> String {
    let auth = format!("auth|{name}");
    super::login::login(
      &Login {
        auth: auth.clone(),
        name: name.into(),
      },
      context,
    )
    .unwrap();
    auth
  }
}
