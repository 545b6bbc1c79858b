use beans_db_schema::{
  newtypes::{StorageKey, UserId},
  source::user::UserSafe,
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// First sign-in creates the row, later ones just resolve it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Login {
  pub auth: String,
  /// Display name to register under on first sign-in.
  pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
  pub user: UserSafe,
  pub registered: bool,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
  pub auth: String,
  pub name: Option<String>,
  pub bio: Option<String>,
  pub website: Option<String>,
  pub avatar: Option<StorageKey>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
  pub user: UserSafe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUser {
  pub auth: String,
  pub user_id: UserId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUserResponse {
  pub user_id: UserId,
  pub is_following: bool,
}

/// Driven by the auth provider's account-deletion webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAccount {
  pub auth: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteAccountResponse {
  pub user_id: UserId,
}
