use crate::{
  newtypes::{StorageKey, UserId},
  schema::user_,
};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A user. Created on first external-auth sign-in, removed only by the
/// auth provider's deletion webhook.
#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = user_)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
  pub id: UserId,
  /// Display name. Not unique; mention resolution takes the oldest match.
  pub name: String,
  pub bio: Option<String>,
  pub website: Option<String>,
  pub avatar: Option<StorageKey>,
  /// The stable identifier the auth provider hands us. Trusted verbatim.
  pub auth_id: String,
  pub published: NaiveDateTime,
  pub updated: Option<NaiveDateTime>,
}

/// A user with the external-auth identity stripped, safe to embed in
/// responses.
#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable)]
#[diesel(table_name = user_)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct UserSafe {
  pub id: UserId,
  pub name: String,
  pub bio: Option<String>,
  pub website: Option<String>,
  pub avatar: Option<StorageKey>,
  pub published: NaiveDateTime,
}

impl From<User> for UserSafe {
  fn from(user: User) -> Self {
    UserSafe {
      id: user.id,
      name: user.name,
      bio: user.bio,
      website: user.website,
      avatar: user.avatar,
      published: user.published,
    }
  }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_)]
pub struct UserInsertForm {
  pub name: String,
  pub bio: Option<String>,
  pub website: Option<String>,
  pub avatar: Option<StorageKey>,
  pub auth_id: String,
  pub published: NaiveDateTime,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = user_)]
pub struct UserUpdateForm {
  pub name: Option<String>,
  pub bio: Option<Option<String>>,
  pub website: Option<Option<String>>,
  pub avatar: Option<Option<StorageKey>>,
  pub updated: Option<Option<NaiveDateTime>>,
}
