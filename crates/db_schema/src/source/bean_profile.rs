use crate::{
  newtypes::{BeanProfileId, UserId},
  schema::bean_profile,
};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Reusable bean metadata owned by a user and referenced by their posts.
#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = bean_profile)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BeanProfile {
  pub id: BeanProfileId,
  pub creator_id: UserId,
  pub name: String,
  pub origin: Option<String>,
  pub producer: Option<String>,
  pub farm: Option<String>,
  pub process: Option<String>,
  pub variety: Option<String>,
  /// Growing elevation as entered, like `1900 masl`.
  pub elevation: Option<String>,
  pub published: NaiveDateTime,
  pub updated: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bean_profile)]
pub struct BeanProfileInsertForm {
  pub creator_id: UserId,
  pub name: String,
  pub origin: Option<String>,
  pub producer: Option<String>,
  pub farm: Option<String>,
  pub process: Option<String>,
  pub variety: Option<String>,
  pub elevation: Option<String>,
  pub published: NaiveDateTime,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = bean_profile)]
pub struct BeanProfileUpdateForm {
  pub name: Option<String>,
  pub origin: Option<Option<String>>,
  pub producer: Option<Option<String>>,
  pub farm: Option<Option<String>>,
  pub process: Option<Option<String>>,
  pub variety: Option<Option<String>>,
  pub elevation: Option<Option<String>>,
  pub updated: Option<Option<NaiveDateTime>>,
}
