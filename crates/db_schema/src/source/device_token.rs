use crate::{
  newtypes::{DeviceTokenId, UserId},
  schema::device_token,
};
use chrono::NaiveDateTime;
use diesel::{
  backend::Backend,
  deserialize::{self, FromSql, FromSqlRow},
  expression::AsExpression,
  prelude::*,
  serialize::{self, IsNull, Output, ToSql},
  sql_types::Text,
  sqlite::Sqlite,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsExpression,
  FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PushPlatform {
  Ios,
  Android,
}

impl ToSql<Text, Sqlite> for PushPlatform {
  fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
    out.set_value(self.to_string());
    Ok(IsNull::No)
  }
}

impl FromSql<Text, Sqlite> for PushPlatform {
  fn from_sql(value: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
    let text = <String as FromSql<Text, Sqlite>>::from_sql(value)?;
    PushPlatform::from_str(&text).map_err(|_| format!("unrecognized platform {text}").into())
  }
}

/// A push notification target. The token string belongs to the physical
/// device, so it is unique across users; registering it under another
/// account revokes the previous owner's registration.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = device_token)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DeviceToken {
  pub id: DeviceTokenId,
  pub user_id: UserId,
  pub token: String,
  pub platform: PushPlatform,
  pub published: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = device_token)]
pub struct DeviceTokenForm {
  pub user_id: UserId,
  pub token: String,
  pub platform: PushPlatform,
  pub published: NaiveDateTime,
}
