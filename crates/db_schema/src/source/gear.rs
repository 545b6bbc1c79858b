use crate::{
  newtypes::{GearId, UserId},
  schema::gear,
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
use serde_with::skip_serializing_none;
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
pub enum GearType {
  Grinder,
  Brewer,
  FilterPaper,
}

impl ToSql<Text, Sqlite> for GearType {
  fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
    out.set_value(self.to_string());
    Ok(IsNull::No)
  }
}

impl FromSql<Text, Sqlite> for GearType {
  fn from_sql(value: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
    let text = <String as FromSql<Text, Sqlite>>::from_sql(value)?;
    GearType::from_str(&text).map_err(|_| format!("unrecognized gear kind {text}").into())
  }
}

/// A piece of brewing equipment owned by a user and referenced by their
/// posts.
#[skip_serializing_none]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = gear)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Gear {
  pub id: GearId,
  pub creator_id: UserId,
  pub name: String,
  pub kind: GearType,
  pub details: Option<String>,
  pub published: NaiveDateTime,
  pub updated: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = gear)]
pub struct GearInsertForm {
  pub creator_id: UserId,
  pub name: String,
  pub kind: GearType,
  pub details: Option<String>,
  pub published: NaiveDateTime,
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = gear)]
pub struct GearUpdateForm {
  pub name: Option<String>,
  pub kind: Option<GearType>,
  pub details: Option<Option<String>>,
  pub updated: Option<Option<NaiveDateTime>>,
}
