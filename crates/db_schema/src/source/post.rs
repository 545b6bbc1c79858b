use crate::{
  newtypes::{BeanProfileId, GearId, LikeId, PostId, UserId},
  schema::{post, post_like},
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

/// One timed step of a brew recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeStep {
  /// Offset from the start of the brew, in seconds.
  pub seconds: i32,
  pub action: String,
  /// Target scale weight at the end of the step, if it pours water.
  pub water_grams: Option<f32>,
}

/// The ordered recipe steps of a post, stored as a json text column.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, AsExpression, FromSqlRow)]
#[diesel(sql_type = Text)]
pub struct RecipeSteps(pub Vec<RecipeStep>);

impl ToSql<Text, Sqlite> for RecipeSteps {
  fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Sqlite>) -> serialize::Result {
    out.set_value(serde_json::to_string(&self.0)?);
    Ok(IsNull::No)
  }
}

impl FromSql<Text, Sqlite> for RecipeSteps {
  fn from_sql(value: <Sqlite as Backend>::RawValue<'_>) -> deserialize::Result<Self> {
    let text = <String as FromSql<Text, Sqlite>>::from_sql(value)?;
    Ok(RecipeSteps(serde_json::from_str(&text)?))
  }
}

/// A brew post.
#[skip_serializing_none]
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = post)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Post {
  pub id: PostId,
  pub creator_id: UserId,
  /// Free-text bean name, used when no bean profile is referenced.
  pub bean_name: Option<String>,
  pub bean_profile_id: Option<BeanProfileId>,
  /// Brew ratio as entered, like `1:16`.
  pub ratio: Option<String>,
  pub dose_grams: Option<f32>,
  pub water_grams: Option<f32>,
  pub temperature: Option<f32>,
  pub grind_setting: Option<String>,
  pub brewer_id: Option<GearId>,
  pub grinder_id: Option<GearId>,
  pub filter_id: Option<GearId>,
  /// Free-text gear fields predating the gear table, kept for old clients.
  pub brewer: Option<String>,
  pub grinder: Option<String>,
  pub filter: Option<String>,
  pub steps: RecipeSteps,
  /// Maintained exclusively by [`crate::traits::Likeable`]; equals the number
  /// of post_like rows except for tolerated downward drift.
  pub likes_count: i32,
  pub published: NaiveDateTime,
  pub updated: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = post)]
pub struct PostInsertForm {
  pub creator_id: UserId,
  pub bean_name: Option<String>,
  pub bean_profile_id: Option<BeanProfileId>,
  pub ratio: Option<String>,
  pub dose_grams: Option<f32>,
  pub water_grams: Option<f32>,
  pub temperature: Option<f32>,
  pub grind_setting: Option<String>,
  pub brewer_id: Option<GearId>,
  pub grinder_id: Option<GearId>,
  pub filter_id: Option<GearId>,
  pub brewer: Option<String>,
  pub grinder: Option<String>,
  pub filter: Option<String>,
  pub steps: RecipeSteps,
  pub published: NaiveDateTime,
}

impl PostInsertForm {
  pub fn new(creator_id: UserId, published: NaiveDateTime) -> Self {
    Self {
      creator_id,
      bean_name: None,
      bean_profile_id: None,
      ratio: None,
      dose_grams: None,
      water_grams: None,
      temperature: None,
      grind_setting: None,
      brewer_id: None,
      grinder_id: None,
      filter_id: None,
      brewer: None,
      grinder: None,
      filter: None,
      steps: RecipeSteps::default(),
      published,
    }
  }
}

#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = post)]
pub struct PostUpdateForm {
  pub bean_name: Option<Option<String>>,
  pub bean_profile_id: Option<Option<BeanProfileId>>,
  pub ratio: Option<Option<String>>,
  pub dose_grams: Option<Option<f32>>,
  pub water_grams: Option<Option<f32>>,
  pub temperature: Option<Option<f32>>,
  pub grind_setting: Option<Option<String>>,
  pub brewer_id: Option<Option<GearId>>,
  pub grinder_id: Option<Option<GearId>>,
  pub filter_id: Option<Option<GearId>>,
  pub steps: Option<RecipeSteps>,
  pub updated: Option<Option<NaiveDateTime>>,
}

#[derive(Identifiable, Queryable, Selectable, Associations, PartialEq, Eq, Debug, Clone)]
#[diesel(belongs_to(Post))]
#[diesel(table_name = post_like)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PostLike {
  pub id: LikeId,
  pub user_id: UserId,
  pub post_id: PostId,
  pub published: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = post_like)]
pub struct PostLikeForm {
  pub user_id: UserId,
  pub post_id: PostId,
  pub published: NaiveDateTime,
}

impl PostLikeForm {
  pub fn new(user_id: UserId, post_id: PostId) -> Self {
    Self {
      user_id,
      post_id,
      published: crate::naive_now(),
    }
  }
}
