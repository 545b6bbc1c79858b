use crate::{
  newtypes::{BeanProfileId, UserId},
  schema::bean_profile,
  source::bean_profile::{BeanProfile, BeanProfileInsertForm, BeanProfileUpdateForm},
  traits::Crud,
};
use beans_utils::error::BeansResult;
use diesel::{insert_into, prelude::*};

impl Crud for BeanProfile {
  type InsertForm = BeanProfileInsertForm;
  type UpdateForm = BeanProfileUpdateForm;
  type IdType = BeanProfileId;

  fn create(conn: &mut SqliteConnection, form: &BeanProfileInsertForm) -> BeansResult<Self> {
    Ok(
      insert_into(bean_profile::table)
        .values(form)
        .get_result::<Self>(conn)?,
    )
  }

  fn read(conn: &mut SqliteConnection, profile_id: BeanProfileId) -> BeansResult<Self> {
    Ok(bean_profile::table.find(profile_id).first::<Self>(conn)?)
  }

  fn update(
    conn: &mut SqliteConnection,
    profile_id: BeanProfileId,
    form: &BeanProfileUpdateForm,
  ) -> BeansResult<Self> {
    Ok(
      diesel::update(bean_profile::table.find(profile_id))
        .set(form)
        .get_result::<Self>(conn)?,
    )
  }

  fn delete(conn: &mut SqliteConnection, profile_id: BeanProfileId) -> BeansResult<usize> {
    Ok(diesel::delete(bean_profile::table.find(profile_id)).execute(conn)?)
  }
}

impl BeanProfile {
  pub fn list_for_creator(
    conn: &mut SqliteConnection,
    creator_id: UserId,
  ) -> BeansResult<Vec<Self>> {
    Ok(
      bean_profile::table
        .filter(bean_profile::creator_id.eq(creator_id))
        .order(bean_profile::name.asc())
        .load::<Self>(conn)?,
    )
  }

  pub fn read_many(
    conn: &mut SqliteConnection,
    profile_ids: &[BeanProfileId],
  ) -> BeansResult<Vec<Self>> {
    Ok(
      bean_profile::table
        .filter(bean_profile::id.eq_any(profile_ids.to_vec()))
        .load::<Self>(conn)?,
    )
  }
}
