use crate::{
  newtypes::{GearId, UserId},
  schema::gear,
  source::gear::{Gear, GearInsertForm, GearUpdateForm},
  traits::Crud,
};
use beans_utils::error::BeansResult;
use diesel::{insert_into, prelude::*};

impl Crud for Gear {
  type InsertForm = GearInsertForm;
  type UpdateForm = GearUpdateForm;
  type IdType = GearId;

  fn create(conn: &mut SqliteConnection, form: &GearInsertForm) -> BeansResult<Self> {
    Ok(
      insert_into(gear::table)
        .values(form)
        .get_result::<Self>(conn)?,
    )
  }

  fn read(conn: &mut SqliteConnection, gear_id: GearId) -> BeansResult<Self> {
    Ok(gear::table.find(gear_id).first::<Self>(conn)?)
  }

  fn update(
    conn: &mut SqliteConnection,
    gear_id: GearId,
    form: &GearUpdateForm,
  ) -> BeansResult<Self> {
    Ok(
      diesel::update(gear::table.find(gear_id))
        .set(form)
        .get_result::<Self>(conn)?,
    )
  }

  fn delete(conn: &mut SqliteConnection, gear_id: GearId) -> BeansResult<usize> {
    Ok(diesel::delete(gear::table.find(gear_id)).execute(conn)?)
  }
}

impl Gear {
  pub fn list_for_creator(
    conn: &mut SqliteConnection,
    creator_id: UserId,
  ) -> BeansResult<Vec<Self>> {
    Ok(
      gear::table
        .filter(gear::creator_id.eq(creator_id))
        .order(gear::name.asc())
        .load::<Self>(conn)?,
    )
  }

  pub fn read_many(conn: &mut SqliteConnection, gear_ids: &[GearId]) -> BeansResult<Vec<Self>> {
    Ok(
      gear::table
        .filter(gear::id.eq_any(gear_ids.to_vec()))
        .load::<Self>(conn)?,
    )
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    impls::user::tests::test_user_form,
    naive_now,
    source::{
      gear::{Gear, GearInsertForm, GearType, GearUpdateForm},
      user::User,
    },
    traits::Crud,
    utils::establish_test_connection,
  };
  use pretty_assertions::assert_eq;

  #[test]
  fn test_crud_and_kind_round_trip() {
    let conn = &mut establish_test_connection();
    let terry = User::create(conn, &test_user_form("terry", "auth|terry")).unwrap();

    let inserted = Gear::create(
      conn,
      &GearInsertForm {
        creator_id: terry.id,
        name: "Comandante C40".into(),
        kind: GearType::Grinder,
        details: Some("red clix".into()),
        published: naive_now(),
      },
    )
    .unwrap();

    let read = Gear::read(conn, inserted.id).unwrap();
    assert_eq!(GearType::Grinder, read.kind);
    assert_eq!(inserted, read);

    let updated = Gear::update(
      conn,
      inserted.id,
      &GearUpdateForm {
        kind: Some(GearType::FilterPaper),
        updated: Some(Some(naive_now())),
        ..Default::default()
      },
    )
    .unwrap();
    assert_eq!(GearType::FilterPaper, updated.kind);

    assert_eq!(1, Gear::delete(conn, inserted.id).unwrap());
  }
}
