use beans_api_common::{
  context::AppContext,
  gear::{
    CreateGear, DeleteGear, DeleteGearResponse, EditGear, GearResponse, ListGear,
    ListGearResponse,
  },
  utils::{check_gear_creator, require_user},
};
use beans_db_schema::{
  naive_now,
  source::gear::{Gear, GearInsertForm, GearUpdateForm},
  traits::Crud,
};
use beans_utils::error::{BeansErrorExt2, BeansErrorType, BeansResult};

#[tracing::instrument(skip(context))]
pub fn create_gear(data: &CreateGear, context: &AppContext) -> BeansResult<GearResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;

  let gear = Gear::create(
    conn,
    &GearInsertForm {
      creator_id: user.id,
      name: data.name.clone(),
      kind: data.kind,
      details: data.details.clone(),
      published: naive_now(),
    },
  )?;
  Ok(GearResponse { gear })
}

#[tracing::instrument(skip(context))]
pub fn edit_gear(data: &EditGear, context: &AppContext) -> BeansResult<GearResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  let gear = Gear::read(conn, data.id).with_beans_type(BeansErrorType::CouldntFindGear)?;
  check_gear_creator(&user, &gear)?;

  let form = GearUpdateForm {
    name: data.name.clone(),
    kind: data.kind,
    details: data.details.clone().map(Some),
    updated: Some(Some(naive_now())),
  };
  let gear = Gear::update(conn, gear.id, &form)?;
  Ok(GearResponse { gear })
}

/// Posts referencing deleted gear keep their reference; the view assembler
/// resolves it to nothing.
#[tracing::instrument(skip(context))]
pub fn delete_gear(data: &DeleteGear, context: &AppContext) -> BeansResult<DeleteGearResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  let gear = Gear::read(conn, data.id).with_beans_type(BeansErrorType::CouldntFindGear)?;
  check_gear_creator(&user, &gear)?;

  Gear::delete(conn, gear.id)?;
  Ok(DeleteGearResponse { id: gear.id })
}

#[tracing::instrument(skip(context))]
pub fn list_gear(data: &ListGear, context: &AppContext) -> BeansResult<ListGearResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  Ok(ListGearResponse {
    items: Gear::list_for_creator(conn, user.id)?,
  })
}
