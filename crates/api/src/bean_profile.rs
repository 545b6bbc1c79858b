use beans_api_common::{
  bean_profile::{
    BeanProfileResponse, CreateBeanProfile, DeleteBeanProfile, DeleteBeanProfileResponse,
    EditBeanProfile, ListBeanProfiles, ListBeanProfilesResponse,
  },
  context::AppContext,
  utils::{check_bean_profile_creator, require_user},
};
use beans_db_schema::{
  naive_now,
  source::bean_profile::{BeanProfile, BeanProfileInsertForm, BeanProfileUpdateForm},
  traits::Crud,
};
use beans_utils::error::{BeansErrorExt2, BeansErrorType, BeansResult};

#[tracing::instrument(skip(context))]
pub fn create_bean_profile(
  data: &CreateBeanProfile,
  context: &AppContext,
) -> BeansResult<BeanProfileResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;

  let bean_profile = BeanProfile::create(
    conn,
    &BeanProfileInsertForm {
      creator_id: user.id,
      name: data.name.clone(),
      origin: data.origin.clone(),
      producer: data.producer.clone(),
      farm: data.farm.clone(),
      process: data.process.clone(),
      variety: data.variety.clone(),
      elevation: data.elevation.clone(),
      published: naive_now(),
    },
  )?;
  Ok(BeanProfileResponse { bean_profile })
}

#[tracing::instrument(skip(context))]
pub fn edit_bean_profile(
  data: &EditBeanProfile,
  context: &AppContext,
) -> BeansResult<BeanProfileResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  let bean_profile = BeanProfile::read(conn, data.id)
    .with_beans_type(BeansErrorType::CouldntFindBeanProfile)?;
  check_bean_profile_creator(&user, &bean_profile)?;

  let form = BeanProfileUpdateForm {
    name: data.name.clone(),
    origin: data.origin.clone().map(Some),
    producer: data.producer.clone().map(Some),
    farm: data.farm.clone().map(Some),
    process: data.process.clone().map(Some),
    variety: data.variety.clone().map(Some),
    elevation: data.elevation.clone().map(Some),
    updated: Some(Some(naive_now())),
  };
  let bean_profile = BeanProfile::update(conn, bean_profile.id, &form)?;
  Ok(BeanProfileResponse { bean_profile })
}

/// Posts referencing a deleted profile keep the reference; the view
/// assembler resolves it to nothing.
#[tracing::instrument(skip(context))]
pub fn delete_bean_profile(
  data: &DeleteBeanProfile,
  context: &AppContext,
) -> BeansResult<DeleteBeanProfileResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  let bean_profile = BeanProfile::read(conn, data.id)
    .with_beans_type(BeansErrorType::CouldntFindBeanProfile)?;
  check_bean_profile_creator(&user, &bean_profile)?;

  BeanProfile::delete(conn, bean_profile.id)?;
  Ok(DeleteBeanProfileResponse {
    id: bean_profile.id,
  })
}

#[tracing::instrument(skip(context))]
pub fn list_bean_profiles(
  data: &ListBeanProfiles,
  context: &AppContext,
) -> BeansResult<ListBeanProfilesResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  Ok(ListBeanProfilesResponse {
    items: BeanProfile::list_for_creator(conn, user.id)?,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    post::{create::tests::empty_post, create::create_post, read::get_post},
    user::tests::login_test_user,
  };
  use beans_api_common::{notify::NullNotifier, post::CreatePost, post::GetPost};
  use beans_db_schema::storage::MemoryObjectStore;
  use pretty_assertions::assert_eq;
  use std::sync::Arc;

  #[test]
  fn test_deleted_profile_resolves_to_none_on_posts() {
    let context =
      AppContext::new_in_memory(Arc::new(MemoryObjectStore::new()), Arc::new(NullNotifier))
        .unwrap();
    let terry = login_test_user(&context, "terry");

    let profile = create_bean_profile(
      &CreateBeanProfile {
        auth: terry.clone(),
        name: "Kayon Mountain".into(),
        origin: Some("Ethiopia".into()),
        producer: None,
        farm: None,
        process: Some("natural".into()),
        variety: None,
        elevation: None,
      },
      &context,
    )
    .unwrap();

    let created = create_post(
      &CreatePost {
        bean_profile_id: Some(profile.bean_profile.id),
        ..empty_post(terry.clone())
      },
      &context,
    )
    .unwrap();
    assert_eq!(
      Some("Kayon Mountain".to_string()),
      created.post_view.bean_profile.as_ref().map(|b| b.name.clone())
    );

    delete_bean_profile(
      &DeleteBeanProfile {
        auth: terry,
        id: profile.bean_profile.id,
      },
      &context,
    )
    .unwrap();

    let read = get_post(
      &GetPost {
        id: created.post_view.post.id,
      },
      &context,
    )
    .unwrap();
    assert_eq!(None, read.post_view.bean_profile);
  }
}
