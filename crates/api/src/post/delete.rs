use beans_api_common::{
  context::AppContext,
  post::{DeletePost, DeletePostResponse},
  utils::{check_post_creator, require_user},
};
use beans_db_schema::{
  source::{post::Post, post_image::PostImage},
  traits::Crud,
};
use beans_utils::error::{BeansErrorExt2, BeansErrorType, BeansResult};
use tracing::warn;

#[tracing::instrument(skip(context))]
pub fn delete_post(data: &DeletePost, context: &AppContext) -> BeansResult<DeletePostResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  let post =
    Post::read(conn, data.id).with_beans_type(BeansErrorType::CouldntFindPost)?;
  check_post_creator(&user, &post)?;

  // release blobs first; the rows are gone once the post row is
  for image in PostImage::for_post(conn, post.id)? {
    if let Err(e) = context.object_store().delete(&image.object_key) {
      warn!("couldnt release storage object {}: {}", image.object_key, e);
    }
  }

  // images, comments, mentions and likes cascade via the delete trigger
  Post::delete(conn, post.id)?;

  Ok(DeletePostResponse { id: post.id })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    post::create::{create_post, tests::empty_post},
    user::tests::login_test_user,
  };
  use beans_api_common::{
    notify::NullNotifier,
    post::{CreatePost, GetPost, PostImageParams},
  };
  use beans_db_schema::{
    newtypes::StorageKey,
    storage::{MemoryObjectStore, ObjectStore},
  };
  use beans_utils::error::BeansErrorType;
  use pretty_assertions::assert_eq;
  use std::sync::Arc;

  #[test]
  fn test_delete_cascades_and_releases_storage() {
    let store = Arc::new(MemoryObjectStore::new());
    let context =
      AppContext::new_in_memory(store.clone(), Arc::new(NullNotifier)).unwrap();
    let auth = login_test_user(&context, "terry");

    for key in ["a.jpg", "b.jpg", "c.jpg"] {
      store.put(&StorageKey(key.into()));
    }
    let created = create_post(
      &CreatePost {
        images: ["a.jpg", "b.jpg", "c.jpg"]
          .iter()
          .map(|key| PostImageParams {
            object_key: StorageKey((*key).into()),
            content_type: "image/jpeg".into(),
          })
          .collect(),
        ..empty_post(auth.clone())
      },
      &context,
    )
    .unwrap();
    let post_id = created.post_view.post.id;

    delete_post(&DeletePost { auth, id: post_id }, &context).unwrap();

    // the post is gone
    let read_back = crate::post::read::get_post(&GetPost { id: post_id }, &context);
    assert_eq!(
      BeansErrorType::CouldntFindPost,
      read_back.unwrap_err().error_type
    );
    // no image rows survive
    let conn = &mut context.conn().unwrap();
    assert_eq!(0, PostImage::for_post(conn, post_id).unwrap().len());
    // and no orphaned storage references either
    assert!(store.resolve(&StorageKey("a.jpg".into())).is_none());
    assert!(store.resolve(&StorageKey("c.jpg".into())).is_none());
  }

  #[test]
  fn test_only_the_author_may_delete() {
    let store = Arc::new(MemoryObjectStore::new());
    let context = AppContext::new_in_memory(store, Arc::new(NullNotifier)).unwrap();
    let terry = login_test_user(&context, "terry");
    let dana = login_test_user(&context, "dana");

    let created = create_post(&empty_post(terry), &context).unwrap();
    let result = delete_post(
      &DeletePost {
        auth: dana,
        id: created.post_view.post.id,
      },
      &context,
    );
    assert_eq!(
      BeansErrorType::NoPostEditAllowed,
      result.unwrap_err().error_type
    );
  }
}
