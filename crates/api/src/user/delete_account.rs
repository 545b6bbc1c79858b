use beans_api_common::{
  context::AppContext,
  user::{DeleteAccount, DeleteAccountResponse},
  utils::require_user,
};
use beans_db_schema::{
  newtypes::PostId,
  source::{post::Post, post_image::PostImage, user::User},
};
use beans_utils::error::BeansResult;
use tracing::warn;

/// The auth provider's account-deletion webhook lands here. Blobs are
/// released first, then the row cascade runs in one transaction.
#[tracing::instrument(skip(context))]
pub fn delete_account(
  data: &DeleteAccount,
  context: &AppContext,
) -> BeansResult<DeleteAccountResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;

  let post_ids: Vec<PostId> = Post::list_for_creator(conn, user.id)?
    .iter()
    .map(|p| p.id)
    .collect();
  for image in PostImage::for_posts(conn, &post_ids)? {
    if let Err(e) = context.object_store().delete(&image.object_key) {
      warn!("couldnt release storage object {}: {}", image.object_key, e);
    }
  }
  if let Some(avatar) = &user.avatar {
    if let Err(e) = context.object_store().delete(avatar) {
      warn!("couldnt release avatar {}: {}", avatar, e);
    }
  }

  User::purge(conn, user.id)?;
  Ok(DeleteAccountResponse { user_id: user.id })
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
    post::{CreatePost, GetFeed, PostImageParams},
  };
  use beans_db_schema::{
    newtypes::StorageKey,
    storage::{MemoryObjectStore, ObjectStore},
  };
  use pretty_assertions::assert_eq;
  use std::sync::Arc;

  #[test]
  fn test_webhook_removes_user_content_and_blobs() {
    let store = Arc::new(MemoryObjectStore::new());
    let context =
      AppContext::new_in_memory(store.clone(), Arc::new(NullNotifier)).unwrap();
    let terry = login_test_user(&context, "terry");

    store.put(&StorageKey("a.jpg".into()));
    create_post(
      &CreatePost {
        images: vec![PostImageParams {
          object_key: StorageKey("a.jpg".into()),
          content_type: "image/jpeg".into(),
        }],
        ..empty_post(terry.clone())
      },
      &context,
    )
    .unwrap();

    delete_account(&DeleteAccount { auth: terry.clone() }, &context).unwrap();

    let feed = crate::post::feed::get_feed(&GetFeed::default(), &context).unwrap();
    assert_eq!(0, feed.posts.len());
    assert!(store.resolve(&StorageKey("a.jpg".into())).is_none());

    // the auth id no longer resolves
    let again = delete_account(&DeleteAccount { auth: terry }, &context);
    assert!(again.is_err());
  }
}
