use crate::{
  newtypes::PostId,
  schema::post_image,
  source::post_image::{PostImage, PostImageInsertForm},
};
use beans_utils::error::BeansResult;
use diesel::{insert_into, prelude::*};

impl PostImage {
  pub fn create(conn: &mut SqliteConnection, form: &PostImageInsertForm) -> BeansResult<Self> {
    Ok(
      insert_into(post_image::table)
        .values(form)
        .get_result::<Self>(conn)?,
    )
  }

  /// Images of a post in strip order.
  pub fn for_post(conn: &mut SqliteConnection, post_id: PostId) -> BeansResult<Vec<Self>> {
    Ok(
      post_image::table
        .filter(post_image::post_id.eq(post_id))
        .order((post_image::position.asc(), post_image::id.asc()))
        .load::<Self>(conn)?,
    )
  }

  pub fn for_posts(
    conn: &mut SqliteConnection,
    post_ids: &[PostId],
  ) -> BeansResult<Vec<Self>> {
    Ok(
      post_image::table
        .filter(post_image::post_id.eq_any(post_ids.to_vec()))
        .order((post_image::position.asc(), post_image::id.asc()))
        .load::<Self>(conn)?,
    )
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    impls::{post::tests::test_post_form, user::tests::test_user_form},
    naive_now,
    newtypes::{PostId, StorageKey},
    source::{
      post::Post,
      post_image::{PostImage, PostImageInsertForm},
      user::User,
    },
    traits::Crud,
    utils::establish_test_connection,
  };
  use pretty_assertions::assert_eq;

  pub(crate) fn test_image_form(post_id: PostId, key: &str, position: i32) -> PostImageInsertForm {
    PostImageInsertForm {
      post_id,
      object_key: StorageKey(key.into()),
      content_type: "image/jpeg".into(),
      position,
      published: naive_now(),
    }
  }

  #[test]
  fn test_strip_order() {
    let conn = &mut establish_test_connection();
    let creator = User::create(conn, &test_user_form("terry", "auth|terry")).unwrap();
    let inserted_post = Post::create(conn, &test_post_form(creator.id)).unwrap();

    PostImage::create(conn, &test_image_form(inserted_post.id, "b.jpg", 1)).unwrap();
    PostImage::create(conn, &test_image_form(inserted_post.id, "a.jpg", 0)).unwrap();

    let images = PostImage::for_post(conn, inserted_post.id).unwrap();
    let keys: Vec<&str> = images.iter().map(|i| i.object_key.0.as_str()).collect();
    assert_eq!(vec!["a.jpg", "b.jpg"], keys);
  }

  #[test]
  fn test_post_delete_cascades_images() {
    let conn = &mut establish_test_connection();
    let creator = User::create(conn, &test_user_form("terry", "auth|terry")).unwrap();
    let inserted_post = Post::create(conn, &test_post_form(creator.id)).unwrap();

    for (position, key) in ["a.jpg", "b.jpg", "c.jpg"].iter().enumerate() {
      PostImage::create(
        conn,
        &test_image_form(inserted_post.id, key, position as i32),
      )
      .unwrap();
    }
    assert_eq!(3, PostImage::for_post(conn, inserted_post.id).unwrap().len());

    Post::delete(conn, inserted_post.id).unwrap();
    assert_eq!(0, PostImage::for_post(conn, inserted_post.id).unwrap().len());
  }
}
