use beans_api_common::{
  context::AppContext,
  post::{CreatePost, PostResponse},
  utils::require_user,
};
use beans_db_schema::{
  naive_now,
  source::{
    post::{Post, PostInsertForm, RecipeSteps},
    post_image::{PostImage, PostImageInsertForm},
  },
  traits::Crud,
};
use beans_db_views::structs::PostView;
use beans_utils::error::{BeansError, BeansErrorType, BeansResult};
use diesel::connection::Connection;

#[tracing::instrument(skip(context))]
pub fn create_post(data: &CreatePost, context: &AppContext) -> BeansResult<PostResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;

  // every image reference must resolve before the post may exist
  for image in &data.images {
    if context.object_store().resolve(&image.object_key).is_none() {
      return Err(BeansErrorType::ImageNotUploaded.into());
    }
  }

  let post = conn.transaction::<_, BeansError, _>(|conn| {
    let form = PostInsertForm {
      bean_name: data.bean_name.clone(),
      bean_profile_id: data.bean_profile_id,
      ratio: data.ratio.clone(),
      dose_grams: data.dose_grams,
      water_grams: data.water_grams,
      temperature: data.temperature,
      grind_setting: data.grind_setting.clone(),
      brewer_id: data.brewer_id,
      grinder_id: data.grinder_id,
      filter_id: data.filter_id,
      steps: RecipeSteps(data.steps.clone()),
      ..PostInsertForm::new(user.id, naive_now())
    };
    let post = Post::create(conn, &form)?;

    for (position, image) in data.images.iter().enumerate() {
      PostImage::create(
        conn,
        &PostImageInsertForm {
          post_id: post.id,
          object_key: image.object_key.clone(),
          content_type: image.content_type.clone(),
          position: position as i32,
          published: naive_now(),
        },
      )?;
    }
    Ok(post)
  })?;

  let post_view = PostView::read(conn, context.object_store(), post.id)?;
  Ok(PostResponse { post_view })
}
