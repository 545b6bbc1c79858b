use beans_api_common::{
  context::AppContext,
  post::{CreatePostLike, DeletePostLike, PostResponse},
  utils::require_user,
};
use beans_db_schema::{
  source::post::{Post, PostLike, PostLikeForm},
  traits::{Crud, Likeable},
};
use beans_db_views::structs::PostView;
use beans_utils::error::{BeansErrorExt2, BeansErrorType, BeansResult};

#[tracing::instrument(skip(context))]
pub fn like_post(data: &CreatePostLike, context: &AppContext) -> BeansResult<PostResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  let post =
    Post::read(conn, data.post_id).with_beans_type(BeansErrorType::CouldntFindPost)?;

  let like_form = PostLikeForm::new(user.id, post.id);
  PostLike::like(conn, &like_form)?;

  let post_view = PostView::read(conn, context.object_store(), post.id)?;
  Ok(PostResponse { post_view })
}

#[tracing::instrument(skip(context))]
pub fn unlike_post(data: &DeletePostLike, context: &AppContext) -> BeansResult<PostResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  let post =
    Post::read(conn, data.post_id).with_beans_type(BeansErrorType::CouldntFindPost)?;

  PostLike::remove(conn, user.id, post.id)?;

  let post_view = PostView::read(conn, context.object_store(), post.id)?;
  Ok(PostResponse { post_view })
}
