use beans_api_common::{
  context::AppContext,
  post::{GetPost, GetPostResponse},
};
use beans_db_views::structs::{CommentView, PostView};
use beans_utils::error::BeansResult;

/// The detail page: the assembled post plus its full comment list.
#[tracing::instrument(skip(context))]
pub fn get_post(data: &GetPost, context: &AppContext) -> BeansResult<GetPostResponse> {
  let conn = &mut context.conn()?;
  let post_view = PostView::read(conn, context.object_store(), data.id)?;
  let comments = CommentView::for_post(conn, context.object_store(), data.id)?;
  Ok(GetPostResponse {
    post_view,
    comments,
  })
}
