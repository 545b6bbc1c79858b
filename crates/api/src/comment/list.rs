use beans_api_common::{
  comment::{ListComments, ListCommentsResponse},
  context::AppContext,
};
use beans_db_views::structs::CommentView;
use beans_utils::error::BeansResult;

#[tracing::instrument(skip(context))]
pub fn list_comments(
  data: &ListComments,
  context: &AppContext,
) -> BeansResult<ListCommentsResponse> {
  let conn = &mut context.conn()?;
  let comments = CommentView::for_post(conn, context.object_store(), data.post_id)?;
  Ok(ListCommentsResponse { comments })
}
