use beans_api_common::{
  context::AppContext,
  post::{GetFeed, GetFeedResponse},
};
use beans_db_views::post_view::PostQuery;
use beans_utils::error::BeansResult;

#[tracing::instrument(skip(context))]
pub fn get_feed(data: &GetFeed, context: &AppContext) -> BeansResult<GetFeedResponse> {
  let conn = &mut context.conn()?;
  let page = PostQuery {
    creator_id: data.creator_id,
    cursor: data.cursor.clone(),
    limit: data.limit,
  }
  .list(conn, context.object_store())?;
  Ok(GetFeedResponse {
    posts: page.posts,
    next_page: page.next_page,
  })
}
