use beans_api_common::{
  comment::{DeleteComment, DeleteCommentResponse},
  context::AppContext,
  utils::{check_comment_creator, require_user},
};
use beans_db_schema::source::comment::Comment;
use beans_utils::error::{BeansErrorExt2, BeansErrorType, BeansResult};

#[tracing::instrument(skip(context))]
pub fn delete_comment(
  data: &DeleteComment,
  context: &AppContext,
) -> BeansResult<DeleteCommentResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;
  let comment = Comment::read(conn, data.comment_id)
    .with_beans_type(BeansErrorType::CouldntFindComment)?;
  check_comment_creator(&user, &comment)?;

  Comment::delete(conn, comment.id)?;
  Ok(DeleteCommentResponse { id: comment.id })
}
