use beans_api_common::{
  comment::{CommentResponse, CreateComment},
  context::AppContext,
  notify::send_mention_notifications,
  utils::require_user,
};
use beans_db_schema::{
  naive_now,
  newtypes::UserId,
  source::{
    comment::{Comment, CommentInsertForm, CommentMention, CommentMentionInsertForm},
    post::Post,
    user::User,
  },
  traits::Crud,
};
use beans_db_views::structs::CommentView;
use beans_utils::{
  error::{BeansErrorExt2, BeansErrorType, BeansResult},
  mention::scrape_text_for_mentions,
};

#[tracing::instrument(skip(context))]
pub fn create_comment(data: &CreateComment, context: &AppContext) -> BeansResult<CommentResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;

  let content = data.content.trim();
  if content.is_empty() {
    return Err(BeansErrorType::InvalidBodyField.into());
  }

  let post =
    Post::read(conn, data.post_id).with_beans_type(BeansErrorType::CouldntFindPost)?;

  let comment = Comment::create(
    conn,
    &CommentInsertForm {
      post_id: post.id,
      creator_id: user.id,
      content: content.to_string(),
      published: naive_now(),
    },
  )?;

  // Resolve @name tokens against display names at creation time; a token
  // with no matching user has no target and silently drops.
  let mut recipient_ids: Vec<UserId> = Vec::new();
  for mention in scrape_text_for_mentions(content) {
    if let Some(mentioned) = User::read_from_name(conn, &mention.name)? {
      if !recipient_ids.contains(&mentioned.id) {
        recipient_ids.push(mentioned.id);
      }
    }
  }
  for &recipient_id in &recipient_ids {
    CommentMention::create(
      conn,
      &CommentMentionInsertForm {
        comment_id: comment.id,
        recipient_id,
        published: naive_now(),
      },
    )?;
  }

  // the comment exists either way; delivery is fire-and-forget
  send_mention_notifications(&recipient_ids, &user.name, &comment, context);

  let comment_view = CommentView::read(conn, context.object_store(), comment.id)?;
  Ok(CommentResponse {
    comment_view,
    recipient_ids,
    form_id: data.form_id.clone(),
  })
}
