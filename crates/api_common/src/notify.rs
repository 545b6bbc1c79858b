use crate::context::AppContext;
use beans_db_schema::{newtypes::UserId, source::comment::Comment};
use beans_utils::error::BeansResult;
use std::sync::Mutex;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushNotification {
  pub recipient_id: UserId,
  pub body: String,
  /// In-app path the notification opens, like `/post/12`.
  pub path: String,
}

/// The push delivery seam. Delivery semantics (retry, dedup, token fan-out)
/// live entirely behind it.
pub trait Notifier: Send + Sync {
  fn send(&self, notification: &PushNotification) -> BeansResult<()>;
}

/// Drops everything. For local runs without a push provider.
pub struct NullNotifier;

impl Notifier for NullNotifier {
  fn send(&self, _notification: &PushNotification) -> BeansResult<()> {
    Ok(())
  }
}

/// Records notifications instead of delivering them, so tests can assert on
/// the fan-out.
#[derive(Default)]
pub struct CapturingNotifier {
  sent: Mutex<Vec<PushNotification>>,
}

impl CapturingNotifier {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn take(&self) -> Vec<PushNotification> {
    self
      .sent
      .lock()
      .map(|mut sent| std::mem::take(&mut *sent))
      .unwrap_or_default()
  }
}

impl Notifier for CapturingNotifier {
  fn send(&self, notification: &PushNotification) -> BeansResult<()> {
    if let Ok(mut sent) = self.sent.lock() {
      sent.push(notification.clone());
    }
    Ok(())
  }
}

/// Fire-and-forget fan-out to everyone a fresh comment mentions. The comment
/// already exists by the time this runs, so delivery failures are logged and
/// swallowed, never bubbled into the create response.
pub fn send_mention_notifications(
  recipient_ids: &[UserId],
  creator_name: &str,
  comment: &Comment,
  context: &AppContext,
) {
  for &recipient_id in recipient_ids {
    // no self-notification for people who mention themselves
    if recipient_id == comment.creator_id {
      continue;
    }
    let notification = PushNotification {
      recipient_id,
      body: format!("{creator_name} mentioned you in a comment"),
      path: format!("/post/{}", comment.post_id),
    };
    if let Err(e) = context.notifier().send(&notification) {
      warn!(
        "couldnt deliver mention notification to user {}: {}",
        recipient_id, e
      );
    }
  }
}
