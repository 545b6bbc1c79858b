use beans_utils::utils::generate_random_string;
use std::time::{Duration, Instant};

/// How long a prediction may wait for its authoritative answer before the
/// sweep rolls it back anyway.
pub const DEFAULT_PENDING_TTL: Duration = Duration::from_secs(30);

/// Client-generated token correlating an optimistic entry with the
/// authoritative response that settles it. Carried to the server (the
/// `form_id` on comment creation) and echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationToken(pub String);

impl CorrelationToken {
  pub fn generate() -> Self {
    Self(generate_random_string())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EntryState {
  Committed,
  Pending {
    token: CorrelationToken,
    queued_at: Instant,
  },
}

#[derive(Debug, Clone)]
struct Entry<T> {
  value: T,
  state: EntryState,
}

/// A locally cached list with optimistic entries layered in. An optimistic
/// entry is a prediction, not a commit: every one either promotes (replaced
/// in place by the authoritative record, matched by token), rejects (removed,
/// error surfaced exactly once by the caller), or expires via [`sweep`].
///
/// [`sweep`]: OptimisticList::sweep
#[derive(Debug, Clone)]
pub struct OptimisticList<T> {
  entries: Vec<Entry<T>>,
  ttl: Duration,
}

impl<T: Clone> OptimisticList<T> {
  pub fn new() -> Self {
    Self::with_ttl(DEFAULT_PENDING_TTL)
  }

  pub fn with_ttl(ttl: Duration) -> Self {
    Self {
      entries: Vec::new(),
      ttl,
    }
  }

  /// Replaces the committed entries with a fresh server page. Predictions
  /// still in flight stay visible after it.
  pub fn load(&mut self, values: Vec<T>) {
    let pending: Vec<Entry<T>> = self
      .entries
      .drain(..)
      .filter(|e| e.state != EntryState::Committed)
      .collect();
    self.entries = values
      .into_iter()
      .map(|value| Entry {
        value,
        state: EntryState::Committed,
      })
      .collect();
    self.entries.extend(pending);
  }

  pub fn push_committed(&mut self, value: T) {
    self.entries.push(Entry {
      value,
      state: EntryState::Committed,
    });
  }

  /// Shows `value` immediately and returns the token to send along with the
  /// mutation.
  pub fn push_pending(&mut self, value: T) -> CorrelationToken {
    let token = CorrelationToken::generate();
    self.entries.push(Entry {
      value,
      state: EntryState::Pending {
        token: token.clone(),
        queued_at: Instant::now(),
      },
    });
    token
  }

  /// Settles a prediction with the authoritative record, in place, so the
  /// entry keeps its position in the visible list.
  pub fn promote(&mut self, token: &CorrelationToken, authoritative: T) -> bool {
    match self.position(token) {
      Some(index) => {
        self.entries[index] = Entry {
          value: authoritative,
          state: EntryState::Committed,
        };
        true
      }
      None => false,
    }
  }

  /// Rolls a prediction back. Returns the discarded value the first time,
  /// `None` after, so the caller surfaces the failure exactly once.
  pub fn reject(&mut self, token: &CorrelationToken) -> Option<T> {
    let index = self.position(token)?;
    Some(self.entries.remove(index).value)
  }

  /// Rolls back every prediction older than the ttl and returns their
  /// tokens. The safety net under lost responses; call it on a timer.
  pub fn sweep(&mut self, now: Instant) -> Vec<CorrelationToken> {
    let ttl = self.ttl;
    let mut expired = Vec::new();
    self.entries.retain(|entry| match &entry.state {
      EntryState::Pending { token, queued_at }
        if now.saturating_duration_since(*queued_at) >= ttl =>
      {
        expired.push(token.clone());
        false
      }
      _ => true,
    });
    expired
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.entries.iter().map(|e| &e.value)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn has_pending(&self) -> bool {
    self
      .entries
      .iter()
      .any(|e| e.state != EntryState::Committed)
  }

  fn position(&self, token: &CorrelationToken) -> Option<usize> {
    self.entries.iter().position(|e| {
      matches!(&e.state, EntryState::Pending { token: t, .. } if t == token)
    })
  }
}

impl<T: Clone> Default for OptimisticList<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_promote_keeps_position() {
    let mut list: OptimisticList<String> = OptimisticList::new();
    list.load(vec!["first".into(), "second".into()]);

    let token = list.push_pending("mine (sending)".into());
    assert_eq!(3, list.len());
    assert!(list.has_pending());

    assert!(list.promote(&token, "mine".into()));
    assert!(!list.has_pending());
    let visible: Vec<&String> = list.iter().collect();
    assert_eq!(vec!["first", "second", "mine"], visible);

    // the token is spent
    assert!(!list.promote(&token, "again".into()));
  }

  #[test]
  fn test_reject_rolls_back_and_surfaces_once() {
    let mut list: OptimisticList<String> = OptimisticList::new();
    list.load(vec!["first".into()]);
    let before = list.len();

    let token = list.push_pending("doomed".into());
    assert_eq!(before + 1, list.len());

    // network failure: the prediction disappears and the caller gets the
    // discarded value exactly once to drive a single toast
    assert_eq!(Some("doomed".to_string()), list.reject(&token));
    assert_eq!(before, list.len());
    assert_eq!(None, list.reject(&token));
  }

  #[test]
  fn test_sweep_expires_stale_predictions() {
    let mut list: OptimisticList<String> = OptimisticList::with_ttl(Duration::ZERO);
    list.load(vec!["first".into()]);
    let token = list.push_pending("lost in transit".into());

    let expired = list.sweep(Instant::now());
    assert_eq!(vec![token], expired);
    assert_eq!(1, list.len());

    // nothing left to expire
    assert!(list.sweep(Instant::now()).is_empty());
  }

  #[test]
  fn test_load_preserves_in_flight_predictions() {
    let mut list: OptimisticList<String> = OptimisticList::new();
    list.load(vec!["a".into()]);
    let token = list.push_pending("pending".into());

    // a background refresh lands mid-flight
    list.load(vec!["a".into(), "b".into()]);
    let visible: Vec<&String> = list.iter().collect();
    assert_eq!(vec!["a", "b", "pending"], visible);

    assert!(list.promote(&token, "pending".into()));
  }

  #[test]
  fn test_tokens_are_unique() {
    let mut list: OptimisticList<i32> = OptimisticList::new();
    let a = list.push_pending(1);
    let b = list.push_pending(2);
    assert_ne!(a, b);
  }
}
