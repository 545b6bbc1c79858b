use crate::reconcile::CorrelationToken;

/// The follow button's local state. The flip shows immediately, but only one
/// round trip may be in flight: while it is, [`FollowState::toggle`] refuses,
/// which is what keeps a rapid double-tap from interleaving follow and
/// unfollow arbitrarily.
#[derive(Debug, Clone)]
pub struct FollowState {
  committed: bool,
  pending: Option<PendingFlip>,
}

#[derive(Debug, Clone)]
struct PendingFlip {
  token: CorrelationToken,
  predicted: bool,
}

impl FollowState {
  pub fn new(is_following: bool) -> Self {
    Self {
      committed: is_following,
      pending: None,
    }
  }

  /// What the control renders right now: the prediction if one is in
  /// flight, the committed state otherwise.
  pub fn is_following(&self) -> bool {
    self
      .pending
      .as_ref()
      .map(|p| p.predicted)
      .unwrap_or(self.committed)
  }

  /// Whether the control is disabled waiting on the server.
  pub fn is_settling(&self) -> bool {
    self.pending.is_some()
  }

  /// Flips the predicted state and returns the token plus the value to send
  /// as the mutation, or `None` while a round trip is pending.
  pub fn toggle(&mut self) -> Option<(CorrelationToken, bool)> {
    if self.pending.is_some() {
      return None;
    }
    let token = CorrelationToken::generate();
    let predicted = !self.committed;
    self.pending = Some(PendingFlip {
      token: token.clone(),
      predicted,
    });
    Some((token, predicted))
  }

  /// The authoritative answer arrived.
  pub fn settle(&mut self, token: &CorrelationToken, is_following: bool) -> bool {
    match &self.pending {
      Some(pending) if pending.token == *token => {
        self.committed = is_following;
        self.pending = None;
        true
      }
      _ => false,
    }
  }

  /// The mutation failed: the prediction unwinds to the last committed
  /// state.
  pub fn rollback(&mut self, token: &CorrelationToken) -> bool {
    match &self.pending {
      Some(pending) if pending.token == *token => {
        self.pending = None;
        true
      }
      _ => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_optimistic_flip_and_settle() {
    let mut state = FollowState::new(false);

    let (token, predicted) = state.toggle().unwrap();
    assert!(predicted);
    assert!(state.is_following());
    assert!(state.is_settling());

    assert!(state.settle(&token, true));
    assert!(state.is_following());
    assert!(!state.is_settling());
  }

  #[test]
  fn test_double_tap_is_debounced() {
    let mut state = FollowState::new(false);

    let (token, _) = state.toggle().unwrap();
    // the second tap lands while the first is in flight
    assert!(state.toggle().is_none());

    state.settle(&token, true);
    // now the unfollow tap goes through
    let (_, predicted) = state.toggle().unwrap();
    assert!(!predicted);
  }

  #[test]
  fn test_rollback_restores_committed_state() {
    let mut state = FollowState::new(false);

    let (token, _) = state.toggle().unwrap();
    assert!(state.is_following());

    assert!(state.rollback(&token));
    assert!(!state.is_following());
    assert!(!state.is_settling());

    // a stale token does nothing
    assert!(!state.rollback(&token));
  }

  #[test]
  fn test_settle_with_unknown_token_is_ignored() {
    let mut state = FollowState::new(true);
    let stray = CorrelationToken::generate();
    assert!(!state.settle(&stray, false));
    assert!(state.is_following());
  }
}
