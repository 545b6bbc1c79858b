/// A page load in flight. The ticket remembers which screen generation
/// issued it and which cursor it asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
  generation: u64,
  cursor: Option<String>,
}

#[derive(Debug, Clone)]
struct Page<T> {
  cursor: Option<String>,
  items: Vec<T>,
}

/// Pages of the feed a screen has loaded so far. Responses are only applied
/// if the screen that asked is still the one showing: leaving bumps the
/// generation, and anything in flight lands dead. Re-applying the same
/// cursor replaces that page instead of appending a duplicate, which makes
/// load-more idempotent under retries.
#[derive(Debug, Clone)]
pub struct FeedPager<T> {
  generation: u64,
  pages: Vec<Page<T>>,
}

impl<T> FeedPager<T> {
  pub fn new() -> Self {
    Self {
      generation: 0,
      pages: Vec::new(),
    }
  }

  /// `cursor` is `None` for the first page, or the opaque continuation
  /// token for a load-more.
  pub fn begin_load(&self, cursor: Option<String>) -> LoadTicket {
    LoadTicket {
      generation: self.generation,
      cursor,
    }
  }

  /// Applies a finished load. Returns false (and changes nothing) when the
  /// response is stale.
  pub fn apply(&mut self, ticket: &LoadTicket, items: Vec<T>) -> bool {
    if ticket.generation != self.generation {
      return false;
    }
    match self.pages.iter_mut().find(|p| p.cursor == ticket.cursor) {
      Some(page) => page.items = items,
      None => self.pages.push(Page {
        cursor: ticket.cursor.clone(),
        items,
      }),
    }
    true
  }

  /// The screen went away. Whatever is still in flight will be discarded.
  pub fn reset(&mut self) {
    self.generation += 1;
    self.pages.clear();
  }

  pub fn items(&self) -> impl Iterator<Item = &T> {
    self.pages.iter().flat_map(|p| p.items.iter())
  }

  pub fn len(&self) -> usize {
    self.pages.iter().map(|p| p.items.len()).sum()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl<T> Default for FeedPager<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_load_more_appends() {
    let mut pager: FeedPager<i32> = FeedPager::new();

    let first = pager.begin_load(None);
    assert!(pager.apply(&first, vec![5, 4]));

    let more = pager.begin_load(Some("P4".into()));
    assert!(pager.apply(&more, vec![3, 2]));

    assert_eq!(vec![5, 4, 3, 2], pager.items().copied().collect::<Vec<_>>());
  }

  #[test]
  fn test_duplicate_load_more_is_idempotent() {
    let mut pager: FeedPager<i32> = FeedPager::new();
    pager.apply(&pager.begin_load(None), vec![5, 4]);

    let more = pager.begin_load(Some("P4".into()));
    assert!(pager.apply(&more, vec![3, 2]));
    // the retry of the same cursor replaces, it does not duplicate
    let retry = pager.begin_load(Some("P4".into()));
    assert!(pager.apply(&retry, vec![3, 2]));

    assert_eq!(4, pager.len());
  }

  #[test]
  fn test_stale_response_after_navigation_is_discarded() {
    let mut pager: FeedPager<i32> = FeedPager::new();
    let ticket = pager.begin_load(None);

    // the user navigates away before the response lands
    pager.reset();

    assert!(!pager.apply(&ticket, vec![9, 8]));
    assert!(pager.is_empty());

    // the new screen's own load works
    let fresh = pager.begin_load(None);
    assert!(pager.apply(&fresh, vec![7]));
    assert_eq!(1, pager.len());
  }
}
