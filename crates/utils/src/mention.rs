use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

static MENTIONS_REGEX: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"@(?P<name>\w+)").expect("compile regex"));

/// A display-name mention scraped out of comment text, like `@dana`.
///
/// Display names are not unique, so a mention is only a candidate until it is
/// resolved against the user table.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct MentionData {
  pub name: String,
}

impl MentionData {
  pub fn full_name(&self) -> String {
    format!("@{}", &self.name)
  }
}

/// Returns the distinct mention tokens of `text` in first-seen order.
pub fn scrape_text_for_mentions(text: &str) -> Vec<MentionData> {
  let mut out: Vec<MentionData> = Vec::new();
  for caps in MENTIONS_REGEX.captures_iter(text) {
    out.push(MentionData {
      name: caps["name"].to_string(),
    });
  }
  out.into_iter().unique().collect()
}
