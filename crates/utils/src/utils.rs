use rand::{distributions::Alphanumeric, thread_rng, Rng};

const DISPLAY_NAME_MAX_LENGTH: usize = 30;

pub fn generate_random_string() -> String {
  thread_rng()
    .sample_iter(&Alphanumeric)
    .map(char::from)
    .take(30)
    .collect()
}

fn has_newline(name: &str) -> bool {
  name.contains('\n')
}

// Can't do a regex here, reverse lookarounds not supported
pub fn is_valid_display_name(name: &str) -> bool {
  !name.starts_with('@')
    && !name.starts_with('\u{200b}')
    && name.chars().count() >= 3
    && name.chars().count() <= DISPLAY_NAME_MAX_LENGTH
    && !has_newline(name)
}
