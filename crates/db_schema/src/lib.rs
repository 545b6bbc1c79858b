pub mod impls;
pub mod newtypes;
pub mod schema;
pub mod source;
pub mod storage;
pub mod traits;
pub mod utils;

use chrono::NaiveDateTime;

pub fn naive_now() -> NaiveDateTime {
  chrono::Utc::now().naive_utc()
}
