use crate::newtypes::UserId;
use beans_utils::error::BeansResult;
use diesel::sqlite::SqliteConnection;

pub trait Crud {
  type InsertForm;
  type UpdateForm;
  type IdType;
  fn create(conn: &mut SqliteConnection, form: &Self::InsertForm) -> BeansResult<Self>
  where
    Self: Sized;
  fn read(conn: &mut SqliteConnection, id: Self::IdType) -> BeansResult<Self>
  where
    Self: Sized;
  /// To null out a column, send `Some(None)`; plain `None` leaves it alone.
  fn update(
    conn: &mut SqliteConnection,
    id: Self::IdType,
    form: &Self::UpdateForm,
  ) -> BeansResult<Self>
  where
    Self: Sized;
  fn delete(conn: &mut SqliteConnection, id: Self::IdType) -> BeansResult<usize>
  where
    Self: Sized;
}

/// A join entity with at most one row per (user, item) pair, plus a
/// denormalized counter on the item. Both methods run their existence check
/// and the counter write in one transaction, so the pair invariant holds
/// under concurrent double-taps.
pub trait Likeable {
  type Form;
  type IdType;
  fn like(conn: &mut SqliteConnection, form: &Self::Form) -> BeansResult<Self>
  where
    Self: Sized;
  fn remove(
    conn: &mut SqliteConnection,
    user_id: UserId,
    item_id: Self::IdType,
  ) -> BeansResult<usize>
  where
    Self: Sized;
}

pub trait Followable {
  type Form;
  fn follow(conn: &mut SqliteConnection, form: &Self::Form) -> BeansResult<Self>
  where
    Self: Sized;
  fn unfollow(conn: &mut SqliteConnection, form: &Self::Form) -> BeansResult<usize>
  where
    Self: Sized;
}
