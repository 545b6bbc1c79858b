use crate::{
  newtypes::UserId,
  schema::device_token,
  source::device_token::{DeviceToken, DeviceTokenForm},
};
use beans_utils::error::{BeansError, BeansResult};
use diesel::{insert_into, prelude::*};

impl DeviceToken {
  /// Registers a device for push delivery. A token already registered to
  /// another user moves over, revoking the previous owner's targeting.
  pub fn register(conn: &mut SqliteConnection, form: &DeviceTokenForm) -> BeansResult<Self> {
    conn.transaction::<_, BeansError, _>(|conn| {
      diesel::delete(device_token::table.filter(device_token::token.eq(&form.token)))
        .execute(conn)?;
      Ok(
        insert_into(device_token::table)
          .values(form)
          .get_result::<Self>(conn)?,
      )
    })
  }

  pub fn for_user(conn: &mut SqliteConnection, user_id: UserId) -> BeansResult<Vec<Self>> {
    Ok(
      device_token::table
        .filter(device_token::user_id.eq(user_id))
        .load::<Self>(conn)?,
    )
  }
}

#[cfg(test)]
mod tests {
  use crate::{
    impls::user::tests::test_user_form,
    naive_now,
    source::{
      device_token::{DeviceToken, DeviceTokenForm, PushPlatform},
      user::User,
    },
    traits::Crud,
    utils::establish_test_connection,
  };
  use pretty_assertions::assert_eq;

  #[test]
  fn test_reregistration_transfers_ownership() {
    let conn = &mut establish_test_connection();
    let terry = User::create(conn, &test_user_form("terry", "auth|terry")).unwrap();
    let dana = User::create(conn, &test_user_form("dana", "auth|dana")).unwrap();

    let form = DeviceTokenForm {
      user_id: terry.id,
      token: "apns-abc123".into(),
      platform: PushPlatform::Ios,
      published: naive_now(),
    };
    DeviceToken::register(conn, &form).unwrap();
    assert_eq!(1, DeviceToken::for_user(conn, terry.id).unwrap().len());

    // the same physical device signs in as dana
    DeviceToken::register(
      conn,
      &DeviceTokenForm {
        user_id: dana.id,
        ..form
      },
    )
    .unwrap();

    assert_eq!(0, DeviceToken::for_user(conn, terry.id).unwrap().len());
    let danas = DeviceToken::for_user(conn, dana.id).unwrap();
    assert_eq!(1, danas.len());
    assert_eq!("apns-abc123", danas[0].token);
  }
}
