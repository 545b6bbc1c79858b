use beans_api_common::{
  context::AppContext,
  device::{DeviceTokenResponse, RegisterDeviceToken},
  utils::require_user,
};
use beans_db_schema::{
  naive_now,
  source::device_token::{DeviceToken, DeviceTokenForm},
};
use beans_utils::error::BeansResult;

#[tracing::instrument(skip(context))]
pub fn register_device(
  data: &RegisterDeviceToken,
  context: &AppContext,
) -> BeansResult<DeviceTokenResponse> {
  let conn = &mut context.conn()?;
  let user = require_user(conn, &data.auth)?;

  let device_token = DeviceToken::register(
    conn,
    &DeviceTokenForm {
      user_id: user.id,
      token: data.token.clone(),
      platform: data.platform,
      published: naive_now(),
    },
  )?;

  Ok(DeviceTokenResponse { device_token })
}
