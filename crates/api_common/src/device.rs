use beans_db_schema::source::device_token::{DeviceToken, PushPlatform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDeviceToken {
  pub auth: String,
  pub token: String,
  pub platform: PushPlatform,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceTokenResponse {
  pub device_token: DeviceToken,
}
