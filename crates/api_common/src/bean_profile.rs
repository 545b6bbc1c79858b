use beans_db_schema::{newtypes::BeanProfileId, source::bean_profile::BeanProfile};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBeanProfile {
  pub auth: String,
  pub name: String,
  pub origin: Option<String>,
  pub producer: Option<String>,
  pub farm: Option<String>,
  pub process: Option<String>,
  pub variety: Option<String>,
  pub elevation: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditBeanProfile {
  pub auth: String,
  pub id: BeanProfileId,
  pub name: Option<String>,
  pub origin: Option<String>,
  pub producer: Option<String>,
  pub farm: Option<String>,
  pub process: Option<String>,
  pub variety: Option<String>,
  pub elevation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBeanProfile {
  pub auth: String,
  pub id: BeanProfileId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeanProfileResponse {
  pub bean_profile: BeanProfile,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteBeanProfileResponse {
  pub id: BeanProfileId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBeanProfiles {
  pub auth: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBeanProfilesResponse {
  pub items: Vec<BeanProfile>,
}
