use beans_db_schema::{
  newtypes::GearId,
  source::gear::{Gear, GearType},
};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGear {
  pub auth: String,
  pub name: String,
  pub kind: GearType,
  pub details: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditGear {
  pub auth: String,
  pub id: GearId,
  pub name: Option<String>,
  pub kind: Option<GearType>,
  pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteGear {
  pub auth: String,
  pub id: GearId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GearResponse {
  pub gear: Gear,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteGearResponse {
  pub id: GearId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListGear {
  pub auth: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListGearResponse {
  pub items: Vec<Gear>,
}
