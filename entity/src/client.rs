use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::property::PropertyKind;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferences: Preferences,
    /// References into the property collection. Entries may dangle after a
    /// listing is withdrawn; resolution drops them silently.
    pub saved_property_ids: Vec<String>,
    pub loyalty_points: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub property_kinds: Vec<PropertyKind>,
    pub locations: Vec<String>,
    pub budget_min: i64,
    pub budget_max: i64,
    pub amenities: Vec<String>,
}
