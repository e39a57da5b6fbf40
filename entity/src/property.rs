use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub kind: PropertyKind,
    pub location: String,
    pub price: i64,
    pub area_sqft: i64,
    pub beds: u8,
    pub baths: u8,
    pub amenities: Vec<String>,
    pub lat: f64,
    pub lng: f64,
    pub owner_name: String,
    pub owner_phone: String,
    pub images: Vec<String>,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PropertyKind {
    Apartment,
    Villa,
    Plot,
    Commercial,
}

impl PropertyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Apartment => "APARTMENT",
            PropertyKind::Villa => "VILLA",
            PropertyKind::Plot => "PLOT",
            PropertyKind::Commercial => "COMMERCIAL",
        }
    }
}
