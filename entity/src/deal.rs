use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub lead_id: String,
    pub property_id: String,
    pub stage: DealStage,
    pub value: i64,
    pub agent_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The ordered sales pipeline. Aggregations emit one row per member in
/// this order even when a stage holds no deals.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DealStage {
    Inquiry,
    Qualified,
    Visit,
    Negotiation,
    Legal,
    Closed,
}

impl DealStage {
    pub const ALL: [DealStage; 6] = [
        DealStage::Inquiry,
        DealStage::Qualified,
        DealStage::Visit,
        DealStage::Negotiation,
        DealStage::Legal,
        DealStage::Closed,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DealStage::Inquiry => "INQUIRY",
            DealStage::Qualified => "QUALIFIED",
            DealStage::Visit => "VISIT",
            DealStage::Negotiation => "NEGOTIATION",
            DealStage::Legal => "LEGAL",
            DealStage::Closed => "CLOSED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DealStage::Inquiry => "Inquiry",
            DealStage::Qualified => "Qualified",
            DealStage::Visit => "Visit Scheduled",
            DealStage::Negotiation => "Negotiation",
            DealStage::Legal => "Legal Review",
            DealStage::Closed => "Closed Won",
        }
    }

    pub fn sort_order(&self) -> i16 {
        Self::ALL
            .iter()
            .position(|stage| stage == self)
            .unwrap_or_default() as i16
    }
}
